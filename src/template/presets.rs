/// Built-in `.env` templates.
///
/// Templates are emitted byte-for-byte. `${VAR}` placeholders are left for the
/// environment-file loader that consumes the output (e.g. docker compose).
use clap::ValueEnum;

// The `#NodeJS` line carries trailing spaces; keep them in their own literal.
const FULL: &str = concat!(
    "
# Generated .env fill in missing env variables here:
#Mysql database
MYSQL_PASSWORD=
MYSQL_ROOT_PASSWORD=
# JWT configuration
# Strong secret required in production
JWT_SECRET=
# Token TTL (e.g. 1h, 24h)
JWT_TTL=1h
# Mailgun (for sending OTPs)
MAILGUN_API_KEY=
MAILGUN_DOMAIN=
# Redis connection (optional override). Default used in code: redis://redis:6379
REDIS_URL=redis://redis:6379
#_________________________
#Mysql database
MYSQL_DATABASE=rentwiseDB
MYSQL_USER=rentuser
DB_PORT=3307

",
    "#NodeJS",
    "                 ",
    "
NODE_ENV=development
DB_HOST=rentwiseDB
DB_USER=${MYSQL_USER}
DB_PASSWORD=${MYSQL_PASSWORD}
DB_NAME=${MYSQL_DATABASE}

# Application port
NODEJS_PORT=3000
",
);

const MINIMAL: &str = "
# Generated .env (passwords and secrets left empty — fill them before use)

# MySQL defaults
MYSQL_ROOT_PASSWORD=
MYSQL_DATABASE=rentwisesg
MYSQL_USER=rentuser
MYSQL_PASSWORD=

# Node service defaults
NODE_ENV=development
DB_HOST=mysqldb
DB_USER=${MYSQL_USER}
DB_PASSWORD=
DB_NAME=${MYSQL_DATABASE}

# Node app port (exposed in compose)
NODEJS_PORT=3000

# JWT configuration
# Strong secret required in production
JWT_SECRET=
# Token TTL (e.g. 1h, 24h)
JWT_TTL=1h
";

/// A named template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Preset {
    /// `MySQL`, JWT, Mailgun, Redis and Node settings.
    #[default]
    Full,
    /// `MySQL`, Node and JWT settings only.
    Minimal,
}

impl Preset {
    /// Every preset, in listing order.
    pub const ALL: [Self; 2] = [Self::Full, Self::Minimal];

    /// The template text, exactly as it is written to disk.
    #[must_use]
    pub fn template(self) -> &'static str {
        match self {
            Self::Full => FULL,
            Self::Minimal => MINIMAL,
        }
    }

    /// Name as accepted by `--preset`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Minimal => "minimal",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Full => "MySQL, JWT, Mailgun, Redis and Node settings",
            Self::Minimal => "MySQL, Node and JWT settings",
        }
    }

    /// Suffix of the confirmation printed after a write.
    #[must_use]
    pub fn note(self) -> &'static str {
        match self {
            Self::Full => "password fields left empty",
            Self::Minimal => "passwords and secrets left empty",
        }
    }

    /// `KEY=VALUE` lines of the template, in order.
    pub fn entries(self) -> impl Iterator<Item = Entry<'static>> {
        entries(self.template())
    }
}

/// One `KEY=VALUE` line of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub key: &'a str,
    /// Raw value; placeholders are not expanded.
    pub value: &'a str,
}

impl Entry<'_> {
    /// Whether the value is left for the user to fill in.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.is_empty()
    }
}

/// Iterate the `KEY=VALUE` lines of `text`, skipping blanks and `#` comments.
pub fn entries(text: &str) -> impl Iterator<Item = Entry<'_>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| Entry { key, value })
}
