//! SMTP connection settings.
//!
//! Read from the environment:
//!
//! | Variable       | Field          |
//! |----------------|----------------|
//! | `SMTP_HOST`    | `host`         |
//! | `SMTP_PORT`    | `port`         |
//! | `SMTP_USER`    | `username`     |
//! | `SMTP_PASS`    | `password`     |
//! | `REQUIRE_TLS`  | `require_tls` (only the value `on` enables it) |
//! | `SENDER_EMAIL` | `sender_email` |
//! | `SENDER_NAME`  | `sender_name`  |

use once_cell::sync::OnceCell;
use termkit_render::terminal::{EnvReader, RealEnv};

use crate::error::MailError;

/// Port used when `SMTP_PORT` is unset or empty.
pub const DEFAULT_SMTP_PORT: u16 = 587;

static GLOBAL: OnceCell<SmtpSettings> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub require_tls: bool,
    pub sender_email: String,
    pub sender_name: String,
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: DEFAULT_SMTP_PORT,
            username: String::new(),
            password: String::new(),
            require_tls: false,
            sender_email: String::new(),
            sender_name: String::new(),
        }
    }
}

impl SmtpSettings {
    /// Reads settings through `env`. Unset variables become empty strings.
    pub fn from_env(env: &dyn EnvReader) -> Result<Self, MailError> {
        let var = |name: &str| env.var(name).unwrap_or_default();

        let port = match env.var("SMTP_PORT") {
            None => DEFAULT_SMTP_PORT,
            Some(raw) if raw.trim().is_empty() => DEFAULT_SMTP_PORT,
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| MailError::InvalidPort(raw.clone()))?,
        };

        Ok(Self {
            host: var("SMTP_HOST"),
            port,
            username: var("SMTP_USER"),
            password: var("SMTP_PASS"),
            require_tls: env.var("REQUIRE_TLS").as_deref() == Some("on"),
            sender_email: var("SENDER_EMAIL"),
            sender_name: var("SENDER_NAME"),
        })
    }

    /// Settings from the process environment, read on first call and
    /// reused afterwards.
    pub fn global() -> Result<&'static SmtpSettings, MailError> {
        GLOBAL.get_or_try_init(|| {
            let settings = SmtpSettings::from_env(&RealEnv)?;
            tracing::debug!(host = %settings.host, port = settings.port, "loaded SMTP settings");
            Ok(settings)
        })
    }
}
