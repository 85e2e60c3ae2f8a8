//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` through `dotenvy` first, so every variable can also be
//! set there. Parsing goes through a lookup function so tests can feed a map
//! instead of mutating the process environment.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_INQUIRY_SUBJECT: &str = "New inquiry from Aricia Residences website";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {var}")]
    Missing { var: &'static str },
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Listener settings. Always available; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

/// Outbound email settings for the inquiry relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailerConfig {
    pub api_key: String,
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
}

impl ServerConfig {
    /// Read `PORT` (default 3000).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Same as [`Self::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_blank(&lookup, "PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::Invalid { var: "PORT", reason: e.to_string() })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { port })
    }
}

impl MailerConfig {
    /// Read the relay settings.
    ///
    /// Required:
    /// - `RESEND_API_KEY`
    /// - `INQUIRY_FROM`: sender address, e.g. `Aricia <inquiry@example.com>`
    /// - `INQUIRY_TO`: comma-separated recipients
    ///
    /// Optional:
    /// - `INQUIRY_SUBJECT`: default [`DEFAULT_INQUIRY_SUBJECT`]
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for an absent or blank required
    /// variable, and [`ConfigError::Invalid`] when `INQUIRY_TO` names no
    /// recipient.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Same as [`Self::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = required(&lookup, "RESEND_API_KEY")?;
        let from = required(&lookup, "INQUIRY_FROM")?;
        let to = parse_recipients(&required(&lookup, "INQUIRY_TO")?);
        if to.is_empty() {
            return Err(ConfigError::Invalid { var: "INQUIRY_TO", reason: "no recipients".into() });
        }
        let subject = non_blank(&lookup, "INQUIRY_SUBJECT").unwrap_or_else(|| DEFAULT_INQUIRY_SUBJECT.to_owned());
        Ok(Self { api_key, from, to, subject })
    }
}

/// Split a comma-separated address list, dropping blanks.
#[must_use]
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn non_blank(lookup: &impl Fn(&str) -> Option<String>, var: &str) -> Option<String> {
    lookup(var).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn required(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<String, ConfigError> {
    non_blank(lookup, var).ok_or(ConfigError::Missing { var })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
