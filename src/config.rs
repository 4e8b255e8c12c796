//! Runtime configuration read from the environment (and `.env` via dotenvy).

use std::net::SocketAddr;

use crate::error::{AppError, Result};

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// ISO currency code attached to money in responses
    pub currency: String,
    /// Allow cross-origin calls from any origin (local front-end development)
    pub cors_allow_any: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            currency: "INR".to_string(),
            cors_allow_any: false,
        }
    }
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("PORT must be a port number, got '{}'", raw)))?,
            None => defaults.port,
        };

        let currency = match lookup("CURRENCY") {
            Some(raw) => {
                let code = raw.trim().to_uppercase();
                if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(AppError::Config(format!(
                        "CURRENCY must be a three-letter code, got '{}'",
                        raw
                    )));
                }
                code
            }
            None => defaults.currency,
        };

        let cors_allow_any = match lookup("CORS_ALLOW_ANY").as_deref() {
            None => defaults.cors_allow_any,
            Some("1") | Some("true") | Some("yes") => true,
            Some("0") | Some("false") | Some("no") => false,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "CORS_ALLOW_ANY must be true or false, got '{}'",
                    other
                )))
            }
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            currency,
            cors_allow_any,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid bind address {}:{}", self.host, self.port)))
    }
}
