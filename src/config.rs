//! Environment configuration for the kiosk server

use anyhow::{Context, Result};
use axum_extra::extract::cookie::Key;
use sqlx::postgres::PgConnectOptions;
use std::env;

/// Configuration read from the process environment after `.env` loading.
#[derive(Debug, Clone)]
pub struct Config {
    pub db: DatabaseConfig,
    pub session_secret: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let db = DatabaseConfig {
            host: var_or("DB_HOST", "localhost"),
            port: var_or("DB_PORT", "5432")
                .parse()
                .context("DB_PORT is not a valid port number")?,
            user: var_or("DB_USER", "postgres"),
            password: var_or("DB_PASSWORD", ""),
            name: var_or("DB_NAME", "transit_kiosk"),
        };

        // An empty secret would make the cookie key degenerate, treat it as unset.
        let session_secret = env::var("SESSION_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "your_secret_key".to_string());

        Ok(Config {
            db,
            session_secret,
            port: var_or("PORT", "3000")
                .parse()
                .context("PORT is not a valid port number")?,
        })
    }

    /// Signing key for the session cookie jar.
    ///
    /// `Key::from` wants at least 64 bytes of material; operator-supplied
    /// secrets are usually shorter, so the secret is repeated to length.
    pub fn session_key(&self) -> Key {
        let secret: &[u8] = if self.session_secret.is_empty() {
            b"your_secret_key"
        } else {
            self.session_secret.as_bytes()
        };
        let mut material = Vec::with_capacity(64 + secret.len());
        while material.len() < 64 {
            material.extend_from_slice(secret);
        }
        Key::from(&material)
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_key_accepts_short_secret() {
        let config = Config {
            db: DatabaseConfig {
                host: "localhost".to_string(),
                port: 5432,
                user: "postgres".to_string(),
                password: String::new(),
                name: "transit_kiosk".to_string(),
            },
            session_secret: "short".to_string(),
            port: 3000,
        };

        // Must not panic even though the secret is well under 64 bytes.
        let _ = config.session_key();
    }
}
