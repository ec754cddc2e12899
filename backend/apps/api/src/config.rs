//! Server Configuration
//!
//! Read from the process environment (after `.env` has been loaded).
//!
//! | Variable | Default | Notes |
//! |---|---|---|
//! | `PORT` | `3000` | |
//! | `DATABASE_URL` | required | |
//! | `DATABASE_MAX_CONNECTIONS` | `5` | |
//! | `TOKEN_SECRET` | required in release | standard base64 of 32 bytes |
//! | `TOKEN_TTL_SECS` | `86400` | |
//! | `PASSWORD_PEPPER` | unset | raw bytes of the value |

use anyhow::{Context, bail};
use auth::AuthConfig;
use platform::crypto::from_base64;
use std::env;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Debug builds fall back to a random token secret when
    /// `TOKEN_SECRET` is unset; release builds refuse to start.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::load(cfg!(debug_assertions))
    }

    pub(crate) fn load(allow_random_secret: bool) -> anyhow::Result<Self> {
        let port = match env::var("PORT") {
            Ok(port) => port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {port:?}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let database_max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value
                .trim()
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let mut auth = match env::var("TOKEN_SECRET") {
            Ok(secret_b64) => AuthConfig {
                token_secret: decode_secret(&secret_b64)?,
                ..AuthConfig::default()
            },
            Err(_) if allow_random_secret => AuthConfig::development(),
            Err(_) => bail!("TOKEN_SECRET must be set in production"),
        };

        if let Ok(ttl) = env::var("TOKEN_TTL_SECS") {
            let secs = ttl
                .trim()
                .parse::<u64>()
                .context("TOKEN_TTL_SECS must be a number of seconds")?;
            if secs == 0 {
                bail!("TOKEN_TTL_SECS must be greater than zero");
            }
            auth.token_ttl = Duration::from_secs(secs);
        }

        auth.password_pepper = env::var("PASSWORD_PEPPER")
            .ok()
            .filter(|pepper| !pepper.is_empty())
            .map(String::into_bytes);

        Ok(Self {
            port,
            database_url,
            database_max_connections,
            auth,
        })
    }
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes =
        from_base64(secret_b64.trim()).context("TOKEN_SECRET must be standard base64")?;
    <[u8; 32]>::try_from(bytes.as_slice())
        .map_err(|_| anyhow::anyhow!("TOKEN_SECRET must decode to 32 bytes, got {}", bytes.len()))
}
