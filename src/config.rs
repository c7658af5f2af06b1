//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite://shorturl.db`,
//!   the file is created if missing)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public base used to build returned short URLs
//!   (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `MAX_ID_LENGTH` - Maximum identifier length (default: 16)
//! - `AUTH_TOKEN_LENGTH` - Generated auth token length (default: 16, max: 16)

use anyhow::Result;
use std::env;

use crate::utils::id_gen::ID_ALPHABET;

/// Identifier and token generation rules handed to the core components.
///
/// Core logic never reads process state; whoever constructs an allocator or
/// lifecycle service passes one of these in.
#[derive(Debug, Clone)]
pub struct IdPolicy {
    /// Inclusive upper bound on identifier length. Client-requested ids may
    /// use the full bound; automatically allocated ids stay below it.
    pub max_id_len: usize,
    /// Length of generated auth tokens.
    pub token_len: usize,
    /// Alphabet identifiers are drawn from and validated against.
    pub alphabet: String,
}

impl Default for IdPolicy {
    fn default() -> Self {
        Self {
            max_id_len: 16,
            token_len: 16,
            alphabet: ID_ALPHABET.to_string(),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub policy: IdPolicy,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://shorturl.db".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let mut policy = IdPolicy::default();

        if let Some(v) = env::var("MAX_ID_LENGTH").ok().and_then(|v| v.parse().ok()) {
            policy.max_id_len = v;
        }
        if let Some(v) = env::var("AUTH_TOKEN_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            policy.token_len = v;
        }

        Self {
            database_url,
            listen_addr,
            base_url,
            log_level,
            policy,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `DATABASE_URL` is not a SQLite connection string
    /// - `LISTEN` is not in `host:port` form
    /// - `MAX_ID_LENGTH` is outside 2..=64
    /// - `AUTH_TOKEN_LENGTH` is outside 1..=16
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        // The allocator probes lengths strictly below the bound, so it needs
        // at least one length to work with.
        if self.policy.max_id_len < 2 || self.policy.max_id_len > 64 {
            anyhow::bail!(
                "MAX_ID_LENGTH must be between 2 and 64, got {}",
                self.policy.max_id_len
            );
        }

        // The auth_token column is 16 chars wide.
        if self.policy.token_len == 0 || self.policy.token_len > 16 {
            anyhow::bail!(
                "AUTH_TOKEN_LENGTH must be between 1 and 16, got {}",
                self.policy.token_len
            );
        }

        if self.policy.alphabet.is_empty() {
            anyhow::bail!("identifier alphabet must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Max id length: {}", self.policy.max_id_len);
        tracing::info!("  Auth token length: {}", self.policy.token_len);
    }
}

/// Loads and validates configuration from environment variables.
///
/// Expects environment variables to be already loaded (e.g. via
/// `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
