use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use zeroize::{Zeroize, Zeroizing};

use crate::storage::DeletePolicy;

/// The application's configuration.
#[derive(Clone)]
pub struct Config {
    /// The address the server binds to.
    pub bind_addr: SocketAddr,
    /// The lifetime of a session token in seconds.
    pub token_ttl_secs: i64,
    /// The secret key used to sign session tokens.
    pub secret_key: Zeroizing<Vec<u8>>,
    /// What happens to a board's tasks when the board is deleted.
    ///
    /// `orphan` (the default) leaves them in the store; `cascade` removes
    /// them together with the board.
    pub delete_policy: DeletePolicy,
}

impl Config {
    /// Creates a new `Config` from environment variables.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Config`.
    pub fn from_env() -> Result<Self> {
        let mut secret_key_hex = env::var("SECRET_KEY")
            .context("SECRET_KEY must be set (generate with: openssl rand -hex 32)")?;

        let secret_key_bytes =
            hex::decode(&secret_key_hex).context("SECRET_KEY must be valid hexadecimal")?;

        secret_key_hex.zeroize();

        if secret_key_bytes.len() != 32 {
            anyhow::bail!("SECRET_KEY must be exactly 32 bytes (64 hex characters)");
        }

        let delete_policy = match env::var("BOARD_DELETE_POLICY")
            .unwrap_or_else(|_| "orphan".to_string())
            .as_str()
        {
            "orphan" => DeletePolicy::Orphan,
            "cascade" => DeletePolicy::Cascade,
            other => anyhow::bail!(
                "BOARD_DELETE_POLICY must be 'orphan' or 'cascade', got '{}'",
                other
            ),
        };

        Ok(Self {
            bind_addr: env::var("BIND_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
                .parse()
                .context("Invalid BIND_ADDR")?,
            token_ttl_secs: env::var("TOKEN_TTL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .context("Invalid TOKEN_TTL_SECS")?,
            secret_key: Zeroizing::new(secret_key_bytes),
            delete_policy,
        })
    }
}
