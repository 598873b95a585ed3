//! Signed session tokens.
//!
//! Tokens are stateless: `base64url(claims).base64url(hmac_sha256(claims))`
//! with a fixed expiry. Nothing is stored server-side; possession of a token
//! with a valid signature and an unexpired window proves identity.

use base64::{Engine as _, engine::general_purpose};
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::error::{AppError, Result};

type HmacSha256 = Hmac<Sha256>;

/// The identity claims carried by a session token.
///
/// Inserted as a request extension by the auth middleware once the token has
/// been verified; handlers must never see claims from an unverified token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The ID of the authenticated user.
    pub sub: Uuid,
    /// The authenticated user's email.
    pub email: String,
    /// When the token was issued (unix seconds).
    pub iat: i64,
    /// When the token expires (unix seconds).
    pub exp: i64,
}

/// Mints and verifies signed session tokens.
pub struct TokenService {
    key: Zeroizing<Vec<u8>>,
    ttl_secs: i64,
}

impl TokenService {
    /// Creates a new `TokenService`.
    ///
    /// # Arguments
    ///
    /// * `key` - The HMAC signing key.
    /// * `ttl_secs` - The token lifetime in seconds.
    pub fn new(key: &[u8], ttl_secs: i64) -> Self {
        Self {
            key: Zeroizing::new(key.to_vec()),
            ttl_secs,
        }
    }

    /// Mints a signed token for the given identity.
    ///
    /// The token expires `ttl_secs` after issuance. Stateless: nothing is
    /// recorded anywhere.
    pub fn mint(&self, user_id: Uuid, email: &str) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_secs)).timestamp(),
        };

        let payload = sonic_rs::to_string(&claims)
            .map_err(|e| AppError::Internal(format!("Claims serialization failed: {}", e)))?;
        let payload_b64 = general_purpose::URL_SAFE_NO_PAD.encode(payload.as_bytes());
        let signature_b64 = self.sign(&payload_b64)?;

        Ok(format!("{}.{}", payload_b64, signature_b64))
    }

    /// Verifies a token and returns its claims.
    ///
    /// Returns `None` for anything that is not a well-formed, correctly
    /// signed, unexpired token. Malformed, tampered and expired tokens are
    /// indistinguishable to the caller, and no decoded-but-unverified data
    /// ever leaves this function.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        let (payload_b64, signature_b64) = token.split_once('.')?;

        let signature = general_purpose::URL_SAFE_NO_PAD.decode(signature_b64).ok()?;

        // Signature first. The payload is not even decoded until the MAC
        // checks out (constant-time comparison inside verify_slice).
        let mut mac = HmacSha256::new_from_slice(&self.key).ok()?;
        mac.update(payload_b64.as_bytes());
        if mac.verify_slice(&signature).is_err() {
            tracing::debug!("Token signature mismatch");
            return None;
        }

        let payload_bytes = general_purpose::URL_SAFE_NO_PAD.decode(payload_b64).ok()?;
        let claims: Claims = sonic_rs::from_slice(&payload_bytes).ok()?;

        if claims.exp <= Utc::now().timestamp() {
            tracing::debug!("Token expired for user: {}", claims.sub);
            return None;
        }

        Some(claims)
    }

    fn sign(&self, payload_b64: &str) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(&self.key)
            .map_err(|e| AppError::Internal(format!("HMAC key error: {}", e)))?;
        mac.update(payload_b64.as_bytes());
        let signature = mac.finalize().into_bytes();
        Ok(general_purpose::URL_SAFE_NO_PAD.encode(signature))
    }
}
