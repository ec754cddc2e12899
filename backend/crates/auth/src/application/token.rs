//! Bearer Token Issuance
//!
//! Stateless tokens of the form `base64url(claims).base64url(signature)`,
//! where the signature is HMAC-SHA256 over the encoded claims segment.
//! Timestamps are Unix milliseconds.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platform::crypto::{constant_time_eq, from_base64_url, hmac_sha256, to_base64_url};

use crate::application::config::AuthConfig;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Claims carried inside a bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User ID
    pub sub: Uuid,
    pub role: UserRole,
    /// Issued at (ms)
    pub iat: i64,
    /// Expires at (ms)
    pub exp: i64,
}

/// Signs and verifies bearer tokens
#[derive(Clone)]
pub struct TokenIssuer {
    secret: [u8; 32],
    ttl_ms: i64,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.token_secret,
            ttl_ms: config.token_ttl_ms(),
        }
    }

    /// Issue a token valid from now for the configured TTL
    pub fn issue(&self, user_id: &UserId, role: UserRole) -> AuthResult<String> {
        self.issue_at(user_id, role, Utc::now().timestamp_millis())
    }

    pub fn issue_at(&self, user_id: &UserId, role: UserRole, now_ms: i64) -> AuthResult<String> {
        let claims = TokenClaims {
            sub: *user_id.as_uuid(),
            role,
            iat: now_ms,
            exp: now_ms.saturating_add(self.ttl_ms),
        };

        let payload = serde_json::to_vec(&claims)
            .map_err(|e| AuthError::Internal(format!("Token encoding failed: {}", e)))?;
        let payload = to_base64_url(&payload);
        let signature = to_base64_url(&hmac_sha256(&self.secret, payload.as_bytes()));

        Ok(format!("{}.{}", payload, signature))
    }

    /// Verify signature and expiry against the current time
    pub fn verify(&self, token: &str) -> AuthResult<TokenClaims> {
        self.verify_at(token, Utc::now().timestamp_millis())
    }

    pub fn verify_at(&self, token: &str, now_ms: i64) -> AuthResult<TokenClaims> {
        let (payload, signature) = token.split_once('.').ok_or(AuthError::InvalidToken)?;

        let signature = from_base64_url(signature).map_err(|_| AuthError::InvalidToken)?;
        let expected = hmac_sha256(&self.secret, payload.as_bytes());
        if !constant_time_eq(&signature, &expected) {
            return Err(AuthError::InvalidToken);
        }

        let payload = from_base64_url(payload).map_err(|_| AuthError::InvalidToken)?;
        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| AuthError::InvalidToken)?;

        if now_ms >= claims.exp {
            return Err(AuthError::InvalidToken);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("secret", &"[REDACTED]")
            .field("ttl_ms", &self.ttl_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const NOW: i64 = 1_760_000_000_000;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(&AuthConfig {
            token_ttl: Duration::from_secs(60),
            ..AuthConfig::with_random_secret()
        })
    }

    #[test]
    fn test_issue_and_verify() {
        let issuer = issuer();
        let user_id = UserId::new();
        let token = issuer.issue_at(&user_id, UserRole::Doctor, NOW).unwrap();

        let claims = issuer.verify_at(&token, NOW + 1_000).unwrap();
        assert_eq!(claims.sub, *user_id.as_uuid());
        assert_eq!(claims.role, UserRole::Doctor);
        assert_eq!(claims.iat, NOW);
        assert_eq!(claims.exp, NOW + 60_000);
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = issuer();
        let token = issuer.issue_at(&UserId::new(), UserRole::User, NOW).unwrap();
        assert!(matches!(
            issuer.verify_at(&token, NOW + 60_000),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let token = issuer().issue_at(&UserId::new(), UserRole::Admin, NOW).unwrap();
        assert!(matches!(
            issuer().verify_at(&token, NOW),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_tampered_claims_rejected() {
        let issuer = issuer();
        let token = issuer.issue_at(&UserId::new(), UserRole::Nurse, NOW).unwrap();
        let (_, signature) = token.split_once('.').unwrap();

        // Original signature, claims swapped for an admin
        let forged_claims = TokenClaims {
            sub: Uuid::new_v4(),
            role: UserRole::Admin,
            iat: NOW,
            exp: NOW + 60_000,
        };
        let forged = format!(
            "{}.{}",
            to_base64_url(&serde_json::to_vec(&forged_claims).unwrap()),
            signature
        );
        assert!(issuer.verify_at(&forged, NOW).is_err());
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let issuer = issuer();
        for token in ["", "no-dot", "a.b", "!!!.???"] {
            assert!(issuer.verify_at(token, NOW).is_err(), "{token:?}");
        }
    }
}
