//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the backend crates:
//! - Password policy and hashing (Argon2id, NIST SP 800-63B compliant)
//! - Keyed hashing and base64 helpers used for bearer tokens

pub mod crypto;
pub mod password;
