//! Shared Kernel
//!
//! The smallest vocabulary shared by every backend crate:
//! - The unified HTTP-facing error type and result alias
//! - Typed identifiers
//!
//! Anything placed here must mean the same thing in every domain.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
