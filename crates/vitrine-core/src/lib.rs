//! # Vitrine Core
//!
//! Shared building blocks for the vitrine content backend: the unified
//! error taxonomy, the discriminated action-result envelope every admin
//! operation returns, and the media reference triple used across entities.

pub mod error;
pub mod media;
pub mod outcome;

pub use error::{Error, Result};
pub use media::MediaRef;
pub use outcome::ActionOutcome;
