//! # Vitrine Configuration
//!
//! Environment-driven settings for the content backend. All variables are
//! read under the `VITRINE_` prefix; everything except the session secret
//! has a development default.

mod env;
mod settings;

pub use env::{Env, EnvError};
pub use settings::Settings;
