//! Aggregated application settings

use crate::env::{Env, EnvError};

/// Settings for the content backend
///
/// Read once at startup via [`Settings::from_env`] and passed by value to
/// the components that need them.
#[derive(Debug, Clone)]
pub struct Settings {
	/// Document store connection string
	pub database_url: String,

	/// Database name within the store
	pub database_name: String,

	/// Address the HTTP server binds to
	pub bind_addr: String,

	/// Key for signing session cookies; must be non-empty
	pub secret_key: String,

	/// Session lifetime in seconds
	pub session_ttl_secs: u64,
}

impl Settings {
	/// Load settings from `VITRINE_`-prefixed environment variables.
	///
	/// `VITRINE_SECRET_KEY` is mandatory; the rest default to local
	/// development values.
	pub fn from_env() -> Result<Self, EnvError> {
		let env = Env::new().with_prefix("VITRINE_");

		Ok(Self {
			database_url: env.str_with_default("DATABASE_URL", "mongodb://localhost:27017"),
			database_name: env.str_with_default("DATABASE_NAME", "vitrine"),
			bind_addr: env.str_with_default("BIND_ADDR", "127.0.0.1:8000"),
			secret_key: env.str("SECRET_KEY")?,
			session_ttl_secs: env.u64_with_default("SESSION_TTL_SECS", 7 * 24 * 3600)?,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;
	use std::env;

	#[test]
	#[serial]
	fn test_defaults_with_secret_set() {
		unsafe { env::set_var("VITRINE_SECRET_KEY", "test-secret") };

		let settings = Settings::from_env().unwrap();
		assert_eq!(settings.database_url, "mongodb://localhost:27017");
		assert_eq!(settings.database_name, "vitrine");
		assert_eq!(settings.bind_addr, "127.0.0.1:8000");
		assert_eq!(settings.session_ttl_secs, 7 * 24 * 3600);

		unsafe { env::remove_var("VITRINE_SECRET_KEY") };
	}

	#[test]
	#[serial]
	fn test_secret_key_is_mandatory() {
		unsafe { env::remove_var("VITRINE_SECRET_KEY") };
		assert!(Settings::from_env().is_err());
	}
}
