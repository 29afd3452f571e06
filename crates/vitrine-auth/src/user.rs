//! Administrator account documents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vitrine_db::Document;

/// An administrator account
///
/// The password is never stored: only its Argon2id hash. The hash stays out
/// of every serialized listing the manager hands back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
	/// Stable id (UUID)
	pub id: String,

	/// Login email; unique across the collection
	pub email: String,

	/// Argon2id PHC-format hash
	pub password_hash: String,

	/// Account creation timestamp
	pub created_at: DateTime<Utc>,
}

impl User {
	/// Build a user record around an already-computed hash.
	pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
		Self {
			id: Uuid::new_v4().simple().to_string(),
			email: email.into(),
			password_hash: password_hash.into(),
			created_at: Utc::now(),
		}
	}
}

impl Document for User {
	const COLLECTION: &'static str = "users";

	fn id(&self) -> &str {
		&self.id
	}
}
