//! User management
//!
//! Creation enforces email uniqueness; authentication answers with the
//! public identity only and does not distinguish unknown-email from
//! wrong-password.

use bson::doc;
use serde::Serialize;
use std::sync::Arc;

use vitrine_core::{Error, Result};
use vitrine_db::{Document, DocumentBackend, Repository};

use crate::hasher::{Argon2Hasher, PasswordHasher};
use crate::session::SessionUser;
use crate::user::User;

/// Public listing entry; never carries the hash
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
	pub id: String,
	pub email: String,
	pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&User> for UserSummary {
	fn from(user: &User) -> Self {
		Self {
			id: user.id.clone(),
			email: user.email.clone(),
			created_at: user.created_at,
		}
	}
}

/// Account operations over the user collection
pub struct UserManager {
	repo: Repository<User>,
	hasher: Box<dyn PasswordHasher>,
}

impl UserManager {
	/// Create a manager with the default Argon2 hasher.
	pub fn new(backend: Arc<dyn DocumentBackend>) -> Self {
		Self {
			repo: Repository::new(backend),
			hasher: Box::new(Argon2Hasher::new()),
		}
	}

	/// Create a manager with a custom hasher.
	pub fn with_hasher(backend: Arc<dyn DocumentBackend>, hasher: Box<dyn PasswordHasher>) -> Self {
		Self {
			repo: Repository::new(backend),
			hasher,
		}
	}

	/// Create an account. Fails with `Duplicate` when the email is taken.
	pub async fn create(&self, email: &str, password: &str) -> Result<UserSummary> {
		let email = email.trim().to_lowercase();
		if email.is_empty() || !email.contains('@') {
			return Err(Error::Validation("invalid email address".to_string()));
		}
		if password.len() < 8 {
			return Err(Error::Validation(
				"password must be at least 8 characters".to_string(),
			));
		}

		if self.repo.exists(doc! { "email": email.as_str() }).await? {
			return Err(Error::Duplicate(format!("user {}", email)));
		}

		let hash = self.hasher.hash(password)?;
		let user = User::new(email, hash);
		self.repo.insert(&user).await?;

		tracing::info!(user = %user.email, "created admin account");
		Ok(UserSummary::from(&user))
	}

	/// Check credentials. Returns the session identity on success.
	pub async fn authenticate(&self, email: &str, password: &str) -> Result<Option<SessionUser>> {
		let email = email.trim().to_lowercase();
		let found = self
			.repo
			.backend()
			.find_one(User::COLLECTION, doc! { "email": email.as_str() })
			.await
			.map_err(vitrine_core::Error::from)?;

		let user: User = match found {
			Some(document) => bson::deserialize_from_document(document)
				.map_err(|e| Error::Serialization(e.to_string()))?,
			None => return Ok(None),
		};

		if self.hasher.verify(password, &user.password_hash)? {
			Ok(Some(SessionUser {
				id: user.id,
				email: user.email,
			}))
		} else {
			Ok(None)
		}
	}

	/// Replace a user's password.
	pub async fn change_password(&self, id: &str, new_password: &str) -> Result<()> {
		if new_password.len() < 8 {
			return Err(Error::Validation(
				"password must be at least 8 characters".to_string(),
			));
		}

		let mut user = self
			.repo
			.get(id)
			.await?
			.ok_or_else(|| Error::not_found("User"))?;

		user.password_hash = self.hasher.hash(new_password)?;
		self.repo.save(&user).await?;
		Ok(())
	}

	/// List accounts without hashes.
	pub async fn list(&self) -> Result<Vec<UserSummary>> {
		let users = self.repo.list().await?;
		Ok(users.iter().map(UserSummary::from).collect())
	}

	/// Delete an account by id.
	pub async fn delete(&self, id: &str) -> Result<()> {
		if self.repo.delete(id).await? {
			Ok(())
		} else {
			Err(Error::not_found("User"))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use vitrine_db::MemoryBackend;

	fn manager() -> UserManager {
		UserManager::new(Arc::new(MemoryBackend::new()))
	}

	#[tokio::test]
	async fn test_create_and_authenticate() {
		let manager = manager();
		manager
			.create("Admin@Example.com", "hunter2hunter2")
			.await
			.unwrap();

		// Emails are normalized to lowercase
		let identity = manager
			.authenticate("admin@example.com", "hunter2hunter2")
			.await
			.unwrap()
			.expect("credentials should be accepted");
		assert_eq!(identity.email, "admin@example.com");

		let rejected = manager
			.authenticate("admin@example.com", "wrong-password")
			.await
			.unwrap();
		assert!(rejected.is_none());

		let unknown = manager
			.authenticate("nobody@example.com", "hunter2hunter2")
			.await
			.unwrap();
		assert!(unknown.is_none());
	}

	#[tokio::test]
	async fn test_duplicate_email_rejected() {
		let manager = manager();
		manager.create("a@example.com", "password123").await.unwrap();

		let err = manager
			.create("a@example.com", "different-password")
			.await
			.unwrap_err();
		assert!(matches!(err, Error::Duplicate(_)));

		assert_eq!(manager.list().await.unwrap().len(), 1);
	}

	#[tokio::test]
	async fn test_validation() {
		let manager = manager();

		assert!(matches!(
			manager.create("not-an-email", "password123").await,
			Err(Error::Validation(_))
		));
		assert!(matches!(
			manager.create("a@example.com", "short").await,
			Err(Error::Validation(_))
		));
	}

	#[tokio::test]
	async fn test_change_password() {
		let manager = manager();
		let created = manager.create("a@example.com", "password123").await.unwrap();

		manager
			.change_password(&created.id, "new-password-456")
			.await
			.unwrap();

		assert!(manager
			.authenticate("a@example.com", "password123")
			.await
			.unwrap()
			.is_none());
		assert!(manager
			.authenticate("a@example.com", "new-password-456")
			.await
			.unwrap()
			.is_some());
	}

	#[tokio::test]
	async fn test_delete() {
		let manager = manager();
		let created = manager.create("a@example.com", "password123").await.unwrap();

		manager.delete(&created.id).await.unwrap();
		assert!(matches!(
			manager.delete(&created.id).await,
			Err(Error::NotFound(_))
		));
		assert!(manager.list().await.unwrap().is_empty());
	}
}
