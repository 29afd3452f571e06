//! Signed session cookies
//!
//! Sessions are stateless: the claims travel in the cookie itself,
//! authenticated with HMAC-SHA256. The wire format is
//! `base64url(claims_json).base64url(tag)`. Verification recomputes the tag
//! over the exact payload bytes and compares through the MAC's own
//! constant-time check, then enforces expiry.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use vitrine_core::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// Cookie name for the admin session
pub const SESSION_COOKIE: &str = "vitrine_session";

/// The identity carried by a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
	pub id: String,
	pub email: String,
}

/// Signed claims: the identity plus an expiry instant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
	pub user: SessionUser,
	pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
	/// Whether the claims are still within their lifetime.
	pub fn is_valid(&self) -> bool {
		Utc::now() < self.expires_at
	}
}

/// Issues and verifies signed session tokens
pub struct SessionSigner {
	key: Vec<u8>,
	ttl: Duration,
}

impl SessionSigner {
	/// Create a signer. Refuses an empty key.
	pub fn new(secret_key: &str, ttl_secs: u64) -> Result<Self> {
		if secret_key.is_empty() {
			return Err(Error::Configuration(
				"session secret key must not be empty".to_string(),
			));
		}

		Ok(Self {
			key: secret_key.as_bytes().to_vec(),
			ttl: Duration::seconds(ttl_secs as i64),
		})
	}

	fn mac(&self) -> HmacSha256 {
		// new_from_slice only fails on an empty key, which the constructor
		// rules out.
		HmacSha256::new_from_slice(&self.key).expect("HMAC accepts any non-empty key")
	}

	/// Issue a token for `user`, valid for the configured TTL.
	pub fn issue(&self, user: SessionUser) -> Result<String> {
		let claims = SessionClaims {
			user,
			expires_at: Utc::now() + self.ttl,
		};

		let payload = serde_json::to_vec(&claims)?;
		let encoded = URL_SAFE_NO_PAD.encode(&payload);

		let mut mac = self.mac();
		mac.update(encoded.as_bytes());
		let tag = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

		Ok(format!("{}.{}", encoded, tag))
	}

	/// Verify a token, returning the claims when the signature matches and
	/// the session has not expired.
	pub fn verify(&self, token: &str) -> Result<SessionClaims> {
		let (encoded, tag) = token
			.split_once('.')
			.ok_or_else(|| Error::Authentication("malformed session token".to_string()))?;

		let tag_bytes = URL_SAFE_NO_PAD
			.decode(tag)
			.map_err(|_| Error::Authentication("malformed session token".to_string()))?;

		let mut mac = self.mac();
		mac.update(encoded.as_bytes());
		mac.verify_slice(&tag_bytes)
			.map_err(|_| Error::Authentication("session signature mismatch".to_string()))?;

		let payload = URL_SAFE_NO_PAD
			.decode(encoded)
			.map_err(|_| Error::Authentication("malformed session token".to_string()))?;
		let claims: SessionClaims = serde_json::from_slice(&payload)?;

		if !claims.is_valid() {
			return Err(Error::Authentication("session expired".to_string()));
		}

		Ok(claims)
	}
}

/// Builds `Set-Cookie` header values for the session cookie
pub struct SessionCookie;

impl SessionCookie {
	/// Header value that installs `token` as an HttpOnly session cookie.
	pub fn set(token: &str, max_age_secs: u64) -> String {
		format!(
			"{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
			SESSION_COOKIE, token, max_age_secs
		)
	}

	/// Header value that clears the session cookie.
	pub fn clear() -> String {
		format!(
			"{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax",
			SESSION_COOKIE
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn signer() -> SessionSigner {
		SessionSigner::new("a-test-secret-key", 3600).unwrap()
	}

	fn user() -> SessionUser {
		SessionUser {
			id: "u1".to_string(),
			email: "admin@example.com".to_string(),
		}
	}

	#[test]
	fn test_empty_key_rejected() {
		assert!(matches!(
			SessionSigner::new("", 3600),
			Err(Error::Configuration(_))
		));
	}

	#[test]
	fn test_issue_verify_roundtrip() {
		let signer = signer();
		let token = signer.issue(user()).unwrap();

		let claims = signer.verify(&token).unwrap();
		assert_eq!(claims.user, user());
		assert!(claims.is_valid());
	}

	#[test]
	fn test_tampered_payload_rejected() {
		let signer = signer();
		let token = signer.issue(user()).unwrap();

		let (payload, tag) = token.split_once('.').unwrap();
		let forged_claims = SessionClaims {
			user: SessionUser {
				id: "u1".to_string(),
				email: "attacker@example.com".to_string(),
			},
			expires_at: Utc::now() + Duration::hours(1),
		};
		let forged_payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged_claims).unwrap());
		assert_ne!(forged_payload, payload);

		let forged = format!("{}.{}", forged_payload, tag);
		assert!(matches!(
			signer.verify(&forged),
			Err(Error::Authentication(_))
		));
	}

	#[test]
	fn test_tampered_tag_rejected() {
		let signer = signer();
		let token = signer.issue(user()).unwrap();
		let mut chars: Vec<char> = token.chars().collect();
		let last = *chars.last().unwrap();
		*chars.last_mut().unwrap() = if last == 'A' { 'B' } else { 'A' };
		let tampered: String = chars.into_iter().collect();

		assert!(signer.verify(&tampered).is_err());
	}

	#[test]
	fn test_wrong_key_rejected() {
		let token = signer().issue(user()).unwrap();
		let other = SessionSigner::new("a-different-secret", 3600).unwrap();

		assert!(matches!(
			other.verify(&token),
			Err(Error::Authentication(_))
		));
	}

	#[test]
	fn test_expired_session_rejected() {
		let signer = SessionSigner::new("a-test-secret-key", 0).unwrap();
		let token = signer.issue(user()).unwrap();

		let err = signer.verify(&token).unwrap_err();
		assert_eq!(err.to_string(), "Authentication error: session expired");
	}

	#[test]
	fn test_cookie_attributes() {
		let set = SessionCookie::set("tok", 3600);
		assert!(set.starts_with("vitrine_session=tok;"));
		assert!(set.contains("HttpOnly"));
		assert!(set.contains("SameSite=Lax"));
		assert!(set.contains("Max-Age=3600"));

		let clear = SessionCookie::clear();
		assert!(clear.contains("Max-Age=0"));
	}
}
