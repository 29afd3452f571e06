//! # Vitrine Auth
//!
//! Administrator accounts and sessions for the content backend.
//!
//! Passwords are stored as salted Argon2id hashes and verified with the
//! algorithm's constant-time verifier. Sessions are stateless: the signed
//! claims live in an HttpOnly cookie, authenticated with HMAC-SHA256.

pub mod hasher;
pub mod manager;
pub mod session;
pub mod user;

pub use hasher::{Argon2Hasher, PasswordHasher};
pub use manager::UserManager;
pub use session::{SessionClaims, SessionCookie, SessionSigner, SessionUser};
pub use user::User;
