//! # Vitrine DB
//!
//! Document-store access for the content backend.
//!
//! The store is abstracted behind [`DocumentBackend`], an object-safe async
//! trait over BSON documents. Two implementations ship: [`MongoBackend`]
//! for production and [`MemoryBackend`] for tests and local development.
//! Typed access goes through [`Repository`], which serializes entities via
//! the [`Document`] trait.

pub mod backend;
pub mod backends;
pub mod document;
pub mod error;
pub mod repository;

pub use backend::DocumentBackend;
pub use backends::memory::MemoryBackend;
pub use backends::mongodb::{MongoBackend, MongoBackendBuilder};
pub use document::{Document, Singleton};
pub use error::{StoreError, StoreResult};
pub use repository::Repository;
