//! # Tutorhub Infrastructure
//!
//! Concrete implementations of the ports defined in `tutorhub-core`:
//! MySQL repositories via SeaORM, PBKDF2 credential helpers, and the
//! session stores backing sign-in.
//!
//! ## Feature Flags
//!
//! - `redis` (default) - Redis-backed session store

pub mod auth;
pub mod database;
pub mod session;

pub use database::{DatabaseConfig, MySqlProfileRepository, MySqlReviewRepository, connect};
pub use session::InMemorySessionStore;

#[cfg(feature = "redis")]
pub use session::{RedisSessionConfig, RedisSessionStore};
