//! # Tutorhub Core
//!
//! The domain layer of the tutorhub marketplace backend.
//! This crate contains the validated entities and ports with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{RepoError, SessionError, ValidationError};
