//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod repository;
mod session;

pub use repository::{ProfileRepository, ReviewRepository};
pub use session::SessionStore;
