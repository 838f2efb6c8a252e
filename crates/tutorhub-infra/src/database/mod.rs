//! Database connection management and MySQL repositories.

mod connections;
pub mod entity;
mod profile_repo;
mod review_repo;

pub use connections::{DatabaseConfig, connect};
pub use profile_repo::MySqlProfileRepository;
pub use review_repo::MySqlReviewRepository;

use sea_orm::DbErr;
use tutorhub_core::error::RepoError;

/// Map a SeaORM error onto the repository taxonomy. Key-collision
/// failures surface as constraint violations, everything else as an
/// opaque query error.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    let msg = err.to_string();
    if msg.contains("Duplicate") || msg.contains("duplicate") || msg.contains("unique") {
        RepoError::Constraint(msg)
    } else {
        RepoError::Query(msg)
    }
}
