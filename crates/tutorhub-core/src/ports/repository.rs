use async_trait::async_trait;

use crate::domain::{Profile, Review};
use crate::error::RepoError;

/// Profile persistence operations.
///
/// Lifecycle contract: `insert` requires a never-persisted entity and
/// writes the store-assigned id back onto it; `update` and `delete`
/// require a persisted one. Reads report absence as `None`/empty, never
/// as an error.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Persist a new profile. Fails with [`RepoError::AlreadyPersisted`]
    /// when the entity already carries an id; on success the assigned id
    /// is stored on the entity.
    async fn insert(&self, profile: &mut Profile) -> Result<(), RepoError>;

    /// Rewrite every non-key column of the row matching the entity's id.
    async fn update(&self, profile: &Profile) -> Result<(), RepoError>;

    /// Remove the row matching the entity's id. The in-memory id is not
    /// cleared; the caller owns that.
    async fn delete(&self, profile: &Profile) -> Result<(), RepoError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Profile>, RepoError>;

    /// Email is a unique column, so this is single-valued.
    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, RepoError>;

    async fn find_by_activation_token(&self, token: &str) -> Result<Option<Profile>, RepoError>;
}

/// Review persistence operations, same lifecycle contract as
/// [`ProfileRepository`].
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn insert(&self, review: &mut Review) -> Result<(), RepoError>;

    async fn update(&self, review: &Review) -> Result<(), RepoError>;

    async fn delete(&self, review: &Review) -> Result<(), RepoError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, RepoError>;

    async fn find_by_student(&self, student_profile_id: i64) -> Result<Vec<Review>, RepoError>;

    async fn find_by_tutor(&self, tutor_profile_id: i64) -> Result<Vec<Review>, RepoError>;

    /// Substring match over review text; empty on no match.
    async fn search_text(&self, needle: &str) -> Result<Vec<Review>, RepoError>;
}
