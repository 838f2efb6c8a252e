//! MySQL review repository.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter};

use tutorhub_core::domain::Review;
use tutorhub_core::error::RepoError;
use tutorhub_core::ports::ReviewRepository;

use super::entity::review::{self, Entity as ReviewEntity};
use super::map_db_err;

pub struct MySqlReviewRepository {
    db: DbConn,
}

impl MySqlReviewRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn collect(models: Vec<review::Model>) -> Result<Vec<Review>, RepoError> {
    models.into_iter().map(TryInto::try_into).collect()
}

#[async_trait]
impl ReviewRepository for MySqlReviewRepository {
    async fn insert(&self, review: &mut Review) -> Result<(), RepoError> {
        if review.id().is_some() {
            return Err(RepoError::AlreadyPersisted);
        }

        let model = review::active_model(review);
        let result = ReviewEntity::insert(model)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(review_id = result.last_insert_id, "Inserted review");

        review
            .set_id(Some(result.last_insert_id))
            .map_err(|e| RepoError::Corrupt(e.to_string()))
    }

    async fn update(&self, review: &Review) -> Result<(), RepoError> {
        if review.id().is_none() {
            return Err(RepoError::NotPersisted);
        }

        let model = review::active_model(review);
        ReviewEntity::update(model)
            .exec(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => RepoError::NotFound,
                e => map_db_err(e),
            })?;

        Ok(())
    }

    async fn delete(&self, review: &Review) -> Result<(), RepoError> {
        let Some(id) = review.id() else {
            return Err(RepoError::NotPersisted);
        };

        ReviewEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, RepoError> {
        let result = ReviewEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        result.map(TryInto::try_into).transpose()
    }

    async fn find_by_student(&self, student_profile_id: i64) -> Result<Vec<Review>, RepoError> {
        let models = ReviewEntity::find()
            .filter(review::Column::StudentProfileId.eq(student_profile_id))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        collect(models)
    }

    async fn find_by_tutor(&self, tutor_profile_id: i64) -> Result<Vec<Review>, RepoError> {
        let models = ReviewEntity::find()
            .filter(review::Column::TutorProfileId.eq(tutor_profile_id))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        collect(models)
    }

    async fn search_text(&self, needle: &str) -> Result<Vec<Review>, RepoError> {
        let models = ReviewEntity::find()
            .filter(review::Column::Text.contains(needle))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        collect(models)
    }
}
