//! MySQL profile repository.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter};

use tutorhub_core::domain::Profile;
use tutorhub_core::error::RepoError;
use tutorhub_core::ports::ProfileRepository;

use super::entity::profile::{self, Entity as ProfileEntity};
use super::map_db_err;

pub struct MySqlProfileRepository {
    db: DbConn,
}

impl MySqlProfileRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for MySqlProfileRepository {
    async fn insert(&self, profile: &mut Profile) -> Result<(), RepoError> {
        // A profile that already carries an id exists in the store.
        if profile.id().is_some() {
            return Err(RepoError::AlreadyPersisted);
        }

        let model = profile::active_model(profile);
        let result = ProfileEntity::insert(model)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(profile_id = result.last_insert_id, "Inserted profile");

        profile
            .set_id(Some(result.last_insert_id))
            .map_err(|e| RepoError::Corrupt(e.to_string()))
    }

    async fn update(&self, profile: &Profile) -> Result<(), RepoError> {
        if profile.id().is_none() {
            return Err(RepoError::NotPersisted);
        }

        // active_model carries the id, so this rewrites every non-key
        // column of the matching row.
        let model = profile::active_model(profile);
        ProfileEntity::update(model)
            .exec(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => RepoError::NotFound,
                e => map_db_err(e),
            })?;

        Ok(())
    }

    async fn delete(&self, profile: &Profile) -> Result<(), RepoError> {
        let Some(id) = profile.id() else {
            return Err(RepoError::NotPersisted);
        };

        // Deleting an already-absent row is not an error; the in-memory
        // id stays with the caller.
        ProfileEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Profile>, RepoError> {
        let result = ProfileEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        result.map(TryInto::try_into).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, RepoError> {
        // Mask email for logging to avoid PII in logs. Keep at most the
        // first character of the local part, counted in chars.
        let masked = match email.split_once('@') {
            Some((local, domain)) => {
                let mut chars = local.chars();
                match (chars.next(), chars.next()) {
                    (Some(first), Some(_)) => format!("{first}***@{domain}"),
                    _ => format!("***@{domain}"),
                }
            }
            None => "***".to_string(),
        };
        tracing::debug!(profile_email = %masked, "Finding profile by email");

        let result = ProfileEntity::find()
            .filter(profile::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        result.map(TryInto::try_into).transpose()
    }

    async fn find_by_activation_token(&self, token: &str) -> Result<Option<Profile>, RepoError> {
        let result = ProfileEntity::find()
            .filter(profile::Column::ActivationToken.eq(token))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        result.map(TryInto::try_into).transpose()
    }
}
