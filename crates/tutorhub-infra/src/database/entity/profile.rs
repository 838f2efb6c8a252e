//! Profile entity for SeaORM.

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use tutorhub_core::domain::{Profile, ProfileInput};
use tutorhub_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub profile_type: i16,
    pub github_token: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub rate: Decimal,
    pub image: String,
    pub last_edit_at: DateTime,
    pub activation_token: Option<String>,
    pub password_hash: String,
    pub password_salt: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Rebuild the domain entity from a stored row, re-running validation.
/// A row that no longer validates is reported as corrupt rather than
/// accepted.
impl TryFrom<Model> for Profile {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Profile::new(ProfileInput {
            id: Some(model.id),
            name: model.name,
            email: model.email,
            profile_type: model.profile_type,
            github_token: model.github_token,
            bio: model.bio,
            rate: model.rate,
            image: model.image,
            last_edit_at: Some(model.last_edit_at.and_utc()),
            activation_token: model.activation_token,
            password_hash: model.password_hash,
            password_salt: model.password_salt,
        })
        .map_err(|e| RepoError::Corrupt(e.to_string()))
    }
}

/// Serialize the domain entity for persistence. An unassigned id maps to
/// `NotSet` so the store allocates one on insert.
pub fn active_model(profile: &Profile) -> ActiveModel {
    ActiveModel {
        id: profile.id().map_or(NotSet, Set),
        name: Set(profile.name().to_string()),
        email: Set(profile.email().to_string()),
        profile_type: Set(profile.profile_type().as_i16()),
        github_token: Set(profile.github_token().to_string()),
        bio: Set(profile.bio().to_string()),
        rate: Set(profile.rate()),
        image: Set(profile.image().to_string()),
        last_edit_at: Set(profile.last_edit_at().naive_utc()),
        activation_token: Set(profile.activation_token().map(str::to_string)),
        password_hash: Set(profile.password_hash().to_string()),
        password_salt: Set(profile.password_salt().to_string()),
    }
}
