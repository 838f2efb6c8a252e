//! Review entity for SeaORM.

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use tutorhub_core::domain::{Review, ReviewInput};
use tutorhub_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_profile_id: i64,
    pub tutor_profile_id: i64,
    pub rating: i16,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::StudentProfileId",
        to = "super::profile::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::TutorProfileId",
        to = "super::profile::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Tutor,
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Review {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Review::new(ReviewInput {
            id: Some(model.id),
            student_profile_id: model.student_profile_id,
            tutor_profile_id: model.tutor_profile_id,
            rating: model.rating,
            text: model.text,
            created_at: Some(model.created_at.and_utc()),
        })
        .map_err(|e| RepoError::Corrupt(e.to_string()))
    }
}

pub fn active_model(review: &Review) -> ActiveModel {
    ActiveModel {
        id: review.id().map_or(NotSet, Set),
        student_profile_id: Set(review.student_profile_id()),
        tutor_profile_id: Set(review.tutor_profile_id()),
        rating: Set(review.rating()),
        text: Set(review.text().to_string()),
        created_at: Set(review.created_at().naive_utc()),
    }
}
