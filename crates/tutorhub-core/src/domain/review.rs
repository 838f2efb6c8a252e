use chrono::{DateTime, Utc};

use super::profile::check_id;
use super::sanitize;
use super::truncate_to_micros;
use crate::error::ValidationError;

pub const TEXT_MAX: usize = 500;
pub const RATING_MIN: i16 = 1;
pub const RATING_MAX: i16 = 5;

/// Raw, unvalidated input for constructing a [`Review`].
#[derive(Debug, Clone)]
pub struct ReviewInput {
    pub id: Option<i64>,
    pub student_profile_id: i64,
    pub tutor_profile_id: i64,
    pub rating: i16,
    pub text: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Review entity - one student's rating and comment on one tutor.
///
/// Carries two independent foreign keys into the profile table. Like
/// [`Profile`](super::Profile), all mutation goes through validation and
/// `id` is `Some` exactly when the row has been persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    id: Option<i64>,
    student_profile_id: i64,
    tutor_profile_id: i64,
    rating: i16,
    text: String,
    created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(input: ReviewInput) -> Result<Self, ValidationError> {
        Ok(Self {
            id: check_id(input.id, "review id")?,
            student_profile_id: check_profile_ref(input.student_profile_id, "student profile id")?,
            tutor_profile_id: check_profile_ref(input.tutor_profile_id, "tutor profile id")?,
            rating: check_rating(input.rating)?,
            text: check_text(&input.text)?,
            created_at: truncate_to_micros(input.created_at.unwrap_or_else(Utc::now)),
        })
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn student_profile_id(&self) -> i64 {
        self.student_profile_id
    }

    pub fn tutor_profile_id(&self) -> i64 {
        self.tutor_profile_id
    }

    pub fn rating(&self) -> i16 {
        self.rating
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_id(&mut self, id: Option<i64>) -> Result<(), ValidationError> {
        self.id = check_id(id, "review id")?;
        Ok(())
    }

    pub fn set_rating(&mut self, rating: i16) -> Result<(), ValidationError> {
        self.rating = check_rating(rating)?;
        Ok(())
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), ValidationError> {
        self.text = check_text(text)?;
        Ok(())
    }
}

fn check_profile_ref(id: i64, field: &'static str) -> Result<i64, ValidationError> {
    if id <= 0 {
        return Err(ValidationError::OutOfRange { field });
    }
    Ok(id)
}

fn check_rating(rating: i16) -> Result<i16, ValidationError> {
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(ValidationError::OutOfRange { field: "rating" });
    }
    Ok(rating)
}

fn check_text(raw: &str) -> Result<String, ValidationError> {
    let text = sanitize::clean_text(raw);
    if text.is_empty() {
        return Err(ValidationError::Empty { field: "text" });
    }
    if text.chars().count() > TEXT_MAX {
        return Err(ValidationError::TooLong {
            field: "text",
            max: TEXT_MAX,
        });
    }
    Ok(text)
}
