//! Data Transfer Objects - request/response types for the API.
//!
//! Field names follow the SPA's camelCase wire convention
//! (`profileEmail`, `profilePassword`, ...).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request to sign in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub profile_email: String,
    pub profile_password: String,
}

/// Request to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub profile_name: String,
    pub profile_email: String,
    pub profile_password: String,
    pub profile_type: i16,
    pub profile_github_token: String,
    pub profile_bio: String,
    pub profile_rate: Decimal,
    pub profile_image: String,
}

/// Public projection of a profile; credential fields never leave the
/// server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub profile_id: i64,
    pub profile_name: String,
    pub profile_email: String,
    pub profile_type: i16,
    pub profile_bio: String,
    pub profile_rate: Decimal,
    pub profile_image: String,
    pub profile_last_edit_at: DateTime<Utc>,
}

/// Partial profile update; absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub profile_name: Option<String>,
    pub profile_email: Option<String>,
    pub profile_bio: Option<String>,
    pub profile_rate: Option<Decimal>,
    pub profile_image: Option<String>,
    pub profile_github_token: Option<String>,
}

/// Request to leave a review on a tutor. The student is the signed-in
/// profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub review_tutor_profile_id: i64,
    pub review_rating: i16,
    pub review_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub review_id: i64,
    pub review_student_profile_id: i64,
    pub review_tutor_profile_id: i64,
    pub review_rating: i16,
    pub review_text: String,
    pub review_created_at: DateTime<Utc>,
}
