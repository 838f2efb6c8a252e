//! Review handlers.

use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use tutorhub_core::domain::{ProfileType, Review, ReviewInput};
use tutorhub_shared::ApiReply;
use tutorhub_shared::dto::{CreateReviewRequest, ReviewResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::session::{Identity, verify_xsrf};
use crate::state::AppState;

fn to_response(review: &Review) -> Result<ReviewResponse, AppError> {
    Ok(ReviewResponse {
        review_id: review
            .id()
            .ok_or_else(|| AppError::Internal("Loaded review has no id".to_string()))?,
        review_student_profile_id: review.student_profile_id(),
        review_tutor_profile_id: review.tutor_profile_id(),
        review_rating: review.rating(),
        review_text: review.text().to_string(),
        review_created_at: review.created_at(),
    })
}

fn to_responses(reviews: Vec<Review>) -> Result<Vec<ReviewResponse>, AppError> {
    reviews.iter().map(to_response).collect()
}

/// POST /api/reviews
///
/// The signed-in student leaves a review on a tutor. The student id
/// comes from the session, never from the request body.
pub async fn create_review(
    req: HttpRequest,
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<CreateReviewRequest>,
) -> AppResult<HttpResponse> {
    verify_xsrf(&req)?;

    let body = body.into_inner();

    let author = state
        .profiles
        .find_by_id(identity.profile_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Session has expired".to_string()))?;
    if author.profile_type() != ProfileType::Student {
        return Err(AppError::Forbidden(
            "Only students can leave reviews".to_string(),
        ));
    }

    let tutor = state
        .profiles
        .find_by_id(body.review_tutor_profile_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tutor not found".to_string()))?;
    if tutor.profile_type() != ProfileType::Tutor {
        return Err(AppError::BadRequest(
            "Reviews can only be left on tutors".to_string(),
        ));
    }

    let mut review = Review::new(ReviewInput {
        id: None,
        student_profile_id: identity.profile_id,
        tutor_profile_id: body.review_tutor_profile_id,
        rating: body.review_rating,
        text: body.review_text,
        created_at: None,
    })?;

    state.reviews.insert(&mut review).await?;
    tracing::info!(review_id = ?review.id(), "Review created");

    Ok(HttpResponse::Created().json(ApiReply::ok_with_message(
        to_response(&review)?,
        "Review created OK",
    )))
}

/// GET /api/reviews/{id}
pub async fn get_review(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let review = state
        .reviews
        .find_by_id(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

    Ok(HttpResponse::Ok().json(ApiReply::ok(to_response(&review)?)))
}

/// Filter for review listings. Exactly one of these is expected.
#[derive(Debug, Deserialize)]
pub struct ReviewQuery {
    pub tutor: Option<i64>,
    pub student: Option<i64>,
    pub search: Option<String>,
}

/// GET /api/reviews?tutor= | ?student= | ?search=
pub async fn list_reviews(
    state: web::Data<AppState>,
    query: web::Query<ReviewQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let reviews = if let Some(tutor) = query.tutor {
        state.reviews.find_by_tutor(tutor).await?
    } else if let Some(student) = query.student {
        state.reviews.find_by_student(student).await?
    } else if let Some(search) = query.search.as_deref() {
        if search.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Search term must not be empty".to_string(),
            ));
        }
        state.reviews.search_text(search.trim()).await?
    } else {
        return Err(AppError::BadRequest(
            "Provide a tutor, student, or search filter".to_string(),
        ));
    };

    Ok(HttpResponse::Ok().json(ApiReply::ok(to_responses(reviews)?)))
}
