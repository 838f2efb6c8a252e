//! Profile handlers.

use actix_web::{HttpRequest, HttpResponse, web};

use tutorhub_core::domain::Profile;
use tutorhub_shared::ApiReply;
use tutorhub_shared::dto::{ProfileResponse, UpdateProfileRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::session::{Identity, verify_xsrf};
use crate::state::AppState;

pub(super) fn to_response(profile: &Profile) -> Result<ProfileResponse, AppError> {
    Ok(ProfileResponse {
        profile_id: profile
            .id()
            .ok_or_else(|| AppError::Internal("Loaded profile has no id".to_string()))?,
        profile_name: profile.name().to_string(),
        profile_email: profile.email().to_string(),
        profile_type: profile.profile_type().as_i16(),
        profile_bio: profile.bio().to_string(),
        profile_rate: profile.rate(),
        profile_image: profile.image().to_string(),
        profile_last_edit_at: profile.last_edit_at(),
    })
}

/// GET /api/profiles/{id}
///
/// Public read. Credential fields stay server-side.
pub async fn get_profile(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let profile = state
        .profiles
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    Ok(HttpResponse::Ok().json(ApiReply::ok(to_response(&profile)?)))
}

/// PUT /api/profiles/{id}
///
/// Partial update of the caller's own profile. Absent fields keep their
/// stored values; every supplied field runs the entity's validation.
pub async fn update_profile(
    req: HttpRequest,
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateProfileRequest>,
) -> AppResult<HttpResponse> {
    verify_xsrf(&req)?;

    let id = path.into_inner();
    if identity.profile_id != id {
        return Err(AppError::Forbidden(
            "You may only edit your own profile".to_string(),
        ));
    }

    let mut profile = state
        .profiles
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    let body = body.into_inner();
    if let Some(name) = &body.profile_name {
        profile.set_name(name)?;
    }
    if let Some(email) = &body.profile_email {
        profile.set_email(email)?;
    }
    if let Some(bio) = &body.profile_bio {
        profile.set_bio(bio)?;
    }
    if let Some(rate) = body.profile_rate {
        profile.set_rate(rate)?;
    }
    if let Some(image) = &body.profile_image {
        profile.set_image(image)?;
    }
    if let Some(token) = &body.profile_github_token {
        profile.set_github_token(token)?;
    }

    profile.touch();
    state.profiles.update(&profile).await?;

    tracing::info!(profile_id = id, "Profile updated");

    Ok(HttpResponse::Ok().json(ApiReply::ok_with_message(
        to_response(&profile)?,
        "Profile updated OK",
    )))
}

/// DELETE /api/profiles/{id}
///
/// Removes the caller's own profile and ends the session.
pub async fn delete_profile(
    req: HttpRequest,
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    verify_xsrf(&req)?;

    let id = path.into_inner();
    if identity.profile_id != id {
        return Err(AppError::Forbidden(
            "You may only delete your own profile".to_string(),
        ));
    }

    let profile = state
        .profiles
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    state.profiles.delete(&profile).await?;
    state.sessions.remove(&identity.session_id).await?;

    tracing::info!(profile_id = id, "Profile deleted");

    Ok(HttpResponse::Ok().json(ApiReply::<()>::message(200, "Profile deleted OK")))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use tutorhub_core::ports::SessionStore;

    use super::*;
    use crate::handlers::configure_routes;
    use crate::handlers::test_support::{sample_profile, signed_in, state_with};

    #[actix_web::test]
    async fn read_is_public_and_hides_credentials() {
        let (state, _) = state_with(vec![sample_profile(1, 1, "tutor@phpunit.de")], Vec::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/profiles/1").to_request(),
        )
        .await;

        assert_eq!(body["data"]["profileId"], 1);
        assert_eq!(body["data"]["profileEmail"], "tutor@phpunit.de");
        assert!(body["data"].get("passwordHash").is_none());
        assert!(body["data"].get("passwordSalt").is_none());
    }

    #[actix_web::test]
    async fn update_is_limited_to_the_owner() {
        let (state, sessions) = state_with(
            vec![
                sample_profile(1, 1, "tutor@phpunit.de"),
                sample_profile(2, 0, "student@phpunit.de"),
            ],
            Vec::new(),
        );
        sessions.put("sid", 2).await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        // Signed in as profile 2, editing profile 1.
        let req = signed_in(test::TestRequest::put().uri("/api/profiles/1"), "sid")
            .set_json(json!({"profileName": "Jane Doe"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 403);
    }

    #[actix_web::test]
    async fn partial_update_keeps_absent_fields() {
        let (state, sessions) = state_with(vec![sample_profile(1, 1, "tutor@phpunit.de")], Vec::new());
        sessions.put("sid", 1).await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = signed_in(test::TestRequest::put().uri("/api/profiles/1"), "sid")
            .set_json(json!({"profileName": "Jane Doe"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["profileName"], "Jane Doe");
        assert_eq!(body["data"]["profileEmail"], "tutor@phpunit.de");
        assert_eq!(body["data"]["profileBio"], "This is a bio");
    }

    #[actix_web::test]
    async fn delete_is_limited_to_the_owner() {
        let (state, sessions) = state_with(
            vec![
                sample_profile(1, 1, "tutor@phpunit.de"),
                sample_profile(2, 0, "student@phpunit.de"),
            ],
            Vec::new(),
        );
        sessions.put("sid", 2).await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = signed_in(test::TestRequest::delete().uri("/api/profiles/1"), "sid").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 403);
    }

    #[actix_web::test]
    async fn delete_ends_the_session() {
        let (state, sessions) = state_with(vec![sample_profile(1, 1, "tutor@phpunit.de")], Vec::new());
        sessions.put("sid", 1).await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = signed_in(test::TestRequest::delete().uri("/api/profiles/1"), "sid").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(sessions.get("sid").await, None);
    }
}
