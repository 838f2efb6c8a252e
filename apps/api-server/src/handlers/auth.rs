//! Account handlers: sign-up, sign-in, sign-out, activation.

use actix_web::cookie::Cookie;
use actix_web::{HttpRequest, HttpResponse, web};
use uuid::Uuid;

use tutorhub_core::domain::{Profile, ProfileInput};
use tutorhub_infra::auth::password;
use tutorhub_shared::ApiReply;
use tutorhub_shared::dto::{SignInRequest, SignUpRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::session::{
    Identity, PROFILE_ID_COOKIE, SESSION_COOKIE, XSRF_COOKIE, verify_xsrf,
};
use crate::state::AppState;

/// GET /api/xsrf-token
///
/// Issues the XSRF double-submit cookie the SPA echoes back in the
/// `X-XSRF-TOKEN` header on mutating requests.
pub async fn xsrf_token() -> HttpResponse {
    let token = Uuid::new_v4().simple().to_string();

    HttpResponse::NoContent()
        .cookie(Cookie::build(XSRF_COOKIE, token).path("/").finish())
        .finish()
}

/// POST /api/sign-up
///
/// Creates a profile pending activation: fresh salt, PBKDF2 digest, and
/// a one-time activation token the confirmation email links to.
pub async fn sign_up(
    state: web::Data<AppState>,
    body: web::Json<SignUpRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.profile_password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    // Check if the email is already registered
    if state
        .profiles
        .find_by_email(req.profile_email.trim())
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let salt = password::generate_salt();
    let hash = password::hash_password(&req.profile_password, &salt);
    let activation_token = password::generate_activation_token();

    let mut profile = Profile::new(ProfileInput {
        id: None,
        name: req.profile_name,
        email: req.profile_email,
        profile_type: req.profile_type,
        github_token: req.profile_github_token,
        bio: req.profile_bio,
        rate: req.profile_rate,
        image: req.profile_image,
        last_edit_at: None,
        activation_token: Some(activation_token),
        password_hash: hash,
        password_salt: salt,
    })?;

    state.profiles.insert(&mut profile).await?;
    tracing::info!(profile_id = ?profile.id(), "Profile created");

    Ok(HttpResponse::Created().json(ApiReply::<()>::message(
        201,
        "Please check your email and follow the link to confirm your account.",
    )))
}

/// POST /api/sign-in
///
/// On success stores the profile id in the session store and sets the
/// session cookie plus the SPA's `profileId` cookie, both scoped to `/`.
pub async fn sign_in(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<SignInRequest>,
) -> AppResult<HttpResponse> {
    verify_xsrf(&req)?;

    let body = body.into_inner();

    if body.profile_email.trim().is_empty() {
        return Err(AppError::Unauthorized("Incorrect email address".to_string()));
    }
    if body.profile_password.is_empty() {
        return Err(AppError::Unauthorized("Must enter a password".to_string()));
    }

    let profile = state
        .profiles
        .find_by_email(body.profile_email.trim())
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email".to_string()))?;

    // A pending activation token means the account was never confirmed.
    if profile.activation_token().is_some() {
        return Err(AppError::Forbidden(
            "You must activate your account before signing in".to_string(),
        ));
    }

    if !password::verify_password(
        &body.profile_password,
        profile.password_salt(),
        profile.password_hash(),
    ) {
        return Err(AppError::Unauthorized(
            "Email or password is incorrect".to_string(),
        ));
    }

    let profile_id = profile
        .id()
        .ok_or_else(|| AppError::Internal("Loaded profile has no id".to_string()))?;

    let session_id = Uuid::new_v4().to_string();
    state.sessions.put(&session_id, profile_id).await?;

    tracing::info!(profile_id, "Profile signed in");

    Ok(HttpResponse::Ok()
        .cookie(
            Cookie::build(SESSION_COOKIE, session_id)
                .path("/")
                .http_only(true)
                .finish(),
        )
        .cookie(
            Cookie::build(PROFILE_ID_COOKIE, profile_id.to_string())
                .path("/")
                .finish(),
        )
        .json(ApiReply::<()>::message(200, "Sign in was successful")))
}

/// POST /api/sign-out
pub async fn sign_out(identity: Identity, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.sessions.remove(&identity.session_id).await?;

    let mut session_cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    session_cookie.make_removal();
    let mut profile_cookie = Cookie::build(PROFILE_ID_COOKIE, "").path("/").finish();
    profile_cookie.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(session_cookie)
        .cookie(profile_cookie)
        .json(ApiReply::<()>::message(200, "Sign out was successful")))
}

/// GET /api/activate/{token}
///
/// Resolves the profile pending under this activation token and clears
/// the token, marking the account activated.
pub async fn activate(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let token = path.into_inner();

    let mut profile = state
        .profiles
        .find_by_activation_token(&token)
        .await?
        .ok_or_else(|| {
            AppError::NotFound("No account matches this activation token".to_string())
        })?;

    profile.activate();
    profile.touch();
    state.profiles.update(&profile).await?;

    tracing::info!(profile_id = ?profile.id(), "Profile activated");

    Ok(HttpResponse::Ok().json(ApiReply::<()>::message(
        200,
        "Account activated, you may now sign in",
    )))
}
