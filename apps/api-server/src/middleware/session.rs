//! Session identity extractor and XSRF verification.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures::future::LocalBoxFuture;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Cookie holding the server-side session id. HttpOnly.
pub const SESSION_COOKIE: &str = "TUTORHUB_SESSION";
/// Cookie exposing the signed-in profile id to the SPA. Path `/`, no
/// expiry.
pub const PROFILE_ID_COOKIE: &str = "profileId";
/// Double-submit XSRF pair: the request header must echo the cookie.
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";
pub const XSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Signed-in profile identity extractor.
///
/// Use this in handlers to require a signed-in caller:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, profile {}!", identity.profile_id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub profile_id: i64,
    pub session_id: String,
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let session_cookie = req.cookie(SESSION_COOKIE);

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                tracing::error!("AppState not found in app data");
                AppError::Internal("Server configuration error".to_string())
            })?;

            let cookie = session_cookie.ok_or_else(|| {
                AppError::Unauthorized("You must be signed in".to_string())
            })?;
            let session_id = cookie.value().to_string();

            let profile_id = state
                .sessions
                .get(&session_id)
                .await
                .ok_or_else(|| AppError::Unauthorized("Session has expired".to_string()))?;

            Ok(Identity {
                profile_id,
                session_id,
            })
        })
    }
}

/// Double-submit XSRF check: the `X-XSRF-TOKEN` header must match the
/// `XSRF-TOKEN` cookie issued to the client.
pub fn verify_xsrf(req: &HttpRequest) -> Result<(), AppError> {
    let cookie = req
        .cookie(XSRF_COOKIE)
        .ok_or_else(|| AppError::Forbidden("Missing XSRF token".to_string()))?;

    let header = req
        .headers()
        .get(XSRF_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Forbidden("Missing XSRF token".to_string()))?;

    if header != cookie.value() {
        return Err(AppError::Forbidden("Invalid XSRF token".to_string()));
    }

    Ok(())
}
