//! Liveness endpoint.

use actix_web::HttpResponse;
use serde::Serialize;

use tutorhub_shared::ApiReply;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    pub service: &'static str,
    pub version: &'static str,
    pub checked_at: String,
}

/// GET /api/health
///
/// Liveness only, no store round-trips. Wrapped in the same reply
/// envelope as every other endpoint so the client parses it uniformly.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(ApiReply::ok(HealthData {
        service: "tutorhub-api",
        version: env!("CARGO_PKG_VERSION"),
        checked_at: chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use serde_json::Value;

    use super::*;

    #[actix_web::test]
    async fn health_uses_the_reply_envelope() {
        let app = test::init_service(
            App::new().route("/api/health", web::get().to(health_check)),
        )
        .await;

        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/health").to_request(),
        )
        .await;

        assert_eq!(body["status"], 200);
        assert_eq!(body["data"]["service"], "tutorhub-api");
    }
}
