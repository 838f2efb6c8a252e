//! HTTP handlers and route configuration.

mod auth;
mod health;
mod profiles;
mod reviews;

#[cfg(test)]
mod test_support;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/xsrf-token", web::get().to(auth::xsrf_token))
            // Account routes
            .route("/sign-up", web::post().to(auth::sign_up))
            .route("/sign-in", web::post().to(auth::sign_in))
            .route("/sign-out", web::post().to(auth::sign_out))
            .route("/activate/{token}", web::get().to(auth::activate))
            // Entity routes
            .service(
                web::scope("/profiles")
                    .route("/{id}", web::get().to(profiles::get_profile))
                    .route("/{id}", web::put().to(profiles::update_profile))
                    .route("/{id}", web::delete().to(profiles::delete_profile)),
            )
            .service(
                web::scope("/reviews")
                    .route("", web::post().to(reviews::create_review))
                    .route("", web::get().to(reviews::list_reviews))
                    .route("/{id}", web::get().to(reviews::get_review)),
            ),
    );
}
