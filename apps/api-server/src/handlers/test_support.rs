//! Stub ports and fixtures shared by the handler tests.

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::test::TestRequest;
use async_trait::async_trait;
use rust_decimal_macros::dec;

use tutorhub_core::domain::{Profile, ProfileInput, Review};
use tutorhub_core::error::RepoError;
use tutorhub_core::ports::{ProfileRepository, ReviewRepository};
use tutorhub_infra::InMemorySessionStore;

use crate::middleware::session::{SESSION_COOKIE, XSRF_COOKIE, XSRF_HEADER};
use crate::state::AppState;

/// Fixed-content profile repository double.
pub struct StubProfiles {
    pub profiles: Vec<Profile>,
}

#[async_trait]
impl ProfileRepository for StubProfiles {
    async fn insert(&self, profile: &mut Profile) -> Result<(), RepoError> {
        profile
            .set_id(Some(1))
            .map_err(|e| RepoError::Corrupt(e.to_string()))
    }

    async fn update(&self, _profile: &Profile) -> Result<(), RepoError> {
        Ok(())
    }

    async fn delete(&self, _profile: &Profile) -> Result<(), RepoError> {
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Profile>, RepoError> {
        Ok(self.profiles.iter().find(|p| p.id() == Some(id)).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, RepoError> {
        Ok(self.profiles.iter().find(|p| p.email() == email).cloned())
    }

    async fn find_by_activation_token(&self, token: &str) -> Result<Option<Profile>, RepoError> {
        Ok(self
            .profiles
            .iter()
            .find(|p| p.activation_token() == Some(token))
            .cloned())
    }
}

pub struct StubReviews {
    pub reviews: Vec<Review>,
}

#[async_trait]
impl ReviewRepository for StubReviews {
    async fn insert(&self, review: &mut Review) -> Result<(), RepoError> {
        review
            .set_id(Some(1))
            .map_err(|e| RepoError::Corrupt(e.to_string()))
    }

    async fn update(&self, _review: &Review) -> Result<(), RepoError> {
        Ok(())
    }

    async fn delete(&self, _review: &Review) -> Result<(), RepoError> {
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, RepoError> {
        Ok(self.reviews.iter().find(|r| r.id() == Some(id)).cloned())
    }

    async fn find_by_student(&self, student: i64) -> Result<Vec<Review>, RepoError> {
        Ok(self
            .reviews
            .iter()
            .filter(|r| r.student_profile_id() == student)
            .cloned()
            .collect())
    }

    async fn find_by_tutor(&self, tutor: i64) -> Result<Vec<Review>, RepoError> {
        Ok(self
            .reviews
            .iter()
            .filter(|r| r.tutor_profile_id() == tutor)
            .cloned()
            .collect())
    }

    async fn search_text(&self, needle: &str) -> Result<Vec<Review>, RepoError> {
        Ok(self
            .reviews
            .iter()
            .filter(|r| r.text().contains(needle))
            .cloned()
            .collect())
    }
}

/// A persisted profile with placeholder credentials.
pub fn sample_profile(id: i64, profile_type: i16, email: &str) -> Profile {
    Profile::new(ProfileInput {
        id: Some(id),
        name: "John Smith".to_string(),
        email: email.to_string(),
        profile_type,
        github_token: "a".repeat(64),
        bio: "This is a bio".to_string(),
        rate: dec!(25.00),
        image: "b".repeat(32),
        last_edit_at: None,
        activation_token: None,
        password_hash: "c".repeat(128),
        password_salt: "d".repeat(64),
    })
    .unwrap()
}

pub fn state_with(
    profiles: Vec<Profile>,
    reviews: Vec<Review>,
) -> (AppState, Arc<InMemorySessionStore>) {
    let sessions = Arc::new(InMemorySessionStore::new());
    let state = AppState {
        profiles: Arc::new(StubProfiles { profiles }),
        reviews: Arc::new(StubReviews { reviews }),
        sessions: sessions.clone(),
    };
    (state, sessions)
}

/// Attach the session cookie and a matching XSRF pair.
pub fn signed_in(req: TestRequest, session_id: &str) -> TestRequest {
    req.cookie(Cookie::new(SESSION_COOKIE, session_id))
        .cookie(Cookie::new(XSRF_COOKIE, "tok"))
        .insert_header((XSRF_HEADER, "tok"))
}
