//! # Tutorhub Shared
//!
//! Wire types shared with the single-page client: request/response DTOs
//! and the `{status, message?, data}` reply envelope the SPA consumes.

pub mod dto;
pub mod response;

pub use response::ApiReply;
