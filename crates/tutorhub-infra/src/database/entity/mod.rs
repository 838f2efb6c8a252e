//! SeaORM models and their conversions to/from domain entities.

pub mod profile;
pub mod review;
