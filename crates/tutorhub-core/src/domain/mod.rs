//! Domain entities - validated in-memory representations of persisted rows.

mod profile;
mod review;
pub mod sanitize;

pub use profile::{Profile, ProfileInput, ProfileType};
pub use review::{Review, ReviewInput};

use chrono::{DateTime, DurationRound, TimeDelta, Utc};

/// Timestamps persist at microsecond precision; normalizing here keeps
/// in-memory entities equal to their round-tripped rows.
pub(crate) fn truncate_to_micros(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.duration_trunc(TimeDelta::microseconds(1)).unwrap_or(ts)
}
