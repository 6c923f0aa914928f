//! Creation/update timestamp pairs.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Column format for timestamps. No timezone, no fractional seconds, and
/// lexicographic order matches chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Oldest possible record age, in days (five years).
const MAX_AGE_DAYS: i64 = 5 * 365;

/// Largest gap between creation and last update, in days.
const MAX_UPDATE_LAG_DAYS: i64 = 365;

const SECONDS_PER_DAY: i64 = 86_400;

/// Render a timestamp in the column format.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Random `(created_at, updated_at)` pair anchored at `now`.
///
/// `created_at` falls up to five years before `now`; `updated_at` follows it
/// by up to a year. The update offset is non-negative, so `updated_at` never
/// precedes `created_at`.
pub fn generate_timestamp_pair<R: Rng>(
    rng: &mut R,
    now: DateTime<Utc>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let created_at = now
        - Duration::days(rng.gen_range(0..=MAX_AGE_DAYS))
        - Duration::seconds(rng.gen_range(0..SECONDS_PER_DAY));

    let updated_at = created_at
        + Duration::days(rng.gen_range(0..=MAX_UPDATE_LAG_DAYS))
        + Duration::seconds(rng.gen_range(0..SECONDS_PER_DAY));

    (created_at, updated_at)
}
