//! Row generation for the log file.

use crate::generators::{bio, name, timestamp, username};
use crate::record::LogRecord;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Produces row-coherent log records with sequential ids.
///
/// The RNG and the clock anchor are injected through [`RowGenerator::with_rng`]
/// so tests can pin both; [`RowGenerator::new`] seeds from OS entropy and
/// anchors at the current time, so two runs never produce the same file.
pub struct RowGenerator {
    rng: StdRng,
    now: DateTime<Utc>,
    next_id: u64,
}

impl RowGenerator {
    /// Generator seeded from OS entropy, anchored at the current time.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy(), Utc::now())
    }

    /// Generator with an explicit RNG and clock anchor.
    pub fn with_rng(rng: StdRng, now: DateTime<Utc>) -> Self {
        Self {
            rng,
            now,
            next_id: 1,
        }
    }

    /// Produce the next record. Ids start at 1 and increment by one per call.
    pub fn next_record(&mut self) -> LogRecord {
        let id = self.next_id;
        self.next_id += 1;

        let first_name = name::generate_first_name(&mut self.rng);
        let last_name = name::generate_last_name(&mut self.rng);
        let (created_at, updated_at) = timestamp::generate_timestamp_pair(&mut self.rng, self.now);
        let username_md5 = username::username_md5(first_name, last_name, id);
        let bio = bio::generate_bio(&mut self.rng, first_name, last_name, id);

        LogRecord {
            id,
            created_at,
            updated_at,
            username_md5,
            first_name,
            last_name,
            bio,
        }
    }
}

impl Default for RowGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::name::{FIRST_NAMES, LAST_NAMES};
    use chrono::TimeZone;

    fn seeded_generator() -> RowGenerator {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        RowGenerator::with_rng(StdRng::seed_from_u64(42), now)
    }

    #[test]
    fn test_ids_are_sequential_from_one() {
        let mut generator = seeded_generator();

        for expected_id in 1..=10 {
            assert_eq!(generator.next_record().id, expected_id);
        }
    }

    #[test]
    fn test_records_are_row_coherent() {
        let mut generator = seeded_generator();

        for _ in 0..50 {
            let record = generator.next_record();

            assert!(FIRST_NAMES.contains(&record.first_name));
            assert!(LAST_NAMES.contains(&record.last_name));
            assert!(record.updated_at >= record.created_at);
            assert_eq!(
                record.username_md5,
                username::username_md5(record.first_name, record.last_name, record.id)
            );
            assert!(record
                .bio
                .contains(&format!("{} {} (id={})", record.first_name, record.last_name, record.id)));
        }
    }

    #[test]
    fn test_created_at_is_anchored_at_the_injected_now() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let mut generator = RowGenerator::with_rng(StdRng::seed_from_u64(42), now);

        for _ in 0..50 {
            assert!(generator.next_record().created_at <= now);
        }
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let mut generator1 = seeded_generator();
        let mut generator2 = seeded_generator();

        for _ in 0..20 {
            assert_eq!(generator1.next_record(), generator2.next_record());
        }
    }
}
