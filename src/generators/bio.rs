//! Free-text bio assembly.
//!
//! The bio is the widest column in the file and is what brings a row up to
//! a few hundred bytes, keeping row counts moderate for large size targets.

use rand::seq::SliceRandom;
use rand::Rng;

/// Job-title sample pool.
pub const JOBS: [&str; 8] = [
    "engineer", "designer", "teacher", "nurse", "manager", "developer", "writer", "analyst",
];

/// City sample pool.
pub const CITIES: [&str; 8] = [
    "New York",
    "San Francisco",
    "Chicago",
    "Austin",
    "Seattle",
    "Boston",
    "Denver",
    "Miami",
];

/// Hobby sample pool.
pub const HOBBIES: [&str; 8] = [
    "photography",
    "hiking",
    "gardening",
    "reading",
    "travelling",
    "cooking",
    "cycling",
    "painting",
];

/// Distinct hobbies mentioned per bio.
const HOBBY_PICKS: usize = 3;

/// Fixed paragraph appended to every bio.
const FILLER: &str = "Experienced professional with a passion for continuous learning. \
    Enjoys collaborative projects and mentoring others. \
    Active in local community events and volunteer work.";

/// Assemble the bio sentence block for one record.
///
/// The text repeats the name pair and the record id, so a row stays
/// self-consistent even when read in isolation.
pub fn generate_bio<R: Rng>(rng: &mut R, first_name: &str, last_name: &str, id: u64) -> String {
    let hobbies = pick_hobbies(rng);
    let age: u32 = rng.gen_range(20..=75);
    let job = *JOBS.choose(rng).unwrap();
    let city = *CITIES.choose(rng).unwrap();

    let hobby_list = hobbies.join(", ");
    let favorite = hobbies[0];

    format!(
        "{first_name} {last_name} (id={id}) is a {age}-year-old {job} based in {city}. \
         They enjoy {hobby_list}, and often spend weekends practicing {favorite}. \
         {first_name} has worked as a {job} for several years and is known among colleagues for being reliable. \
         Contact: username_md5 is included in the record; this bio ties to that user. \
         {FILLER}"
    )
}

/// Sample distinct hobbies from the pool.
fn pick_hobbies<R: Rng>(rng: &mut R) -> Vec<&'static str> {
    HOBBIES
        .choose_multiple(rng, HOBBY_PICKS)
        .copied()
        .collect()
}
