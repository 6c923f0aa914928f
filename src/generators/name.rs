//! Name sampling for generated people.

use rand::seq::SliceRandom;
use rand::Rng;

/// First-name sample pool.
pub const FIRST_NAMES: [&str; 16] = [
    "James",
    "Mary",
    "John",
    "Patricia",
    "Robert",
    "Jennifer",
    "Michael",
    "Linda",
    "William",
    "Elizabeth",
    "David",
    "Barbara",
    "Richard",
    "Susan",
    "Joseph",
    "Jessica",
];

/// Last-name sample pool.
pub const LAST_NAMES: [&str; 15] = [
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
    "Hernandez",
    "Lopez",
    "Gonzalez",
    "Wilson",
    "Anderson",
];

/// Pick a first name uniformly, with replacement across calls.
pub fn generate_first_name<R: Rng>(rng: &mut R) -> &'static str {
    FIRST_NAMES.choose(rng).copied().unwrap()
}

/// Pick a last name uniformly, with replacement across calls.
pub fn generate_last_name<R: Rng>(rng: &mut R) -> &'static str {
    LAST_NAMES.choose(rng).copied().unwrap()
}
