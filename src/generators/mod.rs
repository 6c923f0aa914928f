//! Field-level generators for log records.
//!
//! Each module covers one column family: the sampled name pair, the
//! creation/update timestamp pair, the derived username digest, and the
//! free-text bio.

pub mod bio;
pub mod name;
pub mod timestamp;
pub mod username;
