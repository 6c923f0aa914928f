//! loggen: synthetic CSV log file generation for load testing.
//!
//! Produces a `log.csv`-style file of approximately a target byte size,
//! filled with row-coherent random records: a sequential id, a
//! creation/update timestamp pair, an MD5 username digest derived from the
//! name columns, sampled first/last names, and a verbose free-text bio that
//! dominates each row's width.
//!
//! The building blocks are a size-string parser ([`size`]), per-column
//! generators ([`generators`]) composed into whole rows by
//! [`RowGenerator`], and [`LogPopulator`], which streams rows through the
//! csv writer until the byte target is reached.
//!
//! # Example
//!
//! ```ignore
//! use loggen::{size, LogPopulator};
//!
//! let target_bytes = size::target_bytes("10MB")?;
//! let mut populator = LogPopulator::new();
//! let metrics = populator.populate("log.csv", target_bytes)?;
//! println!("wrote {} rows", metrics.rows_written);
//! ```

pub mod generator;
pub mod generators;
pub mod populator;
pub mod record;
pub mod size;

pub use generator::RowGenerator;
pub use populator::{LogPopulator, PopulateMetrics, PopulatorError};
pub use record::{LogRecord, HEADER};
pub use size::{parse_size, target_bytes, SizeError};
