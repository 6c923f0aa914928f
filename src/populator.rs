//! CSV log file population.
//!
//! Writes generated rows through the csv writer until the bytes handed to the
//! output stack reach the target, then flushes and reports metrics.

use crate::generator::RowGenerator;
use crate::record::HEADER;
use csv::Writer;
use std::cell::Cell;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for file writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Rows between flushes of buffered output to disk.
pub const FLUSH_INTERVAL: u64 = 1000;

/// Errors that can occur during log file population.
#[derive(Debug, thiserror::Error)]
pub enum PopulatorError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of data rows written (header excluded)
    pub rows_written: u64,
    /// Total time taken
    pub total_duration: Duration,
    /// Time spent generating records
    pub generation_duration: Duration,
    /// Time spent writing to file
    pub write_duration: Duration,
    /// Final file size in bytes
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Running count of bytes serialized into the output stack.
///
/// The csv writer owns the whole writer stack during population, so the
/// count is read through a second clone of this handle.
#[derive(Clone, Default)]
struct ByteCounter(Rc<Cell<u64>>);

impl ByteCounter {
    fn add(&self, n: u64) {
        self.0.set(self.0.get() + n);
    }

    fn get(&self) -> u64 {
        self.0.get()
    }
}

/// `io::Write` adapter that counts the bytes passing through it.
struct CountingWriter<W> {
    inner: W,
    counter: ByteCounter,
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.counter.add(written as u64);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Populates a CSV log file up to a byte-size target.
pub struct LogPopulator {
    generator: RowGenerator,
}

impl LogPopulator {
    /// Populator over an entropy-seeded generator anchored at the current time.
    pub fn new() -> Self {
        Self::with_generator(RowGenerator::new())
    }

    /// Populator over an explicit row generator.
    pub fn with_generator(generator: RowGenerator) -> Self {
        Self { generator }
    }

    /// Generate the CSV file at `output_path` until it reaches `target_bytes`.
    ///
    /// The header row goes first and at least one data row is always written,
    /// so a tiny target still yields a usable file. The size check reads the
    /// bytes already serialized out of the csv writer, which trails the true
    /// total by at most one buffer; the final size is never below the target
    /// and overshoots it by at most a buffer plus one row.
    ///
    /// Returns metrics about the populate operation.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        target_bytes: u64,
    ) -> Result<PopulateMetrics, PopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();
        let output_path = output_path.as_ref();

        info!(
            "Generating CSV log file '{}' with target size {} bytes",
            output_path.display(),
            target_bytes
        );

        let bytes_out = ByteCounter::default();
        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = Writer::from_writer(CountingWriter {
            inner: buf_writer,
            counter: bytes_out.clone(),
        });

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        let write_start = Instant::now();
        writer.write_record(HEADER)?;
        write_time += write_start.elapsed();

        loop {
            let gen_start = Instant::now();
            let record = self.generator.next_record();
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            writer.write_record(&record.to_csv_record())?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;

            if metrics.rows_written % FLUSH_INTERVAL == 0 {
                writer.flush()?;
                info!(
                    "Written {} rows ({} bytes)",
                    metrics.rows_written,
                    bytes_out.get()
                );
            }

            if bytes_out.get() >= target_bytes {
                debug!(
                    "Target reached after {} rows: {} >= {} bytes",
                    metrics.rows_written,
                    bytes_out.get(),
                    target_bytes
                );
                break;
            }
        }

        // Flush and get final file size
        writer.flush()?;
        let inner = writer
            .into_inner()
            .map_err(|e| PopulatorError::Io(io::Error::other(e.to_string())))?;
        drop(inner);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;
        metrics.total_duration = start_time.elapsed();

        info!(
            "CSV generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

impl Default for LogPopulator {
    fn default() -> Self {
        Self::new()
    }
}
