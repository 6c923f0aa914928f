//! End-to-end generation tests.
//!
//! Generates a file through the public API, parses it back with a csv
//! reader, and checks the whole-file contracts: header order, sequential
//! ids, timestamp ordering, digest derivation, and the byte-size bound.

use chrono::{TimeZone, Utc};
use loggen::generators::username::username_md5;
use loggen::{size, LogPopulator, RowGenerator, HEADER};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

fn seeded_populator(seed: u64) -> LogPopulator {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    LogPopulator::with_generator(RowGenerator::with_rng(StdRng::seed_from_u64(seed), now))
}

#[test]
fn test_generated_file_parses_back_row_coherent() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("log.csv");
    let target_bytes = 64 * 1024;

    let metrics = seeded_populator(42).populate(&output_path, target_bytes)?;

    let file_size = std::fs::metadata(&output_path)?.len();
    assert!(file_size >= target_bytes);
    assert!(
        file_size - target_bytes < 32 * 1024,
        "overshot target by too much: {file_size}"
    );
    assert_eq!(metrics.file_size_bytes, file_size);

    let mut reader = csv::Reader::from_path(&output_path)?;
    assert_eq!(
        reader.headers()?,
        &csv::StringRecord::from(HEADER.to_vec())
    );

    let mut rows = 0u64;
    for (i, result) in reader.records().enumerate() {
        let row = result?;
        assert_eq!(row.len(), HEADER.len());

        let id: u64 = row[0].parse()?;
        assert_eq!(id, i as u64 + 1);

        let created_at = &row[1];
        let updated_at = &row[2];
        assert!(
            updated_at >= created_at,
            "updated_at '{updated_at}' precedes created_at '{created_at}'"
        );

        assert_eq!(row[3], username_md5(&row[4], &row[5], id));
        assert!(row[6].contains(&format!("(id={id})")));

        rows += 1;
    }

    assert_eq!(rows, metrics.rows_written);
    assert!(rows > 50, "64 KiB should take more than 50 rows: {rows}");

    Ok(())
}

#[test]
fn test_parsed_size_drives_the_file_size() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("log.csv");

    let target_bytes = size::target_bytes("32K")?;
    assert_eq!(target_bytes, 32_768);

    seeded_populator(7).populate(&output_path, target_bytes)?;
    assert!(std::fs::metadata(&output_path)?.len() >= target_bytes);

    Ok(())
}

#[test]
fn test_same_seed_produces_identical_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let path1 = temp_dir.path().join("log1.csv");
    let path2 = temp_dir.path().join("log2.csv");

    seeded_populator(42).populate(&path1, 16 * 1024)?;
    seeded_populator(42).populate(&path2, 16 * 1024)?;
    assert_eq!(
        std::fs::read_to_string(&path1)?,
        std::fs::read_to_string(&path2)?
    );

    let path3 = temp_dir.path().join("log3.csv");
    seeded_populator(43).populate(&path3, 16 * 1024)?;
    assert_ne!(
        std::fs::read_to_string(&path1)?,
        std::fs::read_to_string(&path3)?
    );

    Ok(())
}

#[test]
fn test_existing_file_is_overwritten() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("log.csv");

    std::fs::write(&output_path, "stale content that should disappear")?;
    seeded_populator(42).populate(&output_path, 4096)?;

    let content = std::fs::read_to_string(&output_path)?;
    assert!(content.starts_with("id,created_at,"));
    assert!(!content.contains("stale content"));

    Ok(())
}
