//! Human-readable size string parsing.
//!
//! Accepts raw byte counts (`"2048"`), binary-unit suffixes in one- and
//! two-letter forms (`"100MB"`, `"1G"`, `"512K"`), fractional values
//! (`"1.5G"`), and a trailing `BYTES` word (`"100 bytes"`). Matching is
//! case-insensitive and surrounding whitespace is ignored.

/// Recognized suffixes and their byte multipliers.
///
/// Two-letter suffixes come first so that `"100MB"` strips `MB` rather
/// than the bare `B`.
const SUFFIXES: [(&str, i64); 7] = [
    ("KB", 1 << 10),
    ("MB", 1 << 20),
    ("GB", 1 << 30),
    ("B", 1),
    ("K", 1 << 10),
    ("M", 1 << 20),
    ("G", 1 << 30),
];

/// Errors from size parsing and validation.
#[derive(Debug, thiserror::Error)]
pub enum SizeError {
    /// The input did not contain a numeric value with an optional known suffix.
    #[error("unrecognized size '{0}': use a raw byte count or a suffixed value like '100MB', '1G', '512K'")]
    Unparseable(String),

    /// The input parsed to zero or a negative byte count.
    #[error("size must be greater than zero, got {0} bytes")]
    InvalidSize(i64),
}

/// Parse a size string into a byte count.
///
/// Fractional values are multiplied out before truncating toward zero, so
/// `"1.5K"` is 1536 bytes and `"0.5"` is 0 bytes. Negative values parse
/// successfully; rejecting them is the caller's decision.
pub fn parse_size(input: &str) -> Result<i64, SizeError> {
    let upper = input.trim().to_uppercase();
    let mut s = upper.as_str();

    if let Some(rest) = s.strip_suffix("BYTES") {
        s = rest.trim_end();
    }

    for (suffix, multiplier) in SUFFIXES {
        if let Some(number) = s.strip_suffix(suffix) {
            let value = parse_number(number.trim_end(), input)?;
            return Ok((value * multiplier as f64) as i64);
        }
    }

    let value = parse_number(s, input)?;
    Ok(value as i64)
}

/// Parse the numeric part of a size string.
///
/// Rejects the non-finite spellings the float parser accepts (`inf`,
/// `infinity`, `nan`); they would otherwise saturate the integer cast.
fn parse_number(number: &str, input: &str) -> Result<f64, SizeError> {
    let value: f64 = number
        .parse()
        .map_err(|_| SizeError::Unparseable(input.to_string()))?;
    if !value.is_finite() {
        return Err(SizeError::Unparseable(input.to_string()));
    }
    Ok(value)
}

/// Parse a size string and validate it as a usable byte target.
///
/// Returns the byte count for positive sizes and `SizeError::InvalidSize`
/// for anything that parses to zero or below.
pub fn target_bytes(input: &str) -> Result<u64, SizeError> {
    let bytes = parse_size(input)?;
    if bytes <= 0 {
        return Err(SizeError::InvalidSize(bytes));
    }
    Ok(bytes as u64)
}
