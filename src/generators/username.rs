//! Username digest derivation.

use md5::{Digest, Md5};

/// Lowercase hex MD5 of `"{first}.{last}.{id}"`, names lowercased.
///
/// Purely a function of its inputs, so a reader of the output file can
/// recompute the digest from the name columns and the id.
pub fn username_md5(first_name: &str, last_name: &str, id: u64) -> String {
    let username = format!(
        "{}.{}.{}",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        id
    );
    format!("{:x}", Md5::digest(username.as_bytes()))
}
