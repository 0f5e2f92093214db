//! Secret comparison

/// Compare two secrets without short-circuiting on the first mismatch
///
/// Only the contents are protected; a length mismatch returns early.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
