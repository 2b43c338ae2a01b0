//! Back-reference verification.
//!
//! A producer bug that emits a wrong `(distance, length)` pair would
//! silently corrupt compressed output. [`verify_len_dist`] catches that by
//! comparing the claimed source bytes with the destination bytes. It is
//! linear in the match length and meant for assertions and tests, not the
//! hot path.

use backref_core::error::{BackrefError, Result};

/// Check that `length` bytes at `pos - dist` equal the bytes at `pos`.
///
/// Source and destination may overlap (`dist < length`), in which case the
/// comparison follows LZ77 self-copy semantics: every byte of the match is
/// compared against the byte `dist` positions earlier in `data`.
///
/// # Errors
///
/// Returns [`BackrefError::CorruptMatch`] when `dist` is zero, when the
/// source starts before the beginning of `data`, when the match runs past
/// its end, or when any byte differs (reporting the first differing offset).
pub fn verify_len_dist(data: &[u8], pos: usize, dist: u16, length: u16) -> Result<()> {
    let d = dist as usize;
    let len = length as usize;

    if d == 0 || d > pos || len > data.len().saturating_sub(pos) {
        return Err(BackrefError::corrupt_match(pos, dist, length, None));
    }

    let source = &data[pos - d..pos - d + len];
    let target = &data[pos..pos + len];
    match source.iter().zip(target).position(|(a, b)| a != b) {
        Some(offset) => Err(BackrefError::corrupt_match(
            pos,
            dist,
            length,
            Some(offset),
        )),
        None => Ok(()),
    }
}
