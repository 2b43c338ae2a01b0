//! Error types for backref operations.
//!
//! Every error in this crate is a precondition or invariant violation: the
//! LZ77 stage is deterministic over its inputs, so nothing here is worth
//! retrying. Callers should abandon the current compression attempt.

use thiserror::Error;

/// The main error type for backref operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackrefError {
    /// The requested input range is not a valid sub-range of the buffer.
    #[error("Invalid input range: [{instart}, {inend}) over a buffer of {len} bytes")]
    InvalidRange {
        /// Inclusive start of the range.
        instart: usize,
        /// Exclusive end of the range.
        inend: usize,
        /// Length of the buffer the range was applied to.
        len: usize,
    },

    /// A literal/length and distance pair that no token can represent.
    #[error("Invalid token: litlen {litlen} with distance {dist}")]
    InvalidToken {
        /// The literal byte or match length.
        litlen: u16,
        /// The distance, 0 for literals.
        dist: u16,
    },

    /// A back-reference whose source bytes differ from its destination bytes.
    #[error(
        "Corrupt match at position {position}: distance {distance}, length {length}, {}",
        mismatch_detail(.offset)
    )]
    CorruptMatch {
        /// Position of the first byte the match produces.
        position: usize,
        /// Claimed distance.
        distance: u16,
        /// Claimed length.
        length: u16,
        /// First offset inside the match whose bytes differ, if any.
        offset: Option<usize>,
    },

    /// A configuration value outside its accepted range.
    #[error("Invalid option: {message}")]
    InvalidOption {
        /// Description of the rejected option.
        message: String,
    },
}

fn mismatch_detail(offset: &Option<usize>) -> String {
    match offset {
        Some(k) => format!("first mismatch at offset {k}"),
        None => String::from("source or destination outside the buffer"),
    }
}

/// Result type alias for backref operations.
pub type Result<T> = std::result::Result<T, BackrefError>;

impl BackrefError {
    /// Create an invalid range error.
    pub fn invalid_range(instart: usize, inend: usize, len: usize) -> Self {
        Self::InvalidRange { instart, inend, len }
    }

    /// Create an invalid token error.
    pub fn invalid_token(litlen: u16, dist: u16) -> Self {
        Self::InvalidToken { litlen, dist }
    }

    /// Create a corrupt match error.
    pub fn corrupt_match(position: usize, distance: u16, length: u16, offset: Option<usize>) -> Self {
        Self::CorruptMatch {
            position,
            distance,
            length,
            offset,
        }
    }

    /// Create an invalid option error.
    pub fn invalid_option(message: impl Into<String>) -> Self {
        Self::InvalidOption {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BackrefError::invalid_range(10, 4, 8);
        assert_eq!(
            err.to_string(),
            "Invalid input range: [10, 4) over a buffer of 8 bytes"
        );

        let err = BackrefError::invalid_token(300, 0);
        assert!(err.to_string().contains("litlen 300"));

        let err = BackrefError::invalid_option("nice_length must be in 3..=258");
        assert!(err.to_string().contains("nice_length"));
    }

    #[test]
    fn test_corrupt_match_display() {
        let err = BackrefError::corrupt_match(12, 3, 5, Some(2));
        assert!(err.to_string().contains("first mismatch at offset 2"));

        let err = BackrefError::corrupt_match(1, 4, 3, None);
        assert!(err.to_string().contains("outside the buffer"));
    }
}
