//! Core traits shared by LZ77 token producers and consumers.
//!
//! A producer (the lazy matcher, or an optimal parser) only ever talks to a
//! [`TokenSink`]. Downstream stages read the finished container and never
//! care which producer filled it.

use crate::error::{BackrefError, Result};

/// Destination for literal and back-reference tokens.
///
/// Implementations must reject any pair that violates the DEFLATE token
/// model: literals are `(0..=255, 0)`, matches are `(3..=258, 1..=32768)`.
pub trait TokenSink {
    /// Append one raw `(litlen, dist)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`BackrefError::InvalidToken`](crate::BackrefError::InvalidToken)
    /// when the pair is neither a valid literal nor a valid match.
    fn push(&mut self, litlen: u16, dist: u16) -> Result<()>;

    /// Append a literal byte.
    fn push_literal(&mut self, byte: u8) -> Result<()> {
        self.push(u16::from(byte), 0)
    }

    /// Append a back-reference.
    ///
    /// # Errors
    ///
    /// Returns [`BackrefError::InvalidToken`] for a zero distance, which would
    /// otherwise be taken for a literal, or for any pair `push` rejects.
    fn push_match(&mut self, length: u16, distance: u16) -> Result<()> {
        if distance == 0 {
            return Err(BackrefError::invalid_token(length, distance));
        }
        self.push(length, distance)
    }

    /// Number of tokens accepted so far.
    fn token_count(&self) -> usize;
}

/// Compression level for producers that support it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompressionLevel(u8);

impl CompressionLevel {
    /// Fastest level.
    pub const FAST: Self = Self(1);
    /// Default level (balanced).
    pub const DEFAULT: Self = Self(6);
    /// Best level (slowest).
    pub const BEST: Self = Self(9);

    /// Create a custom compression level (0-9).
    pub fn new(level: u8) -> Self {
        Self(level.min(9))
    }

    /// Get the level value.
    pub fn level(&self) -> u8 {
        self.0
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for CompressionLevel {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal sink that only enforces the literal range.
    struct Collect(Vec<(u16, u16)>);

    impl TokenSink for Collect {
        fn push(&mut self, litlen: u16, dist: u16) -> Result<()> {
            if dist == 0 && litlen > 255 {
                return Err(BackrefError::invalid_token(litlen, dist));
            }
            self.0.push((litlen, dist));
            Ok(())
        }

        fn token_count(&self) -> usize {
            self.0.len()
        }
    }

    #[test]
    fn test_compression_level() {
        assert_eq!(CompressionLevel::FAST.level(), 1);
        assert_eq!(CompressionLevel::DEFAULT.level(), 6);
        assert_eq!(CompressionLevel::BEST.level(), 9);
        assert_eq!(CompressionLevel::default(), CompressionLevel::DEFAULT);

        // Test clamping
        assert_eq!(CompressionLevel::new(100).level(), 9);
        assert_eq!(CompressionLevel::from(3).level(), 3);
    }

    #[test]
    fn test_sink_default_methods() {
        let mut sink = Collect(Vec::new());
        sink.push_literal(b'x').unwrap();
        sink.push_match(4, 1).unwrap();
        assert_eq!(sink.token_count(), 2);
        assert_eq!(sink.0, vec![(u16::from(b'x'), 0), (4, 1)]);
        assert!(sink.push(256, 0).is_err());
    }

    #[test]
    fn test_sink_push_match_needs_distance() {
        let mut sink = Collect(Vec::new());
        assert_eq!(sink.push_match(5, 0), Err(BackrefError::invalid_token(5, 0)));
        assert_eq!(sink.token_count(), 0);
    }
}
