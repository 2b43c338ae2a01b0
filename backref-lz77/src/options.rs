//! Matcher configuration.

use crate::tables::{MAX_MATCH, MIN_MATCH};
use backref_core::error::{BackrefError, Result};
use backref_core::traits::CompressionLevel;

/// Default number of chain candidates examined per position.
pub const DEFAULT_MAX_CHAIN_HITS: usize = 8192;

/// Options controlling the lazy matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Lz77Options {
    /// Upper bound on hash-chain candidates examined per match query.
    pub max_chain_hits: usize,
    /// A match at least this long is committed without looking one byte ahead.
    pub nice_length: usize,
    /// Defer a match when the next position has a strictly longer one.
    /// When off, every match found is committed immediately (greedy parse).
    pub lazy_matching: bool,
}

impl Lz77Options {
    /// Default options: deep chain search, lazy matching, no early exit.
    pub fn new() -> Self {
        Self {
            max_chain_hits: DEFAULT_MAX_CHAIN_HITS,
            nice_length: MAX_MATCH,
            lazy_matching: true,
        }
    }

    /// Options resembling a gzip compression level (0-9).
    ///
    /// Level 0 parses like level 1; choosing stored blocks is up to the
    /// entropy stage.
    pub fn with_level(level: impl Into<CompressionLevel>) -> Self {
        let (max_chain_hits, nice_length, lazy_matching) = match level.into().level() {
            0 | 1 => (4, 8, false),
            2 => (8, 16, false),
            3 => (32, 32, false),
            4 => (16, 32, true),
            5 => (32, 64, true),
            6 => (128, 128, true),
            7 => (256, 128, true),
            8 => (1024, MAX_MATCH, true),
            _ => (4096, MAX_MATCH, true),
        };

        Self {
            max_chain_hits,
            nice_length,
            lazy_matching,
        }
    }

    /// Set the chain search limit.
    pub fn with_max_chain_hits(mut self, max_chain_hits: usize) -> Self {
        self.max_chain_hits = max_chain_hits;
        self
    }

    /// Set the lookahead early-exit length.
    pub fn with_nice_length(mut self, nice_length: usize) -> Self {
        self.nice_length = nice_length;
        self
    }

    /// Turn lazy evaluation on or off.
    pub fn with_lazy_matching(mut self, lazy_matching: bool) -> Self {
        self.lazy_matching = lazy_matching;
        self
    }

    /// Check that every option is in range.
    ///
    /// # Errors
    ///
    /// Returns [`BackrefError::InvalidOption`] if `max_chain_hits` is zero or
    /// `nice_length` is outside 3..=258.
    pub fn validate(&self) -> Result<()> {
        if self.max_chain_hits == 0 {
            return Err(BackrefError::invalid_option(
                "max_chain_hits must be at least 1",
            ));
        }
        if !(MIN_MATCH..=MAX_MATCH).contains(&self.nice_length) {
            return Err(BackrefError::invalid_option(format!(
                "nice_length {} is outside {}..={}",
                self.nice_length, MIN_MATCH, MAX_MATCH
            )));
        }
        Ok(())
    }
}

impl Default for Lz77Options {
    fn default() -> Self {
        Self::new()
    }
}
