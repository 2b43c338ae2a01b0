//! Symbol frequency tally for entropy coding.
//!
//! Walks a sub-range of a token sequence and counts how often each
//! literal/length symbol and each distance symbol occurs. The counts feed
//! Huffman code construction downstream.

use crate::store::Lz77Token;
use crate::tables::{DIST_SYMBOLS, END_OF_BLOCK, LITLEN_SYMBOLS, dist_symbol, length_symbol};
use backref_core::error::{BackrefError, Result};

/// Which variant of the DEFLATE alphabet a tally fills in.
///
/// The variant never changes which bucket a literal, length or distance
/// lands in. It only decides whether reserved positions are touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolAlphabet {
    /// Literal, length and distance symbols only.
    #[default]
    Deflate,
    /// As [`SymbolAlphabet::Deflate`], with the end-of-block symbol counted
    /// once so the result can be handed straight to a Huffman builder.
    DeflateWithEndOfBlock,
}

impl SymbolAlphabet {
    /// Decode the numeric alphabet mode.
    ///
    /// `0` is the plain DEFLATE alphabet, `1` adds the end-of-block symbol.
    pub fn from_mode(mode: u8) -> Result<Self> {
        match mode {
            0 => Ok(Self::Deflate),
            1 => Ok(Self::DeflateWithEndOfBlock),
            other => Err(BackrefError::invalid_option(format!(
                "unknown symbol alphabet mode {other}"
            ))),
        }
    }

    /// The numeric mode this variant decodes from.
    pub fn mode(self) -> u8 {
        match self {
            Self::Deflate => 0,
            Self::DeflateWithEndOfBlock => 1,
        }
    }

    /// Whether the end-of-block bucket is filled in.
    pub fn counts_end_of_block(self) -> bool {
        matches!(self, Self::DeflateWithEndOfBlock)
    }
}

/// Literal/length and distance symbol frequencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCounts {
    /// Count per literal/length symbol (0-255 literals, 256 end of block,
    /// 257-285 lengths, 286-287 reserved).
    pub litlen: [usize; LITLEN_SYMBOLS],
    /// Count per distance symbol (0-29, 30-31 reserved).
    pub dist: [usize; DIST_SYMBOLS],
}

impl SymbolCounts {
    /// All-zero counts.
    pub fn new() -> Self {
        Self {
            litlen: [0; LITLEN_SYMBOLS],
            dist: [0; DIST_SYMBOLS],
        }
    }

    /// Sum of the literal buckets (0-255).
    pub fn literal_total(&self) -> usize {
        self.litlen[..END_OF_BLOCK].iter().sum()
    }

    /// Sum of the length buckets (257-287).
    pub fn length_total(&self) -> usize {
        self.litlen[END_OF_BLOCK + 1..].iter().sum()
    }

    /// Sum of all distance buckets.
    pub fn dist_total(&self) -> usize {
        self.dist.iter().sum()
    }
}

impl Default for SymbolCounts {
    fn default() -> Self {
        Self::new()
    }
}

/// Count literal, length and distance symbols of tokens `[start, end)`.
///
/// `litlens` and `dists` are the parallel token arrays of a store; they may
/// belong to a store that is still being filled, as long as the range only
/// covers tokens already written.
///
/// # Errors
///
/// Returns [`BackrefError::InvalidRange`] if `start > end`, if `end` exceeds
/// the token count, or if the two arrays differ in length.
/// Returns [`BackrefError::InvalidToken`] for the first pair in the range
/// that is neither a literal nor a match.
pub fn lz77_counts(
    litlens: &[u16],
    dists: &[u16],
    start: usize,
    end: usize,
    alphabet: SymbolAlphabet,
) -> Result<SymbolCounts> {
    let size = litlens.len();
    if dists.len() != size || start > end || end > size {
        return Err(BackrefError::invalid_range(
            start,
            end,
            size.min(dists.len()),
        ));
    }

    let mut counts = SymbolCounts::new();
    for (&litlen, &dist) in litlens[start..end].iter().zip(&dists[start..end]) {
        match Lz77Token::from_pair(litlen, dist)? {
            Lz77Token::Literal(byte) => counts.litlen[byte as usize] += 1,
            Lz77Token::Match { length, distance } => {
                counts.litlen[length_symbol(length)] += 1;
                counts.dist[dist_symbol(distance)] += 1;
            }
        }
    }

    if alphabet.counts_end_of_block() {
        counts.litlen[END_OF_BLOCK] = 1;
    }

    Ok(counts)
}
