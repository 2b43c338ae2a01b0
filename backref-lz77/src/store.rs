//! Token container for LZ77 output.
//!
//! [`Lz77Store`] keeps tokens as two parallel arrays, the layout entropy
//! coders and optimal parsers both work on:
//!
//! - `litlens[i]`: the literal byte, or the match length (3-258)
//! - `dists[i]`: 0 for a literal, or the match distance (1-32768)
//!
//! Both arrays always have the same length. Every append is checked, so a
//! store can only ever hold tokens that satisfy the DEFLATE token model.

use crate::tables::{MAX_MATCH, MIN_MATCH, WINDOW_SIZE};
use crate::tally::{SymbolAlphabet, SymbolCounts, lz77_counts};
use crate::verify::verify_len_dist;
use backref_core::error::{BackrefError, Result};
use backref_core::traits::TokenSink;

/// A single decoded token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lz77Token {
    /// A literal byte.
    Literal(u8),
    /// A back-reference to previously seen data.
    Match {
        /// Number of bytes to copy (3-258).
        length: u16,
        /// Distance back into the window (1-32768).
        distance: u16,
    },
}

impl Lz77Token {
    /// Decode a raw `(litlen, dist)` pair.
    pub fn from_pair(litlen: u16, dist: u16) -> Result<Self> {
        if dist == 0 {
            u8::try_from(litlen)
                .map(Self::Literal)
                .map_err(|_| BackrefError::invalid_token(litlen, dist))
        } else if (MIN_MATCH..=MAX_MATCH).contains(&(litlen as usize))
            && dist as usize <= WINDOW_SIZE
        {
            Ok(Self::Match {
                length: litlen,
                distance: dist,
            })
        } else {
            Err(BackrefError::invalid_token(litlen, dist))
        }
    }

    /// Encode as a raw `(litlen, dist)` pair.
    pub fn to_pair(self) -> (u16, u16) {
        match self {
            Self::Literal(byte) => (u16::from(byte), 0),
            Self::Match { length, distance } => (length, distance),
        }
    }

    /// Number of input bytes this token stands for.
    pub fn byte_len(self) -> usize {
        match self {
            Self::Literal(_) => 1,
            Self::Match { length, .. } => length as usize,
        }
    }
}

/// Owned sequence of LZ77 tokens.
///
/// A new store owns no backing storage. `Clone` is a deep copy; the copy
/// shares nothing with the original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lz77Store {
    /// Literal bytes or match lengths.
    litlens: Vec<u16>,
    /// 0 for literals, match distances otherwise.
    dists: Vec<u16>,
    /// Alphabet variant used when tallying this store.
    alphabet: SymbolAlphabet,
}

impl Lz77Store {
    /// Create an empty store using the plain DEFLATE alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that tallies with the given alphabet.
    pub fn with_alphabet(alphabet: SymbolAlphabet) -> Self {
        Self {
            alphabet,
            ..Self::default()
        }
    }

    /// Append one raw `(litlen, dist)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`BackrefError::InvalidToken`] and leaves the store unchanged
    /// when the pair is neither a literal (`0..=255`, distance 0) nor a
    /// match (`3..=258`, distance `1..=32768`).
    pub fn push(&mut self, litlen: u16, dist: u16) -> Result<()> {
        Lz77Token::from_pair(litlen, dist)?;
        self.litlens.push(litlen);
        self.dists.push(dist);
        Ok(())
    }

    /// Append a literal byte. Literals are always valid.
    pub fn push_literal(&mut self, byte: u8) {
        self.litlens.push(u16::from(byte));
        self.dists.push(0);
    }

    /// Append a back-reference.
    pub fn push_match(&mut self, length: u16, distance: u16) -> Result<()> {
        if distance == 0 {
            return Err(BackrefError::invalid_token(length, distance));
        }
        self.push(length, distance)
    }

    /// Replace the contents of this store with a deep copy of `source`.
    pub fn copy_from(&mut self, source: &Self) {
        self.clone_from(source);
    }

    /// Append every token of `other`, keeping this store's alphabet.
    pub fn append_store(&mut self, other: &Self) {
        self.litlens.extend_from_slice(&other.litlens);
        self.dists.extend_from_slice(&other.dists);
    }

    /// Free the backing storage and return to the empty state.
    ///
    /// Releasing an empty or already released store does nothing.
    pub fn release(&mut self) {
        self.litlens = Vec::new();
        self.dists = Vec::new();
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.litlens.len()
    }

    /// Whether the store holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.litlens.is_empty()
    }

    /// Number of tokens that fit without reallocating.
    pub fn capacity(&self) -> usize {
        self.litlens.capacity().min(self.dists.capacity())
    }

    /// Literal bytes or match lengths, one per token.
    pub fn litlens(&self) -> &[u16] {
        &self.litlens
    }

    /// Distances, one per token (0 for literals).
    pub fn dists(&self) -> &[u16] {
        &self.dists
    }

    /// Alphabet variant used by [`Lz77Store::counts`].
    pub fn alphabet(&self) -> SymbolAlphabet {
        self.alphabet
    }

    /// Change the alphabet variant used by [`Lz77Store::counts`].
    pub fn set_alphabet(&mut self, alphabet: SymbolAlphabet) {
        self.alphabet = alphabet;
    }

    /// Token at `index`.
    pub fn get(&self, index: usize) -> Option<Lz77Token> {
        let litlen = *self.litlens.get(index)?;
        let dist = self.dists[index];
        Some(if dist == 0 {
            Lz77Token::Literal(litlen as u8)
        } else {
            Lz77Token::Match {
                length: litlen,
                distance: dist,
            }
        })
    }

    /// Iterate over the tokens in order.
    pub fn iter(&self) -> impl Iterator<Item = Lz77Token> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Number of match tokens.
    pub fn match_count(&self) -> usize {
        self.dists.iter().filter(|&&d| d != 0).count()
    }

    /// Number of input bytes covered by tokens `[lstart, lend)`.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    pub fn byte_range(&self, lstart: usize, lend: usize) -> usize {
        self.litlens[lstart..lend]
            .iter()
            .zip(&self.dists[lstart..lend])
            .map(|(&l, &d)| if d == 0 { 1 } else { l as usize })
            .sum()
    }

    /// Symbol frequencies of tokens `[start, end)`, using this store's alphabet.
    pub fn counts(&self, start: usize, end: usize) -> Result<SymbolCounts> {
        lz77_counts(&self.litlens, &self.dists, start, end, self.alphabet)
    }

    /// Check every match against `data`, with the first token at `instart`.
    ///
    /// Literals are not compared; only back-references are verified.
    pub fn verify(&self, data: &[u8], instart: usize) -> Result<()> {
        let mut pos = instart;
        for token in self.iter() {
            if let Lz77Token::Match { length, distance } = token {
                verify_len_dist(data, pos, distance, length)?;
            }
            pos += token.byte_len();
        }
        Ok(())
    }

    /// Replay the tokens after `dictionary` and return the bytes they produce.
    ///
    /// # Errors
    ///
    /// Returns [`BackrefError::CorruptMatch`] if a distance reaches before
    /// the start of the dictionary.
    pub fn reconstruct(&self, dictionary: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(dictionary.len() + self.byte_range(0, self.len()));
        output.extend_from_slice(dictionary);

        for token in self.iter() {
            match token {
                Lz77Token::Literal(byte) => output.push(byte),
                Lz77Token::Match { length, distance } => {
                    let pos = output.len();
                    let d = distance as usize;
                    if d > pos {
                        return Err(BackrefError::corrupt_match(pos, distance, length, None));
                    }
                    // Byte by byte: the source may overlap what is being written.
                    for i in 0..length as usize {
                        output.push(output[pos - d + i]);
                    }
                }
            }
        }

        Ok(output.split_off(dictionary.len()))
    }
}

impl TokenSink for Lz77Store {
    fn push(&mut self, litlen: u16, dist: u16) -> Result<()> {
        Lz77Store::push(self, litlen, dist)
    }

    fn push_literal(&mut self, byte: u8) -> Result<()> {
        Lz77Store::push_literal(self, byte);
        Ok(())
    }

    fn push_match(&mut self, length: u16, distance: u16) -> Result<()> {
        Lz77Store::push_match(self, length, distance)
    }

    fn token_count(&self) -> usize {
        self.len()
    }
}
