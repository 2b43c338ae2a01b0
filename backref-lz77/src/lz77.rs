//! Lazy LZ77 parsing for DEFLATE.
//!
//! The matcher walks the input once. At each position it asks the hash-chain
//! finder for the longest back-reference within the 32KB window and either:
//! - Emits a literal byte if no match of 3+ bytes exists
//! - Emits a (length, distance) pair otherwise
//!
//! # Lazy evaluation
//!
//! Before committing a match at `p` the matcher also looks at `p + 1`. If
//! that position has a strictly longer match, `p` is emitted as a literal
//! and the longer match is taken one step later. The lookahead is skipped
//! when the match already reaches `nice_length`, or when there is no byte
//! left to look at.
//!
//! Bytes before `instart` act as a preset dictionary: they are indexed and
//! may be referenced, but never tokenized.

use crate::hash::{Match, MatchFinder};
use crate::options::Lz77Options;
use crate::store::Lz77Store;
use crate::tables::WINDOW_SIZE;
use crate::trace::{trace_deferred, trace_parse_end, trace_parse_start};
use crate::verify::verify_len_dist;
use backref_core::error::{BackrefError, Result};
use backref_core::traits::TokenSink;

/// Single-pass lazy matcher.
///
/// The hash-chain index is owned by the matcher and reused by every parse,
/// so running many parses with one matcher avoids reallocating it.
#[derive(Debug, Clone)]
pub struct LazyMatcher {
    /// Hash-chain index over the current buffer.
    finder: MatchFinder,
    /// Search effort and lookahead settings.
    options: Lz77Options,
}

impl LazyMatcher {
    /// Create a matcher with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`BackrefError::InvalidOption`] if the options are out of range.
    pub fn new(options: Lz77Options) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            finder: MatchFinder::new(),
            options,
        })
    }

    /// Options this matcher was built with.
    pub fn options(&self) -> &Lz77Options {
        &self.options
    }

    /// Parse `data[instart..inend]` into a new store.
    ///
    /// # Errors
    ///
    /// Returns [`BackrefError::InvalidRange`] if `instart > inend` or
    /// `inend > data.len()`. No store is produced in that case.
    pub fn parse(&mut self, data: &[u8], instart: usize, inend: usize) -> Result<Lz77Store> {
        let mut store = Lz77Store::new();
        self.parse_into(data, instart, inend, &mut store)?;
        Ok(store)
    }

    /// Parse `data[instart..inend]`, appending tokens to `sink`.
    ///
    /// The range is checked before anything is appended.
    pub fn parse_into<S: TokenSink>(
        &mut self,
        data: &[u8],
        instart: usize,
        inend: usize,
        sink: &mut S,
    ) -> Result<()> {
        if instart > inend || inend > data.len() {
            return Err(BackrefError::invalid_range(instart, inend, data.len()));
        }

        // Nothing past the range may be matched against.
        let data = &data[..inend];
        let window_start = instart.saturating_sub(WINDOW_SIZE);
        trace_parse_start(instart, inend, instart - window_start);

        let start_count = sink.token_count();
        if instart == inend {
            trace_parse_end(0, 0, 0);
            return Ok(());
        }

        self.finder.reset();
        for pos in window_start..instart {
            self.finder.insert(data, pos);
        }

        let max_chain_hits = self.options.max_chain_hits;
        let nice_length = self.options.nice_length;
        let mut pos = instart;
        // Lookahead result for `pos`, carried over after a deferral.
        let mut held: Option<Option<Match>> = None;
        let mut matches = 0usize;
        let mut deferred = 0usize;

        while pos < inend {
            let current = match held.take() {
                Some(found) => found,
                None => self.finder.find_longest(data, pos, max_chain_hits),
            };
            self.finder.insert(data, pos);

            let Some(found) = current else {
                sink.push_literal(data[pos])?;
                pos += 1;
                continue;
            };

            if self.options.lazy_matching
                && (found.length as usize) < nice_length
                && pos + 1 < inend
            {
                let next = self.finder.find_longest(data, pos + 1, max_chain_hits);
                if let Some(longer) = next.filter(|n| n.length > found.length) {
                    trace_deferred(pos, found.length, longer.length);
                    deferred += 1;
                    sink.push_literal(data[pos])?;
                    pos += 1;
                    held = Some(next);
                    continue;
                }
            }

            debug_assert!(
                verify_len_dist(data, pos, found.distance, found.length).is_ok(),
                "match finder produced a corrupt match at {pos}"
            );
            sink.push_match(found.length, found.distance)?;
            matches += 1;

            let end = pos + found.length as usize;
            for p in pos + 1..end {
                self.finder.insert(data, p);
            }
            pos = end;
        }

        trace_parse_end(sink.token_count() - start_count, matches, deferred);
        Ok(())
    }
}

/// Parse `data[instart..inend]` with a fresh matcher.
///
/// Bytes in `data[..instart]` serve as a dictionary.
pub fn lz77_lazy(
    options: &Lz77Options,
    data: &[u8],
    instart: usize,
    inend: usize,
) -> Result<Lz77Store> {
    LazyMatcher::new(*options)?.parse(data, instart, inend)
}

/// Parse several independent buffers in parallel (requires `parallel` feature).
///
/// Each buffer is parsed in full with its own matcher; the result is
/// identical to parsing them one after another.
#[cfg(feature = "parallel")]
pub fn lz77_lazy_batch(options: &Lz77Options, inputs: &[&[u8]]) -> Result<Vec<Lz77Store>> {
    use rayon::prelude::*;

    options.validate()?;
    inputs
        .par_iter()
        .map_init(
            || LazyMatcher {
                finder: MatchFinder::new(),
                options: *options,
            },
            |matcher, input| matcher.parse(input, 0, input.len()),
        )
        .collect()
}
