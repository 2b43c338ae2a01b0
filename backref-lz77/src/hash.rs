//! Hash-chain match finder.
//!
//! Positions are indexed by a hash of their first three bytes. `head` holds
//! the newest position for each hash and `prev` links every position to the
//! previous one with the same hash, so a chain walk visits candidates in
//! order of increasing distance. The walk stops at the window edge or after
//! `max_chain_hits` candidates.
//!
//! Positions must be inserted in increasing order and a position must be
//! queried before it is inserted. Under that discipline a `prev` slot can
//! only be overwritten once its position has left the window, so chains
//! never need to be cleaned up while sliding.

use crate::tables::{MAX_MATCH, MIN_MATCH, WINDOW_SIZE};

/// Size of the hash table (power of 2).
const HASH_SIZE: usize = 32768;

/// Hash mask.
const HASH_MASK: usize = HASH_SIZE - 1;

/// Window mask for indexing `prev`.
const WINDOW_MASK: usize = WINDOW_SIZE - 1;

/// Empty slot marker.
const NIL: usize = usize::MAX;

/// The longest back-reference found for a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Number of matching bytes (3-258).
    pub length: u16,
    /// Distance to the source bytes (1-32768).
    pub distance: u16,
}

/// Hash-chain index over a byte buffer.
#[derive(Debug, Clone)]
pub(crate) struct MatchFinder {
    /// Hash table: maps hash -> newest position.
    head: Vec<usize>,
    /// Hash chain: previous position with the same hash.
    prev: Vec<usize>,
}

impl MatchFinder {
    /// Create an empty finder.
    pub(crate) fn new() -> Self {
        Self {
            head: vec![NIL; HASH_SIZE],
            prev: vec![NIL; WINDOW_SIZE],
        }
    }

    /// Forget every indexed position, keeping the allocations.
    pub(crate) fn reset(&mut self) {
        self.head.fill(NIL);
        self.prev.fill(NIL);
    }

    /// Compute hash for 3 bytes.
    #[inline(always)]
    fn hash(b0: u8, b1: u8, b2: u8) -> usize {
        let h = ((b0 as usize).wrapping_mul(506832829))
            ^ ((b1 as usize).wrapping_mul(2654435761) << 8)
            ^ ((b2 as usize).wrapping_mul(374761393) << 16);
        (h ^ (h >> 15)) & HASH_MASK
    }

    /// Index `pos`. Positions with fewer than three bytes left are skipped,
    /// since no match can start there.
    #[inline]
    pub(crate) fn insert(&mut self, data: &[u8], pos: usize) {
        if pos + MIN_MATCH <= data.len() {
            let h = Self::hash(data[pos], data[pos + 1], data[pos + 2]);
            self.prev[pos & WINDOW_MASK] = self.head[h];
            self.head[h] = pos;
        }
    }

    /// Find the longest match for `pos` among already indexed positions.
    ///
    /// The match never runs past the end of `data` and never exceeds 258
    /// bytes. On equal lengths the smallest distance wins. Returns `None`
    /// when nothing of at least three bytes is found.
    pub(crate) fn find_longest(
        &self,
        data: &[u8],
        pos: usize,
        max_chain_hits: usize,
    ) -> Option<Match> {
        let limit = MAX_MATCH.min(data.len().saturating_sub(pos));
        if limit < MIN_MATCH {
            return None;
        }

        let h = Self::hash(data[pos], data[pos + 1], data[pos + 2]);
        let min_pos = pos.saturating_sub(WINDOW_SIZE);
        let scan = &data[pos..pos + limit];

        let mut best_len = MIN_MATCH - 1;
        let mut best_dist = 0usize;
        let mut candidate = self.head[h];
        let mut hits = 0;

        while candidate != NIL && candidate >= min_pos && hits < max_chain_hits {
            if candidate < pos {
                // Check the byte that would extend the best match first; most
                // candidates fail there.
                if data[candidate + best_len] == scan[best_len] {
                    let len = data[candidate..]
                        .iter()
                        .zip(scan)
                        .take_while(|(a, b)| a == b)
                        .count();

                    if len > best_len {
                        best_len = len;
                        best_dist = pos - candidate;
                        if len >= limit {
                            break;
                        }
                    }
                }
                hits += 1;
            }

            let next = self.prev[candidate & WINDOW_MASK];
            if next != NIL && next >= candidate {
                // Slot reused by a newer position; the chain ends here.
                break;
            }
            candidate = next;
        }

        (best_len >= MIN_MATCH).then(|| Match {
            length: best_len as u16,
            distance: best_dist as u16,
        })
    }
}
