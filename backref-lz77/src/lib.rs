//! # backref LZ77
//!
//! Pure Rust LZ77 back-reference stage for DEFLATE (RFC 1951) compressors.
//!
//! This crate turns a byte buffer into literals and length/distance
//! back-references, the token stream a DEFLATE entropy coder consumes.
//!
//! ## Features
//!
//! - **Token store**: parallel literal/length and distance arrays with
//!   checked appends, deep copy and idempotent release
//! - **Lazy matcher**: single pass, hash-chain match search over a 32KB
//!   window, one-step lookahead before committing a match
//! - **Verification**: byte-for-byte check of any back-reference
//! - **Symbol tally**: literal/length and distance symbol frequencies for
//!   Huffman code construction
//!
//! ## Example
//!
//! ```rust
//! use backref_lz77::{Lz77Options, lz77_lazy};
//!
//! let data = b"abcabcabcabc";
//! let store = lz77_lazy(&Lz77Options::default(), data, 0, data.len()).unwrap();
//!
//! // 'a', 'b', 'c', then one match of length 9 at distance 3
//! assert_eq!(store.len(), 4);
//! assert_eq!(store.reconstruct(&[]).unwrap(), data);
//!
//! let counts = store.counts(0, store.len()).unwrap();
//! assert_eq!(counts.dist_total(), 1);
//! ```
//!
//! ## Cargo features
//!
//! - `parallel`: `lz77_lazy_batch` parses independent buffers with rayon
//! - `tracing`: debug/trace events from the matcher
//! - `serde`: serialization of [`Lz77Options`] and [`SymbolAlphabet`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod hash;
pub mod lz77;
pub mod options;
pub mod store;
pub mod tables;
pub mod tally;
pub mod verify;

mod trace;

// Re-exports
pub use hash::Match;
#[cfg(feature = "parallel")]
pub use lz77::lz77_lazy_batch;
pub use lz77::{LazyMatcher, lz77_lazy};
pub use options::Lz77Options;
pub use store::{Lz77Store, Lz77Token};
pub use tally::{SymbolAlphabet, SymbolCounts, lz77_counts};
pub use verify::verify_len_dist;

pub use backref_core::{BackrefError, Result, TokenSink};
