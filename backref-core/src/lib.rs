//! # backref Core
//!
//! Core components shared by the backref LZ77 crates.
//!
//! - [`error`]: Error types
//! - [`traits`]: The [`TokenSink`] seam between token producers and the
//!   token container, and [`CompressionLevel`]
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Entropy coding (external)                               │
//! │     Huffman construction, bit packing                   │
//! ├─────────────────────────────────────────────────────────┤
//! │ LZ77 stage (backref-lz77)                               │
//! │     Lazy matcher, token store, verifier, symbol tally   │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate)                                       │
//! │     Errors, TokenSink, CompressionLevel                 │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use backref_core::{BackrefError, CompressionLevel};
//!
//! let level = CompressionLevel::new(12);
//! assert_eq!(level.level(), 9);
//!
//! let err = BackrefError::invalid_range(5, 2, 4);
//! assert!(err.to_string().contains("Invalid input range"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod traits;

// Re-exports for convenience
pub use error::{BackrefError, Result};
pub use traits::{CompressionLevel, TokenSink};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BackrefError, Result};
    pub use crate::traits::{CompressionLevel, TokenSink};
}
