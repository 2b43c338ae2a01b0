//! Matcher tracing.
//!
//! Structured events for parse runs and lazy decisions. Everything here is
//! compiled behind the `tracing` feature and turns into empty inline
//! functions when it is disabled.

/// Target name for tracing events.
#[cfg(feature = "tracing")]
const LZ77_TARGET: &str = "backref::lz77";

/// Traces the start of a parse over `[instart, inend)`.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_parse_start(instart: usize, inend: usize, dictionary: usize) {
    tracing::debug!(
        target: LZ77_TARGET,
        instart = instart,
        inend = inend,
        dictionary = dictionary,
        "lz77: starting lazy parse"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_parse_start(_instart: usize, _inend: usize, _dictionary: usize) {}

/// Traces a match deferred in favour of a longer one at the next position.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_deferred(pos: usize, length: u16, next_length: u16) {
    tracing::trace!(
        target: LZ77_TARGET,
        pos = pos,
        length = length,
        next_length = next_length,
        "lz77: match deferred"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_deferred(_pos: usize, _length: u16, _next_length: u16) {}

/// Traces the end of a parse.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_parse_end(tokens: usize, matches: usize, deferred: usize) {
    tracing::debug!(
        target: LZ77_TARGET,
        tokens = tokens,
        matches = matches,
        deferred = deferred,
        "lz77: parse complete"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_parse_end(_tokens: usize, _matches: usize, _deferred: usize) {}
