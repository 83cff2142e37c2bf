/*!
 * Ordering guard for asynchronous file reads.
 *
 * Every file selection starts a read that completes later. When selections
 * overlap, an older read may finish after a newer one. Each read takes a
 * token when it starts, and its result is applied only if that token is
 * still the most recently issued one.
 */

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one read request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReadToken(u64);

impl ReadToken {
    /// Sequence number of the request
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing read tokens
#[derive(Debug, Default)]
pub struct ReadSequencer {
    latest: AtomicU64,
}

impl ReadSequencer {
    /// Create a sequencer that has issued no tokens
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token newer than every token issued before
    pub fn issue(&self) -> ReadToken {
        ReadToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `token` is the most recently issued token
    pub fn is_current(&self, token: ReadToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Invalidate every outstanding token
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}
