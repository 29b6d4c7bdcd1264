//! WAMP identifiers.
//!
//! Session-scoped IDs (request IDs for calls, subscriptions and registrations)
//! come from a per-session [`IdGenerator`]. Global-scope IDs come from
//! [`random_id`]. Both stay within `[1, 2^53]` so they round-trip exactly
//! through serializers that carry numbers as doubles.

use crate::config::MAX_ID;
use rand::Rng;
use tracing::trace;

/// Sequential generator for session-scoped IDs.
///
/// Yields 1, 2, ..., 2^53 and then wraps back to 1. Owned by one session and
/// driven by `&mut self`; share it across threads only behind a lock.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// A generator whose first ID is 1
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// A generator that continues a sequence after `last`.
    ///
    /// `starting_after(MAX_ID)` wraps to 1 on its first call.
    pub fn starting_after(last: u64) -> Self {
        Self { next: last }
    }

    /// Issue the next ID.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        self.next = self.next.saturating_add(1);
        if self.next > MAX_ID {
            trace!("session ID sequence wrapped");
            self.next = 1;
        }
        self.next
    }

    /// Last issued ID, or 0 if none has been issued yet
    pub fn last(&self) -> u64 {
        self.next
    }
}

/// Draw a global-scope ID uniformly from `[1, 2^53]`.
pub fn random_id() -> u64 {
    rand::rng().random_range(1..=MAX_ID)
}
