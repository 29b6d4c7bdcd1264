//! # Streaming UTF-8 Validator
//!
//! Incremental UTF-8 checking for WebSocket text-frame payloads that arrive in
//! arbitrary fragments. No bytes are buffered: the validator carries only the
//! automaton state across calls, so a multi-byte sequence may straddle any
//! number of chunk boundaries.
//!
//! ## Byte Classes
//! ```text
//! 00..7F                      ASCII
//! C2..DF  80..BF              2-byte sequence
//! E0      A0..BF 80..BF       3-byte, no overlongs
//! E1..EC  80..BF 80..BF       3-byte
//! ED      80..9F 80..BF       3-byte, no surrogates
//! EE..EF  80..BF 80..BF       3-byte
//! F0      90..BF 80..BF x2    4-byte, no overlongs
//! F1..F3  80..BF 80..BF x2    4-byte
//! F4      80..8F 80..BF x2    4-byte, nothing above U+10FFFF
//! ```
//! `C0`, `C1`, `F5..FF` and stray continuation bytes reject immediately.
//!
//! ## Position Reporting
//! On success `position()` is the cumulative number of bytes consumed since
//! construction or `reset()`. On rejection the index of the failing byte
//! *within the buffer passed to that call* is added instead of the window
//! length. The asymmetry is relied on by existing diagnostics and is kept.

use tracing::{debug, trace};

/// Automaton state. `Reject` has no outgoing transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// On a code point boundary
    Accept,
    /// Inside a sequence: `remaining` continuation bytes still expected, the
    /// next of which must lie in `lo..=hi`
    Partial { remaining: u8, lo: u8, hi: u8 },
    Reject,
}

impl State {
    #[inline]
    fn step(self, byte: u8) -> State {
        match self {
            State::Accept => lead(byte),
            State::Partial { remaining, lo, hi } => {
                if byte < lo || byte > hi {
                    State::Reject
                } else if remaining == 1 {
                    State::Accept
                } else {
                    State::Partial {
                        remaining: remaining - 1,
                        lo: 0x80,
                        hi: 0xBF,
                    }
                }
            }
            State::Reject => State::Reject,
        }
    }
}

#[inline]
fn lead(byte: u8) -> State {
    let partial = |remaining, lo, hi| State::Partial { remaining, lo, hi };
    match byte {
        0x00..=0x7F => State::Accept,
        0xC2..=0xDF => partial(1, 0x80, 0xBF),
        0xE0 => partial(2, 0xA0, 0xBF),
        0xE1..=0xEC | 0xEE | 0xEF => partial(2, 0x80, 0xBF),
        0xED => partial(2, 0x80, 0x9F),
        0xF0 => partial(3, 0x90, 0xBF),
        0xF1..=0xF3 => partial(3, 0x80, 0xBF),
        0xF4 => partial(3, 0x80, 0x8F),
        // 80..BF (continuation), C0, C1 (overlong), F5..FF (out of range)
        _ => State::Reject,
    }
}

/// Incremental UTF-8 validator, one per connection.
///
/// Not synchronized: the connection's read loop owns it and drives it
/// sequentially.
#[derive(Debug, Clone)]
pub struct Utf8Validator {
    state: State,
    position: usize,
}

impl Utf8Validator {
    /// Create a validator in the accepting state at position 0
    pub fn new() -> Self {
        Self {
            state: State::Accept,
            position: 0,
        }
    }

    /// Validate the next chunk of the stream.
    ///
    /// Returns `false` as soon as a byte violates UTF-8. An incomplete
    /// sequence at the end of `chunk` is not a failure.
    pub fn validate(&mut self, chunk: &[u8]) -> bool {
        self.validate_window(chunk, 0, chunk.len())
    }

    /// Validate `buf[offset..offset + length]`.
    ///
    /// On rejection the reported index is absolute within `buf`, not relative
    /// to `offset`.
    ///
    /// # Panics
    /// Panics if the window lies outside `buf`, like slice indexing does.
    pub fn validate_window(&mut self, buf: &[u8], offset: usize, length: usize) -> bool {
        if self.state == State::Reject {
            return false;
        }

        let window = &buf[offset..offset + length];
        for (i, &byte) in window.iter().enumerate() {
            self.state = self.state.step(byte);
            if self.state == State::Reject {
                let index = offset + i;
                self.position += index;
                debug!(index, byte, position = self.position, "invalid UTF-8");
                return false;
            }
        }

        self.position += length;
        trace!(length, position = self.position, "UTF-8 window accepted");
        true
    }

    /// True when the stream so far ends on a code point boundary.
    ///
    /// False while a multi-byte sequence is still open and, permanently until
    /// [`reset`](Self::reset), after a violation.
    pub fn is_valid(&self) -> bool {
        self.state == State::Accept
    }

    /// True once a violation has been seen
    pub fn is_rejected(&self) -> bool {
        self.state == State::Reject
    }

    /// True while a multi-byte sequence is open at the end of the input so far
    pub fn is_incomplete(&self) -> bool {
        matches!(self.state, State::Partial { .. })
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Return to the initial state so the validator can check a new message
    pub fn reset(&mut self) {
        self.state = State::Accept;
        self.position = 0;
    }
}

impl Default for Utf8Validator {
    fn default() -> Self {
        Self::new()
    }
}
