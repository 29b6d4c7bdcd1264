//! Text frame assembly.
//!
//! A WebSocket text message may arrive as several continuation fragments.
//! The assembler validates each fragment as it lands, so corrupt input is
//! detected at the first bad byte instead of after the whole message has been
//! buffered, and hands a `String` to the deserializer once the frame is final.

use crate::config::TextFrameConfig;
use crate::error::{Error, ProtocolError, Result};
use crate::transport::utf8::Utf8Validator;
use bytes::BytesMut;
use tracing::{debug, instrument, warn};

#[derive(Debug)]
pub struct TextFrameAssembler {
    validator: Utf8Validator,
    buffer: BytesMut,
    validate_utf8: bool,
    max_size: usize,
    failed: Option<ProtocolError>,
}

impl TextFrameAssembler {
    pub fn new(config: &TextFrameConfig) -> Self {
        Self {
            validator: Utf8Validator::new(),
            buffer: BytesMut::new(),
            validate_utf8: config.validate_utf8,
            max_size: config.max_text_frame_size,
            failed: None,
        }
    }

    /// Append one received fragment.
    ///
    /// After the first failure every further call returns the same error
    /// until [`reset`](Self::reset).
    pub fn push_fragment(&mut self, fragment: &[u8]) -> Result<()> {
        if let Some(err) = &self.failed {
            return Err(err.clone().into());
        }

        let size = self.buffer.len() + fragment.len();
        if size > self.max_size {
            warn!(size, limit = self.max_size, "text frame exceeds limit");
            return Err(self.fail(ProtocolError::OversizedTextFrame {
                size,
                limit: self.max_size,
            }));
        }

        if self.validate_utf8 && !self.validator.validate(fragment) {
            let position = self.validator.position();
            warn!(position, "text frame is not valid UTF-8");
            return Err(self.fail(ProtocolError::InvalidUtf8 { position }));
        }

        self.buffer.extend_from_slice(fragment);
        Ok(())
    }

    /// Complete the frame and return its text, leaving the assembler ready
    /// for the next frame.
    #[instrument(skip(self), fields(len = self.buffer.len()))]
    pub fn finish(&mut self) -> Result<String> {
        if let Some(err) = &self.failed {
            return Err(err.clone().into());
        }

        if self.validate_utf8 && !self.validator.is_valid() {
            let position = self.validator.position();
            warn!(position, "text frame ends inside a UTF-8 sequence");
            return Err(self.fail(ProtocolError::TruncatedUtf8 { position }));
        }

        let bytes = self.buffer.split();
        self.validator.reset();

        let text = match String::from_utf8(Vec::from(bytes)) {
            Ok(text) => text,
            Err(e) => {
                // Only reachable with validation disabled.
                let position = e.utf8_error().valid_up_to();
                return Err(self.fail(ProtocolError::InvalidUtf8 { position }));
            }
        };
        debug!(len = text.len(), "text frame complete");
        Ok(text)
    }

    /// Drop any partial frame and clear a previous failure
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.validator.reset();
        self.failed = None;
    }

    /// Bytes buffered for the frame in progress
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn fail(&mut self, err: ProtocolError) -> Error {
        self.buffer.clear();
        self.failed = Some(err.clone());
        err.into()
    }
}
