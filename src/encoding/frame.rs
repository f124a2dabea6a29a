// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Message framing.
//!
//! A message is a `u32` little-endian body length followed by exactly that
//! many body bytes. The length is what makes schema evolution work:
//!
//! - **Writing** does not need the body length up front. The writer reserves
//!   a four-byte placeholder, appends the body with any other codec and then
//!   patches the placeholder with the number of bytes appended since.
//! - **Reading** validates the declared length, then decodes only the fields
//!   the reader's schema knows. If the frame runs out first, the remaining
//!   fields are absent (the writer used an older schema). If known fields run
//!   out first, the rest of the frame is skipped (the writer used a newer
//!   schema). Either way exactly `length` bytes are consumed, so sibling
//!   fields after the message stay aligned.
//!
//! A field decode that reaches beyond the frame end is reported as
//! [`CodecError::MessageBodyOverrun`], whether or not any input follows the
//! frame, instead of being allowed to read into whatever comes next.
//!
//! # Example
//!
//! ```
//! use bebop_codec::encoding::{Reader, Writer};
//!
//! // Written by a newer schema with an extra trailing field.
//! let mut writer = Writer::new();
//! writer.write_message(|w| {
//!     w.write_u16(1999).write_str("Giant Steps");
//! });
//! writer.write_byte(0xEE);
//! let bytes = writer.into_inner();
//!
//! // Read by an older schema that only knows the year.
//! let mut reader = Reader::new(&bytes);
//! let year = reader.read_message(|frame| frame.field::<u16>())?;
//! assert_eq!(year, Some(1999));
//! assert_eq!(reader.read_byte()?, 0xEE);
//! # Ok::<(), bebop_codec::CodecError>(())
//! ```

use byteorder::{ByteOrder, LittleEndian};
use tracing::{debug, trace};

use super::reader::Reader;
use super::traits::Decode;
use super::writer::Writer;
use crate::core::{CodecError, Result};

/// Size of the message length prefix.
pub const MESSAGE_LENGTH_SIZE: usize = 4;

/// Field index that terminates an indexed message body.
pub const END_OF_FIELDS: u8 = 0;

/// Position of a reserved message length, returned by
/// [`Writer::reserve_message_length`] and consumed by
/// [`Writer::fill_message_length`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a reserved message length must be filled"]
pub struct LengthPlaceholder {
    position: usize,
}

impl LengthPlaceholder {
    /// Offset of the placeholder in the writer's buffer.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Writer {
    /// Reserve four bytes for a message length and return their position.
    pub fn reserve_message_length(&mut self) -> LengthPlaceholder {
        let position = self.len();
        self.write_u32(0);
        LengthPlaceholder { position }
    }

    /// Patch a reserved message length with the number of bytes written
    /// after it.
    pub fn fill_message_length(&mut self, placeholder: LengthPlaceholder) {
        let start = placeholder.position;
        let body_len = self.len() - start - MESSAGE_LENGTH_SIZE;
        debug_assert!(
            u32::try_from(body_len).is_ok(),
            "message body of {body_len} bytes does not fit the u32 length prefix"
        );
        LittleEndian::write_u32(
            &mut self.buffer_mut()[start..start + MESSAGE_LENGTH_SIZE],
            body_len as u32,
        );
    }

    /// Write a framed message whose body is produced by `body`.
    pub fn write_message<F>(&mut self, body: F) -> &mut Self
    where
        F: FnOnce(&mut Writer),
    {
        let placeholder = self.reserve_message_length();
        body(self);
        self.fill_message_length(placeholder);
        self
    }

    /// Write the index that introduces a field of an indexed message body.
    ///
    /// Index `0` is reserved for the terminator.
    pub fn write_field_index(&mut self, index: u8) -> &mut Self {
        debug_assert_ne!(index, END_OF_FIELDS, "field index 0 is the terminator");
        self.write_byte(index)
    }

    /// Terminate an indexed message body.
    pub fn write_message_end(&mut self) -> &mut Self {
        self.write_byte(END_OF_FIELDS)
    }
}

impl<'a> Reader<'a> {
    /// Read and validate a message length prefix.
    ///
    /// Fails with `MessageBodyTooLong` if the length cannot be indexed on this
    /// platform or exceeds [`ReaderConfig::max_message_len`], and with
    /// `MessageBodyLengthEof` if fewer bytes remain than declared. On failure
    /// the cursor is left before the prefix.
    ///
    /// [`ReaderConfig::max_message_len`]: super::ReaderConfig::max_message_len
    pub fn read_message_length(&mut self) -> Result<usize> {
        let start = self.position();
        let declared = self.read_u32()?;
        let max = self.config().max_message_len;
        let result = match usize::try_from(declared) {
            Ok(len) if len <= max => {
                if len > self.remaining() {
                    Err(CodecError::message_body_length_eof(
                        len,
                        self.remaining(),
                        self.position(),
                    ))
                } else {
                    Ok(len)
                }
            }
            _ => Err(CodecError::message_body_too_long(
                u64::from(declared),
                u64::try_from(max).unwrap_or(u64::MAX),
            )),
        };
        if let Err(e) = &result {
            debug!(
                context = "Frame",
                error = %e,
                fields = ?e.log_fields(),
                "Rejected message length"
            );
            self.seek(start);
        }
        result
    }

    /// Open a frame over the next message body.
    ///
    /// The returned [`Frame`] must be closed with [`Frame::finish`] so that
    /// the cursor ends up exactly after the body.
    pub fn begin_message(&mut self) -> Result<Frame<'_, 'a>> {
        let len = self.read_message_length()?;
        let start = self.position();
        Ok(Frame {
            reader: self,
            start,
            end: start + len,
        })
    }

    /// Decode a framed message with `body`, then skip whatever the body
    /// closure did not consume.
    pub fn read_message<T, F>(&mut self, body: F) -> Result<T>
    where
        F: FnOnce(&mut Frame<'_, 'a>) -> Result<T>,
    {
        let mut frame = self.begin_message()?;
        let value = body(&mut frame).map_err(|e| frame.bound_error(e))?;
        frame.finish()?;
        Ok(value)
    }
}

/// Bounded view of one message body.
///
/// Fields are decoded from the enclosing reader; the frame only tracks where
/// the body ends.
#[derive(Debug)]
#[must_use = "a frame must be closed with `finish`"]
pub struct Frame<'r, 'a> {
    reader: &'r mut Reader<'a>,
    start: usize,
    end: usize,
}

impl<'r, 'a> Frame<'r, 'a> {
    /// Declared body length.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the declared body is empty.
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Bytes consumed since the start of the body.
    pub fn consumed(&self) -> usize {
        self.reader.position() - self.start
    }

    /// Bytes left before the end of the body.
    pub fn remaining(&self) -> usize {
        self.end.saturating_sub(self.reader.position())
    }

    /// Whether every body byte has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.reader.position() >= self.end
    }

    /// Direct access to the underlying reader for decoding that does not fit
    /// [`Frame::field`]. Bounds are checked again on [`Frame::finish`].
    pub fn reader(&mut self) -> &mut Reader<'a> {
        &mut *self.reader
    }

    fn overrun(&self, consumed: usize, position: usize) -> CodecError {
        let err = CodecError::message_body_overrun(self.len(), consumed, position);
        debug!(
            context = "Frame",
            error = %err,
            fields = ?err.log_fields(),
            "Field decode ran past the frame"
        );
        err
    }

    fn check_bounds(&self) -> Result<()> {
        let position = self.reader.position();
        if position > self.end {
            return Err(self.overrun(self.consumed(), position));
        }
        Ok(())
    }

    /// Reclassify a failed read that reached past the body end.
    ///
    /// The body end never lies past the end of the input, so running out of
    /// input inside a frame means the field crossed the frame boundary.
    fn bound_error(&self, err: CodecError) -> CodecError {
        let (reach, position) = match err {
            CodecError::UnexpectedEndOfInput {
                requested,
                position,
                ..
            } => (position.saturating_add(requested), position),
            CodecError::MessageBodyLengthEof {
                length, position, ..
            } => (position.saturating_add(length), position),
            _ => return err,
        };
        if reach <= self.end {
            return err;
        }
        self.overrun(reach.saturating_sub(self.start), position)
    }

    /// Decode the next field with a custom decoder.
    ///
    /// Returns `None` without touching the input once the body is exhausted:
    /// the writer's schema ended before this field.
    pub fn field_with<T, F>(&mut self, decode: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut Reader<'a>) -> Result<T>,
    {
        self.check_bounds()?;
        if self.is_exhausted() {
            trace!(
                context = "Frame",
                declared = self.len(),
                "Frame exhausted, field absent"
            );
            return Ok(None);
        }
        let value = decode(&mut *self.reader).map_err(|e| self.bound_error(e))?;
        self.check_bounds()?;
        Ok(Some(value))
    }

    /// Decode the next field, or `None` if the body is exhausted.
    pub fn field<T: Decode<'a>>(&mut self) -> Result<Option<T>> {
        self.field_with(T::decode)
    }

    /// Decode the next field, falling back to `T::default()` when absent.
    pub fn field_or_default<T: Decode<'a> + Default>(&mut self) -> Result<T> {
        Ok(self.field::<T>()?.unwrap_or_default())
    }

    /// Read the next field index of an indexed message body.
    ///
    /// Returns `None` at the terminator or when the body is exhausted. An
    /// index the caller does not recognise means the writer is newer; the
    /// caller should stop and [`finish`](Frame::finish) the frame, which
    /// skips the unknown remainder.
    pub fn next_field_index(&mut self) -> Result<Option<u8>> {
        match self.field_with(Reader::read_byte)? {
            Some(END_OF_FIELDS) | None => Ok(None),
            Some(index) => Ok(Some(index)),
        }
    }

    /// Close the frame, skipping any body bytes that were not decoded.
    ///
    /// Fails with `MessageBodyOverrun` if decoding went past the body end.
    pub fn finish(self) -> Result<()> {
        self.check_bounds()?;
        let unread = self.remaining();
        if unread > 0 {
            trace!(
                context = "Frame",
                skipped = unread,
                declared = self.len(),
                "Skipping unknown trailing message bytes"
            );
        }
        self.reader.seek(self.end);
        Ok(())
    }
}
