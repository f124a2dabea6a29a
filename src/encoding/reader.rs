// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Byte cursor for decoding wire data.
//!
//! The cursor never copies or mutates its input. Strings and byte arrays are
//! returned as views into the input; the `*_vec` / `read_string` variants
//! make an owned copy for callers that need an independent lifetime. A read
//! that fails leaves the cursor where it was.

use uuid::Uuid;

use super::backend::{IntegerBackend, Selected};
use super::config::ReaderConfig;
use super::guid::{self, GUID_SIZE};
use crate::core::{CodecError, Result, Timestamp};

/// Cursor over an immutable byte region.
///
/// # Example
///
/// ```
/// use bebop_codec::encoding::Reader;
///
/// let data = [0x2A, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, b'x'];
/// let mut reader = Reader::new(&data);
/// assert_eq!(reader.read_u32()?, 42);
/// assert_eq!(reader.read_str()?, "x");
/// assert!(reader.is_at_end());
/// # Ok::<(), bebop_codec::CodecError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The data buffer
    data: &'a [u8],
    /// Current read position
    offset: usize,
    /// Decode limits
    config: ReaderConfig,
}

impl<'a> Reader<'a> {
    /// Create a reader over `data` with default (unbounded) limits.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_config(data, ReaderConfig::default())
    }

    /// Create a reader over `data` with explicit limits.
    pub fn with_config(data: &'a [u8], config: ReaderConfig) -> Self {
        Self {
            data,
            offset: 0,
            config,
        }
    }

    /// Get the decode limits of this reader.
    #[inline]
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Get the current position relative to the data start.
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Get the remaining bytes available to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Check if at end of buffer.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// The unconsumed suffix of the input.
    #[inline]
    pub fn remaining_bytes(&self) -> &'a [u8] {
        let data: &'a [u8] = self.data;
        &data[self.offset..]
    }

    /// Peek at the next byte without advancing the position.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.offset).copied()
    }

    /// Skip bytes.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        if count > self.remaining() {
            return Err(self.eof(count));
        }
        self.offset += count;
        Ok(())
    }

    pub(crate) fn seek(&mut self, position: usize) {
        debug_assert!(position <= self.data.len());
        self.offset = position;
    }

    #[inline]
    fn eof(&self, requested: usize) -> CodecError {
        CodecError::unexpected_eof(requested, self.remaining(), self.offset)
    }

    /// Run `f`, restoring the cursor if it fails.
    #[inline]
    fn transact<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let start = self.offset;
        let result = f(self);
        if result.is_err() {
            self.offset = start;
        }
        result
    }

    #[inline]
    fn take<const N: usize>(&mut self) -> Result<&'a [u8; N]> {
        let rest = self.remaining_bytes();
        match rest.first_chunk::<N>() {
            Some(bytes) => {
                self.offset += N;
                Ok(bytes)
            }
            None => Err(self.eof(N)),
        }
    }

    #[inline]
    pub(crate) fn take_slice(&mut self, count: usize) -> Result<&'a [u8]> {
        if count > self.remaining() {
            return Err(self.eof(count));
        }
        let data: &'a [u8] = self.data;
        let start = self.offset;
        self.offset += count;
        Ok(&data[start..self.offset])
    }

    /// Read a boolean; any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_byte()? != 0)
    }

    /// Read an unsigned 8-bit integer.
    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.take::<1>()?[0])
    }

    /// Read an unsigned 16-bit integer.
    pub fn read_u16(&mut self) -> Result<u16> {
        self.take::<2>().map(Selected::get_u16)
    }

    /// Read a signed 16-bit integer.
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    /// Read an unsigned 32-bit integer.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.take::<4>().map(Selected::get_u32)
    }

    /// Read a signed 32-bit integer.
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    /// Read an unsigned 64-bit integer.
    pub fn read_u64(&mut self) -> Result<u64> {
        self.take::<8>().map(Selected::get_u64)
    }

    /// Read a signed 64-bit integer.
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.read_u64()? as i64)
    }

    /// Read a 32-bit float from its IEEE-754 bit pattern.
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Read a 64-bit float from its IEEE-754 bit pattern.
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Read a timestamp tick count.
    pub fn read_timestamp(&mut self) -> Result<Timestamp> {
        Ok(Timestamp::from_ticks(self.read_i64()?))
    }

    /// Read an identifier stored in wire byte order.
    pub fn read_guid(&mut self) -> Result<Uuid> {
        self.take::<GUID_SIZE>().map(guid::from_wire)
    }

    /// Read the `u32` count prefix of a string, byte array, array or map.
    ///
    /// Fails with `ArrayTooLong` if the count cannot be indexed on this
    /// platform or exceeds [`ReaderConfig::max_array_len`]. Does not check
    /// that the elements are actually present.
    pub fn read_array_len(&mut self) -> Result<usize> {
        let max = self.config.max_array_len;
        self.transact(|r| {
            let length = r.read_u32()?;
            match usize::try_from(length) {
                Ok(len) if len <= max => Ok(len),
                _ => Err(CodecError::array_too_long(
                    u64::from(length),
                    u64::try_from(max).unwrap_or(u64::MAX),
                )),
            }
        })
    }

    /// Read a length-prefixed byte array as a view into the input.
    pub fn read_bytes(&mut self) -> Result<&'a [u8]> {
        self.transact(|r| {
            let len = r.read_array_len()?;
            r.take_slice(len)
        })
    }

    /// Read a length-prefixed byte array into an owned copy.
    pub fn read_byte_vec(&mut self) -> Result<Vec<u8>> {
        self.read_bytes().map(<[u8]>::to_vec)
    }

    /// Read a length-prefixed UTF-8 string as a view into the input.
    pub fn read_str(&mut self) -> Result<&'a str> {
        self.transact(|r| {
            let len = r.read_array_len()?;
            let position = r.offset;
            let bytes = r.take_slice(len)?;
            std::str::from_utf8(bytes).map_err(|_| CodecError::invalid_utf8(position))
        })
    }

    /// Read a length-prefixed UTF-8 string into an owned `String`.
    pub fn read_string(&mut self) -> Result<String> {
        self.read_str().map(str::to_owned)
    }
}
