// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for bebop-codec.
//!
//! Every failure is a decode-time failure; encoding only appends to an owned
//! buffer and cannot fail. The variants let callers tell a truncated stream
//! (`UnexpectedEndOfInput`, `MessageBodyLengthEof`) apart from a corrupt or
//! mismatched one (`MessageBodyOverrun`, `InvalidUtf8`) and from a payload that
//! is too large for this platform or configuration (`ArrayTooLong`,
//! `MessageBodyTooLong`).

use thiserror::Error;

/// Errors that can occur while decoding wire data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Fewer bytes remain than a fixed-width or length-prefixed value requires
    #[error(
        "Unexpected end of input: requested {requested} bytes at position {position}, but only {available} bytes available"
    )]
    UnexpectedEndOfInput {
        /// Requested bytes
        requested: usize,
        /// Available bytes
        available: usize,
        /// Cursor position when the error occurred
        position: usize,
    },

    /// A declared element or byte count cannot be indexed on this platform
    #[error("Array too long: declared length {length} exceeds limit {limit}")]
    ArrayTooLong {
        /// Declared length
        length: u64,
        /// Largest accepted length
        limit: u64,
    },

    /// A declared message body length cannot be indexed on this platform
    #[error("Message body too long: declared length {length} exceeds limit {limit}")]
    MessageBodyTooLong {
        /// Declared length
        length: u64,
        /// Largest accepted length
        limit: u64,
    },

    /// A declared message body length runs past the end of the input
    #[error(
        "Message body length {length} at position {position} runs past end of input ({available} bytes available)"
    )]
    MessageBodyLengthEof {
        /// Declared body length
        length: usize,
        /// Bytes remaining after the length prefix
        available: usize,
        /// Position of the first body byte
        position: usize,
    },

    /// Field decoding inside a frame consumed more bytes than the frame declared
    #[error(
        "Message body overrun: frame declared {declared} bytes but {consumed} were consumed (cursor at {position})"
    )]
    MessageBodyOverrun {
        /// Declared body length
        declared: usize,
        /// Bytes consumed since the start of the body
        consumed: usize,
        /// Cursor position when the overrun was detected
        position: usize,
    },

    /// A string payload is not valid UTF-8
    #[error("Invalid UTF-8 in string payload at position {position}")]
    InvalidUtf8 {
        /// Position of the first payload byte
        position: usize,
    },
}

/// Fieldless discriminant of [`CodecError`], convenient for matching and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnexpectedEndOfInput,
    ArrayTooLong,
    MessageBodyTooLong,
    MessageBodyLengthEof,
    MessageBodyOverrun,
    InvalidUtf8,
}

impl CodecError {
    /// Create an unexpected end of input error.
    pub fn unexpected_eof(requested: usize, available: usize, position: usize) -> Self {
        CodecError::UnexpectedEndOfInput {
            requested,
            available,
            position,
        }
    }

    /// Create an array too long error.
    pub fn array_too_long(length: u64, limit: u64) -> Self {
        CodecError::ArrayTooLong { length, limit }
    }

    /// Create a message body too long error.
    pub fn message_body_too_long(length: u64, limit: u64) -> Self {
        CodecError::MessageBodyTooLong { length, limit }
    }

    /// Create a message body length EOF error.
    pub fn message_body_length_eof(length: usize, available: usize, position: usize) -> Self {
        CodecError::MessageBodyLengthEof {
            length,
            available,
            position,
        }
    }

    /// Create a message body overrun error.
    pub fn message_body_overrun(declared: usize, consumed: usize, position: usize) -> Self {
        CodecError::MessageBodyOverrun {
            declared,
            consumed,
            position,
        }
    }

    /// Create an invalid UTF-8 error.
    pub fn invalid_utf8(position: usize) -> Self {
        CodecError::InvalidUtf8 { position }
    }

    /// Get the fieldless kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::UnexpectedEndOfInput { .. } => ErrorKind::UnexpectedEndOfInput,
            CodecError::ArrayTooLong { .. } => ErrorKind::ArrayTooLong,
            CodecError::MessageBodyTooLong { .. } => ErrorKind::MessageBodyTooLong,
            CodecError::MessageBodyLengthEof { .. } => ErrorKind::MessageBodyLengthEof,
            CodecError::MessageBodyOverrun { .. } => ErrorKind::MessageBodyOverrun,
            CodecError::InvalidUtf8 { .. } => ErrorKind::InvalidUtf8,
        }
    }

    /// Whether the error means the input ended early rather than being malformed.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            CodecError::UnexpectedEndOfInput { .. } | CodecError::MessageBodyLengthEof { .. }
        )
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::UnexpectedEndOfInput {
                requested,
                available,
                position,
            } => vec![
                ("requested", requested.to_string()),
                ("available", available.to_string()),
                ("position", position.to_string()),
            ],
            CodecError::ArrayTooLong { length, limit }
            | CodecError::MessageBodyTooLong { length, limit } => vec![
                ("length", length.to_string()),
                ("limit", limit.to_string()),
            ],
            CodecError::MessageBodyLengthEof {
                length,
                available,
                position,
            } => vec![
                ("length", length.to_string()),
                ("available", available.to_string()),
                ("position", position.to_string()),
            ],
            CodecError::MessageBodyOverrun {
                declared,
                consumed,
                position,
            } => vec![
                ("declared", declared.to_string()),
                ("consumed", consumed.to_string()),
                ("position", position.to_string()),
            ],
            CodecError::InvalidUtf8 { position } => vec![("position", position.to_string())],
        }
    }
}

/// Result type for bebop-codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
