// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Reader and writer configuration.
//!
//! Defaults reproduce the unbounded wire semantics exactly: the only limits
//! are what the platform's `usize` can index. Tighter limits are an opt-in
//! guard for callers decoding untrusted input; exceeding them is reported with
//! the same error kinds as exceeding the platform limit.

use serde::{Deserialize, Serialize};

/// Default initial capacity for writer buffers.
pub const DEFAULT_WRITER_CAPACITY: usize = 256;

/// Configuration for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Largest accepted message body length, in bytes
    pub max_message_len: usize,
    /// Largest accepted string, byte array, array or map length
    pub max_array_len: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_message_len: usize::MAX,
            max_array_len: usize::MAX,
        }
    }
}

impl ReaderConfig {
    /// Create a builder with default configuration.
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder::default()
    }
}

/// Builder for [`ReaderConfig`].
///
/// # Example
///
/// ```rust
/// use bebop_codec::encoding::ReaderConfig;
///
/// let config = ReaderConfig::builder()
///     .max_message_len(1 << 20)
///     .max_array_len(4096)
///     .build();
/// assert_eq!(config.max_array_len, 4096);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReaderConfigBuilder {
    config: ReaderConfig,
}

impl ReaderConfigBuilder {
    /// Set the largest accepted message body length.
    pub fn max_message_len(mut self, len: usize) -> Self {
        self.config.max_message_len = len;
        self
    }

    /// Set the largest accepted string, byte array, array or map length.
    pub fn max_array_len(mut self, len: usize) -> Self {
        self.config.max_array_len = len;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ReaderConfig {
        self.config
    }
}

/// Configuration for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Bytes reserved up front in a fresh buffer
    pub initial_capacity: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_WRITER_CAPACITY,
        }
    }
}

impl WriterConfig {
    /// Create a builder with default configuration.
    pub fn builder() -> WriterConfigBuilder {
        WriterConfigBuilder::default()
    }
}

/// Builder for [`WriterConfig`].
#[derive(Debug, Clone, Default)]
pub struct WriterConfigBuilder {
    config: WriterConfig,
}

impl WriterConfigBuilder {
    /// Set the initial buffer capacity.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> WriterConfig {
        self.config
    }
}
