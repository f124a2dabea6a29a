// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// Wire Type Enum
// =============================================================================

/// Primitive wire types, named by their schema keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireType {
    /// Boolean, one byte
    Bool,
    /// Unsigned 8-bit integer
    Byte,
    /// Unsigned 16-bit integer
    UInt16,
    /// Signed 16-bit integer
    Int16,
    /// Unsigned 32-bit integer
    UInt32,
    /// Signed 32-bit integer
    Int32,
    /// Unsigned 64-bit integer
    UInt64,
    /// Signed 64-bit integer
    Int64,
    /// IEEE-754 single precision
    Float32,
    /// IEEE-754 double precision
    Float64,
    /// Length-prefixed UTF-8 string
    String,
    /// 16-byte identifier
    Guid,
    /// 64-bit tick count
    Date,
}

impl WireType {
    /// Every wire type, in keyword table order.
    pub const ALL: [WireType; 13] = [
        WireType::Bool,
        WireType::Byte,
        WireType::UInt16,
        WireType::Int16,
        WireType::UInt32,
        WireType::Int32,
        WireType::UInt64,
        WireType::Int64,
        WireType::Float32,
        WireType::Float64,
        WireType::String,
        WireType::Guid,
        WireType::Date,
    ];

    /// Get the size in bytes for this wire type, if fixed.
    pub const fn fixed_size(self) -> Option<usize> {
        match self {
            WireType::Bool | WireType::Byte => Some(1),
            WireType::UInt16 | WireType::Int16 => Some(2),
            WireType::UInt32 | WireType::Int32 | WireType::Float32 => Some(4),
            WireType::UInt64 | WireType::Int64 | WireType::Float64 | WireType::Date => Some(8),
            WireType::Guid => Some(16),
            WireType::String => None,
        }
    }

    /// Schema keyword for this type.
    pub const fn as_str(self) -> &'static str {
        match self {
            WireType::Bool => "bool",
            WireType::Byte => "byte",
            WireType::UInt16 => "uint16",
            WireType::Int16 => "int16",
            WireType::UInt32 => "uint32",
            WireType::Int32 => "int32",
            WireType::UInt64 => "uint64",
            WireType::Int64 => "int64",
            WireType::Float32 => "float32",
            WireType::Float64 => "float64",
            WireType::String => "string",
            WireType::Guid => "guid",
            WireType::Date => "date",
        }
    }

    /// Parse a wire type from a schema keyword or one of its aliases.
    pub fn try_from_str(s: &str) -> Option<Self> {
        match s {
            "bool" => Some(WireType::Bool),
            "byte" | "uint8" => Some(WireType::Byte),
            "uint16" => Some(WireType::UInt16),
            "int16" => Some(WireType::Int16),
            "uint32" => Some(WireType::UInt32),
            "int32" => Some(WireType::Int32),
            "uint64" => Some(WireType::UInt64),
            "int64" => Some(WireType::Int64),
            "float32" => Some(WireType::Float32),
            "float64" => Some(WireType::Float64),
            "string" => Some(WireType::String),
            "guid" => Some(WireType::Guid),
            "date" => Some(WireType::Date),
            _ => None,
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a `WireType` from string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWireTypeError {
    keyword: String,
}

impl fmt::Display for ParseWireTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown wire type keyword '{}'", self.keyword)
    }
}

impl std::error::Error for ParseWireTypeError {}

impl FromStr for WireType {
    type Err = ParseWireTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WireType::try_from_str(s).ok_or_else(|| ParseWireTypeError {
            keyword: s.to_string(),
        })
    }
}
