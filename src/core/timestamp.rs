// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Timestamp value carried by the `date` wire type.
//!
//! A timestamp is a signed count of 100-nanosecond ticks since
//! 0001-01-01T00:00:00 UTC (proleptic Gregorian calendar). On the wire it is a
//! plain little-endian `int64`; this module only adds conversions.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of ticks in one second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Number of nanoseconds in one tick.
pub const NANOS_PER_TICK: i64 = 100;

/// Number of ticks between 0001-01-01 and the Unix epoch (1970-01-01).
pub const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

/// Some writers store a date "kind" in the two high bits of the tick count.
const TICKS_MASK: u64 = 0x3fff_ffff_ffff_ffff;

/// A UTC date/time value measured in 100 ns ticks since 0001-01-01.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// The Unix epoch, 1970-01-01T00:00:00 UTC.
    pub const UNIX_EPOCH: Timestamp = Timestamp(UNIX_EPOCH_TICKS);

    /// Create a timestamp from a raw tick count.
    pub const fn from_ticks(ticks: i64) -> Self {
        Timestamp(ticks)
    }

    /// Raw tick count, exactly as it travels on the wire.
    pub const fn ticks(self) -> i64 {
        self.0
    }

    /// Convert from nanoseconds since the Unix epoch.
    ///
    /// Sub-tick precision is truncated towards negative infinity.
    pub fn from_unix_nanos(nanos: i64) -> Self {
        Timestamp(nanos.div_euclid(NANOS_PER_TICK) + UNIX_EPOCH_TICKS)
    }

    /// Nanoseconds since the Unix epoch, or `None` if the value does not fit an `i64`.
    pub fn to_unix_nanos(self) -> Option<i64> {
        self.unix_ticks().checked_mul(NANOS_PER_TICK)
    }

    /// Convert from a `chrono` UTC date/time.
    ///
    /// Returns `None` for dates whose tick count does not fit an `i64`
    /// (roughly beyond the year 29 000 in either direction).
    pub fn from_datetime(datetime: DateTime<Utc>) -> Option<Self> {
        let sub_ticks = i64::from(datetime.timestamp_subsec_nanos()) / NANOS_PER_TICK;
        datetime
            .timestamp()
            .checked_mul(TICKS_PER_SECOND)?
            .checked_add(sub_ticks)?
            .checked_add(UNIX_EPOCH_TICKS)
            .map(Timestamp)
    }

    /// Convert to a `chrono` UTC date/time.
    ///
    /// The two high kind bits are masked off first, so a negative tick count
    /// is read as a far-future date rather than one before 0001-01-01.
    /// Negative ticks are not meaningful dates on the wire.
    ///
    /// Returns `None` when the tick count is outside the range `chrono` can represent.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        let ticks = self.unix_ticks();
        let seconds = ticks.div_euclid(TICKS_PER_SECOND);
        let nanos = ticks.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK;
        DateTime::<Utc>::from_timestamp(seconds, nanos as u32)
    }

    /// Ticks since the Unix epoch with the kind bits cleared.
    fn unix_ticks(self) -> i64 {
        ((self.0 as u64 & TICKS_MASK) as i64) - UNIX_EPOCH_TICKS
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(datetime) => write!(f, "{}", datetime.to_rfc3339()),
            None => write!(f, "{} ticks", self.0),
        }
    }
}
