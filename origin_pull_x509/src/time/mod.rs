// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Time utilities for certificate validity checks.
//!
//! Both UTCTime and GeneralizedTime decode to an absolute instant (a duration
//! since the Unix epoch) so the two encodings compare directly.
//!
//! # UTCTime Y2K Conversion
//!
//! UTCTime values are interpreted according to RFC 5280:
//! - Years 50-99 are interpreted as 1950-1999
//! - Years 00-49 are interpreted as 2000-2049

use core::cmp::Ordering;
use core::time::Duration;

use der::{
    asn1::{GeneralizedTime, UtcTime},
    DateTime, Decode, DecodeValue, Encode, EncodeValue, Header, Length, Reader, Result, Sequence,
    Tag, Writer,
};

/// First year that RFC 5280 requires to be encoded as GeneralizedTime.
const GENERALIZED_TIME_FROM_YEAR: u16 = 2050;

/// A timestamp that can be either UTCTime or GeneralizedTime.
///
/// ```asn1
/// Time ::= CHOICE {
///     utcTime        UTCTime,
///     generalTime    GeneralizedTime }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Time {
    /// UTCTime format (YYMMDDHHMMSSZ)
    UtcTime(UtcTime),
    /// GeneralizedTime format (YYYYMMDDHHMMSSZ)
    GeneralizedTime(GeneralizedTime),
}

impl Time {
    /// Build a Time from a duration since the Unix epoch, picking the
    /// encoding RFC 5280 prescribes for its year.
    pub fn from_unix_duration(duration: Duration) -> Result<Self> {
        let date_time = DateTime::from_unix_duration(duration)?;
        Self::from_date_time(date_time)
    }

    /// Build a Time from a calendar date and time.
    pub fn from_date_time(date_time: DateTime) -> Result<Self> {
        if date_time.year() < GENERALIZED_TIME_FROM_YEAR {
            Ok(Time::UtcTime(UtcTime::from_date_time(date_time)?))
        } else {
            Ok(Time::GeneralizedTime(GeneralizedTime::from_date_time(
                date_time,
            )))
        }
    }

    /// Returns the DateTime representation.
    pub fn to_date_time(&self) -> DateTime {
        match self {
            Time::UtcTime(utc) => utc.to_date_time(),
            Time::GeneralizedTime(gen) => gen.to_date_time(),
        }
    }

    /// The absolute instant as a duration since the Unix epoch.
    pub fn unix_duration(&self) -> Duration {
        self.to_date_time().unix_duration()
    }

    /// Checks if this time is strictly before another time.
    pub fn is_before(&self, other: &Time) -> bool {
        self.unix_duration() < other.unix_duration()
    }

    /// Checks if this time is strictly after another time.
    pub fn is_after(&self, other: &Time) -> bool {
        self.unix_duration() > other.unix_duration()
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.unix_duration().cmp(&other.unix_duration())
    }
}

impl<'a> DecodeValue<'a> for Time {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> Result<Self> {
        match header.tag {
            Tag::UtcTime => Ok(Time::UtcTime(UtcTime::decode_value(reader, header)?)),
            Tag::GeneralizedTime => Ok(Time::GeneralizedTime(GeneralizedTime::decode_value(
                reader, header,
            )?)),
            tag => Err(der::Error::from(der::ErrorKind::TagUnexpected {
                expected: Some(Tag::UtcTime),
                actual: tag,
            })),
        }
    }
}

impl EncodeValue for Time {
    fn value_len(&self) -> Result<Length> {
        match self {
            Time::UtcTime(utc) => utc.value_len(),
            Time::GeneralizedTime(gen) => gen.value_len(),
        }
    }

    fn encode_value(&self, writer: &mut impl Writer) -> Result<()> {
        match self {
            Time::UtcTime(utc) => utc.encode_value(writer),
            Time::GeneralizedTime(gen) => gen.encode_value(writer),
        }
    }
}

impl Encode for Time {
    fn encoded_len(&self) -> Result<Length> {
        match self {
            Time::UtcTime(utc) => utc.encoded_len(),
            Time::GeneralizedTime(gen) => gen.encoded_len(),
        }
    }

    fn encode(&self, writer: &mut impl Writer) -> Result<()> {
        match self {
            Time::UtcTime(utc) => utc.encode(writer),
            Time::GeneralizedTime(gen) => gen.encode(writer),
        }
    }
}

impl<'a> Decode<'a> for Time {
    fn decode<R: Reader<'a>>(reader: &mut R) -> Result<Self> {
        let header = Header::decode(reader)?;
        Self::decode_value(reader, header)
    }
}

/// Certificate validity period.
///
/// ```asn1
/// Validity ::= SEQUENCE {
///     notBefore      Time,
///     notAfter       Time
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Sequence)]
pub struct Validity {
    /// The time before which the certificate is not valid.
    pub not_before: Time,
    /// The time after which the certificate is not valid.
    pub not_after: Time,
}

impl Validity {
    /// Creates a new Validity period.
    pub const fn new(not_before: Time, not_after: Time) -> Self {
        Validity {
            not_before,
            not_after,
        }
    }

    /// Checks if the certificate is valid at the given time. Both bounds are
    /// inclusive.
    pub fn is_valid_at(&self, check_time: &Time) -> bool {
        !check_time.is_before(&self.not_before) && !check_time.is_after(&self.not_after)
    }
}

/// Gets the current time as X.509 Time.
///
/// Fails with [`TimeError::InvalidTime`](crate::error::TimeError::InvalidTime)
/// when no clock is available (`no_std`) or the clock reads before 1970.
pub fn current_time() -> crate::error::Result<Time> {
    #[cfg(feature = "std")]
    {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_err(|_| crate::error::Error::invalid_time())?;
        Time::from_unix_duration(now).map_err(|_| crate::error::Error::invalid_time())
    }

    #[cfg(not(feature = "std"))]
    {
        Err(crate::error::Error::invalid_time())
    }
}
