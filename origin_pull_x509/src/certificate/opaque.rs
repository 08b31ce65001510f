// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Opaque capture of ASN.1 `ANY` values.
//!
//! Algorithm parameters and attribute values are carried as the exact TLV
//! bytes that appeared on the wire. [`der::Tag`] cannot represent every
//! universal tag (UniversalString 0x1C among them), so framing is checked
//! here directly on the bytes instead of going through [`der::Header`].

extern crate alloc;

use alloc::vec::Vec;

use der::{Encode, Error, ErrorKind, Length, Reader, Tag, Writer};

/// Longest length-of-length accepted (lengths up to 4 GiB).
const MAX_LENGTH_OCTETS: usize = 4;

/// Longest high tag number form accepted after the leading identifier octet.
const MAX_TAG_OCTETS: usize = 4;

/// A single DER TLV kept byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opaque {
    bytes: Vec<u8>,
    header_len: usize,
}

impl Opaque {
    /// Validate that `bytes` is exactly one well-framed TLV and capture it.
    pub fn from_der(bytes: &[u8]) -> der::Result<Self> {
        let (header_len, value_len) = parse_header(bytes)?;
        let total = header_len
            .checked_add(value_len)
            .ok_or_else(|| Error::from(ErrorKind::Overflow))?;

        if total > bytes.len() {
            return Err(ErrorKind::Incomplete {
                expected_len: Length::try_from(total)?,
                actual_len: Length::try_from(bytes.len())?,
            }
            .into());
        }
        if total < bytes.len() {
            return Err(ErrorKind::TrailingData {
                decoded: Length::try_from(total)?,
                remaining: Length::try_from(bytes.len() - total)?,
            }
            .into());
        }

        Ok(Self {
            bytes: bytes.to_vec(),
            header_len,
        })
    }

    /// Consume everything left in `reader` as one opaque TLV.
    ///
    /// Used for the trailing `ANY` member of a SEQUENCE, where the value is
    /// whatever remains after the fields before it.
    pub fn decode_remaining<'a, R: Reader<'a>>(reader: &mut R) -> der::Result<Self> {
        let remaining = reader.remaining_len();
        let bytes = reader.read_vec(remaining)?;
        Self::from_der(&bytes)
    }

    /// The full TLV encoding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The leading identifier octet.
    pub fn tag_byte(&self) -> u8 {
        self.bytes[0]
    }

    /// The content octets following the tag and length.
    pub fn value(&self) -> &[u8] {
        &self.bytes[self.header_len..]
    }

    /// Whether this is an ASN.1 NULL (`05 00`).
    pub fn is_null(&self) -> bool {
        self.bytes == [0x05, 0x00]
    }
}

/// Returns `(header_len, value_len)` for the TLV at the start of `bytes`.
fn parse_header(bytes: &[u8]) -> der::Result<(usize, usize)> {
    let first = *bytes.first().ok_or_else(|| incomplete(1, 0))?;
    let tag = Tag::try_from(first).unwrap_or(Tag::Sequence);
    let mut pos = 1;

    if first & 0x1F == 0x1F {
        let mut number: u32 = 0;
        loop {
            let b = *bytes.get(pos).ok_or_else(|| incomplete(pos + 1, bytes.len()))?;
            if pos == 1 && b == 0x80 {
                return Err(ErrorKind::TagNumberInvalid.into());
            }
            if pos > MAX_TAG_OCTETS {
                return Err(ErrorKind::TagNumberInvalid.into());
            }
            number = (number << 7) | u32::from(b & 0x7F);
            pos += 1;
            if b & 0x80 == 0 {
                break;
            }
        }
        // Tag numbers below 31 have to use the low tag number form.
        if number < 0x1F {
            return Err(ErrorKind::TagNumberInvalid.into());
        }
    }

    let len_byte = *bytes.get(pos).ok_or_else(|| incomplete(pos + 1, bytes.len()))?;
    pos += 1;

    if len_byte < 0x80 {
        return Ok((pos, usize::from(len_byte)));
    }
    if len_byte == 0x80 {
        return Err(ErrorKind::IndefiniteLength.into());
    }

    let count = usize::from(len_byte & 0x7F);
    if count > MAX_LENGTH_OCTETS {
        return Err(ErrorKind::Overlength.into());
    }
    let octets = bytes
        .get(pos..pos + count)
        .ok_or_else(|| incomplete(pos + count, bytes.len()))?;
    pos += count;

    if octets[0] == 0 {
        return Err(ErrorKind::Noncanonical { tag }.into());
    }
    let value_len = octets
        .iter()
        .fold(0usize, |acc, b| (acc << 8) | usize::from(*b));
    if value_len < 0x80 {
        return Err(ErrorKind::Noncanonical { tag }.into());
    }

    Ok((pos, value_len))
}

fn incomplete(expected: usize, actual: usize) -> Error {
    match (Length::try_from(expected), Length::try_from(actual)) {
        (Ok(expected_len), Ok(actual_len)) => ErrorKind::Incomplete {
            expected_len,
            actual_len,
        }
        .into(),
        _ => ErrorKind::Overflow.into(),
    }
}

impl Encode for Opaque {
    fn encoded_len(&self) -> der::Result<Length> {
        Length::try_from(self.bytes.len())
    }

    fn encode(&self, writer: &mut impl Writer) -> der::Result<()> {
        writer.write(&self.bytes)
    }
}
