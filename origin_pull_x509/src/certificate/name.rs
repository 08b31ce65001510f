// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Distinguished Name (DN) support for X.509 certificates.
//!
//! This module provides parsing and representation for X.509 distinguished
//! names:
//! - Name (CHOICE with the single rdnSequence alternative)
//! - RdnSequence
//! - RelativeDistinguishedName (RDN)
//! - AttributeTypeAndValue
//!
//! Attribute values are kept as raw TLVs and RDN members keep the order in
//! which they were decoded, so a decoded name re-encodes to identical bytes.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use const_oid::ObjectIdentifier;
use der::{
    Decode, DecodeValue, Encode, EncodeValue, ErrorKind, FixedTag, Header, Length, Reader,
    Sequence, Tag, Writer,
};

use super::opaque::Opaque;

// ============================================================================
// Common Attribute Type OIDs (RFC 5280, Appendix A.1)
// ============================================================================

/// Common Name (CN) - 2.5.4.3
pub const CN: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.3");

/// Serial Number - 2.5.4.5
pub const SERIAL_NUMBER: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.5");

/// Country (C) - 2.5.4.6
pub const COUNTRY_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.6");

/// Locality (L) - 2.5.4.7
pub const LOCALITY_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.7");

/// State or Province (ST) - 2.5.4.8
pub const STATE_OR_PROVINCE_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.8");

/// Organization (O) - 2.5.4.10
pub const ORGANIZATION_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.10");

/// Organizational Unit (OU) - 2.5.4.11
pub const ORGANIZATIONAL_UNIT_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.11");

/// Domain Component (DC) - 0.9.2342.19200300.100.1.25
pub const DOMAIN_COMPONENT: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("0.9.2342.19200300.100.1.25");

/// Email Address - 1.2.840.113549.1.9.1
pub const EMAIL_ADDRESS: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.9.1");

// ============================================================================
// AttributeTypeAndValue - RFC 5280 Section 4.1.2.4
// ============================================================================

/// AttributeTypeAndValue represents a single attribute in an RDN.
///
/// ```asn1
/// AttributeTypeAndValue ::= SEQUENCE {
///     type     AttributeType,
///     value    AttributeValue }
/// AttributeValue ::= ANY -- DEFINED BY AttributeType
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTypeAndValue {
    /// Attribute type (OID)
    pub oid: ObjectIdentifier,
    /// Raw value TLV
    pub value: Opaque,
}

impl<'a> DecodeValue<'a> for AttributeTypeAndValue {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        reader.read_nested(header.length, |nested| {
            let oid = ObjectIdentifier::decode(nested)?;

            if nested.is_finished() {
                return Err(ErrorKind::Length { tag: Tag::Sequence }.into());
            }
            let value = Opaque::decode_remaining(nested)?;

            Ok(Self { oid, value })
        })
    }
}

impl EncodeValue for AttributeTypeAndValue {
    fn value_len(&self) -> der::Result<Length> {
        self.oid.encoded_len()? + self.value.encoded_len()?
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        self.oid.encode(writer)?;
        self.value.encode(writer)
    }
}

impl Sequence<'_> for AttributeTypeAndValue {}

impl AttributeTypeAndValue {
    /// Get the attribute value as a string if it uses one of the
    /// DirectoryString encodings (or IA5String).
    pub fn value_as_str(&self) -> Option<String> {
        let content = self.value.value();
        match self.value.tag_byte() {
            // UTF8String, PrintableString, IA5String
            0x0C | 0x13 | 0x16 => core::str::from_utf8(content).ok().map(ToString::to_string),
            // TeletexString, read as Latin-1
            0x14 => Some(content.iter().map(|b| char::from(*b)).collect()),
            // BMPString
            0x1E => {
                if content.len() % 2 != 0 {
                    return None;
                }
                let units: Vec<u16> = content
                    .chunks(2)
                    .map(|c| u16::from_be_bytes([c[0], c[1]]))
                    .collect();
                String::from_utf16(&units).ok()
            }
            // UniversalString
            0x1C => {
                if content.len() % 4 != 0 {
                    return None;
                }
                content
                    .chunks(4)
                    .map(|c| char::from_u32(u32::from_be_bytes([c[0], c[1], c[2], c[3]])))
                    .collect()
            }
            _ => None,
        }
    }

    /// Get a short name for the attribute type if known.
    pub fn attr_name(&self) -> Option<&'static str> {
        match self.oid {
            CN => Some("CN"),
            SERIAL_NUMBER => Some("SERIALNUMBER"),
            COUNTRY_NAME => Some("C"),
            LOCALITY_NAME => Some("L"),
            STATE_OR_PROVINCE_NAME => Some("ST"),
            ORGANIZATION_NAME => Some("O"),
            ORGANIZATIONAL_UNIT_NAME => Some("OU"),
            DOMAIN_COMPONENT => Some("DC"),
            EMAIL_ADDRESS => Some("emailAddress"),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeTypeAndValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.attr_name() {
            Some(name) => write!(f, "{}=", name)?,
            None => write!(f, "{}=", self.oid)?,
        }
        match self.value_as_str() {
            Some(value) => write!(f, "{}", value),
            None => {
                write!(f, "#")?;
                for b in self.value.as_bytes() {
                    write!(f, "{:02x}", b)?;
                }
                Ok(())
            }
        }
    }
}

// ============================================================================
// RelativeDistinguishedName - RFC 5280 Section 4.1.2.4
// ============================================================================

/// RelativeDistinguishedName (RDN) is a SET OF AttributeTypeAndValue.
///
/// Members stay in wire order; they are neither sorted nor deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeDistinguishedName {
    /// Attributes in decode order
    pub attributes: Vec<AttributeTypeAndValue>,
}

impl RelativeDistinguishedName {
    /// Get the first (or only) attribute in this RDN.
    pub fn first(&self) -> Option<&AttributeTypeAndValue> {
        self.attributes.first()
    }

    /// Check if this is a multi-valued RDN.
    pub fn is_multi_valued(&self) -> bool {
        self.attributes.len() > 1
    }

    /// Get an iterator over the attributes.
    pub fn iter(&self) -> core::slice::Iter<'_, AttributeTypeAndValue> {
        self.attributes.iter()
    }
}

impl<'a> DecodeValue<'a> for RelativeDistinguishedName {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        reader.read_nested(header.length, |reader| {
            let mut attributes = Vec::new();
            while !reader.is_finished() {
                attributes.push(AttributeTypeAndValue::decode(reader)?);
            }
            Ok(Self { attributes })
        })
    }
}

impl EncodeValue for RelativeDistinguishedName {
    fn value_len(&self) -> der::Result<Length> {
        let mut len = Length::ZERO;
        for attr in &self.attributes {
            len = (len + attr.encoded_len()?)?;
        }
        Ok(len)
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        for attr in &self.attributes {
            attr.encode(writer)?;
        }
        Ok(())
    }
}

impl FixedTag for RelativeDistinguishedName {
    const TAG: Tag = Tag::Set;
}

impl fmt::Display for RelativeDistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attrs: Vec<String> = self.attributes.iter().map(|a| a.to_string()).collect();
        write!(f, "{}", attrs.join("+"))
    }
}

// ============================================================================
// RdnSequence - RFC 5280 Section 4.1.2.4
// ============================================================================

/// RdnSequence is the ordered list of RDNs making up a Distinguished Name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RdnSequence {
    /// Sequence of RDNs, ordered from root to leaf
    pub rdns: Vec<RelativeDistinguishedName>,
}

impl<'a> DecodeValue<'a> for RdnSequence {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        reader.read_nested(header.length, |reader| {
            let mut rdns = Vec::new();
            while !reader.is_finished() {
                rdns.push(RelativeDistinguishedName::decode(reader)?);
            }
            Ok(Self { rdns })
        })
    }
}

impl EncodeValue for RdnSequence {
    fn value_len(&self) -> der::Result<Length> {
        let mut len = Length::ZERO;
        for rdn in &self.rdns {
            len = (len + rdn.encoded_len()?)?;
        }
        Ok(len)
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        for rdn in &self.rdns {
            rdn.encode(writer)?;
        }
        Ok(())
    }
}

impl FixedTag for RdnSequence {
    const TAG: Tag = Tag::Sequence;
}

impl RdnSequence {
    /// Get an iterator over the RDNs.
    pub fn iter(&self) -> core::slice::Iter<'_, RelativeDistinguishedName> {
        self.rdns.iter()
    }

    /// Find the first attribute with the given OID.
    pub fn find_attr(&self, oid: ObjectIdentifier) -> Option<&AttributeTypeAndValue> {
        self.rdns
            .iter()
            .flat_map(|rdn| rdn.attributes.iter())
            .find(|attr| attr.oid == oid)
    }
}

impl fmt::Display for RdnSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rdns: Vec<String> = self.rdns.iter().rev().map(|r| r.to_string()).collect();
        write!(f, "{}", rdns.join(","))
    }
}

// ============================================================================
// Name - RFC 5280 Section 4.1.2.4
// ============================================================================

/// Name is a CHOICE whose only alternative is an RdnSequence.
///
/// ```asn1
/// Name ::= CHOICE { -- only one possibility for now --
///     rdnSequence  RDNSequence }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Name {
    /// rdnSequence
    RdnSequence(RdnSequence),
}

impl Name {
    /// The underlying RDN sequence.
    pub fn rdn_sequence(&self) -> &RdnSequence {
        match self {
            Name::RdnSequence(rdns) => rdns,
        }
    }

    /// Get the Common Name (CN) if present.
    pub fn common_name(&self) -> Option<String> {
        self.rdn_sequence()
            .find_attr(CN)
            .and_then(|a| a.value_as_str())
    }

    /// Get the Organization (O) if present.
    pub fn organization(&self) -> Option<String> {
        self.rdn_sequence()
            .find_attr(ORGANIZATION_NAME)
            .and_then(|a| a.value_as_str())
    }
}

impl Default for Name {
    fn default() -> Self {
        Name::RdnSequence(RdnSequence::default())
    }
}

impl<'a> DecodeValue<'a> for Name {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        match header.tag {
            Tag::Sequence => Ok(Name::RdnSequence(RdnSequence::decode_value(reader, header)?)),
            tag => Err(ErrorKind::TagUnexpected {
                expected: Some(Tag::Sequence),
                actual: tag,
            }
            .into()),
        }
    }
}

impl EncodeValue for Name {
    fn value_len(&self) -> der::Result<Length> {
        match self {
            Name::RdnSequence(rdns) => rdns.value_len(),
        }
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        match self {
            Name::RdnSequence(rdns) => rdns.encode_value(writer),
        }
    }
}

impl FixedTag for Name {
    const TAG: Tag = Tag::Sequence;
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.rdn_sequence(), f)
    }
}
