// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! AlgorithmIdentifier - RFC 5280 Section 4.1.1.2

use core::fmt;

use const_oid::ObjectIdentifier;
use der::{
    Decode, DecodeValue, Encode, EncodeValue, Header, Length, Reader, Sequence, Writer,
};

use super::opaque::Opaque;

/// Identifies an algorithm together with its optional parameters.
///
/// ```asn1
/// AlgorithmIdentifier  ::=  SEQUENCE  {
///     algorithm               OBJECT IDENTIFIER,
///     parameters              ANY DEFINED BY algorithm OPTIONAL
/// }
/// ```
///
/// `parameters` is never interpreted; an absent value and an explicit NULL
/// stay distinct so the structure re-encodes to the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmIdentifier {
    /// Algorithm OID
    pub oid: ObjectIdentifier,
    /// Raw parameters, if present
    pub parameters: Option<Opaque>,
}

impl AlgorithmIdentifier {
    /// Create an identifier without parameters.
    pub fn new(oid: ObjectIdentifier) -> Self {
        Self {
            oid,
            parameters: None,
        }
    }

    /// Attach raw DER parameters.
    pub fn with_parameters(mut self, parameters: &[u8]) -> der::Result<Self> {
        self.parameters = Some(Opaque::from_der(parameters)?);
        Ok(self)
    }

    /// Parameters as their full TLV encoding.
    pub fn parameters_der(&self) -> Option<&[u8]> {
        self.parameters.as_ref().map(Opaque::as_bytes)
    }
}

impl<'a> DecodeValue<'a> for AlgorithmIdentifier {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        reader.read_nested(header.length, |nested| {
            let oid = ObjectIdentifier::decode(nested)?;
            let parameters = if nested.is_finished() {
                None
            } else {
                Some(Opaque::decode_remaining(nested)?)
            };
            Ok(Self { oid, parameters })
        })
    }
}

impl EncodeValue for AlgorithmIdentifier {
    fn value_len(&self) -> der::Result<Length> {
        match &self.parameters {
            Some(params) => self.oid.encoded_len()? + params.encoded_len()?,
            None => self.oid.encoded_len(),
        }
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        self.oid.encode(writer)?;
        if let Some(params) = &self.parameters {
            params.encode(writer)?;
        }
        Ok(())
    }
}

impl Sequence<'_> for AlgorithmIdentifier {}

impl fmt::Display for AlgorithmIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.oid)
    }
}
