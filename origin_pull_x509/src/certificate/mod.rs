// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! X.509 v3 Certificate structure and parsing.
//!
//! The structures below are declared as schemas: `#[derive(Sequence)]` with
//! `#[asn1(...)]` markers for context tags, OPTIONAL and DEFAULT members.
//! Hand-written codecs exist only where the schema needs opaque `ANY`
//! capture or order-preserving SET OF (see [`algorithm`], [`name`] and
//! [`opaque`]).
//!
//! [`Certificate::from_der`] only accepts input that re-encodes to exactly
//! the same bytes. The `der` engine tolerates a few non-DER forms (explicitly
//! encoded DEFAULT values, unknown lower-numbered context tags ahead of an
//! OPTIONAL field) and drops them silently; such input is rejected here.
//!
//! # Examples
//!
//! ```no_run
//! use origin_pull_x509::Certificate;
//!
//! # fn example(der_bytes: &[u8], pem_string: &str) -> origin_pull_x509::Result<()> {
//! let cert = Certificate::from_der(der_bytes)?;
//! println!("Subject: {}", cert.tbs_certificate.subject);
//!
//! let cert = Certificate::from_pem(pem_string)?;
//! let tbs = cert.tbs_certificate_der()?;
//! # let _ = tbs;
//! # Ok(())
//! # }
//! ```

pub mod algorithm;
pub mod name;
pub mod opaque;

extern crate alloc;

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use const_oid::ObjectIdentifier;
use der::{
    asn1::{BitString, Int, OctetString},
    Decode, DecodeValue, Encode, EncodeValue, Enumerated, ErrorKind, FixedTag, Header, Length,
    Reader, Sequence, SliceReader, Tag, Writer,
};

pub use self::algorithm::AlgorithmIdentifier;
pub use self::name::{AttributeTypeAndValue, Name, RdnSequence, RelativeDistinguishedName};
pub use self::opaque::Opaque;

use crate::error::{EncodingError, Error, Result};
use crate::time::Validity;

const PEM_LABEL: &str = "CERTIFICATE";

// ============================================================================
// Version - RFC 5280 Section 4.1.2.1
// ============================================================================

/// X.509 certificate version.
///
/// ```asn1
/// Version  ::=  INTEGER  {  v1(0), v2(1), v3(2)  }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerated)]
#[asn1(type = "INTEGER")]
#[repr(u8)]
pub enum Version {
    /// Version 1 (value 0), the DEFAULT
    V1 = 0,
    /// Version 2 (value 1)
    V2 = 1,
    /// Version 3 (value 2)
    V3 = 2,
}

impl Default for Version {
    fn default() -> Self {
        Version::V1
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::V1 => write!(f, "v1"),
            Version::V2 => write!(f, "v2"),
            Version::V3 => write!(f, "v3"),
        }
    }
}

// ============================================================================
// CertificateSerialNumber - RFC 5280 Section 4.1.2.2
// ============================================================================

/// Certificate serial number.
///
/// Kept as the two's complement content octets of the INTEGER, so serials
/// wider than 64 bits (and the negative serials some issuers emit) survive
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialNumber {
    inner: Int,
}

impl SerialNumber {
    /// Build a serial number from canonical two's complement bytes.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            inner: Int::new(bytes)?,
        })
    }

    /// The content octets of the INTEGER.
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    /// Whether the sign bit is set.
    pub fn is_negative(&self) -> bool {
        matches!(self.as_bytes().first(), Some(b) if b & 0x80 != 0)
    }
}

impl<'a> DecodeValue<'a> for SerialNumber {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        Ok(Self {
            inner: Int::decode_value(reader, header)?,
        })
    }
}

impl EncodeValue for SerialNumber {
    fn value_len(&self) -> der::Result<Length> {
        self.inner.value_len()
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        self.inner.encode_value(writer)
    }
}

impl FixedTag for SerialNumber {
    const TAG: Tag = Tag::Integer;
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.as_bytes().iter().enumerate() {
            if i > 0 {
                write!(f, ":")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

// ============================================================================
// SubjectPublicKeyInfo - RFC 5280 Section 4.1.2.7
// ============================================================================

/// Subject public key information.
///
/// ```asn1
/// SubjectPublicKeyInfo  ::=  SEQUENCE  {
///     algorithm            AlgorithmIdentifier,
///     subjectPublicKey     BIT STRING  }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Sequence)]
pub struct SubjectPublicKeyInfo {
    /// Public key algorithm
    pub algorithm: AlgorithmIdentifier,
    /// Encoded public key
    pub subject_public_key: BitString,
}

// ============================================================================
// Extensions - RFC 5280 Section 4.1.2.9
// ============================================================================

/// Extension represents a single X.509 v3 extension.
///
/// ```asn1
/// Extension  ::=  SEQUENCE  {
///     extnID      OBJECT IDENTIFIER,
///     critical    BOOLEAN DEFAULT FALSE,
///     extnValue   OCTET STRING
/// }
/// ```
///
/// `extn_value` is carried unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Sequence)]
pub struct Extension {
    /// Extension OID
    pub extn_id: ObjectIdentifier,

    /// Whether this extension is critical
    #[asn1(default = "default_false")]
    pub critical: bool,

    /// Extension value (DER-encoded)
    pub extn_value: OctetString,
}

fn default_false() -> bool {
    false
}

impl Extension {
    /// Create a new extension
    pub fn new(extn_id: ObjectIdentifier, critical: bool, extn_value: Vec<u8>) -> Result<Self> {
        Ok(Self {
            extn_id,
            critical,
            extn_value: OctetString::new(extn_value)?,
        })
    }

    /// Get the extension value as a byte slice
    pub fn value(&self) -> &[u8] {
        self.extn_value.as_bytes()
    }
}

/// Extensions is a SEQUENCE OF Extension.
///
/// ```asn1
/// Extensions  ::=  SEQUENCE SIZE (1..MAX) OF Extension
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extensions {
    /// List of extensions in certificate order
    pub extensions: Vec<Extension>,
}

impl Extensions {
    /// Get an iterator over the extensions
    pub fn iter(&self) -> core::slice::Iter<'_, Extension> {
        self.extensions.iter()
    }

    /// Find an extension by OID
    pub fn find(&self, oid: &ObjectIdentifier) -> Option<&Extension> {
        self.extensions.iter().find(|e| &e.extn_id == oid)
    }

    /// Check if extensions list is empty
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Get the number of extensions
    pub fn len(&self) -> usize {
        self.extensions.len()
    }
}

impl<'a> DecodeValue<'a> for Extensions {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        let mut extensions = Vec::new();
        reader.read_nested(header.length, |seq_reader| {
            while !seq_reader.is_finished() {
                extensions.push(Extension::decode(seq_reader)?);
            }
            Ok(())
        })?;

        Ok(Self { extensions })
    }
}

impl EncodeValue for Extensions {
    fn value_len(&self) -> der::Result<Length> {
        let mut len = Length::ZERO;
        for ext in &self.extensions {
            len = (len + ext.encoded_len()?)?;
        }
        Ok(len)
    }

    fn encode_value(&self, writer: &mut impl Writer) -> der::Result<()> {
        for ext in &self.extensions {
            ext.encode(writer)?;
        }
        Ok(())
    }
}

impl FixedTag for Extensions {
    const TAG: Tag = Tag::Sequence;
}

// ============================================================================
// TBSCertificate - RFC 5280 Section 4.1
// ============================================================================

/// TBSCertificate (To Be Signed Certificate) contains all certificate fields
/// that are signed by the issuer.
///
/// ```asn1
/// TBSCertificate  ::=  SEQUENCE  {
///     version         [0]  EXPLICIT Version DEFAULT v1,
///     serialNumber         CertificateSerialNumber,
///     signature            AlgorithmIdentifier,
///     issuer               Name,
///     validity             Validity,
///     subject              Name,
///     subjectPublicKeyInfo SubjectPublicKeyInfo,
///     issuerUniqueID  [1]  IMPLICIT UniqueIdentifier OPTIONAL,
///     subjectUniqueID [2]  IMPLICIT UniqueIdentifier OPTIONAL,
///     extensions      [3]  EXPLICIT Extensions OPTIONAL
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Sequence)]
pub struct TbsCertificate {
    /// Certificate version, v1 when the field is absent
    #[asn1(context_specific = "0", default = "Default::default")]
    pub version: Version,

    /// Certificate serial number
    pub serial_number: SerialNumber,

    /// Signature algorithm identifier (should match Certificate.signatureAlgorithm)
    pub signature: AlgorithmIdentifier,

    /// Issuer Distinguished Name
    pub issuer: Name,

    /// Validity period (notBefore and notAfter)
    pub validity: Validity,

    /// Subject Distinguished Name
    pub subject: Name,

    /// Subject's public key information
    pub subject_public_key_info: SubjectPublicKeyInfo,

    /// Issuer unique identifier (v2/v3 only, rarely used)
    #[asn1(context_specific = "1", tag_mode = "IMPLICIT", optional = "true")]
    pub issuer_unique_id: Option<BitString>,

    /// Subject unique identifier (v2/v3 only, rarely used)
    #[asn1(context_specific = "2", tag_mode = "IMPLICIT", optional = "true")]
    pub subject_unique_id: Option<BitString>,

    /// Extensions (v3 only)
    #[asn1(context_specific = "3", tag_mode = "EXPLICIT", optional = "true")]
    pub extensions: Option<Extensions>,
}

impl TbsCertificate {
    /// Get the DER encoding of this TBSCertificate.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        Encode::to_der(self).map_err(Error::Asn1)
    }
}

// ============================================================================
// Certificate - RFC 5280 Section 4.1
// ============================================================================

/// X.509 Certificate structure.
///
/// ```asn1
/// Certificate  ::=  SEQUENCE  {
///     tbsCertificate       TBSCertificate,
///     signatureAlgorithm   AlgorithmIdentifier,
///     signatureValue       BIT STRING
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Sequence)]
pub struct Certificate {
    /// The certificate content to be signed
    pub tbs_certificate: TbsCertificate,

    /// The signature algorithm used by the issuer
    pub signature_algorithm: AlgorithmIdentifier,

    /// The signature value (signature of DER-encoded tbsCertificate)
    pub signature: BitString,
}

impl Certificate {
    /// Parse a Certificate from DER-encoded bytes.
    ///
    /// Trailing bytes are rejected, and so is anything the decoder skipped or
    /// normalized: the certificate must re-encode to `bytes` unchanged.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let cert = <Self as Decode>::from_der(bytes).map_err(Error::Asn1)?;
        if Encode::to_der(&cert)? != bytes {
            return Err(Error::Asn1(
                ErrorKind::Noncanonical { tag: Tag::Sequence }.into(),
            ));
        }
        Ok(cert)
    }

    /// The TBSCertificate TLV exactly as it appears in `cert_der`.
    pub fn raw_tbs_der(cert_der: &[u8]) -> Result<&[u8]> {
        let mut reader = SliceReader::new(cert_der)?;
        Header::decode(&mut reader)?.tag.assert_eq(Tag::Sequence)?;
        let tbs_header = reader.peek_header()?;
        tbs_header.tag.assert_eq(Tag::Sequence)?;
        let tbs_len = (tbs_header.encoded_len()? + tbs_header.length)?;
        Ok(reader.read_slice(tbs_len)?)
    }

    /// Parse a Certificate from a single PEM `CERTIFICATE` block.
    pub fn from_pem(pem: &str) -> Result<Self> {
        use pem_rfc7468::Decoder;

        let mut decoder = Decoder::new(pem.as_bytes())?;

        let label = decoder.type_label();
        if label != PEM_LABEL {
            return Err(Error::EncodingError(EncodingError::InvalidPemLabel {
                expected: PEM_LABEL.to_string(),
                found: label.to_string(),
            }));
        }

        let mut buf = alloc::vec![0u8; decoder.remaining_len()];
        let der_bytes = decoder.decode(&mut buf)?;

        Self::from_der(der_bytes)
    }

    /// Encode the certificate to DER format.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        Encode::to_der(self).map_err(Error::Asn1)
    }

    /// Get the DER encoding of the TBSCertificate.
    pub fn tbs_certificate_der(&self) -> Result<Vec<u8>> {
        self.tbs_certificate.to_der()
    }

    /// Get the signature bytes, or `None` if the BIT STRING has unused bits.
    pub fn signature_bytes(&self) -> Option<&[u8]> {
        self.signature.as_bytes()
    }

    /// Get the subject distinguished name.
    pub fn subject(&self) -> &Name {
        &self.tbs_certificate.subject
    }

    /// Get the issuer distinguished name.
    pub fn issuer(&self) -> &Name {
        &self.tbs_certificate.issuer
    }

    /// Get the certificate's serial number.
    pub fn serial_number(&self) -> &SerialNumber {
        &self.tbs_certificate.serial_number
    }

    /// Get the validity period.
    pub fn validity(&self) -> &Validity {
        &self.tbs_certificate.validity
    }

    /// Get the certificate version.
    pub fn version(&self) -> Version {
        self.tbs_certificate.version
    }

    /// Get the extensions if present.
    pub fn extensions(&self) -> Option<&Extensions> {
        self.tbs_certificate.extensions.as_ref()
    }

    /// Get the subject public key info.
    pub fn subject_public_key_info(&self) -> &SubjectPublicKeyInfo {
        &self.tbs_certificate.subject_public_key_info
    }
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Certificate:")?;
        writeln!(f, "  Version: {}", self.tbs_certificate.version)?;
        writeln!(f, "  Serial Number: {}", self.serial_number())?;
        writeln!(f, "  Signature Algorithm: {}", self.signature_algorithm)?;
        writeln!(f, "  Issuer: {}", self.tbs_certificate.issuer)?;
        writeln!(f, "  Validity:")?;
        writeln!(
            f,
            "    Not Before: {:?}",
            self.tbs_certificate.validity.not_before
        )?;
        writeln!(
            f,
            "    Not After: {:?}",
            self.tbs_certificate.validity.not_after
        )?;
        writeln!(f, "  Subject: {}", self.tbs_certificate.subject)?;

        if let Some(ref extensions) = self.tbs_certificate.extensions {
            writeln!(f, "  Extensions: {} extension(s)", extensions.len())?;
        }

        Ok(())
    }
}

/// Builders for hand-modified certificate encodings.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Wrap `body` in a TLV with a DER length (up to 64 KiB).
    pub(crate) fn tlv(tag: u8, body: &[u8]) -> Vec<u8> {
        let len = body.len();
        let mut out = alloc::vec![tag];
        if len < 0x80 {
            out.push(len as u8);
        } else if len <= 0xFF {
            out.extend_from_slice(&[0x81, len as u8]);
        } else {
            out.extend_from_slice(&[0x82, (len >> 8) as u8, len as u8]);
        }
        out.extend_from_slice(body);
        out
    }

    /// TBSCertificate content octets without the `[3]` extensions field.
    pub(crate) fn tbs_fields_without_extensions(cert: &Certificate) -> Vec<u8> {
        let mut tbs = cert.tbs_certificate.clone();
        tbs.extensions = None;
        let der_bytes = tbs.to_der().unwrap();
        let mut reader = SliceReader::new(&der_bytes).unwrap();
        let header = Header::decode(&mut reader).unwrap();
        let header_len = usize::try_from(header.encoded_len().unwrap()).unwrap();
        der_bytes[header_len..].to_vec()
    }

    /// The `[3] EXPLICIT Extensions` field, optionally spelling out
    /// `critical FALSE` on non-critical extensions.
    pub(crate) fn extensions_field(extensions: &Extensions, explicit_false: bool) -> Vec<u8> {
        let mut seq = Vec::new();
        for ext in extensions.iter() {
            let mut body = ext.extn_id.to_der().unwrap();
            if ext.critical {
                body.extend_from_slice(&[0x01, 0x01, 0xFF]);
            } else if explicit_false {
                body.extend_from_slice(&[0x01, 0x01, 0x00]);
            }
            body.extend(ext.extn_value.to_der().unwrap());
            seq.extend(tlv(0x30, &body));
        }
        tlv(0xA3, &tlv(0x30, &seq))
    }

    /// A certificate with `tbs_fields` as TBSCertificate content and the
    /// signature algorithm and value of `cert`.
    pub(crate) fn with_tbs_fields(cert: &Certificate, tbs_fields: &[u8]) -> Vec<u8> {
        let mut body = tlv(0x30, tbs_fields);
        body.extend(cert.signature_algorithm.to_der().unwrap());
        body.extend(cert.signature.to_der().unwrap());
        tlv(0x30, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::time::Time;
    use alloc::vec;
    use core::time::Duration;

    const CLIENT: &[u8] = include_bytes!("../../../test_key/origin_pull/client.der");
    const CLIENT_V1: &[u8] = include_bytes!("../../../test_key/origin_pull/client_v1.der");
    const CLIENT_GENERALIZED_TIME: &[u8] =
        include_bytes!("../../../test_key/origin_pull/client_generalized_time.der");
    const CLIENT_EC_KEY: &[u8] = include_bytes!("../../../test_key/origin_pull/client_ec_key.der");
    const TEST_CA: &[u8] = include_bytes!("../../../test_key/origin_pull/test_ca.der");
    const TEST_CA_PEM: &str = include_str!("../../../test_key/origin_pull/test_ca.pem");
    const ORIGIN_PULL_CA: &[u8] = include_bytes!("../x509/origin_pull_ca.der");

    /// Header length and value length of the TLV at the start of `bytes`.
    fn tlv_header(bytes: &[u8]) -> (usize, usize) {
        match bytes[1] {
            b if b < 0x80 => (2, usize::from(b)),
            0x81 => (3, usize::from(bytes[2])),
            0x82 => (4, usize::from(bytes[2]) << 8 | usize::from(bytes[3])),
            b => panic!("unexpected length octet {:#x}", b),
        }
    }

    /// The TBSCertificate TLV as it appears inside the certificate bytes.
    fn raw_tbs(cert: &[u8]) -> &[u8] {
        let (outer_header, _) = tlv_header(cert);
        let tbs = &cert[outer_header..];
        let (header, len) = tlv_header(tbs);
        &tbs[..header + len]
    }

    #[test]
    fn test_tbs_re_encodes_byte_for_byte() {
        for der_bytes in [
            CLIENT,
            CLIENT_V1,
            CLIENT_GENERALIZED_TIME,
            CLIENT_EC_KEY,
            TEST_CA,
            ORIGIN_PULL_CA,
        ] {
            let cert = Certificate::from_der(der_bytes).unwrap();
            assert_eq!(cert.tbs_certificate_der().unwrap(), raw_tbs(der_bytes));
            assert_eq!(cert.to_der().unwrap(), der_bytes.to_vec());
        }
    }

    #[test]
    fn test_client_fields() {
        let cert = Certificate::from_der(CLIENT).unwrap();
        assert_eq!(cert.version(), Version::V3);
        assert_eq!(
            cert.serial_number().as_bytes(),
            &[
                0x1f, 0x2e, 0x3d, 0x4c, 0x5b, 0x6a, 0x79, 0x88, 0x17, 0x26, 0x35, 0x44, 0x53,
                0x62, 0x71, 0x80
            ]
        );
        assert!(!cert.serial_number().is_negative());
        assert_eq!(
            cert.signature_algorithm.oid,
            ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.13")
        );
        assert_eq!(cert.signature_algorithm, cert.tbs_certificate.signature);
        assert_eq!(
            cert.subject().to_string(),
            "CN=origin.example.com,OU=Edge+O=Example, Inc.,C=US"
        );
        assert_eq!(cert.issuer().common_name().unwrap(), "origin-pull-test-ca");
        assert_eq!(
            cert.validity().not_before.unix_duration(),
            Duration::from_secs(1_433_116_800)
        );
        assert_eq!(
            cert.validity().not_after.unix_duration(),
            Duration::from_secs(1_496_275_200)
        );
        assert_eq!(cert.signature_bytes().unwrap().len(), 384);
    }

    #[test]
    fn test_client_extensions_kept_raw() {
        let cert = Certificate::from_der(CLIENT).unwrap();
        let extensions = cert.extensions().unwrap();
        assert_eq!(extensions.len(), 5);

        let basic_constraints = extensions
            .find(&ObjectIdentifier::new_unwrap("2.5.29.19"))
            .unwrap();
        assert!(basic_constraints.critical);
        assert_eq!(basic_constraints.value(), &[0x30, 0x00]);

        let eku = extensions
            .find(&ObjectIdentifier::new_unwrap("2.5.29.37"))
            .unwrap();
        assert!(!eku.critical);
    }

    #[test]
    fn test_v1_certificate_has_no_version_field() {
        let cert = Certificate::from_der(CLIENT_V1).unwrap();
        assert_eq!(cert.version(), Version::V1);
        assert_eq!(cert.serial_number().as_bytes(), &[0x01]);
        assert!(cert.extensions().is_none());

        // first TBS member is the INTEGER serial, not [0]
        let tbs = cert.tbs_certificate_der().unwrap();
        assert_eq!(tbs[4], 0x02);
    }

    #[test]
    fn test_generalized_time_not_after() {
        let cert = Certificate::from_der(CLIENT_GENERALIZED_TIME).unwrap();
        assert!(matches!(cert.validity().not_before, Time::UtcTime(_)));
        assert!(matches!(
            cert.validity().not_after,
            Time::GeneralizedTime(_)
        ));
        assert_eq!(
            cert.validity().not_after.unix_duration(),
            Duration::from_secs(2_695_420_800)
        );
    }

    #[test]
    fn test_ec_subject_key() {
        let cert = Certificate::from_der(CLIENT_EC_KEY).unwrap();
        let spki = cert.subject_public_key_info();
        assert_eq!(spki.algorithm.oid.to_string(), "1.2.840.10045.2.1");
        assert_eq!(
            spki.algorithm.parameters_der().unwrap(),
            &[0x06, 0x08, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x07]
        );
        // uncompressed P-256 point
        assert_eq!(spki.subject_public_key.raw_bytes().len(), 65);
    }

    #[test]
    fn test_origin_pull_ca_without_null_parameters() {
        let cert = Certificate::from_der(ORIGIN_PULL_CA).unwrap();
        assert!(cert.signature_algorithm.parameters.is_none());
        assert_eq!(
            cert.subject().common_name().unwrap(),
            "origin-pull.cloudflare.net"
        );
        assert_eq!(cert.subject(), cert.issuer());
        assert_eq!(cert.signature_bytes().unwrap().len(), 512);
    }

    #[test]
    fn test_from_pem() {
        let from_pem = Certificate::from_pem(TEST_CA_PEM).unwrap();
        let from_der = Certificate::from_der(TEST_CA).unwrap();
        assert_eq!(from_pem, from_der);
    }

    #[test]
    fn test_from_pem_wrong_label() {
        let pem = TEST_CA_PEM.replace("CERTIFICATE", "PUBLIC KEY");
        let err = Certificate::from_pem(&pem).unwrap_err();
        assert!(matches!(
            err,
            Error::EncodingError(EncodingError::InvalidPemLabel { .. })
        ));
    }

    #[test]
    fn test_trailing_data_rejected() {
        let mut bytes = CLIENT.to_vec();
        bytes.push(0x00);
        assert!(matches!(
            Certificate::from_der(&bytes),
            Err(Error::Asn1(_))
        ));
    }

    #[test]
    fn test_truncated_rejected() {
        for len in [0, 1, 4, 100, CLIENT.len() - 1] {
            assert!(Certificate::from_der(&CLIENT[..len]).is_err());
        }
    }

    #[test]
    fn test_rebuilt_client_matches_fixture() {
        let cert = Certificate::from_der(CLIENT).unwrap();
        let mut fields = tbs_fields_without_extensions(&cert);
        fields.extend(extensions_field(cert.extensions().unwrap(), false));
        assert_eq!(with_tbs_fields(&cert, &fields), CLIENT.to_vec());
    }

    #[test]
    fn test_stray_context_field_rejected() {
        let cert = Certificate::from_der(CLIENT).unwrap();
        // [0] { INTEGER 7 } between the public key info and [3]
        let mut fields = tbs_fields_without_extensions(&cert);
        fields.extend_from_slice(&[0xA0, 0x03, 0x02, 0x01, 0x07]);
        fields.extend(extensions_field(cert.extensions().unwrap(), false));

        let tampered = with_tbs_fields(&cert, &fields);
        assert!(matches!(
            Certificate::from_der(&tampered),
            Err(Error::Asn1(_))
        ));
    }

    #[test]
    fn test_explicit_default_critical_rejected() {
        let cert = Certificate::from_der(CLIENT).unwrap();
        let mut fields = tbs_fields_without_extensions(&cert);
        fields.extend(extensions_field(cert.extensions().unwrap(), true));

        let tampered = with_tbs_fields(&cert, &fields);
        assert!(matches!(
            Certificate::from_der(&tampered),
            Err(Error::Asn1(_))
        ));
    }

    #[test]
    fn test_explicit_default_version_rejected() {
        let cert = Certificate::from_der(CLIENT_V1).unwrap();
        // [0] { INTEGER 0 } is v1, the DEFAULT
        let mut fields = alloc::vec![0xA0, 0x03, 0x02, 0x01, 0x00];
        fields.extend(tbs_fields_without_extensions(&cert));

        let tampered = with_tbs_fields(&cert, &fields);
        assert!(matches!(
            Certificate::from_der(&tampered),
            Err(Error::Asn1(_))
        ));
    }

    #[test]
    fn test_raw_tbs_der() {
        for der_bytes in [CLIENT, CLIENT_V1, CLIENT_EC_KEY, ORIGIN_PULL_CA] {
            assert_eq!(Certificate::raw_tbs_der(der_bytes).unwrap(), raw_tbs(der_bytes));
        }
        assert!(Certificate::raw_tbs_der(&[]).is_err());
        assert!(Certificate::raw_tbs_der(&[0x02, 0x01, 0x00]).is_err());
        assert!(Certificate::raw_tbs_der(&CLIENT[..100]).is_err());
    }

    #[test]
    fn test_non_minimal_serial_rejected() {
        // INTEGER 00 01 is not minimally encoded
        assert!(SerialNumber::from_der(&[0x02, 0x02, 0x00, 0x01]).is_err());
        assert!(SerialNumber::from_der(&[0x02, 0x00]).is_err());
    }

    #[test]
    fn test_negative_serial() {
        let serial = SerialNumber::from_der(&[0x02, 0x02, 0xFF, 0x01]).unwrap();
        assert!(serial.is_negative());
        assert_eq!(serial.to_string(), "ff:01");
        assert_eq!(serial.to_der().unwrap(), vec![0x02, 0x02, 0xFF, 0x01]);
    }

    #[test]
    fn test_version_default_omitted() {
        assert_eq!(Version::default(), Version::V1);
        assert_eq!(Version::V3.to_string(), "v3");
        assert_eq!(Version::V3.to_der().unwrap(), vec![0x02, 0x01, 0x02]);
    }

    #[test]
    fn test_extension_create() {
        let oid = ObjectIdentifier::new_unwrap("2.5.29.19");
        let value = vec![0x30, 0x03, 0x01, 0x01, 0xFF];

        let ext = Extension::new(oid, true, value.clone()).unwrap();
        assert_eq!(ext.extn_id, oid);
        assert!(ext.critical);
        assert_eq!(ext.value(), &value);

        // critical FALSE is the DEFAULT and is left out of the encoding
        let ext = Extension::new(oid, false, vec![0x30, 0x00]).unwrap();
        assert_eq!(
            ext.to_der().unwrap(),
            vec![0x30, 0x09, 0x06, 0x03, 0x55, 0x1D, 0x13, 0x04, 0x02, 0x30, 0x00]
        );
    }

    #[test]
    fn test_display() {
        let cert = Certificate::from_der(CLIENT).unwrap();
        let text = cert.to_string();
        assert!(text.contains("Version: v3"));
        assert!(text.contains("Serial Number: 1f:2e:3d:4c"));
        assert!(text.contains("Extensions: 5 extension(s)"));
    }
}
