// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Error types for origin pull certificate verification.
//!
//! Every rejection path of the verifier maps onto one variant here. The
//! boolean entry points collapse these into `false`; `Verifier::check_at`
//! hands them to the caller unchanged.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;

/// Result type alias for verification operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for certificate decoding and verification
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// No certificate, or a certificate without raw bytes, was presented
    MissingCertificate,

    /// Malformed DER (from der crate)
    Asn1(der::Error),

    /// Errors related to cryptographic signature verification
    SignatureError(SignatureError),

    /// Errors related to time validation
    TimeError(TimeError),

    /// Disallowed, unsupported or inconsistent algorithms
    AlgorithmError(AlgorithmError),

    /// PEM conversion errors
    EncodingError(EncodingError),

    /// Unusable public key in the trust anchor
    KeyError(KeyError),
}

/// Errors related to cryptographic signature verification
#[derive(Debug, Clone)]
pub enum SignatureError {
    /// Signature verification failed
    VerificationFailed,

    /// Invalid signature format
    InvalidSignatureFormat(String),
}

/// Errors related to time validation
#[derive(Debug, Clone)]
pub enum TimeError {
    /// Certificate not yet valid
    NotYetValid,

    /// Certificate has expired
    Expired,

    /// The current time could not be determined
    InvalidTime,
}

/// Errors related to cryptographic algorithms
#[derive(Debug, Clone)]
pub enum AlgorithmError {
    /// Algorithm is known but not accepted by the verifier
    NotAllowed(String),

    /// Algorithm not supported by the crypto backend
    Unsupported(String),

    /// The TBSCertificate signature algorithm differs from the outer one
    Mismatch { outer: String, inner: String },
}

/// PEM encoding errors
#[derive(Debug, Clone)]
pub enum EncodingError {
    /// Invalid PEM encoding
    InvalidPem(String),

    /// Unexpected PEM type label
    InvalidPemLabel { expected: String, found: String },
}

/// Errors related to public keys
#[derive(Debug, Clone)]
pub enum KeyError {
    /// Invalid key encoding
    InvalidEncoding(String),

    /// Unsupported key type
    UnsupportedKeyType(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingCertificate => write!(f, "No client certificate presented"),
            Error::Asn1(e) => write!(f, "ASN.1 error: {}", e),
            Error::SignatureError(e) => write!(f, "Signature error: {}", e),
            Error::TimeError(e) => write!(f, "Time validation error: {}", e),
            Error::AlgorithmError(e) => write!(f, "Algorithm error: {}", e),
            Error::EncodingError(e) => write!(f, "Encoding error: {}", e),
            Error::KeyError(e) => write!(f, "Public key error: {}", e),
        }
    }
}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureError::VerificationFailed => write!(f, "Signature verification failed"),
            SignatureError::InvalidSignatureFormat(msg) => {
                write!(f, "Invalid signature format: {}", msg)
            }
        }
    }
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeError::NotYetValid => write!(f, "Certificate not yet valid"),
            TimeError::Expired => write!(f, "Certificate has expired"),
            TimeError::InvalidTime => write!(f, "Invalid time"),
        }
    }
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmError::NotAllowed(algo) => write!(f, "Algorithm not allowed: {}", algo),
            AlgorithmError::Unsupported(algo) => write!(f, "Unsupported algorithm: {}", algo),
            AlgorithmError::Mismatch { outer, inner } => {
                write!(f, "Algorithm mismatch: outer={}, tbs={}", outer, inner)
            }
        }
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::InvalidPem(msg) => write!(f, "Invalid PEM: {}", msg),
            EncodingError::InvalidPemLabel { expected, found } => {
                write!(
                    f,
                    "Invalid PEM label: expected '{}', found '{}'",
                    expected, found
                )
            }
        }
    }
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::InvalidEncoding(msg) => write!(f, "Invalid key encoding: {}", msg),
            KeyError::UnsupportedKeyType(typ) => write!(f, "Unsupported key type: {}", typ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Self {
        Error::Asn1(err)
    }
}

/// Convert from PEM decoding errors
impl From<pem_rfc7468::Error> for Error {
    fn from(err: pem_rfc7468::Error) -> Self {
        Error::EncodingError(EncodingError::InvalidPem(err.to_string()))
    }
}

impl Error {
    /// Create a signature verification failure
    pub fn signature_failed() -> Self {
        Error::SignatureError(SignatureError::VerificationFailed)
    }

    /// Create an invalid signature format error
    pub fn invalid_signature<S: Into<String>>(msg: S) -> Self {
        Error::SignatureError(SignatureError::InvalidSignatureFormat(msg.into()))
    }

    /// Create an algorithm-not-allowed error
    pub fn algorithm_not_allowed<S: Into<String>>(algo: S) -> Self {
        Error::AlgorithmError(AlgorithmError::NotAllowed(algo.into()))
    }

    /// Create an unsupported algorithm error
    pub fn unsupported_algorithm<S: Into<String>>(algo: S) -> Self {
        Error::AlgorithmError(AlgorithmError::Unsupported(algo.into()))
    }

    /// Create a certificate expired error
    pub fn expired() -> Self {
        Error::TimeError(TimeError::Expired)
    }

    /// Create a certificate not yet valid error
    pub fn not_yet_valid() -> Self {
        Error::TimeError(TimeError::NotYetValid)
    }

    /// Create an error for an unavailable or unrepresentable clock
    pub fn invalid_time() -> Self {
        Error::TimeError(TimeError::InvalidTime)
    }

    /// Create an unsupported key type error
    pub fn unsupported_key<S: Into<String>>(typ: S) -> Self {
        Error::KeyError(KeyError::UnsupportedKeyType(typ.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::signature_failed();
        assert_eq!(
            err.to_string(),
            "Signature error: Signature verification failed"
        );

        let err = Error::expired();
        assert!(err.to_string().contains("expired"));

        let err = Error::AlgorithmError(AlgorithmError::Mismatch {
            outer: "1.2.840.113549.1.1.13".to_string(),
            inner: "1.2.840.113549.1.1.11".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Algorithm error: Algorithm mismatch: outer=1.2.840.113549.1.1.13, tbs=1.2.840.113549.1.1.11"
        );
    }

    #[test]
    fn test_error_conversions() {
        let der_err = der::Error::new(der::ErrorKind::Failed, der::Length::ZERO);
        let err: Error = der_err.into();
        assert!(matches!(err, Error::Asn1(_)));
    }

    #[test]
    fn test_helper_constructors() {
        let err = Error::algorithm_not_allowed("1.2.840.113549.1.1.11");
        assert!(matches!(
            err,
            Error::AlgorithmError(AlgorithmError::NotAllowed(_))
        ));

        let err = Error::unsupported_key("1.2.840.10045.2.1");
        assert!(matches!(
            err,
            Error::KeyError(KeyError::UnsupportedKeyType(_))
        ));

        let err = Error::not_yet_valid();
        assert!(matches!(err, Error::TimeError(TimeError::NotYetValid)));

        let err = Error::invalid_time();
        assert_eq!(err.to_string(), "Time validation error: Invalid time");
    }

    #[test]
    fn test_clone() {
        let err = Error::invalid_signature("unused bits");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
