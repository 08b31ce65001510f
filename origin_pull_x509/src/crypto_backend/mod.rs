// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Cryptographic backend abstraction for signature verification.
//!
//! The verifier only decides *whether* a signature must be checked and over
//! which bytes; the arithmetic is delegated to a [`CryptoBackend`]. The ring
//! implementation is enabled by the `ring-backend` feature.

extern crate alloc;

use crate::error::{Error, Result};
use crate::x509::oids::SHA512_WITH_RSA_ENCRYPTION;
use const_oid::ObjectIdentifier;

#[cfg(feature = "ring-backend")]
mod ring;
#[cfg(feature = "ring-backend")]
pub use self::ring::*;

/// Signature algorithm identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    /// RSA PKCS#1 v1.5 with SHA-512
    RsaPkcs1Sha512,
}

impl SignatureAlgorithm {
    /// Convert a signature algorithm OID to a SignatureAlgorithm.
    pub fn from_oid(oid: &ObjectIdentifier) -> Result<Self> {
        match *oid {
            SHA512_WITH_RSA_ENCRYPTION => Ok(SignatureAlgorithm::RsaPkcs1Sha512),
            _ => Err(Error::unsupported_algorithm(alloc::format!("OID: {}", oid))),
        }
    }

    /// The OID this algorithm is identified by in certificates.
    pub fn oid(&self) -> ObjectIdentifier {
        match self {
            SignatureAlgorithm::RsaPkcs1Sha512 => SHA512_WITH_RSA_ENCRYPTION,
        }
    }
}

/// Crypto backend trait for signature verification.
///
/// `public_key` is the content of the issuer's `subjectPublicKey` BIT STRING
/// (a PKCS#1 `RSAPublicKey` for the RSA algorithms).
pub trait CryptoBackend {
    /// Verify a signature.
    fn verify_signature(
        &self,
        algorithm: SignatureAlgorithm,
        tbs_data: &[u8],
        signature: &[u8],
        public_key: &[u8],
    ) -> Result<()>;
}

impl<B: CryptoBackend + ?Sized> CryptoBackend for &B {
    fn verify_signature(
        &self,
        algorithm: SignatureAlgorithm,
        tbs_data: &[u8],
        signature: &[u8],
        public_key: &[u8],
    ) -> Result<()> {
        (**self).verify_signature(algorithm, tbs_data, signature, public_key)
    }
}
