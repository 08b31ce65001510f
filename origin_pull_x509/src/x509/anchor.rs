// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Trust anchors.
//!
//! The origin pull CA is embedded as DER and decoded on first use. Any other
//! RSA CA certificate can be turned into an anchor for testing or for a
//! private deployment.

extern crate alloc;

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::certificate::{Certificate, Name};
use crate::error::{Error, KeyError, Result};
use crate::x509::oids::RSA_ENCRYPTION;

/// The origin pull CA certificate (RSA-4096, sha512WithRSAEncryption,
/// valid 2015-01-13 to 2020-01-12).
pub const ORIGIN_PULL_CA_DER: &[u8] = include_bytes!("origin_pull_ca.der");

static ORIGIN_PULL: spin::Once<Result<TrustAnchor>> = spin::Once::new();

/// A CA certificate together with the RSA public key signatures are checked
/// against.
#[derive(Debug, Clone)]
pub struct TrustAnchor {
    certificate: Certificate,
    public_key: Vec<u8>,
}

impl TrustAnchor {
    /// Build an anchor from a decoded CA certificate.
    ///
    /// The subject public key must be `rsaEncryption` and its BIT STRING must
    /// hold whole octets (a PKCS#1 `RSAPublicKey`).
    pub fn from_certificate(certificate: Certificate) -> Result<Self> {
        let spki = certificate.subject_public_key_info();
        if spki.algorithm.oid != RSA_ENCRYPTION {
            return Err(Error::unsupported_key(spki.algorithm.oid.to_string()));
        }

        let public_key = spki
            .subject_public_key
            .as_bytes()
            .ok_or_else(|| {
                Error::KeyError(KeyError::InvalidEncoding(
                    "public key has unused bits".to_string(),
                ))
            })?
            .to_vec();
        if public_key.is_empty() {
            return Err(Error::KeyError(KeyError::InvalidEncoding(
                "empty public key".to_string(),
            )));
        }

        log::trace!(
            "Trust anchor {} with {}-byte public key",
            certificate.subject(),
            public_key.len()
        );

        Ok(Self {
            certificate,
            public_key,
        })
    }

    /// Build an anchor from a DER encoded CA certificate.
    pub fn from_der(der_bytes: &[u8]) -> Result<Self> {
        Self::from_certificate(Certificate::from_der(der_bytes)?)
    }

    /// Build an anchor from a PEM `CERTIFICATE` block.
    pub fn from_pem(pem: &str) -> Result<Self> {
        Self::from_certificate(Certificate::from_pem(pem)?)
    }

    /// The process-wide origin pull anchor, decoded on first call.
    pub fn origin_pull() -> Result<&'static TrustAnchor> {
        ORIGIN_PULL
            .call_once(|| Self::from_der(ORIGIN_PULL_CA_DER))
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn certificate(&self) -> &Certificate {
        &self.certificate
    }

    /// PKCS#1 `RSAPublicKey` DER.
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn subject(&self) -> &Name {
        self.certificate.subject()
    }
}
