// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Origin pull client certificate verification.
//!
//! A client certificate is accepted when it decodes, is signed with
//! sha512WithRSAEncryption (declared identically inside and outside the
//! TBSCertificate), is within its validity period and carries a signature
//! that checks out against the anchor's public key. No chain building,
//! revocation, name or extension processing takes place.

extern crate alloc;

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::certificate::Certificate;
use crate::crypto_backend::{CryptoBackend, SignatureAlgorithm};
use crate::error::{AlgorithmError, Error, Result};
use crate::time::Time;
use crate::x509::anchor::TrustAnchor;
use crate::x509::oids::SHA512_WITH_RSA_ENCRYPTION;

#[cfg(feature = "ring-backend")]
use crate::crypto_backend::RingBackend;

/// Anything that may carry the raw DER of a presented client certificate.
pub trait PeerCertificate {
    /// The DER bytes, or `None` when the handle holds no certificate.
    fn raw(&self) -> Option<&[u8]>;
}

impl PeerCertificate for [u8] {
    fn raw(&self) -> Option<&[u8]> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl PeerCertificate for Vec<u8> {
    fn raw(&self) -> Option<&[u8]> {
        self.as_slice().raw()
    }
}

impl<T: PeerCertificate + ?Sized> PeerCertificate for &T {
    fn raw(&self) -> Option<&[u8]> {
        (**self).raw()
    }
}

/// A certificate handle as handed over by a TLS layer, which may have no
/// certificate attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientCertificate {
    pub raw: Option<Vec<u8>>,
}

impl ClientCertificate {
    pub fn new(raw: Vec<u8>) -> Self {
        Self { raw: Some(raw) }
    }
}

impl PeerCertificate for ClientCertificate {
    fn raw(&self) -> Option<&[u8]> {
        self.raw.as_deref().and_then(<[u8] as PeerCertificate>::raw)
    }
}

/// Verifies client certificates against a single trust anchor.
#[derive(Debug, Clone)]
pub struct Verifier<'a, B: CryptoBackend> {
    anchor: &'a TrustAnchor,
    backend: B,
}

#[cfg(feature = "ring-backend")]
impl<'a> Verifier<'a, RingBackend> {
    /// Create a verifier using the ring backend.
    pub fn new(anchor: &'a TrustAnchor) -> Self {
        Self::with_backend(anchor, RingBackend)
    }
}

impl<'a, B: CryptoBackend> Verifier<'a, B> {
    /// Create a verifier with a custom crypto backend.
    pub fn with_backend(anchor: &'a TrustAnchor, backend: B) -> Self {
        Self { anchor, backend }
    }

    pub fn anchor(&self) -> &'a TrustAnchor {
        self.anchor
    }

    /// Verify a presented certificate against the system clock.
    #[cfg(feature = "std")]
    pub fn verify<C: PeerCertificate + ?Sized>(&self, peer: Option<&C>) -> bool {
        match crate::time::current_time() {
            Ok(now) => self.verify_at(peer, &now),
            Err(e) => {
                log::debug!("Rejecting certificate, clock unavailable: {}", e);
                false
            }
        }
    }

    /// Verify a presented certificate at the instant `now`.
    pub fn verify_at<C: PeerCertificate + ?Sized>(&self, peer: Option<&C>, now: &Time) -> bool {
        let raw = match peer.and_then(|p| p.raw()) {
            Some(raw) => raw,
            None => {
                log::debug!("Rejecting certificate: {}", Error::MissingCertificate);
                return false;
            }
        };

        match self.check_at(raw, now) {
            Ok(_) => true,
            Err(e) => {
                log::debug!("Rejecting certificate: {}", e);
                false
            }
        }
    }

    /// Run every check on `raw` at the instant `now` and return the decoded
    /// certificate, or the first failing check as an error.
    pub fn check_at(&self, raw: &[u8], now: &Time) -> Result<Certificate> {
        if raw.is_empty() {
            return Err(Error::MissingCertificate);
        }

        log::trace!("Checking {}-byte client certificate", raw.len());
        let cert = Certificate::from_der(raw)?;

        let outer = &cert.signature_algorithm.oid;
        if *outer != SHA512_WITH_RSA_ENCRYPTION {
            return Err(Error::algorithm_not_allowed(outer.to_string()));
        }
        let inner = &cert.tbs_certificate.signature.oid;
        if inner != outer {
            return Err(Error::AlgorithmError(AlgorithmError::Mismatch {
                outer: outer.to_string(),
                inner: inner.to_string(),
            }));
        }

        let validity = cert.validity();
        if !validity.is_valid_at(now) {
            return Err(if now.is_before(&validity.not_before) {
                Error::not_yet_valid()
            } else {
                Error::expired()
            });
        }

        // `from_der` has already checked that these bytes re-encode unchanged.
        let tbs_der = Certificate::raw_tbs_der(raw)?;
        let signature = cert
            .signature_bytes()
            .ok_or_else(|| Error::invalid_signature("signature has unused bits"))?;

        let algorithm = SignatureAlgorithm::from_oid(outer)?;
        self.backend.verify_signature(
            algorithm,
            tbs_der,
            signature,
            self.anchor.public_key(),
        )?;

        log::trace!("Accepted certificate for {}", cert.subject());
        Ok(cert)
    }
}

/// Verify a client certificate against the embedded origin pull CA using
/// the system clock.
#[cfg(all(feature = "std", feature = "ring-backend"))]
pub fn verify<C: PeerCertificate + ?Sized>(peer: Option<&C>) -> bool {
    match TrustAnchor::origin_pull() {
        Ok(anchor) => Verifier::new(anchor).verify(peer),
        Err(e) => {
            log::error!("Embedded origin pull CA is unusable: {}", e);
            false
        }
    }
}
