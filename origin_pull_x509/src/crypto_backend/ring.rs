// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Ring cryptographic backend implementation.

use super::{CryptoBackend, SignatureAlgorithm};
use crate::error::{Error, Result};
use ring::signature::{self, UnparsedPublicKey};

/// Ring-based cryptographic backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct RingBackend;

impl CryptoBackend for RingBackend {
    fn verify_signature(
        &self,
        algorithm: SignatureAlgorithm,
        tbs_data: &[u8],
        signature: &[u8],
        public_key: &[u8],
    ) -> Result<()> {
        log::trace!(
            "Verifying {}-byte signature over {} bytes with algorithm {:?}",
            signature.len(),
            tbs_data.len(),
            algorithm
        );

        let ring_algo: &dyn signature::VerificationAlgorithm = match algorithm {
            SignatureAlgorithm::RsaPkcs1Sha512 => &signature::RSA_PKCS1_2048_8192_SHA512,
        };

        let pk = UnparsedPublicKey::new(ring_algo, public_key);

        pk.verify(tbs_data, signature).map_err(|_| {
            log::debug!("Signature verification failed");
            Error::signature_failed()
        })?;

        log::trace!("Signature verification successful");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::Certificate;
    use crate::error::SignatureError;

    const TEST_CA: &[u8] = include_bytes!("../../../test_key/origin_pull/test_ca.der");
    const OTHER_CA: &[u8] = include_bytes!("../../../test_key/origin_pull/other_ca.der");

    fn self_signed_parts() -> (alloc::vec::Vec<u8>, alloc::vec::Vec<u8>, alloc::vec::Vec<u8>) {
        let cert = Certificate::from_der(TEST_CA).unwrap();
        let tbs = cert.tbs_certificate_der().unwrap();
        let signature = cert.signature_bytes().unwrap().to_vec();
        let key = cert
            .subject_public_key_info()
            .subject_public_key
            .as_bytes()
            .unwrap()
            .to_vec();
        (tbs, signature, key)
    }

    #[test]
    fn test_self_signed_ca_verifies() {
        let (tbs, signature, key) = self_signed_parts();
        RingBackend
            .verify_signature(SignatureAlgorithm::RsaPkcs1Sha512, &tbs, &signature, &key)
            .unwrap();
    }

    #[test]
    fn test_wrong_key_fails() {
        let (tbs, signature, _) = self_signed_parts();
        let other = Certificate::from_der(OTHER_CA).unwrap();
        let other_key = other
            .subject_public_key_info()
            .subject_public_key
            .as_bytes()
            .unwrap();
        let err = RingBackend
            .verify_signature(SignatureAlgorithm::RsaPkcs1Sha512, &tbs, &signature, other_key)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::SignatureError(SignatureError::VerificationFailed)
        ));
    }

    #[test]
    fn test_modified_data_fails() {
        let (mut tbs, signature, key) = self_signed_parts();
        tbs[100] ^= 0x01;
        assert!(RingBackend
            .verify_signature(SignatureAlgorithm::RsaPkcs1Sha512, &tbs, &signature, &key)
            .is_err());
    }

    #[test]
    fn test_garbage_key_fails() {
        let (tbs, signature, _) = self_signed_parts();
        assert!(RingBackend
            .verify_signature(SignatureAlgorithm::RsaPkcs1Sha512, &tbs, &signature, &[0x30, 0x00])
            .is_err());
    }
}
