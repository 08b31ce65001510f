// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Algorithm OID constants
//!
//! # References
//! - RFC 8017 Appendix A.2.4 - PKCS#1 signature algorithm identifiers
//! - RFC 5480 Section 2.1.1 - elliptic curve public key identifiers

use const_oid::ObjectIdentifier;

// =============================================================================
// Public key algorithms
// =============================================================================

/// rsaEncryption - 1.2.840.113549.1.1.1
pub const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// id-ecPublicKey - 1.2.840.10045.2.1
pub const EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

// =============================================================================
// Signature algorithms
// =============================================================================

/// sha512WithRSAEncryption - 1.2.840.113549.1.1.13
///
/// The single signature algorithm accepted for origin pull certificates.
pub const SHA512_WITH_RSA_ENCRYPTION: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.13");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oid_values() {
        assert_eq!(RSA_ENCRYPTION.to_string(), "1.2.840.113549.1.1.1");
        assert_eq!(EC_PUBLIC_KEY.to_string(), "1.2.840.10045.2.1");
        assert_eq!(
            SHA512_WITH_RSA_ENCRYPTION.to_string(),
            "1.2.840.113549.1.1.13"
        );
    }
}
