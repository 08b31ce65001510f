// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Origin Pull Client Certificate Verification
//!
//! A no_std-compatible X.509 decoder and a pinned-CA verifier for the client
//! certificates an edge presents when it pulls from an origin. A certificate
//! is accepted only if it is signed with sha512WithRSAEncryption by the
//! origin pull CA and the current time lies within its validity period.
//!
//! # Features
//! - Decode X.509 certificates from DER/PEM and re-encode them byte for byte
//! - Verify a client certificate against the embedded origin pull CA
//! - Inject a different anchor, crypto backend or clock
//!
//! # Example
//! ```no_run
//! use origin_pull_x509::{verify, ClientCertificate};
//!
//! # fn example(cert_der: Vec<u8>) {
//! let peer = ClientCertificate::new(cert_der);
//! if !verify(Some(&peer)) {
//!     // reject the request
//! }
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod certificate;
pub mod crypto_backend;
pub mod error;
pub mod time;
pub mod x509;

pub use certificate::{Certificate, Name, TbsCertificate};
pub use error::{Error, Result};
pub use time::{Time, Validity};
#[cfg(all(feature = "std", feature = "ring-backend"))]
pub use x509::verify;
pub use x509::{ClientCertificate, PeerCertificate, TrustAnchor, Verifier, ORIGIN_PULL_CA_DER};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::crypto_backend::{CryptoBackend, SignatureAlgorithm};
    pub use crate::x509::{ClientCertificate, PeerCertificate, TrustAnchor, Verifier};
    pub use crate::{Certificate, Error, Result, Time};
}
