// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Origin pull trust anchor and certificate verification.

pub mod anchor;
pub mod oids;
pub mod verifier;

pub use anchor::{TrustAnchor, ORIGIN_PULL_CA_DER};
#[cfg(all(feature = "std", feature = "ring-backend"))]
pub use verifier::verify;
pub use verifier::{ClientCertificate, PeerCertificate, Verifier};
