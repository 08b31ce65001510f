// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

#![no_main]

use core::time::Duration;

use libfuzzer_sys::fuzz_target;

use origin_pull_x509::{Certificate, Time, TrustAnchor, Verifier};

fuzz_target!(|cert: &[u8]| {
    if let Ok(decoded) = Certificate::from_der(cert) {
        let _ = decoded.tbs_certificate_der();
        let _ = decoded.to_string();
    }

    // 2016-02-22T17:28:42Z, inside the origin pull CA validity period
    let Ok(now) = Time::from_unix_duration(Duration::from_secs(1_456_162_122)) else {
        return;
    };
    if let Ok(anchor) = TrustAnchor::origin_pull() {
        let _ = Verifier::new(anchor).verify_at(Some(cert), &now);
    }
});
