// ─────────────────────────────────────────────────────────────────────
// SCPN Spherical Transform — Cosine Transforms
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Discrete cosine transforms on the half-sample grid
//! `theta_n = pi*(n + 1/2)/N`.
//!
//! `dct_iii` is the synthesis evaluator the transform core treats as an
//! opaque linear operator; `dct_ii` is its exact inverse and is what the
//! weight-table provider uses to project sampled Legendre weights onto
//! the cosine basis. The pair satisfies `dct_iii(dct_ii(x)) == x` for any
//! sample vector, which is what makes the accelerated synthesis path
//! bit-compatible with direct summation up to re-association error.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Forward transform: `c[k] = (1/N) * sum_n x[n] * cos(pi*k*(n+1/2)/N)`.
pub fn dct_ii(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut c = vec![0.0; n];
    for (k, ck) in c.iter_mut().enumerate() {
        let mut acc = 0.0;
        for (j, &xj) in x.iter().enumerate() {
            acc += xj * (PI * k as f64 * (j as f64 + 0.5) / n as f64).cos();
        }
        *ck = acc / n as f64;
    }
    c
}

/// Synthesis: `out[n] = c[0] + 2 * sum_{k>=1} c[k] * cos(pi*k*(n+1/2)/N)`.
pub fn dct_iii(c: &[f64], out: &mut [f64]) {
    let n = c.len();
    debug_assert_eq!(out.len(), n);
    for (j, oj) in out.iter_mut().enumerate() {
        let mut acc = c[0];
        for (k, &ck) in c.iter().enumerate().skip(1) {
            acc += 2.0 * ck * (PI * k as f64 * (j as f64 + 0.5) / n as f64).cos();
        }
        *oj = acc;
    }
}

/// Synthesis applied to a complex coefficient row (real and imaginary
/// parts are independent under a real linear operator).
pub fn dct_iii_complex(c: &[Complex64], out: &mut [Complex64]) {
    let n = c.len();
    debug_assert_eq!(out.len(), n);
    for (j, oj) in out.iter_mut().enumerate() {
        let mut acc = c[0];
        for (k, &ck) in c.iter().enumerate().skip(1) {
            acc += ck * (2.0 * (PI * k as f64 * (j as f64 + 0.5) / n as f64).cos());
        }
        *oj = acc;
    }
}
