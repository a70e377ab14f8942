// ─────────────────────────────────────────────────────────────────────
// SCPN Spherical Transform — Property-Based Tests (proptest) for sht-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for sht-math using proptest.
//!
//! Covers: DCT-II/III roundtrip, DCT linearity, Legendre parity and
//! boundedness, real-FFT DC recovery.

use num_complex::Complex64;
use proptest::prelude::*;
use sht_math::dct::{dct_ii, dct_iii};
use sht_math::fft::RealInverseFft;
use sht_math::legendre::legendre_array;
use std::f64::consts::PI;

// ── Cosine Transform Properties ──────────────────────────────────────

proptest! {
    /// dct_iii(dct_ii(x)) reproduces x for any sample vector.
    #[test]
    fn dct_roundtrip_is_identity(x in prop::collection::vec(-10.0f64..10.0, 1..64)) {
        let c = dct_ii(&x);
        let mut back = vec![0.0; x.len()];
        dct_iii(&c, &mut back);
        for (a, b) in x.iter().zip(&back) {
            prop_assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
        }
    }

    /// The forward transform is linear.
    #[test]
    fn dct_ii_is_linear(
        x in prop::collection::vec(-5.0f64..5.0, 8),
        y in prop::collection::vec(-5.0f64..5.0, 8),
        alpha in -3.0f64..3.0,
    ) {
        let combined: Vec<f64> = x.iter().zip(&y).map(|(a, b)| alpha * a + b).collect();
        let cc = dct_ii(&combined);
        let cx = dct_ii(&x);
        let cy = dct_ii(&y);
        for k in 0..8 {
            prop_assert!((cc[k] - (alpha * cx[k] + cy[k])).abs() < 1e-11);
        }
    }
}

// ── Legendre Properties ──────────────────────────────────────────────

proptest! {
    /// Pbar_lm(pi - theta) = (-1)^(l+m) * Pbar_lm(theta) away from the
    /// poles, for all degrees of an order at once.
    #[test]
    fn legendre_parity(m in 0usize..6, theta in 0.05f64..1.5) {
        let lmax = m + 8;
        let north = legendre_array(lmax, m, theta);
        let south = legendre_array(lmax, m, PI - theta);
        for l in m..=lmax {
            let sign = if (l + m) % 2 == 0 { 1.0 } else { -1.0 };
            prop_assert!(
                (north[l - m] - sign * south[l - m]).abs() < 1e-11,
                "l={} m={}", l, m
            );
        }
    }

    /// Orthonormal values stay modest at low degree; the recurrence must
    /// not blow up anywhere on the open interval.
    #[test]
    fn legendre_values_are_bounded(m in 0usize..8, theta in 0.01f64..3.13) {
        let lmax = m + 12;
        let p = legendre_array(lmax, m, theta);
        prop_assert!(p.iter().all(|v| v.is_finite() && v.abs() < 10.0));
    }
}

// ── Fourier Synthesis Properties ─────────────────────────────────────

proptest! {
    /// A DC-only spectrum synthesizes to a constant line.
    #[test]
    fn fft_dc_spectrum_is_constant(n in 2usize..32, dc in -10.0f64..10.0) {
        let plan = RealInverseFft::new(n);
        let mut spectrum = vec![Complex64::default(); plan.spectrum_len()];
        spectrum[0] = Complex64::new(dc, 0.0);
        let mut scratch = vec![Complex64::default(); n];
        let mut out = vec![0.0; n];
        plan.synthesize(&spectrum, &mut scratch, &mut out);
        prop_assert!(out.iter().all(|v| (v - dc).abs() < 1e-10));
    }

    /// Synthesis is linear in the spectrum.
    #[test]
    fn fft_synthesis_is_linear(
        re in prop::collection::vec(-2.0f64..2.0, 9),
        alpha in -3.0f64..3.0,
    ) {
        let n = 16;
        let plan = RealInverseFft::new(n);
        let spectrum: Vec<Complex64> = re
            .iter()
            .enumerate()
            .map(|(k, &r)| Complex64::new(r, if k == 0 || 2 * k == n { 0.0 } else { 0.5 * r }))
            .collect();
        let scaled: Vec<Complex64> = spectrum.iter().map(|c| *c * alpha).collect();

        let mut scratch = vec![Complex64::default(); n];
        let mut out_a = vec![0.0; n];
        let mut out_b = vec![0.0; n];
        plan.synthesize(&spectrum, &mut scratch, &mut out_a);
        plan.synthesize(&scaled, &mut scratch, &mut out_b);
        for (a, b) in out_a.iter().zip(&out_b) {
            prop_assert!((alpha * a - b).abs() < 1e-9);
        }
    }
}
