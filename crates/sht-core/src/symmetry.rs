// ─────────────────────────────────────────────────────────────────────
// SCPN Spherical Transform — Symmetry Unpacker
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Even/odd parity unpacking across the equator.
//!
//! The direct Legendre sums are accumulated separately for the two parity
//! classes of `l - m`; the northern sample is their sum and the mirrored
//! southern sample their difference, so only half the latitudes are ever
//! summed over degrees.

use num_complex::Complex64;

/// (north, south) pair from even/odd partial sums.
#[inline]
pub fn unpack(even: Complex64, odd: Complex64) -> (Complex64, Complex64) {
    (even + odd, even - odd)
}

/// Real-valued variant for the m = 0 profiles.
#[inline]
pub fn unpack_re(even: f64, odd: f64) -> (f64, f64) {
    (even + odd, even - odd)
}
