// ─────────────────────────────────────────────────────────────────────
// SCPN Spherical Transform — Truncation Scheme
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Packed (degree, order) indexing for truncated spherical-harmonic bases.
//!
//! Coefficients are stored order-major: for each order index `im` in
//! `0..=mmax`, the degrees `l = im*mres ..= lmax` are contiguous. This is
//! the layout every transform call consumes.

/// Triangular truncation with an order-resolution stride.
///
/// The azimuthal order of slot `im` is `m = im * mres`; degrees run from
/// `m` to `lmax` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncation {
    pub lmax: usize,
    pub mmax: usize,
    pub mres: usize,
}

impl Truncation {
    pub fn new(lmax: usize, mmax: usize, mres: usize) -> Self {
        debug_assert!(mres >= 1);
        debug_assert!(mmax * mres <= lmax);
        Truncation { lmax, mmax, mres }
    }

    /// Azimuthal order of order-index `im`.
    #[inline]
    pub fn order(&self, im: usize) -> usize {
        im * self.mres
    }

    /// Total number of packed (l, m) coefficients.
    pub fn nlm(&self) -> usize {
        (0..=self.mmax)
            .map(|im| self.lmax - self.order(im) + 1)
            .sum()
    }

    /// Offset of the first coefficient (l = m) for order-index `im`.
    pub fn lm_start(&self, im: usize) -> usize {
        (0..im).map(|i| self.lmax - self.order(i) + 1).sum()
    }

    /// Packed index of coefficient (l, im). Requires `order(im) <= l <= lmax`.
    #[inline]
    pub fn lm_index(&self, l: usize, im: usize) -> usize {
        self.lm_start(im) + (l - self.order(im))
    }

    /// Number of degrees carried for order-index `im`.
    #[inline]
    pub fn degree_count(&self, im: usize) -> usize {
        self.lmax - self.order(im) + 1
    }

    /// Highest order-index active for a call truncated at degree `llim`.
    #[inline]
    pub fn order_limit(&self, llim: usize) -> usize {
        self.mmax.min(llim / self.mres)
    }
}
