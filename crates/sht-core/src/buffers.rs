// ─────────────────────────────────────────────────────────────────────
// SCPN Spherical Transform — Frequency Scratch
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Scratch buffer for the frequency-domain intermediate.
//!
//! The caller's real output arrays cannot alias a complex layout in safe
//! Rust, so the general synthesis path always stages through one zeroed
//! allocation backing both vector components; the axisymmetric path
//! skips it entirely. Release is by ownership on every exit path.

use ndarray::{s, Array3, ArrayViewMut2};
use num_complex::Complex64;

/// One contiguous allocation split into a (theta, phi) pair of
/// latitude-major frequency planes of shape `[nlat, nphi/2 + 1]`.
pub struct FrequencyScratch {
    data: Array3<Complex64>,
}

impl FrequencyScratch {
    /// Number of independent frequency slots for `nphi` real samples.
    #[inline]
    pub fn spectrum_len(nphi: usize) -> usize {
        nphi / 2 + 1
    }

    /// Zero-initialized scratch; orders never written stay zero, which is
    /// the padding the Fourier stage requires.
    pub fn allocate(nlat: usize, nphi: usize) -> Self {
        FrequencyScratch {
            data: Array3::zeros((2, nlat, Self::spectrum_len(nphi))),
        }
    }

    /// Mutable views of the theta-component and phi-component planes.
    pub fn split_mut(&mut self) -> (ArrayViewMut2<Complex64>, ArrayViewMut2<Complex64>) {
        self.data
            .multi_slice_mut((s![0, .., ..], s![1, .., ..]))
    }
}
