//! Complex-to-real Fourier synthesis wrapper around rustfft.
//!
//! Convention matches FFTW's unnormalized backward c2r transform:
//! `out[j] = sum_k spectrum[k] * exp(+i*2*pi*j*k/n)` with the negative
//! frequencies supplied by Hermitian symmetry.

use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Cached inverse-FFT plan for one transform length.
///
/// Shared read-only across calls and threads; per-call state lives in the
/// scratch slice the caller supplies.
pub struct RealInverseFft {
    n: usize,
    fft: Arc<dyn Fft<f64>>,
}

impl RealInverseFft {
    pub fn new(n: usize) -> Self {
        let mut planner = FftPlanner::new();
        RealInverseFft {
            n,
            fft: planner.plan_fft_inverse(n),
        }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Number of independent frequency slots for a real signal of length n.
    pub fn spectrum_len(&self) -> usize {
        self.n / 2 + 1
    }

    /// Synthesize one real line from its non-negative frequency slots.
    ///
    /// `spectrum` has `spectrum_len()` entries, `scratch` and `out` have
    /// `len()` entries. Unnormalized, like FFTW.
    pub fn synthesize(&self, spectrum: &[Complex64], scratch: &mut [Complex64], out: &mut [f64]) {
        debug_assert_eq!(spectrum.len(), self.spectrum_len());
        debug_assert_eq!(scratch.len(), self.n);
        debug_assert_eq!(out.len(), self.n);

        if self.n == 1 {
            out[0] = spectrum[0].re;
            return;
        }

        scratch[0] = Complex64::new(spectrum[0].re, 0.0);
        for k in 1..(self.n + 1) / 2 {
            scratch[k] = spectrum[k];
            scratch[self.n - k] = spectrum[k].conj();
        }
        if self.n % 2 == 0 {
            // Nyquist slot must be real for a real output line.
            scratch[self.n / 2] = Complex64::new(spectrum[self.n / 2].re, 0.0);
        }

        self.fft.process(scratch);
        for (o, s) in out.iter_mut().zip(scratch.iter()) {
            *o = s.re;
        }
    }
}
