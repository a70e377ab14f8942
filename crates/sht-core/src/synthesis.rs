// ─────────────────────────────────────────────────────────────────────
// SCPN Spherical Transform — Vector Synthesis
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Spheroidal/toroidal synthesis onto the spatial grid.
//!
//! The tangential components at one point are
//!   V_theta = dS/dtheta + (i m / sin theta) T
//!   V_phi   = (i m / sin theta) S - dT/dtheta
//! summed over degrees and orders. Per order, the degree sum runs two
//! degrees per step so the even/odd parity parts stay separate; the
//! symmetry unpacker then fills both hemispheres from one summed half.
//! Orders routed through the cosine acceleration produce a full-range
//! profile directly and take the reciprocal-sine correction instead.

use ndarray::{Array1, Array2, ArrayViewMut2};
use num_complex::Complex64;
use sht_math::dct::{dct_iii, dct_iii_complex};
use sht_types::error::{ShtError, ShtResult};

use crate::buffers::FrequencyScratch;
use crate::plan::{LegendreMethod, SynthesisPlan};
use crate::symmetry::{unpack, unpack_re};

#[inline]
fn mul_i(z: Complex64) -> Complex64 {
    Complex64::new(-z.im, z.re)
}

fn check_grid_shape(
    what: &'static str,
    shape: &[usize],
    nlat: usize,
    nphi: usize,
) -> ShtResult<()> {
    if shape != [nlat, nphi] {
        return Err(ShtError::Shape {
            what,
            expected: format!("[{nlat}, {nphi}]"),
            got: format!("{shape:?}"),
        });
    }
    Ok(())
}

impl SynthesisPlan {
    /// General vector synthesis: populate `vt`/`vp` (latitude-major,
    /// `[nlat, nphi]`) from spheroidal and optional toroidal coefficients
    /// truncated at degree `llim`.
    pub fn vector_synthesis(
        &self,
        slm: &[Complex64],
        tlm: Option<&[Complex64]>,
        llim: usize,
        vt: &mut Array2<f64>,
        vp: &mut Array2<f64>,
    ) -> ShtResult<()> {
        self.check_call(slm, tlm, llim)?;
        let nlat = self.params.nlat;
        let nphi = self.params.nphi;
        check_grid_shape("theta component", vt.shape(), nlat, nphi)?;
        check_grid_shape("phi component", vp.shape(), nlat, nphi)?;

        // Scratch backs both components; dropped on every exit path.
        let mut scratch = FrequencyScratch::allocate(nlat, nphi);
        let (mut ft, mut fp) = scratch.split_mut();

        // Orders that fit neither the truncation nor the longitude grid
        // are zero-padded, never synthesized.
        let imlim = self.trunc.order_limit(llim).min(nphi / 2);
        let dct_lim = match self.method {
            LegendreMethod::Direct => None,
            LegendreMethod::CosineAccelerated { max_order_index } => {
                Some(max_order_index.min(imlim))
            }
        };

        let mut m0t = vec![0.0f64; nlat];
        let mut m0p = vec![0.0f64; nlat];
        let mut m0coef = vec![0.0f64; 2 * nlat];
        let mut coef = vec![Complex64::default(); 2 * nlat];
        let mut prof = vec![Complex64::default(); 2 * nlat];

        for im in 0..=imlim {
            let accelerated = dct_lim.is_some_and(|d| im <= d);
            if im == 0 {
                self.m0_profiles(slm, tlm, llim, accelerated, &mut m0coef, &mut m0t, &mut m0p);
                for k in 0..nlat {
                    ft[[k, 0]] = Complex64::new(m0t[k], 0.0);
                    fp[[k, 0]] = Complex64::new(m0p[k], 0.0);
                }
            } else if accelerated {
                self.order_profile_dct(im, slm, tlm, llim, &mut coef, &mut prof);
                let (pt, pp) = prof.split_at(nlat);
                for k in 0..nlat {
                    ft[[k, im]] = pt[k];
                    fp[[k, im]] = pp[k];
                }
            } else {
                self.order_direct(im, slm, tlm, llim, &mut ft, &mut fp);
            }
        }
        // Orders above imlim stay zero: the scratch is already the dense,
        // zero-padded frequency array the Fourier stage assumes.

        let mut line = vec![Complex64::default(); nphi];
        for k in 0..nlat {
            let row = ft.row(k);
            let spec = row.to_slice().expect("frequency row must be contiguous");
            let mut out = vt.row_mut(k);
            let out = out.as_slice_mut().expect("output row must be contiguous");
            self.fft_phi.synthesize(spec, &mut line, out);

            let row = fp.row(k);
            let spec = row.to_slice().expect("frequency row must be contiguous");
            let mut out = vp.row_mut(k);
            let out = out.as_slice_mut().expect("output row must be contiguous");
            self.fft_phi.synthesize(spec, &mut line, out);
        }
        Ok(())
    }

    /// Axisymmetric specialization: order 0 only, latitude profiles as
    /// final output, no Fourier step and no frequency scratch.
    pub fn vector_synthesis_axisym(
        &self,
        slm: &[Complex64],
        tlm: Option<&[Complex64]>,
        llim: usize,
        vt: &mut Array1<f64>,
        vp: &mut Array1<f64>,
    ) -> ShtResult<()> {
        self.check_call(slm, tlm, llim)?;
        let nlat = self.params.nlat;
        if vt.len() != nlat || vp.len() != nlat {
            return Err(ShtError::Shape {
                what: "axisymmetric output",
                expected: nlat.to_string(),
                got: format!("[{}, {}]", vt.len(), vp.len()),
            });
        }

        let accelerated = matches!(self.method, LegendreMethod::CosineAccelerated { .. });
        let mut coef = vec![0.0f64; if accelerated { 2 * nlat } else { 0 }];
        let pt = vt.as_slice_mut().expect("output must be contiguous");
        let pp = vp.as_slice_mut().expect("output must be contiguous");
        self.m0_profiles(slm, tlm, llim, accelerated, &mut coef, pt, pp);
        Ok(())
    }

    /// Order-0 latitude profiles for both components. Only the real parts
    /// of the coefficients and only theta-derivative weights contribute.
    /// `coef` is caller-owned scratch of length `2 * nlat`, used by the
    /// accelerated branch only.
    fn m0_profiles(
        &self,
        slm: &[Complex64],
        tlm: Option<&[Complex64]>,
        llim: usize,
        accelerated: bool,
        coef: &mut [f64],
        pt: &mut [f64],
        pp: &mut [f64],
    ) {
        let nlat = self.params.nlat;
        pt.fill(0.0);
        pp.fill(0.0);
        if llim == 0 {
            return;
        }

        if accelerated {
            let table = &self.tables.cosine[0];
            let (coef_t, coef_p) = coef.split_at_mut(nlat);
            coef_t.fill(0.0);
            coef_p.fill(0.0);
            let nrows = (llim + 2).min(nlat);
            for k in 0..nrows {
                let row = table.row(k);
                let mut at = 0.0;
                let mut ap = 0.0;
                for l in 1.max(k.saturating_sub(1))..=llim {
                    at += slm[l].re * row[l].dt;
                    if let Some(t) = tlm {
                        ap -= t[l].re * row[l].dt;
                    }
                }
                coef_t[k] = at;
                coef_p[k] = ap;
            }
            dct_iii(coef_t, pt);
            for (v, r) in pt.iter_mut().zip(&self.tables.st_1) {
                *v *= r;
            }
            if tlm.is_some() {
                dct_iii(coef_p, pp);
                for (v, r) in pp.iter_mut().zip(&self.tables.st_1) {
                    *v *= r;
                }
            }
            return;
        }

        let table = &self.tables.direct[0];
        for k in self.tables.tm[0]..nlat / 2 {
            let row = table.row(k);
            let (mut te, mut to) = (0.0f64, 0.0f64);
            let (mut pe, mut po) = (0.0f64, 0.0f64);
            let mut l = 1usize;
            while l + 1 <= llim {
                te += slm[l].re * row[l].dt;
                to += slm[l + 1].re * row[l + 1].dt;
                if let Some(t) = tlm {
                    pe -= t[l].re * row[l].dt;
                    po -= t[l + 1].re * row[l + 1].dt;
                }
                l += 2;
            }
            if l == llim {
                // Odd leftover degree: one extra weighted term.
                te += slm[l].re * row[l].dt;
                if let Some(t) = tlm {
                    pe -= t[l].re * row[l].dt;
                }
            }
            let (n, s) = unpack_re(te, to);
            pt[k] = n;
            pt[nlat - 1 - k] = s;
            if tlm.is_some() {
                let (n, s) = unpack_re(pe, po);
                pp[k] = n;
                pp[nlat - 1 - k] = s;
            }
        }
    }

    /// Direct summation for one order m > 0, writing north and south
    /// frequency rows of both components.
    fn order_direct(
        &self,
        im: usize,
        slm: &[Complex64],
        tlm: Option<&[Complex64]>,
        llim: usize,
        ft: &mut ArrayViewMut2<Complex64>,
        fp: &mut ArrayViewMut2<Complex64>,
    ) {
        let nlat = self.params.nlat;
        let m = self.trunc.order(im);
        let base = self.trunc.lm_start(im);
        let table = &self.tables.direct[im];
        let zero = Complex64::default();

        // Latitudes below the first significant index stay zero.
        for k in self.tables.tm[im]..nlat / 2 {
            let row = table.row(k);
            // Partial sums split by parity of l - m: S*dt and T*dp feed
            // V_theta, S*dp and T*dt feed V_phi.
            let (mut ste, mut sto) = (zero, zero);
            let (mut tpe, mut tpo) = (zero, zero);
            let (mut spe, mut spo) = (zero, zero);
            let (mut tte, mut tto) = (zero, zero);

            let mut l = m;
            while l + 1 <= llim {
                let i = l - m;
                let w0 = row[i];
                let w1 = row[i + 1];
                let s0 = slm[base + i];
                let s1 = slm[base + i + 1];
                sto += s0 * w0.dt;
                spe += s0 * w0.dp;
                ste += s1 * w1.dt;
                spo += s1 * w1.dp;
                if let Some(t) = tlm {
                    let t0 = t[base + i];
                    let t1 = t[base + i + 1];
                    tto += t0 * w0.dt;
                    tpe += t0 * w0.dp;
                    tte += t1 * w1.dt;
                    tpo += t1 * w1.dp;
                }
                l += 2;
            }
            if l == llim {
                let i = l - m;
                let w0 = row[i];
                let s0 = slm[base + i];
                sto += s0 * w0.dt;
                spe += s0 * w0.dp;
                if let Some(t) = tlm {
                    let t0 = t[base + i];
                    tto += t0 * w0.dt;
                    tpe += t0 * w0.dp;
                }
            }

            let (n, s) = unpack(ste + mul_i(tpe), sto + mul_i(tpo));
            ft[[k, im]] = n;
            ft[[nlat - 1 - k, im]] = s;
            let (n, s) = unpack(mul_i(spe) - tte, mul_i(spo) - tto);
            fp[[k, im]] = n;
            fp[[nlat - 1 - k, im]] = s;
        }
    }

    /// Cosine-accelerated profiles for one order m > 0: accumulate the
    /// degree-indexed weighted products into DCT rows, evaluate through
    /// the opaque cosine transform, then apply the parity-selected
    /// reciprocal-sine correction.
    fn order_profile_dct(
        &self,
        im: usize,
        slm: &[Complex64],
        tlm: Option<&[Complex64]>,
        llim: usize,
        coef: &mut [Complex64],
        prof: &mut [Complex64],
    ) {
        let nlat = self.params.nlat;
        let m = self.trunc.order(im);
        let base = self.trunc.lm_start(im);
        let table = &self.tables.cosine[im];

        let (coef_t, coef_p) = coef.split_at_mut(nlat);
        coef_t.fill(Complex64::default());
        coef_p.fill(Complex64::default());

        // Rows above llim + 1 are exact zeros of the cosine expansion;
        // leaving them zeroed keeps the profile length uniform for the
        // Fourier stage.
        let nrows = (llim + 2).min(nlat);
        for k in 0..nrows {
            let row = table.row(k);
            let mut at = Complex64::default();
            let mut ap = Complex64::default();
            // Degrees below k - 1 cannot reach cosine row k.
            for l in m.max(k.saturating_sub(1))..=llim {
                let i = l - m;
                let w = row[i];
                let s = slm[base + i];
                at += s * w.dt;
                ap += mul_i(s) * w.dp;
                if let Some(t) = tlm {
                    let tc = t[base + i];
                    at += mul_i(tc) * w.dp;
                    ap -= tc * w.dt;
                }
            }
            coef_t[k] = at;
            coef_p[k] = ap;
        }

        let (prof_t, prof_p) = prof.split_at_mut(nlat);
        dct_iii_complex(coef_t, prof_t);
        dct_iii_complex(coef_p, prof_p);

        if m % 2 == 0 {
            // Even orders were sine-weighted when the table was built.
            for k in 0..nlat {
                let r = self.tables.st_1[k];
                prof_t[k] = prof_t[k] * r;
                prof_p[k] = prof_p[k] * r;
            }
        }
    }
}
