// ─────────────────────────────────────────────────────────────────────
// SCPN Spherical Transform — Weight Tables
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Precomputed Legendre-derivative weight tables.
//!
//! Built once per configuration and shared read-only by every transform
//! call. Two flavors per azimuthal order: a direct-summation table sampled
//! on the northern hemisphere, and a cosine-domain table holding DCT-II
//! projections of the (sine-weighted) direct weights.

use sht_math::dct::dct_ii;
use sht_math::legendre::legendre_deriv_array;
use sht_types::truncation::Truncation;
use std::f64::consts::PI;

/// Entries below this magnitude count as negligible when locating the
/// first significant latitude of an order (polar optimization).
const POLAR_CUTOFF: f64 = 1e-240;

/// One weight pair: theta-derivative term and the order/sine-convolved
/// term `m * Pbar_lm / sin(theta)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DtDp {
    pub dt: f64,
    pub dp: f64,
}

/// Direct-summation weights for one azimuthal order.
///
/// Rows are northern-hemisphere latitudes `k = 0..nlat/2`, columns degrees
/// `l - m`; the southern hemisphere follows by parity.
#[derive(Debug, Clone)]
pub struct DirectTable {
    nl: usize,
    entries: Vec<DtDp>,
}

impl DirectTable {
    #[inline]
    pub fn row(&self, k: usize) -> &[DtDp] {
        &self.entries[k * self.nl..(k + 1) * self.nl]
    }
}

/// Cosine-domain weights for one azimuthal order.
///
/// Rows are DCT coefficient indices `k = 0..nlat`, columns degrees
/// `l - m`. Row `k` of column `l` vanishes for `k > l + 1` (the weights
/// are trigonometric polynomials), which is what lets the synthesis stop
/// its row loop at the active truncation.
#[derive(Debug, Clone)]
pub struct CosineTable {
    nl: usize,
    entries: Vec<DtDp>,
}

impl CosineTable {
    #[inline]
    pub fn row(&self, k: usize) -> &[DtDp] {
        &self.entries[k * self.nl..(k + 1) * self.nl]
    }
}

/// All tables owned by one configuration.
#[derive(Debug, Clone)]
pub struct WeightTables {
    /// Direct tables, one per order index.
    pub direct: Vec<DirectTable>,
    /// Cosine tables for the accelerated orders (may be empty).
    pub cosine: Vec<CosineTable>,
    /// First significant northern latitude per order index; samples below
    /// it stay zero.
    pub tm: Vec<usize>,
    /// Stabilized reciprocal of sin(theta_k), full latitude range.
    pub st_1: Vec<f64>,
    /// Colatitude samples `theta_k = pi*(k + 1/2)/nlat`.
    pub theta: Vec<f64>,
}

impl WeightTables {
    pub fn build(trunc: &Truncation, nlat: usize, dct_orders: Option<usize>) -> Self {
        let theta: Vec<f64> = (0..nlat)
            .map(|k| PI * (k as f64 + 0.5) / nlat as f64)
            .collect();
        let st_1: Vec<f64> = theta.iter().map(|t| 1.0 / t.sin()).collect();

        let mut direct = Vec::with_capacity(trunc.mmax + 1);
        let mut tm = Vec::with_capacity(trunc.mmax + 1);
        for im in 0..=trunc.mmax {
            let table = build_direct(trunc, im, &theta, &st_1, nlat);
            tm.push(first_significant_row(&table, nlat / 2));
            direct.push(table);
        }

        let mut cosine = Vec::new();
        if let Some(max_im) = dct_orders {
            for im in 0..=max_im {
                cosine.push(build_cosine(trunc, im, &theta, nlat));
            }
        }

        WeightTables {
            direct,
            cosine,
            tm,
            st_1,
            theta,
        }
    }
}

fn build_direct(
    trunc: &Truncation,
    im: usize,
    theta: &[f64],
    st_1: &[f64],
    nlat: usize,
) -> DirectTable {
    let m = trunc.order(im);
    let nl = trunc.degree_count(im);
    let mut entries = vec![DtDp::default(); (nlat / 2) * nl];

    for k in 0..nlat / 2 {
        let (plm, dplm) = legendre_deriv_array(trunc.lmax, m, theta[k]);
        let row = &mut entries[k * nl..(k + 1) * nl];
        for i in 0..nl {
            row[i] = DtDp {
                dt: dplm[i],
                dp: m as f64 * plm[i] * st_1[k],
            };
        }
    }
    DirectTable { nl, entries }
}

/// Project the sampled weights of each degree onto the cosine basis.
///
/// Even orders (m = 0 included) are weighted by sin(theta) first, so the
/// sampled function is an exact cosine polynomial and the synthesis must
/// divide the evaluated profile by sin(theta) afterwards. Odd orders are
/// cosine polynomials as-is and need no correction.
fn build_cosine(trunc: &Truncation, im: usize, theta: &[f64], nlat: usize) -> CosineTable {
    let m = trunc.order(im);
    let nl = trunc.degree_count(im);
    let sine_weighted = m % 2 == 0;

    // Full-range samples, one column per degree.
    let mut samples_t = vec![vec![0.0f64; nlat]; nl];
    let mut samples_p = vec![vec![0.0f64; nlat]; nl];
    for (j, &th) in theta.iter().enumerate() {
        let s = th.sin();
        let (plm, dplm) = legendre_deriv_array(trunc.lmax, m, th);
        for i in 0..nl {
            let dt = dplm[i];
            let dp = m as f64 * plm[i] / s;
            if sine_weighted {
                samples_t[i][j] = s * dt;
                samples_p[i][j] = s * dp;
            } else {
                samples_t[i][j] = dt;
                samples_p[i][j] = dp;
            }
        }
    }

    let mut entries = vec![DtDp::default(); nlat * nl];
    for i in 0..nl {
        let ct = dct_ii(&samples_t[i]);
        let cp = dct_ii(&samples_p[i]);
        for k in 0..nlat {
            entries[k * nl + i] = DtDp {
                dt: ct[k],
                dp: cp[k],
            };
        }
    }
    CosineTable { nl, entries }
}

fn first_significant_row(table: &DirectTable, nrows: usize) -> usize {
    for k in 0..nrows {
        if table
            .row(k)
            .iter()
            .any(|w| w.dt.abs() > POLAR_CUTOFF || w.dp.abs() > POLAR_CUTOFF)
        {
            return k;
        }
    }
    nrows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_table_shapes() {
        let trunc = Truncation::new(7, 5, 1);
        let tables = WeightTables::build(&trunc, 16, None);
        assert_eq!(tables.direct.len(), 6);
        assert_eq!(tables.cosine.len(), 0);
        assert_eq!(tables.tm.len(), 6);
        assert_eq!(tables.theta.len(), 16);
        assert_eq!(tables.direct[2].row(0).len(), 6); // l = 2..=7
    }

    #[test]
    fn test_m0_has_no_order_term() {
        let trunc = Truncation::new(6, 4, 1);
        let tables = WeightTables::build(&trunc, 12, None);
        for k in 0..6 {
            for w in tables.direct[0].row(k) {
                assert_eq!(w.dp, 0.0);
            }
        }
    }

    #[test]
    fn test_tm_is_zero_at_moderate_order() {
        let trunc = Truncation::new(10, 6, 1);
        let tables = WeightTables::build(&trunc, 24, None);
        assert_eq!(tables.tm[0], 0);
        assert_eq!(tables.tm[1], 0);
    }

    #[test]
    fn test_tm_grows_for_high_orders_on_fine_grids() {
        // At m = 200, nlat = 512 the sin^m factor drops below the cutoff
        // at the first few samples (sin(pi/1024)^200 ~ 1e-502), so the
        // first significant latitude moves off the pole.
        let trunc = Truncation::new(200, 200, 1);
        let tables = WeightTables::build(&trunc, 512, None);
        assert!(tables.tm[200] > 0);
        assert!(tables.tm[200] < 128);
    }

    #[test]
    fn test_cosine_rows_vanish_beyond_degree() {
        // Column for degree l must have zero rows for k > l + 1.
        let trunc = Truncation::new(6, 3, 1);
        let nlat = 16;
        let tables = WeightTables::build(&trunc, nlat, Some(3));
        for im in 0..=3usize {
            let m = im;
            let table = &tables.cosine[im];
            for l in m..=6 {
                for k in (l + 2)..nlat {
                    let w = table.row(k)[l - m];
                    assert!(
                        w.dt.abs() < 1e-12 && w.dp.abs() < 1e-12,
                        "m={m} l={l} k={k}: dt={} dp={}",
                        w.dt,
                        w.dp
                    );
                }
            }
        }
    }

    #[test]
    fn test_reciprocal_sine_is_finite() {
        let trunc = Truncation::new(4, 2, 1);
        let tables = WeightTables::build(&trunc, 64, None);
        assert!(tables.st_1.iter().all(|v| v.is_finite() && *v >= 1.0));
    }
}
