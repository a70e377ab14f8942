// ─────────────────────────────────────────────────────────────────────
// SCPN Spherical Transform — Synthesis Plan
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Immutable transform configuration: grid, truncation, weight tables and
//! the cached longitude FFT plan.
//!
//! One plan is built per grid/truncation pair and shared read-only across
//! calls and threads; every transform call takes `&self` and keeps its
//! mutable state in per-call buffers.

use num_complex::Complex64;
use sht_math::fft::RealInverseFft;
use sht_types::error::{ShtError, ShtResult};
use sht_types::params::SphParams;
use sht_types::truncation::Truncation;

use crate::tables::WeightTables;

/// Legendre summation strategy, fixed at configuration time.
///
/// The accelerated variant routes orders up to `max_order_index` through
/// the cosine-transform evaluator and falls back to direct summation
/// above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendreMethod {
    Direct,
    CosineAccelerated { max_order_index: usize },
}

pub struct SynthesisPlan {
    pub(crate) params: SphParams,
    pub(crate) trunc: Truncation,
    pub(crate) tables: WeightTables,
    pub(crate) method: LegendreMethod,
    pub(crate) fft_phi: RealInverseFft,
}

impl SynthesisPlan {
    /// Validate parameters and precompute every table the transform calls
    /// will share.
    pub fn new(params: SphParams) -> ShtResult<Self> {
        params.validate()?;
        if params.dct_orders.is_some() {
            // The cosine representation carries polynomial degrees up to
            // lmax + 1 and needs a grid that resolves them.
            if params.nlat < params.lmax + 2 {
                return Err(ShtError::Config(format!(
                    "cosine acceleration needs nlat >= lmax + 2 (nlat {}, lmax {})",
                    params.nlat, params.lmax
                )));
            }
        }

        let trunc = params.truncation();
        let tables = WeightTables::build(&trunc, params.nlat, params.dct_orders);
        let method = match params.dct_orders {
            None => LegendreMethod::Direct,
            Some(d) => LegendreMethod::CosineAccelerated { max_order_index: d },
        };
        let fft_phi = RealInverseFft::new(params.nphi);

        Ok(SynthesisPlan {
            params,
            trunc,
            tables,
            method,
            fft_phi,
        })
    }

    pub fn params(&self) -> &SphParams {
        &self.params
    }

    pub fn truncation(&self) -> Truncation {
        self.trunc
    }

    pub fn method(&self) -> LegendreMethod {
        self.method
    }

    /// Length of the packed spectral coefficient arrays this plan consumes.
    pub fn nlm(&self) -> usize {
        self.trunc.nlm()
    }

    /// Cheap O(1) call contract; the structural grid invariants were
    /// checked at construction and are not re-validated per call.
    pub(crate) fn check_call(
        &self,
        slm: &[Complex64],
        tlm: Option<&[Complex64]>,
        llim: usize,
    ) -> ShtResult<()> {
        if llim > self.params.lmax {
            return Err(ShtError::Truncation {
                llim,
                lmax: self.params.lmax,
            });
        }
        let nlm = self.nlm();
        if slm.len() != nlm {
            return Err(ShtError::Shape {
                what: "spheroidal coefficients",
                expected: nlm.to_string(),
                got: slm.len().to_string(),
            });
        }
        if let Some(t) = tlm {
            if t.len() != nlm {
                return Err(ShtError::Shape {
                    what: "toroidal coefficients",
                    expected: nlm.to_string(),
                    got: t.len().to_string(),
                });
            }
        }
        Ok(())
    }
}
