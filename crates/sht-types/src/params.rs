// ─────────────────────────────────────────────────────────────────────
// SCPN Spherical Transform — Params
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{ShtError, ShtResult};
use crate::truncation::Truncation;

/// Grid and truncation parameters for one transform configuration.
///
/// The colatitude grid is regular, `theta_k = pi*(k + 1/2)/nlat`, which is
/// what the cosine-transform representation of the Legendre tables
/// requires. Longitude slot `im` carries azimuthal order `im * mres`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SphParams {
    /// Maximum spherical-harmonic degree of the configuration.
    pub lmax: usize,
    /// Maximum order index; the highest order is `mmax * mres`.
    pub mmax: usize,
    /// Order-resolution stride (1 = every order).
    #[serde(default = "default_mres")]
    pub mres: usize,
    /// Number of latitude samples. Must be even.
    pub nlat: usize,
    /// Number of longitude samples (1 = axisymmetric grids).
    pub nphi: usize,
    /// Highest order index synthesized through the cosine-transform
    /// acceleration. Absent means direct summation for every order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dct_orders: Option<usize>,
}

fn default_mres() -> usize {
    1
}

impl SphParams {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> ShtResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&contents)?;
        params.validate()?;
        Ok(params)
    }

    /// Structural invariants checked once, at configuration time. The
    /// transform calls themselves assume these hold.
    pub fn validate(&self) -> ShtResult<()> {
        if self.mres == 0 {
            return Err(ShtError::Config("mres must be at least 1".into()));
        }
        if self.nlat == 0 || self.nlat % 2 != 0 {
            return Err(ShtError::Config(format!(
                "nlat must be even and nonzero, got {}",
                self.nlat
            )));
        }
        if self.nphi == 0 {
            return Err(ShtError::Config("nphi must be nonzero".into()));
        }
        if self.mmax * self.mres > self.lmax {
            return Err(ShtError::Config(format!(
                "highest order {} exceeds lmax {}",
                self.mmax * self.mres,
                self.lmax
            )));
        }
        if self.nphi > 1 && 2 * self.mmax >= self.nphi {
            return Err(ShtError::Config(format!(
                "nphi {} too small for mmax {} (aliasing)",
                self.nphi, self.mmax
            )));
        }
        if let Some(dct) = self.dct_orders {
            if dct > self.mmax {
                return Err(ShtError::Config(format!(
                    "dct_orders {} exceeds mmax {}",
                    dct, self.mmax
                )));
            }
        }
        Ok(())
    }

    pub fn truncation(&self) -> Truncation {
        Truncation::new(self.lmax, self.mmax, self.mres)
    }
}
