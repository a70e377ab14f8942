// ─────────────────────────────────────────────────────────────────────
// SCPN Spherical Transform — Associated Legendre Functions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Orthonormal associated Legendre functions and their colatitude
//! derivatives, by stable three-term recurrence.
//!
//! Normalization is the full spherical-harmonic one (integral of
//! |Ylm|^2 over the sphere = 1), Condon-Shortley phase included:
//!   Pbar_00 = 1/sqrt(4 pi)
//!   Pbar_mm = -sqrt((2m+1)/(2m)) * sin(theta) * Pbar_{m-1,m-1}
//!   Pbar_{l,m} = a_l * x * Pbar_{l-1,m} - b_l * Pbar_{l-2,m}
//! with x = cos(theta),
//!   a_l = sqrt((4 l^2 - 1) / (l^2 - m^2))
//!   b_l = a_l * sqrt(((l-1)^2 - m^2) / (4 (l-1)^2 - 1)).
//!
//! The theta derivative follows from
//!   sin(theta) * dPbar_lm/dtheta = l * x * Pbar_lm - e_l * Pbar_{l-1,m}
//!   e_l = sqrt((l^2 - m^2) * (2l+1) / (2l-1)).
//!
//! Values underflow to zero near the poles for large m (sin^m factor);
//! callers use that sparsity, they do not need it "fixed" here.

const Y00: f64 = 0.282_094_791_773_878_14; // 1/sqrt(4 pi)

/// Pbar_lm(cos theta) for l = m..=lmax, indexed by l - m.
pub fn legendre_array(lmax: usize, m: usize, theta: f64) -> Vec<f64> {
    let x = theta.cos();
    let s = theta.sin();
    let nl = lmax - m + 1;
    let mut plm = vec![0.0; nl];

    // Seed Pbar_mm by the diagonal recurrence.
    let mut pmm = Y00;
    for k in 1..=m {
        pmm *= -s * ((2 * k + 1) as f64 / (2 * k) as f64).sqrt();
    }
    plm[0] = pmm;
    if lmax == m {
        return plm;
    }
    plm[1] = ((2 * m + 3) as f64).sqrt() * x * pmm;

    for l in (m + 2)..=lmax {
        let fl = l as f64;
        let fm = m as f64;
        let a = ((4.0 * fl * fl - 1.0) / (fl * fl - fm * fm)).sqrt();
        let b = a * (((fl - 1.0) * (fl - 1.0) - fm * fm)
            / (4.0 * (fl - 1.0) * (fl - 1.0) - 1.0))
            .sqrt();
        plm[l - m] = a * x * plm[l - m - 1] - b * plm[l - m - 2];
    }
    plm
}

/// Pbar_lm and dPbar_lm/dtheta for l = m..=lmax, indexed by l - m.
///
/// Valid away from the poles (sin(theta) != 0); the grids used by the
/// transform never place a sample exactly on a pole.
pub fn legendre_deriv_array(lmax: usize, m: usize, theta: f64) -> (Vec<f64>, Vec<f64>) {
    let x = theta.cos();
    let s = theta.sin();
    let plm = legendre_array(lmax, m, theta);
    let nl = plm.len();
    let mut dplm = vec![0.0; nl];

    for l in m..=lmax {
        let fl = l as f64;
        let fm = m as f64;
        let below = if l == m { 0.0 } else { plm[l - m - 1] };
        let e = if l == m {
            0.0
        } else {
            ((fl * fl - fm * fm) * (2.0 * fl + 1.0) / (2.0 * fl - 1.0)).sqrt()
        };
        dplm[l - m] = (fl * x * plm[l - m] - e * below) / s;
    }
    (plm, dplm)
}
