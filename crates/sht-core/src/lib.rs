// ─────────────────────────────────────────────────────────────────────
// SCPN Spherical Transform — Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Vector-field spherical-harmonic synthesis.
//!
//! Spheroidal/toroidal spectral coefficients in, tangential vector
//! components on the (latitude, longitude) grid out. Direct Legendre
//! summation with equatorial-symmetry halving and polar sparsity, plus an
//! optional cosine-transform acceleration for low azimuthal orders.

pub mod buffers;
pub mod plan;
pub mod symmetry;
pub mod synthesis;
pub mod tables;

pub use plan::{LegendreMethod, SynthesisPlan};
pub use sht_types::error::{ShtError, ShtResult};
pub use sht_types::params::SphParams;
