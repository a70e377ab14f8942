// ─────────────────────────────────────────────────────────────────────
// SCPN Spherical Transform — Shared Types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
pub mod error;
pub mod params;
pub mod truncation;
