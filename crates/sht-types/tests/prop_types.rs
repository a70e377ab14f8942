// ─────────────────────────────────────────────────────────────────────
// SCPN Spherical Transform — Property-Based Tests (proptest) for sht-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for sht-types using proptest.
//!
//! Covers: packed-index bijectivity, truncation arithmetic, parameter
//! validation and serde roundtrips.

use proptest::prelude::*;
use sht_types::params::SphParams;
use sht_types::truncation::Truncation;

fn truncation_strategy() -> impl Strategy<Value = Truncation> {
    (1usize..=20, 1usize..=3).prop_flat_map(|(lmax, mres)| {
        (Just(lmax), 0..=lmax / mres, Just(mres))
            .prop_map(|(lmax, mmax, mres)| Truncation::new(lmax, mmax, mres))
    })
}

proptest! {
    /// Walking every (l, im) slot in order-major order visits each packed
    /// index exactly once, ending at nlm().
    #[test]
    fn packed_indices_enumerate_without_gaps(t in truncation_strategy()) {
        let mut next = 0usize;
        for im in 0..=t.mmax {
            prop_assert_eq!(t.lm_start(im), next);
            for l in t.order(im)..=t.lmax {
                prop_assert_eq!(t.lm_index(l, im), next);
                next += 1;
            }
        }
        prop_assert_eq!(next, t.nlm());
    }

    /// degree_count always matches the span lm_index covers.
    #[test]
    fn degree_count_matches_span(t in truncation_strategy()) {
        for im in 0..=t.mmax {
            let first = t.lm_index(t.order(im), im);
            let last = t.lm_index(t.lmax, im);
            prop_assert_eq!(last - first + 1, t.degree_count(im));
        }
    }

    /// order_limit never exceeds mmax and never admits an order above the
    /// requested degree truncation.
    #[test]
    fn order_limit_is_conservative(t in truncation_strategy(), llim_frac in 0.0f64..=1.0) {
        let llim = ((t.lmax as f64) * llim_frac) as usize;
        let im = t.order_limit(llim);
        prop_assert!(im <= t.mmax);
        prop_assert!(t.order(im) <= llim || im == 0);
    }

    /// Valid parameters survive a JSON roundtrip unchanged.
    #[test]
    fn params_json_roundtrip(
        lmax in 2usize..40,
        nlat_half in 2usize..32,
        dct in prop::option::of(0usize..4),
    ) {
        let p = SphParams {
            lmax,
            mmax: (lmax / 2).max(4).min(lmax),
            mres: 1,
            nlat: 2 * nlat_half,
            nphi: 4 * lmax,
            dct_orders: dct.map(|d| d.min(lmax / 2)),
        };
        prop_assume!(p.validate().is_ok());

        let json = serde_json::to_string(&p).unwrap();
        let back: SphParams = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(p.lmax, back.lmax);
        prop_assert_eq!(p.mmax, back.mmax);
        prop_assert_eq!(p.mres, back.mres);
        prop_assert_eq!(p.nlat, back.nlat);
        prop_assert_eq!(p.nphi, back.nphi);
        prop_assert_eq!(p.dct_orders, back.dct_orders);
    }

    /// Odd latitude counts are always rejected.
    #[test]
    fn odd_nlat_always_rejected(lmax in 2usize..30, nlat_half in 1usize..20) {
        let p = SphParams {
            lmax,
            mmax: 0,
            mres: 1,
            nlat: 2 * nlat_half + 1,
            nphi: 1,
            dct_orders: None,
        };
        prop_assert!(p.validate().is_err());
    }
}
