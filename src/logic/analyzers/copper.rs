use crate::logic::bands::{Band, BandTable};
use crate::models::StatusTier;

/// Copper (Cu) bands, mg/L. Thresholds are an order of magnitude below the
/// other parameters because copper is lethal to invertebrates at trace
/// levels.
pub fn bands() -> BandTable {
    BandTable::new(vec![
        Band::new(
            0.005,
            true,
            StatusTier::Excellent,
            "background",
            "Up to 0.005 mg/L is ordinary background from plumbing and is \
             below effect levels even for shrimp and snails.",
        ),
        Band::new(
            0.01,
            true,
            StatusTier::Warning,
            "elevated",
            "0.005-0.01 mg/L is already risky for invertebrates; copper \
             accumulates in tissue rather than clearing.",
        )
        .with_recommendations(&[
            "Filter over fresh activated carbon",
            "Find the source: copper pipes after stagnation, algicides, or fish medication",
        ]),
        Band::new(
            f64::INFINITY,
            false,
            StatusTier::Danger,
            "toxic",
            "Above 0.01 mg/L copper kills invertebrates outright and damages \
             fish gills and liver with continued exposure.",
        )
        .with_recommendations(&[
            "Move invertebrates to clean water immediately",
            "Large water change with copper-free, dechlorinated water",
            "Run activated carbon or a copper-specific resin",
            "Flush copper plumbing before collecting water for changes",
        ]),
    ])
    .expect("built-in copper bands are ordered")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusTier;

    #[test]
    fn boundary_pinning() {
        let bands = bands();
        assert_eq!(bands.classify(0.0).tier, StatusTier::Excellent);
        assert_eq!(bands.classify(0.005).tier, StatusTier::Excellent);
        assert_eq!(bands.classify(0.006).tier, StatusTier::Warning);
        assert_eq!(bands.classify(0.01).tier, StatusTier::Warning);
        assert_eq!(bands.classify(0.011).tier, StatusTier::Danger);
    }
}
