use crate::logic::bands::{Band, BandTable};
use crate::models::StatusTier;

/// Phosphate (PO4) bands, mg/L. Phosphate is not acutely toxic to fish, so
/// the scale tops out at `Warning`; the cost of excess is algae.
pub fn bands() -> BandTable {
    BandTable::new(vec![
        Band::new(
            0.25,
            true,
            StatusTier::Excellent,
            "low",
            "Up to 0.25 mg/L feeds plants without giving algae an edge.",
        ),
        Band::new(
            0.5,
            true,
            StatusTier::Good,
            "moderate",
            "0.25-0.5 mg/L is workable in a planted tank where plant uptake \
             keeps pace.",
        ),
        Band::new(
            1.0,
            true,
            StatusTier::Warning,
            "elevated",
            "0.5-1 mg/L reliably fuels green water and film algae in tanks \
             without heavy plant mass.",
        )
        .with_recommendations(&[
            "Increase water changes with low-phosphate source water",
            "Feed less and remove uneaten food; most phosphate arrives as food",
        ]),
        Band::new(
            f64::INFINITY,
            false,
            StatusTier::Warning,
            "very high",
            "Above 1 mg/L algae dominance is nearly certain; check the tap \
             water, some supplies carry phosphate from treatment plants.",
        )
        .with_recommendations(&[
            "Run a phosphate-adsorbing resin in the filter",
            "Test the tap water; if it carries phosphate, water changes alone cannot fix this",
            "Increase plant mass to compete with the algae",
        ]),
    ])
    .expect("built-in phosphate bands are ordered")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusTier;

    #[test]
    fn boundary_pinning() {
        let bands = bands();
        assert_eq!(bands.classify(0.0).tier, StatusTier::Excellent);
        assert_eq!(bands.classify(0.25).tier, StatusTier::Excellent);
        assert_eq!(bands.classify(0.3).tier, StatusTier::Good);
        assert_eq!(bands.classify(0.5).tier, StatusTier::Good);
        assert_eq!(bands.classify(1.0).tier, StatusTier::Warning);
        assert_eq!(bands.classify(2.0).tier, StatusTier::Warning);
    }

    #[test]
    fn adjacent_warning_bands_have_distinct_levels() {
        let bands = bands();
        assert_eq!(bands.classify(0.8).level, "elevated");
        assert_eq!(bands.classify(1.5).level, "very high");
    }
}
