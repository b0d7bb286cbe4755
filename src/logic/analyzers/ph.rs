use crate::logic::bands::{Band, BandTable};
use crate::models::StatusTier;

/// pH bands. 6.5-8.0 is the community-tank optimum; 8.0 itself is still
/// optimal, 8.5 itself is still only alkaline (upper bounds inclusive on
/// the safer side).
pub fn bands() -> BandTable {
    BandTable::new(vec![
        Band::new(
            6.0,
            false,
            StatusTier::Danger,
            "critically acidic",
            "Below pH 6.0 gill epithelium is damaged directly and nitrifying \
             bacteria stall, so ammonia accumulates on top of the acid stress.",
        )
        .with_recommendations(&[
            "Raise pH gradually toward 6.5-7.5 with crushed coral or a carbonate buffer",
            "Check KH: exhausted carbonate buffering is the usual cause of a pH crash",
            "Do not change pH by more than 0.3 per day",
        ]),
        Band::new(
            6.5,
            false,
            StatusTier::Warning,
            "acidic",
            "pH 6.0-6.5 is tolerated by soft-water species but slows \
             nitrification and stresses most community fish.",
        )
        .with_recommendations(&[
            "Raise pH slowly toward the 6.5-7.5 range",
            "Monitor KH to keep buffering above 3 °dH",
        ]),
        Band::new(
            8.0,
            true,
            StatusTier::Excellent,
            "optimal",
            "pH 6.5-8.0 suits the vast majority of freshwater species and \
             keeps free ammonia mostly ionized.",
        ),
        Band::new(
            8.5,
            true,
            StatusTier::Warning,
            "alkaline",
            "pH 8.0-8.5 favors the toxic un-ionized ammonia form; fine for \
             hard-water biotopes, stressful for soft-water species.",
        )
        .with_recommendations(&[
            "Lower pH with peat filtration or driftwood tannins",
            "Check for calcareous rock or substrate dissolving into the water",
        ]),
        Band::new(
            f64::INFINITY,
            false,
            StatusTier::Danger,
            "critically alkaline",
            "Above pH 8.5 the un-ionized ammonia fraction rises steeply, so \
             even trace total ammonia becomes toxic.",
        )
        .with_recommendations(&[
            "Lower pH gradually; a fast swing is worse than a high steady value",
            "Check for calcareous decor or an overdosed buffer",
            "Keep total ammonia at zero until pH is back under 8.5",
        ]),
    ])
    .expect("built-in pH bands are ordered")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusTier;

    #[test]
    fn boundary_pinning() {
        let bands = bands();
        // Lower boundaries are exclusive toward the safer side.
        assert_eq!(bands.classify(5.99).tier, StatusTier::Danger);
        assert_eq!(bands.classify(6.0).tier, StatusTier::Warning);
        assert_eq!(bands.classify(6.49).tier, StatusTier::Warning);
        assert_eq!(bands.classify(6.5).tier, StatusTier::Excellent);
        // Upper boundaries are inclusive on the safer side.
        assert_eq!(bands.classify(8.0).tier, StatusTier::Excellent);
        assert_eq!(bands.classify(8.01).tier, StatusTier::Warning);
        assert_eq!(bands.classify(8.5).tier, StatusTier::Warning);
        assert_eq!(bands.classify(8.51).tier, StatusTier::Danger);
    }

    #[test]
    fn extreme_alkaline_level_label() {
        assert_eq!(bands().classify(8.6).level, "critically alkaline");
    }
}
