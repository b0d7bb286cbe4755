use crate::logic::bands::{Band, BandTable};
use crate::models::StatusTier;

/// Nitrite (NO2) bands, mg/L. Same threshold shape as ammonia: 0.1 and
/// 0.25 are the last safe and last tolerable readings respectively.
pub fn bands() -> BandTable {
    BandTable::new(vec![
        Band::new(
            0.1,
            true,
            StatusTier::Excellent,
            "safe",
            "Nitrite at or below 0.1 mg/L is effectively zero on hobbyist \
             kits; the second-stage nitrifiers are keeping up.",
        ),
        Band::new(
            0.25,
            true,
            StatusTier::Warning,
            "elevated",
            "0.1-0.25 mg/L nitrite oxidizes hemoglobin to methemoglobin, \
             cutting the blood's oxygen transport.",
        )
        .with_recommendations(&[
            "Water change of 30-40%",
            "Increase aeration: nitrite-poisoned fish suffocate at normal oxygen levels",
            "Add 0.5-1 g/L aquarium salt; chloride blocks nitrite uptake at the gills",
        ]),
        Band::new(
            f64::INFINITY,
            false,
            StatusTier::Danger,
            "critical",
            "Above 0.25 mg/L methemoglobinemia (brown blood disease) \
             progresses quickly; fish gasp at the surface despite normal \
             oxygen readings.",
        )
        .with_recommendations(&[
            "Water change of 50% now, repeat within 12 hours if still above 0.25 mg/L",
            "Maximize aeration",
            "Add 1 g/L aquarium salt to block nitrite uptake",
            "Stop feeding until nitrite falls below 0.1 mg/L",
        ]),
    ])
    .expect("built-in nitrite bands are ordered")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusTier;

    #[test]
    fn boundary_pinning() {
        let bands = bands();
        assert_eq!(bands.classify(0.0).tier, StatusTier::Excellent);
        assert_eq!(bands.classify(0.1).tier, StatusTier::Excellent);
        assert_eq!(bands.classify(0.15).tier, StatusTier::Warning);
        assert_eq!(bands.classify(0.25).tier, StatusTier::Warning);
        assert_eq!(bands.classify(0.26).tier, StatusTier::Danger);
    }
}
