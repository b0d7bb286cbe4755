use crate::logic::bands::{Band, BandTable};
use crate::models::StatusTier;

/// Total ammonia (NH3/NH4) bands, mg/L. 0.1 itself is still safe and 0.25
/// itself is still only elevated; anything above 0.25 is toxic territory.
///
/// Classification here uses the total. When pH and temperature context are
/// available the analyzer also computes the un-ionized fraction and may
/// escalate the tier (see `FreeAmmoniaLimits`).
pub fn bands() -> BandTable {
    BandTable::new(vec![
        Band::new(
            0.1,
            true,
            StatusTier::Excellent,
            "safe",
            "Total ammonia at or below 0.1 mg/L is the working zero of \
             hobbyist test kits; a cycled biofilter holds it there.",
        ),
        Band::new(
            0.25,
            true,
            StatusTier::Warning,
            "elevated",
            "0.1-0.25 mg/L total ammonia means production is outrunning the \
             biofilter; chronic exposure damages gills.",
        )
        .with_recommendations(&[
            "Water change of 30-40%",
            "Cut feeding back until ammonia reads zero",
            "Check the filter: a washed-out or medicated biofilm stops nitrifying",
        ]),
        Band::new(
            f64::INFINITY,
            false,
            StatusTier::Danger,
            "toxic",
            "Above 0.25 mg/L total ammonia, the un-ionized fraction reaches \
             harmful levels at ordinary pH; acute gill damage follows.",
        )
        .with_recommendations(&[
            "Emergency water change of 50-75% now",
            "Dose an ammonia detoxifier if available",
            "Stop feeding for 24-48 hours",
            "Retest within 6 hours",
        ]),
    ])
    .expect("built-in ammonia bands are ordered")
}

/// Escalation thresholds on the computed un-ionized NH3 concentration, mg/L.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FreeAmmoniaLimits {
    pub warning_mg_l: f64,
    pub danger_mg_l: f64,
}

impl Default for FreeAmmoniaLimits {
    fn default() -> Self {
        Self {
            warning_mg_l: 0.02,
            danger_mg_l: 0.05,
        }
    }
}

impl FreeAmmoniaLimits {
    pub fn tier(&self, free_mg_l: f64) -> StatusTier {
        if free_mg_l > self.danger_mg_l {
            StatusTier::Danger
        } else if free_mg_l > self.warning_mg_l {
            StatusTier::Warning
        } else {
            StatusTier::Excellent
        }
    }
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
        assert_eq!(bands.classify(0.11).tier, StatusTier::Warning);
        assert_eq!(bands.classify(0.25).tier, StatusTier::Warning);
        assert_eq!(bands.classify(0.2501).tier, StatusTier::Danger);
        assert_eq!(bands.classify(0.3).level, "toxic");
    }

    #[test]
    fn free_ammonia_limits() {
        let limits = FreeAmmoniaLimits::default();
        assert_eq!(limits.tier(0.01), StatusTier::Excellent);
        // The limits themselves are safe; escalation is strictly above.
        assert_eq!(limits.tier(0.02), StatusTier::Excellent);
        assert_eq!(limits.tier(0.03), StatusTier::Warning);
        assert_eq!(limits.tier(0.05), StatusTier::Warning);
        assert_eq!(limits.tier(0.06), StatusTier::Danger);
    }
}
