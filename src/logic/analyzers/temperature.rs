use crate::logic::bands::{Band, BandTable};
use crate::models::StatusTier;

/// Temperature bands for a tropical community tank, °C.
pub fn bands() -> BandTable {
    BandTable::new(vec![
        Band::new(
            15.0,
            false,
            StatusTier::Danger,
            "critically cold",
            "Below 15 °C tropical species lose immune function and stop \
             feeding; prolonged exposure is lethal.",
        )
        .with_recommendations(&[
            "Add or replace the heater immediately",
            "Raise temperature no faster than 1-2 °C per hour",
        ]),
        Band::new(
            18.0,
            false,
            StatusTier::Warning,
            "cold",
            "15-18 °C suppresses metabolism and digestion in tropical fish \
             and slows the biofilter.",
        )
        .with_recommendations(&[
            "Check heater sizing: about 1.5 W per litre is the usual target",
        ]),
        Band::new(
            22.0,
            false,
            StatusTier::Good,
            "cool",
            "18-22 °C suits subtropical species; at the low end for most \
             tropical communities.",
        ),
        Band::new(
            28.0,
            true,
            StatusTier::Excellent,
            "optimal",
            "22-28 °C is the standard tropical range: stable metabolism and \
             good oxygen solubility.",
        ),
        Band::new(
            32.0,
            true,
            StatusTier::Good,
            "warm",
            "28-32 °C is tolerated but oxygen solubility drops while \
             metabolic demand rises.",
        ),
        Band::new(
            35.0,
            true,
            StatusTier::Warning,
            "hot",
            "32-35 °C pushes oxygen demand past what warm water can carry \
             for many species.",
        )
        .with_recommendations(&[
            "Increase surface agitation and aeration",
            "Float sealed ice bottles or use a cooling fan; avoid sudden drops",
        ]),
        Band::new(
            f64::INFINITY,
            false,
            StatusTier::Danger,
            "critically hot",
            "Above 35 °C dissolved oxygen falls below respiratory demand and \
             protein damage begins in most freshwater species.",
        )
        .with_recommendations(&[
            "Cool the tank now: fans, floating ice bottles, room cooling",
            "Maximize aeration while the water is warm",
            "Find the cause: stuck heater, direct sun, hot room",
        ]),
    ])
    .expect("built-in temperature bands are ordered")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusTier;

    #[test]
    fn boundary_pinning() {
        let bands = bands();
        assert_eq!(bands.classify(14.9).tier, StatusTier::Danger);
        assert_eq!(bands.classify(15.0).tier, StatusTier::Warning);
        assert_eq!(bands.classify(18.0).tier, StatusTier::Good);
        assert_eq!(bands.classify(22.0).tier, StatusTier::Excellent);
        assert_eq!(bands.classify(28.0).tier, StatusTier::Excellent);
        assert_eq!(bands.classify(28.1).tier, StatusTier::Good);
        assert_eq!(bands.classify(32.0).tier, StatusTier::Good);
        assert_eq!(bands.classify(35.0).tier, StatusTier::Warning);
        assert_eq!(bands.classify(35.1).tier, StatusTier::Danger);
    }

    #[test]
    fn covers_physical_extremes() {
        let bands = bands();
        assert_eq!(bands.classify(-270.0).tier, StatusTier::Danger);
        assert_eq!(bands.classify(90.0).tier, StatusTier::Danger);
    }
}
