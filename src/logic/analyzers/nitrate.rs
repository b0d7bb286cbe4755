use crate::logic::bands::{Band, BandTable};
use crate::models::StatusTier;

/// Nitrate (NO3) bands, mg/L. Unlike ammonia and nitrite, a little nitrate
/// is desirable in a planted tank, so the bottom of the domain is only
/// `Good`, not `Excellent`.
pub fn bands() -> BandTable {
    BandTable::new(vec![
        Band::new(
            5.0,
            false,
            StatusTier::Good,
            "lean",
            "Under 5 mg/L is harmless to fish but starves plants; in a \
             heavily planted tank it invites algae that outcompete on lean \
             nitrogen.",
        )
        .with_recommendations(&[
            "In a planted tank, consider dosing nitrate to 10-20 mg/L",
        ]),
        Band::new(
            25.0,
            true,
            StatusTier::Excellent,
            "optimal",
            "5-25 mg/L feeds plants without stressing fish; the end product \
             of a healthy nitrogen cycle.",
        ),
        Band::new(
            50.0,
            true,
            StatusTier::Good,
            "acceptable",
            "25-50 mg/L is tolerated by hardy species but marks a maintenance \
             backlog building up.",
        )
        .with_recommendations(&[
            "Add fast-growing plants or increase water change frequency",
        ]),
        Band::new(
            100.0,
            true,
            StatusTier::Warning,
            "high",
            "50-100 mg/L causes chronic stress, poor color, and algae \
             blooms; sensitive species stop breeding.",
        )
        .with_recommendations(&[
            "Increase water change frequency or volume",
            "Check stocking density and feeding amounts",
            "Vacuum the substrate: trapped detritus is a steady nitrate source",
        ]),
        Band::new(
            f64::INFINITY,
            false,
            StatusTier::Danger,
            "severe",
            "Above 100 mg/L osmoregulatory stress is acute for many species \
             and a single large correction can shock fish adapted to it.",
        )
        .with_recommendations(&[
            "Run a series of 25-30% water changes over several days",
            "Do not fix it in one massive change: the osmotic swing is dangerous",
            "Find the source: overstocking, deep detritus, or nitrate in the tap water",
        ]),
    ])
    .expect("built-in nitrate bands are ordered")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusTier;

    #[test]
    fn boundary_pinning() {
        let bands = bands();
        assert_eq!(bands.classify(0.0).tier, StatusTier::Good);
        assert_eq!(bands.classify(4.9).tier, StatusTier::Good);
        assert_eq!(bands.classify(5.0).tier, StatusTier::Excellent);
        assert_eq!(bands.classify(25.0).tier, StatusTier::Excellent);
        assert_eq!(bands.classify(25.1).tier, StatusTier::Good);
        assert_eq!(bands.classify(50.0).tier, StatusTier::Good);
        assert_eq!(bands.classify(50.1).tier, StatusTier::Warning);
        assert_eq!(bands.classify(100.0).tier, StatusTier::Warning);
        assert_eq!(bands.classify(100.1).tier, StatusTier::Danger);
    }
}
