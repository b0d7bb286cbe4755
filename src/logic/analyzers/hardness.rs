use crate::logic::bands::{Band, BandTable};
use crate::models::StatusTier;

/// General hardness (GH) bands, °dH. GH extremes are a compatibility and
/// osmoregulation issue, not an acute toxicity, so the worst tier here is
/// `Warning`.
pub fn gh_bands() -> BandTable {
    BandTable::new(vec![
        Band::new(
            2.0,
            false,
            StatusTier::Warning,
            "very soft",
            "Under 2 °dH there is almost no calcium or magnesium for \
             osmoregulation, bone growth, or plant nutrition.",
        )
        .with_recommendations(&[
            "Remineralize with a GH salt mix to at least 4 °dH",
            "Check molting invertebrates first; they fail at very low GH",
        ]),
        Band::new(
            4.0,
            false,
            StatusTier::Good,
            "soft",
            "2-4 °dH suits soft-water biotopes (tetras, discus); marginal \
             for livebearers and shrimp.",
        ),
        Band::new(
            12.0,
            true,
            StatusTier::Excellent,
            "ideal",
            "4-12 °dH covers the comfortable range for the broad community \
             aquarium.",
        ),
        Band::new(
            20.0,
            true,
            StatusTier::Good,
            "hard",
            "12-20 °dH suits livebearers and rift-lake species; soft-water \
             species struggle to breed.",
        ),
        Band::new(
            f64::INFINITY,
            false,
            StatusTier::Warning,
            "very hard",
            "Above 20 °dH osmotic load stresses most soft-water species and \
             scale builds on equipment.",
        )
        .with_recommendations(&[
            "Blend in reverse-osmosis or rain water to bring GH down",
            "Choose hard-water species if the source water cannot be changed",
        ]),
    ])
    .expect("built-in GH bands are ordered")
}

/// Carbonate hardness (KH) bands, °dH. Low KH is genuinely dangerous:
/// nitrification constantly produces acid, and without carbonate buffering
/// the pH can crash overnight.
pub fn kh_bands() -> BandTable {
    BandTable::new(vec![
        Band::new(
            1.0,
            false,
            StatusTier::Danger,
            "no buffering",
            "Under 1 °dH there is no carbonate reserve; the acid produced by \
             nitrification can crash pH in hours.",
        )
        .with_recommendations(&[
            "Raise KH to at least 3 °dH with sodium bicarbonate (about 1 tsp per 50 L raises 2 °dH)",
            "Retest pH daily until KH is stable",
        ]),
        Band::new(
            3.0,
            false,
            StatusTier::Warning,
            "low buffering",
            "1-3 °dH buffers weakly; pH drifts downward between water \
             changes.",
        )
        .with_recommendations(&[
            "Raise KH toward 4-6 °dH gradually",
            "Shorten the water change interval until buffering is restored",
        ]),
        Band::new(
            8.0,
            true,
            StatusTier::Excellent,
            "stable",
            "3-8 °dH holds pH steady against the nitrogen cycle's acid \
             output.",
        ),
        Band::new(
            15.0,
            true,
            StatusTier::Good,
            "high",
            "8-15 °dH locks pH on the alkaline side; fine for hard-water \
             setups, resistant to pH adjustment.",
        ),
        Band::new(
            f64::INFINITY,
            false,
            StatusTier::Warning,
            "very high",
            "Above 15 °dH pH is pinned alkaline and CO2 injection becomes \
             inefficient.",
        )
        .with_recommendations(&[
            "Blend in reverse-osmosis water if a lower, adjustable pH is needed",
        ]),
    ])
    .expect("built-in KH bands are ordered")
}
