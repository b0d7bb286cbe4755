use crate::logic::bands::{Band, BandTable};
use crate::models::StatusTier;

/// Dissolved oxygen bands, mg/L. Boundaries are exclusive on the low side
/// here: a reading of exactly 4.0 is low, not hypoxic.
///
/// When temperature context is available the analyzer also reports percent
/// of the solubility limit (informational, no tier escalation).
pub fn bands() -> BandTable {
    BandTable::new(vec![
        Band::new(
            4.0,
            false,
            StatusTier::Danger,
            "acute hypoxia",
            "Below 4 mg/L most fish cannot extract enough oxygen; gasping at \
             the surface and losses follow within hours. Nitrification also \
             stops, compounding the problem.",
        )
        .with_recommendations(&[
            "Increase aeration immediately: air stone, surface agitation, spray bar",
            "Drop the temperature a degree or two if it is high; cold water holds more oxygen",
            "Reduce feeding: decomposition competes for the same oxygen",
        ]),
        Band::new(
            5.0,
            false,
            StatusTier::Warning,
            "low",
            "4-5 mg/L is survivable but stressful, and leaves no margin for \
             the nightly dip when plants stop photosynthesizing.",
        )
        .with_recommendations(&[
            "Increase surface agitation or add an air stone",
            "Check for oxygen sinks: decaying matter, overdue filter maintenance",
        ]),
        Band::new(
            6.0,
            false,
            StatusTier::Good,
            "adequate",
            "5-6 mg/L supports a normally stocked tank with a modest safety \
             margin.",
        ),
        Band::new(
            8.0,
            true,
            StatusTier::Excellent,
            "optimal",
            "6-8 mg/L is comfortable for all freshwater species and the \
             biofilter.",
        ),
        Band::new(
            12.0,
            true,
            StatusTier::Good,
            "high",
            "8-12 mg/L typically reflects strong photosynthesis; harmless by \
             itself.",
        ),
        Band::new(
            f64::INFINITY,
            false,
            StatusTier::Warning,
            "supersaturated",
            "Sustained readings above 12 mg/L indicate supersaturation, which \
             can cause gas bubble disease in fish tissue.",
        )
        .with_recommendations(&[
            "Increase surface agitation to outgas the excess",
            "Check CO2/O2 injection equipment and intense lighting periods",
        ]),
    ])
    .expect("built-in oxygen bands are ordered")
}
