//! Bioload estimation: how much ammonia a stocked tank produces and what
//! it takes to process it.

use crate::error::{AquaOpsError, Result};
use crate::logic::bands::{Band, BandTable};
use crate::logic::formulas;
use crate::models::{AerationDemand, BioloadEstimate};
use crate::models::StatusTier;

/// NH3-N excreted per 100 g of fish biomass per day, mg (Spotte's
/// steady-state figure for fed community fish).
const EXCRETION_MG_PER_100G_DAY: f64 = 2.5;

/// NH3-N produced per gram of dry feed per day, mg.
const FEED_AMMONIA_MG_PER_G: f64 = 0.08;

/// Metabolic Q10 for ammonia excretion, referenced to 20 °C.
const METABOLIC_Q10: f64 = 2.0;
const METABOLIC_REF_C: f64 = 20.0;

/// Filter turnover needed at elevated load, volumes per hour.
const TURNOVER_PER_HOUR: f64 = 5.0;

/// Biomedia surface needed per mg of daily NH3-N, cm².
const SURFACE_CM2_PER_MG_DAY: f64 = 200.0;

/// Fraction of the load a mature biofilter actually nitrifies.
const DEFAULT_NITRIFICATION_EFFICIENCY: f64 = 0.85;

/// Temperature-adjusted bioload density bands, mg NH3-N per litre per day.
fn density_bands() -> BandTable {
    BandTable::new(vec![
        Band::new(
            0.25,
            true,
            StatusTier::Excellent,
            "light",
            "Up to 0.25 mg/L/day is absorbed by any cycled filter with \
             margin to spare.",
        )
        .with_recommendations(&["Weekly 20% water change covers this load"]),
        Band::new(
            0.5,
            true,
            StatusTier::Good,
            "moderate",
            "0.25-0.5 mg/L/day is a normally stocked tank; standard \
             maintenance keeps nitrate in check.",
        )
        .with_recommendations(&["Weekly 20-25% water change and routine filter rinses"]),
        Band::new(
            1.0,
            true,
            StatusTier::Warning,
            "heavy",
            "0.5-1 mg/L/day leaves little buffer: a missed water change or \
             filter hiccup shows up as ammonia within days.",
        )
        .with_recommendations(&[
            "Increase filtration turnover and aeration",
            "Water changes of 25% two to three times per week",
            "Do not add more fish",
        ]),
        Band::new(
            f64::INFINITY,
            false,
            StatusTier::Danger,
            "critical",
            "Above 1 mg/L/day production outruns what hobby filtration can \
             nitrify continuously; chronic ammonia exposure is inevitable.",
        )
        .with_recommendations(&[
            "Reduce stocking or split the fish across tanks",
            "Upgrade filtration and run continuous aeration",
            "Daily partial water changes until the load drops",
        ]),
    ])
    .expect("built-in bioload bands are ordered")
}

/// Estimate ammonia production and the equipment needed to process it.
pub fn estimate_bioload(
    fish_biomass_g: f64,
    daily_feed_g: f64,
    volume_l: f64,
    temp_c: f64,
) -> Result<BioloadEstimate> {
    for (name, value) in [
        ("fish biomass", fish_biomass_g),
        ("daily feed", daily_feed_g),
        ("tank volume", volume_l),
        ("temperature", temp_c),
    ] {
        if !value.is_finite() {
            return Err(AquaOpsError::InvalidInput(format!(
                "{} must be a finite number",
                name
            )));
        }
    }
    if fish_biomass_g < 0.0 || daily_feed_g < 0.0 {
        return Err(AquaOpsError::InvalidInput(
            "biomass and feed cannot be negative".to_string(),
        ));
    }
    if volume_l <= 0.0 {
        return Err(AquaOpsError::InvalidInput(
            "tank volume must be positive".to_string(),
        ));
    }
    if temp_c <= -273.15 {
        return Err(AquaOpsError::InvalidInput(
            "temperature below absolute zero".to_string(),
        ));
    }

    let ammonia_mg_per_day =
        fish_biomass_g / 100.0 * EXCRETION_MG_PER_100G_DAY + daily_feed_g * FEED_AMMONIA_MG_PER_G;
    let temp_factor = formulas::q10_factor(METABOLIC_Q10, temp_c, METABOLIC_REF_C);
    let density_mg_per_l_day = ammonia_mg_per_day * temp_factor / volume_l;

    let bands = density_bands();
    let band = bands.classify(density_mg_per_l_day);

    Ok(BioloadEstimate {
        ammonia_mg_per_day,
        density_mg_per_l_day,
        oxygen_demand_mg_per_day: formulas::nitrification_oxygen_demand(
            ammonia_mg_per_day,
            DEFAULT_NITRIFICATION_EFFICIENCY,
        ),
        tier: band.tier,
        level: band.level.clone(),
        recommendations: band.recommendations.clone(),
        required_flow_l_per_h: volume_l * TURNOVER_PER_HOUR,
        required_surface_cm2: ammonia_mg_per_day * SURFACE_CM2_PER_MG_DAY,
    })
}

/// Aeration needed to nitrify a given daily NH3-N load.
/// `efficiency_percent` is how much of the load the biofilter converts.
pub fn aeration_demand(nh3_mg_per_day: f64, efficiency_percent: f64) -> Result<AerationDemand> {
    if !nh3_mg_per_day.is_finite() || nh3_mg_per_day < 0.0 {
        return Err(AquaOpsError::InvalidInput(
            "NH3-N load must be a non-negative finite number".to_string(),
        ));
    }
    if !efficiency_percent.is_finite()
        || efficiency_percent <= 0.0
        || efficiency_percent > 100.0
    {
        return Err(AquaOpsError::InvalidInput(
            "nitrification efficiency must be in (0, 100] percent".to_string(),
        ));
    }

    let oxygen_mg_per_day =
        formulas::nitrification_oxygen_demand(nh3_mg_per_day, efficiency_percent / 100.0);
    let oxygen_mg_per_hour = oxygen_mg_per_day / 24.0;

    let (level, compressor) = if oxygen_mg_per_hour > 100.0 {
        ("very high", "50+ L/min plus supplemental surface agitation")
    } else if oxygen_mg_per_hour > 50.0 {
        ("high", "20-30 L/min")
    } else if oxygen_mg_per_hour > 20.0 {
        ("moderate", "10-15 L/min")
    } else {
        ("low", "5-10 L/min")
    };

    Ok(AerationDemand {
        oxygen_mg_per_day,
        oxygen_mg_per_hour,
        level: level.to_string(),
        compressor: compressor.to_string(),
    })
}
