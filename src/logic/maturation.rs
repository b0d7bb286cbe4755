//! Biofilter maturation forecast: how long until a new filter reaches
//! steady-state nitrification.
//!
//! Two bacterial populations grow in sequence. Ammonia oxidizers start
//! immediately; nitrite oxidizers cannot grow until the first population
//! supplies nitrite, so their time carries a fixed lag on top of their own
//! growth.

use crate::error::{AquaOpsError, Result};
use crate::logic::formulas;
use crate::models::{MaturationForecast, MaturationPhases, StarterCulture, StatusTier};

/// Time-to-threshold for ammonia oxidizers at 25 °C / pH 7.5-8.5, days.
const AOB_BASE_DAYS: f64 = 14.0;
/// Time-to-threshold for nitrite oxidizers under the same conditions, days.
const NOB_BASE_DAYS: f64 = 21.0;
/// Nitrite oxidizers idle until nitrite appears, days.
const NOB_LAG_DAYS: f64 = 7.0;

/// Q10 for nitrifying bacteria, referenced to 25 °C.
const NITRIFIER_Q10: f64 = 2.3;
const NITRIFIER_REF_C: f64 = 25.0;

/// Biomedia surface considered fully adequate, cm² (per ~100 L of water).
const REFERENCE_SURFACE_CM2: f64 = 10_000.0;

const LAG_SHARE: f64 = 0.1;
const STABILIZATION_SHARE: f64 = 0.3;

/// Growth penalty outside the nitrifier pH optimum. Banded, not continuous.
fn ph_penalty(ph: f64) -> f64 {
    if ph < 7.0 {
        1.5
    } else if ph < 7.5 {
        1.2
    } else if ph > 8.5 {
        1.3
    } else {
        1.0
    }
}

pub fn forecast_maturation(
    temp_c: f64,
    ph: f64,
    starter: StarterCulture,
    surface_cm2: f64,
) -> Result<MaturationForecast> {
    if !temp_c.is_finite() || temp_c <= -273.15 {
        return Err(AquaOpsError::InvalidInput(
            "temperature must be finite and above absolute zero".to_string(),
        ));
    }
    if !ph.is_finite() || !(0.0..=14.0).contains(&ph) {
        return Err(AquaOpsError::InvalidInput(
            "pH must be within 0-14".to_string(),
        ));
    }
    if !surface_cm2.is_finite() || surface_cm2 <= 0.0 {
        return Err(AquaOpsError::InvalidInput(
            "media surface area must be positive".to_string(),
        ));
    }

    let temp_factor = formulas::q10_factor(NITRIFIER_Q10, temp_c, NITRIFIER_REF_C);
    let penalty = ph_penalty(ph);
    let acceleration = starter.acceleration_factor();

    let ammonia_oxidizer_days = AOB_BASE_DAYS / temp_factor * acceleration * penalty;
    // The lag is availability of nitrite, not growth, so it is not scaled.
    let nitrite_oxidizer_days =
        NOB_BASE_DAYS / temp_factor * acceleration * penalty + NOB_LAG_DAYS;

    let total = ammonia_oxidizer_days.max(nitrite_oxidizer_days);
    let total_days = total.round().max(1.0) as u32;

    // Lag and stabilization round independently; the exponential phase takes
    // the remainder so the three always sum exactly to the total.
    let lag_days = (total_days as f64 * LAG_SHARE).round() as u32;
    let stabilization_days = (total_days as f64 * STABILIZATION_SHARE).round() as u32;
    let exponential_days = total_days - lag_days - stabilization_days;

    let ratio = surface_cm2 / REFERENCE_SURFACE_CM2;
    let (surface_tier, surface_note) = if ratio < 0.5 {
        (
            StatusTier::Danger,
            "Media surface is critically undersized; double it before relying on the filter"
                .to_string(),
        )
    } else if ratio < 0.8 {
        (
            StatusTier::Warning,
            "Media surface is on the small side; add media to build a reserve".to_string(),
        )
    } else {
        (
            StatusTier::Excellent,
            "Media surface is sufficient for a full bacterial colony".to_string(),
        )
    };

    Ok(MaturationForecast {
        total_days,
        ammonia_oxidizer_days,
        nitrite_oxidizer_days,
        phases: MaturationPhases {
            lag_days,
            exponential_days,
            stabilization_days,
        },
        surface_tier,
        surface_note,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_conditions_take_four_weeks() {
        let forecast =
            forecast_maturation(25.0, 7.5, StarterCulture::None, 10_000.0).unwrap();
        assert_eq!(forecast.total_days, 28);
        assert!((forecast.ammonia_oxidizer_days - 14.0).abs() < 1e-9);
        assert!((forecast.nitrite_oxidizer_days - 28.0).abs() < 1e-9);
        assert_eq!(forecast.phases.lag_days, 3);
        assert_eq!(forecast.phases.exponential_days, 17);
        assert_eq!(forecast.phases.stabilization_days, 8);
    }

    #[test]
    fn phases_partition_the_total_over_a_grid() {
        for temp in [15.0, 18.0, 22.0, 25.0, 28.0, 32.0] {
            for ph in [6.2, 6.9, 7.0, 7.4, 7.5, 8.0, 8.5, 8.9] {
                for starter in [
                    StarterCulture::None,
                    StarterCulture::Commercial,
                    StarterCulture::Seeded,
                ] {
                    let forecast =
                        forecast_maturation(temp, ph, starter, 10_000.0).unwrap();
                    assert_eq!(
                        forecast.phases.total(),
                        forecast.total_days,
                        "phase gap at T={} pH={} starter={:?}",
                        temp,
                        ph,
                        starter
                    );
                }
            }
        }
    }

    #[test]
    fn starter_cultures_shorten_the_cycle() {
        let none = forecast_maturation(25.0, 7.5, StarterCulture::None, 10_000.0).unwrap();
        let commercial =
            forecast_maturation(25.0, 7.5, StarterCulture::Commercial, 10_000.0).unwrap();
        let seeded =
            forecast_maturation(25.0, 7.5, StarterCulture::Seeded, 10_000.0).unwrap();
        assert!(commercial.total_days < none.total_days);
        assert!(seeded.total_days < commercial.total_days);
    }

    #[test]
    fn cold_water_slows_the_cycle() {
        let warm = forecast_maturation(28.0, 7.5, StarterCulture::None, 10_000.0).unwrap();
        let cold = forecast_maturation(18.0, 7.5, StarterCulture::None, 10_000.0).unwrap();
        assert!(cold.total_days > warm.total_days);
    }

    #[test]
    fn ph_penalty_bands() {
        assert_eq!(ph_penalty(6.5), 1.5);
        assert_eq!(ph_penalty(7.0), 1.2);
        assert_eq!(ph_penalty(7.4), 1.2);
        assert_eq!(ph_penalty(7.5), 1.0);
        assert_eq!(ph_penalty(8.5), 1.0);
        assert_eq!(ph_penalty(8.6), 1.3);
    }

    #[test]
    fn acidic_water_slows_the_cycle() {
        let neutral = forecast_maturation(25.0, 7.5, StarterCulture::None, 10_000.0).unwrap();
        let acidic = forecast_maturation(25.0, 6.5, StarterCulture::None, 10_000.0).unwrap();
        assert!(acidic.total_days > neutral.total_days);
    }

    #[test]
    fn surface_adequacy_tiers() {
        let small = forecast_maturation(25.0, 7.5, StarterCulture::None, 4_000.0).unwrap();
        assert_eq!(small.surface_tier, StatusTier::Danger);

        let marginal = forecast_maturation(25.0, 7.5, StarterCulture::None, 6_000.0).unwrap();
        assert_eq!(marginal.surface_tier, StatusTier::Warning);

        // Exactly 80% of the reference is already adequate.
        let adequate = forecast_maturation(25.0, 7.5, StarterCulture::None, 8_000.0).unwrap();
        assert_eq!(adequate.surface_tier, StatusTier::Excellent);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(forecast_maturation(f64::NAN, 7.5, StarterCulture::None, 10_000.0).is_err());
        assert!(forecast_maturation(25.0, 15.0, StarterCulture::None, 10_000.0).is_err());
        assert!(forecast_maturation(25.0, 7.5, StarterCulture::None, 0.0).is_err());
    }

    #[test]
    fn total_never_rounds_to_zero() {
        // Hot, seeded, optimal pH: the fastest possible cycle still reports
        // at least one day.
        let fast = forecast_maturation(35.0, 8.0, StarterCulture::Seeded, 20_000.0).unwrap();
        assert!(fast.total_days >= 1);
        assert_eq!(fast.phases.total(), fast.total_days);
    }
}
