//! Lighting calculators: fixture sizing from PAR targets and Daily Light
//! Integral classification.

use crate::error::{AquaOpsError, Result};
use crate::logic::formulas;
use crate::models::{DliReport, FixtureType, LightingPlan, PlantLightDemand, StatusTier};

/// Size a fixture so the demand class's PAR range survives to the substrate.
pub fn plan_lighting(
    length_cm: f64,
    width_cm: f64,
    depth_cm: f64,
    demand: PlantLightDemand,
    fixture: FixtureType,
) -> Result<LightingPlan> {
    for (name, value) in [
        ("tank length", length_cm),
        ("tank width", width_cm),
        ("water depth", depth_cm),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(AquaOpsError::InvalidInput(format!(
                "{} must be a positive finite number",
                name
            )));
        }
    }

    let surface_area_m2 = length_cm * width_cm / 10_000.0;
    let depth_m = depth_cm / 100.0;
    let (par_min, par_max) = demand.par_range();

    let surface_par_min =
        formulas::surface_par_required(par_min, formulas::WATER_EXTINCTION_PER_M, depth_m);
    let surface_par_max =
        formulas::surface_par_required(par_max, formulas::WATER_EXTINCTION_PER_M, depth_m);

    let efficiency = fixture.efficiency_umol_per_j();
    let correction = fixture.correction_factor();
    let watts_min =
        formulas::fixture_watts(surface_par_min, surface_area_m2, efficiency, correction);
    let watts_max =
        formulas::fixture_watts(surface_par_max, surface_area_m2, efficiency, correction);

    let mut notes = Vec::new();
    match demand {
        PlantLightDemand::FishOnly => {
            notes.push("Ambient viewing light only; no photoperiod needed".to_string());
        }
        _ => {
            if par_max > 100.0 {
                notes.push("CO2 injection is effectively mandatory at this intensity".to_string());
                notes.push("Dose full NPK fertilization alongside the light".to_string());
            }
            notes.push("Ramp intensity up over 2-3 weeks".to_string());
            notes.push("Watch for algae during the first weeks and shorten the photoperiod if it appears".to_string());
        }
    }

    Ok(LightingPlan {
        surface_area_m2,
        surface_par_min,
        surface_par_max,
        watts_min,
        watts_max,
        photoperiod_hours: demand.photoperiod_hours(),
        notes,
    })
}

/// Classify the Daily Light Integral after surface and shading losses.
pub fn daily_light_integral_report(
    par: f64,
    photoperiod_hours: f64,
    water_loss_percent: f64,
    shading_loss_percent: f64,
) -> Result<DliReport> {
    if !par.is_finite() || par < 0.0 {
        return Err(AquaOpsError::InvalidInput(
            "PAR must be a non-negative finite number".to_string(),
        ));
    }
    if !photoperiod_hours.is_finite() || !(0.0..=24.0).contains(&photoperiod_hours) {
        return Err(AquaOpsError::InvalidInput(
            "photoperiod must be within 0-24 hours".to_string(),
        ));
    }
    for (name, value) in [
        ("water loss", water_loss_percent),
        ("shading loss", shading_loss_percent),
    ] {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(AquaOpsError::InvalidInput(format!(
                "{} must be within 0-100 percent",
                name
            )));
        }
    }

    let effective_par =
        par * (1.0 - water_loss_percent / 100.0) * (1.0 - shading_loss_percent / 100.0);
    let dli = formulas::daily_light_integral(effective_par, photoperiod_hours);

    let (tier, level, recommendation) = if dli < 15.0 {
        (
            StatusTier::Good,
            "low light",
            "Suits anubias, mosses, and ferns; skip CO2",
        )
    } else if dli < 30.0 {
        (
            StatusTier::Excellent,
            "moderate light",
            "The universal planted-tank level; most species thrive here",
        )
    } else if dli < 50.0 {
        (
            StatusTier::Good,
            "high light",
            "Demanding plants only; CO2 injection and fertilization are required",
        )
    } else {
        (
            StatusTier::Warning,
            "excessive light",
            "Algae risk; reduce intensity or shorten the photoperiod",
        )
    };

    Ok(DliReport {
        dli_mol_m2_day: dli,
        effective_par,
        tier,
        level: level.to_string(),
        recommendation: recommendation.to_string(),
    })
}
