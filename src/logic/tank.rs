//! Tank planner: volume, weight, and equipment sizing from dimensions.

use crate::error::{AquaOpsError, Result};
use crate::models::{StandClass, TankDimensions, TankStats};

/// Glass density, g/cm³.
const GLASS_DENSITY: f64 = 2.5;

/// Heater sizing, watts per litre.
const HEATER_W_PER_L: f64 = 1.5;
/// Baseline filter turnover, volumes per hour.
const FILTER_TURNOVER_PER_H: f64 = 3.0;
/// LED lighting baseline, watts per litre.
const LIGHT_W_PER_L: f64 = 0.5;

/// Compute tank statistics. Volume comes from `volume_l` when given,
/// otherwise from the dimensions; at least one source is required. Glass
/// weight is only computable when dimensions are known.
pub fn tank_stats(volume_l: Option<f64>, dims: Option<&TankDimensions>) -> Result<TankStats> {
    if let Some(v) = volume_l {
        if !v.is_finite() || v <= 0.0 {
            return Err(AquaOpsError::InvalidInput(
                "tank volume must be a positive finite number".to_string(),
            ));
        }
    }
    if let Some(d) = dims {
        for (name, value) in [
            ("length", d.length_cm),
            ("width", d.width_cm),
            ("height", d.height_cm),
            ("glass thickness", d.glass_thickness_mm),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AquaOpsError::InvalidInput(format!(
                    "tank {} must be a positive finite number",
                    name
                )));
            }
        }
    }

    let volume = match (volume_l, dims) {
        (Some(v), _) => v,
        (None, Some(d)) => d.length_cm * d.width_cm * d.height_cm / 1000.0,
        (None, None) => {
            return Err(AquaOpsError::InvalidInput(
                "either a volume or tank dimensions are required".to_string(),
            ))
        }
    };

    let water_weight_kg = volume; // 1 L of water weighs 1 kg
    let glass_weight_kg = dims.map(glass_weight_kg).unwrap_or(0.0);
    let total_weight_kg = water_weight_kg + glass_weight_kg;

    let stand = if total_weight_kg < 50.0 {
        StandClass::Light
    } else if total_weight_kg < 200.0 {
        StandClass::Reinforced
    } else {
        StandClass::Special
    };

    Ok(TankStats {
        volume_l: volume,
        water_weight_kg,
        glass_weight_kg,
        total_weight_kg,
        stand,
        heater_watts: (volume * HEATER_W_PER_L).ceil(),
        filter_flow_l_per_h: (volume * FILTER_TURNOVER_PER_H).ceil(),
        lighting_watts: (volume * LIGHT_W_PER_L).ceil(),
        air_pump_l_per_min: if volume < 100.0 {
            "5-10 L/min".to_string()
        } else {
            "10-20 L/min".to_string()
        },
    })
}

/// Five panes: front, back, two sides, bottom.
fn glass_weight_kg(d: &TankDimensions) -> f64 {
    let t_cm = d.glass_thickness_mm / 10.0;
    let front_back = 2.0 * d.length_cm * d.height_cm * t_cm;
    let sides = 2.0 * d.width_cm * d.height_cm * t_cm;
    let bottom = d.length_cm * d.width_cm * t_cm;
    (front_back + sides + bottom) * GLASS_DENSITY / 1000.0
}
