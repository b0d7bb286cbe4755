use serde::{Deserialize, Serialize};

/// Stand strength class for the filled tank weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandClass {
    Light,
    Reinforced,
    Special,
}

impl StandClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            StandClass::Light => "light stand",
            StandClass::Reinforced => "reinforced stand",
            StandClass::Special => "purpose-built stand",
        }
    }
}

impl std::fmt::Display for StandClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outer glass dimensions of a rectangular tank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TankDimensions {
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
    pub glass_thickness_mm: f64,
}

/// Physical characteristics and equipment sizing for a tank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankStats {
    pub volume_l: f64,
    pub water_weight_kg: f64,
    pub glass_weight_kg: f64,
    pub total_weight_kg: f64,
    pub stand: StandClass,
    pub heater_watts: f64,
    pub filter_flow_l_per_h: f64,
    pub lighting_watts: f64,
    pub air_pump_l_per_min: String,
}
