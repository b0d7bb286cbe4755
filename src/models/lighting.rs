use super::analysis::StatusTier;
use serde::{Deserialize, Serialize};

/// Light demand class of the planted (or unplanted) layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantLightDemand {
    /// Fish-only tank, ambient viewing light.
    FishOnly,
    /// Anubias, mosses, ferns.
    LowLight,
    /// Most stem plants and rosettes.
    Medium,
    /// Light-hungry stems and red plants.
    HighLight,
    /// Carpeting foreground species.
    Carpet,
}

impl PlantLightDemand {
    /// Target PAR range at plant depth, μmol/m²/s.
    pub fn par_range(&self) -> (f64, f64) {
        match self {
            PlantLightDemand::FishOnly => (0.0, 20.0),
            PlantLightDemand::LowLight => (30.0, 60.0),
            PlantLightDemand::Medium => (60.0, 120.0),
            PlantLightDemand::HighLight => (120.0, 200.0),
            PlantLightDemand::Carpet => (200.0, 300.0),
        }
    }

    /// Recommended photoperiod, hours per day.
    pub fn photoperiod_hours(&self) -> f64 {
        match self {
            PlantLightDemand::FishOnly => 0.0,
            PlantLightDemand::LowLight => 6.0,
            PlantLightDemand::Carpet => 10.0,
            _ => 8.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantLightDemand::FishOnly => "fish only",
            PlantLightDemand::LowLight => "low-light plants",
            PlantLightDemand::Medium => "medium-demand plants",
            PlantLightDemand::HighLight => "high-light plants",
            PlantLightDemand::Carpet => "carpeting plants",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "fish_only" | "none" | "fish" => Some(PlantLightDemand::FishOnly),
            "low" | "low_light" | "shade" => Some(PlantLightDemand::LowLight),
            "medium" => Some(PlantLightDemand::Medium),
            "high" | "high_light" => Some(PlantLightDemand::HighLight),
            "carpet" => Some(PlantLightDemand::Carpet),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlantLightDemand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixture technology. Efficiency is photon output per joule; the correction
/// factor covers reflector and thermal losses typical of the technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureType {
    Led,
    BudgetLed,
    T5,
    T8,
    MetalHalide,
}

impl FixtureType {
    /// Photon efficiency, μmol per joule.
    pub fn efficiency_umol_per_j(&self) -> f64 {
        match self {
            FixtureType::Led => 2.5,
            FixtureType::BudgetLed => 1.8,
            FixtureType::T5 => 1.6,
            FixtureType::T8 => 1.2,
            FixtureType::MetalHalide => 1.3,
        }
    }

    /// Technology correction applied to the computed wattage.
    pub fn correction_factor(&self) -> f64 {
        match self {
            FixtureType::Led | FixtureType::BudgetLed => 1.0,
            FixtureType::T5 => 1.1,
            FixtureType::T8 => 1.15,
            FixtureType::MetalHalide => 1.2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FixtureType::Led => "LED",
            FixtureType::BudgetLed => "budget LED",
            FixtureType::T5 => "T5 fluorescent",
            FixtureType::T8 => "T8 fluorescent",
            FixtureType::MetalHalide => "metal halide",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "led" => Some(FixtureType::Led),
            "budget_led" | "led_cheap" | "cheap_led" => Some(FixtureType::BudgetLed),
            "t5" => Some(FixtureType::T5),
            "t8" => Some(FixtureType::T8),
            "mh" | "metal_halide" => Some(FixtureType::MetalHalide),
            _ => None,
        }
    }
}

impl std::fmt::Display for FixtureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixture sizing for a tank footprint and plant demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingPlan {
    pub surface_area_m2: f64,
    /// PAR needed at the water surface to hit the target at depth,
    /// after Lambert-Beer attenuation. Low and high ends of the demand range.
    pub surface_par_min: f64,
    pub surface_par_max: f64,
    pub watts_min: f64,
    pub watts_max: f64,
    pub photoperiod_hours: f64,
    pub notes: Vec<String>,
}

/// Daily Light Integral classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DliReport {
    /// mol photons per m² per day, after losses.
    pub dli_mol_m2_day: f64,
    /// PAR after water-surface and shading losses, μmol/m²/s.
    pub effective_par: f64,
    pub tier: StatusTier,
    pub level: String,
    pub recommendation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn par_ranges_are_ordered_by_demand() {
        let classes = [
            PlantLightDemand::FishOnly,
            PlantLightDemand::LowLight,
            PlantLightDemand::Medium,
            PlantLightDemand::HighLight,
            PlantLightDemand::Carpet,
        ];
        for pair in classes.windows(2) {
            assert!(pair[0].par_range().1 <= pair[1].par_range().1);
        }
    }

    #[test]
    fn led_is_most_efficient() {
        for fixture in [
            FixtureType::BudgetLed,
            FixtureType::T5,
            FixtureType::T8,
            FixtureType::MetalHalide,
        ] {
            assert!(FixtureType::Led.efficiency_umol_per_j() > fixture.efficiency_umol_per_j());
        }
    }

    #[test]
    fn fish_only_needs_no_photoperiod() {
        assert_eq!(PlantLightDemand::FishOnly.photoperiod_hours(), 0.0);
        assert_eq!(PlantLightDemand::Carpet.photoperiod_hours(), 10.0);
    }
}
