use super::analysis::StatusTier;
use serde::{Deserialize, Serialize};

/// Starter culture used when cycling a new biofilter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarterCulture {
    /// Fishless cycle from scratch.
    None,
    /// Bottled commercial nitrifier blend.
    Commercial,
    /// Media seeded from an established filter.
    Seeded,
}

impl StarterCulture {
    /// Multiplier on time-to-threshold for both nitrifier populations.
    pub fn acceleration_factor(&self) -> f64 {
        match self {
            StarterCulture::None => 1.0,
            StarterCulture::Commercial => 0.6,
            StarterCulture::Seeded => 0.3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StarterCulture::None => "none",
            StarterCulture::Commercial => "commercial starter",
            StarterCulture::Seeded => "seeded media",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" | "no" => Some(StarterCulture::None),
            "commercial" | "bottled" => Some(StarterCulture::Commercial),
            "seeded" | "seed" => Some(StarterCulture::Seeded),
            _ => None,
        }
    }
}

impl std::fmt::Display for StarterCulture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Biological filter media. Surface density figures are manufacturer-typical;
/// nitrification rates assume a conservative 0.1 g NH3-N per m² per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    CeramicRings,
    BioBalls,
    SinteredGlass,
    LavaRock,
    PlasticMedia,
    Sponge,
}

impl MediaType {
    /// Specific surface area, m² per m³ of media.
    pub fn surface_density_m2_per_m3(&self) -> f64 {
        match self {
            MediaType::CeramicRings => 600.0,
            MediaType::BioBalls => 500.0,
            MediaType::SinteredGlass => 1000.0,
            MediaType::LavaRock => 300.0,
            MediaType::PlasticMedia => 400.0,
            MediaType::Sponge => 800.0,
        }
    }

    /// Volumetric nitrification capacity, mg NH3-N per litre of media per day.
    pub fn nitrification_rate_mg_per_l_day(&self) -> f64 {
        match self {
            MediaType::CeramicRings => 60.0,
            MediaType::BioBalls => 50.0,
            MediaType::SinteredGlass => 100.0,
            MediaType::LavaRock => 30.0,
            MediaType::PlasticMedia => 40.0,
            MediaType::Sponge => 80.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::CeramicRings => "ceramic rings",
            MediaType::BioBalls => "bio balls",
            MediaType::SinteredGlass => "sintered glass",
            MediaType::LavaRock => "lava rock",
            MediaType::PlasticMedia => "plastic media",
            MediaType::Sponge => "sponge",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "ceramic" | "ceramic_rings" => Some(MediaType::CeramicRings),
            "bio_balls" | "bioballs" => Some(MediaType::BioBalls),
            "sintered_glass" | "glass" => Some(MediaType::SinteredGlass),
            "lava_rock" | "lava" => Some(MediaType::LavaRock),
            "plastic" | "plastic_media" => Some(MediaType::PlasticMedia),
            "sponge" | "foam" => Some(MediaType::Sponge),
            _ => None,
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ammonia production and filtration demand for a stocked tank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BioloadEstimate {
    /// Total NH3-N produced per day, mg.
    pub ammonia_mg_per_day: f64,
    /// Temperature-adjusted production per litre of water, mg/L/day.
    pub density_mg_per_l_day: f64,
    /// Oxygen consumed nitrifying the daily ammonia load, mg/day.
    pub oxygen_demand_mg_per_day: f64,
    pub tier: StatusTier,
    pub level: String,
    /// Equipment and husbandry recommendations, most important first.
    pub recommendations: Vec<String>,
    /// Filter throughput needed for this load, L/h.
    pub required_flow_l_per_h: f64,
    /// Biomedia surface needed for this load, cm².
    pub required_surface_cm2: f64,
}

/// Aeration needed to support nitrification of a given ammonia load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AerationDemand {
    pub oxygen_mg_per_day: f64,
    pub oxygen_mg_per_hour: f64,
    pub level: String,
    pub compressor: String,
}

/// Day spans of the three maturation phases. Phases are contiguous and
/// sum exactly to the rounded total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaturationPhases {
    pub lag_days: u32,
    pub exponential_days: u32,
    pub stabilization_days: u32,
}

impl MaturationPhases {
    pub fn total(&self) -> u32 {
        self.lag_days + self.exponential_days + self.stabilization_days
    }
}

/// Forecast of time to steady-state nitrification for a new biofilter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturationForecast {
    pub total_days: u32,
    /// Unrounded time-to-threshold for the ammonia-oxidizing population.
    pub ammonia_oxidizer_days: f64,
    /// Unrounded time-to-threshold for the nitrite-oxidizing population,
    /// including the lag before nitrite becomes available.
    pub nitrite_oxidizer_days: f64,
    pub phases: MaturationPhases,
    pub surface_tier: StatusTier,
    pub surface_note: String,
}

/// Media volume, surface area, and contact time for a target ammonia load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiofilterSizing {
    pub media: MediaType,
    pub media_volume_l: f64,
    pub surface_area_cm2: f64,
    /// Hydraulic retention time through the media bed, minutes.
    pub retention_minutes: f64,
    pub contact_tier: StatusTier,
    pub contact_note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_factors() {
        assert_eq!(StarterCulture::None.acceleration_factor(), 1.0);
        assert_eq!(StarterCulture::Commercial.acceleration_factor(), 0.6);
        assert_eq!(StarterCulture::Seeded.acceleration_factor(), 0.3);
    }

    #[test]
    fn starter_from_str() {
        assert_eq!(StarterCulture::from_str("none"), Some(StarterCulture::None));
        assert_eq!(
            StarterCulture::from_str("Commercial"),
            Some(StarterCulture::Commercial)
        );
        assert_eq!(
            StarterCulture::from_str("seeded"),
            Some(StarterCulture::Seeded)
        );
        assert_eq!(StarterCulture::from_str("magic"), None);
    }

    #[test]
    fn media_from_str_accepts_separators() {
        assert_eq!(
            MediaType::from_str("ceramic-rings"),
            Some(MediaType::CeramicRings)
        );
        assert_eq!(
            MediaType::from_str("sintered glass"),
            Some(MediaType::SinteredGlass)
        );
        assert_eq!(MediaType::from_str("granite"), None);
    }

    #[test]
    fn sintered_glass_has_highest_capacity() {
        for media in [
            MediaType::CeramicRings,
            MediaType::BioBalls,
            MediaType::LavaRock,
            MediaType::PlasticMedia,
            MediaType::Sponge,
        ] {
            assert!(
                MediaType::SinteredGlass.nitrification_rate_mg_per_l_day()
                    > media.nitrification_rate_mg_per_l_day()
            );
            assert!(
                MediaType::SinteredGlass.surface_density_m2_per_m3()
                    > media.surface_density_m2_per_m3()
            );
        }
    }

    #[test]
    fn phases_total() {
        let phases = MaturationPhases {
            lag_days: 3,
            exponential_days: 17,
            stabilization_days: 8,
        };
        assert_eq!(phases.total(), 28);
    }
}
