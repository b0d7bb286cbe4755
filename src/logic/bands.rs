//! Generic classification-band tables.
//!
//! Each analyzer is data: an ordered list of bands plus this one lookup
//! routine. A band owns the value range from the previous band's upper
//! bound (or the domain minimum) up to its own `max`; `inclusive` states
//! whether `max` itself still belongs to the band. Because only upper
//! bounds are stored, the table covers its domain with no gaps and no
//! overlaps by construction. The final band must be unbounded.

use crate::models::StatusTier;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Upper bound of the band. The last band uses `f64::INFINITY`
    /// (serialized as `.inf` in YAML).
    pub max: f64,
    /// Whether a value exactly equal to `max` falls in this band.
    #[serde(default)]
    pub inclusive: bool,
    pub tier: StatusTier,
    pub level: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub rationale: String,
}

impl Band {
    pub fn new(max: f64, inclusive: bool, tier: StatusTier, level: &str, rationale: &str) -> Self {
        Self {
            max,
            inclusive,
            tier,
            level: level.to_string(),
            recommendations: Vec::new(),
            rationale: rationale.to_string(),
        }
    }

    pub fn with_recommendations(mut self, recommendations: &[&str]) -> Self {
        self.recommendations = recommendations.iter().map(|r| r.to_string()).collect();
        self
    }
}

/// An ordered, validated set of bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Band>", into = "Vec<Band>")]
pub struct BandTable {
    bands: Vec<Band>,
}

impl BandTable {
    /// Build a table, enforcing strictly ascending upper bounds, at least
    /// one band, and an unbounded final band.
    pub fn new(bands: Vec<Band>) -> Result<Self, String> {
        if bands.is_empty() {
            return Err("band table must contain at least one band".to_string());
        }
        for pair in bands.windows(2) {
            if pair[0].max >= pair[1].max {
                return Err(format!(
                    "band bounds must be strictly ascending: {} then {}",
                    pair[0].max, pair[1].max
                ));
            }
            if !pair[0].max.is_finite() {
                return Err("only the final band may be unbounded".to_string());
            }
        }
        let last = bands.last().map(|b| b.max);
        if last != Some(f64::INFINITY) {
            return Err("the final band must be unbounded (max = infinity)".to_string());
        }
        Ok(Self { bands })
    }

    /// The band a value falls in. Exactly one band matches any finite value.
    pub fn classify(&self, value: f64) -> &Band {
        for band in &self.bands {
            if value < band.max || (band.inclusive && value == band.max) {
                return band;
            }
        }
        // The final band is unbounded, so any finite value matched above.
        self.bands
            .last()
            .unwrap_or_else(|| unreachable!("band tables are never empty"))
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }
}

impl TryFrom<Vec<Band>> for BandTable {
    type Error = String;

    fn try_from(bands: Vec<Band>) -> Result<Self, Self::Error> {
        BandTable::new(bands)
    }
}

impl From<BandTable> for Vec<Band> {
    fn from(table: BandTable) -> Self {
        table.bands
    }
}
