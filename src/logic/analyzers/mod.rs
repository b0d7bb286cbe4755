//! Per-parameter water analyzers.
//!
//! Each analyzer is a band table (one module per parameter) plus the
//! generic lookup in `logic::bands`. The engine owns an immutable
//! `AnalysisConfig` injected at construction, so tests and power users can
//! substitute alternate threshold tables without touching globals.

pub mod ammonia;
pub mod copper;
pub mod hardness;
pub mod nitrate;
pub mod nitrite;
pub mod oxygen;
pub mod ph;
pub mod phosphate;
pub mod temperature;

pub use ammonia::FreeAmmoniaLimits;

use crate::error::Result;
use crate::logic::{aggregate, bands::BandTable, formulas};
use crate::models::{
    AnalysisResult, DerivedValue, Parameter, StatusTier, TestSample, WaterReport,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional context for analyzers whose chemistry depends on other
/// parameters. Missing fields degrade the result (derived figure omitted),
/// they never fail it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalysisContext {
    pub ph: Option<f64>,
    pub temperature_c: Option<f64>,
}

impl AnalysisContext {
    pub fn from_sample(sample: &TestSample) -> Self {
        Self {
            ph: sample.get(Parameter::Ph),
            temperature_c: sample.get(Parameter::Temperature),
        }
    }
}

/// Complete set of classification tables. Immutable once constructed.
/// A YAML override file may name only the tables it changes; the rest
/// keep their built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub ph: BandTable,
    pub temperature: BandTable,
    pub ammonia: BandTable,
    pub nitrite: BandTable,
    pub nitrate: BandTable,
    pub oxygen: BandTable,
    pub general_hardness: BandTable,
    pub carbonate_hardness: BandTable,
    pub phosphate: BandTable,
    pub copper: BandTable,
    pub free_ammonia: FreeAmmoniaLimits,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ph: ph::bands(),
            temperature: temperature::bands(),
            ammonia: ammonia::bands(),
            nitrite: nitrite::bands(),
            nitrate: nitrate::bands(),
            oxygen: oxygen::bands(),
            general_hardness: hardness::gh_bands(),
            carbonate_hardness: hardness::kh_bands(),
            phosphate: phosphate::bands(),
            copper: copper::bands(),
            free_ammonia: FreeAmmoniaLimits::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn table(&self, parameter: Parameter) -> &BandTable {
        match parameter {
            Parameter::Ph => &self.ph,
            Parameter::Temperature => &self.temperature,
            Parameter::Ammonia => &self.ammonia,
            Parameter::Nitrite => &self.nitrite,
            Parameter::Nitrate => &self.nitrate,
            Parameter::Oxygen => &self.oxygen,
            Parameter::GeneralHardness => &self.general_hardness,
            Parameter::CarbonateHardness => &self.carbonate_hardness,
            Parameter::Phosphate => &self.phosphate,
            Parameter::Copper => &self.copper,
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }
}

/// The analysis engine: classifies single readings and whole samples.
#[derive(Debug, Clone, Default)]
pub struct WaterAnalyzer {
    config: AnalysisConfig,
}

impl WaterAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Classify one reading. `context` supplies pH/temperature for the
    /// ammonia and oxygen derived figures.
    pub fn analyze(
        &self,
        parameter: Parameter,
        value: f64,
        context: &AnalysisContext,
    ) -> Result<AnalysisResult> {
        parameter.validate(value)?;

        let band = self.config.table(parameter).classify(value);
        let mut result = AnalysisResult {
            parameter,
            value,
            tier: band.tier,
            level: band.level.clone(),
            recommendations: band.recommendations.clone(),
            rationale: band.rationale.clone(),
            derived: None,
        };

        match parameter {
            Parameter::Ammonia => self.attach_free_ammonia(&mut result, context),
            Parameter::Oxygen => self.attach_saturation(&mut result, context),
            _ => {}
        }

        Ok(result)
    }

    /// Analyze every parameter present in a sample (in `Parameter::ALL`
    /// order) and roll the results up into an overall assessment.
    pub fn analyze_sample(&self, sample: &TestSample) -> Result<WaterReport> {
        sample.validate()?;
        let context = AnalysisContext::from_sample(sample);

        let mut results = Vec::new();
        for parameter in Parameter::ALL {
            if let Some(value) = sample.get(parameter) {
                results.push(self.analyze(parameter, value, &context)?);
            }
        }

        let overall = aggregate::aggregate(&results)?;
        Ok(WaterReport {
            taken_at: sample.taken_at,
            kind: sample.kind,
            results,
            overall,
        })
    }

    fn attach_free_ammonia(&self, result: &mut AnalysisResult, context: &AnalysisContext) {
        let (Some(ph), Some(temp)) = (context.ph, context.temperature_c) else {
            tracing::debug!(
                "ammonia analyzed without pH/temperature context; free NH3 not computed"
            );
            result.rationale.push_str(
                " Un-ionized fraction not computed: pH or temperature missing from \
                 this sample.",
            );
            return;
        };

        let fraction = formulas::free_ammonia_fraction(ph, temp);
        let free = formulas::free_ammonia(result.value, ph, temp);
        result.derived = Some(DerivedValue::FreeAmmonia {
            mg_per_l: free,
            fraction_percent: fraction * 100.0,
        });
        result.rationale.push_str(&format!(
            " Un-ionized NH3 at pH {:.2} and {:.1} °C (pKa {:.2}): {:.4} mg/L, \
             {:.2}% of total.",
            ph,
            temp,
            formulas::ammonia_pka(temp),
            free,
            fraction * 100.0
        ));

        let escalated = self.config.free_ammonia.tier(free);
        if escalated > result.tier {
            result.tier = escalated;
            result.level = match escalated {
                StatusTier::Danger => "toxic free ammonia".to_string(),
                _ => "elevated free ammonia".to_string(),
            };
            let mut recommendations = vec![
                "Emergency water change of 50-75% with temperature-matched water".to_string(),
                "Nudge pH below 7.5 if practical; ionized ammonium is far less toxic"
                    .to_string(),
            ];
            recommendations.append(&mut result.recommendations);
            result.recommendations = recommendations;
        }
    }

    fn attach_saturation(&self, result: &mut AnalysisResult, context: &AnalysisContext) {
        let Some(temp) = context.temperature_c else {
            tracing::debug!(
                "oxygen analyzed without temperature context; saturation not computed"
            );
            result.rationale.push_str(
                " Percent saturation not computed: temperature missing from this sample.",
            );
            return;
        };

        let saturation = formulas::oxygen_saturation(temp);
        let percent = formulas::oxygen_saturation_percent(result.value, temp);
        result.derived = Some(DerivedValue::OxygenSaturation {
            percent,
            saturation_mg_per_l: saturation,
        });
        result.rationale.push_str(&format!(
            " Measured O2 is {:.0}% of the {:.1} mg/L solubility limit at {:.1} °C.",
            percent, saturation, temp
        ));
    }
}
