use crate::error::{AquaOpsError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recognized water parameters. Units are fixed per parameter:
/// pH unitless, temperature °C, hardness °dH, everything else mg/L.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Ph,
    Temperature,
    Ammonia,
    Nitrite,
    Nitrate,
    Oxygen,
    GeneralHardness,
    CarbonateHardness,
    Phosphate,
    Copper,
}

impl Parameter {
    /// All parameters in analysis order. Sample reports follow this order.
    pub const ALL: [Parameter; 10] = [
        Parameter::Ph,
        Parameter::Temperature,
        Parameter::Ammonia,
        Parameter::Nitrite,
        Parameter::Nitrate,
        Parameter::Oxygen,
        Parameter::GeneralHardness,
        Parameter::CarbonateHardness,
        Parameter::Phosphate,
        Parameter::Copper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Ph => "pH",
            Parameter::Temperature => "Temperature",
            Parameter::Ammonia => "Ammonia (NH3/NH4)",
            Parameter::Nitrite => "Nitrite (NO2)",
            Parameter::Nitrate => "Nitrate (NO3)",
            Parameter::Oxygen => "Dissolved Oxygen",
            Parameter::GeneralHardness => "General Hardness (GH)",
            Parameter::CarbonateHardness => "Carbonate Hardness (KH)",
            Parameter::Phosphate => "Phosphate (PO4)",
            Parameter::Copper => "Copper (Cu)",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Ph => "",
            Parameter::Temperature => "°C",
            Parameter::GeneralHardness | Parameter::CarbonateHardness => "°dH",
            _ => "mg/L",
        }
    }

    /// Physically possible value range. Values outside are rejected as
    /// InvalidInput before classification; values inside are classified,
    /// however extreme.
    pub fn physical_range(&self) -> (f64, f64) {
        match self {
            Parameter::Ph => (0.0, 14.0),
            Parameter::Temperature => (-273.15, f64::INFINITY),
            _ => (0.0, f64::INFINITY),
        }
    }

    /// Validate a raw reading for this parameter.
    pub fn validate(&self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(AquaOpsError::InvalidInput(format!(
                "{} reading must be a finite number, got {}",
                self.as_str(),
                value
            )));
        }
        let (min, max) = self.physical_range();
        if value < min || value > max {
            return Err(AquaOpsError::InvalidInput(format!(
                "{} reading {} is outside the physically possible range [{}, {}]",
                self.as_str(),
                value,
                min,
                max
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleKind {
    #[default]
    Quick,
    Comprehensive,
}

impl SampleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleKind::Quick => "Quick test",
            SampleKind::Comprehensive => "Comprehensive test",
        }
    }
}

/// A set of readings taken at one time. Keys are unique by construction;
/// only the parameters present are analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSample {
    pub taken_at: DateTime<Utc>,
    pub kind: SampleKind,
    pub values: BTreeMap<Parameter, f64>,
}

impl TestSample {
    pub fn new(kind: SampleKind) -> Self {
        Self {
            taken_at: Utc::now(),
            kind,
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, parameter: Parameter, value: f64) -> Self {
        self.values.insert(parameter, value);
        self
    }

    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        self.values.get(&parameter).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A sample with zero populated parameters is invalid and must be
    /// rejected before analysis.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(AquaOpsError::EmptySample);
        }
        for (parameter, value) in &self.values {
            parameter.validate(*value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sample_is_rejected() {
        let sample = TestSample::new(SampleKind::Quick);
        assert!(matches!(
            sample.validate(),
            Err(AquaOpsError::EmptySample)
        ));
    }

    #[test]
    fn non_finite_reading_is_rejected() {
        let sample = TestSample::new(SampleKind::Quick).with_value(Parameter::Ph, f64::NAN);
        assert!(matches!(
            sample.validate(),
            Err(AquaOpsError::InvalidInput(_))
        ));
    }

    #[test]
    fn physically_impossible_readings_are_rejected() {
        assert!(Parameter::Ph.validate(14.5).is_err());
        assert!(Parameter::Temperature.validate(-300.0).is_err());
        assert!(Parameter::Ammonia.validate(-0.1).is_err());

        assert!(Parameter::Ph.validate(7.0).is_ok());
        assert!(Parameter::Temperature.validate(-2.0).is_ok());
        assert!(Parameter::Nitrate.validate(500.0).is_ok());
    }

    #[test]
    fn duplicate_parameter_keeps_last_value() {
        let sample = TestSample::new(SampleKind::Quick)
            .with_value(Parameter::Ph, 6.8)
            .with_value(Parameter::Ph, 7.2);
        assert_eq!(sample.get(Parameter::Ph), Some(7.2));
        assert_eq!(sample.values.len(), 1);
    }

    #[test]
    fn units_are_fixed_per_parameter() {
        assert_eq!(Parameter::Ph.unit(), "");
        assert_eq!(Parameter::Temperature.unit(), "°C");
        assert_eq!(Parameter::GeneralHardness.unit(), "°dH");
        assert_eq!(Parameter::Ammonia.unit(), "mg/L");
    }
}
