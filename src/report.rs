//! Plain-text rendering of analysis output for the CLI.

use crate::models::{
    AerationDemand, BioloadEstimate, BiofilterSizing, DerivedValue, DliReport, LightingPlan,
    MaturationForecast, TankStats, WaterReport,
};
use std::fmt::Write;

pub fn render_water_report(report: &WaterReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} - {}",
        report.kind.as_str(),
        report.taken_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(out);

    for result in &report.results {
        let unit = result.parameter.unit();
        let _ = writeln!(
            out,
            "{} {}: {}{}{} - {}",
            result.tier.symbol(),
            result.parameter.as_str(),
            trim_float(result.value),
            if unit.is_empty() { "" } else { " " },
            unit,
            result.level
        );
        match &result.derived {
            Some(DerivedValue::FreeAmmonia {
                mg_per_l,
                fraction_percent,
            }) => {
                let _ = writeln!(
                    out,
                    "    free NH3: {:.4} mg/L ({:.2}% of total)",
                    mg_per_l, fraction_percent
                );
            }
            Some(DerivedValue::OxygenSaturation {
                percent,
                saturation_mg_per_l,
            }) => {
                let _ = writeln!(
                    out,
                    "    saturation: {:.0}% of {:.1} mg/L limit",
                    percent, saturation_mg_per_l
                );
            }
            None => {}
        }
    }

    let overall = &report.overall;
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Overall: {} (score {:.1}/5.0, priority {})",
        overall.tier,
        overall.score,
        overall.priority
    );
    if !overall.danger_parameters.is_empty() {
        let names: Vec<&str> = overall
            .danger_parameters
            .iter()
            .map(|p| p.as_str())
            .collect();
        let _ = writeln!(out, "Danger: {}", names.join(", "));
    }
    if !overall.warning_parameters.is_empty() {
        let names: Vec<&str> = overall
            .warning_parameters
            .iter()
            .map(|p| p.as_str())
            .collect();
        let _ = writeln!(out, "Warning: {}", names.join(", "));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Recommendations:");
    for (i, rec) in overall.recommendations.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, rec);
    }
    out
}

pub fn render_bioload(estimate: &BioloadEstimate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Bioload: {} ({})", estimate.level, estimate.tier);
    let _ = writeln!(
        out,
        "  NH3-N production:  {:.2} mg/day",
        estimate.ammonia_mg_per_day
    );
    let _ = writeln!(
        out,
        "  adjusted density:  {:.3} mg/L/day",
        estimate.density_mg_per_l_day
    );
    let _ = writeln!(
        out,
        "  oxygen demand:     {:.1} mg/day",
        estimate.oxygen_demand_mg_per_day
    );
    let _ = writeln!(
        out,
        "  filter flow:       ≥{:.0} L/h",
        estimate.required_flow_l_per_h
    );
    let _ = writeln!(
        out,
        "  biomedia surface:  ≥{:.0} cm²",
        estimate.required_surface_cm2
    );
    let _ = writeln!(out, "Recommendations:");
    for (i, rec) in estimate.recommendations.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, rec);
    }
    out
}

pub fn render_aeration(demand: &AerationDemand) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Nitrification oxygen demand: {} load", demand.level);
    let _ = writeln!(out, "  per day:   {:.1} mg O2", demand.oxygen_mg_per_day);
    let _ = writeln!(out, "  per hour:  {:.2} mg O2", demand.oxygen_mg_per_hour);
    let _ = writeln!(out, "  compressor: {}", demand.compressor);
    out
}

pub fn render_maturation(forecast: &MaturationForecast) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Biofilter maturation: about {} days to steady state",
        forecast.total_days
    );
    let _ = writeln!(
        out,
        "  ammonia oxidizers: {:.1} days",
        forecast.ammonia_oxidizer_days
    );
    let _ = writeln!(
        out,
        "  nitrite oxidizers: {:.1} days (includes nitrite lag)",
        forecast.nitrite_oxidizer_days
    );

    let phases = &forecast.phases;
    let lag_end = phases.lag_days;
    let exp_end = lag_end + phases.exponential_days;
    let _ = writeln!(out, "Phases:");
    if phases.lag_days > 0 {
        let _ = writeln!(out, "  lag:           days 1-{}", lag_end);
    }
    let _ = writeln!(
        out,
        "  exponential:   days {}-{}",
        lag_end + 1,
        exp_end
    );
    let _ = writeln!(
        out,
        "  stabilization: days {}-{}",
        exp_end + 1,
        phases.total()
    );
    let _ = writeln!(
        out,
        "{} {}",
        forecast.surface_tier.symbol(),
        forecast.surface_note
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Do not add fish before the forecast completes; test every 2-3 days.");
    out
}

pub fn render_biofilter(sizing: &BiofilterSizing) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Biofilter sizing ({})", sizing.media);
    let _ = writeln!(out, "  media volume:   {:.1} L", sizing.media_volume_l);
    let _ = writeln!(out, "  surface area:   {:.0} cm²", sizing.surface_area_cm2);
    let _ = writeln!(
        out,
        "  retention time: {:.1} min ({})",
        sizing.retention_minutes, sizing.contact_tier
    );
    let _ = writeln!(out, "{} {}", sizing.contact_tier.symbol(), sizing.contact_note);
    out
}

pub fn render_lighting(plan: &LightingPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Lighting plan");
    let _ = writeln!(out, "  surface area:  {:.2} m²", plan.surface_area_m2);
    let _ = writeln!(
        out,
        "  surface PAR:   {:.0}-{:.0} μmol/m²/s",
        plan.surface_par_min, plan.surface_par_max
    );
    let _ = writeln!(
        out,
        "  fixture power: {:.0}-{:.0} W",
        plan.watts_min, plan.watts_max
    );
    let _ = writeln!(out, "  photoperiod:   {:.0} h/day", plan.photoperiod_hours);
    for note in &plan.notes {
        let _ = writeln!(out, "  - {}", note);
    }
    out
}

pub fn render_dli(report: &DliReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "DLI: {:.1} mol/m²/day - {} ({})",
        report.dli_mol_m2_day, report.level, report.tier
    );
    let _ = writeln!(
        out,
        "  effective PAR after losses: {:.0} μmol/m²/s",
        report.effective_par
    );
    let _ = writeln!(out, "  {}", report.recommendation);
    out
}

pub fn render_tank(stats: &TankStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Tank: {:.1} L", stats.volume_l);
    let _ = writeln!(out, "  water weight: {:.1} kg", stats.water_weight_kg);
    if stats.glass_weight_kg > 0.0 {
        let _ = writeln!(out, "  glass weight: {:.1} kg", stats.glass_weight_kg);
    }
    let _ = writeln!(
        out,
        "  total weight: {:.1} kg ({})",
        stats.total_weight_kg, stats.stand
    );
    let _ = writeln!(out, "Equipment:");
    let _ = writeln!(out, "  heater:   {:.0} W", stats.heater_watts);
    let _ = writeln!(out, "  filter:   {:.0} L/h", stats.filter_flow_l_per_h);
    let _ = writeln!(out, "  lighting: {:.0} W LED", stats.lighting_watts);
    let _ = writeln!(out, "  air pump: {}", stats.air_pump_l_per_min);
    out
}

/// Print readings without trailing zeros ("7" not "7.000").
fn trim_float(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::WaterAnalyzer;
    use crate::models::{Parameter, SampleKind, TestSample};

    #[test]
    fn water_report_renders_sections() {
        let sample = TestSample::new(SampleKind::Quick)
            .with_value(Parameter::Ph, 8.6)
            .with_value(Parameter::Ammonia, 0.3)
            .with_value(Parameter::Temperature, 25.0);
        let report = WaterAnalyzer::default().analyze_sample(&sample).unwrap();
        let text = render_water_report(&report);
        assert!(text.contains("pH: 8.6"));
        assert!(text.contains("free NH3"));
        assert!(text.contains("Overall: Danger"));
        assert!(text.contains("Recommendations:"));
    }

    #[test]
    fn trim_float_drops_trailing_zeros() {
        assert_eq!(trim_float(7.0), "7");
        assert_eq!(trim_float(0.25), "0.25");
        assert_eq!(trim_float(0.125), "0.125");
    }

    #[test]
    fn maturation_phases_render_contiguously() {
        let forecast = crate::logic::forecast_maturation(
            25.0,
            7.5,
            crate::models::StarterCulture::None,
            10_000.0,
        )
        .unwrap();
        let text = render_maturation(&forecast);
        assert!(text.contains("days 1-3"));
        assert!(text.contains("days 4-20"));
        assert!(text.contains("days 21-28"));
    }
}
