//! Roll-up of per-parameter results into one overall assessment.

use crate::error::{AquaOpsError, Result};
use crate::models::{AnalysisResult, OverallAssessment, Parameter, Priority, StatusTier};

/// Score at or above which the overall tier is excellent and maintenance
/// guidance is added.
const EXCELLENT_SCORE: f64 = 4.5;
const GOOD_SCORE: f64 = 3.5;
/// More warnings than this escalate the overall tier to warning even when
/// the score alone would read higher.
const WARNING_COUNT_LIMIT: usize = 2;

/// Combine a non-empty set of analysis results. All parameters weigh
/// equally; a single danger finding dominates everything else.
pub fn aggregate(results: &[AnalysisResult]) -> Result<OverallAssessment> {
    if results.is_empty() {
        return Err(AquaOpsError::EmptySample);
    }

    let score =
        results.iter().map(|r| r.tier.points()).sum::<f64>() / results.len() as f64;

    let danger_parameters: Vec<Parameter> = results
        .iter()
        .filter(|r| r.tier == StatusTier::Danger)
        .map(|r| r.parameter)
        .collect();
    let warning_parameters: Vec<Parameter> = results
        .iter()
        .filter(|r| r.tier == StatusTier::Warning)
        .map(|r| r.parameter)
        .collect();

    let many_warnings = warning_parameters.len() > WARNING_COUNT_LIMIT;

    let tier = if !danger_parameters.is_empty() {
        StatusTier::Danger
    } else if many_warnings {
        StatusTier::Warning
    } else if score >= EXCELLENT_SCORE {
        StatusTier::Excellent
    } else if score >= GOOD_SCORE {
        StatusTier::Good
    } else {
        StatusTier::Warning
    };

    let priority = if tier == StatusTier::Danger {
        Priority::Critical
    } else if many_warnings {
        Priority::High
    } else if score >= EXCELLENT_SCORE {
        Priority::Routine
    } else if score >= GOOD_SCORE {
        Priority::Moderate
    } else {
        Priority::High
    };

    let worst = results
        .iter()
        .map(|r| r.tier)
        .max()
        .unwrap_or(StatusTier::Excellent);

    let mut recommendations = Vec::new();
    if !danger_parameters.is_empty() {
        recommendations.push(
            "Emergency: perform an immediate 50% water change with temperature-matched, \
             dechlorinated water"
                .to_string(),
        );
        for result in results.iter().filter(|r| r.tier == StatusTier::Danger) {
            recommendations.extend(result.recommendations.iter().cloned());
        }
    }
    if !warning_parameters.is_empty() {
        recommendations
            .push("Schedule a 25-30% water change within 24 hours".to_string());
        for result in results.iter().filter(|r| r.tier == StatusTier::Warning) {
            recommendations.extend(result.recommendations.iter().cloned());
        }
    }
    if score >= EXCELLENT_SCORE {
        recommendations.push(
            "Parameters are in good shape; keep the current maintenance schedule".to_string(),
        );
    }
    recommendations.push(retest_suggestion(worst).to_string());

    dedup_preserving_order(&mut recommendations);

    Ok(OverallAssessment {
        score,
        tier,
        priority,
        danger_parameters,
        warning_parameters,
        recommendations,
    })
}

/// Retest interval scales with the worst finding.
fn retest_suggestion(worst: StatusTier) -> &'static str {
    match worst {
        StatusTier::Danger => "Retest the affected parameters in 6-12 hours",
        StatusTier::Warning => "Retest the affected parameters in 24 hours",
        _ => "Retest in 48-72 hours",
    }
}

fn dedup_preserving_order(items: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Parameter;

    fn result(parameter: Parameter, tier: StatusTier, recs: &[&str]) -> AnalysisResult {
        AnalysisResult {
            parameter,
            value: 1.0,
            tier,
            level: tier.as_str().to_lowercase(),
            recommendations: recs.iter().map(|r| r.to_string()).collect(),
            rationale: String::new(),
            derived: None,
        }
    }

    #[test]
    fn empty_input_fails_fast() {
        assert!(matches!(aggregate(&[]), Err(AquaOpsError::EmptySample)));
    }

    #[test]
    fn any_danger_dominates() {
        // One danger against four excellent results still rolls up to danger.
        let results = vec![
            result(Parameter::Ph, StatusTier::Excellent, &[]),
            result(Parameter::Temperature, StatusTier::Excellent, &[]),
            result(Parameter::Nitrate, StatusTier::Excellent, &[]),
            result(Parameter::Oxygen, StatusTier::Excellent, &[]),
            result(Parameter::Ammonia, StatusTier::Danger, &["act"]),
        ];
        let overall = aggregate(&results).unwrap();
        assert_eq!(overall.tier, StatusTier::Danger);
        assert_eq!(overall.priority, Priority::Critical);
        assert_eq!(overall.danger_parameters, vec![Parameter::Ammonia]);
        assert!(overall.recommendations[0].starts_with("Emergency"));
    }

    #[test]
    fn three_warnings_escalate_to_warning() {
        let results = vec![
            result(Parameter::Ph, StatusTier::Warning, &[]),
            result(Parameter::Nitrite, StatusTier::Warning, &[]),
            result(Parameter::Nitrate, StatusTier::Warning, &[]),
            result(Parameter::Oxygen, StatusTier::Excellent, &[]),
            result(Parameter::Temperature, StatusTier::Excellent, &[]),
        ];
        let overall = aggregate(&results).unwrap();
        assert_eq!(overall.tier, StatusTier::Warning);
        assert_eq!(overall.priority, Priority::High);
    }

    #[test]
    fn two_warnings_do_not_escalate() {
        // Score: (2+2+5+5+5+5)/6 = 4.0 -> good.
        let results = vec![
            result(Parameter::Ph, StatusTier::Warning, &[]),
            result(Parameter::Nitrite, StatusTier::Warning, &[]),
            result(Parameter::Nitrate, StatusTier::Excellent, &[]),
            result(Parameter::Oxygen, StatusTier::Excellent, &[]),
            result(Parameter::Temperature, StatusTier::Excellent, &[]),
            result(Parameter::Copper, StatusTier::Excellent, &[]),
        ];
        let overall = aggregate(&results).unwrap();
        assert_eq!(overall.tier, StatusTier::Good);
        assert_eq!(overall.priority, Priority::Moderate);
    }

    #[test]
    fn score_thresholds() {
        // All excellent: 5.0 -> excellent, routine priority.
        let excellent = vec![
            result(Parameter::Ph, StatusTier::Excellent, &[]),
            result(Parameter::Oxygen, StatusTier::Excellent, &[]),
        ];
        let overall = aggregate(&excellent).unwrap();
        assert_eq!(overall.score, 5.0);
        assert_eq!(overall.tier, StatusTier::Excellent);
        assert_eq!(overall.priority, Priority::Routine);

        // Excellent + good: 4.5 -> still excellent (inclusive threshold).
        let mixed = vec![
            result(Parameter::Ph, StatusTier::Excellent, &[]),
            result(Parameter::Nitrate, StatusTier::Good, &[]),
        ];
        assert_eq!(aggregate(&mixed).unwrap().tier, StatusTier::Excellent);

        // Good + warning: 3.0 -> warning via score, high priority.
        let low = vec![
            result(Parameter::Ph, StatusTier::Good, &[]),
            result(Parameter::Nitrate, StatusTier::Warning, &[]),
        ];
        let overall = aggregate(&low).unwrap();
        assert_eq!(overall.tier, StatusTier::Warning);
        assert_eq!(overall.priority, Priority::High);
    }

    #[test]
    fn recommendations_ordered_and_deduplicated() {
        let results = vec![
            result(Parameter::Ammonia, StatusTier::Danger, &["water change", "stop feeding"]),
            result(Parameter::Nitrite, StatusTier::Danger, &["water change", "aerate"]),
            result(Parameter::Ph, StatusTier::Warning, &["check KH"]),
        ];
        let overall = aggregate(&results).unwrap();
        let recs = &overall.recommendations;
        assert!(recs[0].starts_with("Emergency"));
        // Danger recommendations precede warning ones; duplicates collapse
        // to the first occurrence.
        assert_eq!(
            recs.iter().filter(|r| r.as_str() == "water change").count(),
            1
        );
        let pos = |needle: &str| recs.iter().position(|r| r.contains(needle)).unwrap();
        assert!(pos("stop feeding") < pos("check KH"));
        assert!(recs.last().unwrap().contains("6-12 hours"));
    }

    #[test]
    fn retest_interval_tracks_worst_tier() {
        let warning_only = vec![result(Parameter::Ph, StatusTier::Warning, &[])];
        assert!(aggregate(&warning_only)
            .unwrap()
            .recommendations
            .last()
            .unwrap()
            .contains("24 hours"));

        let calm = vec![result(Parameter::Ph, StatusTier::Excellent, &[])];
        assert!(aggregate(&calm)
            .unwrap()
            .recommendations
            .last()
            .unwrap()
            .contains("48-72 hours"));
    }

    #[test]
    fn maintenance_guidance_only_when_excellent() {
        let calm = vec![result(Parameter::Ph, StatusTier::Excellent, &[])];
        assert!(aggregate(&calm)
            .unwrap()
            .recommendations
            .iter()
            .any(|r| r.contains("maintenance schedule")));

        let noisy = vec![result(Parameter::Ph, StatusTier::Warning, &[])];
        assert!(!aggregate(&noisy)
            .unwrap()
            .recommendations
            .iter()
            .any(|r| r.contains("maintenance schedule")));
    }
}
