pub mod aggregate;
pub mod analyzers;
pub mod bands;
pub mod biofilter;
pub mod bioload;
pub mod formulas;
pub mod lighting;
pub mod maturation;
pub mod tank;

pub use aggregate::aggregate;
pub use analyzers::{AnalysisConfig, AnalysisContext, WaterAnalyzer};
pub use biofilter::size_biofilter;
pub use bioload::{aeration_demand, estimate_bioload};
pub use lighting::{daily_light_integral_report, plan_lighting};
pub use maturation::forecast_maturation;
pub use tank::tank_stats;
