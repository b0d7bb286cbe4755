use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aquaops", version, about = "Aquarium water quality analysis toolkit")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Re-run interactive setup
    Init,
    /// Validate config and threshold tables
    Check,
    /// Analyze water test readings
    Analyze(AnalyzeArgs),
    /// Estimate ammonia production from stocking and feeding
    Bioload(BioloadArgs),
    /// Aeration needed to nitrify an ammonia load
    Aeration(AerationArgs),
    /// Forecast biofilter maturation time
    Maturation(MaturationArgs),
    /// Size biofilter media for an ammonia load
    Biofilter(BiofilterArgs),
    /// Plan fixture wattage for a tank and plant demand
    Lighting(LightingArgs),
    /// Classify a Daily Light Integral
    Dli(DliArgs),
    /// Tank volume, weight, and equipment sizing
    Tank(TankArgs),
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// pH reading
    #[arg(long)]
    pub ph: Option<f64>,

    /// Water temperature, °C
    #[arg(long)]
    pub temp: Option<f64>,

    /// Total ammonia NH3/NH4, mg/L
    #[arg(long)]
    pub ammonia: Option<f64>,

    /// Nitrite NO2, mg/L
    #[arg(long)]
    pub nitrite: Option<f64>,

    /// Nitrate NO3, mg/L
    #[arg(long)]
    pub nitrate: Option<f64>,

    /// Dissolved oxygen, mg/L
    #[arg(long)]
    pub oxygen: Option<f64>,

    /// General hardness, °dH
    #[arg(long)]
    pub gh: Option<f64>,

    /// Carbonate hardness, °dH
    #[arg(long)]
    pub kh: Option<f64>,

    /// Phosphate PO4, mg/L
    #[arg(long)]
    pub phosphate: Option<f64>,

    /// Copper Cu, mg/L
    #[arg(long)]
    pub copper: Option<f64>,

    /// Record as a comprehensive (full panel) test
    #[arg(long)]
    pub full: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct BioloadArgs {
    /// Total fish biomass, grams
    #[arg(long)]
    pub biomass: f64,

    /// Daily dry feed, grams
    #[arg(long, default_value_t = 0.0)]
    pub feed: f64,

    /// Water volume, litres (defaults to the tank profile)
    #[arg(long)]
    pub volume: Option<f64>,

    /// Water temperature, °C (defaults to the tank profile)
    #[arg(long)]
    pub temp: Option<f64>,
}

#[derive(Args)]
pub struct AerationArgs {
    /// NH3-N load, mg per day
    #[arg(long)]
    pub load: f64,

    /// Nitrification efficiency, percent
    #[arg(long, default_value_t = 85.0)]
    pub efficiency: f64,
}

#[derive(Args)]
pub struct MaturationArgs {
    /// Water temperature, °C (defaults to the tank profile)
    #[arg(long)]
    pub temp: Option<f64>,

    /// Water pH
    #[arg(long, default_value_t = 7.5)]
    pub ph: f64,

    /// Starter culture: none, commercial, seeded
    #[arg(long, default_value = "none")]
    pub starter: String,

    /// Biomedia surface, cm² (defaults to the tank profile)
    #[arg(long)]
    pub surface: Option<f64>,
}

#[derive(Args)]
pub struct BiofilterArgs {
    /// NH3-N load, mg per day
    #[arg(long)]
    pub load: f64,

    /// Media type: ceramic, bio-balls, sintered-glass, lava, plastic, sponge
    #[arg(long, default_value = "ceramic")]
    pub media: String,

    /// Flow through the filter, L/h (defaults to the tank profile)
    #[arg(long)]
    pub flow: Option<f64>,
}

#[derive(Args)]
pub struct LightingArgs {
    /// Tank length, cm
    #[arg(long)]
    pub length: f64,

    /// Tank width, cm
    #[arg(long)]
    pub width: f64,

    /// Water depth, cm
    #[arg(long)]
    pub depth: f64,

    /// Plant demand: fish-only, low, medium, high, carpet
    #[arg(long, default_value = "medium")]
    pub plants: String,

    /// Fixture: led, budget-led, t5, t8, mh
    #[arg(long, default_value = "led")]
    pub fixture: String,
}

#[derive(Args)]
pub struct DliArgs {
    /// PAR at the fixture, μmol/m²/s
    #[arg(long)]
    pub par: f64,

    /// Photoperiod, hours per day
    #[arg(long)]
    pub photoperiod: f64,

    /// Loss at the water surface, percent
    #[arg(long, default_value_t = 10.0)]
    pub water_loss: f64,

    /// Loss from plant shading, percent
    #[arg(long, default_value_t = 15.0)]
    pub shading: f64,
}

#[derive(Args)]
pub struct TankArgs {
    /// Known volume, litres (otherwise computed from dimensions)
    #[arg(long)]
    pub volume: Option<f64>,

    /// Tank length, cm
    #[arg(long)]
    pub length: Option<f64>,

    /// Tank width, cm
    #[arg(long)]
    pub width: Option<f64>,

    /// Tank height, cm
    #[arg(long)]
    pub height: Option<f64>,

    /// Glass thickness, mm
    #[arg(long, default_value_t = 6.0)]
    pub glass: f64,
}
