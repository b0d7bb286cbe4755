mod cli;
mod config;
mod error;
mod logic;
mod models;
mod report;

use anyhow::{anyhow, Context};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logic::WaterAnalyzer;
use models::{
    FixtureType, MediaType, Parameter, PlantLightDemand, SampleKind, StarterCulture,
    TankDimensions, TestSample,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; -v flags raise the default level, RUST_LOG wins.
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Init => {
            Config::setup_interactive().context("interactive setup failed")?;
            Ok(())
        }
        Commands::Check => check(cli.config),
        Commands::Analyze(args) => analyze(cli.config, args),
        Commands::Bioload(args) => bioload(cli.config, args),
        Commands::Aeration(args) => {
            let demand = logic::aeration_demand(args.load, args.efficiency)?;
            print!("{}", report::render_aeration(&demand));
            Ok(())
        }
        Commands::Maturation(args) => maturation(cli.config, args),
        Commands::Biofilter(args) => biofilter(cli.config, args),
        Commands::Lighting(args) => {
            let demand = PlantLightDemand::from_str(&args.plants).ok_or_else(|| {
                anyhow!(
                    "unknown plant demand '{}' (fish-only, low, medium, high, carpet)",
                    args.plants
                )
            })?;
            let fixture = FixtureType::from_str(&args.fixture).ok_or_else(|| {
                anyhow!("unknown fixture '{}' (led, budget-led, t5, t8, mh)", args.fixture)
            })?;
            let plan =
                logic::plan_lighting(args.length, args.width, args.depth, demand, fixture)?;
            print!("{}", report::render_lighting(&plan));
            Ok(())
        }
        Commands::Dli(args) => {
            let dli = logic::daily_light_integral_report(
                args.par,
                args.photoperiod,
                args.water_loss,
                args.shading,
            )?;
            print!("{}", report::render_dli(&dli));
            Ok(())
        }
        Commands::Tank(args) => {
            let dims = match (args.length, args.width, args.height) {
                (Some(length_cm), Some(width_cm), Some(height_cm)) => Some(TankDimensions {
                    length_cm,
                    width_cm,
                    height_cm,
                    glass_thickness_mm: args.glass,
                }),
                (None, None, None) => None,
                _ => {
                    return Err(anyhow!(
                        "tank dimensions need all of --length, --width, and --height"
                    ))
                }
            };
            let stats = logic::tank_stats(args.volume, dims.as_ref())?;
            print!("{}", report::render_tank(&stats));
            Ok(())
        }
    }
}

fn check(config_override: Option<std::path::PathBuf>) -> anyhow::Result<()> {
    let config = Config::load(config_override).context("config validation failed")?;
    println!(
        "Config OK: tank '{}' ({}, {} L)",
        config.tank.name, config.tank.tank_type, config.tank.volume_l
    );

    let analysis = config
        .analysis_config()
        .context("threshold table validation failed")?;
    println!(
        "Thresholds OK ({})",
        match config.thresholds {
            Some(path) => format!("override from {}", path.display()),
            None => "built-in".to_string(),
        }
    );
    // A throwaway classification exercises every table end to end.
    let band_count: usize = Parameter::ALL
        .iter()
        .map(|p| analysis.table(*p).bands().len())
        .sum();
    let analyzer = WaterAnalyzer::new(analysis);
    let context = logic::AnalysisContext {
        ph: Some(7.0),
        temperature_c: Some(25.0),
    };
    for parameter in Parameter::ALL {
        let probe = match parameter {
            Parameter::Ph => 7.0,
            Parameter::Temperature => 25.0,
            _ => 0.0,
        };
        analyzer
            .analyze(parameter, probe, &context)
            .with_context(|| format!("classification failed for {}", parameter))?;
    }
    println!(
        "Analyzers OK ({} parameters, {} bands)",
        Parameter::ALL.len(),
        band_count
    );
    Ok(())
}

fn analyze(config_override: Option<std::path::PathBuf>, args: cli::AnalyzeArgs) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_override)?;
    let analyzer = WaterAnalyzer::new(config.analysis_config()?);

    let kind = if args.full {
        SampleKind::Comprehensive
    } else {
        SampleKind::Quick
    };
    let mut sample = TestSample::new(kind);
    let readings = [
        (Parameter::Ph, args.ph),
        (Parameter::Temperature, args.temp),
        (Parameter::Ammonia, args.ammonia),
        (Parameter::Nitrite, args.nitrite),
        (Parameter::Nitrate, args.nitrate),
        (Parameter::Oxygen, args.oxygen),
        (Parameter::GeneralHardness, args.gh),
        (Parameter::CarbonateHardness, args.kh),
        (Parameter::Phosphate, args.phosphate),
        (Parameter::Copper, args.copper),
    ];
    for (parameter, value) in readings {
        if let Some(value) = value {
            sample = sample.with_value(parameter, value);
        }
    }

    if sample.is_empty() {
        return Err(anyhow!("no readings given; pass at least one, e.g. --ph 7.2"));
    }
    let water_report = analyzer.analyze_sample(&sample)?;

    if args.json {
        let json = serde_json::to_string_pretty(&water_report)
            .map_err(error::AquaOpsError::from)?;
        println!("{}", json);
    } else {
        print!("{}", report::render_water_report(&water_report));
    }
    Ok(())
}

fn bioload(config_override: Option<std::path::PathBuf>, args: cli::BioloadArgs) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_override)?;
    let volume = args.volume.unwrap_or(config.tank.volume_l);
    let temp = args
        .temp
        .or(config.tank.temperature_c)
        .unwrap_or(25.0);

    let estimate = logic::estimate_bioload(args.biomass, args.feed, volume, temp)?;
    print!("{}", report::render_bioload(&estimate));
    Ok(())
}

fn maturation(
    config_override: Option<std::path::PathBuf>,
    args: cli::MaturationArgs,
) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_override)?;
    let starter = StarterCulture::from_str(&args.starter).ok_or_else(|| {
        anyhow!(
            "unknown starter culture '{}' (none, commercial, seeded)",
            args.starter
        )
    })?;
    let temp = args
        .temp
        .or(config.tank.temperature_c)
        .unwrap_or(25.0);
    let surface = args
        .surface
        .or(config.tank.media_surface_cm2)
        .unwrap_or(10_000.0);

    let forecast = logic::forecast_maturation(temp, args.ph, starter, surface)?;
    print!("{}", report::render_maturation(&forecast));
    Ok(())
}

fn biofilter(
    config_override: Option<std::path::PathBuf>,
    args: cli::BiofilterArgs,
) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_override)?;
    let media = MediaType::from_str(&args.media).ok_or_else(|| {
        anyhow!(
            "unknown media type '{}' (ceramic, bio-balls, sintered-glass, lava, plastic, sponge)",
            args.media
        )
    })?;
    let flow = args
        .flow
        .or(config.tank.filter_flow_l_per_h)
        .unwrap_or(config.tank.volume_l * 3.0);

    let sizing = logic::size_biofilter(args.load, media, flow)?;
    print!("{}", report::render_biofilter(&sizing));
    Ok(())
}
