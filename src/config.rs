use crate::error::{AquaOpsError, Result};
use crate::logic::AnalysisConfig;
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub tank: TankConfig,
    /// Optional path to a YAML file overriding the built-in analysis
    /// threshold tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<PathBuf>,
}

/// Tank profile used as defaults for the calculators.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TankConfig {
    pub name: String,
    pub volume_l: f64,
    pub tank_type: String,
    pub temperature_c: Option<f64>,
    pub filter_flow_l_per_h: Option<f64>,
    pub media_surface_cm2: Option<f64>,
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(AquaOpsError::Config(format!(
                "Config file not found at {:?}. Run `aquaops init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AquaOpsError::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| AquaOpsError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Load the config if one exists in a standard location, otherwise fall
    /// back to defaults. The calculators work without a saved profile.
    pub fn load_or_default(config_override: Option<PathBuf>) -> Result<Self> {
        if Self::exists(config_override.as_ref()) {
            Self::load(config_override)
        } else {
            tracing::debug!("no config file found; using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("aquaops").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        // Return XDG path as the default (will trigger "not found" in load)
        let default_path = dirs::config_dir()
            .ok_or_else(|| AquaOpsError::Config("Cannot determine config directory".into()))?
            .join("aquaops")
            .join("config.yaml");
        Ok(default_path)
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/aquaops/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AquaOpsError::Config("Cannot determine config directory".into()))?
            .join("aquaops");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("No configuration found. Let's set up AquaOps!");
        println!();

        println!("Tank Profile");
        let name: String = Input::new()
            .with_prompt("  Tank name")
            .default("Main Tank".into())
            .interact_text()
            .map_err(|e| AquaOpsError::Config(format!("Input error: {}", e)))?;

        let volume_l: f64 = Input::new()
            .with_prompt("  Volume (litres)")
            .default(100.0)
            .interact_text()
            .map_err(|e| AquaOpsError::Config(format!("Input error: {}", e)))?;

        let tank_type: String = Input::new()
            .with_prompt("  Tank type (community, planted, cichlid, shrimp, ...)")
            .default("community".into())
            .interact_text()
            .map_err(|e| AquaOpsError::Config(format!("Input error: {}", e)))?;

        let temperature_c: f64 = Input::new()
            .with_prompt("  Typical temperature (°C)")
            .default(25.0)
            .interact_text()
            .map_err(|e| AquaOpsError::Config(format!("Input error: {}", e)))?;

        let filter_flow: f64 = Input::new()
            .with_prompt("  Filter flow (L/h)")
            .default(volume_l * 3.0)
            .interact_text()
            .map_err(|e| AquaOpsError::Config(format!("Input error: {}", e)))?;

        let media_surface: f64 = Input::new()
            .with_prompt("  Biomedia surface (cm²)")
            .default(10_000.0)
            .interact_text()
            .map_err(|e| AquaOpsError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            tank: TankConfig {
                name,
                volume_l,
                tank_type,
                temperature_c: Some(temperature_c),
                filter_flow_l_per_h: Some(filter_flow),
                media_surface_cm2: Some(media_surface),
            },
            thresholds: None,
        };

        // Write to default config path
        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AquaOpsError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# AquaOps Configuration\n# Generated by `aquaops init`\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    /// Analysis thresholds: the override file when configured, the built-in
    /// tables otherwise.
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        match &self.thresholds {
            Some(path) => AnalysisConfig::from_yaml_file(path),
            None => Ok(AnalysisConfig::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tank: TankConfig {
                name: "Main Tank".into(),
                volume_l: 100.0,
                tank_type: "community".into(),
                temperature_c: Some(25.0),
                filter_flow_l_per_h: Some(300.0),
                media_surface_cm2: Some(10_000.0),
            },
            thresholds: None,
        }
    }
}
