use thiserror::Error;

#[derive(Error, Debug)]
pub enum AquaOpsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Empty sample: at least one parameter value is required")]
    EmptySample,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AquaOpsError>;
