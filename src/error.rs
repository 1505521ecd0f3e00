use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid log filter '{directives}': {reason}")]
    LogFilter { directives: String, reason: String },

    #[error("Model error: {0}")]
    Model(String),

    #[error("Unknown housing type: {value}")]
    UnknownHousingType { value: String },

    #[error("Invalid value for {field}: '{value}' is not an integer")]
    InvalidNumber { field: String, value: String },

    #[error("Missing form field: {field}")]
    MissingField { field: String },

    #[error("Unexpected prediction output: {0}")]
    PredictionShape(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    pub fn prediction_shape(msg: impl Into<String>) -> Self {
        Self::PredictionShape(msg.into())
    }
}
