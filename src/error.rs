use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NonPositiveTickRate(f32),
    TickRateTooLow { rate: f32, min: f32 },
    EmptyField { width: f32, height: f32 },
    NegativeBorder(f32),
    Io { path: PathBuf, message: String },
    Parse { path: PathBuf, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveTickRate(rate) => {
                write!(f, "target tick rate must be a positive number, got {rate}")
            }
            Self::TickRateTooLow { rate, min } => {
                write!(f, "target tick rate must be at least {min}, got {rate}")
            }
            Self::EmptyField { width, height } => {
                write!(f, "field must have positive size, got {width}x{height}")
            }
            Self::NegativeBorder(border) => {
                write!(f, "border must not be negative, got {border}")
            }
            Self::Io { path, message } => {
                write!(f, "cannot read config {}: {message}", path.display())
            }
            Self::Parse { path, message } => {
                write!(f, "invalid config {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}
