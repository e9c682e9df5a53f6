use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid time speed: {speed} (expected 1..=1000)")]
    InvalidTimeSpeed { speed: u32 },

    #[error("Invalid frame rate: {hz} Hz")]
    InvalidFrameRate { hz: u32 },

    #[error("Unknown intervention '{key}'")]
    UnknownIntervention { key: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
