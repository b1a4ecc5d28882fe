use thiserror::Error;

/// User-correctable problems with the two raw stitch counts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter both values.")]
    Missing,

    #[error("Please enter whole numbers only.")]
    NotWhole,

    #[error("Stitch counts must be positive integers.")]
    NotPositive,

    #[error("Stitch counts must be at most {max}.")]
    TooLarge { max: u32 },
}

#[derive(Error, Debug)]
pub enum StitchError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Input(#[from] InputError),
}

pub type SfResult<T> = Result<T, StitchError>;
