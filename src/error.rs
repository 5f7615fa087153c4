use std::process::ExitCode;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Please provide a set of numbers.")]
    EmptyInput,
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unable to write output. Reason: `{0}`.")]
    Io(#[from] std::io::Error),
    #[error("Unable to render result as JSON. Reason: `{0}`.")]
    Render(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StatsError>;

/// Process exit status of the `stats` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    Failure = 1,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl From<ExitStatus> for i32 {
    fn from(status: ExitStatus) -> Self {
        status as i32
    }
}

impl From<&StatsError> for ExitStatus {
    fn from(err: &StatsError) -> Self {
        match err {
            StatsError::EmptyInput
            | StatsError::InvalidNumber(_)
            | StatsError::Io(_)
            | StatsError::Render(_) => ExitStatus::Failure,
        }
    }
}
