//! Error handling for the ATS checker

use thiserror::Error;

/// Message shown to the user when the evaluation itself fails.
pub const GENERIC_ANALYSIS_FAILURE: &str = "Error analyzing resume. Please try again.";

#[derive(Error, Debug)]
pub enum AtsCheckerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Please provide your resume content.")]
    EmptyResume,

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("File size must be less than {} ({} is {} bytes)", format_byte_limit(*.limit), .path, .size)]
    FileTooLarge {
        path: String,
        size: u64,
        limit: u64,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, AtsCheckerError>;

/// Render a byte limit in the largest unit that divides it exactly.
pub fn format_byte_limit(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if bytes >= MB && bytes % MB == 0 {
        format!("{}MB", bytes / MB)
    } else if bytes >= KB && bytes % KB == 0 {
        format!("{}KB", bytes / KB)
    } else {
        format!("{} bytes", bytes)
    }
}

/// One-line description of a failed command for the terminal.
///
/// Analysis failures print the generic message. Everything else prints the
/// whole context chain, so a failed read still names the file.
pub fn describe_failure(err: &anyhow::Error) -> String {
    match err.downcast_ref::<AtsCheckerError>() {
        Some(inner) if inner.is_analysis_error() => GENERIC_ANALYSIS_FAILURE.to_string(),
        _ => format!("{:#}", err),
    }
}

impl AtsCheckerError {
    /// Errors caused by what the user handed in. Evaluation is never attempted for these.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AtsCheckerError::EmptyResume
                | AtsCheckerError::UnsupportedFormat(_)
                | AtsCheckerError::FileTooLarge { .. }
                | AtsCheckerError::InvalidInput(_)
        )
    }

    /// Unexpected failures inside the evaluator.
    pub fn is_analysis_error(&self) -> bool {
        matches!(self, AtsCheckerError::AnalysisFailed(_) | AtsCheckerError::Processing(_))
    }

    /// Text suitable for showing to an end user.
    ///
    /// Input errors carry their own message; analysis failures collapse into a
    /// single generic line.
    pub fn user_message(&self) -> String {
        if self.is_analysis_error() {
            GENERIC_ANALYSIS_FAILURE.to_string()
        } else {
            self.to_string()
        }
    }
}

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for AtsCheckerError {
    fn from(err: anyhow::Error) -> Self {
        AtsCheckerError::AnalysisFailed(err.to_string())
    }
}
