//! ATS checker library
//!
//! Scores a resume for applicant-tracking-system compatibility from its raw
//! text and an optional job description.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{AtsCheckerError, Result};
pub use processing::analyzer::{AnalysisReport, ResumeAnalyzer};
pub use processing::session::EvaluationSession;

/// Evaluate a resume with a freshly built analyzer.
///
/// Build a [`ResumeAnalyzer`] once and reuse it when evaluating many resumes.
pub fn evaluate(resume_text: &str, job_description: &str) -> Result<AnalysisReport> {
    Ok(ResumeAnalyzer::new()?.evaluate(resume_text, job_description))
}
