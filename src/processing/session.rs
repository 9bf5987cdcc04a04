//! Caller-side state for a resume evaluation

use crate::error::{AtsCheckerError, Result};
use crate::processing::analyzer::{AnalysisReport, ResumeAnalyzer};
use log::{info, warn};

/// Inputs and last result of one user's evaluation.
///
/// The analyzer keeps no state between calls; whatever needs to survive a
/// submission lives here and is owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct EvaluationSession {
    resume_text: String,
    job_description: String,
    last_report: Option<AnalysisReport>,
}

impl EvaluationSession {
    pub fn new(resume_text: impl Into<String>) -> Self {
        Self {
            resume_text: resume_text.into(),
            ..Self::default()
        }
    }

    pub fn with_job_description(mut self, job_description: impl Into<String>) -> Self {
        self.job_description = job_description.into();
        self
    }

    pub fn set_resume_text(&mut self, text: impl Into<String>) {
        self.resume_text = text.into();
    }

    pub fn resume_text(&self) -> &str {
        &self.resume_text
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn last_report(&self) -> Option<&AnalysisReport> {
        self.last_report.as_ref()
    }

    /// Validate the inputs and evaluate them.
    ///
    /// Both texts are trimmed first. An empty resume is rejected without
    /// evaluating and leaves any previous report in place.
    pub fn submit(&mut self, analyzer: &ResumeAnalyzer) -> Result<&AnalysisReport> {
        let resume = self.resume_text.trim();
        if resume.is_empty() {
            warn!("Rejected submission with empty resume content");
            return Err(AtsCheckerError::EmptyResume);
        }
        let job = self.job_description.trim();

        info!(
            "Evaluating resume ({} chars) against job description ({} chars)",
            resume.len(),
            job.len()
        );
        let report = analyzer.evaluate(resume, job);
        Ok(self.last_report.insert(report))
    }

    /// Clear inputs and the last report.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_resume_rejected() {
        let analyzer = ResumeAnalyzer::new().unwrap();
        let mut session = EvaluationSession::new("   \n\t ");

        let err = session.submit(&analyzer).unwrap_err();
        assert!(matches!(err, AtsCheckerError::EmptyResume));
        assert!(err.is_input_error());
        assert!(session.last_report().is_none());
    }

    #[test]
    fn test_submit_stores_report() {
        let analyzer = ResumeAnalyzer::new().unwrap();
        let mut session = EvaluationSession::new("Summary\n• Delivered 3 projects\nEmail\nExperience")
            .with_job_description("   ");

        let score = session.submit(&analyzer).unwrap().score;
        let report = session.last_report().unwrap();
        assert_eq!(report.score, score);
        // whitespace-only job description counts as none
        assert!(report.keywords.found.is_empty());
        assert!(report.keywords.missing.is_empty());
    }

    #[test]
    fn test_rejected_submit_keeps_previous_report() {
        let analyzer = ResumeAnalyzer::new().unwrap();
        let mut session = EvaluationSession::new("Python developer");
        session.submit(&analyzer).unwrap();

        session.set_resume_text("");
        assert!(session.submit(&analyzer).is_err());
        assert!(session.last_report().is_some());
    }

    #[test]
    fn test_reset_clears_everything() {
        let analyzer = ResumeAnalyzer::new().unwrap();
        let mut session = EvaluationSession::new("Python developer").with_job_description("python");
        session.submit(&analyzer).unwrap();

        session.reset();
        assert_eq!(session.resume_text(), "");
        assert_eq!(session.job_description(), "");
        assert!(session.last_report().is_none());
    }
}
