//! Report structures handed to the formatters

use crate::processing::analyzer::AnalysisReport;
use crate::processing::keywords::KeywordSet;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// An analysis plus the context it was produced in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedReport {
    pub analysis: AnalysisReport,
    pub metadata: ReportMetadata,

    /// Keywords found in the resume with occurrence counts
    #[serde(default)]
    pub resume_keywords: KeywordSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Local>,

    /// Version of the checker used
    pub checker_version: String,

    /// Where the resume text came from (a path, or "inline")
    pub resume_source: String,

    /// Where the job description came from, if one was given
    pub job_source: Option<String>,
}

impl ReportMetadata {
    pub fn new(resume_source: impl Into<String>, job_source: Option<String>) -> Self {
        Self {
            generated_at: Local::now(),
            checker_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_source: resume_source.into(),
            job_source,
        }
    }

    pub fn with_generated_at(mut self, generated_at: DateTime<Local>) -> Self {
        self.generated_at = generated_at;
        self
    }
}

impl ExportedReport {
    pub fn new(analysis: AnalysisReport, metadata: ReportMetadata) -> Self {
        Self {
            analysis,
            metadata,
            resume_keywords: KeywordSet::default(),
        }
    }

    pub fn with_resume_keywords(mut self, keywords: KeywordSet) -> Self {
        self.resume_keywords = keywords;
        self
    }
}
