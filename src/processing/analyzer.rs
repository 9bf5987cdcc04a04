//! Resume evaluation: keyword extraction, content checks, scoring and narrative

use crate::error::Result;
use crate::processing::checks::{ContentChecker, FormattingFlags};
use crate::processing::keywords::{KeywordExtractor, KeywordMatches, KeywordSet};
use crate::processing::narrative::{self, Suggestion};
use crate::processing::scoring::{ScoreBand, ScoreBreakdown};
use log::debug;
use serde::{Deserialize, Serialize};

/// Result of evaluating one resume against an optional job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    pub keywords: KeywordMatches,
    pub formatting: FormattingFlags,
}

impl AnalysisReport {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }

    /// Component points behind `score`.
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown::compose(&self.keywords, &self.formatting)
    }
}

/// Stateless resume evaluator.
///
/// Holds only compiled matchers, so one instance can be shared freely and
/// `evaluate` can run concurrently on independent inputs.
pub struct ResumeAnalyzer {
    extractor: KeywordExtractor,
    checker: ContentChecker,
}

impl ResumeAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            extractor: KeywordExtractor::new()?,
            checker: ContentChecker::new()?,
        })
    }

    /// Evaluate `resume_text` against `job_description`.
    ///
    /// An empty job description skips keyword matching entirely: found and
    /// missing stay empty and the keyword component falls back to its baseline.
    pub fn evaluate(&self, resume_text: &str, job_description: &str) -> AnalysisReport {
        let job_keywords = if job_description.is_empty() {
            KeywordSet::default()
        } else {
            self.extractor.extract(job_description)
        };
        let resume_keywords = self.extractor.extract(resume_text);
        debug!(
            "Extracted {} job keywords and {} resume keywords",
            job_keywords.len(),
            resume_keywords.len()
        );

        let keywords = if job_keywords.is_empty() {
            KeywordMatches::default()
        } else {
            self.extractor.match_keywords(&job_keywords, &resume_keywords)
        };

        let formatting = self.checker.check(resume_text, !resume_keywords.is_empty());
        debug!("Content checks: {:?}", formatting);

        let breakdown = ScoreBreakdown::compose(&keywords, &formatting);
        let score = breakdown.total();
        debug!(
            "Score {} (keyword {:.1}, formatting {:.1}, content {:.1})",
            score, breakdown.keyword, breakdown.formatting, breakdown.content
        );

        AnalysisReport {
            score,
            strengths: narrative::generate_strengths(&keywords, &formatting),
            improvements: narrative::generate_improvements(&keywords, &formatting, score),
            suggestions: narrative::generate_suggestions(&keywords, &formatting),
            keywords,
            formatting,
        }
    }

    /// Keywords the evaluator would extract from `text`.
    pub fn extract_keywords(&self, text: &str) -> KeywordSet {
        self.extractor.extract(text)
    }
}
