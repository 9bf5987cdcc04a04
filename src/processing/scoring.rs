//! Weighted ATS score composition

use crate::processing::checks::FormattingFlags;
use crate::processing::keywords::KeywordMatches;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const KEYWORD_WEIGHT: f64 = 40.0;
/// Awarded in place of the keyword component when there was nothing to match against.
pub const KEYWORD_BASELINE: f64 = 20.0;
pub const FORMATTING_POINTS: f64 = 10.0;
pub const CONTENT_POINTS: f64 = 15.0;

/// Points per component before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Up to 40: keyword match ratio, or the flat baseline.
    pub keyword: f64,
    /// Up to 30: summary, measurable results, layout.
    pub formatting: f64,
    /// Up to 30: keywords present, measurable results.
    pub content: f64,
}

impl ScoreBreakdown {
    pub fn compose(matches: &KeywordMatches, flags: &FormattingFlags) -> Self {
        let keyword = if !matches.found.is_empty() {
            matches.match_ratio().unwrap_or(0.0) * KEYWORD_WEIGHT
        } else if matches.missing.is_empty() {
            KEYWORD_BASELINE
        } else {
            0.0
        };

        let formatting = [flags.has_summary, flags.has_measurable_results, flags.is_well_formatted]
            .iter()
            .filter(|&&hit| hit)
            .count() as f64
            * FORMATTING_POINTS;

        // Measurable results count again here, on top of the formatting points.
        let content = [flags.has_keywords, flags.has_measurable_results]
            .iter()
            .filter(|&&hit| hit)
            .count() as f64
            * CONTENT_POINTS;

        Self {
            keyword,
            formatting,
            content,
        }
    }

    pub fn raw_total(&self) -> f64 {
        self.keyword + self.formatting + self.content
    }

    /// Rounded total. The weights cap this at 100.
    pub fn total(&self) -> u8 {
        self.raw_total().round() as u8
    }
}

/// Score a resume from its keyword matches and content flags.
pub fn calculate_score(matches: &KeywordMatches, flags: &FormattingFlags) -> u8 {
    ScoreBreakdown::compose(matches, flags).total()
}

/// Qualitative label for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            40..=59 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent! Your resume is highly ATS-compatible.",
            ScoreBand::Good => "Good! Your resume has good ATS compatibility with room for improvement.",
            ScoreBand::Fair => "Fair. Your resume needs improvements for better ATS compatibility.",
            ScoreBand::Poor => "Poor. Your resume needs significant improvements for ATS compatibility.",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreBand::Excellent => "EXCELLENT",
            ScoreBand::Good => "GOOD",
            ScoreBand::Fair => "FAIR",
            ScoreBand::Poor => "POOR",
        };
        write!(f, "{}", label)
    }
}
