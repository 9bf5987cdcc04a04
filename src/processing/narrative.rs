//! Strengths, improvements and suggestions derived from analysis findings

use crate::processing::checks::FormattingFlags;
use crate::processing::keywords::KeywordMatches;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How many missing keywords the keyword suggestion lists.
pub const SUGGESTED_KEYWORD_LIMIT: usize = 5;

/// Scores below this get an extra "needs significant improvement" line.
pub const LOW_SCORE_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    Keyword,
    Formatting,
    Content,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl Suggestion {
    fn new(kind: SuggestionType, title: &str, description: impl Into<String>, priority: Priority) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.into(),
            priority,
        }
    }
}

pub fn generate_strengths(matches: &KeywordMatches, flags: &FormattingFlags) -> Vec<String> {
    let mut strengths = Vec::new();

    if !matches.found.is_empty() {
        strengths.push(format!(
            "Strong keyword matching with {} relevant keywords found",
            matches.found.len()
        ));
    }
    if flags.has_summary {
        strengths.push("Professional summary/profile section present".to_string());
    }
    if flags.has_measurable_results {
        strengths.push("Contains measurable results and achievements".to_string());
    }
    if flags.is_well_formatted {
        strengths.push("Well-structured format with clear sections".to_string());
    }

    if strengths.is_empty() {
        strengths.push("Resume submitted successfully for analysis".to_string());
    }

    strengths
}

pub fn generate_improvements(matches: &KeywordMatches, flags: &FormattingFlags, score: u8) -> Vec<String> {
    let mut improvements = Vec::new();

    if !matches.missing.is_empty() {
        improvements.push(format!(
            "Missing {} important keywords from job description",
            matches.missing.len()
        ));
    }
    if !flags.has_summary {
        improvements.push("Add a professional summary or profile section".to_string());
    }
    if !flags.has_measurable_results {
        improvements.push("Include measurable results and achievements".to_string());
    }
    if !flags.is_well_formatted {
        improvements.push("Improve formatting with clear sections and bullet points".to_string());
    }
    if score < LOW_SCORE_THRESHOLD {
        improvements.push("Overall resume needs significant improvement for ATS compatibility".to_string());
    }

    improvements
}

/// Prioritized suggestions. The ATS formatting tip is always last.
pub fn generate_suggestions(matches: &KeywordMatches, flags: &FormattingFlags) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if !matches.missing.is_empty() {
        let listed: Vec<&str> = matches
            .missing
            .iter()
            .take(SUGGESTED_KEYWORD_LIMIT)
            .map(String::as_str)
            .collect();
        suggestions.push(Suggestion::new(
            SuggestionType::Keyword,
            "Add Missing Keywords",
            format!("Consider incorporating these keywords: {}", listed.join(", ")),
            Priority::High,
        ));
    }

    if !flags.has_summary {
        suggestions.push(Suggestion::new(
            SuggestionType::Formatting,
            "Add Professional Summary",
            "Include a 2-3 sentence summary highlighting your key qualifications and career objectives",
            Priority::Medium,
        ));
    }

    if !flags.has_measurable_results {
        suggestions.push(Suggestion::new(
            SuggestionType::Content,
            "Quantify Achievements",
            "Add specific numbers, percentages, and measurable results to your experience",
            Priority::High,
        ));
    }

    suggestions.push(Suggestion::new(
        SuggestionType::General,
        "Use ATS-Friendly Formatting",
        "Use standard fonts (Arial, Calibri), clear headings, and avoid graphics or tables",
        Priority::Medium,
    ));

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(words: &[&str]) -> KeywordMatches {
        KeywordMatches {
            found: Vec::new(),
            missing: words.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_fallback_strength() {
        let strengths = generate_strengths(&KeywordMatches::default(), &FormattingFlags::default());
        assert_eq!(strengths, vec!["Resume submitted successfully for analysis"]);
    }

    #[test]
    fn test_strengths_in_fixed_order() {
        let matches = KeywordMatches {
            found: vec!["sql".into(), "aws".into()],
            missing: Vec::new(),
        };
        let flags = FormattingFlags {
            has_summary: true,
            has_measurable_results: true,
            has_keywords: true,
            is_well_formatted: true,
        };
        let strengths = generate_strengths(&matches, &flags);
        assert_eq!(
            strengths,
            vec![
                "Strong keyword matching with 2 relevant keywords found",
                "Professional summary/profile section present",
                "Contains measurable results and achievements",
                "Well-structured format with clear sections",
            ]
        );
    }

    #[test]
    fn test_improvements_include_low_score_line() {
        let improvements = generate_improvements(&missing(&["sql"]), &FormattingFlags::default(), 12);
        assert_eq!(improvements.len(), 5);
        assert_eq!(improvements[0], "Missing 1 important keywords from job description");
        assert_eq!(
            improvements.last().map(String::as_str),
            Some("Overall resume needs significant improvement for ATS compatibility")
        );

        let improvements = generate_improvements(&KeywordMatches::default(), &FormattingFlags::default(), 50);
        assert_eq!(improvements.len(), 3);
    }

    #[test]
    fn test_keyword_suggestion_lists_at_most_five() {
        let matches = missing(&["sql", "aws", "azure", "react", "java", "python"]);
        let suggestions = generate_suggestions(&matches, &FormattingFlags::default());

        assert_eq!(suggestions[0].kind, SuggestionType::Keyword);
        assert_eq!(suggestions[0].priority, Priority::High);
        assert_eq!(
            suggestions[0].description,
            "Consider incorporating these keywords: sql, aws, azure, react, java"
        );
        let kinds: Vec<SuggestionType> = suggestions.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SuggestionType::Keyword,
                SuggestionType::Formatting,
                SuggestionType::Content,
                SuggestionType::General,
            ]
        );
    }

    #[test]
    fn test_general_tip_always_last() {
        let flags = FormattingFlags {
            has_summary: true,
            has_measurable_results: true,
            has_keywords: true,
            is_well_formatted: true,
        };
        let suggestions = generate_suggestions(&KeywordMatches::default(), &flags);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].title, "Use ATS-Friendly Formatting");
        assert_eq!(suggestions[0].priority, Priority::Medium);
    }

    #[test]
    fn test_suggestion_serializes_with_type_field() {
        let suggestions = generate_suggestions(&KeywordMatches::default(), &FormattingFlags::default());
        let json = serde_json::to_value(&suggestions[0]).unwrap();
        assert_eq!(json["type"], "formatting");
        assert_eq!(json["priority"], "medium");
    }
}
