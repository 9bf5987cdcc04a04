//! Pattern-based content checks over raw resume text

use crate::error::{AtsCheckerError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Outcome of the content checks, plus whether the resume yielded any keywords.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingFlags {
    pub has_summary: bool,
    pub has_measurable_results: bool,
    pub has_keywords: bool,
    pub is_well_formatted: bool,
}

/// Independent boolean predicates over resume text.
///
/// All patterns are compiled once; each check scans the whole text and is
/// unaffected by the others.
pub struct ContentChecker {
    summary_patterns: Vec<Regex>,
    result_patterns: Vec<Regex>,
    bullet_line: Regex,
    section_keywords: Regex,
    contact_keywords: Regex,
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| AtsCheckerError::Processing(format!("Invalid content pattern '{}': {}", pattern, e)))
}

impl ContentChecker {
    pub fn new() -> Result<Self> {
        let summary_patterns = [
            r"(?i-u:summary)",
            r"(?i-u:profile)",
            r"(?i-u:objective)",
            r"(?i-u:overview)",
            r"(?i-u:professional summary)",
            r"(?i-u:career objective)",
        ]
        .iter()
        .map(|p| compile(p))
        .collect::<Result<Vec<_>>>()?;

        let result_patterns = [
            r"[0-9]+%",
            r"[0-9]+\s*(?i-u:increase|decrease|improvement|growth|reduction)",
            r"(?i-u:increased|decreased|improved|reduced|grew|achieved|delivered)",
            r"\$[0-9]+",
            r"[0-9]+\s*(?i-u:users|customers|clients|projects|team members)",
        ]
        .iter()
        .map(|p| compile(p))
        .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            summary_patterns,
            result_patterns,
            bullet_line: compile(r"^\s*[•\-*]")?,
            section_keywords: compile(r"(?i-u:experience|education|skills|work|employment|projects)")?,
            contact_keywords: compile(r"(?i-u:email|phone|address|linkedin)")?,
        })
    }

    /// Mentions a summary, profile, objective or overview anywhere.
    pub fn has_summary(&self, text: &str) -> bool {
        self.summary_patterns.iter().any(|p| p.is_match(text))
    }

    /// Contains a percentage, dollar amount, quantified outcome or achievement verb.
    pub fn has_measurable_results(&self, text: &str) -> bool {
        self.result_patterns.iter().any(|p| p.is_match(text))
    }

    /// Has bullet lines, a section heading keyword and a contact keyword.
    pub fn is_well_formatted(&self, text: &str) -> bool {
        self.has_bullet_points(text) && self.has_sections(text) && self.has_contact_info(text)
    }

    pub fn has_bullet_points(&self, text: &str) -> bool {
        text.split('\n').any(|line| self.bullet_line.is_match(line))
    }

    pub fn has_sections(&self, text: &str) -> bool {
        self.section_keywords.is_match(text)
    }

    pub fn has_contact_info(&self, text: &str) -> bool {
        self.contact_keywords.is_match(text)
    }

    /// Run every check. `has_keywords` is supplied by the caller since it
    /// depends on keyword extraction rather than on a pattern.
    pub fn check(&self, text: &str, has_keywords: bool) -> FormattingFlags {
        FormattingFlags {
            has_summary: self.has_summary(text),
            has_measurable_results: self.has_measurable_results(text),
            has_keywords,
            is_well_formatted: self.is_well_formatted(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> ContentChecker {
        ContentChecker::new().unwrap()
    }

    #[test]
    fn test_summary_detection() {
        let c = checker();
        assert!(c.has_summary("PROFESSIONAL SUMMARY\nSeasoned engineer"));
        assert!(c.has_summary("Career Objective: lead a platform team"));
        assert!(c.has_summary("LinkedIn profile available"));
        assert!(!c.has_summary("Just a list of jobs"));
        assert!(!c.has_summary(""));
    }

    #[test]
    fn test_measurable_results() {
        let c = checker();
        assert!(c.has_measurable_results("Increased sales by 20%"));
        assert!(c.has_measurable_results("Launched 5 growth experiments"));
        assert!(c.has_measurable_results("Saved $40000 a year"));
        assert!(c.has_measurable_results("Served 1200 customers"));
        assert!(c.has_measurable_results("Managed 8 team members"));
        assert!(c.has_measurable_results("Delivered on time"));
        assert!(c.has_measurable_results("Saw a 10 reduction in tickets"));
        assert!(!c.has_measurable_results("Worked on a team"));
        assert!(!c.has_measurable_results(""));
    }

    #[test]
    fn test_well_formatted_needs_all_three() {
        let c = checker();
        let complete = "Jane Doe\nEmail: jane@example.com\n\nExperience\n• Built things\n- Shipped things";
        assert!(c.is_well_formatted(complete));

        let no_contact = "Experience\n• Built things\n* Shipped things";
        assert!(!c.is_well_formatted(no_contact));

        let no_bullets = "Experience\nEmail: jane@example.com\nBuilt things";
        assert!(!c.is_well_formatted(no_bullets));

        let no_sections = "Phone: 555-0100\n• Hobbies: chess";
        assert!(!c.is_well_formatted(no_sections));
    }

    #[test]
    fn test_bullet_may_be_indented() {
        let c = checker();
        assert!(c.has_bullet_points("Header\n    * indented item"));
        assert!(c.has_bullet_points("\t- tabbed item"));
        assert!(!c.has_bullet_points("no bullets - only dashes in the middle"));
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        let c = checker();
        assert!(c.has_summary("SUMMARY"));
        // long s (U+017F) and Kelvin sign (U+212A) fold to ASCII letters under Unicode rules
        assert!(!c.has_summary("\u{17F}ummary"));
        assert!(!c.has_contact_info("lin\u{212A}edin"));
        assert!(c.has_contact_info("LinkedIn"));
        assert!(!c.has_sections("\u{212A}\u{17F}kill\u{17F}"));
        assert!(!c.has_measurable_results("\u{17F}ucce\u{17F}\u{17F}: 3 u\u{17F}ers"));
        assert!(c.has_measurable_results("3 USERS"));
    }

    #[test]
    fn test_check_collects_flags() {
        let flags = checker().check("Summary\n• Work history\nPhone 555\nImproved uptime", true);
        assert_eq!(
            flags,
            FormattingFlags {
                has_summary: true,
                has_measurable_results: true,
                has_keywords: true,
                is_well_formatted: true,
            }
        );
        assert_eq!(checker().check("", false), FormattingFlags::default());
    }
}
