//! Keyword extraction against a fixed reference vocabulary

use crate::error::{AtsCheckerError, Result};
use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Upper bound on the number of distinct keywords kept per text.
pub const MAX_KEYWORDS: usize = 15;

/// Domain terms a token is compared against.
pub const REFERENCE_VOCABULARY: &[&str] = &[
    "management", "leadership", "project", "development", "analysis", "design",
    "implementation", "strategy", "planning", "coordination", "communication",
    "teamwork", "problem solving", "research", "data", "technology", "software",
    "programming", "database", "web", "mobile", "cloud", "security", "testing",
    "quality assurance", "customer service", "sales", "marketing", "finance",
    "accounting", "human resources", "operations", "logistics", "supply chain",
    "javascript", "python", "java", "react", "node.js", "sql", "aws", "azure",
    "agile", "scrum", "kanban", "ci/cd", "devops", "api", "rest", "graphql",
];

/// Ordered, bounded set of lowercase keywords in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    entries: Vec<KeywordCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Job keywords split by whether the resume covers them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatches {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.keyword.as_str())
    }

    pub fn counts(&self) -> &[KeywordCount] {
        &self.entries
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.entries.iter().any(|e| e.keyword == keyword)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }
}

impl KeywordMatches {
    pub fn is_empty(&self) -> bool {
        self.found.is_empty() && self.missing.is_empty()
    }

    /// Fraction of job keywords the resume covers, or `None` when there was nothing to match.
    pub fn match_ratio(&self) -> Option<f64> {
        let total = self.found.len() + self.missing.len();
        if total == 0 {
            None
        } else {
            Some(self.found.len() as f64 / total as f64)
        }
    }
}

/// Extracts vocabulary-related tokens from free text.
///
/// A token qualifies when it is a substring of some vocabulary term or some
/// vocabulary term is a substring of it. Multi-word terms such as
/// "quality assurance" therefore match their individual words, and short
/// tokens like "api" also match longer words such as "apiary".
pub struct KeywordExtractor {
    vocabulary: Vec<String>,
    term_matcher: AhoCorasick,
    word_regex: Regex,
}

impl KeywordExtractor {
    pub fn new() -> Result<Self> {
        let vocabulary: Vec<String> = REFERENCE_VOCABULARY.iter().map(|s| s.to_string()).collect();

        let term_matcher = AhoCorasick::new(&vocabulary)
            .map_err(|e| AtsCheckerError::Processing(format!("Failed to build keyword matcher: {}", e)))?;

        let word_regex = Regex::new(r"[0-9A-Za-z_]+")
            .map_err(|e| AtsCheckerError::Processing(format!("Invalid word regex: {}", e)))?;

        Ok(Self {
            vocabulary,
            term_matcher,
            word_regex,
        })
    }

    /// Extract up to [`MAX_KEYWORDS`] distinct keywords in first-occurrence order.
    pub fn extract(&self, text: &str) -> KeywordSet {
        let lowered = text.to_lowercase();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<KeywordCount> = Vec::new();

        for word in self.word_regex.find_iter(&lowered).map(|m| m.as_str()) {
            if let Some(&pos) = index.get(word) {
                entries[pos].count += 1;
                continue;
            }
            if self.is_related(word) {
                index.insert(word, entries.len());
                entries.push(KeywordCount {
                    keyword: word.to_string(),
                    count: 1,
                });
            }
        }

        entries.truncate(MAX_KEYWORDS);
        KeywordSet { entries }
    }

    /// Whether `token` contains or is contained by a vocabulary term.
    pub fn is_related(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        self.term_matcher.is_match(token) || self.vocabulary.iter().any(|term| term.contains(token))
    }

    /// Split job keywords into those some resume keyword contains and the rest.
    pub fn match_keywords(&self, job: &KeywordSet, resume: &KeywordSet) -> KeywordMatches {
        let (found, missing): (Vec<String>, Vec<String>) = job
            .iter()
            .map(str::to_string)
            .partition(|keyword| resume.iter().any(|r| r.contains(keyword.as_str())));

        KeywordMatches { found, missing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> KeywordExtractor {
        KeywordExtractor::new().unwrap()
    }

    #[test]
    fn test_empty_text_has_no_keywords() {
        assert!(extractor().extract("").is_empty());
    }

    #[test]
    fn test_extraction_is_lowercase_and_first_seen_order() {
        let keywords = extractor().extract("Python developer. Led AGILE teams using Python and SQL.");
        let words = keywords.to_vec();

        assert_eq!(words.first().map(String::as_str), Some("python"));
        assert!(words.contains(&"agile".to_string()));
        assert!(words.contains(&"sql".to_string()));
        assert!(words.iter().all(|w| w.chars().all(|c| !c.is_uppercase())));

        let python = keywords.counts().iter().find(|c| c.keyword == "python").unwrap();
        assert_eq!(python.count, 2);
    }

    #[test]
    fn test_bidirectional_containment() {
        let ex = extractor();
        // token inside a multi-word term
        assert!(ex.is_related("quality"));
        assert!(ex.is_related("assurance"));
        // term inside a longer token
        assert!(ex.is_related("apiary"));
        assert!(ex.is_related("databases"));
        // "node.js" is tokenized into "node" and "js"
        assert!(ex.is_related("node"));
        assert!(ex.is_related("js"));
        assert!(!ex.is_related("zebra"));
        assert!(!ex.is_related(""));
    }

    #[test]
    fn test_at_most_fifteen_distinct_tokens() {
        let text = REFERENCE_VOCABULARY.join(" ");
        let keywords = extractor().extract(&text);

        assert_eq!(keywords.len(), MAX_KEYWORDS);
        let mut seen = keywords.to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), MAX_KEYWORDS);
        assert_eq!(keywords.iter().next(), Some("management"));
    }

    #[test]
    fn test_every_token_relates_to_vocabulary() {
        let ex = extractor();
        let keywords = ex.extract("Built cloud APIs; a web-based CI/CD pipeline for 3 teams.");
        assert!(!keywords.is_empty());
        for keyword in keywords.iter() {
            assert!(ex.is_related(keyword), "{} is unrelated", keyword);
        }
    }

    #[test]
    fn test_match_keywords_partitions_job_keywords() {
        let ex = extractor();
        let job = ex.extract("project management leadership");
        let resume = ex.extract("Skills: project management");

        let matches = ex.match_keywords(&job, &resume);
        assert_eq!(matches.found, vec!["project", "management"]);
        assert_eq!(matches.missing, vec!["leadership"]);
        assert_eq!(matches.match_ratio(), Some(2.0 / 3.0));
    }

    #[test]
    fn test_resume_keyword_substring_counts_as_found() {
        let ex = extractor();
        let job = ex.extract("data");
        let resume = ex.extract("database administration");

        let matches = ex.match_keywords(&job, &resume);
        assert_eq!(matches.found, vec!["data"]);
        assert!(matches.missing.is_empty());
    }

    #[test]
    fn test_empty_matches_have_no_ratio() {
        assert_eq!(KeywordMatches::default().match_ratio(), None);
        assert!(KeywordMatches::default().is_empty());
    }
}
