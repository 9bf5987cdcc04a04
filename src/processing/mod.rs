//! Resume analysis: keyword extraction, content checks, scoring and narrative

pub mod keywords;
pub mod checks;
pub mod scoring;
pub mod narrative;
pub mod analyzer;
pub mod session;
