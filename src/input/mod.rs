//! Input processing module
//! Handles upload validation and reading resume and job description text

pub mod file_detector;
pub mod manager;
