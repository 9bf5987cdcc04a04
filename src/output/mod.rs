//! Report rendering and export

pub mod report;
pub mod formatter;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::{ExportedReport, ReportMetadata};
