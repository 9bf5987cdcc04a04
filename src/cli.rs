//! CLI interface for the ATS checker

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ats-checker")]
#[command(about = "Check how well a resume would fare in an applicant tracking system")]
#[command(long_about = "Score a resume for ATS compatibility using keyword matching against an optional job description plus content and formatting checks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored console output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume, optionally against a job description
    Analyze {
        /// Path to resume file (PDF, DOCX, TXT, MD; read as raw text)
        #[arg(short, long, required_unless_present = "text", conflicts_with = "text")]
        resume: Option<PathBuf>,

        /// Resume content given inline
        #[arg(short, long)]
        text: Option<String>,

        /// Path to job description file
        #[arg(short, long, conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description given inline
        #[arg(long)]
        job_text: Option<String>,

        /// Output format: text, console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save the report to a file (or into a directory)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show score breakdown and keyword details
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "text" | "txt" => Ok(OutputFormat::Text),
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: text, console, json, markdown",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert_eq!(parse_output_format("txt"), Ok(OutputFormat::Text));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_resume_source_required() {
        assert!(Cli::try_parse_from(["ats-checker", "analyze"]).is_err());
        assert!(Cli::try_parse_from(["ats-checker", "analyze", "--text", "resume"]).is_ok());
        assert!(Cli::try_parse_from(["ats-checker", "analyze", "-r", "cv.txt", "-t", "resume"]).is_err());
    }
}
