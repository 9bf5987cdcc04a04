//! Output formatters: plain-text export, console, JSON and Markdown

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::output::report::ExportedReport;
use crate::processing::narrative::Priority;
use crate::processing::scoring::ScoreBand;
use colored::{Color, Colorize};
use std::path::Path;

/// Default name for a downloaded text report.
pub const DEFAULT_EXPORT_FILENAME: &str = "ats-resume-report.txt";

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ExportedReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Plain-text export. Section headers, bullets and blank lines are kept
/// stable so previously exported reports stay comparable.
pub struct TextFormatter;

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    text_formatter: TextFormatter,
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl OutputFormatter for TextFormatter {
    fn format_report(&self, report: &ExportedReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::from("ATS RESUME ANALYSIS REPORT\n");
        output.push_str(&"=".repeat(50));
        output.push_str("\n\n");

        output.push_str(&format!("Overall ATS Score: {}/100\n\n", analysis.score));

        output.push_str("STRENGTHS:\n");
        for strength in &analysis.strengths {
            output.push_str(&format!("• {}\n", strength));
        }

        output.push_str("\nAREAS FOR IMPROVEMENT:\n");
        for improvement in &analysis.improvements {
            output.push_str(&format!("• {}\n", improvement));
        }

        output.push_str("\nDETAILED SUGGESTIONS:\n");
        for suggestion in &analysis.suggestions {
            output.push_str(&format!("• {}: {}\n", suggestion.title, suggestion.description));
        }

        output.push_str(&format!(
            "\nGenerated on: {}",
            report.metadata.generated_at.format("%-m/%-d/%Y, %-I:%M:%S %p")
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, band: ScoreBand) -> String {
        let color = match band {
            ScoreBand::Excellent => Color::Green,
            ScoreBand::Good => Color::BrightGreen,
            ScoreBand::Fair => Color::Yellow,
            ScoreBand::Poor => Color::BrightRed,
        };

        if self.use_colors {
            format!("[{}]", band.to_string().color(color).bold())
        } else {
            format!("[{}]", band)
        }
    }

    fn format_priority_icon(&self, priority: Priority) -> &'static str {
        match (self.use_colors, priority) {
            (true, Priority::High) => "⚠️ ",
            (true, Priority::Medium) => "📋 ",
            (true, Priority::Low) => "💡 ",
            (false, Priority::High) => "[*] ",
            (false, Priority::Medium) => "[-] ",
            (false, Priority::Low) => "[+] ",
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ExportedReport) -> Result<String> {
        let analysis = &report.analysis;
        let band = analysis.band();
        let mut output = String::new();

        output.push_str(&self.format_header("ATS RESUME ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S")
        ));

        output.push_str(&self.format_header("Overall Score", 2));
        output.push_str(&format!(
            "Overall ATS Score: {}/100 {}\n",
            analysis.score,
            self.format_score_badge(band)
        ));
        output.push_str(&format!("{}\n", self.colorize(band.message(), Color::Cyan)));

        if self.detailed {
            let breakdown = analysis.breakdown();
            output.push_str(&self.format_header("Score Breakdown", 3));
            output.push_str(&format!("Keywords:        {:>5.1} / 40\n", breakdown.keyword));
            output.push_str(&format!("Formatting:      {:>5.1} / 30\n", breakdown.formatting));
            output.push_str(&format!("Content quality: {:>5.1} / 30\n", breakdown.content));
        }

        output.push_str(&self.format_header("✅ Strengths", 3));
        for strength in &analysis.strengths {
            output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
        }

        if !analysis.improvements.is_empty() {
            output.push_str(&self.format_header("🎯 Areas for Improvement", 3));
            for area in &analysis.improvements {
                output.push_str(&format!("  • {}\n", self.colorize(area, Color::Yellow)));
            }
        }

        output.push_str(&self.format_header("📋 Suggestions", 2));
        for (i, suggestion) in analysis.suggestions.iter().enumerate() {
            output.push_str(&format!(
                "{}. {}{} {}\n",
                i + 1,
                self.format_priority_icon(suggestion.priority),
                self.colorize(&suggestion.title, Color::White),
                self.colorize(&format!("({})", suggestion.priority), Color::BrightBlack)
            ));
            output.push_str(&format!("   {}\n", suggestion.description));
        }

        if self.detailed && !(analysis.keywords.is_empty() && report.resume_keywords.is_empty()) {
            output.push_str(&self.format_header("🔍 Keyword Analysis", 2));
            if !report.resume_keywords.is_empty() {
                let counted: Vec<String> = report
                    .resume_keywords
                    .counts()
                    .iter()
                    .map(|c| format!("{} ({})", c.keyword, c.count))
                    .collect();
                output.push_str(&format!(
                    "Resume:  {}\n",
                    self.colorize(&counted.join(", "), Color::Cyan)
                ));
            }
            if !analysis.keywords.found.is_empty() {
                output.push_str(&format!(
                    "Found:   {}\n",
                    self.colorize(&analysis.keywords.found.join(", "), Color::Green)
                ));
            }
            if !analysis.keywords.missing.is_empty() {
                output.push_str(&format!(
                    "Missing: {}\n",
                    self.colorize(&analysis.keywords.missing.join(", "), Color::Red)
                ));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ExportedReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ExportedReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::from("# ATS Resume Analysis Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Resume:** `{}`",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S"),
                report.metadata.resume_source
            ));
            if let Some(job) = &report.metadata.job_source {
                output.push_str(&format!(" | **Job:** `{}`", job));
            }
            output.push_str("\n\n");
        }

        output.push_str(&format!(
            "**Overall ATS Score:** {}/100 ({})\n\n> {}\n\n",
            analysis.score,
            analysis.band(),
            analysis.band().message()
        ));

        let breakdown = analysis.breakdown();
        output.push_str("| Component | Points | Max |\n");
        output.push_str("|-----------|--------|-----|\n");
        output.push_str(&format!("| Keywords | {:.1} | 40 |\n", breakdown.keyword));
        output.push_str(&format!("| Formatting | {:.1} | 30 |\n", breakdown.formatting));
        output.push_str(&format!("| Content quality | {:.1} | 30 |\n\n", breakdown.content));

        output.push_str("## Strengths\n\n");
        for strength in &analysis.strengths {
            output.push_str(&format!("- {}\n", strength));
        }

        output.push_str("\n## Areas for Improvement\n\n");
        for improvement in &analysis.improvements {
            output.push_str(&format!("- {}\n", improvement));
        }

        output.push_str("\n## Suggestions\n\n");
        for (i, suggestion) in analysis.suggestions.iter().enumerate() {
            output.push_str(&format!(
                "{}. **{}** _{}_\n   {}\n",
                i + 1,
                suggestion.title,
                suggestion.priority,
                suggestion.description
            ));
        }

        if !analysis.keywords.is_empty() {
            output.push_str("\n## Keywords\n\n");
            output.push_str(&format!("- **Found:** {}\n", analysis.keywords.found.join(", ")));
            output.push_str(&format!("- **Missing:** {}\n", analysis.keywords.missing.join(", ")));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(&OutputConfig::default())
    }

    pub fn with_options(config: &OutputConfig) -> Self {
        Self {
            text_formatter: TextFormatter,
            console_formatter: ConsoleFormatter::new(config.color_output, config.detailed),
            json_formatter: JsonFormatter::new(config.pretty_json),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &ExportedReport, format: OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Text => &self.text_formatter,
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        };
        formatter.format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// File name for a saved report. Console output is saved as plain text.
pub fn suggest_filename(format: OutputFormat, timestamp: bool) -> String {
    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Text | OutputFormat::Console if !timestamp => DEFAULT_EXPORT_FILENAME.to_string(),
        OutputFormat::Text | OutputFormat::Console => format!("ats-resume-report{}.txt", timestamp_suffix),
        OutputFormat::Json => format!("ats-resume-report{}.json", timestamp_suffix),
        OutputFormat::Markdown => format!("ats-resume-report{}.md", timestamp_suffix),
    }
}
