//! ATS checker: heuristic resume scoring against applicant tracking systems

use anyhow::Context;
use ats_checker::cli::{self, Cli, Commands, ConfigAction};
use ats_checker::config::{Config, OutputFormat};
use ats_checker::input::manager::InputManager;
use ats_checker::output::formatter::{save_report_to_file, suggest_filename};
use ats_checker::output::{ExportedReport, ReportGenerator, ReportMetadata};
use ats_checker::error::describe_failure;
use ats_checker::{AtsCheckerError, EvaluationSession, ResumeAnalyzer};
use clap::Parser;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config, cli.no_color).await {
        debug!("Command failed: {:?}", e);
        eprintln!("{}", describe_failure(&e));
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> ats_checker::Result<Config> {
    match path {
        Some(path) if path.exists() => Config::load_from(path),
        Some(path) => {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
        None => Config::load(),
    }
}

async fn run_command(
    command: Commands,
    mut config: Config,
    config_path: Option<PathBuf>,
    no_color: bool,
) -> anyhow::Result<()> {
    match command {
        Commands::Analyze {
            resume,
            text,
            job,
            job_text,
            output,
            save,
            detailed,
        } => {
            let format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(AtsCheckerError::InvalidInput)?,
                None => config.output.format,
            };
            config.output.detailed |= detailed;
            config.output.color_output &= !no_color;

            let mut input_manager = InputManager::from_config(&config.input);

            let (resume_text, resume_source) = match (resume, text) {
                (Some(path), _) => {
                    let content = input_manager
                        .extract_text(&path)
                        .await
                        .with_context(|| format!("reading resume {}", path.display()))?;
                    (content, path.display().to_string())
                }
                (None, Some(text)) => (text, "inline".to_string()),
                (None, None) => return Err(AtsCheckerError::EmptyResume.into()),
            };

            let (job_description, job_source) = match (job, job_text) {
                (Some(path), _) => {
                    let content = input_manager
                        .extract_text(&path)
                        .await
                        .with_context(|| format!("reading job description {}", path.display()))?;
                    (content, Some(path.display().to_string()))
                }
                (None, Some(text)) => (text, Some("inline".to_string())),
                (None, None) => (String::new(), None),
            };

            let analyzer = ResumeAnalyzer::new()?;
            let mut session = EvaluationSession::new(resume_text).with_job_description(job_description);
            let analysis = session.submit(&analyzer)?.clone();
            info!("Analysis complete: score {}/100", analysis.score);

            let resume_keywords = analyzer.extract_keywords(session.resume_text().trim());
            let report = ExportedReport::new(analysis, ReportMetadata::new(resume_source, job_source))
                .with_resume_keywords(resume_keywords);
            let generator = ReportGenerator::with_options(&config.output);
            println!("{}", generator.generate_report(&report, format)?);

            if let Some(target) = save {
                // Console output carries color codes; save the plain-text export instead.
                let save_format = match format {
                    OutputFormat::Console => OutputFormat::Text,
                    other => other,
                };
                let target = if target.is_dir() {
                    target.join(suggest_filename(save_format, false))
                } else {
                    target
                };
                let content = generator.generate_report(&report, save_format)?;
                save_report_to_file(&content, &target)
                    .with_context(|| format!("saving report to {}", target.display()))?;
                info!("Report saved to {}", target.display());
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        AtsCheckerError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("# {}\n{}", path.display(), content);
                }
                ConfigAction::Reset => {
                    Config::default().save_to(&path)?;
                    info!("Configuration reset to defaults at {}", path.display());
                }
                ConfigAction::Path => println!("{}", path.display()),
            }
        }
    }

    Ok(())
}
