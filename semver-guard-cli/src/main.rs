//! SemverGuard CLI for JVM artifact compatibility checking

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use semver_guard_core::{Configuration, SemVerChecker, SemVerType};

mod output;
use output::{print_check_report, OutputFormat};

/// SemverGuard CLI - determines the semantic-version bump two artifact
/// versions honestly require
#[derive(Parser, Debug)]
#[command(name = "semverguard")]
#[command(about = "Determines the semantic-version bump required between two jar versions", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two artifact versions and classify the change between them
    Check {
        /// Previously released artifact
        original: PathBuf,

        /// Newly built artifact
        changed: PathBuf,

        /// Configuration file with suppression rules
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format (json, table, brief)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Exit non-zero when the verdict reaches this severity
        /// (patch, minor, major)
        #[arg(long)]
        fail_on: Option<String>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}: {error:#}", "error".red().bold());
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("semver_guard={log_level}"))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            original,
            changed,
            config,
            format,
            fail_on,
        } => check_command(&original, &changed, config.as_deref(), &format, fail_on.as_deref()),
    }
}

fn check_command(
    original: &std::path::Path,
    changed: &std::path::Path,
    config: Option<&std::path::Path>,
    format: &str,
    fail_on: Option<&str>,
) -> Result<ExitCode> {
    let output_format = OutputFormat::from_str(format)?;
    let fail_on = fail_on.map(parse_severity).transpose()?;

    let configuration =
        Configuration::resolve(config).context("Failed to load configuration")?;
    let rules = configuration
        .suppression_rules()
        .context("Failed to compile suppression rules")?;

    let checker = SemVerChecker::from_paths(original, changed, rules)
        .context("Failed to load artifacts")?
        .with_options(configuration.diff_options());
    let report = checker.check();

    print_check_report(&report, original, changed, output_format);

    if let Some(threshold) = fail_on {
        if report.semver_type >= threshold {
            tracing::debug!(verdict = %report.semver_type, "verdict reached the failure threshold");
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn parse_severity(value: &str) -> Result<SemVerType> {
    match value.to_lowercase().as_str() {
        "patch" => Ok(SemVerType::Patch),
        "minor" => Ok(SemVerType::Minor),
        "major" => Ok(SemVerType::Major),
        _ => anyhow::bail!(
            "Invalid severity: {}. Valid options: patch, minor, major",
            value
        ),
    }
}
