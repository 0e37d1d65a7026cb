// Copyright 2025 Kindly Software Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Output formatting for check reports

use colored::Colorize;
use comfy_table::{presets, ContentArrangement, Table};
use semver_guard_core::{CheckReport, SemVerType};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Brief,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "brief" => Ok(Self::Brief),
            _ => anyhow::bail!(
                "Invalid output format: {}. Valid options: table, json, brief",
                s
            ),
        }
    }
}

pub fn print_check_report(
    report: &CheckReport,
    original: &Path,
    changed: &Path,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Table => print_table_report(report, original, changed),
        OutputFormat::Json => print_json_report(report, original, changed),
        OutputFormat::Brief => print_brief_report(report),
    }
}

fn severity_cell(severity: SemVerType) -> String {
    let color = match severity {
        SemVerType::Major => "red",
        SemVerType::Minor => "yellow",
        SemVerType::Patch => "blue",
        SemVerType::None => "white",
    };
    severity.to_string().color(color).to_string()
}

fn print_table_report(report: &CheckReport, original: &Path, changed: &Path) {
    println!("\n{}", "=== API Compatibility Report ===".bold().cyan());
    println!("Original: {}", original.display().to_string().bright_blue());
    println!("Changed:  {}", changed.display().to_string().bright_blue());

    if report.changes.is_empty() {
        println!("\n{}", "✓ No API changes detected".green().bold());
    } else {
        println!(
            "\n{} changes detected",
            report.changes.len().to_string().yellow().bold()
        );

        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Change", "Severity", "Location", "Annotation"]);

        for change in &report.changes {
            table.add_row(vec![
                change.kind.to_string(),
                severity_cell(change.severity),
                change.location.to_string(),
                change.annotation.clone().unwrap_or_default(),
            ]);
        }

        println!("{table}");
    }

    println!("\n{}", "=== Verdict ===".bold().cyan());
    let verdict = report.semver_type.to_string();
    let verdict = match report.semver_type {
        SemVerType::Major => verdict.red().bold(),
        SemVerType::Minor => verdict.yellow().bold(),
        SemVerType::Patch => verdict.blue().bold(),
        SemVerType::None => verdict.green().bold(),
    };
    println!("Required version bump: {verdict}");
}

fn print_json_report(report: &CheckReport, original: &Path, changed: &Path) {
    let json_output = serde_json::json!({
        "original": original.to_string_lossy(),
        "changed": changed.to_string_lossy(),
        "semver_type": report.semver_type,
        "change_count": report.changes.len(),
        "changes": report.changes,
    });

    println!("{}", serde_json::to_string_pretty(&json_output).unwrap());
}

fn print_brief_report(report: &CheckReport) {
    println!(
        "{} | {} changes",
        report.semver_type,
        report.changes.len()
    );
}
