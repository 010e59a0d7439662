use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use prdoc_io::changelog::{JsonStyle, duplicate_records, plan_to_json, render_markdown, render_plan_tsv};
use prdoc_io::hashing::record_fingerprint;
use prdoc_io::prelude::*;
use prdoc_io::schema::PRDOC_SCHEMA_JSON;
use prdoc_io::validate::validate_record_with_diagnostics;
use semver::Version;
use serde::Serialize;
use tabwriter::TabWriter;
use tracing::info;

/// Everything passed.
pub const EXIT_OK: i32 = 0;
/// A file could not be read, parsed, or did not match the schema.
pub const EXIT_INPUT: i32 = 1;
/// Records parsed but failed semantic validation.
pub const EXIT_INVALID: i32 = 2;

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum FileStatus {
    Ok,
    Invalid,
    Unreadable,
}

#[derive(Debug, Serialize)]
struct FileReport {
    path: String,
    status: FileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    diagnostics: Vec<ValidationDiagnostic>,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    files: Vec<FileReport>,
}

fn expand_paths(paths: &[PathBuf], extension: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(scan_dir(path, extension)?);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

/// One `path: error|warning: message` line per diagnostic, on stderr.
fn print_diagnostics(path: &str, diagnostics: &[ValidationDiagnostic]) {
    for d in diagnostics {
        let prefix = if d.is_error() { "error" } else { "warning" };
        eprintln!("{path}: {prefix}: {}", d.message);
    }
}

/// Parse, schema-check and validate files or directories.
pub fn check(
    paths: &[PathBuf],
    extension: &str,
    opts: &ValidateOptions,
    diagnostics_json: bool,
) -> anyhow::Result<i32> {
    let files = expand_paths(paths, extension)?;
    let mut reports = Vec::with_capacity(files.len());

    for path in &files {
        let display = path.display().to_string();
        let report = match parse_record_yaml_file(path) {
            Err(e) => FileReport {
                path: display,
                status: FileStatus::Unreadable,
                error_kind: Some(e.kind()),
                message: Some(e.to_string()),
                diagnostics: Vec::new(),
            },
            Ok(record) => match validate_record_with_diagnostics(&record, opts) {
                Ok(warnings) => FileReport {
                    path: display,
                    status: FileStatus::Ok,
                    error_kind: None,
                    message: None,
                    diagnostics: warnings,
                },
                Err(e) => FileReport {
                    path: display,
                    status: FileStatus::Invalid,
                    error_kind: Some("validation"),
                    message: Some(e.legacy_message()),
                    diagnostics: e.diagnostics,
                },
            },
        };
        reports.push(report);
    }

    let code = if reports.iter().any(|r| matches!(r.status, FileStatus::Unreadable)) {
        EXIT_INPUT
    } else if reports.iter().any(|r| matches!(r.status, FileStatus::Invalid)) {
        EXIT_INVALID
    } else {
        EXIT_OK
    };
    info!(files = reports.len(), code, "check finished");

    if diagnostics_json {
        eprintln!("{}", serde_json::to_string_pretty(&CheckReport { files: reports })?);
    } else {
        for r in &reports {
            match r.status {
                FileStatus::Unreadable => {
                    eprintln!("{}: {}", r.path, r.message.as_deref().unwrap_or_default());
                }
                FileStatus::Ok | FileStatus::Invalid => print_diagnostics(&r.path, &r.diagnostics),
            }
        }
    }

    if code == EXIT_OK {
        println!("OK");
    }
    Ok(code)
}

/// Print a record summary and an aligned crate table.
pub fn inspect(path: &Path) -> anyhow::Result<i32> {
    let record = match parse_record_yaml_file(path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            return Ok(EXIT_INPUT);
        }
    };
    let fingerprint = record_fingerprint(&record)?;

    println!("title: {}", record.title);
    println!("audiences: {}", record.audiences().join(", "));
    println!("fingerprint: {fingerprint}");
    println!();

    let mut tw = TabWriter::new(std::io::stdout());
    writeln!(tw, "crate\tbump\tvalidate")?;
    for c in &record.crates {
        let validate = c.validate.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
        writeln!(tw, "{}\t{}\t{validate}", c.name, c.bump)?;
    }
    tw.flush()?;
    Ok(EXIT_OK)
}

/// Load and validate every record in `dir`. Failures are reported on stderr.
fn load_valid(dir: &Path, extension: &str, opts: &ValidateOptions) -> anyhow::Result<(Vec<RecordSource>, usize)> {
    let report = load_dir(dir, extension)?;
    let mut failed = report.failures.len();
    for f in &report.failures {
        eprintln!("{}: {}", f.path.display(), f.error);
    }

    let mut records = Vec::with_capacity(report.records.len());
    for source in report.records {
        let display = source.path.display().to_string();
        match validate_record_with_diagnostics(&source.record, opts) {
            Ok(warnings) => {
                print_diagnostics(&display, &warnings);
                records.push(source);
            }
            Err(e) => {
                print_diagnostics(&display, &e.diagnostics);
                failed += 1;
            }
        }
    }

    for (first, duplicate) in duplicate_records(&records) {
        eprintln!("warning: {duplicate} has the same content as {first}");
    }
    Ok((records, failed))
}

/// Aggregate per-crate bumps and next versions.
pub fn plan(
    dir: &Path,
    extension: &str,
    opts: &ValidateOptions,
    versions: &BTreeMap<String, Version>,
    json: bool,
) -> anyhow::Result<i32> {
    let (records, failed) = load_valid(dir, extension, opts)?;
    let plan = ReleasePlan::from_records(&records).with_current_versions(versions)?;

    if json {
        println!("{}", plan_to_json(&plan, JsonStyle::Pretty)?);
    } else {
        let mut tw = TabWriter::new(std::io::stdout());
        tw.write_all(render_plan_tsv(&plan).as_bytes())?;
        tw.flush()?;
    }

    Ok(if failed > 0 { EXIT_INPUT } else { EXIT_OK })
}

/// Render the Markdown changelog for `dir`.
pub fn changelog(
    dir: &Path,
    extension: &str,
    opts: &ValidateOptions,
    changelog_opts: &ChangelogOptions,
) -> anyhow::Result<i32> {
    let (records, failed) = load_valid(dir, extension, opts)?;
    print!("{}", render_markdown(&records, changelog_opts));
    Ok(if failed > 0 { EXIT_INPUT } else { EXIT_OK })
}

/// Print canonical YAML, or with `check` report whether the file already is.
pub fn fmt(path: &Path, check: bool) -> anyhow::Result<i32> {
    let original = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let record = match parse_record_yaml_str(&original) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}: {e}", path.display());
            return Ok(EXIT_INPUT);
        }
    };
    let canonical = to_yaml_string(&record)?;

    if !check {
        print!("{canonical}");
        return Ok(EXIT_OK);
    }
    if canonical == original {
        Ok(EXIT_OK)
    } else {
        eprintln!("{}: not canonically formatted", path.display());
        Ok(EXIT_INPUT)
    }
}

pub fn schema() -> i32 {
    print!("{PRDOC_SCHEMA_JSON}");
    EXIT_OK
}

/// Parse a `name=version` pair given on the command line.
pub fn parse_current(s: &str) -> Result<(String, Version), String> {
    let (name, version) = s
        .split_once('=')
        .ok_or_else(|| format!("expected <crate>=<version>, got '{s}'"))?;
    let version = Version::parse(version.trim()).map_err(|e| format!("invalid version '{version}': {e}"))?;
    Ok((name.trim().to_string(), version))
}
