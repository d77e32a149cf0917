//! Check command - validate globals and block documents

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use sitekit_core::{
    Config, ContentFormat, CoreError, Report, config::DEFAULT_CONFIG_FILE, document, validate,
};

/// Run the check command.
///
/// Loads the globals document and every block document under the content
/// directory, then prints a summary. An explicit `config_path` must exist;
/// without one, `sitekit.toml` is used when present.
pub fn run(config_path: Option<&Path>, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking content");

    let config = match config_path {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    let strict = strict || config.check.strict;

    let (report, stats) = check_site(&config);

    println!();
    println!("Summary:");
    println!("  Documents: {}", stats.documents);
    println!("  Blocks:    {}", stats.blocks);
    println!("  Errors:    {}", report.errors.len());
    println!("  Warnings:  {}", report.warnings.len());

    if report.has_errors() {
        println!();
        println!("Errors:");
        for err in &report.errors {
            println!("  ✗ {err}");
        }
    }

    if report.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &report.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if report.has_errors() {
        bail!("Validation failed with {} error(s)", report.errors.len());
    }

    if strict && report.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            report.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Counts of what a check looked at.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckStats {
    pub documents: usize,
    pub blocks: usize,
}

/// Validate the globals document and all block documents for a config.
pub fn check_site(config: &Config) -> (Report, CheckStats) {
    let mut report = Report::default();
    let mut stats = CheckStats::default();

    let globals_path = config.globals_path();
    println!("Checking globals...");
    match document::load_globals(&globals_path) {
        Ok(globals) => {
            stats.documents += 1;
            validate::validate_globals(&globals, &globals_path, &mut report);
            println!("  ✓ {} loaded", globals_path.display());
        }
        Err(e) => {
            report.add_error(&globals_path, issue_message(e));
            println!("  ✗ {} invalid", globals_path.display());
        }
    }

    let content_dir = &config.content.dir;
    if !content_dir.is_dir() {
        report.add_error(content_dir, "content directory does not exist");
        return (report, stats);
    }

    println!("\nChecking block documents...");
    let mut checked = 0;
    let mut failed = 0;
    for entry in walkdir::WalkDir::new(content_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if path == globals_path {
            continue;
        }
        if ContentFormat::from_path(path).is_err() {
            tracing::debug!(?path, "skipping non-content file");
            continue;
        }

        checked += 1;
        stats.documents += 1;
        match document::load_blocks(path) {
            Ok(blocks) => {
                stats.blocks += blocks.len();
                validate::validate_blocks(&blocks, &config.check, path, &mut report);
            }
            Err(e) => {
                report.add_error(path, issue_message(e));
                failed += 1;
            }
        }
    }

    if failed == 0 {
        println!("  ✓ {checked} block documents decoded");
    } else {
        println!("  ✗ {failed}/{checked} block documents failed to decode");
    }

    (report, stats)
}

/// Issues already carry the path, so document errors keep only their message.
fn issue_message(err: CoreError) -> String {
    match err {
        CoreError::Document { message, .. } => message,
        other => other.to_string(),
    }
}
