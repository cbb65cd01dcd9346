use std::path::{Path, PathBuf};

use pairname_core::error::{PairnameError, Result};
use pairname_core::{
    PairStatus, RenameOptions, check_directory, companion_path, rename_directory,
};

fn options_from_args(
    extension: String,
    left_label: String,
    right_label: String,
    delimiter: u8,
    dry_run: bool,
) -> RenameOptions {
    RenameOptions {
        extension: extension.trim_start_matches('.').to_string(),
        left_label,
        right_label,
        delimiter,
        dry_run,
    }
}

fn resolve_data(directory: &Path, data: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(d) = data {
        return Ok(d);
    }
    let abs = std::fs::canonicalize(directory)
        .map_err(|_| PairnameError::NotADirectory(directory.to_path_buf()))?;
    companion_path(&abs).ok_or(PairnameError::NotADirectory(abs))
}

fn file_name(p: &Path) -> String {
    p.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| p.display().to_string())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_rename(
    directory: PathBuf,
    data: Option<PathBuf>,
    extension: String,
    left_label: String,
    right_label: String,
    delimiter: u8,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let opts = options_from_args(extension, left_label, right_label, delimiter, dry_run);
    let data = resolve_data(&directory, data)?;
    let outcome = rename_directory(&data, &directory, &opts)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.plan)?);
    } else if dry_run {
        for r in &outcome.plan.renames {
            println!("{} -> {}", file_name(&r.from), file_name(&r.to));
        }
    }

    if outcome.plan.is_empty() {
        eprintln!("rename: nothing to rename in {}", directory.display());
    } else if dry_run {
        eprintln!("rename: dry run, {} file(s) planned", outcome.plan.len());
    } else {
        eprintln!(
            "rename: {} moved, {} already named, in {}",
            outcome.renamed,
            outcome.plan.len() - outcome.renamed,
            directory.display()
        );
    }
    Ok(())
}

pub fn handle_check(
    directory: PathBuf,
    data: Option<PathBuf>,
    extension: String,
    left_label: String,
    right_label: String,
    delimiter: u8,
    json: bool,
) -> Result<()> {
    let opts = options_from_args(extension, left_label, right_label, delimiter, false);
    let data = resolve_data(&directory, data)?;
    let report = check_directory(&data, &directory, &opts)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for r in report
            .records
            .iter()
            .filter(|r| r.status != PairStatus::Complete)
        {
            let kind = match r.status {
                PairStatus::MissingBoth => "missing pair",
                _ => "missing side",
            };
            for name in r.missing() {
                println!("{kind} (line {}): {name}", r.record_line);
            }
        }
        for o in &report.orphans {
            println!("orphan: {o}");
        }
    }

    eprintln!(
        "check: {} complete, {} missing one side, {} missing both, {} orphan(s)",
        report.count(PairStatus::Complete),
        report.count(PairStatus::MissingLeft) + report.count(PairStatus::MissingRight),
        report.count(PairStatus::MissingBoth),
        report.orphans.len()
    );
    if !report.is_clean() {
        return Err(PairnameError::CheckFailed {
            incomplete: report.incomplete(),
            orphans: report.orphans.len(),
        });
    }
    Ok(())
}
