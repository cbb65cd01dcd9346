use std::path::Path;

use tracing::{debug, info};

use crate::dir::VideoDir;
use crate::dir_fs::FsVideoDir;
use crate::domain::{RenameOutcome, RenamePlan};
use crate::error::{PairnameError, Result};
use crate::metadata::loader::load_records;
use crate::options::RenameOptions;
use crate::plan::build_plan;

/// Apply in plan order and return how many files were moved. The first
/// failure stops the run; files already moved stay moved.
pub fn apply_plan(plan: &RenamePlan, dir: &mut dyn VideoDir) -> Result<usize> {
    let mut moved = 0;
    for r in &plan.renames {
        if dir.same_entry(&r.from, &r.to) {
            debug!(path = %r.from.display(), "already named, skipping");
            continue;
        }
        // the directory may have changed since planning
        if dir.exists(&r.to) {
            return Err(PairnameError::DestinationExists(r.to.clone()));
        }
        dir.rename(&r.from, &r.to)?;
        info!(from = %r.from.display(), to = %r.to.display(), "renamed");
        moved += 1;
    }
    Ok(moved)
}

/// Load metadata, validate, plan and (unless `dry_run`) rename.
pub fn rename_directory(
    data: &Path,
    video_dir: &Path,
    opts: &RenameOptions,
) -> Result<RenameOutcome> {
    let records = load_records(data, opts)?;
    let mut dir = FsVideoDir::open(video_dir, &opts.extension)?;
    let videos = dir.list_videos()?;
    let plan = build_plan(&records, &videos, opts, &dir)?;

    let renamed = if opts.dry_run {
        0
    } else {
        apply_plan(&plan, &mut dir)?
    };
    Ok(RenameOutcome { plan, renamed })
}
