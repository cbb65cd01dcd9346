use std::collections::HashSet;

use tracing::debug;

use crate::dir::VideoDir;
use crate::domain::{MetadataRecord, PlannedRename, RenamePlan, Side, VideoFile};
use crate::error::{PairnameError, Result};
use crate::naming::render_name;
use crate::options::RenameOptions;

/// Every record owns exactly two files. Odd counts are rejected outright.
pub fn check_counts(files: usize, rows: usize) -> Result<()> {
    if files != rows * 2 {
        return Err(PairnameError::CountMismatch { files, rows });
    }
    Ok(())
}

/// Pair sorted videos with records in order and resolve every destination.
/// Nothing on disk is touched; any error leaves the directory as it was.
pub fn build_plan(
    records: &[MetadataRecord],
    videos: &[VideoFile],
    opts: &RenameOptions,
    dir: &dyn VideoDir,
) -> Result<RenamePlan> {
    check_counts(videos.len(), records.len())?;

    let mut plan = RenamePlan::default();
    let mut seen = HashSet::new();
    for (pair, record) in videos.chunks_exact(2).zip(records) {
        for (video, side) in pair.iter().zip([Side::Left, Side::Right]) {
            let name = render_name(record, side, opts);
            let to = dir.root().join(&name);
            // case-insensitive filesystems treat these as one entry
            if !seen.insert(name.to_lowercase()) {
                return Err(PairnameError::DestinationExists(to));
            }
            if !dir.same_entry(&video.path, &to) && dir.exists(&to) {
                return Err(PairnameError::DestinationExists(to));
            }
            plan.renames.push(PlannedRename {
                record_line: record.line,
                side,
                from: video.path.clone(),
                to,
            });
        }
    }

    debug!(renames = plan.len(), "built rename plan");
    Ok(plan)
}
