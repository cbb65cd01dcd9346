use std::collections::HashSet;
use std::path::Path;

use crate::dir::VideoDir;
use crate::dir_fs::FsVideoDir;
use crate::domain::{CheckReport, MetadataRecord, PairStatus, RecordCheck, VideoFile};
use crate::error::Result;
use crate::metadata::loader::load_records;
use crate::naming::render_pair;
use crate::options::RenameOptions;

/// Transliterate to ASCII so accents, and composed vs. decomposed forms,
/// compare equal.
pub fn fold_name(name: &str) -> String {
    deunicode::deunicode(name)
}

/// Status of each record's pair plus the videos no record claims.
pub fn compare(records: &[MetadataRecord], videos: &[VideoFile], opts: &RenameOptions) -> CheckReport {
    let present: HashSet<String> = videos.iter().map(|v| fold_name(&v.name)).collect();
    let mut expected = HashSet::new();

    let records = records
        .iter()
        .map(|r| {
            let [left, right] = render_pair(r, opts);
            let (l, rt) = (fold_name(&left), fold_name(&right));
            let status = PairStatus::from_presence(present.contains(&l), present.contains(&rt));
            expected.insert(l);
            expected.insert(rt);
            RecordCheck {
                record_line: r.line,
                left,
                right,
                status,
            }
        })
        .collect();

    let mut orphans: Vec<String> = videos
        .iter()
        .filter(|v| !expected.contains(&fold_name(&v.name)))
        .map(|v| v.name.clone())
        .collect();
    orphans.sort();

    CheckReport { records, orphans }
}

/// Read-only audit of an already renamed directory.
pub fn check_directory(data: &Path, video_dir: &Path, opts: &RenameOptions) -> Result<CheckReport> {
    let records = load_records(data, opts)?;
    let dir = FsVideoDir::open(video_dir, &opts.extension)?;
    let videos = dir.list_videos()?;
    Ok(compare(&records, &videos, opts))
}
