pub mod date;
pub mod loader;

use std::path::{Path, PathBuf};

/// Metadata file that sits next to the video directory, named after it:
/// `recordings/turma-a/` pairs with `recordings/turma-a.csv`.
pub fn companion_path(video_dir: &Path) -> Option<PathBuf> {
    let name = video_dir.file_name()?;
    let parent = video_dir.parent()?;
    Some(parent.join(format!("{}.csv", name.to_string_lossy())))
}
