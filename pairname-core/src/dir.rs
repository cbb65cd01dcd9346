// pairname_core/src/dir.rs
use std::path::Path;

use crate::domain::VideoFile;
use crate::error::Result;

pub trait VideoDir {
    fn root(&self) -> &Path;

    /// Video files directly inside `root`, sorted by file name.
    fn list_videos(&self) -> Result<Vec<VideoFile>>;

    fn exists(&self, path: &Path) -> bool;

    /// True when both paths name the same directory entry, which on a
    /// case-insensitive filesystem includes names differing only in case.
    fn same_entry(&self, a: &Path, b: &Path) -> bool {
        a == b
    }

    fn rename(&mut self, from: &Path, to: &Path) -> Result<()>;
}
