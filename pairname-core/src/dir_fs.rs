use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::dir::VideoDir;
use crate::domain::VideoFile;
use crate::error::{PairnameError, Result};

pub struct FsVideoDir {
    root: PathBuf,
    extension: String,
}

impl FsVideoDir {
    pub fn open(root: &Path, extension: &str) -> Result<Self> {
        if !root.is_dir() {
            return Err(PairnameError::NotADirectory(root.to_path_buf()));
        }
        Ok(Self {
            root: root.to_path_buf(),
            extension: extension.to_string(),
        })
    }

    fn is_video(&self, name: &str) -> bool {
        !name.starts_with('.')
            && Path::new(name)
                .extension()
                .is_some_and(|ext| ext == self.extension.as_str())
    }
}

impl VideoDir for FsVideoDir {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list_videos(&self) -> Result<Vec<VideoFile>> {
        let mut out = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if self.is_video(&name) {
                out.push(VideoFile {
                    name,
                    path: entry.path().to_path_buf(),
                });
            }
        }
        debug!(root = %self.root.display(), videos = out.len(), "listed directory");
        Ok(out)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn same_entry(&self, a: &Path, b: &Path) -> bool {
        a == b || same_file::is_same_file(a, b).unwrap_or(false)
    }

    fn rename(&mut self, from: &Path, to: &Path) -> Result<()> {
        fs::rename(from, to)?;
        Ok(())
    }
}
