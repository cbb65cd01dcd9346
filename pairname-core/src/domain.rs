// pairname_core/src/domain.rs
use std::path::PathBuf;

use serde::Serialize;

use crate::metadata::date::SessionDate;
use crate::options::RenameOptions;

/// One data row of the metadata file: a class session recorded from two angles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataRecord {
    /// 1-based line in the source file; the header is line 1.
    pub line: u64,
    pub date: SessionDate,
    pub teacher: String,
    pub subject: String,
    pub section: String,
    pub title: String,
    pub url: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn label<'a>(&self, opts: &'a RenameOptions) -> &'a str {
        match self {
            Side::Left => &opts.left_label,
            Side::Right => &opts.right_label,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoFile {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Clone, Debug, Serialize)]
pub struct PlannedRename {
    pub record_line: u64,
    pub side: Side,
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct RenamePlan {
    pub renames: Vec<PlannedRename>,
}

impl RenamePlan {
    pub fn len(&self) -> usize {
        self.renames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct RenameOutcome {
    pub plan: RenamePlan,
    /// Number of files actually moved; names already correct and dry runs
    /// move nothing.
    pub renamed: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairStatus {
    Complete,
    MissingLeft,
    MissingRight,
    MissingBoth,
}

impl PairStatus {
    pub fn from_presence(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, true) => PairStatus::Complete,
            (false, true) => PairStatus::MissingLeft,
            (true, false) => PairStatus::MissingRight,
            (false, false) => PairStatus::MissingBoth,
        }
    }

    /// Sides present on disk.
    pub fn found(&self) -> usize {
        match self {
            PairStatus::Complete => 2,
            PairStatus::MissingLeft | PairStatus::MissingRight => 1,
            PairStatus::MissingBoth => 0,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RecordCheck {
    pub record_line: u64,
    pub left: String,
    pub right: String,
    pub status: PairStatus,
}

impl RecordCheck {
    /// Expected names not found on disk.
    pub fn missing(&self) -> Vec<&str> {
        match self.status {
            PairStatus::Complete => vec![],
            PairStatus::MissingLeft => vec![self.left.as_str()],
            PairStatus::MissingRight => vec![self.right.as_str()],
            PairStatus::MissingBoth => vec![self.left.as_str(), self.right.as_str()],
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct CheckReport {
    pub records: Vec<RecordCheck>,
    /// Videos no record accounts for, sorted.
    pub orphans: Vec<String>,
}

impl CheckReport {
    /// Expected files found, counted per record side.
    pub fn matched(&self) -> usize {
        self.records.iter().map(|r| r.status.found()).sum()
    }

    pub fn count(&self, status: PairStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }

    pub fn incomplete(&self) -> usize {
        self.records.len() - self.count(PairStatus::Complete)
    }

    pub fn is_clean(&self) -> bool {
        self.incomplete() == 0 && self.orphans.is_empty()
    }
}
