#![forbid(unsafe_code)]

pub mod error;
pub mod options;

pub mod domain;
pub mod metadata;
pub mod naming;

pub mod dir;
pub mod dir_fs;

pub mod check;
pub mod plan;
pub mod rename;

// Re-exports: stable API surface
pub use check::check_directory;
pub use domain::{
    CheckReport, MetadataRecord, PairStatus, RecordCheck, RenameOutcome, RenamePlan, Side,
    VideoFile,
};
pub use metadata::companion_path;
pub use metadata::loader::load_records;
pub use options::RenameOptions;
pub use plan::{build_plan, check_counts};
pub use rename::{apply_plan, rename_directory};
