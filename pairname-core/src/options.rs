#[derive(Clone, Debug)]
pub struct RenameOptions {
    /// Video extension without the dot; matched case-sensitively.
    pub extension: String,
    pub left_label: String,
    pub right_label: String,
    pub delimiter: u8,
    /// Build and report the plan without touching the filesystem.
    pub dry_run: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            extension: "mp4".to_string(),
            left_label: "esq".to_string(),
            right_label: "dir".to_string(),
            delimiter: b';',
            dry_run: false,
        }
    }
}
