use crate::domain::{MetadataRecord, Side};
use crate::options::RenameOptions;

/// `/` is a path separator on every platform we target.
pub fn sanitize_component(s: &str) -> String {
    s.replace('/', "-")
}

/// `<subject> - <section> - <date> - <title> - <side>.<ext>`
pub fn render_name(record: &MetadataRecord, side: Side, opts: &RenameOptions) -> String {
    format!(
        "{} - {} - {} - {} - {}.{}",
        sanitize_component(&record.subject),
        sanitize_component(&record.section),
        sanitize_component(&record.date.to_string()),
        sanitize_component(&record.title),
        side.label(opts),
        opts.extension,
    )
}

/// Both names for a record, left first.
pub fn render_pair(record: &MetadataRecord, opts: &RenameOptions) -> [String; 2] {
    [
        render_name(record, Side::Left, opts),
        render_name(record, Side::Right, opts),
    ]
}
