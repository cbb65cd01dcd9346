use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::domain::MetadataRecord;
use crate::error::{PairnameError, Result};
use crate::metadata::date::SessionDate;
use crate::options::RenameOptions;

/// date;teacher;subject;section;title[;url]
const MIN_COLUMNS: usize = 5;

pub fn load_records(path: &Path, opts: &RenameOptions) -> Result<Vec<MetadataRecord>> {
    let file = File::open(path).map_err(|source| PairnameError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .delimiter(opts.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        // +1 for header, +1 for 1-based lines
        let line = row.position().map(|p| p.line()).unwrap_or(i as u64 + 2);
        if row.iter().all(str::is_empty) {
            continue;
        }
        if row.len() < MIN_COLUMNS {
            return Err(PairnameError::MalformedRow {
                line,
                found: row.len(),
            });
        }

        let url = row.get(5).filter(|u| !u.is_empty()).map(str::to_string);
        records.push(MetadataRecord {
            line,
            date: SessionDate::from_token(&row[0]),
            teacher: row[1].to_string(),
            subject: row[2].to_string(),
            section: row[3].to_string(),
            title: row[4].replace(':', " -"),
            url,
        });
    }

    let raw_dates = records.iter().filter(|r| !r.date.is_parsed()).count();
    debug!(
        path = %path.display(),
        rows = records.len(),
        raw_dates,
        "loaded metadata"
    );
    Ok(records)
}
