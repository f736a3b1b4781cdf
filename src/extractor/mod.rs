mod line;
mod record;

pub use self::{
    line::{parse_line, ParsedLine, SkipReason},
    record::{RawRecord, RecordId},
};

use std::{fs, path::Path};

use tracing::{debug, warn};

use crate::{
    config::Year,
    error::{Error, Result},
};

/// Boilerplate lines at the top of the locations list.
pub const HEADER_LINES: usize = 14;
/// The closing separator line.
pub const TRAILER_LINES: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the dataset.
    pub line_number: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Accepted records in dataset order.
    pub records: Vec<RawRecord>,
    pub lines_selected: usize,
    pub skipped: Vec<SkippedLine>,
}

/// Reads the whole dataset once. Invalid UTF-8 is replaced, not rejected.
pub fn read_dataset(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::InvalidArgument {
        parameter: "path_to_dataset",
        reason: format!("cannot read {}: {e}", path.display()),
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Collects the records of every data line mentioning `(year)`.
///
/// Selection is a plain substring match, so a line whose only `(year)` sits
/// somewhere other than the release-year position is still selected.
pub fn extract(text: &str, year: &Year) -> Extraction {
    let marker = year.marker();
    let lines = text.lines().collect::<Vec<_>>();
    let data_end = lines.len().saturating_sub(TRAILER_LINES);
    let data = lines.get(HEADER_LINES..data_end).unwrap_or_default();

    let mut extraction = Extraction::default();

    for (index, line) in data.iter().enumerate() {
        if !line.contains(&marker) {
            continue;
        }
        extraction.lines_selected += 1;

        let line_number = HEADER_LINES + index + 1;
        match parse_line(line) {
            Ok(ParsedLine { title, location }) => {
                let id = RecordId::new(title.to_string(), extraction.records.len());
                debug!(%id, location, "extracted record");
                extraction
                    .records
                    .push(RawRecord::new(id, location.to_string()));
            }
            Err(reason) => {
                warn!(line_number, %reason, "skipping dataset line");
                extraction.skipped.push(SkippedLine {
                    line_number,
                    reason,
                });
            }
        }
    }

    extraction
}
