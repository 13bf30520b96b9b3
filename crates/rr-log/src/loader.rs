//! CSV log loader.
//!
//! # CSV format
//!
//! One row per time step.  Column 0 is an index written by the recorder and
//! is ignored; the next four columns carry the data.  Fields containing
//! commas must be quoted, as any CSV writer does for them.
//!
//! ```csv
//! ,positions,actions,cargo,studs_left
//! 0,"[S,C]","[PICK,CHRG]",{A B},"(2, 4)"
//! 1,"[T,C]","[MOVE,CHRG]",{A B},"(2, 4)"
//! 2,"[B,T]","[PLACE,MOVE]",{- B},"(1, 4)"
//! ```
//!
//! Column positions can be overridden with [`LogColumns`].  Header names are
//! not checked.

use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::info;

use crate::{LogError, LogResult, LogTable, RawLogRow};

/// Zero-based column positions of the four data fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LogColumns {
    pub positions:  usize,
    pub actions:    usize,
    pub cargo:      usize,
    pub studs_left: usize,
}

impl Default for LogColumns {
    fn default() -> Self {
        Self {
            positions:  1,
            actions:    2,
            cargo:      3,
            studs_left: 4,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the log table from a CSV file with a header row.
pub fn load_log_csv(path: &Path, columns: &LogColumns) -> LogResult<LogTable> {
    let file = std::fs::File::open(path).map_err(LogError::Io)?;
    let table = load_log_reader(file, columns)?;
    info!(path = %path.display(), rows = table.len(), "loaded task log");
    Ok(table)
}

/// Like [`load_log_csv`] but accepts any `Read` source.
pub fn load_log_reader<R: Read>(reader: R, columns: &LogColumns) -> LogResult<LogTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, result) in csv_reader.records().enumerate() {
        let record = result?;
        rows.push(RawLogRow {
            positions:  field(&record, i, columns.positions)?,
            actions:    field(&record, i, columns.actions)?,
            cargo:      field(&record, i, columns.cargo)?,
            studs_left: field(&record, i, columns.studs_left)?,
        });
    }

    LogTable::new(rows)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn field(record: &StringRecord, row: usize, column: usize) -> LogResult<String> {
    record
        .get(column)
        .map(str::to_owned)
        .ok_or(LogError::MissingColumn { row, column })
}
