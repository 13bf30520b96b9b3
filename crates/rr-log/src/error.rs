use rr_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: missing column {column}")]
    MissingColumn { row: usize, column: usize },

    #[error("log table is empty")]
    Empty,

    #[error("cannot parse {field} {value:?}: {reason}")]
    Field {
        field:  &'static str,
        value:  String,
        reason: String,
    },

    #[error("position list: {0}")]
    Position(#[from] CoreError),
}

pub type LogResult<T> = Result<T, LogError>;
