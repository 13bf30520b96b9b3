//! `rr-log` — the recorded robot task log.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`table`]   | `RawLogRow`, `LogTable` (immutable, index-addressable)     |
//! | [`parse`]   | Field parsers, `LogRow`, `StudsLeft`, `ActionCode`         |
//! | [`loader`]  | `load_log_csv`, `load_log_reader`, `LogColumns`            |
//! | [`error`]   | `LogError`, `LogResult<T>`                                 |
//!
//! # Two-stage decoding
//!
//! The loader only splits the file into rows of raw field text.  Field
//! contents are parsed on demand by [`LogRow::parse`], so one corrupt row
//! fails the frame that shows it instead of the whole load.

pub mod error;
pub mod loader;
pub mod parse;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{LogError, LogResult};
pub use loader::{LogColumns, load_log_csv, load_log_reader};
pub use parse::{
    ActionCode, LogRow, StudsLeft, parse_actions, parse_cargo, parse_positions, parse_studs_left,
};
pub use table::{LogTable, RawLogRow};
