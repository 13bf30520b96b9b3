//! The in-memory log table.

use crate::{LogError, LogResult};

/// One time step as it appears in the file, before field parsing.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RawLogRow {
    /// Bracketed, comma-separated position codes, e.g. `[S,T]`.
    pub positions:  String,
    /// Bracketed, comma-separated action codes, e.g. `[PICK,MOVE]`.
    pub actions:    String,
    /// Brace-delimited, space-separated cargo labels, e.g. `{A B}`.
    pub cargo:      String,
    /// Two-integer studs-remaining literal, e.g. `(2, 4)`.
    pub studs_left: String,
}

impl RawLogRow {
    pub fn new(
        positions:  impl Into<String>,
        actions:    impl Into<String>,
        cargo:      impl Into<String>,
        studs_left: impl Into<String>,
    ) -> Self {
        Self {
            positions:  positions.into(),
            actions:    actions.into(),
            cargo:      cargo.into(),
            studs_left: studs_left.into(),
        }
    }
}

/// Ordered, fixed-length, read-only sequence of log rows.
///
/// Never empty: construction fails with [`LogError::Empty`] otherwise, so
/// modular indexing is always defined.
#[derive(Clone, Debug)]
pub struct LogTable {
    rows: Vec<RawLogRow>,
}

impl LogTable {
    pub fn new(rows: Vec<RawLogRow>) -> LogResult<Self> {
        if rows.is_empty() {
            return Err(LogError::Empty);
        }
        Ok(Self { rows })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at `index`, taken modulo the table length.
    pub fn row(&self, index: usize) -> &RawLogRow {
        &self.rows[index % self.rows.len()]
    }

    /// `(previous, current, next)` around `index`, wrapping at both ends.
    pub fn neighbors(&self, index: usize) -> (&RawLogRow, &RawLogRow, &RawLogRow) {
        let n = self.rows.len();
        let i = index % n;
        (&self.rows[(i + n - 1) % n], &self.rows[i], &self.rows[(i + 1) % n])
    }

    pub fn rows(&self) -> &[RawLogRow] {
        &self.rows
    }
}
