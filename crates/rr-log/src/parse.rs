//! Field parsers and the typed [`LogRow`].
//!
//! Each parser applies the recorder's bracket/brace stripping and split
//! scheme and nothing more:
//!
//! | Field        | Example       | Scheme                                      |
//! |--------------|---------------|---------------------------------------------|
//! | positions    | `[S,T,B]`     | strip `[]`, split on `,`                    |
//! | actions      | `[MOVE,CHRG]` | strip `[]`, split on `,`                    |
//! | cargo        | `{A B}`       | strip `{}`, split on whitespace             |
//! | studs left   | `(2, 4)`      | strip `()`/`[]`, two comma-separated ints   |

use std::fmt;

use rr_core::PositionCode;

use crate::{LogError, LogResult, RawLogRow};

/// Per-robot action code.  Decoded every frame but not used for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActionCode(pub String);

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wall material still to be placed, per axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct StudsLeft {
    pub horizontal: u32,
    pub vertical:   u32,
}

/// One fully parsed time step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRow {
    pub positions:  Vec<PositionCode>,
    pub actions:    Vec<ActionCode>,
    pub cargo:      Vec<String>,
    pub studs_left: StudsLeft,
}

impl LogRow {
    pub fn parse(raw: &RawLogRow) -> LogResult<Self> {
        Ok(Self {
            positions:  parse_positions(&raw.positions)?,
            actions:    parse_actions(&raw.actions),
            cargo:      parse_cargo(&raw.cargo),
            studs_left: parse_studs_left(&raw.studs_left)?,
        })
    }
}

// ── Parsers ───────────────────────────────────────────────────────────────────

/// Parse a bracketed position list such as `[S,T,B]`.
pub fn parse_positions(s: &str) -> LogResult<Vec<PositionCode>> {
    bracket_items(s)
        .map(|item| item.parse::<PositionCode>().map_err(LogError::from))
        .collect()
}

/// Parse a bracketed action list such as `[MOVE,CHRG]`.
pub fn parse_actions(s: &str) -> Vec<ActionCode> {
    bracket_items(s).map(|a| ActionCode(a.to_owned())).collect()
}

/// Parse a cargo set such as `{A B}` into per-robot labels.  `{}` is empty.
pub fn parse_cargo(s: &str) -> Vec<String> {
    s.trim()
        .trim_matches(|c| c == '{' || c == '}')
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Parse a two-integer literal such as `(2, 4)` or `[0,0]`.
pub fn parse_studs_left(s: &str) -> LogResult<StudsLeft> {
    let fail = |reason: String| LogError::Field {
        field:  "studs_left",
        value:  s.to_owned(),
        reason,
    };

    let inner = s.trim().trim_matches(|c| matches!(c, '(' | ')' | '[' | ']'));
    let parts: Vec<&str> = inner
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let [h, v] = parts.as_slice() else {
        return Err(fail(format!("expected two integers, found {}", parts.len())));
    };
    let horizontal = h.parse::<u32>().map_err(|e| fail(format!("{h:?}: {e}")))?;
    let vertical = v.parse::<u32>().map_err(|e| fail(format!("{v:?}: {e}")))?;

    Ok(StudsLeft { horizontal, vertical })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Strip enclosing brackets and split on commas.  A blank list has no items.
fn bracket_items(s: &str) -> impl Iterator<Item = &str> {
    let inner = s.trim().trim_matches(|c| c == '[' || c == ']').trim();
    inner
        .split(',')
        .map(|item| item.trim().trim_matches(|c| c == '\'' || c == '"'))
        .filter(move |_| !inner.is_empty())
}
