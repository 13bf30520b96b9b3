//! Per-frame decoding: three adjacent log rows → robot draw instructions.

use rr_core::{Anchor, Orientation, Point, PositionCode, RobotStatus, ZoneLayout};
use rr_log::{ActionCode, LogRow, LogTable, RawLogRow, StudsLeft, parse_positions};
use tracing::debug;

use crate::{ReplayError, ReplayResult, resolve_transit};

/// Studs per axis in a finished wall.
pub const WALL_CAPACITY: StudsLeft = StudsLeft { horizontal: 2, vertical: 4 };

/// Every robot is drawn with this status; action codes do not change it.
const FRAME_STATUS: RobotStatus = RobotStatus::Charging;

/// Studs already placed, per axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct BuiltUnits {
    pub horizontal: u32,
    pub vertical:   u32,
}

/// Everything needed to draw one robot.  Recomputed every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RobotDrawState {
    /// Position in the row's robot list; also selects body colour and stagger.
    pub slot:        usize,
    pub anchor:      Anchor,
    /// Scene position of `anchor`, before per-slot staggering.
    pub position:    Point,
    pub orientation: Orientation,
    pub cargo:       Option<String>,
    pub status:      RobotStatus,
}

/// A decoded time step.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub index:   usize,
    pub robots:  Vec<RobotDrawState>,
    /// Decoded for inspection only; rendering ignores them.
    pub actions: Vec<ActionCode>,
    pub built:   BuiltUnits,
}

/// Convert studs remaining into studs built.
pub fn built_units(left: StudsLeft) -> ReplayResult<BuiltUnits> {
    let axis = |name: &'static str, left: u32, capacity: u32| {
        capacity
            .checked_sub(left)
            .ok_or(ReplayError::StudsOutOfRange { axis: name, left, capacity })
    };
    Ok(BuiltUnits {
        horizontal: axis("horizontal", left.horizontal, WALL_CAPACITY.horizontal)?,
        vertical:   axis("vertical", left.vertical, WALL_CAPACITY.vertical)?,
    })
}

/// Decode the row at `index` of `table`, wrapping to find its neighbours.
pub fn decode_row(table: &LogTable, layout: &ZoneLayout, index: usize) -> ReplayResult<Frame> {
    let (prev, cur, next) = table.neighbors(index);
    decode_frame(layout, index % table.len(), prev, cur, next)
}

/// Decode `cur` given the rows either side of it.  Pure: the same inputs
/// always give the same frame.
///
/// Neighbour rows are only position-parsed, and only when some robot in
/// `cur` is in transit.
pub fn decode_frame(
    layout: &ZoneLayout,
    index:  usize,
    prev:   &RawLogRow,
    cur:    &RawLogRow,
    next:   &RawLogRow,
) -> ReplayResult<Frame> {
    let row = LogRow::parse(cur)?;
    debug!(index, positions = ?row.positions, actions = ?row.actions, "decoding frame");

    let (before, after) = if row.positions.contains(&PositionCode::Transit) {
        (parse_positions(&prev.positions)?, parse_positions(&next.positions)?)
    } else {
        (Vec::new(), Vec::new())
    };

    let robots = row
        .positions
        .iter()
        .enumerate()
        .map(|(slot, code)| -> ReplayResult<RobotDrawState> {
            let (anchor, orientation) = resolve_slot(slot, *code, &before, &after)?;
            Ok(RobotDrawState {
                slot,
                anchor,
                position: layout.anchor(anchor),
                orientation,
                cargo: row.cargo.get(slot).cloned(),
                status: FRAME_STATUS,
            })
        })
        .collect::<ReplayResult<Vec<_>>>()?;

    Ok(Frame {
        index,
        robots,
        actions: row.actions,
        built: built_units(row.studs_left)?,
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn resolve_slot(
    slot:   usize,
    code:   PositionCode,
    before: &[PositionCode],
    after:  &[PositionCode],
) -> ReplayResult<(Anchor, Orientation)> {
    match code {
        PositionCode::At(zone) => Ok((Anchor::Zone(zone), Orientation::Up)),
        PositionCode::Transit => {
            let prev = *before
                .get(slot)
                .ok_or(ReplayError::MissingNeighborSlot { slot, neighbor: "previous" })?;
            let next = *after
                .get(slot)
                .ok_or(ReplayError::MissingNeighborSlot { slot, neighbor: "next" })?;
            let rule = match (prev.zone(), next.zone()) {
                (Some(from), Some(to)) => resolve_transit(from, to),
                _ => None,
            }
            .ok_or(ReplayError::UnknownTransit { slot, prev, next })?;
            Ok((Anchor::Midpoint(rule.midpoint), rule.orientation))
        }
    }
}
