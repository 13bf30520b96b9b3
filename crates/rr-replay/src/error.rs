//! Error types for rr-replay.

use rr_core::{CoreError, PositionCode};
use rr_log::LogError;
use thiserror::Error;

/// Errors that fail the decode of a single frame.  None of them end the
/// session; the previously drawn frame stays on screen.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("log row error: {0}")]
    Log(#[from] LogError),

    #[error("scene error: {0}")]
    Core(#[from] CoreError),

    #[error("robot {slot}: no transit rule for {prev} -> {next}")]
    UnknownTransit {
        slot: usize,
        prev: PositionCode,
        next: PositionCode,
    },

    #[error("robot {slot} is in transit but the {neighbor} row has no entry for it")]
    MissingNeighborSlot { slot: usize, neighbor: &'static str },

    #[error("{axis} studs left {left} exceeds wall capacity {capacity}")]
    StudsOutOfRange {
        axis:     &'static str,
        left:     u32,
        capacity: u32,
    },
}

pub type ReplayResult<T> = Result<T, ReplayError>;
