//! `rr-core` — foundational types for the `robot_replay` log viewer.
//!
//! This crate is a dependency of every other `rr-*` crate.  It has no `rr-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`geom`]   | `Point`, `ViewBounds`                                       |
//! | [`zone`]   | `Zone`, `PositionCode`, `Midpoint`, `Anchor`, `Orientation`, `RobotStatus` |
//! | [`layout`] | `SceneConfig`, `ZoneLayout` (the layout engine)             |
//! | [`error`]  | `CoreError`, `CoreResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Deserialize` to `SceneConfig` for file-based config. |

pub mod error;
pub mod geom;
pub mod layout;
pub mod zone;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geom::{Point, ViewBounds};
pub use layout::{SceneConfig, ZoneLayout};
pub use zone::{Anchor, Midpoint, Orientation, PositionCode, RobotStatus, Zone};
