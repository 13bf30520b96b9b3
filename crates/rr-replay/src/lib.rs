//! `rr-replay` — step through a recorded task log and draw each frame.
//!
//! # Frame cycle
//!
//! ```text
//! key press
//!   ① Step    — cursor = (cursor ± 1) mod N
//!   ② Decode  — rows[cursor-1], rows[cursor], rows[cursor+1] → Frame
//!               (transit codes resolved through the six-entry lookup table)
//!   ③ Render  — clear, zones + labels, robots, wall, request repaint
//! ```
//!
//! Decoding is pure given three rows; rendering only talks to a [`Canvas`].
//! [`DisplayList`] records draw commands so the whole cycle runs headless.
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`cursor`]    | `Cursor`, `Direction`, `step_index`                     |
//! | [`transit`]   | `TransitRule`, `TRANSIT_RULES`, `resolve_transit`       |
//! | [`frame`]     | `Frame`, `RobotDrawState`, `BuiltUnits`, `decode_frame`, `decode_row` |
//! | [`canvas`]    | `Canvas` trait, `Color`, `DrawCommand`, `DisplayList`   |
//! | [`render`]    | `SceneRenderer`, icon and wall dimensions               |
//! | [`session`]   | `ReplaySession` — owns table, cursor, renderer, canvas  |
//! | [`error`]     | `ReplayError`, `ReplayResult<T>`                        |

pub mod canvas;
pub mod cursor;
pub mod error;
pub mod frame;
pub mod render;
pub mod session;
pub mod transit;


pub use canvas::{Canvas, Color, DisplayList, DrawCommand, TextAnchor};
pub use cursor::{Cursor, Direction, step_index};
pub use error::{ReplayError, ReplayResult};
pub use frame::{BuiltUnits, Frame, RobotDrawState, WALL_CAPACITY, built_units, decode_frame, decode_row};
pub use render::SceneRenderer;
pub use session::ReplaySession;
pub use transit::{TRANSIT_RULES, TransitRule, resolve_transit};
