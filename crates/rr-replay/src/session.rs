//! The replay session: one table, one cursor, one canvas.

use std::num::NonZeroUsize;

use rr_core::ZoneLayout;
use rr_log::LogTable;
use tracing::{debug, warn};

use crate::{Canvas, Cursor, Direction, Frame, ReplayResult, SceneRenderer, decode_row};

/// Owns everything a viewer needs between key presses.
///
/// Created with [`ReplaySession::new`], which draws the static scene; torn
/// down with [`ReplaySession::finish`], which hands the canvas back.  The
/// cursor is the only state that changes between steps.
pub struct ReplaySession<C: Canvas> {
    table:    LogTable,
    renderer: SceneRenderer,
    cursor:   Cursor,
    canvas:   C,
    /// Last successfully decoded frame; `None` until the first step.
    frame:    Option<Frame>,
}

impl<C: Canvas> ReplaySession<C> {
    /// Start a session with the cursor parked before row 0 and only the
    /// zones drawn.
    pub fn new(table: LogTable, layout: ZoneLayout, canvas: C) -> Self {
        let len = table_len(&table);
        Self::with_cursor(table, layout, canvas, Cursor::before_first(len))
    }

    /// Like [`new`][Self::new] but the first forward step shows `row`.
    pub fn starting_at(table: LogTable, layout: ZoneLayout, canvas: C, row: usize) -> Self {
        let len = table_len(&table);
        let parked = Cursor::at(row % len.get() + len.get() - 1, len);
        Self::with_cursor(table, layout, canvas, parked)
    }

    fn with_cursor(table: LogTable, layout: ZoneLayout, mut canvas: C, cursor: Cursor) -> Self {
        let renderer = SceneRenderer::new(layout);
        renderer.render_static(&mut canvas);
        Self {
            table,
            renderer,
            cursor,
            canvas,
            frame: None,
        }
    }

    /// Move the cursor one row and redraw.
    ///
    /// The cursor always moves.  If the new row fails to decode the error is
    /// logged and returned, and the canvas keeps the previous frame.
    pub fn step(&mut self, direction: Direction) -> ReplayResult<&Frame> {
        let index = self.cursor.step(direction);
        debug!(index, delta = direction.delta(), "step");
        self.show(index)
    }

    /// Decode and draw the row under the cursor without moving it.
    pub fn redraw(&mut self) -> ReplayResult<&Frame> {
        self.show(self.cursor.index())
    }

    fn show(&mut self, index: usize) -> ReplayResult<&Frame> {
        match decode_row(&self.table, self.renderer.layout(), index) {
            Ok(frame) => {
                self.renderer.render(&mut self.canvas, &frame);
                Ok(self.frame.insert(frame))
            }
            Err(e) => {
                warn!(index, error = %e, "frame decode failed; keeping previous frame");
                Err(e)
            }
        }
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    pub fn table(&self) -> &LogTable {
        &self.table
    }

    pub fn layout(&self) -> &ZoneLayout {
        self.renderer.layout()
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// The frame currently on the canvas.
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// End the session and return the canvas.
    pub fn finish(self) -> C {
        self.canvas
    }
}

fn table_len(table: &LogTable) -> NonZeroUsize {
    // LogTable::new rejects empty tables.
    NonZeroUsize::new(table.len()).unwrap_or(NonZeroUsize::MIN)
}
