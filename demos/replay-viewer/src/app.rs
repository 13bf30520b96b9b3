//! egui host: paints the session's display list and turns key presses into
//! steps.

use anyhow::{Result, anyhow};
use rr_core::{Point, ViewBounds};
use rr_replay::{Color, Direction, DisplayList, DrawCommand, ReplaySession, TextAnchor};

use crate::config::KeyBindings;

/// The two navigation keys, resolved from their configured names.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavKeys {
    pub advance: egui::Key,
    pub retreat: egui::Key,
}

impl NavKeys {
    pub fn resolve(bindings: &KeyBindings) -> Result<Self> {
        let key = |name: &str| egui::Key::from_name(name).ok_or_else(|| anyhow!("unknown key name {name:?}"));
        let keys = Self {
            advance: key(&bindings.advance)?,
            retreat: key(&bindings.retreat)?,
        };
        if keys.advance == keys.retreat {
            return Err(anyhow!("advance and retreat are both bound to {:?}", keys.advance));
        }
        Ok(keys)
    }
}

/// Scene → screen transform that keeps both axes at the same scale.
#[derive(Copy, Clone, Debug)]
pub struct Viewport {
    scale:  f32,
    center: Point,
    screen: egui::Pos2,
}

impl Viewport {
    /// Fit `bounds` inside `rect`, letterboxing the spare axis.
    pub fn fit(bounds: ViewBounds, rect: egui::Rect) -> Self {
        let sx = rect.width() as f64 / bounds.width();
        let sy = rect.height() as f64 / bounds.height();
        Self {
            scale:  sx.min(sy) as f32,
            center: bounds.center(),
            screen: rect.center(),
        }
    }

    pub fn to_screen(&self, p: Point) -> egui::Pos2 {
        egui::pos2(
            self.screen.x + (p.x - self.center.x) as f32 * self.scale,
            self.screen.y - (p.y - self.center.y) as f32 * self.scale,
        )
    }

    pub fn length(&self, d: f64) -> f32 {
        d as f32 * self.scale
    }

    /// Screen rectangle of a scene rectangle given by its lower-left corner.
    pub fn rect(&self, min: Point, width: f64, height: f64) -> egui::Rect {
        egui::Rect::from_two_pos(self.to_screen(min), self.to_screen(min.offset(width, height)))
    }
}

fn color32(c: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

fn align(anchor: TextAnchor) -> egui::Align2 {
    match anchor {
        TextAnchor::Left   => egui::Align2::LEFT_CENTER,
        TextAnchor::Center => egui::Align2::CENTER_CENTER,
        TextAnchor::Right  => egui::Align2::RIGHT_CENTER,
    }
}

/// Replay every recorded command onto `painter`.
pub fn paint(painter: &egui::Painter, view: &Viewport, list: &DisplayList) {
    for cmd in list.commands() {
        match cmd {
            DrawCommand::Circle { center, radius, color } => {
                painter.circle_filled(view.to_screen(*center), view.length(*radius), color32(*color));
            }
            DrawCommand::Rect { min, width, height, color } => {
                painter.rect_filled(view.rect(*min, *width, *height), egui::CornerRadius::ZERO, color32(*color));
            }
            DrawCommand::Line { from, to, width, color } => {
                painter.line_segment(
                    [view.to_screen(*from), view.to_screen(*to)],
                    egui::Stroke::new(*width, color32(*color)),
                );
            }
            DrawCommand::Text { at, text, size, anchor, color } => {
                painter.text(
                    view.to_screen(*at),
                    align(*anchor),
                    text,
                    egui::FontId::proportional(*size),
                    color32(*color),
                );
            }
        }
    }
}

pub struct ViewerApp {
    session:       ReplaySession<DisplayList>,
    keys:          NavKeys,
    /// Last decode error, shown until the next good frame.
    status:        Option<String>,
    seen_repaints: u64,
}

impl ViewerApp {
    pub fn new(session: ReplaySession<DisplayList>, keys: NavKeys) -> Self {
        Self {
            session,
            keys,
            status: None,
            seen_repaints: 0,
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let (advance, retreat) = ctx.input(|i| (i.key_pressed(self.keys.advance), i.key_pressed(self.keys.retreat)));
        let steps = [(advance, Direction::Forward), (retreat, Direction::Backward)];
        for (pressed, direction) in steps {
            if !pressed {
                continue;
            }
            let failed = self.session.step(direction).err();
            self.status = failed.map(|e| format!("row {}: {e}", self.session.cursor()));
        }
    }

    fn caption(&self) -> String {
        let total = self.session.table().len();
        match self.session.frame() {
            Some(f) => format!("row {} / {}", f.index + 1, total),
            None    => format!("{total} rows: press {:?} to start", self.keys.advance),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let repaints = self.session.canvas().repaints();
        if repaints != self.seen_repaints {
            self.seen_repaints = repaints;
            ctx.request_repaint();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(color32(Color::WHITE)))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let view = Viewport::fit(self.session.layout().view_bounds(), rect);
                paint(ui.painter(), &view, self.session.canvas());

                let caption_pos = rect.left_bottom() + egui::vec2(8.0, -8.0);
                ui.painter().text(
                    caption_pos,
                    egui::Align2::LEFT_BOTTOM,
                    self.caption(),
                    egui::FontId::monospace(13.0),
                    egui::Color32::DARK_GRAY,
                );
                if let Some(err) = &self.status {
                    ui.painter().text(
                        caption_pos - egui::vec2(0.0, 18.0),
                        egui::Align2::LEFT_BOTTOM,
                        err,
                        egui::FontId::monospace(13.0),
                        egui::Color32::DARK_RED,
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys_are_arrows() {
        let keys = NavKeys::resolve(&KeyBindings::default()).unwrap();
        assert_eq!(keys.advance, egui::Key::ArrowRight);
        assert_eq!(keys.retreat, egui::Key::ArrowLeft);
    }

    #[test]
    fn unknown_key_name_rejected() {
        let bindings = KeyBindings { advance: "Warp".into(), ..KeyBindings::default() };
        assert!(NavKeys::resolve(&bindings).is_err());
    }

    #[test]
    fn same_key_twice_rejected() {
        let bindings = KeyBindings { advance: "ArrowLeft".into(), retreat: "ArrowLeft".into() };
        assert!(NavKeys::resolve(&bindings).is_err());
    }

    #[test]
    fn viewport_keeps_aspect_and_flips_y() {
        let bounds = ViewBounds { x_min: -16.0, x_max: 16.0, y_min: -8.0, y_max: 8.0 };
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(640.0, 640.0));
        let view = Viewport::fit(bounds, rect);

        // Width-limited: 640 px / 32 units.
        assert_eq!(view.length(1.0), 20.0);
        assert_eq!(view.to_screen(Point::new(0.0, 0.0)), egui::pos2(320.0, 320.0));
        assert_eq!(view.to_screen(Point::new(1.0, 1.0)), egui::pos2(340.0, 300.0));
    }

    #[test]
    fn scene_rect_maps_to_screen_rect() {
        let bounds = ViewBounds { x_min: -10.0, x_max: 10.0, y_min: -10.0, y_max: 10.0 };
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(200.0, 200.0));
        let view = Viewport::fit(bounds, rect);
        let r = view.rect(Point::new(0.0, 0.0), 2.0, 1.0);
        assert_eq!(r.min, egui::pos2(100.0, 90.0));
        assert_eq!(r.max, egui::pos2(120.0, 100.0));
    }
}
