//! The drawing surface seam.
//!
//! [`SceneRenderer`][crate::SceneRenderer] only issues shape commands in
//! scene coordinates through [`Canvas`].  The viewer binary paints a
//! [`DisplayList`] into an egui window; tests inspect the same list.

use rr_core::Point;

/// RGBA colour, components in `0..=255`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK:  Color = Color::rgb(0, 0, 0);
    pub const WHITE:  Color = Color::rgb(255, 255, 255);
    pub const RED:    Color = Color::rgb(255, 0, 0);
    pub const GREEN:  Color = Color::rgb(0, 128, 0);
    pub const BLUE:   Color = Color::rgb(0, 0, 255);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const GREY:   Color = Color::rgb(128, 128, 128);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const BROWN:  Color = Color::rgb(165, 42, 42);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same colour with opacity `alpha` in `0.0..=1.0`.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8, ..self }
    }
}

/// Horizontal alignment of text relative to its anchor point.  Text is
/// always centred vertically.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TextAnchor {
    Left,
    Center,
    Right,
}

/// A drawing surface that accepts shape commands in scene coordinates.
pub trait Canvas {
    /// Drop everything drawn so far.
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Filled axis-aligned rectangle with lower-left corner `min`.
    fn fill_rect(&mut self, min: Point, width: f64, height: f64, color: Color);

    /// Line segment; `width` is in screen points.
    fn line(&mut self, from: Point, to: Point, width: f32, color: Color);

    /// Text; `size` is in screen points.
    fn text(&mut self, at: Point, text: &str, size: f32, anchor: TextAnchor, color: Color);

    /// Ask the host to show what was drawn.
    fn request_repaint(&mut self);
}

/// One recorded canvas call.
#[derive(Clone, PartialEq, Debug)]
pub enum DrawCommand {
    Circle {
        center: Point,
        radius: f64,
        color:  Color,
    },
    Rect {
        min:    Point,
        width:  f64,
        height: f64,
        color:  Color,
    },
    Line {
        from:  Point,
        to:    Point,
        width: f32,
        color: Color,
    },
    Text {
        at:     Point,
        text:   String,
        size:   f32,
        anchor: TextAnchor,
        color:  Color,
    },
}

/// A [`Canvas`] that records commands in draw order.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    repaints: u64,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of repaint requests since creation.
    pub fn repaints(&self) -> u64 {
        self.repaints
    }

    /// All text strings, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for DisplayList {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn fill_rect(&mut self, min: Point, width: f64, height: f64, color: Color) {
        self.commands.push(DrawCommand::Rect { min, width, height, color });
    }

    fn line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }

    fn text(&mut self, at: Point, text: &str, size: f32, anchor: TextAnchor, color: Color) {
        self.commands.push(DrawCommand::Text {
            at,
            text: text.to_owned(),
            size,
            anchor,
            color,
        });
    }

    fn request_repaint(&mut self) {
        self.repaints += 1;
    }
}
