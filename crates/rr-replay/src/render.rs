//! Scene renderer: zones, labels, robot icons, and the wall.
//!
//! All dimensions are scene units unless noted.

use rr_core::{Orientation, Point, RobotStatus, Zone, ZoneLayout};

use crate::{BuiltUnits, Canvas, Color, Frame, RobotDrawState, TextAnchor};

// ── Constants ─────────────────────────────────────────────────────────────────

const ZONE_ALPHA:   f32 = 0.5;
const LABEL_OFFSET: f64 = 2.4;
const FONT_SIZE:    f32 = 16.0;

const BODY_WIDTH:   f64 = 1.0;
const BODY_HEIGHT:  f64 = 1.5;
const WHEEL_SIZE:   f64 = 0.3;
/// Slot `i` is shifted by `(2i − 1) · STAGGER` so icons sharing an anchor
/// stay apart.
const STAGGER:      f64 = 1.0;
const BODY_COLORS:  [Color; 2] = [Color::GREY, Color::PURPLE];
const FRONT_WHEEL:  Color = Color::GREEN;

const STUD_LENGTH:      f64 = 4.0;
const WALL_HEIGHT:      f64 = 7.0;
const WALL_ORIGIN:      Point = Point::new(6.0, 0.0);
const ENCLOSURE_FACTOR: f64 = 1.1;
const ENCLOSURE_ALPHA:  f32 = 0.3;
/// Screen points.
const STUD_WIDTH:       f32 = 5.0;

// ── Renderer ──────────────────────────────────────────────────────────────────

/// Draws frames onto any [`Canvas`].  Holds only the static layout.
#[derive(Clone, Debug)]
pub struct SceneRenderer {
    layout: ZoneLayout,
}

impl SceneRenderer {
    pub fn new(layout: ZoneLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ZoneLayout {
        &self.layout
    }

    /// Clear and draw only the zones and their labels.
    pub fn render_static<C: Canvas>(&self, canvas: &mut C) {
        self.draw_scene(canvas);
        canvas.request_repaint();
    }

    /// Clear and draw a full frame, then request a repaint.
    pub fn render<C: Canvas>(&self, canvas: &mut C, frame: &Frame) {
        self.draw_scene(canvas);
        for robot in &frame.robots {
            draw_robot(canvas, robot);
        }
        draw_wall(canvas, frame.built);
        canvas.request_repaint();
    }

    fn draw_scene<C: Canvas>(&self, canvas: &mut C) {
        canvas.clear();
        let radius = self.layout.radius();
        for zone in Zone::ALL {
            canvas.fill_circle(self.layout.zone_center(zone), radius, zone_color(zone).with_alpha(ZONE_ALPHA));
        }

        let build = self.layout.zone_center(Zone::Build);
        let storage = self.layout.zone_center(Zone::Storage);
        let charging = self.layout.zone_center(Zone::Charging);
        let labels = [
            (build.offset(0.0, LABEL_OFFSET), Zone::Build, TextAnchor::Center),
            (storage.offset(-LABEL_OFFSET, 0.0), Zone::Storage, TextAnchor::Right),
            (charging.offset(LABEL_OFFSET, 0.0), Zone::Charging, TextAnchor::Left),
        ];
        for (at, zone, anchor) in labels {
            canvas.text(at, zone.label(), FONT_SIZE, anchor, Color::BLACK);
        }
    }
}

fn zone_color(zone: Zone) -> Color {
    match zone {
        Zone::Storage  => Color::BLUE,
        Zone::Charging => Color::RED,
        Zone::Build    => Color::GREEN,
    }
}

fn status_color(status: RobotStatus) -> Color {
    match status {
        RobotStatus::Normal     => Color::BLACK,
        RobotStatus::Charging   => Color::RED,
        RobotStatus::LowBattery => Color::ORANGE,
    }
}

/// Icon center for `slot` anchored at `anchor`.
pub fn staggered(anchor: Point, slot: usize) -> Point {
    anchor.offset((2.0 * slot as f64 - 1.0) * STAGGER, 0.0)
}

/// Lower-left corners and colours of the four wheel squares.  Front wheels
/// sit on the side the robot faces.
pub fn wheel_squares(center: Point, orientation: Orientation, status: RobotStatus) -> [(Point, Color); 4] {
    let (bw, bh) = body_size(orientation);
    let corner = |sx: f64, sy: f64| {
        Point::new(
            center.x + sx * bw / 2.0 - WHEEL_SIZE / 2.0,
            center.y + sy * bh / 2.0 - WHEEL_SIZE / 2.0,
        )
    };

    // (back pair, front pair) as (sign x, sign y)
    let (back, front) = match orientation {
        Orientation::Up    => ([(-1.0, -1.0), (1.0, -1.0)], [(-1.0, 1.0), (1.0, 1.0)]),
        Orientation::Down  => ([(-1.0, 1.0), (1.0, 1.0)], [(-1.0, -1.0), (1.0, -1.0)]),
        Orientation::Left  => ([(1.0, -1.0), (1.0, 1.0)], [(-1.0, -1.0), (-1.0, 1.0)]),
        Orientation::Right => ([(-1.0, -1.0), (-1.0, 1.0)], [(1.0, -1.0), (1.0, 1.0)]),
    };
    let back_color = status_color(status);

    [
        (corner(back[0].0, back[0].1), back_color),
        (corner(back[1].0, back[1].1), back_color),
        (corner(front[0].0, front[0].1), FRONT_WHEEL),
        (corner(front[1].0, front[1].1), FRONT_WHEEL),
    ]
}

fn body_size(orientation: Orientation) -> (f64, f64) {
    if orientation.is_horizontal() {
        (BODY_HEIGHT, BODY_WIDTH)
    } else {
        (BODY_WIDTH, BODY_HEIGHT)
    }
}

fn draw_robot<C: Canvas>(canvas: &mut C, robot: &RobotDrawState) {
    let center = staggered(robot.position, robot.slot);

    for (min, color) in wheel_squares(center, robot.orientation, robot.status) {
        canvas.fill_rect(min, WHEEL_SIZE, WHEEL_SIZE, color);
    }

    let (bw, bh) = body_size(robot.orientation);
    let body_color = BODY_COLORS[robot.slot % BODY_COLORS.len()];
    canvas.fill_rect(center.offset(-bw / 2.0, -bh / 2.0), bw, bh, body_color);

    if let Some(cargo) = &robot.cargo {
        canvas.text(center, cargo, FONT_SIZE, TextAnchor::Center, Color::BLACK);
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive; a single value
/// sits at `start`.
fn linspace(start: f64, end: f64, n: u32) -> impl Iterator<Item = f64> {
    let step = if n > 1 { (end - start) / f64::from(n - 1) } else { 0.0 };
    (0..n).map(move |i| start + step * f64::from(i))
}

fn draw_wall<C: Canvas>(canvas: &mut C, built: BuiltUnits) {
    let x0 = WALL_ORIGIN.x;
    let y0 = WALL_ORIGIN.y;

    for y in linspace(y0, y0 + WALL_HEIGHT, built.horizontal) {
        canvas.line(Point::new(x0, y), Point::new(x0 + STUD_LENGTH, y), STUD_WIDTH, Color::BROWN);
    }
    for x in linspace(x0, x0 + STUD_LENGTH, built.vertical) {
        canvas.line(Point::new(x, y0), Point::new(x, y0 + WALL_HEIGHT), STUD_WIDTH, Color::BROWN);
    }

    let width = STUD_LENGTH * ENCLOSURE_FACTOR;
    let height = WALL_HEIGHT * ENCLOSURE_FACTOR;
    let min = Point::new(x0 - (width - STUD_LENGTH) / 2.0, y0 - (height - WALL_HEIGHT) / 2.0);
    canvas.fill_rect(min, width, height, Color::GREEN.with_alpha(ENCLOSURE_ALPHA));
}
