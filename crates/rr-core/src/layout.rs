//! Layout engine: static scene geometry derived from [`SceneConfig`].
//!
//! # Placement rule
//!
//! ```text
//! raw storage  A = (0, 0)
//! raw charging B = (D, 0)
//! raw build    C = (D/2, D·sin θ)
//! centroid     G = (A + B + C) / 3
//! adjusted P'  = (P.x − G.x − x_adjust,  P.y − G.y · y_adjust)
//! ```
//!
//! With both adjustments at zero the centroid of the adjusted centers lands
//! on the origin; the defaults shift the scene left and down to leave room
//! for the wall enclosure on the right.  Midpoints are always the plain
//! average of two adjusted centers.

use std::f64::consts::FRAC_PI_3;

use crate::{Anchor, CoreError, CoreResult, Midpoint, Point, ViewBounds, Zone};

/// Immutable scene parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct SceneConfig {
    /// Radius of each zone circle.
    pub radius:        f64,
    /// Distance `D` between the two base zones.
    pub zone_distance: f64,
    /// Apex angle θ in radians.
    pub angle:         f64,
    /// Multiplier applied to the centroid's y before subtracting it.
    pub y_adjust:      f64,
    /// Extra leftward shift applied after centering.
    pub x_adjust:      f64,
    /// Divides the visible extent; larger values zoom in.
    pub zoom:          f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            radius:        2.0,
            zone_distance: 12.0,
            angle:         FRAC_PI_3,
            y_adjust:      1.5,
            x_adjust:      5.0,
            zoom:          1.5,
        }
    }
}

impl SceneConfig {
    /// Reject parameters that would produce a degenerate or invisible scene.
    pub fn validate(&self) -> CoreResult<()> {
        let positive = [
            ("radius", self.radius),
            ("zone_distance", self.zone_distance),
            ("zoom", self.zoom),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(CoreError::Config(format!("{name} must be a positive number, got {value}")));
            }
        }
        for (name, value) in [("angle", self.angle), ("y_adjust", self.y_adjust), ("x_adjust", self.x_adjust)] {
            if !value.is_finite() {
                return Err(CoreError::Config(format!("{name} must be finite, got {value}")));
            }
        }
        Ok(())
    }
}

/// Zone centers and pairwise midpoints, computed once per session.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneLayout {
    config:   SceneConfig,
    storage:  Point,
    charging: Point,
    build:    Point,
}

impl ZoneLayout {
    /// Apply the placement rule to `config`.  Pure; cheap enough to redo on
    /// every full redraw.
    pub fn new(config: SceneConfig) -> Self {
        let d = config.zone_distance;
        let raw_a = Point::new(0.0, 0.0);
        let raw_b = Point::new(d, 0.0);
        let raw_c = Point::new(d / 2.0, d * config.angle.sin());

        let gx = (raw_a.x + raw_b.x + raw_c.x) / 3.0;
        let gy = (raw_a.y + raw_b.y + raw_c.y) / 3.0;

        let adjust = |p: Point| Point::new(p.x - gx - config.x_adjust, p.y - gy * config.y_adjust);

        Self {
            config,
            storage:  adjust(raw_a),
            charging: adjust(raw_b),
            build:    adjust(raw_c),
        }
    }

    /// Validate `config` and build the layout.
    pub fn try_new(config: SceneConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    #[inline]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.config.radius
    }

    pub fn zone_center(&self, zone: Zone) -> Point {
        match zone {
            Zone::Storage  => self.storage,
            Zone::Build    => self.build,
            Zone::Charging => self.charging,
        }
    }

    pub fn midpoint(&self, mid: Midpoint) -> Point {
        let (a, b) = mid.endpoints();
        self.zone_center(a).midpoint(self.zone_center(b))
    }

    pub fn anchor(&self, anchor: Anchor) -> Point {
        match anchor {
            Anchor::Zone(z)     => self.zone_center(z),
            Anchor::Midpoint(m) => self.midpoint(m),
        }
    }

    /// Mean of the three adjusted centers.
    pub fn centroid(&self) -> Point {
        Point::new(
            (self.storage.x + self.charging.x + self.build.x) / 3.0,
            (self.storage.y + self.charging.y + self.build.y) / 3.0,
        )
    }

    /// Visible region: `±2D/zoom` horizontally, `±D/zoom` vertically.
    pub fn view_bounds(&self) -> ViewBounds {
        let half_w = self.config.zone_distance * 2.0 / self.config.zoom;
        let half_h = self.config.zone_distance / self.config.zoom;
        ViewBounds {
            x_min: -half_w,
            x_max: half_w,
            y_min: -half_h,
            y_max: half_h,
        }
    }
}
