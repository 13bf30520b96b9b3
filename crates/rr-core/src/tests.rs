//! Unit tests for rr-core primitives.

#[cfg(test)]
mod geom {
    use crate::{Point, ViewBounds};

    #[test]
    fn midpoint_is_plain_average() {
        let m = Point::new(-2.0, 4.0).midpoint(Point::new(6.0, -8.0));
        assert_eq!(m, Point::new(2.0, -2.0));
    }

    #[test]
    fn view_bounds_extent() {
        let b = ViewBounds { x_min: -4.0, x_max: 4.0, y_min: -1.0, y_max: 3.0 };
        assert_eq!(b.width(), 8.0);
        assert_eq!(b.height(), 4.0);
        assert_eq!(b.center(), Point::new(0.0, 1.0));
    }
}

#[cfg(test)]
mod zone {
    use crate::{CoreError, Midpoint, PositionCode, Zone};

    #[test]
    fn parse_codes() {
        assert_eq!("S".parse::<PositionCode>().unwrap(), PositionCode::At(Zone::Storage));
        assert_eq!("B".parse::<PositionCode>().unwrap(), PositionCode::At(Zone::Build));
        assert_eq!(" C ".parse::<PositionCode>().unwrap(), PositionCode::At(Zone::Charging));
        assert_eq!("T".parse::<PositionCode>().unwrap(), PositionCode::Transit);
    }

    #[test]
    fn parse_unknown_code_fails() {
        let err = "X".parse::<PositionCode>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownPositionCode(ref s) if s == "X"));
    }

    #[test]
    fn display_round_trips_code() {
        for code in ["S", "B", "C", "T"] {
            assert_eq!(code.parse::<PositionCode>().unwrap().to_string(), code);
        }
    }

    #[test]
    fn midpoint_between_is_unordered() {
        for a in Zone::ALL {
            for b in Zone::ALL {
                assert_eq!(Midpoint::between(a, b), Midpoint::between(b, a));
            }
            assert_eq!(Midpoint::between(a, a), None);
        }
        assert_eq!(Midpoint::between(Zone::Storage, Zone::Build), Some(Midpoint::StorageBuild));
    }
}

#[cfg(test)]
mod layout {
    use std::f64::consts::{FRAC_PI_3, FRAC_PI_4};

    use crate::{Midpoint, Point, SceneConfig, Zone, ZoneLayout};

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn default_centers() {
        let layout = ZoneLayout::new(SceneConfig::default());
        let h = 12.0 * FRAC_PI_3.sin();
        let gy = h / 3.0;
        assert!(close(layout.zone_center(Zone::Storage), Point::new(-11.0, -gy * 1.5)));
        assert!(close(layout.zone_center(Zone::Charging), Point::new(1.0, -gy * 1.5)));
        assert!(close(layout.zone_center(Zone::Build), Point::new(-5.0, h - gy * 1.5)));
    }

    #[test]
    fn centroid_x_at_origin_without_adjustment() {
        let angles = [FRAC_PI_3, FRAC_PI_4, 0.3, 1.2];
        let distances = [1.0, 7.5, 12.0, 100.0];
        for angle in angles {
            for zone_distance in distances {
                let cfg = SceneConfig {
                    zone_distance,
                    angle,
                    x_adjust: 0.0,
                    y_adjust: 0.0,
                    ..SceneConfig::default()
                };
                let c = ZoneLayout::new(cfg).centroid();
                // y_adjust scales the vertical shift, so zero leaves y uncentered.
                assert!(c.x.abs() < EPS, "angle {angle} d {zone_distance}: {c}");
            }
        }
    }

    #[test]
    fn centroid_at_origin_with_unit_y_adjust() {
        let cfg = SceneConfig { x_adjust: 0.0, y_adjust: 1.0, ..SceneConfig::default() };
        assert!(close(ZoneLayout::new(cfg).centroid(), Point::new(0.0, 0.0)));
    }

    #[test]
    fn x_adjust_shifts_every_center() {
        let base = ZoneLayout::new(SceneConfig { x_adjust: 0.0, ..SceneConfig::default() });
        let shifted = ZoneLayout::new(SceneConfig { x_adjust: 3.0, ..SceneConfig::default() });
        for z in Zone::ALL {
            let a = base.zone_center(z);
            let b = shifted.zone_center(z);
            assert!((a.x - b.x - 3.0).abs() < EPS);
            assert!((a.y - b.y).abs() < EPS);
        }
    }

    #[test]
    fn midpoints_average_adjusted_centers() {
        let layout = ZoneLayout::new(SceneConfig::default());
        let s = layout.zone_center(Zone::Storage);
        let b = layout.zone_center(Zone::Build);
        let c = layout.zone_center(Zone::Charging);
        assert!(close(layout.midpoint(Midpoint::StorageBuild), s.midpoint(b)));
        assert!(close(layout.midpoint(Midpoint::BuildCharging), b.midpoint(c)));
        assert!(close(layout.midpoint(Midpoint::ChargingStorage), c.midpoint(s)));
    }

    #[test]
    fn deterministic() {
        assert_eq!(ZoneLayout::new(SceneConfig::default()), ZoneLayout::new(SceneConfig::default()));
    }

    #[test]
    fn view_bounds_follow_zoom() {
        let b = ZoneLayout::new(SceneConfig::default()).view_bounds();
        assert!((b.x_max - 16.0).abs() < EPS);
        assert!((b.y_min + 8.0).abs() < EPS);
    }

    #[test]
    fn validate_rejects_non_positive() {
        assert!(SceneConfig::default().validate().is_ok());
        assert!(ZoneLayout::try_new(SceneConfig { radius: 0.0, ..SceneConfig::default() }).is_err());
        assert!(ZoneLayout::try_new(SceneConfig { zoom: -1.0, ..SceneConfig::default() }).is_err());
        assert!(ZoneLayout::try_new(SceneConfig { angle: f64::NAN, ..SceneConfig::default() }).is_err());
    }
}
