//! Unit tests for mob-core primitives.

#[cfg(test)]
mod ids {
    use crate::MobId;

    #[test]
    fn index_and_ordering() {
        assert_eq!(MobId(42).index(), 42);
        assert!(MobId(0) < MobId(1));
    }

    #[test]
    fn display() {
        assert_eq!(MobId(7).to_string(), "MobId(7)");
    }
}

#[cfg(test)]
mod geo {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{Cell, Rect, Vec2};

    #[test]
    fn length_and_distance() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert!(((b - a).len() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_unit_length() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = Vec2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
            if let Some(n) = v.normalize() {
                assert!((n.len() - 1.0).abs() < 1e-5, "len {} for {v}", n.len());
            }
        }
    }

    #[test]
    fn normalize_zero_is_none() {
        assert!(Vec2::ZERO.normalize().is_none());
    }

    #[test]
    fn rect_from_anchor() {
        let r = Rect::from_anchor(Vec2::new(2.0, 3.0), Vec2::new(0.5, 0.5));
        assert_eq!(r.min, Vec2::new(2.0, 3.0));
        assert_eq!(r.max, Vec2::new(3.0, 4.0));
        assert_eq!(r.center(), Vec2::new(2.5, 3.5));
        assert_eq!(r.width(), 1.0);
        assert_eq!(r.height(), 1.0);
    }

    #[test]
    fn rect_overlap_is_strict() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let touching = Rect::new(Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0));
        let inside = Rect::new(Vec2::new(0.5, 0.5), Vec2::new(1.5, 1.5));
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn cell_offset_and_order() {
        assert_eq!(Cell::new(3, 4).offset(-1, 2), Cell::new(2, 6));
        assert!(Cell::new(0, 9) < Cell::new(1, 0));
        assert_eq!(Cell::new(1, 2).to_string(), "[1, 2]");
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::{Frame, FrameClock};

    #[test]
    fn clock_advances() {
        let mut clock = FrameClock::new();
        clock.advance(Duration::from_millis(16));
        clock.advance(Duration::from_millis(17));
        assert_eq!(clock.current_frame, Frame(2));
        assert_eq!(clock.elapsed, Duration::from_millis(33));
    }
}

#[cfg(test)]
mod config {
    use crate::AiConfig;

    #[test]
    fn defaults_are_valid() {
        let cfg = AiConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.max_path_age, 2);
        assert_eq!(cfg.retry_radius, 4);
    }

    #[test]
    fn rejects_bad_values() {
        let bad_cell = AiConfig { cell_size: 0.0, ..AiConfig::default() };
        assert!(bad_cell.validate().is_err());

        let bad_radius = AiConfig { retry_radius: -1, ..AiConfig::default() };
        assert!(bad_radius.validate().is_err());

        let nan_arrive = AiConfig { arrive_distance: f32::NAN, ..AiConfig::default() };
        assert!(nan_arrive.validate().is_err());
    }
}
