//! Unit tests for mob-agent.

use std::time::Duration;

use mob_core::Vec2;

use crate::{FrameSet, Mob, MobEntity, Mobile};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn mobile() -> Mobile {
    Mobile::new(4.0, Duration::from_secs(5), 0.1)
}

fn entity_at(x: f32, y: f32) -> MobEntity {
    MobEntity::new(Vec2::new(x, y), Vec2::new(0.5, 0.5), mobile())
}

// ── Mob facade ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod facade {
    use super::*;

    #[test]
    fn bounds_from_anchor_and_half_extents() {
        let e = entity_at(2.0, 3.0);
        let b = e.bounds();
        assert_eq!(b.min, Vec2::new(2.0, 3.0));
        assert_eq!(b.max, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn detect_is_inclusive() {
        let e = entity_at(0.0, 0.0);
        assert!(e.detect(4.0));
        assert!(!e.detect(4.01));
    }

    #[test]
    fn bored_at_threshold() {
        let e = entity_at(0.0, 0.0);
        assert!(!e.bored(Duration::from_millis(4_999)));
        assert!(e.bored(Duration::from_secs(5)));
    }

    #[test]
    fn should_swing_within_reach() {
        let e = entity_at(0.0, 0.0).with_swing_range(1.5);
        assert!(e.should_swing(Vec2::new(1.0, 1.0)));
        assert!(!e.should_swing(Vec2::new(1.5, 0.0)));
    }

    #[test]
    fn move_to_commits_position() {
        let mut e = entity_at(0.0, 0.0);
        e.move_to(Vec2::new(1.25, -0.5));
        assert_eq!(e.pos(), Vec2::new(1.25, -0.5));
    }

    #[test]
    fn usable_as_trait_object() {
        let mut e = entity_at(1.0, 1.0);
        let m: &mut dyn Mob = &mut e;
        m.set_frames(FrameSet::Hunt);
        assert_eq!(m.speed(), 0.1);
        assert!(m.search_pattern().is_empty());
        assert_eq!(e.animation().set(), FrameSet::Hunt);
    }
}

// ── Animation ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod animation {
    use super::*;
    use crate::Animation;

    #[test]
    fn loops_at_fixed_step() {
        let mut a = Animation::new(FrameSet::Search, Duration::from_millis(200));
        assert_eq!(a.frame(), 0);
        a.update(Duration::from_millis(150));
        assert_eq!(a.frame(), 0);
        a.update(Duration::from_millis(60));
        assert_eq!(a.frame(), 1);
        a.update(Duration::from_millis(200));
        assert_eq!(a.frame(), 0);
    }

    #[test]
    fn one_shot_holds_last_frame() {
        let mut a = Animation::new(FrameSet::Dying, Duration::from_millis(100));
        a.update(Duration::from_secs(5));
        assert_eq!(a.frame(), 5);
    }

    #[test]
    fn switch_to_same_set_keeps_cursor() {
        let mut a = Animation::new(FrameSet::Hunt, Duration::from_millis(100));
        a.update(Duration::from_millis(100));
        assert_eq!(a.frame(), 3);
        a.switch(FrameSet::Hunt);
        assert_eq!(a.frame(), 3);
        a.switch(FrameSet::Search);
        assert_eq!(a.frame(), 0);
    }

    #[test]
    fn dead_mob_ignores_frame_requests() {
        let mut e = entity_at(0.0, 0.0);
        e.die();
        assert!(e.is_dead());
        e.set_frames(FrameSet::Hunt);
        assert_eq!(e.animation().set(), FrameSet::Dying);
    }
}

// ── SpawnRegistry ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use super::*;
    use crate::{AgentError, SpawnRegistry};

    #[test]
    fn presets_registered() {
        let reg = SpawnRegistry::with_presets();
        assert_eq!(reg.kinds(), vec!["boss1", "boss2"]);
    }

    #[test]
    fn boss1_patrols_around_spawn() {
        let reg = SpawnRegistry::with_presets();
        let m = reg.make("boss1", Vec2::new(10.0, 4.0)).unwrap();
        assert_eq!(m.search_pattern, vec![Vec2::new(5.0, 4.0), Vec2::new(15.0, 4.0)]);
        assert_eq!(m.detection_radius, 4.0);
        assert_eq!(m.bored_threshold, Duration::from_secs(5));
    }

    #[test]
    fn boss2_has_no_pattern() {
        let reg = SpawnRegistry::with_presets();
        let m = reg.make("boss2", Vec2::ZERO).unwrap();
        assert!(m.search_pattern.is_empty());
        assert_eq!(m.bored_threshold, Duration::from_secs(20));
    }

    #[test]
    fn unknown_kind_errors() {
        let reg = SpawnRegistry::with_presets();
        let err = reg.make("dragon", Vec2::ZERO).unwrap_err();
        assert!(matches!(err, AgentError::UnknownKind(k) if k == "dragon"));
    }

    #[test]
    fn custom_maker_spawns_entity() {
        fn sentry(_at: Vec2) -> Mobile {
            Mobile::new(6.0, Duration::from_secs(1), 0.2)
        }
        let mut reg = SpawnRegistry::new();
        reg.register("sentry", sentry);
        assert!(reg.contains("sentry"));
        let e = reg.spawn("sentry", Vec2::new(3.0, 3.0), Vec2::new(0.5, 0.5)).unwrap();
        assert_eq!(e.pos(), Vec2::new(3.0, 3.0));
        assert_eq!(e.detection_radius(), 6.0);
    }
}
