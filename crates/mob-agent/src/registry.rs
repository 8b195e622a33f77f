//! Spawn registry: maps the kind named on a map spawn marker to a
//! constructor for that kind's [`Mobile`] stats.
//!
//! The registry is an explicit value built at startup and handed to the
//! level builder; there is no global table.

use std::collections::HashMap;
use std::time::Duration;

use mob_core::Vec2;

use crate::{AgentError, AgentResult, MobEntity, Mobile};

/// Builds a kind's stats for a mob spawning at the given anchor.  Search
/// patterns are usually laid out relative to the spawn point.
pub type MobMaker = fn(Vec2) -> Mobile;

/// Kind name → [`MobMaker`].
#[derive(Clone, Default)]
pub struct SpawnRegistry {
    makers: HashMap<String, MobMaker>,
}

impl SpawnRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the stock kinds `boss1` and `boss2`.
    pub fn with_presets() -> Self {
        let mut registry = Self::new();
        registry.register("boss1", boss1);
        registry.register("boss2", boss2);
        registry
    }

    /// Register (or replace) the constructor for `kind`.
    pub fn register(&mut self, kind: impl Into<String>, maker: MobMaker) {
        self.makers.insert(kind.into(), maker);
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.makers.contains_key(kind)
    }

    /// Registered kind names, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.makers.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Stats for a `kind` mob spawning at `at`.
    pub fn make(&self, kind: &str, at: Vec2) -> AgentResult<Mobile> {
        let maker = self
            .makers
            .get(kind)
            .ok_or_else(|| AgentError::UnknownKind(kind.to_owned()))?;
        Ok(maker(at))
    }

    /// A live [`MobEntity`] of `kind` anchored at `at`.
    pub fn spawn(&self, kind: &str, at: Vec2, half_extents: Vec2) -> AgentResult<MobEntity> {
        Ok(MobEntity::new(at, half_extents, self.make(kind, at)?))
    }
}

/// Paces five units either side of its spawn point and loses interest fast.
fn boss1(at: Vec2) -> Mobile {
    Mobile::new(4.0, Duration::from_secs(5), 0.04).with_search_pattern(vec![
        Vec2::new(at.x - 5.0, at.y),
        Vec2::new(at.x + 5.0, at.y),
    ])
}

/// Stands still but sees far and holds a grudge.
fn boss2(_at: Vec2) -> Mobile {
    Mobile::new(10.0, Duration::from_secs(20), 0.04)
}
