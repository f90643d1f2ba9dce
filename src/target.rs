//! The target ("mole") entity.
//!
//! One target exists per hideout slot for the lifetime of a session. Targets
//! toggle active/inactive many times; the session systems enforce that at
//! most one is active at a time. A target expires itself in `tick` once its
//! visible window has elapsed; no external cancellation is needed beyond
//! `deactivate`.

use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;
use glam::Vec2;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Target {
    /// Center of the hideout this target appears at.
    pub position: Vec2,
    pub radius: f32,
    /// How long the target stays up once activated. Overwritten on each
    /// spawn with the session difficulty's value.
    pub visible_ms: u64,
    pub active: bool,
    /// Millisecond timestamp of the last activation.
    pub activated_at: u64,
}

impl Target {
    pub fn new(position: Vec2, radius: f32, visible_ms: u64) -> Self {
        Self {
            position,
            radius,
            visible_ms,
            active: false,
            activated_at: 0,
        }
    }

    /// Shows the target starting from the given time.
    ///
    /// The caller is responsible for deactivating any previously active
    /// target first; the at-most-one-active invariant lives in the spawn
    /// system, not here.
    pub fn activate(&mut self, now_ms: u64) {
        self.active = true;
        self.activated_at = now_ms;
    }

    /// Hides the target. Idempotent.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Auto-hides the target once it has been visible longer than
    /// `visible_ms`. Called once per frame. Returns whether the target
    /// expired on this call.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.active && now_ms.saturating_sub(self.activated_at) > self.visible_ms {
            self.deactivate();
            return true;
        }
        false
    }

    /// Whether the point lies within the target's circular hit region.
    /// Always false while inactive.
    pub fn hit_test(&self, point: Vec2) -> bool {
        self.active && self.position.distance_squared(point) <= self.radius * self.radius
    }
}

/// The target entities for the current session, in creation (row-major slot)
/// order. Hit-test iteration follows this order so behavior is deterministic.
/// Empty while no session is running.
#[derive(Resource, Debug, Default)]
pub struct TargetSlots(pub Vec<Entity>);

/// Handle to the currently active target, if any.
///
/// This is a back-reference into [`TargetSlots`], never a second owner: the
/// entities live until the session ends, so the handle cannot dangle.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActiveTarget(pub Option<Entity>);
