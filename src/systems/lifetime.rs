//! Target expiry.

use bevy_ecs::system::{Query, Res, ResMut};
use tracing::trace;

use crate::systems::state::{FrameClock, GameStage};
use crate::target::{ActiveTarget, Target, TargetSlots};

/// Puts away targets whose visible window has elapsed. An expiry is silent:
/// no score or life change, the next spawn simply happens on schedule.
/// Also runs on the game-over screen so a target up at the terminal
/// transition does not stay frozen under the overlay.
pub fn lifetime_system(
    stage: Res<GameStage>,
    clock: Res<FrameClock>,
    mut active: ResMut<ActiveTarget>,
    slots: Res<TargetSlots>,
    mut targets: Query<&mut Target>,
) {
    if !matches!(*stage, GameStage::Playing | GameStage::GameOver) {
        return;
    }

    for &entity in slots.0.iter() {
        if let Ok(mut target) = targets.get_mut(entity) {
            if target.tick(clock.now_ms) && active.0 == Some(entity) {
                active.0 = None;
                trace!(now_ms = clock.now_ms, "Target expired");
            }
        }
    }
}
