//! Target spawning.

use bevy_ecs::system::{Query, Res, ResMut};
use rand::Rng;
use tracing::trace;

use crate::config::SessionConfig;
use crate::systems::state::{FrameClock, GameStage, SessionRng, SessionTiming};
use crate::target::{ActiveTarget, Target, TargetSlots};

/// Activates a new target once the spawn interval has elapsed.
///
/// The slot is drawn uniformly over all hideouts, so the same hideout may
/// repeat on consecutive spawns. Any previously active target is put away
/// first, keeping at most one target up at any time.
pub fn spawn_system(
    stage: Res<GameStage>,
    clock: Res<FrameClock>,
    config: Res<SessionConfig>,
    mut timing: ResMut<SessionTiming>,
    mut active: ResMut<ActiveTarget>,
    slots: Res<TargetSlots>,
    mut rng: ResMut<SessionRng>,
    mut targets: Query<&mut Target>,
) {
    if *stage != GameStage::Playing || slots.0.is_empty() {
        return;
    }

    let preset = config.difficulty.preset();
    if clock.now_ms.saturating_sub(timing.last_spawn) <= preset.spawn_interval_ms {
        return;
    }

    if let Some(previous) = active.0 {
        if let Ok(mut target) = targets.get_mut(previous) {
            target.deactivate();
        }
    }

    let index = rng.0.random_range(0..slots.0.len());
    let entity = slots.0[index];
    if let Ok(mut target) = targets.get_mut(entity) {
        target.visible_ms = preset.target_visible_ms;
        target.activate(clock.now_ms);
        active.0 = Some(entity);
        timing.last_spawn = clock.now_ms;
        trace!(slot = index, now_ms = clock.now_ms, "Target spawned");
    }
}
