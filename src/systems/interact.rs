//! Pointer interaction during a session.

use bevy_ecs::event::{EventReader, EventWriter};
use bevy_ecs::system::{Query, Res, ResMut};
use tracing::debug;

use crate::audio::Sound;
use crate::events::{GameEvent, SessionSignal};
use crate::systems::audio::AudioEvent;
use crate::systems::hud::ExitControl;
use crate::systems::state::{GameStage, PlayerLives, ScoreResource};
use crate::target::{ActiveTarget, Target, TargetSlots};

/// Resolves pointer presses while a session is on screen.
///
/// The Exit control is checked before the board, and works from both the
/// playing and game-over states. During play, a press that lands on the
/// active target scores; any other press costs a life. Targets are tested in
/// slot creation order.
#[allow(clippy::too_many_arguments)]
pub fn interact_system(
    stage: Res<GameStage>,
    exit: Res<ExitControl>,
    slots: Res<TargetSlots>,
    mut targets: Query<&mut Target>,
    mut score: ResMut<ScoreResource>,
    mut lives: ResMut<PlayerLives>,
    mut active: ResMut<ActiveTarget>,
    mut events: EventReader<GameEvent>,
    mut signals: EventWriter<SessionSignal>,
    mut audio: EventWriter<AudioEvent>,
) {
    if !matches!(*stage, GameStage::Playing | GameStage::GameOver) {
        return;
    }

    for event in events.read() {
        let GameEvent::PointerPressed(point) = event else {
            continue;
        };

        if exit.rect.contains(*point) {
            audio.write(AudioEvent::PlaySound(Sound::Click));
            signals.write(SessionSignal::End);
            continue;
        }

        if *stage != GameStage::Playing {
            continue;
        }

        let mut hit = false;
        for &entity in slots.0.iter() {
            let Ok(mut target) = targets.get_mut(entity) else {
                continue;
            };
            if target.hit_test(*point) {
                score.0 += 1;
                target.deactivate();
                if active.0 == Some(entity) {
                    active.0 = None;
                }
                audio.write(AudioEvent::PlaySound(Sound::Splat));
                debug!(score = score.0, "Target hit");
                hit = true;
                break;
            }
        }

        if !hit {
            lives.0 = lives.0.saturating_sub(1);
            debug!(lives = lives.0, "Missed");
        }
    }
}
