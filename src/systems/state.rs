//! Session state machine and shared bookkeeping resources.
//!
//! The stage resource tracks the menu → countdown → playing → game-over
//! lifecycle. Terminal detection runs in its own system so it is evaluated
//! before any input for the frame, per the session rules.

use std::time::Instant;

use bevy_ecs::event::{EventReader, EventWriter};
use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Commands, Res, ResMut};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::audio::{MusicTrack, Sound};
use crate::board::BoardLayout;
use crate::config::SessionConfig;
use crate::constants::{COUNTDOWN_START, COUNTDOWN_STEP_MS, STARTING_LIVES};
use crate::events::{GameCommand, GameEvent, SessionSignal};
use crate::systems::audio::AudioEvent;
use crate::target::{ActiveTarget, Target, TargetSlots};

/// A resource to track the overall stage of the game from a high-level
/// perspective.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStage {
    /// The menu layer is collecting name/difficulty/theme.
    Menu,
    /// The 3-2-1 gate before a session; each numeral is held for a fixed
    /// wall-clock interval.
    Countdown { value: u8, started_at: u64 },
    /// The main gameplay loop is active.
    Playing,
    /// A terminal condition was reached; waiting for return-to-menu.
    GameOver,
}

impl Default for GameStage {
    fn default() -> Self {
        Self::Menu
    }
}

/// Process-level flags read by the outer loop.
#[derive(Resource, Debug, Default)]
pub struct GlobalState {
    pub exit: bool,
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResource(pub u32);

/// A resource to store the number of player lives.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLives(pub u8);

impl Default for PlayerLives {
    fn default() -> Self {
        Self(STARTING_LIVES)
    }
}

/// Millisecond timestamps anchoring the current session.
///
/// `last_spawn` starts at zero so the first spawn condition holds on the
/// first frame of play.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionTiming {
    pub started_at: u64,
    pub last_spawn: u64,
}

impl SessionTiming {
    /// Whole seconds left in the session, floored at zero.
    pub fn remaining_s(&self, now_ms: u64, session_length_s: u64) -> u64 {
        let elapsed_s = now_ms.saturating_sub(self.started_at) / 1000;
        session_length_s.saturating_sub(elapsed_s)
    }
}

/// The monotonic millisecond clock, sampled once per frame so every
/// comparison within a frame sees the same timestamp.
#[derive(Resource, Debug)]
pub struct FrameClock {
    origin: Instant,
    pub now_ms: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
            now_ms: 0,
        }
    }
}

impl FrameClock {
    pub fn sample(&mut self) {
        self.now_ms = self.origin.elapsed().as_millis() as u64;
    }

    /// A clock pinned at the given timestamp; advance it by writing `now_ms`.
    /// Used by tests to drive systems deterministically.
    pub fn at(now_ms: u64) -> Self {
        Self {
            origin: Instant::now(),
            now_ms,
        }
    }
}

/// Runs first in the schedule: samples the clock for this frame.
pub fn clock_system(mut clock: ResMut<FrameClock>) {
    clock.sample();
}

/// RNG for target selection.
#[derive(Resource)]
pub struct SessionRng(pub SmallRng);

impl Default for SessionRng {
    fn default() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl SessionRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

/// Detects the terminal condition. Runs before input handling so the check
/// uses the state as of the start of the frame. The transition fires exactly
/// once: afterwards the stage is no longer `Playing`.
pub fn terminal_system(
    clock: Res<FrameClock>,
    config: Res<SessionConfig>,
    mut stage: ResMut<GameStage>,
    score: Res<ScoreResource>,
    lives: Res<PlayerLives>,
    timing: Res<SessionTiming>,
    mut audio: EventWriter<AudioEvent>,
) {
    if *stage != GameStage::Playing {
        return;
    }

    let remaining = timing.remaining_s(clock.now_ms, config.difficulty.preset().session_length_s);
    if remaining == 0 || lives.0 == 0 {
        *stage = GameStage::GameOver;
        audio.write(AudioEvent::StopMusic);
        audio.write(AudioEvent::PlaySound(Sound::GameOver));
        info!(score = score.0, lives = lives.0, "Session over");
    }
}

/// Drives the stage transitions: session start and teardown, countdown
/// progression, and process exit.
#[allow(clippy::too_many_arguments)]
pub fn stage_system(
    clock: Res<FrameClock>,
    config: Res<SessionConfig>,
    board: Res<BoardLayout>,
    mut stage: ResMut<GameStage>,
    mut score: ResMut<ScoreResource>,
    mut lives: ResMut<PlayerLives>,
    mut timing: ResMut<SessionTiming>,
    mut active: ResMut<ActiveTarget>,
    mut slots: ResMut<TargetSlots>,
    mut global: ResMut<GlobalState>,
    mut events: EventReader<GameEvent>,
    mut signals: EventReader<SessionSignal>,
    mut audio: EventWriter<AudioEvent>,
    mut commands: Commands,
) {
    for event in events.read() {
        match event {
            GameEvent::Command(GameCommand::QuitApp) => {
                info!("Exit requested. Exiting...");
                global.exit = true;
            }
            // Escape abandons the session, from play or the game-over screen.
            GameEvent::Command(GameCommand::ReturnToMenu)
                if matches!(*stage, GameStage::Playing | GameStage::GameOver) =>
            {
                end_session(&mut stage, &mut active, &mut slots, &mut audio, &mut commands);
            }
            _ => {}
        }
    }

    for signal in signals.read() {
        match signal {
            SessionSignal::Start if *stage == GameStage::Menu => {
                let preset = config.difficulty.preset();
                for position in &board.positions {
                    let entity = commands.spawn(Target::new(*position, board.radius, preset.target_visible_ms)).id();
                    slots.0.push(entity);
                }
                *stage = GameStage::Countdown {
                    value: COUNTDOWN_START,
                    started_at: clock.now_ms,
                };
                debug!(theme = %config.theme, "Countdown started");
            }
            SessionSignal::End if matches!(*stage, GameStage::Playing | GameStage::GameOver) => {
                end_session(&mut stage, &mut active, &mut slots, &mut audio, &mut commands);
            }
            _ => {}
        }
    }

    if let GameStage::Countdown { value, started_at } = *stage {
        if clock.now_ms.saturating_sub(started_at) >= COUNTDOWN_STEP_MS {
            if value > 1 {
                *stage = GameStage::Countdown {
                    value: value - 1,
                    started_at: started_at + COUNTDOWN_STEP_MS,
                };
            } else {
                score.0 = 0;
                lives.0 = STARTING_LIVES;
                timing.started_at = clock.now_ms;
                timing.last_spawn = 0;
                active.0 = None;
                *stage = GameStage::Playing;
                // The menu track carries through the countdown; the theme's
                // own music starts with play.
                audio.write(AudioEvent::PlayMusic(config.theme.spec().music));
                info!(
                    player = %config.player_name,
                    difficulty = %config.difficulty,
                    theme = %config.theme,
                    "Session started"
                );
            }
        }
    }
}

fn end_session(
    stage: &mut GameStage,
    active: &mut ActiveTarget,
    slots: &mut TargetSlots,
    audio: &mut EventWriter<AudioEvent>,
    commands: &mut Commands,
) {
    for entity in slots.0.drain(..) {
        commands.entity(entity).despawn();
    }
    active.0 = None;
    *stage = GameStage::Menu;
    // The menu layer resumes its own ambient presentation.
    audio.write(AudioEvent::PlayMusic(MusicTrack::Default));
    info!("Returned to menu");
}
