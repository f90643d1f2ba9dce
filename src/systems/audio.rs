//! Bridges gameplay systems to the SDL mixer.
//!
//! Logic systems never touch the mixer directly; they emit [`AudioEvent`]s
//! and this system applies them against the non-send [`Audio`] wrapper.

use bevy_ecs::event::{Event, EventReader};
use bevy_ecs::resource::Resource;
use bevy_ecs::system::{NonSendMut, Res, ResMut};
use tracing::debug;

use crate::audio::{Audio, MusicTrack, Sound};
use crate::events::{GameCommand, GameEvent};
use crate::systems::menu::{MenuRow, MenuState};
use crate::systems::state::GameStage;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    PlaySound(Sound),
    PlayMusic(MusicTrack),
    StopMusic,
    StopAll,
}

/// Non-send wrapper around the mixer; SDL audio is main-thread only.
pub struct AudioResource(pub Audio);

/// The user-facing mute toggle, kept separate from the mixer so tests can
/// exercise the toggle logic headlessly.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AudioSettings {
    pub muted: bool,
}

pub fn audio_system(
    mut audio: NonSendMut<AudioResource>,
    mut settings: ResMut<AudioSettings>,
    stage: Res<GameStage>,
    menu: Res<MenuState>,
    mut commands: EventReader<GameEvent>,
    mut events: EventReader<AudioEvent>,
) {
    for event in commands.read() {
        if !matches!(event, GameEvent::Command(GameCommand::MuteAudio)) {
            continue;
        }
        // While the name row is focused the M key is text, not a command.
        if *stage == GameStage::Menu && menu.row == MenuRow::Name {
            continue;
        }
        settings.muted = !settings.muted;
        debug!(muted = settings.muted, "Mute toggled");
    }

    if audio.0.is_muted() != settings.muted {
        audio.0.set_mute(settings.muted);
    }

    for event in events.read() {
        match event {
            AudioEvent::PlaySound(sound) => audio.0.play(*sound),
            AudioEvent::PlayMusic(track) => audio.0.play_music(*track),
            AudioEvent::StopMusic => audio.0.stop_music(),
            AudioEvent::StopAll => audio.0.stop_all(),
        }
    }
}
