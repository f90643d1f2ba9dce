//! This module handles the audio playback for the game.

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use sdl2::{
    mixer::{self, Chunk, InitFlag, LoaderRWops, Music, AUDIO_S16LSB},
    rwops::RWops,
};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::asset::Asset;
use crate::constants::MUSIC_VOLUME;

const AUDIO_FREQUENCY: i32 = 16_000;
const AUDIO_CHANNELS: i32 = 4;
const DEFAULT_VOLUME: u8 = 32;

/// One-shot sound cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Sound {
    /// UI click (menu buttons, the in-game Exit control).
    Click,
    /// A target was hit.
    Splat,
    /// Terminal condition reached.
    GameOver,
}

impl Sound {
    fn asset(self) -> Asset {
        match self {
            Sound::Click => Asset::ClickSound,
            Sound::Splat => Asset::SplatSound,
            Sound::GameOver => Asset::GameOverSound,
        }
    }
}

/// Looping ambient tracks. The menu reuses the default theme's track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum MusicTrack {
    Default,
    Jungle,
    Beach,
    Desert,
}

impl MusicTrack {
    fn asset(self) -> Asset {
        match self {
            MusicTrack::Default => Asset::DefaultMusic,
            MusicTrack::Jungle => Asset::JungleMusic,
            MusicTrack::Beach => Asset::BeachMusic,
            MusicTrack::Desert => Asset::DesertMusic,
        }
    }
}

/// The audio system for the game.
///
/// Responsible for initializing the audio device and loading and playing
/// sounds and music. If the device fails to initialize, the system is
/// disabled and every call silently does nothing; individual missing sound
/// files merely skip their cue.
pub struct Audio {
    _mixer_context: Option<mixer::Sdl2MixerContext>,
    sounds: HashMap<Sound, Chunk>,
    music: HashMap<MusicTrack, Music<'static>>,
    state: AudioState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AudioState {
    Enabled { volume: u8 },
    Muted { previous_volume: u8 },
    Disabled,
}

impl Default for Audio {
    fn default() -> Self {
        Self::new()
    }
}

impl Audio {
    /// Creates a new `Audio` instance.
    ///
    /// If the device fails to initialize, the audio system will be disabled
    /// and all functions will silently do nothing.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(audio) => audio,
            Err(e) => {
                tracing::warn!("Failed to initialize audio: {}. Audio will be disabled.", e);
                Self {
                    _mixer_context: None,
                    sounds: HashMap::new(),
                    music: HashMap::new(),
                    state: AudioState::Disabled,
                }
            }
        }
    }

    fn try_new() -> Result<Self> {
        mixer::open_audio(AUDIO_FREQUENCY, AUDIO_S16LSB, AUDIO_CHANNELS, 256)
            .map_err(|e| anyhow!("Failed to open audio: {}", e))?;

        mixer::allocate_channels(AUDIO_CHANNELS);
        for i in 0..AUDIO_CHANNELS {
            mixer::Channel(i).set_volume(DEFAULT_VOLUME as i32);
        }

        let mixer_context = mixer::init(InitFlag::OGG).map_err(|e| anyhow!("Failed to initialize SDL2_mixer: {}", e))?;

        // Missing sound or music files are expected; skip them with a warning
        // and keep the cues that did load.
        let sounds: HashMap<Sound, Chunk> = Sound::iter()
            .filter_map(|sound| match Self::load_sound(sound) {
                Ok(chunk) => Some((sound, chunk)),
                Err(e) => {
                    tracing::warn!("Failed to load sound {:?}: {}", sound, e);
                    None
                }
            })
            .collect();

        let music: HashMap<MusicTrack, Music<'static>> = MusicTrack::iter()
            .filter_map(|track| match Self::load_music(track) {
                Ok(music) => Some((track, music)),
                Err(e) => {
                    tracing::warn!("Failed to load music {:?}: {}", track, e);
                    None
                }
            })
            .collect();

        Ok(Audio {
            _mixer_context: Some(mixer_context),
            sounds,
            music,
            state: AudioState::Enabled { volume: DEFAULT_VOLUME },
        })
    }

    fn load_sound(sound: Sound) -> Result<Chunk> {
        let data = sound
            .asset()
            .try_get_bytes()
            .ok_or_else(|| anyhow!("No embedded file at {}", sound.asset().path()))?;
        let rwops = RWops::from_bytes(&data).map_err(|e| anyhow!("Failed to create RWops for {:?}: {}", sound, e))?;
        rwops
            .load_wav()
            .map_err(|e| anyhow!("Failed to load sound for {:?}: {}", sound, e))
    }

    fn load_music(track: MusicTrack) -> Result<Music<'static>> {
        let data = track
            .asset()
            .try_get_bytes()
            .ok_or_else(|| anyhow!("No embedded file at {}", track.asset().path()))?;
        // Music borrows its byte source; embedded assets live for the whole
        // process, so leaking the owned variant is equivalent.
        let bytes: &'static [u8] = Box::leak(data.into_owned().into_boxed_slice());
        Music::from_static_bytes(bytes).map_err(|e| anyhow!("Failed to load music for {:?}: {}", track, e))
    }

    /// Plays the provided sound cue once. Fire-and-forget: failures are
    /// logged, never propagated.
    pub fn play(&mut self, sound: Sound) {
        if !matches!(self.state, AudioState::Enabled { .. }) {
            return;
        }

        if let Some(chunk) = self.sounds.get(&sound) {
            if let Err(e) = mixer::Channel::all().play(chunk, 0) {
                tracing::warn!("Could not play sound {:?}: {}", sound, e);
            }
        }
    }

    /// Starts the given ambient track on a loop, replacing whatever was
    /// playing. Silently does nothing if the track's file is missing.
    pub fn play_music(&mut self, track: MusicTrack) {
        if self.state == AudioState::Disabled {
            return;
        }

        Music::halt();
        if let Some(music) = self.music.get(&track) {
            if let Err(e) = music.play(-1) {
                tracing::warn!("Could not play music {:?}: {}", track, e);
                return;
            }
            let volume = match self.state {
                AudioState::Enabled { .. } => MUSIC_VOLUME,
                _ => 0,
            };
            Music::set_volume(volume);
            tracing::debug!(?track, "Ambient music started");
        }
    }

    /// Stops the ambient track.
    pub fn stop_music(&mut self) {
        if self.state != AudioState::Disabled {
            Music::halt();
        }
    }

    /// Halts all currently playing audio channels.
    pub fn stop_all(&mut self) {
        if self.state != AudioState::Disabled {
            mixer::Channel::all().halt();
            Music::halt();
        }
    }

    /// Instantly mutes or unmutes all audio by adjusting channel and music
    /// volume. The mute state is tracked internally so it survives even when
    /// audio is disabled.
    pub fn set_mute(&mut self, mute: bool) {
        match (mute, self.state) {
            (true, AudioState::Enabled { volume }) => {
                self.state = AudioState::Muted { previous_volume: volume };
                for i in 0..AUDIO_CHANNELS {
                    mixer::Channel(i).set_volume(0);
                }
                Music::set_volume(0);
            }
            (false, AudioState::Muted { previous_volume }) => {
                self.state = AudioState::Enabled { volume: previous_volume };
                for i in 0..AUDIO_CHANNELS {
                    mixer::Channel(i).set_volume(previous_volume as i32);
                }
                Music::set_volume(MUSIC_VOLUME);
            }
            _ => {}
        }
    }

    /// Returns the current mute state regardless of whether audio is
    /// functional.
    pub fn is_muted(&self) -> bool {
        matches!(self.state, AudioState::Muted { .. })
    }
}
