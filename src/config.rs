//! Difficulty presets, theme names, and the per-session configuration.
//!
//! The menu layer builds a [`SessionConfig`] and the session systems read it
//! as a resource; there is no ambient global selection state.

use bevy_ecs::resource::Resource;
use strum_macros::{Display, EnumIter};

/// Timing parameters for one difficulty level. All fields are strictly
/// positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyPreset {
    /// How long a target stays up once activated.
    pub target_visible_ms: u64,
    /// How often a new target appears.
    pub spawn_interval_ms: u64,
    /// Total session length.
    pub session_length_s: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn preset(self) -> DifficultyPreset {
        match self {
            Difficulty::Easy => DifficultyPreset {
                target_visible_ms: 1200,
                spawn_interval_ms: 900,
                session_length_s: 30,
            },
            Difficulty::Medium => DifficultyPreset {
                target_visible_ms: 900,
                spawn_interval_ms: 700,
                session_length_s: 25,
            },
            Difficulty::Hard => DifficultyPreset {
                target_visible_ms: 650,
                spawn_interval_ms: 550,
                session_length_s: 20,
            },
        }
    }

    /// Resolves a difficulty by name; unknown names fall back to the default.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Medium" => Difficulty::Medium,
            "Hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum Theme {
    #[default]
    Default,
    Jungle,
    Beach,
    Desert,
}

impl Theme {
    /// Resolves a theme by name; unknown names fall back to the default skin.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Jungle" => Theme::Jungle,
            "Beach" => Theme::Beach,
            "Desert" => Theme::Desert,
            _ => Theme::Default,
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Theme::Default => Theme::Jungle,
            Theme::Jungle => Theme::Beach,
            Theme::Beach => Theme::Desert,
            Theme::Desert => Theme::Default,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Theme::Default => Theme::Desert,
            Theme::Jungle => Theme::Default,
            Theme::Beach => Theme::Jungle,
            Theme::Desert => Theme::Beach,
        }
    }
}

/// The configuration a session is started with, assembled by the menu layer.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub player_name: String,
    pub difficulty: Difficulty,
    pub theme: Theme,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_name: "Player1".to_string(),
            difficulty: Difficulty::default(),
            theme: Theme::default(),
        }
    }
}
