//! The menu layer: name entry, difficulty and theme selection.

use bevy_ecs::event::{EventReader, EventWriter};
use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Res, ResMut};
use strum_macros::{Display, EnumIter};
use tracing::info;

use crate::audio::Sound;
use crate::config::{Difficulty, SessionConfig, Theme};
use crate::constants::MAX_NAME_LEN;
use crate::events::{GameCommand, GameEvent, SessionSignal};
use crate::systems::audio::AudioEvent;
use crate::systems::state::{GameStage, GlobalState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum MenuRow {
    Name,
    Difficulty,
    Theme,
    Play,
    Quit,
}

/// Current menu selections. Committed into [`SessionConfig`] when Play is
/// activated; until then the previous session's config is untouched.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    pub row: MenuRow,
    pub name: String,
    pub difficulty: Difficulty,
    pub theme: Theme,
}

impl Default for MenuState {
    fn default() -> Self {
        let config = SessionConfig::default();
        Self {
            row: MenuRow::Name,
            name: config.player_name,
            difficulty: config.difficulty,
            theme: config.theme,
        }
    }
}

impl MenuState {
    pub fn up(&mut self) {
        self.row = match self.row {
            MenuRow::Name => MenuRow::Quit,
            MenuRow::Difficulty => MenuRow::Name,
            MenuRow::Theme => MenuRow::Difficulty,
            MenuRow::Play => MenuRow::Theme,
            MenuRow::Quit => MenuRow::Play,
        };
    }

    pub fn down(&mut self) {
        self.row = match self.row {
            MenuRow::Name => MenuRow::Difficulty,
            MenuRow::Difficulty => MenuRow::Theme,
            MenuRow::Theme => MenuRow::Play,
            MenuRow::Play => MenuRow::Quit,
            MenuRow::Quit => MenuRow::Name,
        };
    }

    /// Cycles the value on the focused row, if it has one.
    pub fn left(&mut self) {
        match self.row {
            MenuRow::Difficulty => self.difficulty = self.difficulty.previous(),
            MenuRow::Theme => self.theme = self.theme.previous(),
            _ => {}
        }
    }

    pub fn right(&mut self) {
        match self.row {
            MenuRow::Difficulty => self.difficulty = self.difficulty.next(),
            MenuRow::Theme => self.theme = self.theme.next(),
            _ => {}
        }
    }

    /// Appends typed text to the name, ignoring control characters and
    /// respecting the length cap.
    pub fn push_text(&mut self, text: &str) {
        if self.row != MenuRow::Name {
            return;
        }
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            if self.name.chars().count() >= MAX_NAME_LEN {
                break;
            }
            self.name.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.row == MenuRow::Name {
            self.name.pop();
        }
    }

    /// The configuration the next session would start with. An empty name
    /// falls back to the default.
    pub fn config(&self) -> SessionConfig {
        let player_name = if self.name.trim().is_empty() {
            SessionConfig::default().player_name
        } else {
            self.name.clone()
        };
        SessionConfig {
            player_name,
            difficulty: self.difficulty,
            theme: self.theme,
        }
    }
}

/// Applies input to the menu while it is on screen. Activating Play commits
/// the selections and requests a session start; Quit exits the process.
pub fn menu_system(
    stage: Res<GameStage>,
    mut menu: ResMut<MenuState>,
    mut config: ResMut<SessionConfig>,
    mut global: ResMut<GlobalState>,
    mut events: EventReader<GameEvent>,
    mut signals: EventWriter<SessionSignal>,
    mut audio: EventWriter<AudioEvent>,
) {
    if *stage != GameStage::Menu {
        return;
    }

    for event in events.read() {
        match event {
            GameEvent::Command(GameCommand::MenuUp) => menu.up(),
            GameEvent::Command(GameCommand::MenuDown) => menu.down(),
            GameEvent::Command(GameCommand::MenuLeft) => menu.left(),
            GameEvent::Command(GameCommand::MenuRight) => menu.right(),
            GameEvent::Command(GameCommand::MenuBackspace) => menu.backspace(),
            GameEvent::Command(GameCommand::MenuActivate) => match menu.row {
                MenuRow::Play => {
                    *config = menu.config();
                    audio.write(AudioEvent::PlaySound(Sound::Click));
                    signals.write(SessionSignal::Start);
                    info!(
                        player = %config.player_name,
                        difficulty = %config.difficulty,
                        theme = %config.theme,
                        "Play selected"
                    );
                }
                MenuRow::Quit => {
                    audio.write(AudioEvent::PlaySound(Sound::Click));
                    global.exit = true;
                }
                _ => {}
            },
            GameEvent::TextEntered(text) => menu.push_text(text),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn test_row_navigation_wraps() {
        let mut menu = MenuState::default();
        assert_eq!(menu.row, MenuRow::Name);
        menu.up();
        assert_eq!(menu.row, MenuRow::Quit);
        menu.down();
        assert_eq!(menu.row, MenuRow::Name);
    }

    #[test]
    fn test_name_entry_respects_cap() {
        let mut menu = MenuState::default();
        menu.name.clear();
        for _ in 0..MAX_NAME_LEN + 5 {
            menu.push_text("a");
        }
        assert_that!(menu.name.chars().count()).is_equal_to(MAX_NAME_LEN);
        menu.backspace();
        assert_that!(menu.name.chars().count()).is_equal_to(MAX_NAME_LEN - 1);
    }

    #[test]
    fn test_control_characters_are_dropped() {
        let mut menu = MenuState::default();
        menu.name.clear();
        menu.push_text("a\nb\tc");
        assert_eq!(menu.name, "abc");
    }

    #[test]
    fn test_empty_name_falls_back_to_default() {
        let mut menu = MenuState::default();
        menu.name = "   ".to_string();
        assert_eq!(menu.config().player_name, SessionConfig::default().player_name);
    }

    #[test]
    fn test_selectors_only_cycle_on_their_rows() {
        let mut menu = MenuState::default();
        menu.row = MenuRow::Name;
        menu.right();
        assert_eq!(menu.difficulty, Difficulty::Easy);
        assert_eq!(menu.theme, Theme::Default);

        menu.row = MenuRow::Difficulty;
        menu.right();
        assert_eq!(menu.difficulty, Difficulty::Medium);

        menu.row = MenuRow::Theme;
        menu.left();
        assert_eq!(menu.theme, Theme::Desert);
    }
}
