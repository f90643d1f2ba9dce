use bevy_ecs::prelude::*;
use glam::Vec2;

/// A keyboard- or window-level command, mapped from raw SDL input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    /// Quit the whole process (window close).
    QuitApp,
    /// Abandon the session and return to the menu.
    ReturnToMenu,
    MuteAudio,
    MenuUp,
    MenuDown,
    MenuLeft,
    MenuRight,
    MenuActivate,
    MenuBackspace,
}

/// Raw input events, written exclusively by the input system.
#[derive(Event, Clone, Debug, PartialEq)]
pub enum GameEvent {
    Command(GameCommand),
    /// A primary pointer press at window coordinates.
    PointerPressed(Vec2),
    /// Text typed while the OS text-input mode is active.
    TextEntered(String),
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}

/// Session lifecycle signals, consumed by the stage system.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionSignal {
    /// The menu requested a new session (Play activated).
    Start,
    /// The in-game Exit control was pressed; ends the session from either
    /// the playing or game-over state.
    End,
}
