//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::UVec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the window, in pixels.
pub const WINDOW_SIZE: UVec2 = UVec2::new(800, 600);

/// The shape of the hideout grid.
pub const GRID_ROWS: u32 = 3;
pub const GRID_COLS: u32 = 3;

/// The number of lives a session starts with.
pub const STARTING_LIVES: u8 = 3;

/// Countdown settings: the first numeral shown and how long each numeral is held.
pub const COUNTDOWN_START: u8 = 3;
pub const COUNTDOWN_STEP_MS: u64 = 1000;

/// Ambient music volume, out of SDL2_mixer's maximum of 128.
pub const MUSIC_VOLUME: i32 = 64;

/// Maximum length of the player name entered in the menu.
pub const MAX_NAME_LEN: usize = 16;

pub mod ui {
    use sdl2::pixels::Color;

    pub const TEXT_COLOR: Color = Color::RGB(245, 245, 235);
    /// Fallback circle colors when a theme ships no sprites.
    pub const MOLE_COLOR: Color = Color::RGB(150, 90, 50);
    pub const HOLE_COLOR: Color = Color::RGB(90, 55, 30);
    /// How much wider a hideout circle is than the target it hosts.
    pub const HOLE_RING: f32 = 8.0;

    pub const HUD_WIDTH: u32 = 230;
    pub const HUD_HEIGHT: u32 = 110;
    pub const HUD_PADDING_X: i32 = 14;
    pub const HUD_PADDING_Y: i32 = 10;
    pub const HUD_LINE_SPACING: i32 = 30;
    pub const HUD_FILL: Color = Color::RGBA(20, 80, 40, 170);
    pub const HUD_BORDER: Color = Color::RGBA(255, 230, 140, 220);

    /// Exit button: label, padding around the rendered label, and the offset
    /// of its top-right corner from the window's top-right corner.
    pub const EXIT_LABEL: &str = "Exit";
    pub const EXIT_PADDING: (u32, u32) = (10, 6);
    pub const EXIT_ANCHOR: (u32, u32) = (10, 70);
    /// Label size assumed when no font could be loaded, so the control still
    /// has a clickable region.
    pub const EXIT_FALLBACK_LABEL_SIZE: (u32, u32) = (52, 32);
    pub const EXIT_FILL: Color = Color::RGBA(10, 60, 40, 210);
    pub const EXIT_BORDER: Color = Color::RGBA(255, 220, 130, 255);

    pub const OVERLAY_GAME_OVER: Color = Color::RGBA(0, 0, 0, 180);
    pub const OVERLAY_COUNTDOWN: Color = Color::RGBA(0, 0, 0, 150);
    pub const GAME_OVER_COLOR: Color = Color::RGB(255, 100, 90);
    pub const MENU_SELECTION_COLOR: Color = Color::RGB(255, 220, 130);

    pub const FONT_SIZE_SMALL: u16 = 22;
    pub const FONT_SIZE_HUD: u16 = 28;
    pub const FONT_SIZE_BIG: u16 = 48;
    pub const FONT_SIZE_COUNTDOWN: u16 = 96;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        // 60 FPS = 16.67ms per frame
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_window_size() {
        assert_eq!(WINDOW_SIZE.x, 800);
        assert_eq!(WINDOW_SIZE.y, 600);
    }

    #[test]
    fn test_grid_shape() {
        assert_eq!(GRID_ROWS * GRID_COLS, 9);
    }

    #[test]
    fn test_countdown_settings() {
        assert_eq!(COUNTDOWN_START, 3);
        assert_eq!(COUNTDOWN_STEP_MS, 1000);
    }
}
