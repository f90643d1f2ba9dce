//! HUD and overlay rendering: the stats card, the Exit control, the menu
//! rows, the countdown numeral, and the game-over screen.

use bevy_ecs::resource::Resource;
use bevy_ecs::system::{NonSendMut, Res};
use glam::Vec2;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::warn;

use crate::config::SessionConfig;
use crate::constants::ui::*;
use crate::constants::WINDOW_SIZE;
use crate::error::{GameError, GameResult};
use crate::systems::menu::{MenuRow, MenuState};
use crate::systems::state::{FrameClock, GameStage, PlayerLives, ScoreResource, SessionTiming};
use crate::texture::text::{Anchor, TextRenderer};

/// An axis-aligned rectangle in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl UiRect {
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.x + self.w && point.y >= self.y && point.y < self.y + self.h
    }
}

/// The clickable region of the in-game Exit control. Computed once at
/// startup from the rendered label size and anchored to the window's
/// top-right corner.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ExitControl {
    pub rect: UiRect,
}

/// Sizes the Exit control around its label: padding on each side, top-right
/// corner offset from the window's top-right corner.
pub fn exit_button_rect(label_size: (u32, u32)) -> UiRect {
    let w = label_size.0 + 2 * EXIT_PADDING.0;
    let h = label_size.1 + 2 * EXIT_PADDING.1;
    UiRect {
        x: (WINDOW_SIZE.x - EXIT_ANCHOR.0 - w) as f32,
        y: EXIT_ANCHOR.1 as f32,
        w: w as f32,
        h: h as f32,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn hud_render_system(
    mut canvas: NonSendMut<&'static mut Canvas<Window>>,
    mut text: NonSendMut<TextRenderer>,
    stage: Res<GameStage>,
    config: Res<SessionConfig>,
    menu: Res<MenuState>,
    score: Res<ScoreResource>,
    lives: Res<PlayerLives>,
    timing: Res<SessionTiming>,
    clock: Res<FrameClock>,
    exit: Res<ExitControl>,
) {
    let result = match *stage {
        GameStage::Menu => draw_menu(&mut canvas, &mut text, &menu),
        GameStage::Countdown { value, .. } => draw_countdown(&mut canvas, &mut text, value),
        GameStage::Playing => draw_session(&mut canvas, &mut text, &config, &score, &lives, &timing, &clock, &exit, false),
        GameStage::GameOver => draw_session(&mut canvas, &mut text, &config, &score, &lives, &timing, &clock, &exit, true),
    };

    if let Err(e) = result {
        warn!("HUD rendering failed: {}", e);
    }
}

fn draw_menu(canvas: &mut Canvas<Window>, text: &mut TextRenderer, menu: &MenuState) -> GameResult<()> {
    let center_x = WINDOW_SIZE.x as i32 / 2;
    text.draw(canvas, "Mole Attack", FONT_SIZE_BIG, TEXT_COLOR, Anchor::Center, (center_x, 90))?;

    let rows = [
        (MenuRow::Name, format!("Name: {}_", menu.name)),
        (MenuRow::Difficulty, format!("Difficulty: < {} >", menu.difficulty)),
        (MenuRow::Theme, format!("Theme: < {} >", menu.theme)),
        (MenuRow::Play, "Play".to_string()),
        (MenuRow::Quit, "Quit".to_string()),
    ];

    let mut y = 200;
    for (row, label) in rows {
        let color = if menu.row == row { MENU_SELECTION_COLOR } else { TEXT_COLOR };
        text.draw(canvas, &label, FONT_SIZE_HUD, color, Anchor::Center, (center_x, y))?;
        y += 50;
    }

    text.draw(
        canvas,
        "Arrows to navigate, Enter to select",
        FONT_SIZE_SMALL,
        TEXT_COLOR,
        Anchor::Center,
        (center_x, WINDOW_SIZE.y as i32 - 40),
    )
}

fn draw_countdown(canvas: &mut Canvas<Window>, text: &mut TextRenderer, value: u8) -> GameResult<()> {
    canvas.set_draw_color(OVERLAY_COUNTDOWN);
    canvas.fill_rect(None).map_err(GameError::Sdl)?;
    text.draw(
        canvas,
        &value.to_string(),
        FONT_SIZE_COUNTDOWN,
        TEXT_COLOR,
        Anchor::Center,
        (WINDOW_SIZE.x as i32 / 2, WINDOW_SIZE.y as i32 / 2),
    )
}

#[allow(clippy::too_many_arguments)]
fn draw_session(
    canvas: &mut Canvas<Window>,
    text: &mut TextRenderer,
    config: &SessionConfig,
    score: &ScoreResource,
    lives: &PlayerLives,
    timing: &SessionTiming,
    clock: &FrameClock,
    exit: &ExitControl,
    game_over: bool,
) -> GameResult<()> {
    // Stats card, top-left.
    canvas
        .rounded_box(10, 10, 10 + HUD_WIDTH as i16, 10 + HUD_HEIGHT as i16, 10, HUD_FILL)
        .map_err(GameError::Sdl)?;
    canvas
        .rounded_rectangle(10, 10, 10 + HUD_WIDTH as i16, 10 + HUD_HEIGHT as i16, 10, HUD_BORDER)
        .map_err(GameError::Sdl)?;

    let remaining = timing.remaining_s(clock.now_ms, config.difficulty.preset().session_length_s);
    let lines = [
        format!("Score: {}", score.0),
        format!("Lives: {}", lives.0),
        format!("Time: {}s", remaining),
    ];
    for (i, line) in lines.iter().enumerate() {
        let y = 10 + HUD_PADDING_Y + HUD_LINE_SPACING * i as i32;
        text.draw(canvas, line, FONT_SIZE_HUD, TEXT_COLOR, Anchor::TopLeft, (10 + HUD_PADDING_X, y))?;
    }

    // Player and difficulty, top-right above the Exit control.
    let right = WINDOW_SIZE.x as i32 - 10;
    text.draw(canvas, &config.player_name, FONT_SIZE_SMALL, TEXT_COLOR, Anchor::TopRight, (right, 10))?;
    text.draw(
        canvas,
        &config.difficulty.to_string(),
        FONT_SIZE_SMALL,
        TEXT_COLOR,
        Anchor::TopRight,
        (right, 38),
    )?;

    draw_exit_control(canvas, text, exit)?;

    if game_over {
        canvas.set_draw_color(OVERLAY_GAME_OVER);
        canvas.fill_rect(None).map_err(GameError::Sdl)?;

        let center_x = WINDOW_SIZE.x as i32 / 2;
        let center_y = WINDOW_SIZE.y as i32 / 2;
        text.draw(canvas, "Game Over", FONT_SIZE_BIG, GAME_OVER_COLOR, Anchor::Center, (center_x, center_y - 60))?;
        text.draw(
            canvas,
            &format!("{}: {} points", config.player_name, score.0),
            FONT_SIZE_HUD,
            TEXT_COLOR,
            Anchor::Center,
            (center_x, center_y),
        )?;
        text.draw(
            canvas,
            "Press Esc for menu",
            FONT_SIZE_SMALL,
            TEXT_COLOR,
            Anchor::Center,
            (center_x, center_y + 50),
        )?;
    }

    Ok(())
}

fn draw_exit_control(canvas: &mut Canvas<Window>, text: &mut TextRenderer, exit: &ExitControl) -> GameResult<()> {
    let rect = exit.rect;
    let (x1, y1) = (rect.x as i16, rect.y as i16);
    let (x2, y2) = ((rect.x + rect.w) as i16, (rect.y + rect.h) as i16);
    canvas.rounded_box(x1, y1, x2, y2, 6, EXIT_FILL).map_err(GameError::Sdl)?;
    canvas
        .rounded_rectangle(x1, y1, x2, y2, 6, EXIT_BORDER)
        .map_err(GameError::Sdl)?;
    text.draw(
        canvas,
        EXIT_LABEL,
        FONT_SIZE_HUD,
        TEXT_COLOR,
        Anchor::Center,
        ((rect.x + rect.w / 2.0) as i32, (rect.y + rect.h / 2.0) as i32),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn test_exit_rect_hugs_top_right() {
        let rect = exit_button_rect((52, 32));
        assert_eq!(rect.w, (52 + 2 * EXIT_PADDING.0) as f32);
        assert_eq!(rect.h, (32 + 2 * EXIT_PADDING.1) as f32);
        assert_eq!(rect.x + rect.w, (WINDOW_SIZE.x - EXIT_ANCHOR.0) as f32);
        assert_eq!(rect.y, EXIT_ANCHOR.1 as f32);
    }

    #[test]
    fn test_rect_containment_is_half_open() {
        let rect = UiRect { x: 10.0, y: 20.0, w: 30.0, h: 40.0 };
        assert_that!(rect.contains(Vec2::new(10.0, 20.0))).is_true();
        assert_that!(rect.contains(Vec2::new(39.9, 59.9))).is_true();
        assert_that!(rect.contains(Vec2::new(40.0, 20.0))).is_false();
        assert_that!(rect.contains(Vec2::new(10.0, 60.0))).is_false();
        assert_that!(rect.contains(Vec2::new(9.9, 20.0))).is_false();
    }
}
