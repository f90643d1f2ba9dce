//! Background and board rendering.
//!
//! The render systems are read-only over game state: they draw the current
//! frame and never mutate score, lives, timing, or the stage. Theme images
//! are optional; a missing background falls back to a vertical gradient and
//! missing sprites to flat circles.

use bevy_ecs::system::{NonSend, NonSendMut, Query, Res};
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use tracing::{debug, warn};

use crate::asset::Asset;
use crate::config::{SessionConfig, Theme};
use crate::constants::ui::{HOLE_COLOR, HOLE_RING, MOLE_COLOR};
use crate::constants::WINDOW_SIZE;
use crate::systems::state::GameStage;
use crate::target::{Target, TargetSlots};

/// Textures for the currently loaded theme. Entries are `None` when the
/// theme ships no image or loading failed; rendering then falls back to
/// procedural drawing.
#[derive(Default)]
pub struct ThemeTextures {
    pub theme: Option<Theme>,
    pub background: Option<Texture>,
    pub target: Option<Texture>,
    pub hideout: Option<Texture>,
}

/// The menu's background image, if one is embedded.
#[derive(Default)]
pub struct MenuTextures {
    pub background: Option<Texture>,
}

pub fn load_texture(texture_creator: &TextureCreator<WindowContext>, asset: Asset) -> Option<Texture> {
    let data = asset.try_get_bytes()?;
    match texture_creator.load_texture_bytes(&data) {
        Ok(texture) => Some(texture),
        Err(e) => {
            warn!(path = asset.path(), "Failed to load texture: {}", e);
            None
        }
    }
}

/// Loads the selected theme's textures when a session leaves the menu with a
/// different theme than last time.
pub fn theme_load_system(
    mut textures: NonSendMut<ThemeTextures>,
    texture_creator: NonSend<&'static TextureCreator<WindowContext>>,
    stage: Res<GameStage>,
    config: Res<SessionConfig>,
) {
    if *stage == GameStage::Menu || textures.theme == Some(config.theme) {
        return;
    }

    for old in [
        textures.background.take(),
        textures.target.take(),
        textures.hideout.take(),
    ]
    .into_iter()
    .flatten()
    {
        // unsafe_textures: textures are not dropped automatically.
        unsafe { old.destroy() };
    }

    let spec = config.theme.spec();
    textures.background = spec.background.and_then(|asset| load_texture(&texture_creator, asset));
    textures.target = spec.target_sprite.and_then(|asset| load_texture(&texture_creator, asset));
    textures.hideout = spec.hideout_sprite.and_then(|asset| load_texture(&texture_creator, asset));
    textures.theme = Some(config.theme);
    debug!(theme = %config.theme, "Theme textures loaded");
}

/// Paints each scanline with a color interpolated between top and bottom.
pub fn draw_vertical_gradient(canvas: &mut Canvas<Window>, top: Color, bottom: Color) -> Result<(), String> {
    let height = WINDOW_SIZE.y as i32;
    let width = WINDOW_SIZE.x as i32;
    for y in 0..height {
        let t = y as f32 / (height - 1) as f32;
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        canvas.set_draw_color(Color::RGB(lerp(top.r, bottom.r), lerp(top.g, bottom.g), lerp(top.b, bottom.b)));
        canvas.draw_line((0, y), (width - 1, y))?;
    }
    Ok(())
}

/// Draws the background and, during play, the hideouts and any visible
/// target.
pub fn render_system(
    mut canvas: NonSendMut<&'static mut Canvas<Window>>,
    theme_textures: NonSend<ThemeTextures>,
    menu_textures: NonSend<MenuTextures>,
    stage: Res<GameStage>,
    config: Res<SessionConfig>,
    slots: Res<TargetSlots>,
    targets: Query<&Target>,
) {
    let result = match *stage {
        GameStage::Menu => draw_background(&mut canvas, menu_textures.background.as_ref(), Theme::Default),
        GameStage::Countdown { .. } => draw_background(&mut canvas, theme_textures.background.as_ref(), config.theme),
        GameStage::Playing | GameStage::GameOver => {
            draw_background(&mut canvas, theme_textures.background.as_ref(), config.theme).and_then(|_| {
                draw_board(&mut canvas, &theme_textures, &slots, &targets)
            })
        }
    };

    if let Err(e) = result {
        warn!("Rendering failed: {}", e);
    }
}

fn draw_background(canvas: &mut Canvas<Window>, background: Option<&Texture>, theme: Theme) -> Result<(), String> {
    match background {
        Some(texture) => canvas.copy(texture, None, None),
        None => {
            let (top, bottom) = theme.spec().gradient;
            draw_vertical_gradient(canvas, top, bottom)
        }
    }
}

fn draw_board(
    canvas: &mut Canvas<Window>,
    textures: &ThemeTextures,
    slots: &TargetSlots,
    targets: &Query<&Target>,
) -> Result<(), String> {
    for &entity in slots.0.iter() {
        let Ok(target) = targets.get(entity) else {
            continue;
        };

        let (x, y) = (target.position.x, target.position.y);
        let hole_radius = target.radius + HOLE_RING;
        match &textures.hideout {
            Some(texture) => {
                let side = (2.0 * hole_radius) as u32;
                canvas.copy(texture, None, Some(centered_rect(x, y, side)))?;
            }
            None => canvas.filled_circle(x as i16, y as i16, hole_radius as i16, HOLE_COLOR)?,
        }

        if target.active {
            match &textures.target {
                Some(texture) => {
                    let side = (2.0 * target.radius) as u32;
                    canvas.copy(texture, None, Some(centered_rect(x, y, side)))?;
                }
                None => canvas.filled_circle(x as i16, y as i16, target.radius as i16, MOLE_COLOR)?,
            }
        }
    }
    Ok(())
}

fn centered_rect(x: f32, y: f32, side: u32) -> Rect {
    Rect::new(x as i32 - side as i32 / 2, y as i32 - side as i32 / 2, side, side)
}

/// Flips the back buffer. Runs last in the frame.
pub fn present_system(mut canvas: NonSendMut<&'static mut Canvas<Window>>) {
    canvas.present();
}
