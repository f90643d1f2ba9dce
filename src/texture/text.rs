//! Text rendering on top of SDL2_ttf.
//!
//! One embedded font is loaded at each point size the UI uses. If the font
//! asset is absent, the renderer stays functional but draws nothing; layout
//! callers fall back to fixed label sizes.

use std::collections::HashMap;

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::rwops::RWops;
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::{Window, WindowContext};
use tracing::warn;

use crate::asset::Asset;
use crate::constants::ui::{FONT_SIZE_BIG, FONT_SIZE_COUNTDOWN, FONT_SIZE_HUD, FONT_SIZE_SMALL};
use crate::error::{GameError, GameResult, TextureError};

/// Where the given position sits on the rendered text's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
    Center,
}

type CacheKey = (String, u16, (u8, u8, u8, u8));

/// Renders UI text, caching the glyph textures between frames. The cache is
/// bounded: HUD strings recycle quickly (score, timer), so it is simply
/// cleared when it grows past a fixed size.
pub struct TextRenderer {
    texture_creator: &'static TextureCreator<WindowContext>,
    fonts: HashMap<u16, Font<'static, 'static>>,
    cache: HashMap<CacheKey, Texture>,
}

const CACHE_LIMIT: usize = 256;

impl TextRenderer {
    pub fn new(ttf_context: &'static Sdl2TtfContext, texture_creator: &'static TextureCreator<WindowContext>) -> Self {
        let mut fonts = HashMap::new();

        match Asset::Font.try_get_bytes() {
            Some(data) => {
                let bytes: &'static [u8] = Box::leak(data.into_owned().into_boxed_slice());
                for size in [FONT_SIZE_SMALL, FONT_SIZE_HUD, FONT_SIZE_BIG, FONT_SIZE_COUNTDOWN] {
                    let loaded = RWops::from_bytes(bytes)
                        .and_then(|rwops| ttf_context.load_font_from_rwops(rwops, size));
                    match loaded {
                        Ok(font) => {
                            fonts.insert(size, font);
                        }
                        Err(e) => warn!(size, "Failed to load font: {}", e),
                    }
                }
            }
            None => warn!(path = Asset::Font.path(), "No font embedded; text will not be drawn"),
        }

        Self {
            texture_creator,
            fonts,
            cache: HashMap::new(),
        }
    }

    /// Pixel size of the text at the given point size, or `None` when no
    /// font is loaded.
    pub fn size_of(&self, text: &str, size: u16) -> Option<(u32, u32)> {
        let font = self.fonts.get(&size)?;
        font.size_of(text).ok()
    }

    /// Draws text anchored at the given window position. A no-op when the
    /// font is unavailable.
    pub fn draw(
        &mut self,
        canvas: &mut Canvas<Window>,
        text: &str,
        size: u16,
        color: Color,
        anchor: Anchor,
        position: (i32, i32),
    ) -> GameResult<()> {
        let Some(font) = self.fonts.get(&size) else {
            return Ok(());
        };

        if self.cache.len() > CACHE_LIMIT {
            for (_, texture) in self.cache.drain() {
                // unsafe_textures: textures are not dropped automatically.
                unsafe { texture.destroy() };
            }
        }

        let key: CacheKey = (text.to_string(), size, (color.r, color.g, color.b, color.a));
        if !self.cache.contains_key(&key) {
            let surface = font
                .render(text)
                .blended(color)
                .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
            let texture = self
                .texture_creator
                .create_texture_from_surface(&surface)
                .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
            self.cache.insert(key.clone(), texture);
        }

        let texture = &self.cache[&key];
        let query = texture.query();
        let (w, h) = (query.width, query.height);
        let (x, y) = match anchor {
            Anchor::TopLeft => (position.0, position.1),
            Anchor::TopRight => (position.0 - w as i32, position.1),
            Anchor::Center => (position.0 - w as i32 / 2, position.1 - h as i32 / 2),
        };

        canvas
            .copy(texture, None, Some(Rect::new(x, y, w, h)))
            .map_err(GameError::Sdl)
    }
}
