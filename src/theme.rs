//! Theme descriptors.
//!
//! A [`ThemeSpec`] names the assets a theme would like to use and the
//! procedural defaults to fall back to. Resolution never fails: a missing
//! image degrades to the gradient or circle rendering path, a missing music
//! track to silence. Texture loading itself happens in the render layer,
//! since SDL textures are bound to the main thread.

use sdl2::pixels::Color;

use crate::asset::Asset;
use crate::audio::MusicTrack;
use crate::config::Theme;

/// Pure description of a theme's visuals and audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSpec {
    /// Top and bottom colors of the fallback vertical gradient.
    pub gradient: (Color, Color),
    pub background: Option<Asset>,
    pub target_sprite: Option<Asset>,
    pub hideout_sprite: Option<Asset>,
    pub music: MusicTrack,
}

impl Theme {
    pub fn spec(self) -> ThemeSpec {
        match self {
            Theme::Default => ThemeSpec {
                gradient: (Color::RGB(10, 70, 50), Color::RGB(230, 140, 70)),
                background: None,
                target_sprite: None,
                hideout_sprite: None,
                music: MusicTrack::Default,
            },
            Theme::Jungle => ThemeSpec {
                gradient: (Color::RGB(10, 60, 40), Color::RGB(40, 100, 60)),
                background: Some(Asset::JungleBackground),
                target_sprite: Some(Asset::JungleMole),
                hideout_sprite: Some(Asset::JungleHole),
                music: MusicTrack::Jungle,
            },
            Theme::Beach => ThemeSpec {
                gradient: (Color::RGB(30, 140, 200), Color::RGB(240, 220, 160)),
                background: Some(Asset::BeachBackground),
                target_sprite: Some(Asset::BeachMole),
                hideout_sprite: Some(Asset::BeachHole),
                music: MusicTrack::Beach,
            },
            Theme::Desert => ThemeSpec {
                gradient: (Color::RGB(180, 140, 80), Color::RGB(240, 200, 130)),
                background: Some(Asset::DesertBackground),
                target_sprite: Some(Asset::DesertMole),
                hideout_sprite: Some(Asset::DesertHole),
                music: MusicTrack::Desert,
            },
        }
    }
}
