//! Embedded asset lookup.
//!
//! Assets are embedded from the `assets/` directory at compile time. Every
//! asset is optional: a theme whose images or music are absent falls back to
//! procedural rendering (gradient background, circle visuals) and silence, so
//! lookups surface as `Option` rather than errors.

use std::borrow::Cow;

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Font,
    MenuBackground,
    ClickSound,
    SplatSound,
    GameOverSound,
    DefaultMusic,
    JungleMusic,
    BeachMusic,
    DesertMusic,
    JungleBackground,
    JungleMole,
    JungleHole,
    BeachBackground,
    BeachMole,
    BeachHole,
    DesertBackground,
    DesertMole,
    DesertHole,
}

impl Asset {
    pub fn path(self) -> &'static str {
        match self {
            Asset::Font => "fonts/hud.ttf",
            Asset::MenuBackground => "images/menu_bg.png",
            Asset::ClickSound => "sounds/click.ogg",
            Asset::SplatSound => "sounds/splat.ogg",
            Asset::GameOverSound => "sounds/game_over.ogg",
            Asset::DefaultMusic => "sounds/bg_music.ogg",
            Asset::JungleMusic => "sounds/jungle_bg.ogg",
            Asset::BeachMusic => "sounds/beach_bg.ogg",
            Asset::DesertMusic => "sounds/desert_bg.ogg",
            Asset::JungleBackground => "images/jungle_bg.png",
            Asset::JungleMole => "images/jungle_mole.png",
            Asset::JungleHole => "images/jungle_hole.png",
            Asset::BeachBackground => "images/beach_bg.png",
            Asset::BeachMole => "images/beach_mole.png",
            Asset::BeachHole => "images/beach_hole.png",
            Asset::DesertBackground => "images/desert_bg.png",
            Asset::DesertMole => "images/desert_mole.png",
            Asset::DesertHole => "images/desert_hole.png",
        }
    }

    /// Returns the embedded bytes for this asset, or `None` if the file was
    /// not present at compile time.
    pub fn try_get_bytes(self) -> Option<Cow<'static, [u8]>> {
        Assets::get(self.path()).map(|file| file.data)
    }
}
