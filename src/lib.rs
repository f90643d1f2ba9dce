//! Mole Attack: a single-session whack-a-mole arcade game.

pub mod app;
pub mod asset;
pub mod audio;
pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod systems;
pub mod target;
pub mod texture;
pub mod theme;
