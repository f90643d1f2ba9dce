//! The per-frame systems, in the order the schedule chains them: clock,
//! input, terminal check, menu, interaction, stage transitions, spawning,
//! expiry, then the render and audio layers.

pub mod audio;
pub mod hud;
pub mod input;
pub mod interact;
pub mod lifetime;
pub mod menu;
pub mod render;
pub mod spawn;
pub mod state;
