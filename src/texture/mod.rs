//! Texture helpers for the presentation layer.

pub mod text;
