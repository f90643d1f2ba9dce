//! Application shell: SDL initialization, the window, and the frame loop.

use std::time::Instant;

use anyhow::{anyhow, Result};
use sdl2::render::BlendMode;
use tracing::warn;

use crate::constants::{LOOP_TIME, WINDOW_SIZE};
use crate::game::Game;

pub struct App {
    game: Game,
    // Dropping a subsystem handle shuts that subsystem down; keep them alive
    // for the lifetime of the app.
    _sdl_context: sdl2::Sdl,
    _video_subsystem: sdl2::VideoSubsystem,
    _audio_subsystem: sdl2::AudioSubsystem,
}

impl App {
    pub fn new() -> Result<Self> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!("Failed to initialize SDL2: {}", e))?;
        let video_subsystem = sdl_context
            .video()
            .map_err(|e| anyhow!("Failed to initialize video subsystem: {}", e))?;
        let audio_subsystem = sdl_context
            .audio()
            .map_err(|e| anyhow!("Failed to initialize audio subsystem: {}", e))?;

        let window = video_subsystem
            .window("Mole Attack", WINDOW_SIZE.x, WINDOW_SIZE.y)
            .position_centered()
            .build()?;

        let mut canvas = window.into_canvas().accelerated().build()?;
        canvas.set_blend_mode(BlendMode::Blend);

        // Text input stays on for the whole run; only the menu consumes it.
        video_subsystem.text_input().start();

        let ttf_context =
            sdl2::ttf::init().map_err(|e| anyhow!("Failed to initialize TTF context: {}", e))?;
        let event_pump = sdl_context
            .event_pump()
            .map_err(|e| anyhow!("Failed to get event pump: {}", e))?;

        let game = Game::new(canvas, ttf_context, event_pump)?;

        Ok(Self {
            game,
            _sdl_context: sdl_context,
            _video_subsystem: video_subsystem,
            _audio_subsystem: audio_subsystem,
        })
    }

    /// Runs one paced frame. Returns whether the loop should continue.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();
        let keep_running = self.game.tick();

        let elapsed = start.elapsed();
        if elapsed > LOOP_TIME {
            warn!("Frame took {:?} ({:?} behind schedule)", elapsed, elapsed - LOOP_TIME);
        } else {
            spin_sleep::sleep(LOOP_TIME - elapsed);
        }

        keep_running
    }
}
