//! World construction and the per-frame schedule.

use anyhow::Result;
use bevy_ecs::event::EventRegistry;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

use crate::asset::Asset;
use crate::audio::{Audio, MusicTrack};
use crate::board::compute_layout;
use crate::config::SessionConfig;
use crate::constants::ui::{EXIT_FALLBACK_LABEL_SIZE, EXIT_LABEL, FONT_SIZE_HUD};
use crate::constants::{GRID_COLS, GRID_ROWS, WINDOW_SIZE};
use crate::events::{GameEvent, SessionSignal};
use crate::systems::audio::{audio_system, AudioEvent, AudioResource, AudioSettings};
use crate::systems::hud::{exit_button_rect, hud_render_system, ExitControl};
use crate::systems::input::{input_system, Bindings};
use crate::systems::interact::interact_system;
use crate::systems::lifetime::lifetime_system;
use crate::systems::menu::{menu_system, MenuState};
use crate::systems::render::{
    load_texture, present_system, render_system, theme_load_system, MenuTextures, ThemeTextures,
};
use crate::systems::spawn::spawn_system;
use crate::systems::state::{
    clock_system, stage_system, terminal_system, FrameClock, GameStage, GlobalState, PlayerLives, ScoreResource,
    SessionRng, SessionTiming,
};
use crate::target::{ActiveTarget, TargetSlots};
use crate::texture::text::TextRenderer;

pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Builds the world and schedule. The SDL handles are leaked to satisfy
    /// the `'static` bound on non-send resources; they live for the whole
    /// process anyway.
    pub fn new(canvas: Canvas<Window>, ttf_context: Sdl2TtfContext, event_pump: EventPump) -> Result<Self> {
        let texture_creator: &'static TextureCreator<WindowContext> = Box::leak(Box::new(canvas.texture_creator()));
        let canvas: &'static mut Canvas<Window> = Box::leak(Box::new(canvas));
        let ttf_context: &'static Sdl2TtfContext = Box::leak(Box::new(ttf_context));
        let event_pump: &'static mut EventPump = Box::leak(Box::new(event_pump));

        let text_renderer = TextRenderer::new(ttf_context, texture_creator);
        let exit_label_size = text_renderer
            .size_of(EXIT_LABEL, FONT_SIZE_HUD)
            .unwrap_or(EXIT_FALLBACK_LABEL_SIZE);

        let mut audio = Audio::new();
        audio.play_music(MusicTrack::Default);

        let menu_textures = MenuTextures {
            background: load_texture(texture_creator, Asset::MenuBackground),
        };

        let mut world = World::new();
        EventRegistry::register_event::<GameEvent>(&mut world);
        EventRegistry::register_event::<SessionSignal>(&mut world);
        EventRegistry::register_event::<AudioEvent>(&mut world);

        world.insert_resource(GameStage::default());
        world.insert_resource(GlobalState::default());
        world.insert_resource(FrameClock::default());
        world.insert_resource(ScoreResource::default());
        world.insert_resource(PlayerLives::default());
        world.insert_resource(SessionTiming::default());
        world.insert_resource(SessionRng::default());
        world.insert_resource(SessionConfig::default());
        world.insert_resource(MenuState::default());
        world.insert_resource(Bindings::default());
        world.insert_resource(AudioSettings::default());
        world.insert_resource(TargetSlots::default());
        world.insert_resource(ActiveTarget::default());
        world.insert_resource(compute_layout(WINDOW_SIZE.x, WINDOW_SIZE.y, GRID_ROWS, GRID_COLS));
        world.insert_resource(ExitControl {
            rect: exit_button_rect(exit_label_size),
        });

        world.insert_non_send_resource(canvas);
        world.insert_non_send_resource(texture_creator);
        world.insert_non_send_resource(event_pump);
        world.insert_non_send_resource(text_renderer);
        world.insert_non_send_resource(AudioResource(audio));
        world.insert_non_send_resource(ThemeTextures::default());
        world.insert_non_send_resource(menu_textures);

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                clock_system,
                input_system,
                terminal_system,
                menu_system,
                interact_system,
                stage_system,
                spawn_system,
                lifetime_system,
                theme_load_system,
                render_system,
                hud_render_system,
                present_system,
                audio_system,
            )
                .chain(),
        );

        Ok(Self { world, schedule })
    }

    /// Runs one frame. Returns whether the application should keep running.
    pub fn tick(&mut self) -> bool {
        self.schedule.run(&mut self.world);
        !self.world.resource::<GlobalState>().exit
    }
}
