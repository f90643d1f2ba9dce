#![allow(dead_code)]

use bevy_ecs::entity::Entity;
use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::world::World;

use mole_attack::board::{compute_layout, BoardLayout};
use mole_attack::config::SessionConfig;
use mole_attack::constants::ui::EXIT_FALLBACK_LABEL_SIZE;
use mole_attack::constants::{GRID_COLS, GRID_ROWS, WINDOW_SIZE};
use mole_attack::events::{GameEvent, SessionSignal};
use mole_attack::systems::audio::AudioEvent;
use mole_attack::systems::hud::{exit_button_rect, ExitControl};
use mole_attack::systems::menu::MenuState;
use mole_attack::systems::state::{
    FrameClock, GameStage, GlobalState, PlayerLives, ScoreResource, SessionRng, SessionTiming,
};
use mole_attack::target::{ActiveTarget, Target, TargetSlots};

/// A headless world with every resource the logic systems touch. The clock
/// is pinned at `now_ms`; tests advance it with [`set_clock`].
pub fn create_test_world(now_ms: u64) -> World {
    let mut world = World::new();

    EventRegistry::register_event::<GameEvent>(&mut world);
    EventRegistry::register_event::<SessionSignal>(&mut world);
    EventRegistry::register_event::<AudioEvent>(&mut world);

    world.insert_resource(GameStage::default());
    world.insert_resource(GlobalState::default());
    world.insert_resource(FrameClock::at(now_ms));
    world.insert_resource(ScoreResource::default());
    world.insert_resource(PlayerLives::default());
    world.insert_resource(SessionTiming::default());
    world.insert_resource(SessionRng::seeded(42));
    world.insert_resource(SessionConfig::default());
    world.insert_resource(MenuState::default());
    world.insert_resource(TargetSlots::default());
    world.insert_resource(ActiveTarget::default());
    world.insert_resource(compute_layout(WINDOW_SIZE.x, WINDOW_SIZE.y, GRID_ROWS, GRID_COLS));
    world.insert_resource(ExitControl {
        rect: exit_button_rect(EXIT_FALLBACK_LABEL_SIZE),
    });

    world
}

/// Puts the world straight into the playing state with a full board of
/// targets, bypassing the menu and countdown.
pub fn start_playing(world: &mut World, now_ms: u64) -> Vec<Entity> {
    let layout = world.resource::<BoardLayout>().clone();
    let preset = world.resource::<SessionConfig>().difficulty.preset();

    let entities: Vec<Entity> = layout
        .positions
        .iter()
        .map(|position| {
            world
                .spawn(Target::new(*position, layout.radius, preset.target_visible_ms))
                .id()
        })
        .collect();

    world.resource_mut::<TargetSlots>().0 = entities.clone();
    *world.resource_mut::<GameStage>() = GameStage::Playing;

    let mut timing = world.resource_mut::<SessionTiming>();
    timing.started_at = now_ms;
    timing.last_spawn = 0;

    set_clock(world, now_ms);
    entities
}

pub fn set_clock(world: &mut World, now_ms: u64) {
    world.resource_mut::<FrameClock>().now_ms = now_ms;
}

pub fn send_game_event(world: &mut World, event: GameEvent) {
    world.resource_mut::<Events<GameEvent>>().send(event);
}

pub fn send_signal(world: &mut World, signal: SessionSignal) {
    world.resource_mut::<Events<SessionSignal>>().send(signal);
}

pub fn drain_signals(world: &mut World) -> Vec<SessionSignal> {
    world.resource_mut::<Events<SessionSignal>>().drain().collect()
}

pub fn drain_audio(world: &mut World) -> Vec<AudioEvent> {
    world.resource_mut::<Events<AudioEvent>>().drain().collect()
}

/// Clears all pending events. `run_system_once` builds a fresh reader each
/// call, so stale events would otherwise be re-read by the next run.
pub fn clear_events(world: &mut World) {
    world.resource_mut::<Events<GameEvent>>().clear();
    world.resource_mut::<Events<SessionSignal>>().clear();
    world.resource_mut::<Events<AudioEvent>>().clear();
}

/// Number of currently active targets on the board.
pub fn active_count(world: &mut World) -> usize {
    world
        .query::<&Target>()
        .iter(world)
        .filter(|target| target.active)
        .count()
}
