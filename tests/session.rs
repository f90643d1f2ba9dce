use bevy_ecs::system::RunSystemOnce;
use glam::Vec2;
use speculoos::prelude::*;

use mole_attack::config::SessionConfig;
use mole_attack::events::{GameEvent, SessionSignal};
use mole_attack::systems::hud::ExitControl;
use mole_attack::systems::interact::interact_system;
use mole_attack::systems::lifetime::lifetime_system;
use mole_attack::systems::spawn::spawn_system;
use mole_attack::systems::state::{terminal_system, GameStage, PlayerLives, ScoreResource};
use mole_attack::target::{ActiveTarget, Target};

mod common;

#[test]
fn test_spawn_activates_exactly_one_target() {
    let mut world = common::create_test_world(10_000);
    common::start_playing(&mut world, 10_000);

    world.run_system_once(spawn_system).expect("System should run successfully");

    assert_that(&common::active_count(&mut world)).is_equal_to(1);
    assert_that(&world.resource::<ActiveTarget>().0.is_some()).is_true();
}

#[test]
fn test_spawn_waits_for_the_interval() {
    let mut world = common::create_test_world(10_000);
    common::start_playing(&mut world, 10_000);

    world.run_system_once(spawn_system).expect("System should run successfully");
    let first = world.resource::<ActiveTarget>().0;

    // Within the interval nothing changes.
    let interval = world.resource::<SessionConfig>().difficulty.preset().spawn_interval_ms;
    common::set_clock(&mut world, 10_000 + interval);
    world.run_system_once(spawn_system).expect("System should run successfully");
    assert_eq!(world.resource::<ActiveTarget>().0, first);

    // Strictly past it, a new spawn happens and the board still has at most
    // one active target.
    common::set_clock(&mut world, 10_000 + interval + 1);
    world.run_system_once(spawn_system).expect("System should run successfully");
    assert_that(&common::active_count(&mut world)).is_equal_to(1);
}

#[test]
fn test_hit_scores_and_puts_the_target_away() {
    let mut world = common::create_test_world(10_000);
    common::start_playing(&mut world, 10_000);
    world.run_system_once(spawn_system).expect("System should run successfully");

    let entity = world.resource::<ActiveTarget>().0.expect("a target should be active");
    let position = world.get::<Target>(entity).unwrap().position;

    common::send_game_event(&mut world, GameEvent::PointerPressed(position));
    world.run_system_once(interact_system).expect("System should run successfully");

    assert_that(&world.resource::<ScoreResource>().0).is_equal_to(1);
    assert_that(&world.resource::<PlayerLives>().0).is_equal_to(3);
    assert_that(&world.get::<Target>(entity).unwrap().active).is_false();
    assert_that(&world.resource::<ActiveTarget>().0.is_none()).is_true();
}

#[test]
fn test_miss_costs_a_life_and_never_goes_negative() {
    let mut world = common::create_test_world(10_000);
    common::start_playing(&mut world, 10_000);

    for expected in [2u8, 1, 0, 0] {
        common::send_game_event(&mut world, GameEvent::PointerPressed(Vec2::new(1.0, 1.0)));
        world.run_system_once(interact_system).expect("System should run successfully");
        common::clear_events(&mut world);
        assert_that(&world.resource::<PlayerLives>().0).is_equal_to(expected);
    }
    assert_that(&world.resource::<ScoreResource>().0).is_equal_to(0);
}

#[test]
fn test_expiry_is_silent() {
    let mut world = common::create_test_world(10_000);
    common::start_playing(&mut world, 10_000);
    world.run_system_once(spawn_system).expect("System should run successfully");

    let visible = world.resource::<SessionConfig>().difficulty.preset().target_visible_ms;

    // At the boundary the target is still up.
    common::set_clock(&mut world, 10_000 + visible);
    world.run_system_once(lifetime_system).expect("System should run successfully");
    assert_that(&common::active_count(&mut world)).is_equal_to(1);

    common::set_clock(&mut world, 10_000 + visible + 1);
    world.run_system_once(lifetime_system).expect("System should run successfully");
    assert_that(&common::active_count(&mut world)).is_equal_to(0);
    assert_that(&world.resource::<ActiveTarget>().0.is_none()).is_true();

    // No score or life change.
    assert_that(&world.resource::<ScoreResource>().0).is_equal_to(0);
    assert_that(&world.resource::<PlayerLives>().0).is_equal_to(3);
}

#[test]
fn test_expiry_keeps_running_on_the_game_over_screen() {
    let mut world = common::create_test_world(10_000);
    common::start_playing(&mut world, 10_000);
    world.run_system_once(spawn_system).expect("System should run successfully");
    *world.resource_mut::<GameStage>() = GameStage::GameOver;

    let visible = world.resource::<SessionConfig>().difficulty.preset().target_visible_ms;
    common::set_clock(&mut world, 10_000 + visible + 1);
    world.run_system_once(lifetime_system).expect("System should run successfully");

    assert_that(&common::active_count(&mut world)).is_equal_to(0);
    assert_that(&world.resource::<ActiveTarget>().0.is_none()).is_true();
}

#[test]
fn test_session_ends_when_time_runs_out() {
    let mut world = common::create_test_world(10_000);
    common::start_playing(&mut world, 10_000);
    let length_s = world.resource::<SessionConfig>().difficulty.preset().session_length_s;

    common::set_clock(&mut world, 10_000 + length_s * 1000 - 1);
    world.run_system_once(terminal_system).expect("System should run successfully");
    assert_eq!(*world.resource::<GameStage>(), GameStage::Playing);

    common::set_clock(&mut world, 10_000 + length_s * 1000);
    world.run_system_once(terminal_system).expect("System should run successfully");
    assert_eq!(*world.resource::<GameStage>(), GameStage::GameOver);
}

#[test]
fn test_session_ends_when_lives_run_out() {
    let mut world = common::create_test_world(10_000);
    common::start_playing(&mut world, 10_000);
    world.resource_mut::<PlayerLives>().0 = 0;

    world.run_system_once(terminal_system).expect("System should run successfully");
    assert_eq!(*world.resource::<GameStage>(), GameStage::GameOver);

    // The terminal state is sticky.
    world.run_system_once(terminal_system).expect("System should run successfully");
    assert_eq!(*world.resource::<GameStage>(), GameStage::GameOver);
}

#[test]
fn test_exit_control_works_while_playing() {
    let mut world = common::create_test_world(10_000);
    common::start_playing(&mut world, 10_000);

    let rect = world.resource::<ExitControl>().rect;
    let center = Vec2::new(rect.x + rect.w / 2.0, rect.y + rect.h / 2.0);
    common::send_game_event(&mut world, GameEvent::PointerPressed(center));
    world.run_system_once(interact_system).expect("System should run successfully");

    let signals = common::drain_signals(&mut world);
    assert_that(&signals).is_equal_to(vec![SessionSignal::End]);
    // An exit press is not a miss.
    assert_that(&world.resource::<PlayerLives>().0).is_equal_to(3);
}

#[test]
fn test_exit_control_works_on_the_game_over_screen() {
    let mut world = common::create_test_world(10_000);
    common::start_playing(&mut world, 10_000);
    *world.resource_mut::<GameStage>() = GameStage::GameOver;

    let rect = world.resource::<ExitControl>().rect;
    let center = Vec2::new(rect.x + rect.w / 2.0, rect.y + rect.h / 2.0);
    common::send_game_event(&mut world, GameEvent::PointerPressed(center));
    world.run_system_once(interact_system).expect("System should run successfully");

    assert_that(&common::drain_signals(&mut world)).is_equal_to(vec![SessionSignal::End]);
}

#[test]
fn test_presses_are_ignored_on_the_game_over_board() {
    let mut world = common::create_test_world(10_000);
    common::start_playing(&mut world, 10_000);
    world.run_system_once(spawn_system).expect("System should run successfully");
    *world.resource_mut::<GameStage>() = GameStage::GameOver;

    let entity = world.resource::<ActiveTarget>().0.expect("a target should be active");
    let position = world.get::<Target>(entity).unwrap().position;
    common::send_game_event(&mut world, GameEvent::PointerPressed(position));
    world.run_system_once(interact_system).expect("System should run successfully");

    assert_that(&world.resource::<ScoreResource>().0).is_equal_to(0);
    assert_that(&world.resource::<PlayerLives>().0).is_equal_to(3);
}
