//! Trigger integration test
//!
//! Door gate в headless App: VolumeEntered → TriggerFired + "Open" trigger.
//! 60 tick'ов = 1 секунда Time<Fixed>.

use bevy::prelude::*;
use dimo_simulation::*;

const TICKS_PER_SECOND: usize = 60;

#[derive(Resource, Default)]
struct FiredLog(Vec<TriggerFired>);

fn collect_fired(mut events: EventReader<TriggerFired>, mut log: ResMut<FiredLog>) {
    log.0.extend(events.read().cloned());
}

fn create_trigger_app() -> App {
    let mut app = create_headless_app(42);
    app.add_plugins(SimulationPlugin)
        .init_resource::<FiredLog>()
        .add_systems(Update, collect_fired);
    // Первый update — delta = 0, FixedUpdate не запускается
    app.update();
    app
}

fn run_seconds(app: &mut App, seconds: usize) {
    for _ in 0..seconds * TICKS_PER_SECOND {
        app.update();
    }
}

/// Host пишет VolumeEntered, затем пара tick'ов на обработку
fn enter(app: &mut App, volume: Entity, other: Entity) {
    app.world_mut().send_event(VolumeEntered { volume, other });
    app.update();
    app.update();
}

fn fired_count(app: &App) -> usize {
    app.world().resource::<FiredLog>().0.len()
}

fn take_open_trigger(app: &mut App, animator: Entity) -> bool {
    app.world_mut()
        .get_mut::<AnimationParams>(animator)
        .is_some_and(|mut anim| anim.take_trigger("Open"))
}

#[test]
fn test_player_opens_door() {
    let mut app = create_trigger_app();
    let door = spawn_trigger_door(app.world_mut(), Transform::default(), TriggerGateConfig::default()).unwrap();
    let player = spawn_player(app.world_mut(), Vec3::ZERO);

    enter(&mut app, door, player);

    assert_eq!(fired_count(&app), 1);
    let fired = &app.world().resource::<FiredLog>().0[0];
    assert_eq!(fired.gate, door);
    assert_eq!(fired.animator, door);
    assert_eq!(fired.activator, player);
    assert_eq!(fired.parameter, "Open");
    assert!(take_open_trigger(&mut app, door));
    assert!(app.world().get::<TriggerGate>(door).unwrap().has_fired());
}

#[test]
fn test_cooldown_suppresses_second_enter() {
    let mut app = create_trigger_app();
    let door = spawn_trigger_door(app.world_mut(), Transform::default(), TriggerGateConfig::default()).unwrap();
    let player = spawn_player(app.world_mut(), Vec3::ZERO);

    enter(&mut app, door, player);
    run_seconds(&mut app, 1);
    enter(&mut app, door, player);
    assert_eq!(fired_count(&app), 1);

    // 7+ секунд после первого — снова открывается
    run_seconds(&mut app, 6);
    enter(&mut app, door, player);
    assert_eq!(fired_count(&app), 2);
}

#[test]
fn test_fire_once_door() {
    let mut app = create_trigger_app();
    let config = TriggerGateConfig {
        fire_once: true,
        ..default()
    };
    let door = spawn_trigger_door(app.world_mut(), Transform::default(), config).unwrap();
    let player = spawn_player(app.world_mut(), Vec3::ZERO);

    enter(&mut app, door, player);
    run_seconds(&mut app, 7);
    enter(&mut app, door, player);
    run_seconds(&mut app, 7);
    enter(&mut app, door, player);

    assert_eq!(fired_count(&app), 1);
}

#[test]
fn test_untagged_and_foreign_tags_ignored() {
    let mut app = create_trigger_app();
    let door = spawn_trigger_door(app.world_mut(), Transform::default(), TriggerGateConfig::default()).unwrap();
    let crate_box = app.world_mut().spawn(Transform::default()).id();
    let enemy = app
        .world_mut()
        .spawn((Transform::default(), CollisionTag::new("Enemy")))
        .id();

    enter(&mut app, door, crate_box);
    enter(&mut app, door, enemy);

    assert_eq!(fired_count(&app), 0);
    assert!(!take_open_trigger(&mut app, door));
}

#[test]
fn test_transition_blocks_trigger() {
    let mut app = create_trigger_app();
    let door = spawn_trigger_door(app.world_mut(), Transform::default(), TriggerGateConfig::default()).unwrap();
    let player = spawn_player(app.world_mut(), Vec3::ZERO);

    app.world_mut()
        .get_mut::<AnimationParams>(door)
        .unwrap()
        .set_transitioning(BASE_LAYER, true);
    enter(&mut app, door, player);
    assert_eq!(fired_count(&app), 0);

    app.world_mut()
        .get_mut::<AnimationParams>(door)
        .unwrap()
        .set_transitioning(BASE_LAYER, false);
    enter(&mut app, door, player);
    assert_eq!(fired_count(&app), 1);
}

#[test]
fn test_external_animator() {
    let mut app = create_trigger_app();
    let door_leaf = app.world_mut().spawn(AnimationParams::default()).id();
    let gate = TriggerGate::new(TriggerGateConfig::default())
        .unwrap()
        .with_animator(door_leaf);
    let volume = app.world_mut().spawn((gate, KinematicBody)).id();
    let player = spawn_player(app.world_mut(), Vec3::ZERO);

    enter(&mut app, volume, player);

    assert_eq!(fired_count(&app), 1);
    assert_eq!(app.world().resource::<FiredLog>().0[0].animator, door_leaf);
    assert!(take_open_trigger(&mut app, door_leaf));
}

#[test]
fn test_gate_without_animator_is_noop() {
    let mut app = create_trigger_app();
    let gate = TriggerGate::new(TriggerGateConfig::default()).unwrap();
    let volume = app.world_mut().spawn(gate).id();
    let player = spawn_player(app.world_mut(), Vec3::ZERO);

    enter(&mut app, volume, player);

    assert_eq!(fired_count(&app), 0);
    assert!(!app.world().get::<TriggerGate>(volume).unwrap().has_fired());
}

#[test]
fn test_event_for_unknown_volume_ignored() {
    let mut app = create_trigger_app();
    let not_a_gate = app.world_mut().spawn(AnimationParams::default()).id();
    let player = spawn_player(app.world_mut(), Vec3::ZERO);

    enter(&mut app, not_a_gate, player);
    assert_eq!(fired_count(&app), 0);
}
