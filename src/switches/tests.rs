//! Switches domain: tests for button edges and door travel.

use std::time::Duration;

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use super::systems::{BUTTON_COLOR, BUTTON_PRESSED_COLOR, drive_doors, move_doors, tint_buttons};
use super::*;

const FRAME: f32 = 0.25;

fn button() -> PressureButton {
    PressureButton::new(Vec2::new(48.0, 48.0))
}

fn door_for(button: Entity) -> Door {
    Door {
        open_height: 100.0,
        open_speed: 200.0,
        close_speed: 100.0,
        ..Door::new(button, 0.0)
    }
}

// ============================================================================
// PressureButton
// ============================================================================

#[test]
fn test_first_actor_presses_and_last_releases() {
    let mut button = button();
    assert!(!button.is_pressed());
    assert_eq!(button.update(0), None);

    assert_eq!(button.update(1), Some(ButtonTransition::Pressed));
    assert!(button.is_pressed());

    // A clone joining and the player leaving keep it down
    assert_eq!(button.update(2), None);
    assert_eq!(button.pressers(), 2);
    assert_eq!(button.update(1), None);
    assert!(button.is_pressed());

    assert_eq!(button.update(0), Some(ButtonTransition::Released));
    assert!(!button.is_pressed());
    assert_eq!(button.update(0), None);
}

#[test]
fn test_button_presses_again_after_release() {
    let mut button = button();
    assert_eq!(button.update(3), Some(ButtonTransition::Pressed));
    assert_eq!(button.update(0), Some(ButtonTransition::Released));
    assert_eq!(button.update(1), Some(ButtonTransition::Pressed));
}

// ============================================================================
// Door
// ============================================================================

#[test]
fn test_door_moves_at_its_speed_without_overshooting() {
    let mut door = door_for(Entity::PLACEHOLDER);

    assert_eq!(door.step(0.0, 0.1), 0.0);

    door.target = DoorTarget::Open;
    assert_eq!(door.target_y(), 100.0);
    assert_eq!(door.step(0.0, 0.25), 50.0);
    assert_eq!(door.step(90.0, 0.25), 100.0);

    door.target = DoorTarget::Closed;
    assert_eq!(door.step(100.0, 0.25), 75.0);
    assert_eq!(door.step(10.0, 0.25), 0.0);
}

#[test]
fn test_door_ignores_negative_time() {
    let mut door = door_for(Entity::PLACEHOLDER);
    door.target = DoorTarget::Open;
    assert_eq!(door.step(40.0, -1.0), 40.0);
}

// ============================================================================
// Systems
// ============================================================================

fn switch_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(FRAME)))
        .add_message::<ButtonPressed>()
        .add_message::<ButtonReleased>()
        .add_systems(Update, (drive_doors, move_doors, tint_buttons).chain());
    app.update();
    app
}

fn door_height(app: &App, door: Entity) -> f32 {
    app.world()
        .get::<Transform>(door)
        .expect("door transform")
        .translation
        .y
}

#[test]
fn test_door_follows_its_button() {
    let mut app = switch_app();
    let button = app.world_mut().spawn(self::button()).id();
    let other = app.world_mut().spawn(self::button()).id();
    let door = app
        .world_mut()
        .spawn((door_for(button), Transform::default()))
        .id();

    // Another button's press leaves the door shut
    app.world_mut()
        .resource_mut::<Messages<ButtonPressed>>()
        .write(ButtonPressed {
            button: other,
            pressers: 1,
        });
    app.update();
    assert_eq!(door_height(&app, door), 0.0);

    app.world_mut()
        .resource_mut::<Messages<ButtonPressed>>()
        .write(ButtonPressed {
            button,
            pressers: 1,
        });
    app.update();
    assert_eq!(door_height(&app, door), 50.0);
    app.update();
    assert_eq!(door_height(&app, door), 100.0);
    app.update();
    assert_eq!(door_height(&app, door), 100.0);

    app.world_mut()
        .resource_mut::<Messages<ButtonReleased>>()
        .write(ButtonReleased { button });
    app.update();
    assert_eq!(door_height(&app, door), 75.0);
    assert_eq!(
        app.world().get::<Door>(door).expect("door").target,
        DoorTarget::Closed
    );
}

#[test]
fn test_button_tint_tracks_pressed_state() {
    let mut app = switch_app();
    let button = app
        .world_mut()
        .spawn((
            self::button(),
            Sprite {
                color: BUTTON_COLOR,
                ..default()
            },
        ))
        .id();

    app.world_mut()
        .get_mut::<PressureButton>(button)
        .expect("button")
        .update(1);
    app.update();
    assert_eq!(
        app.world().get::<Sprite>(button).expect("sprite").color,
        BUTTON_PRESSED_COLOR
    );

    app.world_mut()
        .get_mut::<PressureButton>(button)
        .expect("button")
        .update(0);
    app.update();
    assert_eq!(
        app.world().get::<Sprite>(button).expect("sprite").color,
        BUTTON_COLOR
    );
}
