//! Switches domain: the level's button and the door it holds open.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::SessionEntity;
use crate::movement::{GameLayer, Ground};
use crate::sprites::{ACTOR_SIZE, SpriteLayer};
use crate::switches::components::{Door, PressureButton};
use crate::switches::systems::BUTTON_COLOR;

const FLOOR_TOP: f32 = -180.0;
const BUTTON_SIZE: Vec2 = Vec2::new(48.0, 8.0);
const DOOR_SIZE: Vec2 = Vec2::new(30.0, 160.0);

/// A button on the left of the floor, and a door closing off the right corner.
pub(crate) fn spawn_switches(mut commands: Commands) {
    let z = SpriteLayer::Level.z_index();

    let button = commands
        .spawn((
            Name::new("Pressure Button"),
            PressureButton::new(Vec2::new(BUTTON_SIZE.x, ACTOR_SIZE.y)),
            SessionEntity,
            Sprite {
                color: BUTTON_COLOR,
                custom_size: Some(BUTTON_SIZE),
                ..default()
            },
            Transform::from_translation(
                Vec2::new(-300.0, FLOOR_TOP + BUTTON_SIZE.y * 0.5).extend(z),
            ),
        ))
        .id();

    let closed = Vec2::new(380.0, FLOOR_TOP + DOOR_SIZE.y * 0.5);
    commands.spawn((
        (
            Name::new("Door"),
            Door::new(button, closed.y),
            Ground,
            SessionEntity,
        ),
        (
            Sprite {
                color: Color::srgb(0.35, 0.35, 0.5),
                custom_size: Some(DOOR_SIZE),
                ..default()
            },
            Transform::from_translation(closed.extend(z)),
        ),
        (
            RigidBody::Kinematic,
            Collider::rectangle(DOOR_SIZE.x, DOOR_SIZE.y),
            CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
        ),
    ));

    info!("Spawned pressure button {:?} and its door", button);
}
