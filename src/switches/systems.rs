//! Switches domain: press detection and door movement.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::GameLayer;
use crate::switches::components::{ButtonTransition, Door, DoorTarget, PressureButton};
use crate::switches::events::{ButtonPressed, ButtonReleased};

pub(crate) const BUTTON_COLOR: Color = Color::srgb(0.8, 0.25, 0.2);
pub(crate) const BUTTON_PRESSED_COLOR: Color = Color::srgb(0.3, 0.8, 0.3);

/// Counts players and clones standing on each button.
pub(crate) fn detect_presses(
    spatial_query: SpatialQuery,
    mut buttons: Query<(Entity, &Transform, &mut PressureButton)>,
    mut pressed: MessageWriter<ButtonPressed>,
    mut released: MessageWriter<ButtonReleased>,
) {
    let filter = SpatialQueryFilter::from_mask([GameLayer::Player, GameLayer::Clone]);

    for (entity, transform, mut button) in &mut buttons {
        let size = button.detection_size;
        let area = Collider::rectangle(size.x, size.y);
        let center = transform.translation.truncate() + Vec2::new(0.0, size.y * 0.5);
        let pressers = spatial_query
            .shape_intersections(&area, center, 0.0, &filter)
            .len();

        match button.update(pressers) {
            Some(ButtonTransition::Pressed) => {
                info!("Button {:?} pressed by {} actors", entity, pressers);
                pressed.write(ButtonPressed {
                    button: entity,
                    pressers,
                });
            }
            Some(ButtonTransition::Released) => {
                info!("Button {:?} released", entity);
                released.write(ButtonReleased { button: entity });
            }
            None => {}
        }
    }
}

/// Points every door at open or closed to follow its button.
pub(crate) fn drive_doors(
    mut pressed: MessageReader<ButtonPressed>,
    mut released: MessageReader<ButtonReleased>,
    mut doors: Query<(Entity, &mut Door)>,
) {
    let mut retarget = |button: Entity, target: DoorTarget| {
        for (entity, mut door) in &mut doors {
            if door.button == button && door.target != target {
                door.target = target;
                debug!("Door {:?} moving to {:?}", entity, target);
            }
        }
    };

    for event in pressed.read() {
        retarget(event.button, DoorTarget::Open);
    }
    for event in released.read() {
        retarget(event.button, DoorTarget::Closed);
    }
}

pub(crate) fn move_doors(time: Res<Time>, mut doors: Query<(&Door, &mut Transform)>) {
    let dt = time.delta_secs();

    for (door, mut transform) in &mut doors {
        let y = door.step(transform.translation.y, dt);
        if y != transform.translation.y {
            transform.translation.y = y;
        }
    }
}

pub(crate) fn tint_buttons(mut buttons: Query<(&PressureButton, &mut Sprite)>) {
    for (button, mut sprite) in &mut buttons {
        let color = if button.is_pressed() {
            BUTTON_PRESSED_COLOR
        } else {
            BUTTON_COLOR
        };
        if sprite.color != color {
            sprite.color = color;
        }
    }
}
