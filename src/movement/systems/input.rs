//! Movement domain: keyboard sampling.

use bevy::prelude::*;

use crate::movement::MovementInput;

const LEFT: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const JUMP: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyW];

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let left = keyboard.any_pressed(LEFT);
    let right = keyboard.any_pressed(RIGHT);

    input.axis = match (left, right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    };
    input.jump = keyboard.any_just_pressed(JUMP);
    input.dash = keyboard.just_pressed(KeyCode::ShiftLeft);
}
