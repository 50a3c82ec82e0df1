mod clones;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod effects;
mod movement;
mod sprites;
mod switches;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Echo Loop".to_string(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        movement::MovementPlugin,
        sprites::SpritesPlugin,
        clones::ClonesPlugin,
        effects::EffectsPlugin,
        switches::SwitchesPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
