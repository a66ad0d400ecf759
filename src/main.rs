use bevy::prelude::*;

mod camera;
mod config;
mod evasion;
mod gadget;
mod input;
mod navigation;

use bevy::window::WindowResolution;
use camera::CameraPlugin;
use config::ConfigPlugin;
use input::InputPlugin;
use navigation::NavigationPlugin;

use crate::gadget::plugin::GadgetPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Shy No".into(),
            resolution: WindowResolution::new(1000, 800),
            resizable: true,
            // Web: fill the page like a regular document would
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(ConfigPlugin)
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(NavigationPlugin)
    .add_plugins(GadgetPlugin);

    app.run();
}
