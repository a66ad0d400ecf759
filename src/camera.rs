use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::evasion::Viewport;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportSize>()
            .add_systems(Startup, setup_camera)
            .add_systems(PreUpdate, update_viewport_size);
    }
}

/// Current size of the primary window in logical pixels
#[derive(Resource, Debug, Clone, Copy)]
pub struct ViewportSize(pub Viewport);

impl Default for ViewportSize {
    fn default() -> Self {
        Self(Viewport::new(0.0, 0.0))
    }
}

/// UI-only app: a plain 2D camera is all the buttons need
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Keep the viewport resource in sync with the window (runs before samples are handled)
fn update_viewport_size(
    mut viewport: ResMut<ViewportSize>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    // Compare first so change detection only fires on real resizes
    let next = Viewport::new(window.width(), window.height());
    if viewport.0 != next {
        viewport.0 = next;
        debug!("Viewport resized: {}x{}", next.width, next.height);
    }
}
