use bevy::prelude::*;

/// System: Despawn every screen root tagged with `T` (children go with it)
pub fn despawn_screen<T: Component>(mut commands: Commands, roots: Query<Entity, With<T>>) {
    for root in &roots {
        commands.entity(root).despawn();
    }
}
