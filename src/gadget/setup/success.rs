use bevy::prelude::*;

use crate::{
    config::PromptConfig,
    gadget::components::{SuccessRoot, palettes},
};

const MESSAGE_FONT_SIZE: f32 = 72.0;

/// System: Show the success message (desktop stand-in for the success page)
pub fn spawn_success(mut commands: Commands, prompt: Res<PromptConfig>) {
    info!("🎉 {}", prompt.success_message);

    commands.spawn((
        SuccessRoot,
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            ..default()
        },
        BackgroundColor(palettes::PAGE_BACKGROUND),
        children![(
            Text::new(prompt.success_message.clone()),
            TextFont {
                font_size: MESSAGE_FONT_SIZE,
                ..default()
            },
            TextColor(palettes::TEXT),
        )],
    ));
}
