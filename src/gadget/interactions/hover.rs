use bevy::prelude::*;

use crate::gadget::components::ButtonPalette;

/// System: Tint buttons on hover/press
pub fn tint_buttons(
    mut buttons: Query<
        (&Interaction, &ButtonPalette, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
) {
    for (interaction, palette, mut background) in &mut buttons {
        background.0 = palette.color_for(*interaction);
    }
}
