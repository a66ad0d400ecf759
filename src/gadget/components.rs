use bevy::prelude::*;

/// The "No" button: runs away from the pointer
#[derive(Component, Debug)]
pub struct EvadingButton;

/// The "Yes" button: stays put, navigates when pressed
#[derive(Component, Debug)]
pub struct YesButton;

/// Root of the prompt screen, despawned when leaving it
#[derive(Component, Debug)]
pub struct PromptRoot;

/// Root of the success screen
#[derive(Component, Debug)]
pub struct SuccessRoot;

/// Background colors per interaction state
#[derive(Component, Debug, Clone, Copy)]
pub struct ButtonPalette {
    pub idle: Color,
    pub hovered: Color,
    pub pressed: Color,
}

impl ButtonPalette {
    pub fn color_for(&self, interaction: Interaction) -> Color {
        match interaction {
            Interaction::Pressed => self.pressed,
            Interaction::Hovered => self.hovered,
            Interaction::None => self.idle,
        }
    }
}

pub mod palettes {
    use super::ButtonPalette;
    use bevy::color::Color;

    pub const PAGE_BACKGROUND: Color = Color::srgb(1.0, 0.92, 0.94);
    pub const TEXT: Color = Color::srgb(0.35, 0.08, 0.2);
    pub const LABEL: Color = Color::WHITE;

    pub const YES: ButtonPalette = ButtonPalette {
        idle: Color::srgb(0.2, 0.7, 0.35),
        hovered: Color::srgb(0.25, 0.8, 0.42),
        pressed: Color::srgb(0.15, 0.55, 0.28),
    };

    pub const NO: ButtonPalette = ButtonPalette {
        idle: Color::srgb(0.85, 0.25, 0.3),
        hovered: Color::srgb(0.92, 0.32, 0.36),
        pressed: Color::srgb(0.7, 0.18, 0.22),
    };
}
