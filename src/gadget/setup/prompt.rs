use bevy::prelude::*;
use bevy::ui::UiTransform;

use crate::{
    config::PromptConfig,
    evasion::{EvasionParams, Evader},
    gadget::components::{ButtonPalette, EvadingButton, PromptRoot, YesButton, palettes},
};

const QUESTION_FONT_SIZE: f32 = 48.0;
const LABEL_FONT_SIZE: f32 = 32.0;

/// Gap between the question and the buttons, and between the two buttons
const STACK_GAP: f32 = 40.0;
const BUTTON_GAP: f32 = 32.0;

/// System: Create the evasion state from the loaded params
pub fn init_evader(mut commands: Commands, params: Res<EvasionParams>) {
    commands.insert_resource(Evader::new(*params));
}

/// System: Spawn the question with its two buttons, centered in the window
pub fn spawn_prompt(mut commands: Commands, prompt: Res<PromptConfig>) {
    info!("Spawning prompt: {:?}", prompt.question);

    commands.spawn((
        PromptRoot,
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            row_gap: Val::Px(STACK_GAP),
            ..default()
        },
        BackgroundColor(palettes::PAGE_BACKGROUND),
        children![
            (
                Text::new(prompt.question.clone()),
                TextFont {
                    font_size: QUESTION_FONT_SIZE,
                    ..default()
                },
                TextColor(palettes::TEXT),
            ),
            (
                Node {
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(BUTTON_GAP),
                    ..default()
                },
                children![
                    prompt_button(YesButton, &prompt.yes_label, palettes::YES),
                    prompt_button(EvadingButton, &prompt.no_label, palettes::NO),
                ],
            ),
        ],
    ));
}

/// A labelled button. `UiTransform` moves it visually without touching layout.
fn prompt_button<M: Component>(
    marker: M,
    label: &str,
    palette: ButtonPalette,
) -> impl Bundle + use<M> {
    (
        Button,
        marker,
        palette,
        Node {
            padding: UiRect::axes(Val::Px(36.0), Val::Px(14.0)),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(palette.idle),
        UiTransform::default(),
        children![(
            Text::new(label.to_owned()),
            TextFont {
                font_size: LABEL_FONT_SIZE,
                ..default()
            },
            TextColor(palettes::LABEL),
        )],
    )
}
