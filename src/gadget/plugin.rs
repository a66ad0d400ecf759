use crate::gadget::components::{PromptRoot, SuccessRoot};
use crate::gadget::interactions::{activate_yes_button, evade_pointer, tint_buttons};
use crate::gadget::setup::{despawn_screen, init_evader, spawn_prompt, spawn_success};
use crate::navigation::{Screen, follow_navigation};
use bevy::prelude::*;

pub struct GadgetPlugin;

impl Plugin for GadgetPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (init_evader, spawn_prompt).chain())
            .add_systems(
                Update,
                (
                    // Pointer evasion first so the transform lands before layout
                    evade_pointer,
                    tint_buttons,
                    activate_yes_button,
                )
                    .chain()
                    .run_if(in_state(Screen::Prompt))
                    .before(follow_navigation),
            )
            .add_systems(OnExit(Screen::Prompt), despawn_screen::<PromptRoot>)
            .add_systems(OnEnter(Screen::Success), spawn_success)
            .add_systems(OnExit(Screen::Success), despawn_screen::<SuccessRoot>);
    }
}
