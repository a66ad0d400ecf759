use bevy::prelude::*;

use crate::{
    gadget::components::YesButton,
    navigation::{NavigationConfig, NavigationRequest},
};

/// System: Pressing "Yes" always navigates to the success destination
pub fn activate_yes_button(
    buttons: Query<&Interaction, (Changed<Interaction>, With<YesButton>)>,
    navigation: Res<NavigationConfig>,
    mut requests: MessageWriter<NavigationRequest>,
) {
    for interaction in &buttons {
        if *interaction == Interaction::Pressed {
            info!("Yes pressed");
            requests.write(NavigationRequest {
                target: navigation.destination.clone(),
            });
        }
    }
}
