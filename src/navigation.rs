// navigation.rs

use bevy::prelude::*;
use serde::Deserialize;

use crate::config::ConfigError;

pub struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<Screen>()
            .add_message::<NavigationRequest>()
            .add_systems(Update, follow_navigation);
    }
}

/// Which screen is up. On the web only `Prompt` is ever used, since
/// navigation leaves the page.
#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Prompt,
    Success,
}

#[derive(Resource, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Relative URL of the success page
    pub destination: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            destination: "yay.html".into(),
        }
    }
}

impl NavigationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.destination.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "destination",
                reason: "must not be empty",
            });
        }
        Ok(())
    }
}

#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target: String,
}

/// System: Leave the page for the requested target
#[cfg(target_arch = "wasm32")]
pub fn follow_navigation(mut requests: MessageReader<NavigationRequest>) {
    for request in requests.read() {
        info!("Navigating to {}", request.target);

        let Some(window) = web_sys::window() else {
            warn!("No browser window to navigate");
            continue;
        };
        if let Err(err) = window.location().set_href(&request.target) {
            warn!("Navigation to {} failed: {:?}", request.target, err);
        }
    }
}

/// System: No page to leave on desktop, so swap to the success screen instead
#[cfg(not(target_arch = "wasm32"))]
pub fn follow_navigation(
    mut requests: MessageReader<NavigationRequest>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    for request in requests.read() {
        info!("Navigating to {} (showing success screen)", request.target);
        next_screen.set(Screen::Success);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    #[test]
    fn test_request_switches_to_success_screen() {
        let mut app = App::new();
        app.add_plugins(StatesPlugin).add_plugins(NavigationPlugin);
        app.update();
        assert_eq!(*app.world().resource::<State<Screen>>().get(), Screen::Prompt);

        app.world_mut().write_message(NavigationRequest {
            target: "yay.html".into(),
        });
        app.update();
        app.update();

        assert_eq!(*app.world().resource::<State<Screen>>().get(), Screen::Success);
    }

    #[test]
    fn test_default_destination() {
        let config = NavigationConfig::default();
        assert_eq!(config.destination, "yay.html");
        assert!(config.validate().is_ok());
    }
}
