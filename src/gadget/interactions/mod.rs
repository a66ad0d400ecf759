pub mod activate;
pub mod evade;
pub mod hover;

pub use activate::activate_yes_button;
pub use evade::evade_pointer;
pub use hover::tint_buttons;
