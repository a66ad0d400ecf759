pub mod prompt;
pub mod success;
pub mod teardown;

pub use prompt::{init_evader, spawn_prompt};
pub use success::spawn_success;
pub use teardown::despawn_screen;
