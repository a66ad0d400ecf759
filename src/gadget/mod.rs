pub mod components;
pub mod interactions;
pub mod plugin;
pub mod setup;
