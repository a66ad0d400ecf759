// evasion/params.rs

use std::time::Duration;

use bevy::prelude::Resource;
use serde::Deserialize;

use crate::config::ConfigError;

pub mod presets {
    use super::EvasionParams;

    /// The classic feel: noticeable shove up close, gone at 200px
    pub const CLASSIC: EvasionParams = EvasionParams {
        activation_radius: 200.0,
        falloff_divisor: 2.0,
        max_offset_fraction: 0.3,
        throttle_ms: 16,
    };
}

/// Tunables for the evading button
#[derive(Resource, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct EvasionParams {
    /// Pointer must be closer than this (px) for the button to react
    pub activation_radius: f32,
    /// Move distance is (radius - distance) / divisor
    pub falloff_divisor: f32,
    /// Offset bound as a fraction of the smaller viewport side
    pub max_offset_fraction: f32,
    /// Minimum interval between processed pointer samples
    pub throttle_ms: u64,
}

impl Default for EvasionParams {
    fn default() -> Self {
        presets::CLASSIC
    }
}

impl EvasionParams {
    pub fn throttle_interval(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.activation_radius > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "activation_radius",
                reason: "must be positive",
            });
        }
        if !(self.falloff_divisor > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "falloff_divisor",
                reason: "must be positive",
            });
        }
        if !(self.max_offset_fraction > 0.0 && self.max_offset_fraction <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "max_offset_fraction",
                reason: "must be in (0, 1]",
            });
        }
        Ok(())
    }
}
