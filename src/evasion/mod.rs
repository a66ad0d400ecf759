mod evader;
mod geometry;
mod params;
mod repulsion;
mod throttle;

pub use evader::{EvasionOutcome, Evader};
pub use geometry::{ElementBounds, PointerSample, Viewport};
pub use params::{EvasionParams, presets};
pub use repulsion::{EvasionState, Repulsion, next_offset};
pub use throttle::MinIntervalGate;
