// evasion/repulsion.rs

use bevy::math::Vec2;

use super::{EvasionParams, PointerSample, Viewport};

/// Accumulated displacement of the evading element from its layout position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EvasionState {
    pub offset_x: f32,
    pub offset_y: f32,
}

impl EvasionState {
    pub const ORIGIN: EvasionState = EvasionState {
        offset_x: 0.0,
        offset_y: 0.0,
    };

    pub fn new(offset_x: f32, offset_y: f32) -> Self {
        Self { offset_x, offset_y }
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }
}

impl From<Vec2> for EvasionState {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Result of evaluating one pointer sample against the element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Repulsion {
    /// Pointer at or beyond the activation radius
    OutOfRange,
    /// Pointer exactly on the element center; no direction to flee in
    Degenerate,
    /// Element pushed away: `step` is the raw move, `next` the clamped state
    Pushed { step: Vec2, next: EvasionState },
}

impl Repulsion {
    /// The state after this sample (unchanged unless pushed)
    pub fn resolve(self, current: EvasionState) -> EvasionState {
        match self {
            Repulsion::Pushed { next, .. } => next,
            Repulsion::OutOfRange | Repulsion::Degenerate => current,
        }
    }
}

/// Compute where the element goes after one pointer sample.
///
/// The push is linear in distance: `(radius - d) / divisor`, pointing from the
/// pointer through the element center. It is added to the current offset and
/// each axis is then clamped to `max_offset_fraction * min(vw, vh)` for the
/// viewport as it is right now.
pub fn next_offset(
    state: EvasionState,
    pointer: PointerSample,
    center: Vec2,
    viewport: Viewport,
    params: &EvasionParams,
) -> Repulsion {
    let delta = pointer.position() - center;
    let distance = delta.length();

    if distance == 0.0 {
        return Repulsion::Degenerate;
    }
    // NaN compares false here, so garbage input never moves the element
    if !(distance < params.activation_radius) {
        return Repulsion::OutOfRange;
    }

    let move_distance = (params.activation_radius - distance) / params.falloff_divisor;
    let step = Vec2::new(
        (-delta.x / distance) * move_distance,
        (-delta.y / distance) * move_distance,
    );

    let max_offset = viewport.max_offset(params.max_offset_fraction);
    let bound = Vec2::splat(max_offset);
    let next = (state.offset() + step).clamp(-bound, bound);

    Repulsion::Pushed {
        step,
        next: next.into(),
    }
}
