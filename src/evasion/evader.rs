// evasion/evader.rs

use std::time::Duration;

use bevy::math::Vec2;
use bevy::prelude::Resource;

use super::{
    ElementBounds, EvasionParams, EvasionState, MinIntervalGate, PointerSample, Repulsion,
    Viewport, next_offset,
};

/// What happened to a pointer sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvasionOutcome {
    /// Arrived inside the throttle window and was dropped
    Throttled,
    /// Accepted, but the pointer was out of range (or dead center)
    Idle,
    /// Accepted and the element moved by `step`, ending up at `offset`
    Moved { step: Vec2, offset: Vec2 },
}

/// Owns the evading element's accumulated offset and its sample gate.
/// One per evading element, lives for the whole app.
#[derive(Resource, Debug, Clone)]
pub struct Evader {
    state: EvasionState,
    gate: MinIntervalGate,
    params: EvasionParams,
}

impl Evader {
    pub fn new(params: EvasionParams) -> Self {
        Self {
            state: EvasionState::ORIGIN,
            gate: MinIntervalGate::new(params.throttle_interval()),
            params,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> EvasionState {
        self.state
    }

    /// Process one pointer sample.
    ///
    /// `bounds` must be the element's live bounding box (including the offset
    /// applied so far) and `viewport` the current window size.
    pub fn handle(
        &mut self,
        sample: PointerSample,
        bounds: ElementBounds,
        viewport: Viewport,
        now: Duration,
    ) -> EvasionOutcome {
        if !self.gate.try_accept(now) {
            return EvasionOutcome::Throttled;
        }

        let repulsion = next_offset(self.state, sample, bounds.center(), viewport, &self.params);
        self.state = repulsion.resolve(self.state);

        match repulsion {
            Repulsion::Pushed { step, next } => EvasionOutcome::Moved {
                step,
                offset: next.offset(),
            },
            Repulsion::OutOfRange | Repulsion::Degenerate => EvasionOutcome::Idle,
        }
    }
}

impl Default for Evader {
    fn default() -> Self {
        Self::new(EvasionParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn bounds() -> ElementBounds {
        // Centered on (500, 400)
        ElementBounds::new(450.0, 380.0, 100.0, 40.0)
    }

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 800.0)
    }

    #[test]
    fn test_moves_on_close_sample() {
        let mut evader = Evader::default();
        let outcome = evader.handle(PointerSample::new(550.0, 400.0), bounds(), viewport(), ms(0));

        assert_eq!(
            outcome,
            EvasionOutcome::Moved {
                step: Vec2::new(-75.0, 0.0),
                offset: Vec2::new(-75.0, 0.0),
            }
        );
        assert_eq!(evader.state(), EvasionState::new(-75.0, 0.0));
    }

    #[test]
    fn test_throttled_sample_changes_nothing() {
        let mut evader = Evader::default();
        evader.handle(PointerSample::new(550.0, 400.0), bounds(), viewport(), ms(0));
        let before = evader.state();

        let outcome = evader.handle(PointerSample::new(510.0, 400.0), bounds(), viewport(), ms(10));
        assert_eq!(outcome, EvasionOutcome::Throttled);
        assert_eq!(evader.state(), before);
    }

    #[test]
    fn test_far_sample_is_idle_but_consumes_window() {
        let mut evader = Evader::default();
        let far = PointerSample::new(900.0, 100.0);
        let near = PointerSample::new(550.0, 400.0);

        assert_eq!(evader.handle(far, bounds(), viewport(), ms(0)), EvasionOutcome::Idle);
        assert_eq!(evader.handle(near, bounds(), viewport(), ms(8)), EvasionOutcome::Throttled);
        assert_eq!(evader.state(), EvasionState::ORIGIN);

        assert!(matches!(
            evader.handle(near, bounds(), viewport(), ms(20)),
            EvasionOutcome::Moved { .. }
        ));
    }

    #[test]
    fn test_center_hit_is_idle() {
        let mut evader = Evader::default();
        let outcome = evader.handle(PointerSample::new(500.0, 400.0), bounds(), viewport(), ms(0));
        assert_eq!(outcome, EvasionOutcome::Idle);
        assert_eq!(evader.state(), EvasionState::ORIGIN);
    }

    #[test]
    fn test_follows_moving_element() {
        let mut evader = Evader::default();
        let pointer = PointerSample::new(550.0, 400.0);
        evader.handle(pointer, bounds(), viewport(), ms(0));

        // Layout now reports the element shifted by the applied offset
        let shifted = ElementBounds::new(375.0, 380.0, 100.0, 40.0);
        let outcome = evader.handle(pointer, shifted, viewport(), ms(20));

        // distance 125 -> move 37.5 to the left
        assert_eq!(
            outcome,
            EvasionOutcome::Moved {
                step: Vec2::new(-37.5, 0.0),
                offset: Vec2::new(-112.5, 0.0),
            }
        );
    }
}
