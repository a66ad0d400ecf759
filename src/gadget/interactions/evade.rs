use bevy::prelude::*;
use bevy::ui::{ComputedNode, UiGlobalTransform, UiTransform, Val2};

use crate::{
    camera::ViewportSize,
    evasion::{ElementBounds, EvasionOutcome, Evader},
    gadget::components::EvadingButton,
    input::PointerMoved,
};

/// Bounding box of a UI node in logical viewport pixels, as layout sees it now
/// (so it already includes any translation applied on earlier frames).
fn live_bounds(node: &ComputedNode, transform: &UiGlobalTransform) -> ElementBounds {
    let scale = node.inverse_scale_factor();
    ElementBounds::from_center_size(transform.translation * scale, node.size() * scale)
}

/// System: Push the "No" button away from the pointer
pub fn evade_pointer(
    mut pointer_moves: MessageReader<PointerMoved>,
    time: Res<Time<Real>>,
    viewport: Res<ViewportSize>,
    mut evader: ResMut<Evader>,
    mut buttons: Query<
        (&ComputedNode, &UiGlobalTransform, &mut UiTransform),
        With<EvadingButton>,
    >,
) {
    let Ok((node, global, mut ui_transform)) = buttons.single_mut() else {
        pointer_moves.clear();
        return;
    };
    // Layout hasn't run yet
    if node.size() == Vec2::ZERO {
        pointer_moves.clear();
        return;
    }

    // One timestamp per frame, so the gate lets at most one sample through
    // and layout has caught up with the previous move by then.
    let now = time.elapsed();
    let bounds = live_bounds(node, global);

    for event in pointer_moves.read() {
        match evader.handle(event.into(), bounds, viewport.0, now) {
            EvasionOutcome::Moved { step, offset } => {
                ui_transform.translation = Val2::px(offset.x, offset.y);
                debug!(
                    "No button dodged by ({:.1}, {:.1}) to ({:.1}, {:.1})",
                    step.x, step.y, offset.x, offset.y
                );
            }
            EvasionOutcome::Idle | EvasionOutcome::Throttled => {}
        }
    }
}
