use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::CursorMoved;

use crate::evasion::PointerSample;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PointerMoved>()
            .add_systems(PreUpdate, collect_pointer_moves);
    }
}

#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct PointerMoved {
    /// Viewport (logical) coordinates: pixels from top-left
    pub position: Vec2,
}

impl From<&PointerMoved> for PointerSample {
    fn from(ev: &PointerMoved) -> Self {
        PointerSample::from(ev.position)
    }
}

fn touch_moves(phase: TouchPhase) -> bool {
    matches!(phase, TouchPhase::Started | TouchPhase::Moved)
}

fn collect_pointer_moves(
    mut ev_cursor: MessageReader<CursorMoved>,
    mut touch_events: MessageReader<TouchInput>,
    mut out: MessageWriter<PointerMoved>,
) {
    for e in ev_cursor.read() {
        out.write(PointerMoved {
            position: e.position,
        });
    }

    for ev in touch_events.read() {
        if touch_moves(ev.phase) {
            out.write(PointerMoved {
                position: ev.position,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;

    fn app() -> App {
        let mut app = App::new();
        app.add_message::<CursorMoved>()
            .add_message::<TouchInput>()
            .add_plugins(InputPlugin);
        app
    }

    fn moved(app: &App) -> Vec<Vec2> {
        let messages = app.world().resource::<Messages<PointerMoved>>();
        let mut cursor = messages.get_cursor();
        cursor.read(messages).map(|ev| ev.position).collect()
    }

    fn touch(phase: TouchPhase, x: f32, y: f32) -> TouchInput {
        TouchInput {
            phase,
            position: Vec2::new(x, y),
            window: Entity::PLACEHOLDER,
            force: None,
            id: 0,
        }
    }

    #[test]
    fn test_touch_phases() {
        assert!(touch_moves(TouchPhase::Started));
        assert!(touch_moves(TouchPhase::Moved));
        assert!(!touch_moves(TouchPhase::Ended));
        assert!(!touch_moves(TouchPhase::Canceled));
    }

    #[test]
    fn test_sample_from_message() {
        let ev = PointerMoved {
            position: Vec2::new(12.0, 34.0),
        };
        assert_eq!(PointerSample::from(&ev), PointerSample::new(12.0, 34.0));
    }

    #[test]
    fn test_cursor_moves_become_samples_in_order() {
        let mut app = app();
        for (x, y) in [(10.0, 20.0), (30.0, 40.0)] {
            app.world_mut().write_message(CursorMoved {
                window: Entity::PLACEHOLDER,
                position: Vec2::new(x, y),
                delta: None,
            });
        }
        app.update();

        assert_eq!(moved(&app), vec![Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0)]);
    }

    #[test]
    fn test_touch_start_and_move_become_samples() {
        let mut app = app();
        app.world_mut().write_message(touch(TouchPhase::Started, 1.0, 2.0));
        app.world_mut().write_message(touch(TouchPhase::Moved, 3.0, 4.0));
        app.world_mut().write_message(touch(TouchPhase::Ended, 5.0, 6.0));
        app.world_mut().write_message(touch(TouchPhase::Canceled, 7.0, 8.0));
        app.update();

        assert_eq!(moved(&app), vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
    }
}
