use bevy::prelude::*;
use bevy::window::CursorMoved;

/// Last pointer position in normalised device coordinates.
///
/// Both axes lie in `[-1, 1]`, with +y pointing up.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
}

/// Maps a window-space cursor position (origin top left, y down) to `[-1, 1]^2`.
pub fn normalise_pointer(cursor: Vec2, window_size: Vec2) -> Option<Vec2> {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        cursor.x / window_size.x * 2.0 - 1.0,
        -(cursor.y / window_size.y) * 2.0 + 1.0,
    ))
}

pub fn track_pointer(
    mut cursor_events: EventReader<CursorMoved>,
    windows: Query<&Window>,
    mut pointer: ResMut<PointerState>,
) {
    for event in cursor_events.read() {
        let Ok(window) = windows.get(event.window) else {
            continue;
        };
        if let Some(position) =
            normalise_pointer(event.position, Vec2::new(window.width(), window.height()))
        {
            pointer.position = position;
        }
    }
}
