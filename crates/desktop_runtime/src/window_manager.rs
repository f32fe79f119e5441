//! Window state machine helpers used by the desktop reducer.
//!
//! `state.windows` is kept in stacking order (last = topmost) and `z_index` mirrors the position.
//! None of these helpers picks a replacement focus: closing or minimizing the focused window
//! leaves the desktop without a focused window.

use crate::model::{
    DesktopState, OpenWindowRequest, WindowId, WindowRecord, WindowRect, WindowState,
};

/// Offset between successive default window placements.
pub const CASCADE_STEP: i32 = 28;
const CASCADE_SLOTS: i32 = 8;

/// Opens a new normal, focused, topmost window and returns its id.
pub fn open_window(state: &mut DesktopState, request: OpenWindowRequest) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);

    let rect = request.rect.unwrap_or_else(|| cascade_rect(state.windows.len()));
    for window in &mut state.windows {
        window.is_focused = false;
    }
    state.windows.push(WindowRecord {
        id,
        content: request.content,
        title: request.title,
        rect,
        restore_rect: None,
        z_index: 0,
        state: WindowState::Normal,
        is_focused: true,
    });
    normalize_window_stack(state);
    id
}

fn cascade_rect(open_windows: usize) -> WindowRect {
    let slot = (open_windows as i32) % CASCADE_SLOTS;
    let base = WindowRect::default();
    base.at(base.x + slot * CASCADE_STEP, base.y + slot * CASCADE_STEP)
}

/// Focuses and raises `window_id`.
///
/// Minimized windows cannot take focus; use [`restore_window`]. Returns `true` when the stack or
/// focus changed.
pub fn focus_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(index) = state.windows.iter().position(|w| w.id == window_id) else {
        return false;
    };
    if state.windows[index].is_minimized() {
        return false;
    }

    let already_focused_top = index + 1 == state.windows.len() && state.windows[index].is_focused;
    if already_focused_top {
        return false;
    }

    for window in &mut state.windows {
        window.is_focused = false;
    }
    let mut window = state.windows.remove(index);
    window.is_focused = true;
    state.windows.push(window);
    normalize_window_stack(state);
    true
}

pub fn minimize_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) else {
        return false;
    };
    if window.is_minimized() {
        return false;
    }
    window.state = WindowState::Minimized;
    window.is_focused = false;
    true
}

/// Flips between normal and maximized. Maximizing stashes the current rect and fills
/// `viewport`; leaving maximized puts the stashed rect back.
pub fn toggle_maximize_window(
    state: &mut DesktopState,
    window_id: WindowId,
    viewport: WindowRect,
) -> bool {
    let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) else {
        return false;
    };
    match window.state {
        WindowState::Normal => {
            window.restore_rect = Some(window.rect);
            window.rect = viewport;
            window.state = WindowState::Maximized;
        }
        WindowState::Maximized => {
            if let Some(rect) = window.restore_rect.take() {
                window.rect = rect;
            }
            window.state = WindowState::Normal;
        }
        WindowState::Minimized => return false,
    }
    true
}

/// Brings a minimized window back to normal and focuses it.
pub fn restore_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) else {
        return false;
    };
    if !window.is_minimized() {
        return false;
    }
    window.state = WindowState::Normal;
    if let Some(rect) = window.restore_rect.take() {
        window.rect = rect;
    }
    focus_window(state, window_id);
    true
}

pub fn close_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let before = state.windows.len();
    state.windows.retain(|w| w.id != window_id);
    if state.windows.len() == before {
        return false;
    }
    normalize_window_stack(state);
    true
}

/// Moves a normal window's top-left corner. Positions are not clamped.
pub fn move_window(state: &mut DesktopState, window_id: WindowId, x: i32, y: i32) -> bool {
    let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) else {
        return false;
    };
    if !window.is_draggable() || (window.rect.x == x && window.rect.y == y) {
        return false;
    }
    window.rect = window.rect.at(x, y);
    true
}

/// Renumbers `z_index` from stack order and enforces the focus invariants: minimized windows
/// are never focused and at most one window is.
pub fn normalize_window_stack(state: &mut DesktopState) {
    let mut has_focused = false;
    for (idx, window) in state.windows.iter_mut().enumerate() {
        window.z_index = (idx + 1) as u32;
        if window.is_minimized() {
            window.is_focused = false;
        }
        if window.is_focused {
            if has_focused {
                window.is_focused = false;
            } else {
                has_focused = true;
            }
        }
    }
}
