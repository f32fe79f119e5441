//! Pointer gesture classification for desktop icons and windows.
//!
//! The DOM adapter reports every interactive ancestor of a pointer-down target as a
//! [`HitRegion`]; [`classify_pointer_down`] picks the one the shell acts on. Icon clicks are
//! paired into double-clicks by [`ClickTracker`], driven by a timer token rather than wall-clock
//! reads so the reducer stays deterministic.

use crate::model::{DesktopItemId, WindowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowControl {
    Close,
    Minimize,
    Maximize,
}

/// One interactive element found between the event target and the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitRegion {
    DesktopIcon(DesktopItemId),
    WindowControl(WindowId, WindowControl),
    TitleBar(WindowId),
    WindowBody(WindowId),
    Background,
}

impl HitRegion {
    fn priority(&self) -> u8 {
        match self {
            Self::DesktopIcon(_) => 0,
            Self::WindowControl(..) => 1,
            Self::TitleBar(_) => 2,
            Self::WindowBody(_) => 3,
            Self::Background => 4,
        }
    }
}

/// What a pointer-down means once its hit regions are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerDownGesture {
    /// Starts an icon drag and counts toward a double-click.
    IconPress(DesktopItemId),
    /// Focuses the window, then runs the control.
    WindowControl(WindowId, WindowControl),
    /// Focuses the window and starts a window drag when it is in the normal state.
    TitleBarPress(WindowId),
    /// Focuses the window.
    WindowBodyPress(WindowId),
    BackgroundPress,
}

/// Resolves a pointer-down. Priority: desktop icon, window control, title bar, window body,
/// background. Among regions of equal priority the one nearest the target wins.
pub fn classify_pointer_down(hits: &[HitRegion]) -> PointerDownGesture {
    let winner = hits
        .iter()
        .enumerate()
        .min_by_key(|(depth, hit)| (hit.priority(), *depth))
        .map(|(_, hit)| hit);

    match winner {
        Some(HitRegion::DesktopIcon(item_id)) => PointerDownGesture::IconPress(item_id.clone()),
        Some(HitRegion::WindowControl(window_id, control)) => {
            PointerDownGesture::WindowControl(*window_id, *control)
        }
        Some(HitRegion::TitleBar(window_id)) => PointerDownGesture::TitleBarPress(*window_id),
        Some(HitRegion::WindowBody(window_id)) => PointerDownGesture::WindowBodyPress(*window_id),
        Some(HitRegion::Background) | None => PointerDownGesture::BackgroundPress,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingClick {
    pub item_id: DesktopItemId,
    pub token: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// First click recorded; the caller must schedule a timeout carrying `token`.
    Pending { token: u64 },
    /// Second click on the same item before the timeout fired.
    DoubleClick(DesktopItemId),
}

/// Pairs icon clicks into double-clicks. A lone click is discarded when its timeout fires.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClickTracker {
    pending: Option<PendingClick>,
    next_token: u64,
}

impl ClickTracker {
    pub fn pending(&self) -> Option<&PendingClick> {
        self.pending.as_ref()
    }

    pub fn register_click(&mut self, item_id: &DesktopItemId) -> ClickOutcome {
        if let Some(pending) = self.pending.take() {
            if &pending.item_id == item_id {
                return ClickOutcome::DoubleClick(pending.item_id);
            }
        }

        self.next_token = self.next_token.wrapping_add(1);
        let token = self.next_token;
        self.pending = Some(PendingClick {
            item_id: item_id.clone(),
            token,
        });
        ClickOutcome::Pending { token }
    }

    /// Handles a fired timer. Returns `true` when it discarded the pending click; stale tokens
    /// from superseded clicks are ignored.
    pub fn expire(&mut self, token: u64) -> bool {
        match &self.pending {
            Some(pending) if pending.token == token => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn icon(id: &str) -> DesktopItemId {
        DesktopItemId::new(id)
    }

    #[test]
    fn icon_beats_every_window_region() {
        let hits = vec![
            HitRegion::WindowBody(WindowId(1)),
            HitRegion::DesktopIcon(icon("trash")),
            HitRegion::Background,
        ];
        assert_eq!(
            classify_pointer_down(&hits),
            PointerDownGesture::IconPress(icon("trash"))
        );
    }

    #[test]
    fn control_beats_title_bar_and_title_bar_beats_body() {
        let hits = vec![
            HitRegion::WindowControl(WindowId(3), WindowControl::Close),
            HitRegion::TitleBar(WindowId(3)),
            HitRegion::WindowBody(WindowId(3)),
            HitRegion::Background,
        ];
        assert_eq!(
            classify_pointer_down(&hits),
            PointerDownGesture::WindowControl(WindowId(3), WindowControl::Close)
        );
        assert_eq!(
            classify_pointer_down(&hits[1..]),
            PointerDownGesture::TitleBarPress(WindowId(3))
        );
        assert_eq!(
            classify_pointer_down(&hits[2..]),
            PointerDownGesture::WindowBodyPress(WindowId(3))
        );
    }

    #[test]
    fn empty_chain_is_background() {
        assert_eq!(classify_pointer_down(&[]), PointerDownGesture::BackgroundPress);
    }

    #[test]
    fn nearest_region_wins_among_equal_priority() {
        let hits = vec![
            HitRegion::WindowBody(WindowId(7)),
            HitRegion::WindowBody(WindowId(2)),
        ];
        assert_eq!(
            classify_pointer_down(&hits),
            PointerDownGesture::WindowBodyPress(WindowId(7))
        );
    }

    #[test]
    fn second_click_on_same_icon_is_a_double_click() {
        let mut clicks = ClickTracker::default();
        assert!(matches!(
            clicks.register_click(&icon("a")),
            ClickOutcome::Pending { .. }
        ));
        assert_eq!(
            clicks.register_click(&icon("a")),
            ClickOutcome::DoubleClick(icon("a"))
        );
        assert_eq!(clicks.pending(), None);
    }

    #[test]
    fn timeout_discards_single_click() {
        let mut clicks = ClickTracker::default();
        let ClickOutcome::Pending { token } = clicks.register_click(&icon("a")) else {
            panic!("expected pending click");
        };
        assert!(clicks.expire(token));
        assert!(matches!(
            clicks.register_click(&icon("a")),
            ClickOutcome::Pending { .. }
        ));
    }

    #[test]
    fn click_on_other_icon_restarts_pairing_and_old_timer_is_stale() {
        let mut clicks = ClickTracker::default();
        let ClickOutcome::Pending { token: first } = clicks.register_click(&icon("a")) else {
            panic!("expected pending click");
        };
        let ClickOutcome::Pending { token: second } = clicks.register_click(&icon("b")) else {
            panic!("expected pending click");
        };

        assert!(!clicks.expire(first));
        assert_eq!(clicks.pending().map(|p| p.token), Some(second));
    }
}
