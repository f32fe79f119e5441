//! Desktop shell state: windows, desktop items, dock, assistant panel, and pointer interaction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    apps::AppCatalog, conversation::ConversationLog, desktop_items::DesktopItemLayout,
    dock::DockState, gesture::ClickTracker,
};

pub const DEFAULT_WINDOW_WIDTH: i32 = 640;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 420;
/// Time a first icon click waits for its partner before being discarded.
pub const DOUBLE_CLICK_WINDOW_MS: u32 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

/// Catalog identifier of an application, for example `notes-app`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesktopItemId(String);

impl DesktopItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DesktopItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn at(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 48,
            y: 48,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Top-left corner of a desktop item inside the desktop container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

/// Lifecycle variant of a managed window. Focus is tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// What a window shows: a catalog app or the contents of a desktop folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowContent {
    App(AppId),
    Folder(DesktopItemId),
}

impl WindowContent {
    pub fn app_id(&self) -> Option<&AppId> {
        match self {
            Self::App(app_id) => Some(app_id),
            Self::Folder(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub content: WindowContent,
    pub title: String,
    pub rect: WindowRect,
    /// Geometry to return to when leaving the maximized state.
    pub restore_rect: Option<WindowRect>,
    pub z_index: u32,
    pub state: WindowState,
    pub is_focused: bool,
}

impl WindowRecord {
    pub fn is_minimized(&self) -> bool {
        self.state == WindowState::Minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.state == WindowState::Maximized
    }

    /// Only windows in the normal state follow title-bar drags.
    pub fn is_draggable(&self) -> bool {
        self.state == WindowState::Normal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandCenterState {
    pub open: bool,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssistantPanelState {
    pub open: bool,
    /// Assistant requests that have not produced a chat entry yet.
    pub in_flight: u32,
}

impl AssistantPanelState {
    pub fn typing_indicator_visible(&self) -> bool {
        self.in_flight > 0
    }

    /// The submit control is disabled while a reply is pending. This is a UI hint only; the
    /// reducer still accepts overlapping submissions.
    pub fn submit_enabled(&self) -> bool {
        self.in_flight == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub next_window_id: u64,
    pub windows: Vec<WindowRecord>,
    pub catalog: AppCatalog,
    pub desktop_items: DesktopItemLayout,
    pub dock: DockState,
    pub conversation: ConversationLog,
    pub assistant_panel: AssistantPanelState,
    pub command_center: CommandCenterState,
    pub theme: Theme,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::with_catalog(AppCatalog::default(), DesktopItemLayout::default(), Vec::new())
    }
}

impl DesktopState {
    /// Builds the initial session state from the app catalog and seeded desktop layout.
    pub fn with_catalog(
        catalog: AppCatalog,
        desktop_items: DesktopItemLayout,
        pinned: Vec<AppId>,
    ) -> Self {
        Self {
            next_window_id: 1,
            windows: Vec::new(),
            catalog,
            desktop_items,
            dock: DockState::new(pinned),
            conversation: ConversationLog::default(),
            assistant_panel: AssistantPanelState::default(),
            command_center: CommandCenterState::default(),
            theme: Theme::default(),
        }
    }

    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// Returns the window a dock click for `app_id` acts on: the focused one, else the topmost.
    pub fn preferred_window_for_app(&self, app_id: &AppId) -> Option<WindowId> {
        let mut topmost: Option<&WindowRecord> = None;
        for window in self
            .windows
            .iter()
            .filter(|w| w.content.app_id() == Some(app_id))
        {
            if window.is_focused {
                return Some(window.id);
            }
            if topmost.map_or(true, |top| window.z_index > top.z_index) {
                topmost = Some(window);
            }
        }
        topmost.map(|w| w.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenWindowRequest {
    pub content: WindowContent,
    pub title: String,
    pub rect: Option<WindowRect>,
}

/// Geometry the DOM adapter reports with every pointer-down: the desktop container's client
/// size and the rendered size of one desktop icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDragBounds {
    pub container: Size,
    pub item: Size,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragTarget {
    Window(WindowId),
    Icon(DesktopItemId),
}

/// Pointer position relative to the dragged element's top-left corner at drag start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerOffset {
    pub dx: i32,
    pub dy: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub target: DragTarget,
    pub pointer_offset: PointerOffset,
    pub bounds: IconDragBounds,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub clicks: ClickTracker,
    /// Text selection is suppressed while a drag is in progress.
    pub selection_suppressed: bool,
}
