//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::{
    assistant::AssistantError,
    command_router::{CommandRouter, RouteOutcome},
    conversation::Sender,
    desktop_items::DesktopItemKind,
    gesture::{classify_pointer_down, ClickOutcome, HitRegion, PointerDownGesture, WindowControl},
    model::{
        AppId, DesktopItemId, DesktopState, DragSession, DragTarget, IconDragBounds,
        InteractionState, ItemPosition, OpenWindowRequest, PointerOffset, PointerPosition,
        WindowContent, WindowId, WindowRect, DOUBLE_CLICK_WINDOW_MS,
    },
    window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a new window using the supplied request.
    OpenWindow(OpenWindowRequest),
    /// Open a new window for a catalog app.
    LaunchApp { app_id: AppId },
    CloseWindow { window_id: WindowId },
    /// Focus (and raise) a window. Ignored for minimized windows.
    FocusWindow { window_id: WindowId },
    MinimizeWindow { window_id: WindowId },
    /// Maximize a normal window into `viewport`, or return a maximized one to its old rect.
    ToggleMaximizeWindow {
        window_id: WindowId,
        viewport: WindowRect,
    },
    /// Bring a minimized window back and focus it.
    RestoreWindow { window_id: WindowId },
    /// Dock icon click: launch, restore, minimize, or focus depending on the app's windows.
    DockItemClicked { app_id: AppId },
    /// Pointer-down anywhere on the desktop surface.
    PointerDown {
        /// Interactive regions from the event target outward.
        hits: Vec<HitRegion>,
        pointer: PointerPosition,
        /// Desktop container and icon size used to clamp icon drags.
        bounds: IconDragBounds,
        /// Area a window fills when its maximize control is pressed.
        viewport: WindowRect,
    },
    PointerMove { pointer: PointerPosition },
    PointerUp,
    /// The double-click timer for a pending icon click fired.
    ClickTimeout { token: u64 },
    /// Context-menu "New Folder".
    CreateFolder {
        position: ItemPosition,
        bounds: IconDragBounds,
    },
    ToggleTheme,
    OpenCommandCenter,
    CloseCommandCenter,
    SetCommandCenterQuery { query: String },
    /// Route the command-center query as if it were typed into the assistant panel.
    SubmitCommandCenter,
    ToggleAssistantPanel,
    /// Closes the command center and the assistant panel.
    Escape,
    /// Text submitted from the assistant panel input.
    SubmitText { text: String },
    /// Completion of a `RequestAssistantReply` effect. Every request produces exactly one.
    AssistantReplyReceived {
        result: Result<String, AssistantError>,
    },
    /// Abort every assistant request still in flight.
    CancelAssistantRequests,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host to execute in order.
pub enum RuntimeEffect {
    /// Open an app URL in a new browsing context.
    OpenExternalUrl(String),
    /// Hand a desktop item's final position to the persistence service.
    PersistDesktopItemPosition {
        item_id: DesktopItemId,
        position: ItemPosition,
    },
    /// Dispatch [`DesktopAction::ClickTimeout`] with `token` after `delay_ms`.
    ScheduleClickTimeout { token: u64, delay_ms: u32 },
    /// Ask the assistant service and dispatch [`DesktopAction::AssistantReplyReceived`].
    RequestAssistantReply { prompt: String },
    CancelAssistantRequests,
    ScrollConversationToLatest,
    SetSelectionSuppressed(bool),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference missing entities.
pub enum ReducerError {
    #[error("window not found")]
    WindowNotFound,
    #[error("app `{0}` is not in the catalog")]
    UnknownApp(AppId),
    #[error("desktop item `{0}` not found")]
    UnknownDesktopItem(DesktopItemId),
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// # Errors
///
/// Returns a [`ReducerError`] when an action references a window, app, or desktop item that does
/// not exist. The caller discards the partially applied state in that case.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(request) => {
            window_manager::open_window(state, request);
        }
        DesktopAction::LaunchApp { app_id } => {
            launch_app(state, &app_id)?;
        }
        DesktopAction::CloseWindow { window_id } => {
            if !window_manager::close_window(state, window_id) {
                return Err(ReducerError::WindowNotFound);
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            ensure_window(state, window_id)?;
            window_manager::focus_window(state, window_id);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            ensure_window(state, window_id)?;
            window_manager::minimize_window(state, window_id);
        }
        DesktopAction::ToggleMaximizeWindow {
            window_id,
            viewport,
        } => {
            ensure_window(state, window_id)?;
            window_manager::toggle_maximize_window(state, window_id, viewport);
        }
        DesktopAction::RestoreWindow { window_id } => {
            ensure_window(state, window_id)?;
            window_manager::restore_window(state, window_id);
        }
        DesktopAction::DockItemClicked { app_id } => dock_item_clicked(state, &app_id)?,
        DesktopAction::PointerDown {
            hits,
            pointer,
            bounds,
            viewport,
        } => pointer_down(
            state,
            interaction,
            &hits,
            pointer,
            bounds,
            viewport,
            &mut effects,
        )?,
        DesktopAction::PointerMove { pointer } => pointer_move(state, interaction, pointer),
        DesktopAction::PointerUp => pointer_up(state, interaction, &mut effects),
        DesktopAction::ClickTimeout { token } => {
            interaction.clicks.expire(token);
        }
        DesktopAction::CreateFolder { position, bounds } => {
            let item_id = state
                .desktop_items
                .create_folder(position.x, position.y, bounds);
            if let Some(item) = state.desktop_items.item(&item_id) {
                effects.push(RuntimeEffect::PersistDesktopItemPosition {
                    item_id,
                    position: item.position,
                });
            }
        }
        DesktopAction::ToggleTheme => state.theme = state.theme.toggled(),
        DesktopAction::OpenCommandCenter => {
            state.command_center.open = true;
            state.command_center.query.clear();
        }
        DesktopAction::CloseCommandCenter => close_command_center(state),
        DesktopAction::SetCommandCenterQuery { query } => state.command_center.query = query,
        DesktopAction::SubmitCommandCenter => {
            let query = std::mem::take(&mut state.command_center.query);
            close_command_center(state);
            if submit_text(state, &query, &mut effects) == Some(false) {
                state.assistant_panel.open = true;
            }
        }
        DesktopAction::ToggleAssistantPanel => {
            state.assistant_panel.open = !state.assistant_panel.open;
        }
        DesktopAction::Escape => {
            close_command_center(state);
            state.assistant_panel.open = false;
        }
        DesktopAction::SubmitText { text } => {
            submit_text(state, &text, &mut effects);
        }
        DesktopAction::AssistantReplyReceived { result } => {
            state.assistant_panel.in_flight = state.assistant_panel.in_flight.saturating_sub(1);
            let text = match result {
                Ok(text) => text,
                Err(err) => err.user_message(),
            };
            state.conversation.append(Sender::Ai, text);
            effects.push(RuntimeEffect::ScrollConversationToLatest);
        }
        DesktopAction::CancelAssistantRequests => {
            if state.assistant_panel.in_flight > 0 {
                effects.push(RuntimeEffect::CancelAssistantRequests);
            }
        }
    }

    Ok(effects)
}

fn ensure_window(state: &DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    state
        .window(window_id)
        .map(|_| ())
        .ok_or(ReducerError::WindowNotFound)
}

fn launch_app(state: &mut DesktopState, app_id: &AppId) -> Result<WindowId, ReducerError> {
    let app = state
        .catalog
        .get(app_id)
        .ok_or_else(|| ReducerError::UnknownApp(app_id.clone()))?;
    let request = OpenWindowRequest {
        content: WindowContent::App(app.id.clone()),
        title: app.name.clone(),
        rect: None,
    };
    Ok(window_manager::open_window(state, request))
}

fn open_desktop_item(
    state: &mut DesktopState,
    item_id: &DesktopItemId,
) -> Result<WindowId, ReducerError> {
    let item = state
        .desktop_items
        .item(item_id)
        .ok_or_else(|| ReducerError::UnknownDesktopItem(item_id.clone()))?;
    match &item.kind {
        DesktopItemKind::AppShortcut(app_id) => {
            let app_id = app_id.clone();
            launch_app(state, &app_id)
        }
        DesktopItemKind::Folder => {
            let request = OpenWindowRequest {
                content: WindowContent::Folder(item.id.clone()),
                title: item.label.clone(),
                rect: None,
            };
            Ok(window_manager::open_window(state, request))
        }
    }
}

fn dock_item_clicked(state: &mut DesktopState, app_id: &AppId) -> Result<(), ReducerError> {
    if state.catalog.get(app_id).is_none() {
        return Err(ReducerError::UnknownApp(app_id.clone()));
    }
    let Some(window_id) = state.preferred_window_for_app(app_id) else {
        launch_app(state, app_id)?;
        return Ok(());
    };
    let Some(window) = state.window(window_id) else {
        return Err(ReducerError::WindowNotFound);
    };

    if window.is_minimized() {
        window_manager::restore_window(state, window_id);
    } else if window.is_focused {
        window_manager::minimize_window(state, window_id);
    } else {
        window_manager::focus_window(state, window_id);
    }
    Ok(())
}

fn pointer_down(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    hits: &[HitRegion],
    pointer: PointerPosition,
    bounds: IconDragBounds,
    viewport: WindowRect,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    match classify_pointer_down(hits) {
        PointerDownGesture::IconPress(item_id) => {
            let position = state
                .desktop_items
                .item(&item_id)
                .map(|item| item.position)
                .ok_or_else(|| ReducerError::UnknownDesktopItem(item_id.clone()))?;

            begin_drag(
                interaction,
                DragTarget::Icon(item_id.clone()),
                PointerOffset {
                    dx: pointer.x - position.x,
                    dy: pointer.y - position.y,
                },
                bounds,
                effects,
            );

            match interaction.clicks.register_click(&item_id) {
                ClickOutcome::Pending { token } => {
                    effects.push(RuntimeEffect::ScheduleClickTimeout {
                        token,
                        delay_ms: DOUBLE_CLICK_WINDOW_MS,
                    });
                }
                ClickOutcome::DoubleClick(item_id) => {
                    open_desktop_item(state, &item_id)?;
                }
            }
        }
        PointerDownGesture::WindowControl(window_id, control) => {
            ensure_window(state, window_id)?;
            window_manager::focus_window(state, window_id);
            match control {
                WindowControl::Close => {
                    window_manager::close_window(state, window_id);
                }
                WindowControl::Minimize => {
                    window_manager::minimize_window(state, window_id);
                }
                WindowControl::Maximize => {
                    window_manager::toggle_maximize_window(state, window_id, viewport);
                }
            }
        }
        PointerDownGesture::TitleBarPress(window_id) => {
            ensure_window(state, window_id)?;
            window_manager::focus_window(state, window_id);
            let Some(window) = state.window(window_id) else {
                return Err(ReducerError::WindowNotFound);
            };
            if window.is_draggable() {
                let offset = PointerOffset {
                    dx: pointer.x - window.rect.x,
                    dy: pointer.y - window.rect.y,
                };
                begin_drag(
                    interaction,
                    DragTarget::Window(window_id),
                    offset,
                    bounds,
                    effects,
                );
            }
        }
        PointerDownGesture::WindowBodyPress(window_id) => {
            ensure_window(state, window_id)?;
            window_manager::focus_window(state, window_id);
        }
        PointerDownGesture::BackgroundPress => {}
    }
    Ok(())
}

/// Starts a drag unless one is already active; only one session may exist at a time.
fn begin_drag(
    interaction: &mut InteractionState,
    target: DragTarget,
    pointer_offset: PointerOffset,
    bounds: IconDragBounds,
    effects: &mut Vec<RuntimeEffect>,
) {
    if interaction.dragging.is_some() {
        return;
    }
    interaction.dragging = Some(DragSession {
        target,
        pointer_offset,
        bounds,
    });
    if !interaction.selection_suppressed {
        interaction.selection_suppressed = true;
        effects.push(RuntimeEffect::SetSelectionSuppressed(true));
    }
}

fn pointer_move(
    state: &mut DesktopState,
    interaction: &InteractionState,
    pointer: PointerPosition,
) {
    let Some(session) = &interaction.dragging else {
        return;
    };
    let x = pointer.x - session.pointer_offset.dx;
    let y = pointer.y - session.pointer_offset.dy;
    match &session.target {
        DragTarget::Window(window_id) => {
            window_manager::move_window(state, *window_id, x, y);
        }
        DragTarget::Icon(item_id) => {
            state
                .desktop_items
                .update_position(item_id, x, y, session.bounds);
        }
    }
}

fn pointer_up(
    state: &DesktopState,
    interaction: &mut InteractionState,
    effects: &mut Vec<RuntimeEffect>,
) {
    if let Some(session) = interaction.dragging.take() {
        if let DragTarget::Icon(item_id) = session.target {
            if let Some(item) = state.desktop_items.item(&item_id) {
                effects.push(RuntimeEffect::PersistDesktopItemPosition {
                    item_id,
                    position: item.position,
                });
            }
        }
    }
    if interaction.selection_suppressed {
        interaction.selection_suppressed = false;
        effects.push(RuntimeEffect::SetSelectionSuppressed(false));
    }
}

fn close_command_center(state: &mut DesktopState) {
    state.command_center.open = false;
    state.command_center.query.clear();
}

/// Records the user's text and routes it. Returns `Some(true)` when handled locally,
/// `Some(false)` when forwarded to the assistant, and `None` for blank input.
fn submit_text(
    state: &mut DesktopState,
    text: &str,
    effects: &mut Vec<RuntimeEffect>,
) -> Option<bool> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    state.conversation.append(Sender::User, text);
    effects.push(RuntimeEffect::ScrollConversationToLatest);

    let outcome = CommandRouter::new(&state.catalog).route(
        text,
        &mut state.dock,
        &mut state.conversation,
    );
    match outcome {
        RouteOutcome::Handled { launch_url, .. } => {
            if let Some(url) = launch_url {
                effects.push(RuntimeEffect::OpenExternalUrl(url));
            }
            effects.push(RuntimeEffect::ScrollConversationToLatest);
            Some(true)
        }
        RouteOutcome::Forward => {
            state.assistant_panel.in_flight = state.assistant_panel.in_flight.saturating_add(1);
            effects.push(RuntimeEffect::RequestAssistantReply {
                prompt: text.to_string(),
            });
            Some(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        apps::{AppCatalog, AppEntry},
        desktop_items::{DesktopItem, DesktopItemLayout},
        model::{Size, WindowState},
    };

    fn seeded() -> DesktopState {
        DesktopState::with_catalog(
            AppCatalog::new(vec![
                AppEntry::new("notes-app", "Notes", "https://notes.example"),
                AppEntry::new("mail-app", "Mail", "https://mail.example"),
            ]),
            DesktopItemLayout::new(vec![
                DesktopItem {
                    id: DesktopItemId::new("notes-shortcut"),
                    label: "Notes".to_string(),
                    kind: DesktopItemKind::AppShortcut(AppId::new("notes-app")),
                    position: ItemPosition { x: 24, y: 24 },
                },
                DesktopItem {
                    id: DesktopItemId::new("documents"),
                    label: "Documents".to_string(),
                    kind: DesktopItemKind::Folder,
                    position: ItemPosition { x: 24, y: 140 },
                },
            ]),
            vec![AppId::new("notes-app")],
        )
    }

    fn bounds() -> IconDragBounds {
        IconDragBounds {
            container: Size { w: 800, h: 600 },
            item: Size { w: 80, h: 90 },
        }
    }

    fn viewport() -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: 1280,
            h: 720,
        }
    }

    fn press(hits: Vec<HitRegion>, x: i32, y: i32) -> DesktopAction {
        DesktopAction::PointerDown {
            hits,
            pointer: PointerPosition { x, y },
            bounds: bounds(),
            viewport: viewport(),
        }
    }

    fn reduce(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn launch(state: &mut DesktopState, interaction: &mut InteractionState, app: &str) -> WindowId {
        reduce(
            state,
            interaction,
            DesktopAction::LaunchApp {
                app_id: AppId::new(app),
            },
        );
        state.windows.last().expect("window").id
    }

    #[test]
    fn launch_uses_catalog_name_and_rejects_unknown_apps() {
        let mut state = seeded();
        let mut interaction = InteractionState::default();

        let id = launch(&mut state, &mut interaction, "mail-app");
        assert_eq!(state.window(id).unwrap().title, "Mail");

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::LaunchApp {
                app_id: AppId::new("ghost"),
            },
        )
        .unwrap_err();
        assert_eq!(err, ReducerError::UnknownApp(AppId::new("ghost")));
    }

    #[test]
    fn dock_click_cycles_launch_minimize_restore_focus() {
        let mut state = seeded();
        let mut interaction = InteractionState::default();
        let click = || DesktopAction::DockItemClicked {
            app_id: AppId::new("notes-app"),
        };

        reduce(&mut state, &mut interaction, click());
        assert_eq!(state.windows.len(), 1);
        let notes = state.windows[0].id;

        reduce(&mut state, &mut interaction, click());
        assert_eq!(state.window(notes).unwrap().state, WindowState::Minimized);

        reduce(&mut state, &mut interaction, click());
        let window = state.window(notes).unwrap();
        assert_eq!(window.state, WindowState::Normal);
        assert!(window.is_focused);

        launch(&mut state, &mut interaction, "mail-app");
        reduce(&mut state, &mut interaction, click());
        assert_eq!(state.focused_window_id(), Some(notes));
        assert_eq!(state.windows.len(), 2);
    }

    #[test]
    fn icon_drag_is_clamped_and_persisted_on_release() {
        let mut state = seeded();
        let mut interaction = InteractionState::default();
        let icon = DesktopItemId::new("notes-shortcut");

        let effects = reduce(
            &mut state,
            &mut interaction,
            press(vec![HitRegion::DesktopIcon(icon.clone())], 34, 34),
        );
        assert!(effects.contains(&RuntimeEffect::SetSelectionSuppressed(true)));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                pointer: PointerPosition { x: 5000, y: -40 },
            },
        );
        let effects = reduce(&mut state, &mut interaction, DesktopAction::PointerUp);

        let expected = ItemPosition { x: 720, y: 0 };
        assert_eq!(state.desktop_items.item(&icon).unwrap().position, expected);
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::PersistDesktopItemPosition {
                    item_id: icon,
                    position: expected,
                },
                RuntimeEffect::SetSelectionSuppressed(false),
            ]
        );
        assert_eq!(interaction.dragging, None);
        assert!(!interaction.selection_suppressed);
    }

    #[test]
    fn second_drag_while_one_is_active_is_ignored() {
        let mut state = seeded();
        let mut interaction = InteractionState::default();
        let id = launch(&mut state, &mut interaction, "notes-app");

        reduce(
            &mut state,
            &mut interaction,
            press(vec![HitRegion::TitleBar(id)], 100, 60),
        );
        reduce(
            &mut state,
            &mut interaction,
            press(
                vec![HitRegion::DesktopIcon(DesktopItemId::new("documents"))],
                30,
                150,
            ),
        );

        assert_eq!(
            interaction.dragging.as_ref().map(|s| s.target.clone()),
            Some(DragTarget::Window(id))
        );
    }

    #[test]
    fn title_bar_drag_moves_window_unclamped() {
        let mut state = seeded();
        let mut interaction = InteractionState::default();
        let id = launch(&mut state, &mut interaction, "notes-app");
        let start = state.window(id).unwrap().rect;

        reduce(
            &mut state,
            &mut interaction,
            press(vec![HitRegion::TitleBar(id)], start.x + 10, start.y + 5),
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                pointer: PointerPosition { x: -90, y: 2000 },
            },
        );
        let effects = reduce(&mut state, &mut interaction, DesktopAction::PointerUp);

        let rect = state.window(id).unwrap().rect;
        assert_eq!((rect.x, rect.y), (-100, 1995));
        assert_eq!(effects, vec![RuntimeEffect::SetSelectionSuppressed(false)]);
    }

    #[test]
    fn maximized_window_title_bar_does_not_start_drag() {
        let mut state = seeded();
        let mut interaction = InteractionState::default();
        let id = launch(&mut state, &mut interaction, "notes-app");

        reduce(
            &mut state,
            &mut interaction,
            press(
                vec![
                    HitRegion::WindowControl(id, WindowControl::Maximize),
                    HitRegion::TitleBar(id),
                ],
                10,
                10,
            ),
        );
        assert_eq!(state.window(id).unwrap().rect, viewport());

        reduce(
            &mut state,
            &mut interaction,
            press(vec![HitRegion::TitleBar(id)], 10, 10),
        );
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn pressing_a_background_window_focuses_it_before_control_runs() {
        let mut state = seeded();
        let mut interaction = InteractionState::default();
        let first = launch(&mut state, &mut interaction, "notes-app");
        let second = launch(&mut state, &mut interaction, "mail-app");

        reduce(
            &mut state,
            &mut interaction,
            press(vec![HitRegion::WindowBody(first)], 60, 60),
        );
        assert_eq!(state.focused_window_id(), Some(first));

        reduce(
            &mut state,
            &mut interaction,
            press(
                vec![HitRegion::WindowControl(second, WindowControl::Close)],
                0,
                0,
            ),
        );
        assert_eq!(state.window(second), None);
        assert_eq!(state.focused_window_id(), None);
    }

    #[test]
    fn double_click_on_folder_opens_folder_window() {
        let mut state = seeded();
        let mut interaction = InteractionState::default();
        let folder = DesktopItemId::new("documents");
        let click = || press(vec![HitRegion::DesktopIcon(folder.clone())], 30, 150);

        let effects = reduce(&mut state, &mut interaction, click());
        assert!(effects.contains(&RuntimeEffect::ScheduleClickTimeout {
            token: 1,
            delay_ms: DOUBLE_CLICK_WINDOW_MS,
        }));
        reduce(&mut state, &mut interaction, DesktopAction::PointerUp);
        reduce(&mut state, &mut interaction, click());

        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.windows[0].content, WindowContent::Folder(folder));
        assert_eq!(state.windows[0].title, "Documents");
    }

    #[test]
    fn forwarded_text_tracks_in_flight_until_reply() {
        let mut state = seeded();
        let mut interaction = InteractionState::default();

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SubmitText {
                text: "  hello  ".to_string(),
            },
        );
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::ScrollConversationToLatest,
                RuntimeEffect::RequestAssistantReply {
                    prompt: "hello".to_string(),
                },
            ]
        );
        assert!(state.assistant_panel.typing_indicator_visible());
        assert!(!state.assistant_panel.submit_enabled());

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::AssistantReplyReceived {
                result: Err(AssistantError::Cancelled),
            },
        );
        assert_eq!(state.assistant_panel.in_flight, 0);
        assert_eq!(state.conversation.len(), 2);
        assert_eq!(
            state.conversation.last().unwrap().text,
            AssistantError::Cancelled.user_message()
        );
    }

    #[test]
    fn blank_text_is_ignored() {
        let mut state = seeded();
        let mut interaction = InteractionState::default();
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SubmitText {
                text: "   ".to_string(),
            },
        );
        assert!(effects.is_empty());
        assert!(state.conversation.is_empty());
    }

    #[test]
    fn command_center_submit_routes_and_closes() {
        let mut state = seeded();
        let mut interaction = InteractionState::default();

        reduce(&mut state, &mut interaction, DesktopAction::OpenCommandCenter);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetCommandCenterQuery {
                query: "launch mail".to_string(),
            },
        );
        let effects = reduce(&mut state, &mut interaction, DesktopAction::SubmitCommandCenter);

        assert!(!state.command_center.open);
        assert!(effects.contains(&RuntimeEffect::OpenExternalUrl(
            "https://mail.example".to_string()
        )));
        assert!(!state.assistant_panel.open);

        reduce(&mut state, &mut interaction, DesktopAction::OpenCommandCenter);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetCommandCenterQuery {
                query: "what's new?".to_string(),
            },
        );
        reduce(&mut state, &mut interaction, DesktopAction::SubmitCommandCenter);
        assert!(state.assistant_panel.open);
    }

    #[test]
    fn escape_closes_overlays_and_theme_toggles() {
        let mut state = seeded();
        let mut interaction = InteractionState::default();

        reduce(&mut state, &mut interaction, DesktopAction::OpenCommandCenter);
        reduce(&mut state, &mut interaction, DesktopAction::ToggleAssistantPanel);
        reduce(&mut state, &mut interaction, DesktopAction::Escape);
        assert!(!state.command_center.open);
        assert!(!state.assistant_panel.open);

        let before = state.theme;
        reduce(&mut state, &mut interaction, DesktopAction::ToggleTheme);
        assert_eq!(state.theme, before.toggled());
    }

    #[test]
    fn new_folder_is_clamped_and_persisted() {
        let mut state = seeded();
        let mut interaction = InteractionState::default();

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CreateFolder {
                position: ItemPosition { x: 790, y: 10 },
                bounds: bounds(),
            },
        );

        assert_eq!(
            effects,
            vec![RuntimeEffect::PersistDesktopItemPosition {
                item_id: DesktopItemId::new("folder-1"),
                position: ItemPosition { x: 720, y: 10 },
            }]
        );
    }

    #[test]
    fn cancel_only_emits_while_requests_are_pending() {
        let mut state = seeded();
        let mut interaction = InteractionState::default();

        assert!(reduce(&mut state, &mut interaction, DesktopAction::CancelAssistantRequests)
            .is_empty());
        state.assistant_panel.in_flight = 1;
        assert_eq!(
            reduce(&mut state, &mut interaction, DesktopAction::CancelAssistantRequests),
            vec![RuntimeEffect::CancelAssistantRequests]
        );
    }

    #[test]
    fn missing_window_is_reported() {
        let mut state = seeded();
        let mut interaction = InteractionState::default();
        assert_eq!(
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::CloseWindow {
                    window_id: WindowId(99)
                },
            ),
            Err(ReducerError::WindowNotFound)
        );
    }
}
