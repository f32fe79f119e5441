//! Desktop shell runtime: window management, desktop icons, dock, command routing, and the
//! assistant panel, driven by a single reducer and rendered with Leptos.

pub mod apps;
pub mod assistant;
pub mod command_router;
pub mod components;
pub mod config;
pub mod conversation;
pub mod desktop_items;
pub mod dock;
mod effect_executor;
pub mod gesture;
mod host;
pub mod model;
pub mod reducer;
pub mod render;
mod runtime_context;
pub mod window_manager;

pub use apps::{builtin_desktop_state, AppCatalog, AppEntry};
pub use assistant::{AssistantClient, AssistantError, AssistantErrorKind};
pub use command_router::{CommandIntent, CommandRouter, RouteOutcome};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{load_assistant_config, AssistantConfig};
pub use conversation::{ConversationEntry, ConversationLog, Sender};
pub use host::DesktopHostContext;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
