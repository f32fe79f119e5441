//! Keyword router for free-text commands typed into the assistant panel or command center.
//!
//! Matching is naive: the add/remove keywords are plain substrings, so prose such as "address"
//! triggers them, and "unpin"/"undock" contain the add keywords "pin"/"dock" and therefore
//! resolve as additions. Priority is open, then add, then remove, and the first catalog app
//! whose name appears in the text wins.

use crate::{
    apps::{AppCatalog, AppEntry},
    conversation::{ConversationLog, Sender},
    dock::DockControls,
    model::AppId,
};

/// Matched as a prefix of the trimmed, lower-cased input.
pub const OPEN_KEYWORDS: [&str; 4] = ["open", "launch", "go to", "navigate to"];
/// Matched anywhere in the lower-cased input.
pub const ADD_KEYWORDS: [&str; 3] = ["add", "pin", "dock"];
/// Matched anywhere in the lower-cased input.
pub const REMOVE_KEYWORDS: [&str; 3] = ["remove", "unpin", "undock"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandIntent {
    OpenApp(AppId),
    DockAdd(AppId),
    DockRemove(AppId),
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Executed locally. `launch_url` is set when the host must open a new browsing context.
    Handled {
        intent: CommandIntent,
        launch_url: Option<String>,
    },
    /// Not a recognized command; the raw text goes to the assistant.
    Forward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeywordGroup {
    Open,
    Add,
    Remove,
}

fn keyword_group(lowered: &str) -> Option<KeywordGroup> {
    if OPEN_KEYWORDS.iter().any(|kw| lowered.starts_with(kw)) {
        Some(KeywordGroup::Open)
    } else if ADD_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        Some(KeywordGroup::Add)
    } else if REMOVE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        Some(KeywordGroup::Remove)
    } else {
        None
    }
}

pub struct CommandRouter<'a> {
    catalog: &'a AppCatalog,
}

impl<'a> CommandRouter<'a> {
    pub fn new(catalog: &'a AppCatalog) -> Self {
        Self { catalog }
    }

    fn resolve(&self, text: &str) -> Option<(KeywordGroup, &'a AppEntry)> {
        let lowered = text.trim().to_lowercase();
        let group = keyword_group(&lowered)?;
        let app = self.catalog.first_named_in(&lowered)?;
        Some((group, app))
    }

    /// Classifies `text` without side effects.
    pub fn classify(&self, text: &str) -> CommandIntent {
        match self.resolve(text) {
            Some((KeywordGroup::Open, app)) => CommandIntent::OpenApp(app.id.clone()),
            Some((KeywordGroup::Add, app)) => CommandIntent::DockAdd(app.id.clone()),
            Some((KeywordGroup::Remove, app)) => CommandIntent::DockRemove(app.id.clone()),
            None => CommandIntent::None,
        }
    }

    /// Routes `text`. A handled command appends one assistant acknowledgement to `log`; a
    /// forwarded one leaves both `dock` and `log` untouched.
    pub fn route(
        &self,
        text: &str,
        dock: &mut dyn DockControls,
        log: &mut ConversationLog,
    ) -> RouteOutcome {
        let Some((group, app)) = self.resolve(text) else {
            return RouteOutcome::Forward;
        };

        let (intent, launch_url, message) = match group {
            KeywordGroup::Open => (
                CommandIntent::OpenApp(app.id.clone()),
                Some(app.url.clone()),
                format!("Opening **{}**...", app.name),
            ),
            KeywordGroup::Add => (
                CommandIntent::DockAdd(app.id.clone()),
                None,
                dock.add_app_to_dock(app),
            ),
            KeywordGroup::Remove => (
                CommandIntent::DockRemove(app.id.clone()),
                None,
                dock.remove_app_from_dock(app),
            ),
        };
        log.append(Sender::Ai, message);
        RouteOutcome::Handled { intent, launch_url }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dock::DockState;

    fn catalog() -> AppCatalog {
        AppCatalog::new(vec![
            AppEntry::new("notes-app", "Notes", "https://notes.example"),
            AppEntry::new("mail-app", "Mail", "https://mail.example"),
        ])
    }

    #[test]
    fn open_command_yields_launch_url_and_acknowledgement() {
        let catalog = catalog();
        let mut dock = DockState::default();
        let mut log = ConversationLog::default();

        let outcome = CommandRouter::new(&catalog).route("open notes", &mut dock, &mut log);

        assert_eq!(
            outcome,
            RouteOutcome::Handled {
                intent: CommandIntent::OpenApp(AppId::new("notes-app")),
                launch_url: Some("https://notes.example".to_string()),
            }
        );
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].sender, Sender::Ai);
        assert_eq!(log.entries()[0].text, "Opening **Notes**...");
    }

    #[test]
    fn open_wins_over_dock_keyword() {
        let catalog = catalog();
        assert_eq!(
            CommandRouter::new(&catalog).classify("open Notes and dock Notes"),
            CommandIntent::OpenApp(AppId::new("notes-app"))
        );
    }

    #[test]
    fn open_keywords_only_match_as_prefix() {
        let catalog = catalog();
        let router = CommandRouter::new(&catalog);
        assert_eq!(
            router.classify("  Navigate to Mail"),
            CommandIntent::OpenApp(AppId::new("mail-app"))
        );
        assert_eq!(router.classify("please open mail"), CommandIntent::None);
    }

    #[test]
    fn dock_add_and_remove_mutate_pins() {
        let catalog = catalog();
        let router = CommandRouter::new(&catalog);
        let mut dock = DockState::default();
        let mut log = ConversationLog::default();

        router.route("pin mail", &mut dock, &mut log);
        assert!(dock.is_pinned(&AppId::new("mail-app")));
        router.route("remove mail", &mut dock, &mut log);
        assert!(!dock.is_pinned(&AppId::new("mail-app")));
        assert_eq!(log.last().unwrap().text, "Removed **Mail** from your dock.");
    }

    #[test]
    fn substring_keywords_mis_trigger_on_prose() {
        let catalog = catalog();
        let router = CommandRouter::new(&catalog);
        assert_eq!(
            router.classify("what is the mail address"),
            CommandIntent::DockAdd(AppId::new("mail-app"))
        );
        assert_eq!(
            router.classify("unpin mail"),
            CommandIntent::DockAdd(AppId::new("mail-app"))
        );
    }

    #[test]
    fn unknown_app_or_no_keyword_forwards_without_logging() {
        let catalog = catalog();
        let router = CommandRouter::new(&catalog);
        let mut dock = DockState::default();
        let mut log = ConversationLog::default();

        assert_eq!(router.route("open spreadsheet", &mut dock, &mut log), RouteOutcome::Forward);
        assert_eq!(router.route("hello there", &mut dock, &mut log), RouteOutcome::Forward);
        assert!(log.is_empty());
    }
}
