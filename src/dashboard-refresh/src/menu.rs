//! Menu entries and the actions they are bound to.
//!
//! The host UI only needs to render these entries and call [`dispatch`]
//! when one is selected.

use crate::trigger::{DashboardRefreshTrigger, RefreshError};
use std::fmt;

/// Title of the top-level menu.
pub const MENU_TITLE: &str = "GitHub";

/// Label of the dashboard refresh entry.
pub const UPDATE_DASHBOARD_LABEL: &str = "Update Dashboard";

/// Action invoked when a menu entry is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Fire the dashboard refresh trigger.
    UpdateDashboard,
}

/// A single selectable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub action: MenuAction,
}

/// A top-level menu with its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub title: &'static str,
    pub items: Vec<MenuItem>,
}

impl Menu {
    /// The `GitHub` menu with its single `Update Dashboard` entry.
    #[must_use]
    pub fn dashboard() -> Self {
        Self {
            title: MENU_TITLE,
            items: vec![MenuItem {
                label: UPDATE_DASHBOARD_LABEL,
                action: MenuAction::UpdateDashboard,
            }],
        }
    }

    /// Looks up the action bound to a label.
    pub fn action(&self, label: &str) -> Option<MenuAction> {
        self.items
            .iter()
            .find(|item| item.label == label)
            .map(|item| item.action)
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for item in &self.items {
            writeln!(f, "  {}", item.label)?;
        }
        Ok(())
    }
}

/// Runs the callback bound to `action`.
///
/// # Errors
///
/// Propagates the error of the invoked action.
pub async fn dispatch(
    action: MenuAction,
    trigger: &DashboardRefreshTrigger,
) -> Result<(), RefreshError> {
    match action {
        MenuAction::UpdateDashboard => trigger.refresh().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::StaticCredential;
    use crate::request::RequestSpec;
    use crate::transport::{Transport, TransportError};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingTransport {
        sent: Arc<Mutex<Vec<RequestSpec>>>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, request: &RequestSpec) -> Result<(), TransportError> {
            self.sent.lock().unwrap().push(request.clone());
            Ok(())
        }
    }

    #[test]
    fn dashboard_menu_layout() {
        let menu = Menu::dashboard();

        assert_eq!(menu.title, "GitHub");
        assert_eq!(menu.items.len(), 1);
        assert_eq!(menu.items[0].label, "Update Dashboard");
    }

    #[test]
    fn finds_action_by_label() {
        let menu = Menu::dashboard();

        assert_eq!(
            menu.action("Update Dashboard"),
            Some(MenuAction::UpdateDashboard)
        );
        assert_eq!(menu.action("update dashboard"), None);
    }

    #[test]
    fn renders_as_tree() {
        assert_eq!(Menu::dashboard().to_string(), "GitHub\n  Update Dashboard\n");
    }

    #[tokio::test]
    async fn dispatching_update_dashboard_fires_trigger_once() {
        let transport = RecordingTransport::default();
        let trigger = DashboardRefreshTrigger::new(
            "https://example.com/api",
            Box::new(StaticCredential::new("abc123")),
            Box::new(transport.clone()),
        );
        let action = Menu::dashboard().action(UPDATE_DASHBOARD_LABEL).unwrap();

        dispatch(action, &trigger).await.unwrap();

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].target_url, "https://example.com/api/github/issues");
        assert_eq!(sent[0].parameters.len(), 1);
        assert_eq!(sent[0].parameters["apiKey"], "abc123");
    }
}
