//! Navigation shell: menu state plus the navigation state of the current page.

use std::sync::Arc;

use crate::menu::{MenuEvent, MenuState};
use crate::navigator::{NavigationState, resolve_current_page};
use crate::registry::RouteRegistry;

/// Per-visitor shell state.
///
/// Holds the only mutable UI state of the docs shell (the menu) next to the
/// navigation state derived for the displayed page.
#[derive(Debug)]
pub struct NavigationShell {
    registry: Arc<RouteRegistry>,
    menu: MenuState,
    current_path: String,
    navigation: NavigationState,
}

impl NavigationShell {
    /// Create a shell positioned at `current_path` with the menu closed.
    pub fn new(registry: Arc<RouteRegistry>, current_path: impl Into<String>) -> Self {
        let current_path = current_path.into();
        let navigation = resolve_current_page(&current_path, &registry);
        Self {
            registry,
            menu: MenuState::default(),
            current_path,
            navigation,
        }
    }

    /// Flip the menu between open and closed.
    pub fn toggle_menu(&mut self) -> MenuState {
        self.menu = self.menu.transition(MenuEvent::Toggle);
        self.menu
    }

    /// Move to a new path.
    ///
    /// The menu is closed before the navigation state is recomputed, so the
    /// new page is never displayed with a menu left open on the old one.
    pub fn navigate(&mut self, path: impl Into<String>) -> &NavigationState {
        self.menu = self.menu.transition(MenuEvent::NavigationStart);
        self.current_path = path.into();
        self.navigation = resolve_current_page(&self.current_path, &self.registry);
        tracing::debug!(
            path = %self.current_path,
            index = ?self.navigation.current_index,
            "Navigated"
        );
        &self.navigation
    }

    /// Current menu state.
    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.menu
    }

    /// Path of the displayed page.
    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Navigation state of the displayed page.
    #[must_use]
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Registry the shell navigates over.
    #[must_use]
    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }
}
