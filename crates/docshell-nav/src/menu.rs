//! Collapsible sidebar menu state for small viewports.

use serde::Serialize;

/// Open/closed state of the sidebar menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    /// Menu expanded.
    Open,
    /// Menu collapsed.
    #[default]
    Closed,
}

/// Events that drive [`MenuState`] transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// User pressed the menu button.
    Toggle,
    /// A route change started.
    NavigationStart,
}

impl MenuState {
    /// Apply an event and return the next state.
    #[must_use]
    pub fn transition(self, event: MenuEvent) -> Self {
        match (event, self) {
            (MenuEvent::Toggle, Self::Closed) => Self::Open,
            (MenuEvent::Toggle, Self::Open) | (MenuEvent::NavigationStart, _) => Self::Closed,
        }
    }

    /// Whether the menu is expanded.
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Value used for the `data-menu-state` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}
