use std::fmt;

/// Visibility of a toggle-style widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expansion {
    Collapsed,
    Expanded,
}

impl Expansion {
    pub fn toggled(self) -> Self {
        match self {
            Expansion::Collapsed => Expansion::Expanded,
            Expansion::Expanded => Expansion::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Expansion::Expanded
    }
}

impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expansion::Collapsed => write!(f, "collapsed"),
            Expansion::Expanded => write!(f, "expanded"),
        }
    }
}

/// Dropdown state. Starts closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuState {
    expansion: Expansion,
}

impl Default for MenuState {
    fn default() -> Self {
        Self { expansion: Expansion::Collapsed }
    }
}

impl MenuState {
    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    pub fn is_open(&self) -> bool {
        self.expansion.is_expanded()
    }

    /// Trigger click: flip open/closed
    pub fn toggle(&mut self) {
        self.expansion = self.expansion.toggled();
    }

    /// Outside interaction: close if open. Returns whether anything changed.
    pub fn dismiss(&mut self) -> bool {
        if self.is_open() {
            self.expansion = Expansion::Collapsed;
            true
        } else {
            false
        }
    }
}

/// Side panel state. Starts expanded on every mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelState {
    expansion: Expansion,
}

impl Default for PanelState {
    fn default() -> Self {
        Self { expansion: Expansion::Expanded }
    }
}

impl PanelState {
    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    pub fn is_expanded(&self) -> bool {
        self.expansion.is_expanded()
    }

    pub fn toggle(&mut self) {
        self.expansion = self.expansion.toggled();
    }

    /// `active` marks the open panel.
    pub fn root_class(&self) -> &'static str {
        if self.is_expanded() { "sidebar active" } else { "sidebar" }
    }

    /// Points toward the direction the next toggle moves the panel.
    pub fn glyph(&self) -> &'static str {
        if self.is_expanded() { "fas fa-angle-left" } else { "fas fa-angle-right" }
    }
}

/// A dropdown entry. `href` is a placeholder until the entry has a real action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub icon: &'static str, // Font Awesome classes
    pub href: &'static str,
}

pub const USER_MENU_ENTRIES: &[MenuEntry] = &[
    MenuEntry { label: "logout", href: "#" },
    MenuEntry { label: "profile", href: "#" },
];

pub const SIDE_NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { label: "Dashboard", icon: "fas fa-columns", href: "#" },
    NavEntry { label: "My Tickets", icon: "fas fa-clipboard-list", href: "#" },
    NavEntry { label: "Projects", icon: "fas fa-tasks", href: "#" },
    NavEntry { label: "Users", icon: "fas fa-users", href: "#" },
];
