// SPDX-License-Identifier: MPL-2.0
//! Mobile navigation menu state.
//!
//! On narrow screens the navigation links collapse behind a burger button.
//! The button icon mirrors the menu state: bars while closed, a cross while
//! open.

/// Icon shown on the menu button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuIcon {
    /// Three bars, menu closed.
    #[default]
    Bars,
    /// A cross, menu open.
    Times,
}

impl MenuIcon {
    /// Font Awesome class of the icon.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Bars => "fas fa-bars",
            Self::Times => "fas fa-times",
        }
    }

    /// i18n key of the button's accessible label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Bars => "menu-open",
            Self::Times => "menu-close",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a click on the menu button.
    pub fn toggle(&mut self) -> MenuIcon {
        self.open = !self.open;
        self.icon()
    }

    /// Handles a click on one of the navigation links.
    pub fn close(&mut self) -> MenuIcon {
        self.open = false;
        self.icon()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn icon(&self) -> MenuIcon {
        if self.open {
            MenuIcon::Times
        } else {
            MenuIcon::Bars
        }
    }
}
