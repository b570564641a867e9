//! Display mode types and viewport breakpoints for the dashboard.
//!
//! - [`ThemeMode`]: light or dark palette selection
//! - [`LoadingSection`]: which panel a loading flag belongs to
//! - Breakpoints below which the side panels collapse
//!
//! # Example
//!
//! ```rust
//! use admin_dashboard::app::modes::{ThemeMode, SIDEBAR_BREAKPOINT};
//!
//! assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
//! assert!(1280 >= SIDEBAR_BREAKPOINT);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum viewport width, in CSS pixels, at which the navigation sidebar is open.
pub const SIDEBAR_BREAKPOINT: u32 = 1024;

/// Minimum viewport width at which the activity sidebar is open.
pub const ACTIVITY_SIDEBAR_BREAKPOINT: u32 = 1280;

/// Whether the navigation sidebar may be open at `width`.
#[must_use]
pub const fn sidebar_fits(width: u32) -> bool {
    width >= SIDEBAR_BREAKPOINT
}

/// Whether the activity sidebar may be open at `width`.
#[must_use]
pub const fn activity_sidebar_fits(width: u32) -> bool {
    width >= ACTIVITY_SIDEBAR_BREAKPOINT
}

/// Palette selection.
///
/// Only the mode is tracked here; palettes themselves belong to the view layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme mode: {other}")),
        }
    }
}

/// Dashboard section with its own loading indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingSection {
    Dashboard,
    Orders,
    Products,
}
