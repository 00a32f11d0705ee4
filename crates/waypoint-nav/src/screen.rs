//! Screen-size breakpoint

use serde::{Deserialize, Serialize};

/// Window width at or below which the layout is single-pane
pub const DEFAULT_SMALL_SCREEN_BREAKPOINT: u32 = 800;

/// Layout class the adapter shapes state for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenSize {
    /// One pane at a time
    Small,
    /// Bottom tab and central pane side by side
    #[default]
    Large,
}

impl ScreenSize {
    /// Classify a window width against `breakpoint`
    pub fn from_width(width: u32, breakpoint: u32) -> Self {
        if width <= breakpoint {
            ScreenSize::Small
        } else {
            ScreenSize::Large
        }
    }

    /// Whether only one pane fits
    pub fn is_small(&self) -> bool {
        matches!(self, ScreenSize::Small)
    }
}

impl From<bool> for ScreenSize {
    /// `true` means small screen
    fn from(is_small_screen: bool) -> Self {
        if is_small_screen {
            ScreenSize::Small
        } else {
            ScreenSize::Large
        }
    }
}
