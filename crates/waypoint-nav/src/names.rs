//! # Navigator and Screen Names
//!
//! Route names are plain strings on the wire, so layer roots and the handful
//! of screens the adapter synthesizes itself are pinned here.

/// Navigator route names
pub mod navigators {
    /// Bottom tab bar
    pub const BOTTOM_TAB: &str = "BottomTabNavigator";
    /// Central pane beside the bottom tab on wide layouts
    pub const CENTRAL_PANE: &str = "CentralPaneNavigator";
    /// Full-screen settings app
    pub const FULL_SCREEN: &str = "FullScreenNavigator";
    /// Right-hand modal panel (RHP)
    pub const RIGHT_MODAL: &str = "RightModalNavigator";
    /// Left-hand modal panel (LHP)
    pub const LEFT_MODAL: &str = "LeftModalNavigator";
}

/// Screen route names the adapter creates on its own
pub mod screens {
    /// Bottom tab backstop, always the first bottom-tab route
    pub const HOME: &str = "Home";
    /// Default central pane
    pub const REPORT: &str = "Report";
    /// Root of the full-screen settings navigator
    pub const SETTINGS_ROOT: &str = "Settings_Root";
    /// Detail pane inside the full-screen settings navigator
    pub const SETTINGS_CENTRAL_PANE: &str = "SettingsCentralPane";
}

/// Route parameter keys with adapter-level meaning
pub mod params {
    /// Workspace policy identifier
    pub const POLICY_ID: &str = "policyID";
}

/// The closed set of navigation layers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Bottom tab bar
    BottomTab,
    /// Central pane
    CentralPane,
    /// Full-screen settings
    FullScreen,
    /// Right-hand modal
    RightModal,
    /// Left-hand modal
    LeftModal,
}

impl Layer {
    /// Route name of the navigator implementing this layer
    pub fn route_name(&self) -> &'static str {
        match self {
            Layer::BottomTab => navigators::BOTTOM_TAB,
            Layer::CentralPane => navigators::CENTRAL_PANE,
            Layer::FullScreen => navigators::FULL_SCREEN,
            Layer::RightModal => navigators::RIGHT_MODAL,
            Layer::LeftModal => navigators::LEFT_MODAL,
        }
    }

    /// Layer for a route name, `None` for leaf screens
    pub fn from_route_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|layer| layer.route_name() == name)
    }

    /// Whether this layer floats above the others
    pub fn is_modal(&self) -> bool {
        matches!(self, Layer::RightModal | Layer::LeftModal)
    }

    /// Layers in classification priority order
    ///
    /// A right modal can be open on top of any other layer, so it is checked
    /// first and dominates the reshape.
    pub fn all() -> &'static [Layer] {
        &[
            Layer::RightModal,
            Layer::LeftModal,
            Layer::FullScreen,
            Layer::CentralPane,
            Layer::BottomTab,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_name_round_trip() {
        for layer in Layer::all() {
            assert_eq!(Layer::from_route_name(layer.route_name()), Some(*layer));
        }
        assert_eq!(Layer::from_route_name(screens::REPORT), None);
    }

    #[test]
    fn test_priority_starts_with_right_modal() {
        assert_eq!(Layer::all()[0], Layer::RightModal);
        assert!(Layer::LeftModal.is_modal());
        assert!(!Layer::FullScreen.is_modal());
    }
}
