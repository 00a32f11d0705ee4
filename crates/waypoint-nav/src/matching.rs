//! # Layer Matchers
//!
//! Derive the companion layer for a partial state: which bottom tab belongs
//! under a central pane, which central pane belongs beside a bottom tab, and
//! which screen a right modal is actually showing.

use crate::mapping::RouteMapping;
use crate::names::{params, screens, Layer};
use crate::state::{NavigationState, Route};

/// Derives best-fit companion routes for a state
pub trait StateMatcher {
    /// Bottom-tab destination for `state`; always answers
    fn match_bottom_tab(&self, state: &NavigationState) -> Route;

    /// Central-pane destination for `state`, if the active tab has one
    fn match_central_pane(&self, state: &NavigationState) -> Option<Route>;
}

/// Matcher driven by the bottom-tab → central-pane table
#[derive(Debug, Clone, Default)]
pub struct TabMatcher {
    tab_to_central_pane: RouteMapping,
}

impl TabMatcher {
    /// Create a matcher over `tab_to_central_pane`
    pub fn new(tab_to_central_pane: RouteMapping) -> Self {
        Self {
            tab_to_central_pane,
        }
    }
}

impl StateMatcher for TabMatcher {
    fn match_bottom_tab(&self, state: &NavigationState) -> Route {
        let Some(central_pane) = topmost_layer_screen(state, Layer::CentralPane) else {
            return Route::new(screens::HOME);
        };

        match self.tab_to_central_pane.key_for(&central_pane.name) {
            Some(tab) => {
                let mut route = Route::new(tab);
                if let Some(policy_id) = central_pane.param(params::POLICY_ID) {
                    route = route.with_param(params::POLICY_ID, policy_id.clone());
                }
                route
            }
            None => Route::new(screens::HOME),
        }
    }

    fn match_central_pane(&self, state: &NavigationState) -> Option<Route> {
        let tab = topmost_layer_screen(state, Layer::BottomTab)?;
        let central_pane = self.tab_to_central_pane.names_for(&tab.name)?.first()?;

        Some(Route::new(central_pane.as_str()).with_params(tab.params.clone()))
    }
}

/// Active screen of the last top-level navigator rooting `layer`
fn topmost_layer_screen(state: &NavigationState, layer: Layer) -> Option<&Route> {
    state.find_last(layer.route_name())?.last_child()
}

/// Deepest route inside the right-modal navigator
///
/// Uses the same right modal the adapter emits, the first one at the top
/// level. Returns `None` when there is no right modal or it hosts no routes.
pub fn topmost_nested_modal_route(state: &NavigationState) -> Option<&Route> {
    deepest_nested_route(state.find_layer(Layer::RightModal)?)
}

/// Deepest route under `navigator`, following the last route at each level
pub fn deepest_nested_route(navigator: &Route) -> Option<&Route> {
    let mut current = navigator.last_child()?;
    while let Some(child) = current.last_child() {
        current = child;
    }
    Some(current)
}
