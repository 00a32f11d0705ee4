//! # Navigator Synthesizers
//!
//! Pure builders for each navigation layer. Every state produced here is
//! appended to, never inserted into, so `index` always points at the last
//! route.

use crate::names::{navigators, params, screens};
use crate::state::{NavigationState, Route};

/// Wrap routes in the canonical container shape
///
/// Callers pass a non-empty list. An empty list yields `index == -1`, which
/// consumers treat as "no active route".
pub fn wrap_indexed(routes: Vec<Route>) -> NavigationState {
    NavigationState::from_routes(routes)
}

/// Build the bottom-tab navigator
///
/// `Home` is always seeded first as a backstop and carries the policy id.
/// Any other tab destination is appended after it and becomes active.
pub fn build_bottom_tab(route: Route, policy_id: Option<&str>) -> Route {
    let mut home = Route::new(screens::HOME);
    if let Some(policy_id) = policy_id {
        home = home.with_param(params::POLICY_ID, policy_id);
    }

    let mut routes = vec![home];
    if route.name != screens::HOME {
        routes.push(route);
    }

    Route::new(navigators::BOTTOM_TAB).with_state(wrap_indexed(routes))
}

/// Build a central-pane navigator holding `route` alone
pub fn build_central_pane(route: Route) -> Route {
    Route::new(navigators::CENTRAL_PANE).with_state(wrap_indexed(vec![route]))
}

/// Build the full-screen settings navigator
///
/// The settings app keeps its own root underneath a detail pane, and `route`
/// is the single screen of that pane.
pub fn build_full_screen(route: Route) -> Route {
    let detail =
        Route::new(screens::SETTINGS_CENTRAL_PANE).with_state(wrap_indexed(vec![route]));
    let routes = vec![Route::new(screens::SETTINGS_ROOT), detail];

    Route::new(navigators::FULL_SCREEN).with_state(wrap_indexed(routes))
}
