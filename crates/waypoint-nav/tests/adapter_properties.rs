#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Property-Based Tests for State Adaptation
//!
//! ## Properties Verified
//!
//! - Every adapted state is canonical: `index` points at the last route
//! - Top-level layers never go backwards: tab, then pane, then modal
//! - Root-route resolution answers for any modal name and keeps its params
//! - The bottom tab always seeds `Home` first
//! - States without a layer root pass through untouched

use proptest::prelude::*;
use waypoint_nav::names::{navigators, params, screens};
use waypoint_nav::{
    build_bottom_tab, extract_policy_id, wrap_indexed, Layer, LinkingOptions, MappingTables,
    NavigationState, ParamValue, Route, ScreenSize, StateAdapter,
};

// ============================================================================
// Strategies
// ============================================================================

fn arb_id() -> impl Strategy<Value = String> {
    "[0-9]{1,6}"
}

fn arb_policy_id() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z0-9]{1,10}")
}

fn arb_screen_size() -> impl Strategy<Value = ScreenSize> {
    any::<bool>().prop_map(ScreenSize::from)
}

/// Paths the built-in linking options are known to parse
fn arb_bare_path() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/home".to_string()),
        Just("/search".to_string()),
        Just("/find".to_string()),
        Just("/workspace-switcher".to_string()),
        Just("/details".to_string()),
        Just("/settings".to_string()),
        arb_id().prop_map(|id| format!("/report/{id}")),
        (arb_id(), arb_id()).prop_map(|(r, a)| format!("/report/{r}/{a}")),
        "[a-z]{1,8}".prop_map(|q| format!("/search/{q}")),
        ("[a-z]{1,8}", arb_id()).prop_map(|(q, r)| format!("/search/{q}/view/{r}")),
        (
            arb_id(),
            prop::sample::select(vec!["details", "participants", "settings", "description"])
        )
            .prop_map(|(r, page)| format!("/report/{r}/{page}")),
        (arb_id(), arb_id()).prop_map(|(r, t)| format!("/report/{r}/edit/{t}")),
        prop::sample::select(vec!["profile", "preferences", "security", "wallet", "about"])
            .prop_map(|page| format!("/settings/{page}")),
        prop::sample::select(vec![
            "profile/display-name",
            "profile/timezone",
            "preferences/theme",
            "security/close-account",
        ])
        .prop_map(|page| format!("/settings/{page}")),
    ]
}

fn with_policy(path: &str, policy_id: Option<&str>) -> String {
    match policy_id {
        Some(id) => format!("/w/{id}{path}"),
        None => path.to_string(),
    }
}

fn layer_rank(route: &Route) -> u8 {
    match route.layer() {
        Some(Layer::BottomTab) => 0,
        Some(Layer::CentralPane | Layer::FullScreen) => 1,
        Some(Layer::LeftModal | Layer::RightModal) => 2,
        None => u8::MAX,
    }
}

fn all_canonical(state: &NavigationState) -> bool {
    state.is_canonical()
        && state
            .routes
            .iter()
            .filter_map(|route| route.state.as_ref())
            .all(all_canonical)
}

// ============================================================================
// Adaptation
// ============================================================================

proptest! {
    /// Property: adapted states are canonical at every depth
    #[test]
    fn prop_adapted_state_is_canonical(
        path in arb_bare_path(),
        policy_id in arb_policy_id(),
        screen_size in arb_screen_size()
    ) {
        let full_path = with_policy(&path, policy_id.as_deref());
        let state = StateAdapter::default()
            .adapt(&full_path, &LinkingOptions::default(), screen_size)
            .unwrap();

        prop_assert!(!state.routes.is_empty(), "adapted state must not be empty");
        prop_assert!(all_canonical(&state), "index must point at the last route: {:?}", state);
    }

    /// Property: layers are ordered and each appears at most once
    #[test]
    fn prop_layers_are_ordered(
        path in arb_bare_path(),
        policy_id in arb_policy_id(),
        screen_size in arb_screen_size()
    ) {
        let full_path = with_policy(&path, policy_id.as_deref());
        let state = StateAdapter::default()
            .adapt(&full_path, &LinkingOptions::default(), screen_size)
            .unwrap();

        let ranks: Vec<u8> = state.routes.iter().map(layer_rank).collect();
        prop_assert!(
            ranks.windows(2).all(|pair| pair[0] < pair[1]),
            "layers out of order for {}: {:?}",
            full_path,
            ranks
        );
        prop_assert_eq!(
            state.routes.first().map(|r| r.name.as_str()),
            Some(navigators::BOTTOM_TAB),
            "bottom tab must come first"
        );
    }

    /// Property: only right modals drop the policy id
    #[test]
    fn prop_policy_id_reaches_home_unless_right_modal(
        path in arb_bare_path(),
        policy_id in "[a-zA-Z0-9]{1,10}",
        screen_size in arb_screen_size()
    ) {
        let full_path = with_policy(&path, Some(policy_id.as_str()));
        let state = StateAdapter::default()
            .adapt(&full_path, &LinkingOptions::default(), screen_size)
            .unwrap();

        // Tab-only paths keep the parsed tab navigator as is
        prop_assume!(path != "/home" && path != "/search");

        let has_right_modal = state.find_layer(Layer::RightModal).is_some();
        let home = state.routes[0].state.as_ref().unwrap().routes[0].clone();
        prop_assert_eq!(home.name.as_str(), screens::HOME);

        if has_right_modal {
            prop_assert!(home.param(params::POLICY_ID).is_none(), "right modal must not carry a policy id");
        } else {
            prop_assert_eq!(
                home.param(params::POLICY_ID),
                Some(&ParamValue::from(policy_id.as_str())),
                "policy id must reach Home"
            );
        }
    }

    /// Property: adaptation is deterministic
    #[test]
    fn prop_adaptation_is_deterministic(
        path in arb_bare_path(),
        policy_id in arb_policy_id(),
        screen_size in arb_screen_size()
    ) {
        let full_path = with_policy(&path, policy_id.as_deref());
        let adapter = StateAdapter::default();
        let options = LinkingOptions::default();
        prop_assert_eq!(
            adapter.adapt(&full_path, &options, screen_size),
            adapter.adapt(&full_path, &options, screen_size)
        );
    }
}

// ============================================================================
// Building blocks
// ============================================================================

proptest! {
    /// Property: root-route resolution is total and keeps params
    #[test]
    fn prop_resolver_is_total(name in "[A-Za-z_]{1,24}", value in "[a-z0-9]{0,8}") {
        let modal = Route::new(name).with_param("reportID", value.as_str());
        let root = MappingTables::default().resolve_root_route_for_modal_route(&modal);

        let layer = root.layer();
        prop_assert!(
            matches!(layer, Some(Layer::CentralPane | Layer::FullScreen)),
            "root must be a central pane or full screen, got {:?}",
            layer
        );

        let mut leaf = &root;
        while let Some(child) = leaf.last_child() {
            leaf = child;
        }
        prop_assert_eq!(&leaf.params, &modal.params);
    }

    /// Property: Home is always the first tab
    #[test]
    fn prop_bottom_tab_seeds_home(
        name in "[A-Za-z_]{1,16}",
        policy_id in arb_policy_id()
    ) {
        let tab = build_bottom_tab(Route::new(name.as_str()), policy_id.as_deref());
        let state = tab.state.as_ref().unwrap();

        prop_assert_eq!(state.routes[0].name.as_str(), screens::HOME);
        prop_assert!(state.is_canonical());
        let expected_len = if name == screens::HOME { 1 } else { 2 };
        prop_assert_eq!(state.routes.len(), expected_len);
        prop_assert_eq!(
            state.routes[0].param(params::POLICY_ID).and_then(ParamValue::as_str),
            policy_id.as_deref()
        );
    }

    /// Property: states without a layer root pass through
    #[test]
    fn prop_non_layer_states_pass_through(
        names in prop::collection::vec("[a-z]{1,12}", 1..5),
        policy_id in arb_policy_id(),
        screen_size in arb_screen_size()
    ) {
        let state = wrap_indexed(names.into_iter().map(Route::new).collect());
        let adapted = StateAdapter::default()
            .adapt_state(state.clone(), policy_id.as_deref(), screen_size);
        prop_assert_eq!(adapted, state);
    }

    /// Property: the policy segment is found wherever it sits first
    #[test]
    fn prop_policy_id_is_extracted(id in "[a-zA-Z0-9]{1,12}", rest in "(/[a-z]{1,6}){0,3}") {
        let path = format!("/w/{id}{rest}");
        prop_assert_eq!(extract_policy_id(&path), Some(id.as_str()));
    }
}
