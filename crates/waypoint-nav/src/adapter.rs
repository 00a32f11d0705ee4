//! # State Adapter
//!
//! Reshapes a parsed route tree into the layered form the navigation runtime
//! expects: at most one bottom tab, then at most one central pane or full
//! screen, then at most one modal, with the modal always last.
//!
//! Adaptation runs in two steps. [`classify`] reduces the parsed top level to
//! a [`TopLevel`] case, and [`StateAdapter::plan`] turns that case into a list
//! of [`LayerOp`]s which are then built and indexed.

use tracing::{debug, warn};

use crate::errors::{NavError, Result};
use crate::linking::{LinkingOptions, PatternParser, RouteTreeParser};
use crate::mapping::MappingTables;
use crate::matching::{deepest_nested_route, StateMatcher, TabMatcher};
use crate::names::{screens, Layer};
use crate::navigators::{build_bottom_tab, build_central_pane, wrap_indexed};
use crate::policy::split_policy_id;
use crate::screen::ScreenSize;
use crate::state::{NavigationState, Route};

/// What the parsed top level holds, in classification priority order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TopLevel<'a> {
    /// A right modal, plus the screen it is showing if any
    RightModal {
        /// The right-modal navigator route
        modal: &'a Route,
        /// Deepest route inside it
        nested: Option<&'a Route>,
    },
    /// A left modal
    LeftModal(&'a Route),
    /// The full-screen settings navigator
    FullScreen(&'a Route),
    /// A central pane
    CentralPane(&'a Route),
    /// Only a bottom tab
    BottomTab,
    /// No layer root at all
    PassThrough,
}

impl TopLevel<'_> {
    /// Short label for logs
    pub fn label(&self) -> &'static str {
        match self {
            TopLevel::RightModal { .. } => "right_modal",
            TopLevel::LeftModal(_) => "left_modal",
            TopLevel::FullScreen(_) => "full_screen",
            TopLevel::CentralPane(_) => "central_pane",
            TopLevel::BottomTab => "bottom_tab",
            TopLevel::PassThrough => "pass_through",
        }
    }
}

/// Classify the top level of a parsed state
pub fn classify(state: &NavigationState) -> TopLevel<'_> {
    let found = Layer::all()
        .iter()
        .find_map(|layer| state.find_layer(*layer).map(|route| (*layer, route)));
    let Some((layer, route)) = found else {
        return TopLevel::PassThrough;
    };

    match layer {
        Layer::RightModal => TopLevel::RightModal {
            modal: route,
            nested: deepest_nested_route(route),
        },
        Layer::LeftModal => TopLevel::LeftModal(route),
        Layer::FullScreen => TopLevel::FullScreen(route),
        Layer::CentralPane => TopLevel::CentralPane(route),
        Layer::BottomTab => TopLevel::BottomTab,
    }
}

/// One top-level route of the adapted state
#[derive(Debug, Clone, PartialEq)]
pub enum LayerOp {
    /// Synthesize a bottom-tab navigator around `route`
    BottomTab {
        /// Tab destination
        route: Route,
        /// Policy id for the `Home` backstop
        policy_id: Option<String>,
    },
    /// Synthesize a central-pane navigator around `route`
    CentralPane(Route),
    /// Emit an already-built route as is
    Keep(Route),
}

impl LayerOp {
    /// Build the top-level route
    pub fn build(self) -> Route {
        match self {
            LayerOp::BottomTab { route, policy_id } => {
                build_bottom_tab(route, policy_id.as_deref())
            }
            LayerOp::CentralPane(route) => build_central_pane(route),
            LayerOp::Keep(route) => route,
        }
    }
}

/// How a parsed state is reshaped
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    /// Return the parsed state untouched
    Unchanged,
    /// Replace the top level with these layers, in order
    Layers(Vec<LayerOp>),
}

impl Plan {
    /// Apply to the state the plan was computed from
    pub fn apply(self, state: NavigationState) -> NavigationState {
        match self {
            Plan::Unchanged => state,
            Plan::Layers(ops) => wrap_indexed(ops.into_iter().map(LayerOp::build).collect()),
        }
    }
}

/// Turns paths into layered navigation states
///
/// Holds the immutable mapping tables, a route tree parser and a matcher.
/// Adapting never mutates the adapter, so one instance can serve concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct StateAdapter<P = PatternParser, M = TabMatcher> {
    tables: MappingTables,
    parser: P,
    matcher: M,
}

impl Default for StateAdapter {
    fn default() -> Self {
        Self::new(MappingTables::default())
    }
}

impl StateAdapter {
    /// Adapter over `tables` with the pattern parser and tab matcher
    pub fn new(tables: MappingTables) -> Self {
        let matcher = TabMatcher::new(tables.tab_to_central_pane.clone());
        Self {
            tables,
            parser: PatternParser,
            matcher,
        }
    }
}

impl<P, M> StateAdapter<P, M>
where
    P: RouteTreeParser,
    M: StateMatcher,
{
    /// Swap in another route tree parser
    pub fn with_parser<Q: RouteTreeParser>(self, parser: Q) -> StateAdapter<Q, M> {
        StateAdapter {
            tables: self.tables,
            parser,
            matcher: self.matcher,
        }
    }

    /// Swap in another matcher
    pub fn with_matcher<N: StateMatcher>(self, matcher: N) -> StateAdapter<P, N> {
        StateAdapter {
            tables: self.tables,
            parser: self.parser,
            matcher,
        }
    }

    /// The mapping tables in use
    pub fn tables(&self) -> &MappingTables {
        &self.tables
    }

    /// Parse `path` and reshape it for `screen_size`
    ///
    /// The policy segment is stripped before parsing and its id is handed to
    /// the `Home` backstop. Fails only when the bare path does not parse.
    pub fn adapt(
        &self,
        path: &str,
        options: &LinkingOptions,
        screen_size: ScreenSize,
    ) -> Result<NavigationState> {
        let (bare_path, policy_id) = split_policy_id(path);

        let Some(state) = self.parser.parse(&bare_path, options) else {
            warn!(path, bare_path = bare_path.as_str(), "unable to parse path");
            return Err(NavError::path_parse(bare_path));
        };

        Ok(self.adapt_state(state, policy_id.as_deref(), screen_size))
    }

    /// Reshape an already-parsed state
    pub fn adapt_state(
        &self,
        state: NavigationState,
        policy_id: Option<&str>,
        screen_size: ScreenSize,
    ) -> NavigationState {
        let plan = self.plan(&state, policy_id, screen_size);
        plan.apply(state)
    }

    /// Decide the top-level layers for `state`
    pub fn plan(
        &self,
        state: &NavigationState,
        policy_id: Option<&str>,
        screen_size: ScreenSize,
    ) -> Plan {
        let top_level = classify(state);
        debug!(
            case = top_level.label(),
            policy_id,
            small_screen = screen_size.is_small(),
            "adapting navigation state"
        );

        match top_level {
            TopLevel::RightModal { modal, nested } => {
                let mut ops = Vec::with_capacity(3);
                if let Some(nested) = nested {
                    let root = self.tables.resolve_root_route_for_modal_route(nested);
                    // A full-screen root has no central pane, so this lands on Home
                    let tab = self
                        .matcher
                        .match_bottom_tab(&wrap_indexed(vec![root.clone()]));
                    ops.push(LayerOp::BottomTab {
                        route: tab,
                        policy_id: None,
                    });
                    ops.push(LayerOp::Keep(root));
                }
                ops.push(LayerOp::Keep(modal.clone()));
                Plan::Layers(ops)
            }
            TopLevel::LeftModal(layer) | TopLevel::FullScreen(layer) => {
                let mut ops = vec![LayerOp::BottomTab {
                    route: Route::new(screens::HOME),
                    policy_id: policy_id.map(str::to_string),
                }];
                if !screen_size.is_small() {
                    ops.push(LayerOp::CentralPane(Route::new(screens::REPORT)));
                }
                ops.push(LayerOp::Keep(layer.clone()));
                Plan::Layers(ops)
            }
            TopLevel::CentralPane(central_pane) => Plan::Layers(vec![
                LayerOp::BottomTab {
                    route: self.matcher.match_bottom_tab(state),
                    policy_id: policy_id.map(str::to_string),
                },
                LayerOp::Keep(central_pane.clone()),
            ]),
            TopLevel::BottomTab => {
                if screen_size.is_small() {
                    return Plan::Unchanged;
                }
                let mut ops: Vec<LayerOp> =
                    state.routes.iter().cloned().map(LayerOp::Keep).collect();
                if let Some(central_pane) = self.matcher.match_central_pane(state) {
                    ops.push(LayerOp::CentralPane(central_pane));
                }
                Plan::Layers(ops)
            }
            TopLevel::PassThrough => Plan::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::navigators;

    fn top_names(state: &NavigationState) -> Vec<&str> {
        state.routes.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_classify_priority() {
        let state = wrap_indexed(vec![
            build_bottom_tab(Route::new(screens::HOME), None),
            build_central_pane(Route::new(screens::REPORT)),
            Route::new(navigators::LEFT_MODAL),
        ]);
        assert!(matches!(classify(&state), TopLevel::LeftModal(_)));

        let state = wrap_indexed(vec![build_bottom_tab(Route::new(screens::HOME), None)]);
        assert_eq!(classify(&state), TopLevel::BottomTab);

        let state = wrap_indexed(vec![Route::new("Landing")]);
        assert_eq!(classify(&state), TopLevel::PassThrough);
    }

    #[test]
    fn test_right_modal_without_nested_route() {
        let adapter = StateAdapter::default();
        let state = wrap_indexed(vec![Route::new(navigators::RIGHT_MODAL)]);
        let adapted = adapter.adapt_state(state, Some("P1"), ScreenSize::Large);
        assert_eq!(top_names(&adapted), vec![navigators::RIGHT_MODAL]);
        assert_eq!(adapted.index, 0);
    }

    #[test]
    fn test_bottom_tab_on_large_screen_without_match() {
        let adapter = StateAdapter::new(MappingTables::empty());
        let state = NavigationState {
            routes: vec![build_bottom_tab(Route::new(screens::HOME), None)],
            index: 0,
        };
        let adapted = adapter.adapt_state(state, None, ScreenSize::Large);
        assert_eq!(top_names(&adapted), vec![navigators::BOTTOM_TAB]);
    }

    #[test]
    fn test_plan_for_left_modal_small_screen() {
        let adapter = StateAdapter::default();
        let modal = Route::new(navigators::LEFT_MODAL);
        let state = wrap_indexed(vec![modal.clone()]);

        let plan = adapter.plan(&state, Some("P1"), ScreenSize::Small);
        assert_eq!(
            plan,
            Plan::Layers(vec![
                LayerOp::BottomTab {
                    route: Route::new(screens::HOME),
                    policy_id: Some("P1".to_string()),
                },
                LayerOp::Keep(modal),
            ])
        );
    }

    /// Matcher with fixed answers
    struct FixedMatcher;

    impl StateMatcher for FixedMatcher {
        fn match_bottom_tab(&self, _state: &NavigationState) -> Route {
            Route::new("Inbox_Tab")
        }

        fn match_central_pane(&self, _state: &NavigationState) -> Option<Route> {
            Some(Route::new("Inbox_Pane"))
        }
    }

    #[test]
    fn test_right_modal_backdrop_follows_emitted_modal() {
        let details = Route::new(navigators::RIGHT_MODAL).with_state(wrap_indexed(vec![
            Route::new("Report_Details")
                .with_state(wrap_indexed(vec![Route::new("Report_Details_Root")])),
        ]));
        let theme = Route::new(navigators::RIGHT_MODAL)
            .with_state(wrap_indexed(vec![Route::new("Settings_Theme")]));
        let state = wrap_indexed(vec![details.clone(), theme]);

        let adapted = StateAdapter::default().adapt_state(state, None, ScreenSize::Large);
        assert_eq!(
            top_names(&adapted),
            vec![navigators::BOTTOM_TAB, navigators::CENTRAL_PANE, navigators::RIGHT_MODAL]
        );
        assert_eq!(
            adapted.routes[1],
            build_central_pane(Route::new(screens::REPORT))
        );
        assert_eq!(adapted.routes[2], details);
    }

    #[test]
    fn test_injected_matcher_drives_companion_layers() {
        let tables = MappingTables::empty();
        let adapter = StateAdapter::new(tables.clone()).with_matcher(FixedMatcher);
        assert_eq!(adapter.tables(), &tables);

        let central = wrap_indexed(vec![build_central_pane(Route::new(screens::REPORT))]);
        let adapted = adapter.adapt_state(central, Some("P1"), ScreenSize::Small);
        assert_eq!(
            adapted.routes[0],
            build_bottom_tab(Route::new("Inbox_Tab"), Some("P1"))
        );

        let tab_only = wrap_indexed(vec![build_bottom_tab(Route::new(screens::HOME), None)]);
        let adapted = adapter.adapt_state(tab_only, None, ScreenSize::Large);
        assert_eq!(
            adapted.routes[1],
            build_central_pane(Route::new("Inbox_Pane"))
        );
    }

    #[test]
    fn test_custom_parser_failure_is_path_parse_error() {
        let adapter = StateAdapter::default()
            .with_parser(|_: &str, _: &LinkingOptions| -> Option<NavigationState> { None });
        let err = adapter
            .adapt("/w/P1/report/5", &LinkingOptions::default(), ScreenSize::Large)
            .unwrap_err();
        assert_eq!(err, NavError::path_parse("/report/5"));
    }
}
