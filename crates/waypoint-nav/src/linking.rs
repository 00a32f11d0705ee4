//! # Linking Options and Route Tree Parsing
//!
//! Linking options map screen names to path patterns, nested the same way
//! navigators nest screens. The parser flattens them into a list of pattern
//! configs, orders them by specificity, and builds a nested
//! [`NavigationState`] along the route-name chain of the first match.
//!
//! ## Patterns
//!
//! - `report` matches the literal segment
//! - `:reportID` captures one segment, `:reportActionID?` may be absent
//! - `*` matches whatever remains and must be the last segment
//!
//! A navigator's `path` prefixes its children unless a child sets `exact`.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::errors::{NavError, Result};
use crate::names::{navigators, screens};
use crate::navigators::wrap_indexed;
use crate::state::{NavigationState, Params, Route};

/// Parses a path into a generic nested route tree
pub trait RouteTreeParser {
    /// Parse `path`, returning `None` when no configured screen matches
    fn parse(&self, path: &str, options: &LinkingOptions) -> Option<NavigationState>;
}

impl<F> RouteTreeParser for F
where
    F: Fn(&str, &LinkingOptions) -> Option<NavigationState>,
{
    fn parse(&self, path: &str, options: &LinkingOptions) -> Option<NavigationState> {
        self(path, options)
    }
}

/// Linking configuration for one screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScreenConfig {
    /// Leaf screen reachable at this pattern
    Path(String),
    /// Navigator, or a leaf needing `exact`
    Nested(NestedConfig),
}

/// Linking configuration for a navigator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NestedConfig {
    /// Pattern for the navigator itself, prefixing its children
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Ignore the parent prefix
    #[serde(default)]
    pub exact: bool,
    /// Route placed beneath whichever child the path selects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_route_name: Option<String>,
    /// Child screens
    #[serde(default)]
    pub screens: IndexMap<String, ScreenConfig>,
}

impl NestedConfig {
    /// Navigator config without a path of its own
    pub fn with_screens<I, K>(screens: I) -> Self
    where
        I: IntoIterator<Item = (K, ScreenConfig)>,
        K: Into<String>,
    {
        Self {
            screens: screens
                .into_iter()
                .map(|(name, config)| (name.into(), config))
                .collect(),
            ..Self::default()
        }
    }

    /// Set the initial route name
    #[must_use]
    pub fn with_initial_route(mut self, name: impl Into<String>) -> Self {
        self.initial_route_name = Some(name.into());
        self
    }
}

/// Parser options: the root of the screen → pattern tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkingOptions {
    /// Route placed beneath the matched top-level route
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_route_name: Option<String>,
    /// Top-level screens, normally the layer navigators
    #[serde(default)]
    pub screens: IndexMap<String, ScreenConfig>,
}

impl Default for LinkingOptions {
    fn default() -> Self {
        builtin_linking()
    }
}

impl LinkingOptions {
    /// Options with no screens; every path fails to parse
    pub fn empty() -> Self {
        Self {
            initial_route_name: None,
            screens: IndexMap::new(),
        }
    }

    /// Check every pattern compiles
    pub fn validate(&self) -> Result<()> {
        flatten(self).map(|_| ())
    }

    /// Number of screens reachable by a pattern
    pub fn pattern_count(&self) -> usize {
        flatten_lossy(self).len()
    }
}

/// Default parser over [`LinkingOptions`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternParser;

impl RouteTreeParser for PatternParser {
    fn parse(&self, path: &str, options: &LinkingOptions) -> Option<NavigationState> {
        get_state_from_path(path, options)
    }
}

/// Parse `path` against `options`
///
/// Patterns that fail to compile are skipped with a warning; use
/// [`LinkingOptions::validate`] to reject them up front.
pub fn get_state_from_path(path: &str, options: &LinkingOptions) -> Option<NavigationState> {
    let (path_part, query) = split_query(path);
    let segments: Vec<String> = path_part
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(decode_segment)
        .collect();

    let mut configs = flatten_lossy(options);
    configs.sort_by(compare_specificity);

    for config in &configs {
        let Some(captured) = match_segments(&config.segments, &segments) else {
            continue;
        };
        trace!(
            path,
            pattern = config.pattern.as_str(),
            screen = config.route_names.last().map(String::as_str),
            "matched linking pattern"
        );

        let mut params = Params::new();
        for (key, value) in captured {
            params.insert(key, value.into());
        }
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            params.insert(key.into_owned(), value.into_owned().into());
        }

        return Some(build_state(config, options, params));
    }

    trace!(path, "no linking pattern matched");
    None
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param { name: String, optional: bool },
    Wildcard,
}

impl Segment {
    fn rank(&self) -> u8 {
        match self {
            Segment::Static(_) => 0,
            Segment::Param {
                optional: false, ..
            } => 1,
            Segment::Param { optional: true, .. } => 2,
            Segment::Wildcard => 3,
        }
    }
}

#[derive(Debug, Clone)]
struct PatternConfig {
    pattern: String,
    segments: Vec<Segment>,
    route_names: Vec<String>,
    /// `initial_route_name` of every navigator along `route_names`, minus the leaf
    initial_routes: Vec<Option<String>>,
}

fn split_query(path: &str) -> (&str, &str) {
    let without_fragment = path.split('#').next().unwrap_or_default();
    match without_fragment.split_once('?') {
        Some((path, query)) => (path, query),
        None => (without_fragment, ""),
    }
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

fn join_patterns(parent: &str, child: &str) -> String {
    let parent = parent.trim_matches('/');
    let child = child.trim_matches('/');
    match (parent.is_empty(), child.is_empty()) {
        (true, _) => child.to_string(),
        (false, true) => parent.to_string(),
        (false, false) => format!("{parent}/{child}"),
    }
}

fn compile_pattern(screen: &str, pattern: &str) -> Result<Vec<Segment>> {
    let raw: Vec<&str> = pattern
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();
    let last = raw.len().saturating_sub(1);

    raw.iter()
        .enumerate()
        .map(|(position, &segment)| {
            if segment == "*" {
                if position != last {
                    return Err(NavError::invalid_pattern(
                        screen,
                        pattern,
                        "wildcard must be the last segment",
                    ));
                }
                return Ok(Segment::Wildcard);
            }
            match segment.strip_prefix(':') {
                Some(param) => {
                    let optional = param.ends_with('?');
                    let name = param.trim_end_matches('?');
                    if name.is_empty() {
                        return Err(NavError::invalid_pattern(
                            screen,
                            pattern,
                            "empty parameter name",
                        ));
                    }
                    Ok(Segment::Param {
                        name: name.to_string(),
                        optional,
                    })
                }
                None if segment.contains(['?', ':']) => Err(NavError::invalid_pattern(
                    screen,
                    pattern,
                    format!("unexpected marker in segment '{segment}'"),
                )),
                None => Ok(Segment::Static(segment.to_string())),
            }
        })
        .collect()
}

struct Flattener {
    configs: Vec<PatternConfig>,
    errors: Vec<NavError>,
}

impl Flattener {
    fn push(
        &mut self,
        screen: &str,
        pattern: String,
        route_names: Vec<String>,
        initial_routes: Vec<Option<String>>,
    ) {
        match compile_pattern(screen, &pattern) {
            Ok(segments) => self.configs.push(PatternConfig {
                pattern,
                segments,
                route_names,
                initial_routes,
            }),
            Err(err) => self.errors.push(err),
        }
    }

    fn visit(
        &mut self,
        screen: &str,
        config: &ScreenConfig,
        parent_pattern: &str,
        parent_names: &[String],
        parent_initials: &[Option<String>],
    ) {
        let mut route_names = parent_names.to_vec();
        route_names.push(screen.to_string());

        match config {
            ScreenConfig::Path(path) => {
                let pattern = join_patterns(parent_pattern, path);
                self.push(screen, pattern, route_names, parent_initials.to_vec());
            }
            ScreenConfig::Nested(nested) => {
                let own_pattern = match (&nested.path, nested.exact) {
                    (Some(path), true) => path.trim_matches('/').to_string(),
                    (Some(path), false) => join_patterns(parent_pattern, path),
                    (None, _) => parent_pattern.to_string(),
                };

                if nested.path.is_some() {
                    self.push(
                        screen,
                        own_pattern.clone(),
                        route_names.clone(),
                        parent_initials.to_vec(),
                    );
                }

                let mut initials = parent_initials.to_vec();
                initials.push(nested.initial_route_name.clone());
                for (child, child_config) in &nested.screens {
                    self.visit(child, child_config, &own_pattern, &route_names, &initials);
                }
            }
        }
    }
}

fn collect(options: &LinkingOptions) -> Flattener {
    let mut flattener = Flattener {
        configs: Vec::new(),
        errors: Vec::new(),
    };
    let root_initials = [options.initial_route_name.clone()];
    for (screen, config) in &options.screens {
        flattener.visit(screen, config, "", &[], &root_initials);
    }
    flattener
}

fn flatten(options: &LinkingOptions) -> Result<Vec<PatternConfig>> {
    let mut flattener = collect(options);
    if flattener.errors.is_empty() {
        Ok(flattener.configs)
    } else {
        Err(flattener.errors.remove(0))
    }
}

fn flatten_lossy(options: &LinkingOptions) -> Vec<PatternConfig> {
    let flattener = collect(options);
    for err in &flattener.errors {
        warn!(error = %err, "skipping linking pattern");
    }
    flattener.configs
}

/// More specific patterns sort first
fn compare_specificity(a: &PatternConfig, b: &PatternConfig) -> Ordering {
    for (left, right) in a.segments.iter().zip(&b.segments) {
        match left.rank().cmp(&right.rank()) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    b.segments
        .len()
        .cmp(&a.segments.len())
        .then_with(|| b.route_names.len().cmp(&a.route_names.len()))
}

fn match_segments(pattern: &[Segment], path: &[String]) -> Option<Vec<(String, String)>> {
    let Some((first, rest)) = pattern.split_first() else {
        return path.is_empty().then(Vec::new);
    };

    match first {
        Segment::Wildcard => Some(Vec::new()),
        Segment::Static(expected) => match path.split_first() {
            Some((segment, remaining)) if segment == expected => match_segments(rest, remaining),
            _ => None,
        },
        Segment::Param { name, optional } => {
            if let Some((segment, remaining)) = path.split_first() {
                if let Some(mut captured) = match_segments(rest, remaining) {
                    captured.insert(0, (name.clone(), segment.clone()));
                    return Some(captured);
                }
            }
            if *optional {
                match_segments(rest, path)
            } else {
                None
            }
        }
    }
}

fn build_state(config: &PatternConfig, options: &LinkingOptions, params: Params) -> NavigationState {
    let mut names = config.route_names.iter().rev();
    let leaf = names.next().cloned().unwrap_or_default();
    let mut route = Route::new(leaf).with_params(params);

    // initial_routes[0] belongs to the root; [i] belongs to route_names[i - 1]
    let depth = config.route_names.len();
    for (offset, navigator) in names.enumerate() {
        let level = depth - 1 - offset;
        let initial = config.initial_routes.get(level).cloned().flatten();
        route = Route::new(navigator.clone()).with_state(with_initial(initial, route));
    }

    let root_initial = options.initial_route_name.clone();
    with_initial(root_initial, route)
}

fn with_initial(initial: Option<String>, route: Route) -> NavigationState {
    match initial {
        Some(initial) if initial != route.name => {
            wrap_indexed(vec![Route::new(initial), route])
        }
        _ => wrap_indexed(vec![route]),
    }
}

fn leaf(pattern: &str) -> ScreenConfig {
    ScreenConfig::Path(pattern.to_string())
}

fn navigator<'a>(screens: impl IntoIterator<Item = (&'a str, ScreenConfig)>) -> ScreenConfig {
    ScreenConfig::Nested(NestedConfig::with_screens(screens))
}

/// Built-in linking configuration for the app's screens
pub fn builtin_linking() -> LinkingOptions {
    let bottom_tab = navigator([("Home", leaf("home")), ("Search_Bottom_Tab", leaf("search"))]);

    let central_pane = navigator([
        (screens::REPORT, leaf("report/:reportID?/:reportActionID?")),
        ("Search_Central_Pane", leaf("search/:query")),
    ]);

    let settings_detail = navigator([
        ("Settings_Profile", leaf("settings/profile")),
        ("Settings_Preferences", leaf("settings/preferences")),
        ("Settings_Security", leaf("settings/security")),
        ("Settings_Wallet", leaf("settings/wallet")),
        ("Settings_About", leaf("settings/about")),
    ]);
    let full_screen = ScreenConfig::Nested(
        NestedConfig::with_screens([
            (screens::SETTINGS_ROOT, leaf("settings")),
            (screens::SETTINGS_CENTRAL_PANE, settings_detail),
        ])
        .with_initial_route(screens::SETTINGS_ROOT),
    );

    let left_modal = navigator([
        ("Search", navigator([("Search_Root", leaf("find"))])),
        (
            "Workspace_Switcher",
            navigator([("Workspace_Switcher_Root", leaf("workspace-switcher"))]),
        ),
    ]);

    let right_modal = navigator([
        (
            "Report_Details",
            navigator([("Report_Details_Root", leaf("report/:reportID/details"))]),
        ),
        (
            "Report_Participants",
            navigator([(
                "Report_Participants_Root",
                leaf("report/:reportID/participants"),
            )]),
        ),
        (
            "Report_Settings",
            navigator([("Report_Settings_Root", leaf("report/:reportID/settings"))]),
        ),
        (
            "Report_Description",
            navigator([(
                "Report_Description_Root",
                leaf("report/:reportID/description"),
            )]),
        ),
        (
            "Money_Request",
            navigator([(
                "Money_Request_Edit",
                leaf("report/:reportID/edit/:transactionID"),
            )]),
        ),
        (
            "Search_Report",
            navigator([("Search_Report_RHP", leaf("search/:query/view/:reportID"))]),
        ),
        (
            "Settings",
            navigator([
                ("Settings_Display_Name", leaf("settings/profile/display-name")),
                ("Settings_Pronouns", leaf("settings/profile/pronouns")),
                ("Settings_Timezone", leaf("settings/profile/timezone")),
                ("Settings_Contact_Methods", leaf("settings/profile/contact-methods")),
                ("Settings_Language", leaf("settings/preferences/language")),
                ("Settings_Theme", leaf("settings/preferences/theme")),
                ("Settings_Priority_Mode", leaf("settings/preferences/priority-mode")),
                ("Settings_Two_Factor_Auth", leaf("settings/security/two-factor-auth")),
                ("Settings_Close", leaf("settings/security/close-account")),
            ]),
        ),
        ("Details", navigator([("Details_Root", leaf("details"))])),
    ]);

    LinkingOptions {
        initial_route_name: None,
        screens: [
            (navigators::BOTTOM_TAB, bottom_tab),
            (navigators::CENTRAL_PANE, central_pane),
            (navigators::FULL_SCREEN, full_screen),
            (navigators::LEFT_MODAL, left_modal),
            (navigators::RIGHT_MODAL, right_modal),
        ]
        .into_iter()
        .map(|(name, config)| (name.to_string(), config))
        .collect(),
    }
}
