//! Waypoint Nav - layered navigation state from URL paths
//!
//! The app shows up to four layers at once: a bottom tab bar, a central pane
//! (or the full-screen settings app) beside it, and a left or right modal on
//! top. A deep link only names the innermost screen, so this crate rebuilds
//! the surrounding layers from static tables.
//!
//! # Pipeline
//!
//! 1. [`policy`]: pull the `/w/<policyID>` segment out of the path
//! 2. [`linking`]: parse the bare path into a generic nested route tree
//! 3. [`adapter`]: classify the top level and compose the canonical layers,
//!    using [`mapping`] to find modal backdrops and [`matching`] to pair tabs
//!    with central panes
//!
//! ```ignore
//! use waypoint_nav::{LinkingOptions, ScreenSize, StateAdapter};
//!
//! let adapter = StateAdapter::default();
//! let state = adapter.adapt("/w/ABC123/report/5", &LinkingOptions::default(), ScreenSize::Large)?;
//! assert_eq!(state.index, state.routes.len() as isize - 1);
//! ```

#![forbid(unsafe_code)]

/// Path → layered navigation state orchestration
pub mod adapter;

/// TOML-backed configuration
pub mod config;

/// Unified error handling
pub mod errors;

/// Linking options and the route tree parser
pub mod linking;

/// Modal and tab lookup tables, root-route resolution
pub mod mapping;

/// Companion-layer matchers
pub mod matching;

/// Navigator and screen names
pub mod names;

/// Navigator synthesizers
pub mod navigators;

/// Policy segment stripping
pub mod policy;

/// Screen-size classification
pub mod screen;

/// Route and state tree types
pub mod state;

pub use adapter::{classify, LayerOp, Plan, StateAdapter, TopLevel};
pub use config::NavigationConfig;
pub use errors::{NavError, Result};
pub use linking::{get_state_from_path, LinkingOptions, PatternParser, RouteTreeParser, ScreenConfig};
pub use mapping::{MappingTables, ModalOverlap, RouteMapping};
pub use matching::{deepest_nested_route, topmost_nested_modal_route, StateMatcher, TabMatcher};
pub use names::Layer;
pub use navigators::{build_bottom_tab, build_central_pane, build_full_screen, wrap_indexed};
pub use policy::{extract_policy_id, strip_policy_id};
pub use screen::ScreenSize;
pub use state::{NavigationState, ParamValue, Params, Route};
