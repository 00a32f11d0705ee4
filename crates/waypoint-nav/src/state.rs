//! Navigation tree types
//!
//! A [`NavigationState`] is an ordered list of [`Route`]s plus the index of
//! the active one. Navigator routes carry a nested state; leaf screens do not.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::names::Layer;

/// Scalar route parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean flag
    Bool(bool),
    /// Integral number
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Text, including every value captured from a path
    Text(String),
}

impl ParamValue {
    /// Borrow the text form, if this is a text parameter
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Integer(i) => write!(f, "{i}"),
            ParamValue::Float(x) => write!(f, "{x}"),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// Route parameters keyed by name
pub type Params = BTreeMap<String, ParamValue>;

/// A screen, or a navigator hosting nested routes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Screen or navigator name
    pub name: String,
    /// Route-specific scalar arguments
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: Params,
    /// Nested state, present only on navigators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<NavigationState>,
}

impl Route {
    /// Create a leaf route without parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Params::new(),
            state: None,
        }
    }

    /// Replace the parameter map
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Insert a single parameter
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Attach a nested state, turning this route into a navigator
    #[must_use]
    pub fn with_state(mut self, state: NavigationState) -> Self {
        self.state = Some(state);
        self
    }

    /// Look up a parameter
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// The layer this route is the root of, if any
    pub fn layer(&self) -> Option<Layer> {
        Layer::from_route_name(&self.name)
    }

    /// Whether this route is the root of `layer`
    pub fn is_layer(&self, layer: Layer) -> bool {
        self.name == layer.route_name()
    }

    /// Last route of the nested state
    pub fn last_child(&self) -> Option<&Route> {
        self.state.as_ref().and_then(|state| state.routes.last())
    }
}

/// Ordered routes plus the active index
///
/// `index` is `routes.len() - 1` for every state built by this crate, so an
/// empty state carries `-1`, meaning no route is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Routes, bottom of the stack first
    pub routes: Vec<Route>,
    /// Index of the active route
    pub index: isize,
}

impl NavigationState {
    /// Build a state whose active route is the last one
    pub fn from_routes(routes: Vec<Route>) -> Self {
        // Vec length never exceeds isize::MAX
        let index = routes.len() as isize - 1;
        Self { routes, index }
    }

    /// Whether the index points at the last route
    pub fn is_canonical(&self) -> bool {
        self.index == self.routes.len() as isize - 1
    }

    /// The active route, `None` when the index is out of range
    pub fn active_route(&self) -> Option<&Route> {
        usize::try_from(self.index)
            .ok()
            .and_then(|index| self.routes.get(index))
    }

    /// Last top-level route named `name`
    pub fn find_last(&self, name: &str) -> Option<&Route> {
        self.routes.iter().rev().find(|route| route.name == name)
    }

    /// First top-level route rooting `layer`
    pub fn find_layer(&self, layer: Layer) -> Option<&Route> {
        self.routes.iter().find(|route| route.is_layer(layer))
    }

    /// Route names along the active path, outermost first
    pub fn active_path(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut current = self.active_route();
        while let Some(route) = current {
            names.push(route.name.as_str());
            current = route.state.as_ref().and_then(NavigationState::active_route);
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_routes_indexes_last() {
        let state = NavigationState::from_routes(vec![Route::new("A"), Route::new("B")]);
        assert_eq!(state.index, 1);
        assert!(state.is_canonical());
        assert_eq!(state.active_route().map(|r| r.name.as_str()), Some("B"));
    }

    #[test]
    fn test_empty_state_has_no_active_route() {
        let state = NavigationState::from_routes(Vec::new());
        assert_eq!(state.index, -1);
        assert!(state.active_route().is_none());
        assert!(state.active_path().is_empty());
    }

    #[test]
    fn test_active_path_descends_nested_states() {
        let inner = NavigationState::from_routes(vec![Route::new("Leaf")]);
        let state = NavigationState::from_routes(vec![Route::new("Nav").with_state(inner)]);
        assert_eq!(state.active_path(), vec!["Nav", "Leaf"]);
    }

    #[test]
    fn test_params_serialize_untagged() {
        let route = Route::new("Report")
            .with_param("reportID", "5")
            .with_param("pinned", true);
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["params"]["reportID"], "5");
        assert_eq!(json["params"]["pinned"], true);
        assert!(json.get("state").is_none());
    }

    #[test]
    fn test_param_values_display_as_scalars() {
        let rendered: Vec<String> = [
            ParamValue::from("ABC123"),
            ParamValue::from(42_i64),
            ParamValue::from(false),
            ParamValue::Float(1.5),
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(rendered, vec!["ABC123", "42", "false", "1.5"]);
    }

    #[test]
    fn test_find_layer_returns_first_layer_root() {
        let first = Route::new(Layer::RightModal.route_name()).with_param("n", 1_i64);
        let second = Route::new(Layer::RightModal.route_name()).with_param("n", 2_i64);
        let state = NavigationState::from_routes(vec![Route::new("Landing"), first.clone(), second]);

        assert_eq!(state.find_layer(Layer::RightModal), Some(&first));
        assert!(first.is_layer(Layer::RightModal));
        assert!(!state.routes[0].is_layer(Layer::RightModal));
        assert!(state.find_layer(Layer::BottomTab).is_none());
    }

    #[test]
    fn test_empty_params_are_omitted() {
        let json = serde_json::to_string(&Route::new("Home")).unwrap();
        assert_eq!(json, r#"{"name":"Home"}"#);
    }
}
