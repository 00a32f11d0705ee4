//! # Mapping Tables and Root-Route Resolution
//!
//! Modal screens open on top of a backdrop. The tables here say which
//! central-pane or full-screen destination a modal belongs to, and which
//! central pane a bottom tab shows on wide layouts.
//!
//! Tables are ordered; lookups scan entries in order and the first match wins.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::names::screens;
use crate::navigators::{build_central_pane, build_full_screen};
use crate::state::Route;

const DEFAULT_CENTRAL_PANE_TO_MODAL: &[(&str, &[&str])] = &[
    (
        "Report",
        &[
            "Report_Details_Root",
            "Report_Participants_Root",
            "Report_Settings_Root",
            "Report_Description_Root",
            "Money_Request_Edit",
        ],
    ),
    (
        "Search_Central_Pane",
        &["Search_Report_RHP", "Search_Advanced_Filters"],
    ),
];

const DEFAULT_FULL_SCREEN_TO_MODAL: &[(&str, &[&str])] = &[
    (
        "Settings_Profile",
        &[
            "Settings_Display_Name",
            "Settings_Pronouns",
            "Settings_Timezone",
            "Settings_Contact_Methods",
        ],
    ),
    (
        "Settings_Preferences",
        &["Settings_Language", "Settings_Theme", "Settings_Priority_Mode"],
    ),
    (
        "Settings_Security",
        &["Settings_Two_Factor_Auth", "Settings_Close"],
    ),
    (
        "Settings_Wallet",
        &["Settings_Wallet_Card_Activate", "Settings_Add_Bank_Account"],
    ),
];

const DEFAULT_TAB_TO_CENTRAL_PANE: &[(&str, &[&str])] = &[
    ("Home", &["Report"]),
    ("Search_Bottom_Tab", &["Search_Central_Pane"]),
];

/// Ordered table from a destination screen to the screens resolving to it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteMapping(IndexMap<String, Vec<String>>);

impl RouteMapping {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from static entries, keeping their order
    pub fn from_entries(entries: &[(&str, &[&str])]) -> Self {
        entries
            .iter()
            .map(|(key, names)| (*key, names.iter().copied()))
            .collect()
    }

    /// Append or replace an entry
    pub fn insert<I, S>(&mut self, key: impl Into<String>, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .insert(key.into(), names.into_iter().map(Into::into).collect());
    }

    /// First key, in table order, whose set contains `name`
    pub fn key_for(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, names)| names.iter().any(|n| n == name))
            .map(|(key, _)| key.as_str())
    }

    /// Names listed under `key`
    pub fn names_for(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Entries in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(key, names)| (key.as_str(), names.as_slice()))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, I, S> FromIterator<(K, I)> for RouteMapping
where
    K: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut mapping = RouteMapping::new();
        for (key, names) in iter {
            mapping.insert(key, names);
        }
        mapping
    }
}

/// Which modal table an entry lives in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalTable {
    /// Central-pane destinations
    CentralPane,
    /// Full-screen destinations
    FullScreen,
}

impl fmt::Display for ModalTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModalTable::CentralPane => f.write_str("central_pane_to_modal"),
            ModalTable::FullScreen => f.write_str("full_screen_to_modal"),
        }
    }
}

/// A modal screen claimed by more than one destination
///
/// Resolution is order dependent when this happens: the first claimant wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalOverlap {
    /// The modal screen name
    pub modal_route: String,
    /// Every `(table, destination)` listing it, in lookup order
    pub claimants: Vec<(ModalTable, String)>,
}

impl ModalOverlap {
    /// The destination resolution actually picks
    pub fn winner(&self) -> Option<&(ModalTable, String)> {
        self.claimants.first()
    }
}

impl fmt::Display for ModalOverlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let claimants: Vec<String> = self
            .claimants
            .iter()
            .map(|(table, key)| format!("{table}.{key}"))
            .collect();
        write!(
            f,
            "{} is claimed by {}",
            self.modal_route,
            claimants.join(", ")
        )
    }
}

/// The immutable lookup tables injected into the adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingTables {
    /// Central-pane screen → modal screens that resolve back to it
    pub central_pane_to_modal: RouteMapping,
    /// Full-screen destination → modal screens that resolve back to it
    pub full_screen_to_modal: RouteMapping,
    /// Bottom-tab screen → central-pane screens it shows
    pub tab_to_central_pane: RouteMapping,
}

impl Default for MappingTables {
    fn default() -> Self {
        Self {
            central_pane_to_modal: RouteMapping::from_entries(DEFAULT_CENTRAL_PANE_TO_MODAL),
            full_screen_to_modal: RouteMapping::from_entries(DEFAULT_FULL_SCREEN_TO_MODAL),
            tab_to_central_pane: RouteMapping::from_entries(DEFAULT_TAB_TO_CENTRAL_PANE),
        }
    }
}

impl MappingTables {
    /// Tables with no entries; every modal falls back to the report backdrop
    pub fn empty() -> Self {
        Self {
            central_pane_to_modal: RouteMapping::new(),
            full_screen_to_modal: RouteMapping::new(),
            tab_to_central_pane: RouteMapping::new(),
        }
    }

    /// Resolve the backdrop navigator for a modal screen
    ///
    /// Returns a central-pane navigator when the central-pane table lists
    /// `route.name`, else a full-screen navigator when the full-screen table
    /// does, else a central-pane navigator on the report screen. The modal's
    /// params are carried over in every case.
    pub fn resolve_root_route_for_modal_route(&self, route: &Route) -> Route {
        if let Some(central_pane) = self.central_pane_to_modal.key_for(&route.name) {
            return build_central_pane(
                Route::new(central_pane).with_params(route.params.clone()),
            );
        }

        if let Some(full_screen) = self.full_screen_to_modal.key_for(&route.name) {
            return build_full_screen(Route::new(full_screen).with_params(route.params.clone()));
        }

        build_central_pane(Route::new(screens::REPORT).with_params(route.params.clone()))
    }

    /// Modal screens listed under more than one destination
    pub fn overlaps(&self) -> Vec<ModalOverlap> {
        let mut claims: IndexMap<&str, Vec<(ModalTable, String)>> = IndexMap::new();
        let tables = [
            (ModalTable::CentralPane, &self.central_pane_to_modal),
            (ModalTable::FullScreen, &self.full_screen_to_modal),
        ];

        for (table, mapping) in tables {
            for (key, names) in mapping.iter() {
                for name in names {
                    claims
                        .entry(name.as_str())
                        .or_default()
                        .push((table, key.to_string()));
                }
            }
        }

        claims
            .into_iter()
            .filter(|(_, claimants)| claimants.len() > 1)
            .map(|(modal_route, claimants)| ModalOverlap {
                modal_route: modal_route.to_string(),
                claimants,
            })
            .collect()
    }
}
