//! Workspace policy segment handling
//!
//! Paths may embed the active workspace as `/w/<policyID>`. The segment is
//! pulled out before parsing so screen patterns never have to mention it.

use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)]
static POLICY_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/w/([a-zA-Z0-9]+)(/|$)").expect("policy segment pattern is valid")
});

/// Policy id embedded in `path`, if any
pub fn extract_policy_id(path: &str) -> Option<&str> {
    POLICY_SEGMENT
        .captures(path)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// `path` with its first policy segment replaced by `/`
pub fn strip_policy_id(path: &str) -> String {
    POLICY_SEGMENT.replace(path, "/").into_owned()
}

/// Split `path` into the bare path and the policy id it carried
pub fn split_policy_id(path: &str) -> (String, Option<String>) {
    (
        strip_policy_id(path),
        extract_policy_id(path).map(str::to_string),
    )
}
