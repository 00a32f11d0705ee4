//! `waypoint check-config` and `waypoint default-config`

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use waypoint_nav::NavigationConfig;

/// Load, validate and describe the configuration at `path`
///
/// A missing file is reported as the built-in configuration.
pub fn check_report(path: &Path) -> Result<String> {
    let config = NavigationConfig::load_or_default(path)
        .with_context(|| format!("Invalid configuration {}", path.display()))?;
    let overlaps = config
        .validate()
        .with_context(|| format!("Invalid configuration {}", path.display()))?;

    let mut report = String::new();
    let source = if path.exists() {
        path.display().to_string()
    } else {
        "built-in defaults".to_string()
    };
    writeln!(report, "Configuration: {source}")?;
    writeln!(
        report,
        "  small screen breakpoint: {}px",
        config.small_screen_breakpoint
    )?;
    writeln!(report, "  linking patterns: {}", config.linking.pattern_count())?;
    writeln!(
        report,
        "  central pane -> modal entries: {}",
        config.mappings.central_pane_to_modal.len()
    )?;
    writeln!(
        report,
        "  full screen -> modal entries: {}",
        config.mappings.full_screen_to_modal.len()
    )?;
    writeln!(
        report,
        "  bottom tab -> central pane entries: {}",
        config.mappings.tab_to_central_pane.len()
    )?;

    if overlaps.is_empty() {
        writeln!(report, "No overlapping modal mappings")?;
    } else {
        writeln!(report, "Overlapping modal mappings ({}):", overlaps.len())?;
        for overlap in &overlaps {
            writeln!(report, "  {overlap}")?;
        }
    }
    Ok(report)
}

/// Handle `waypoint check-config`
pub fn check(path: &Path) -> Result<()> {
    print!("{}", check_report(path)?);
    Ok(())
}

/// Handle `waypoint default-config`
pub fn print_default() -> Result<()> {
    let text = NavigationConfig::default().to_toml_string()?;
    print!("{text}");
    Ok(())
}
