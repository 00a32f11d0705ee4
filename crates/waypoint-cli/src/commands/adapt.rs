//! `waypoint adapt`: print the layered state for a path

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use waypoint_nav::{NavigationConfig, ScreenSize};

/// Arguments for `waypoint adapt`
#[derive(Debug, Clone, Args)]
pub struct AdaptArgs {
    /// Path to adapt, e.g. `/w/ABC123/report/5`
    pub path: String,

    /// Shape the state for a small screen
    #[arg(long, conflicts_with = "width")]
    pub small: bool,

    /// Window width in pixels, classified against the configured breakpoint
    #[arg(long)]
    pub width: Option<u32>,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

impl AdaptArgs {
    /// Screen size selected by the flags
    pub fn screen_size(&self, config: &NavigationConfig) -> ScreenSize {
        match self.width {
            Some(width) => config.screen_size_for_width(width),
            None => ScreenSize::from(self.small),
        }
    }
}

/// Adapt the path and serialize the state as JSON
pub fn render(args: &AdaptArgs, config: &NavigationConfig) -> Result<String> {
    let screen_size = args.screen_size(config);
    let state = config
        .adapter()
        .adapt(&args.path, &config.linking, screen_size)
        .with_context(|| format!("Failed to adapt {}", args.path))?;

    info!(
        path = args.path.as_str(),
        layers = state.routes.len(),
        small_screen = screen_size.is_small(),
        "adapted path"
    );

    let json = if args.compact {
        serde_json::to_string(&state)?
    } else {
        serde_json::to_string_pretty(&state)?
    };
    Ok(json)
}

/// Handle `waypoint adapt`
pub fn run(args: &AdaptArgs, config: &NavigationConfig) -> Result<()> {
    println!("{}", render(args, config)?);
    Ok(())
}
