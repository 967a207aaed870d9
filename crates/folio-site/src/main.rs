//! Entry point for the portfolio site.
//!
//! Loads the site configuration, sets up logging and opens the page in a
//! Dioxus desktop window behind the loading splash.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use folio_logging::{FolioSubscriberBuilder, LogConfig};
use folio_site::components::App;
use folio_site::error::SiteResult;
use folio_site::site_config::SiteConfig;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Resolved site configuration, set once before launch.
static SITE: OnceLock<SiteConfig> = OnceLock::new();

/// Whether the splash is bypassed.
static SKIP_SPLASH: OnceLock<bool> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Single-page portfolio with an animated loading splash")]
struct Args {
    /// Path to a TOML site config (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the splash progress duration in milliseconds
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Show the page immediately without the splash
    #[arg(long)]
    no_splash: bool,

    /// Verbose pretty console logging
    #[arg(short, long, conflicts_with = "log_dir")]
    verbose: bool,

    /// Write JSONL logs to this directory instead of the console
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Override the default log level
    #[arg(long)]
    log_level: Option<String>,

    /// Emit JSONL on the console instead of pretty output
    #[arg(long)]
    json_logs: bool,
}

fn resolve_site(args: &Args) -> SiteResult<SiteConfig> {
    let mut site = match &args.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };

    if let Some(ms) = args.duration_ms {
        site.splash.duration_ms = ms;
    }

    let targets = std::mem::take(&mut site.log.targets);
    if args.verbose {
        site.log = LogConfig::development();
    } else if let Some(dir) = &args.log_dir {
        site.log = LogConfig::production(dir.clone());
    }
    site.log.targets.extend(targets);

    if let Some(level) = &args.log_level {
        site.log.default_level = level.clone();
    }
    if args.json_logs {
        site.log.console.pretty = false;
    }

    site.validate()?;
    Ok(site)
}

fn run(args: Args) -> SiteResult<()> {
    let site = resolve_site(&args)?;

    // Keep the guard alive so buffered file output is flushed on exit
    let _log_guard = FolioSubscriberBuilder::new()
        .with_config(site.log.clone())
        .init()?;

    tracing::info!(
        brand = %site.brand,
        sections = site.sections.len(),
        splash_ms = site.splash.duration_ms,
        skip_splash = args.no_splash,
        "Starting Folio"
    );

    let title = format!("{} - {}", site.brand, site.role);
    SITE.set(site).ok();
    SKIP_SPLASH.set(args.no_splash).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(title)
                        .with_inner_size(LogicalSize::new(1280, 860)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;800&display=swap" rel="stylesheet">
                    <style>{}</style>
                    <style>{}</style>
                    "#,
                    folio_ui::SHARED_CSS,
                    STYLES_CSS
                )),
        )
        .launch(RootApp);

    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The subscriber may not exist yet
            eprintln!("folio: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Root component reading the launch-time globals.
#[component]
fn RootApp() -> Element {
    let site = SITE.get().cloned().unwrap_or_default();
    let skip_splash = SKIP_SPLASH.get().copied().unwrap_or(false);

    use_drop(|| tracing::info!("Shutting down Folio"));

    rsx! {
        App { site, skip_splash }
    }
}
