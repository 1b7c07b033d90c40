mod action;
mod app;
mod app_state;
mod component;
mod components;
mod focus;
mod nav;
mod theme;
mod widgets;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use holonet_proto::config::{Config, StyleSetting};
use holonet_proto::payload::DetailTransport;
use holonet_proto::platform;

/// Terminal browser for the Star Wars API: planets, films and spaceships.
#[derive(Debug, Parser)]
#[command(name = "holonet", version)]
struct Args {
    /// Navigation style: tabs, drawer or auto (platform default).
    #[arg(long)]
    style: Option<StyleSetting>,

    /// API root, e.g. https://swapi.dev/api/
    #[arg(long)]
    base_url: Option<String>,

    /// Hand records to the detail screen through a serialized route.
    #[arg(long)]
    serialized_detail: bool,

    /// Probe the API host alongside every fetch.
    #[arg(long, conflicts_with = "no_network_check")]
    network_check: bool,

    /// Never probe the API host.
    #[arg(long)]
    no_network_check: bool,

    /// Screen to open first: planets, films or spaceships.
    #[arg(long, value_name = "NAME")]
    screen: Option<String>,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let data_dir = platform::data_dir();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating {}", data_dir.display()))?;
    let log_path = platform::log_path();

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    // Allow RUST_LOG override; default to debug for app code but suppress noisy
    // connection-level DEBUG from HTTP client internals (hyper_util, reqwest).
    let log_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "debug,hyper_util=warn,reqwest=warn,hyper=warn".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    // Print log path to stderr so the operator can tail it immediately.
    eprintln!("holonet log: {}", log_path.display());

    tracing::info!("holonet starting…");

    // ── Load config ──────────────────────────────────────────────────────────
    let loaded = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("config unreadable, using defaults: {}", e);
        Config::default()
    });

    if let Some(style) = args.style {
        config.ui.presentation = style;
    }
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }
    if args.serialized_detail {
        config.ui.detail_transport = DetailTransport::Serialized;
    }
    if args.network_check {
        config.network.check_reachability = true;
    }
    if args.no_network_check {
        config.network.check_reachability = false;
    }

    let style = config.ui.presentation.resolve();
    tracing::info!(
        "api={} style={:?} transport={:?} reachability_check={}",
        config.api.base_url,
        style,
        config.ui.detail_transport,
        config.network.check_reachability
    );

    let mut app = app::App::new(&config, style)?;
    if let Some(name) = &args.screen {
        match app.state.nav.screen_by_name(name) {
            Some(kind) => {
                app.state.nav.show(kind);
            }
            None => eprintln!("unknown screen '{name}', starting on {}", app.state.nav.active_screen()),
        }
    }
    app.run().await
}
