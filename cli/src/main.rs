mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use tabbar_icons_core::{materialize_icons, MaterializeConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut app_cfg = config::load().unwrap_or_else(|e| {
        tracing::warn!(error=%e, "Falling back to default config");
        config::AppConfig::default()
    });
    let dir = app_cfg.resolve_output_dir(cli.dir.as_deref());

    if cli.save_dir {
        app_cfg.output.directory = Some(dir.clone());
        config::store(&app_cfg)?;
        tracing::info!(directory=%dir.display(), "Output directory saved");
    }

    let report = materialize_icons(&MaterializeConfig::tabbar(&dir))
        .with_context(|| format!("Failed to create tab bar icons in {}", dir.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("TabBar icons created in {}", report.directory.display());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    run(Cli::parse())
}
