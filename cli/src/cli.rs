//! Command-line arguments for the icon materializer.

use clap::Parser;
use std::path::PathBuf;

/// tabbar-icons - write the tab bar icon set to disk
#[derive(Parser, Debug)]
#[command(name = "tabbar-icons")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output directory (overrides the stored config)
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Remember the effective output directory for later runs
    #[arg(long)]
    pub save_dir: bool,

    /// Print the materialization report as JSON
    #[arg(long)]
    pub json: bool,
}
