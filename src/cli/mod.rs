pub mod bench;
pub mod fetch;
pub mod scaffold;

use std::path::PathBuf;

use clap::Args;
use tracing_subscriber::EnvFilter;

use crate::models::ProjectLayout;

/// Where the solutions project lives.
#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
    /// Root of the solutions project
    #[arg(long, env = "AOC_ROOT", default_value = ".")]
    pub root: PathBuf,
}

impl ProjectArgs {
    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::new(&self.root)
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();
}
