//! Command implementations for the portfolio-ingest CLI
//!
//! Each command is implemented in its own module and returns
//! [`CommandStats`] for the closing summary.

pub mod check;
pub mod preview;
pub mod render;
pub mod shared;
pub mod stats;

pub use shared::CommandStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Dispatches to the subcommand handler:
/// - `preview`: list mapped entries
/// - `stats`: active/exit counts from CSV or a database export
/// - `render`: regenerate the static portfolio page
/// - `check`: validate entries against the admin input rules
pub async fn run(args: Args) -> Result<CommandStats> {
    match args.get_command()? {
        Commands::Preview(preview_args) => preview::run_preview(preview_args).await,
        Commands::Stats(stats_args) => stats::run_stats(stats_args).await,
        Commands::Render(render_args) => render::run_render(render_args).await,
        Commands::Check(check_args) => check::run_check(check_args).await,
    }
}
