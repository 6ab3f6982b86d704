use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod preview;
mod ui;

use commands::{export::ExportCommand, frame::FrameCommand};

/// Topshot CLI - top-down sprite snapshots for GameMaker: Studio
#[derive(Parser)]
#[command(
    name = "topshot",
    version = env!("CARGO_PKG_VERSION"),
    about = "Export top-down orthographic snapshots as GameMaker: Studio sprite assets",
    long_about = None,
    arg_required_else_help = true
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a scene's object as a sprite asset
    Export(ExportCommand),

    /// Preview the framing step without writing files
    Frame(FrameCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    colored::control::set_override(!cli.no_color);
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Export(cmd) => cmd.execute(),
        Commands::Frame(cmd) => cmd.execute(),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!("topshot_core={level},topshot_cli={level}"))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
