pub mod category;
pub mod complete;
pub mod init;
pub mod list;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod stats;
pub mod tracker;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create, edit, pin, and delete trackers")]
    Tracker(tracker::TrackerArgs),
    #[command(about = "Manage categories")]
    Category(category::CategoryArgs),
    #[command(about = "Show the filtered tracker list")]
    List(list::ListArgs),
    #[command(about = "Mark a tracker complete for a date")]
    Done(complete::DoneArgs),
    #[command(about = "Remove a completion mark")]
    Undone(complete::UndoneArgs),
    #[command(about = "Show completion statistics")]
    Stats,
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Tracker(args) => tracker::cmd(args),
            Commands::Category(args) => category::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Done(args) => complete::done(args),
            Commands::Undone(args) => complete::undone(args),
            Commands::Stats => stats::cmd(),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
