use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "session-desk")]
#[clap(about = "Training-session dashboard for coordinators and trainers", long_about = None)]
pub struct Cli {
    /// Account used to sign in to the sessions backend
    #[clap(short, long, global = true, env = "SESSION_DESK_EMAIL")]
    pub email: Option<String>,

    /// Use this configuration file instead of ~/session-desk/config.toml
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
