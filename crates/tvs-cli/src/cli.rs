use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tvs",
    about = "Time-versioned object store — TTL expiry and point-in-time rollback",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Execute a JSON script of operation records against a fresh store
    Run(RunArgs),
    /// Run the built-in sample session
    Demo,
}

#[derive(Args)]
pub struct RunArgs {
    /// Path to a JSON array of string-array records,
    /// e.g. [["FILE_UPLOAD", "Cars.txt", "200kb"], ["FILE_GET", "Cars.txt"]]
    pub script: PathBuf,
}
