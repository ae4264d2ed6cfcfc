use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tally", about = concat!("tally v", env!("CARGO_PKG_VERSION"), " - a to-do list in a text file"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// To-do file to use (overrides the config)
    #[arg(short = 'f', long, global = true)]
    pub file: Option<PathBuf>,

    /// Config file (default: ./tally.toml when present)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive command loop (the default)
    Repl,
    /// Full-screen window with an input field and a selectable list
    Tui,
    /// Serve a read-only web page of the list
    Web(WebArgs),
    /// Print the list and exit
    List(ListArgs),
}

#[derive(Args)]
pub struct WebArgs {
    /// Address to listen on (default from config: 127.0.0.1:8501)
    #[arg(long)]
    pub bind: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
