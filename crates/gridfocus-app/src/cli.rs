use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// gridfocus: focus or create editor groups on a fixed 2x2 grid.
#[derive(Parser, Debug)]
#[command(name = "gridfocus", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. `gridfocus=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run steps against a simulated editor. A step is a slot name
    /// (top-left, bottom-left, top-right, bottom-right) or `close:<id>`.
    Run {
        #[arg(required = true)]
        steps: Vec<String>,

        /// Read-backs before a replaced layout becomes visible.
        #[arg(long, default_value_t = 0)]
        apply_lag: u32,
    },
    /// Resolve accelerators through the configured keybinds, then run them.
    Keys {
        #[arg(required = true)]
        keys: Vec<String>,

        #[arg(long, default_value_t = 0)]
        apply_lag: u32,
    },
    /// Print every layout kind with its tree and canonical mapping.
    Layouts,
}

pub fn parse() -> Args {
    Args::parse()
}
