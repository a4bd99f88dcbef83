//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rustgdb")]
#[command(about = "Persistent, relocatable GDB breakpoints for cargo workspaces")]
#[command(version)]
pub struct Cli {
    /// Directory inside the workspace (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Configuration file (defaults to rustgdb.json in the workspace root)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Line locator overriding the configured one (exact, hash, jaccard)
    #[arg(long, global = true, env = "RUSTGDB_LINE_LOCATOR")]
    pub locator: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// A breakpoint location given on the command line
#[derive(Args, Debug, Clone)]
pub struct BreakpointArgs {
    /// Source file
    pub file: PathBuf,

    /// 1-based line
    pub line: usize,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List restored breakpoints at their current lines
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Add a breakpoint
    Add(BreakpointArgs),

    /// Remove a breakpoint
    Remove(BreakpointArgs),

    /// Add the breakpoint if absent, remove it if present
    Toggle(BreakpointArgs),

    /// Remove every breakpoint
    Clear,

    /// Report how each saved breakpoint resolves against the files on disk
    Check {
        /// Print JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Show the workspace root and its packages
    Workspace,

    /// Build and list the executables cargo produced
    Artifacts {
        /// Arguments passed to cargo (default: build)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        cargo_args: Vec<String>,
    },

    /// List the available line locators
    Locators,
}
