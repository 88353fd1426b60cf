//! Clap adapter for the `tfvars-merge` binary.
//!
//! Every flag is optional. Invoked bare, the binary merges the variable files
//! in the current directory into `00-all.auto.tfvars.json` and prints a
//! summary. The only bridges to the core are [`Cli::overrides()`], which
//! turns flags into a settings layer, and [`Cli::builder()`].

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::Level;

use crate::builder::{Merger, MergerBuilder};
use crate::settings::Overrides;

/// Merge *.auto.tfvars and *.auto.tfvars.json files into one JSON file.
///
/// HCL files are merged first, then JSON files, each group in name order;
/// later files win on conflicting keys.
#[derive(Debug, Parser)]
#[command(name = "tfvars-merge", version)]
pub struct Cli {
    /// Directory holding the variable files (default: current directory).
    #[arg(short = 'C', long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Name of the merged file written into the directory.
    #[arg(short, long, value_name = "NAME")]
    pub output: Option<String>,

    /// Pretty-print the merged JSON.
    #[arg(long)]
    pub pretty: bool,

    /// Print the merged JSON instead of writing the output file.
    #[arg(long)]
    pub dry_run: bool,

    /// Print a commented settings file template and exit.
    #[arg(long)]
    pub print_template: bool,

    /// Log more (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Settings layer for the flags that were actually given.
    pub fn overrides(&self) -> Overrides {
        Overrides::new()
            .set("output", self.output.clone())
            .set("pretty", self.pretty.then_some(true))
    }

    pub fn builder(&self) -> MergerBuilder {
        let builder = Merger::builder()
            .overrides(self.overrides())
            .dry_run(self.dry_run);
        match &self.dir {
            Some(dir) => builder.dir(dir.clone()),
            None => builder,
        }
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}
