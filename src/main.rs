use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tfvars_merge::{Cli, generate_template};

fn main() {
    let cli = Cli::parse();

    // Level comes from -v only; RUST_LOG is not read.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::default().add_directive(cli.log_level().into()))
        .try_init();

    if cli.print_template {
        print!("{}", generate_template());
        return;
    }

    let merger = cli.builder().build().unwrap_or_else(|e| {
        eprintln!("Failed to prepare merge:\n{e}");
        std::process::exit(1);
    });

    if let Err(e) = merger.run_and_print() {
        eprintln!("Merge failed:\n{e}");
        std::process::exit(1);
    }
}
