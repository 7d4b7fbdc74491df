use clap::Parser;
use miette::Result;
use squat_sim::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    match args.action {
        Commands::Solve(opts) => opts.solve()?,
        Commands::Sweep(opts) => opts.sweep()?,
        Commands::Interactive(opts) => opts.interactive()?,
    }

    Ok(())
}
