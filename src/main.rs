use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod parsing;
mod quality;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("hts_utils=debug,info")
    } else {
        EnvFilter::new("hts_utils=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Encode(args) => {
            cli::quality::encode(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Decode(args) => {
            cli::quality::decode(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Region(args) => {
            cli::region::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
