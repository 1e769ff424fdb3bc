use clap::Parser;
use tracing_subscriber::EnvFilter;

use default_reference::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("default_reference=debug,info")
    } else {
        EnvFilter::new("default_reference=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Locate(args) => {
            let locator = cli::locator(cli.root)?;
            cli::locate::run(&args, &locator, cli.format)?;
        }
        cli::Commands::Mask => {
            cli::mask::run(cli.format, cli.verbose)?;
        }
        cli::Commands::List(args) => {
            let locator = cli::locator(cli.root)?;
            cli::list::run(&args, &locator, cli.format, cli.verbose)?;
        }
        cli::Commands::Checksum(args) => {
            cli::checksum::run(&args, cli.format, cli.verbose)?;
        }
        cli::Commands::FilterAlignment(args) => {
            cli::filter::run(&args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
