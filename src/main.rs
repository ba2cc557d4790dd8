use clap::Parser;
use std::error::Error;
use std::io;
use subnet_merge::config::{Cli, Config};
use subnet_merge::logging::init_logging;
use subnet_merge::merge_network_file;
use subnet_merge::output::write_networks;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_cli(Cli::parse());
    init_logging(&config.log_config)?;
    log::info!("#Start main() {}", config.input.display());

    let report = merge_network_file(&config.input)?;
    write_networks(io::stdout().lock(), &report.networks, config.format)?;

    if config.stats {
        eprintln!(
            "# merged {} networks into {} ({} passes)",
            report.input_count,
            report.networks.len(),
            report.stats.passes
        );
    }

    Ok(())
}
