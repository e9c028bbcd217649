use clap::Parser;
use colored::Colorize;
use std::error::Error;
use subnet_calc::cli::Cli;
use subnet_calc::config::{log_config_path, Config};
use subnet_calc::logging::init_logging;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging(&log_config_path())?;
    let config = Config::from_env();
    //
    log::info!("#Start main()");

    let cli = Cli::parse();
    match subnet_calc::run(&cli, &config) {
        Ok(facts) => log::info!("#End main() {}", facts.cidr),
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "error:".red());
            std::process::exit(1);
        }
    }

    Ok(())
}
