use network_planner::cli::{self, CommandLine};
use network_planner::config::LOG_CONFIG_FILE;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let commands = CommandLine::parse_args();

    if let Err(e) = log4rs::init_file(LOG_CONFIG_FILE, Default::default()) {
        eprintln!("Logging not initialised from {LOG_CONFIG_FILE}: {e}");
    }
    log::info!("#Start main()");

    cli::run(commands).await
}
