use anyhow::Result;
use chrono::Local;
use dotenv::dotenv;
use log::info;
use std::io;

use dcf_valuation::config::Config;
use dcf_valuation::handlers::prompt::Prompter;
use dcf_valuation::handlers::valuation;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();
    info!("Logger initialized. Starting DCF valuation...");

    let config = Config::from_env();
    info!("Using result store: {}", config.db_path.display());

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let outcome = valuation::run(&mut prompter, &config, Local::now().date_naive()).await?;
    info!(
        "Run for {} finished (saved: {})",
        outcome.result.ticker, outcome.saved
    );
    Ok(())
}
