// src/bin/check_db.rs
use dcf_valuation::config::Config;
use dcf_valuation::handlers::report;
use dcf_valuation::services::db::DcfStore;
use dcf_valuation::BoxError;
use dotenv::dotenv;
use log::error;

async fn dump(config: &Config) -> Result<(), BoxError> {
    let mut store = DcfStore::open_existing(&config.db_path).await?;
    for row in store.all_results().await? {
        println!("{}", report::stored_row(&row));
    }
    store.close().await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    println!("\n--- Checking database ---");
    if let Err(e) = dump(&config).await {
        error!("Failed to read {}: {}", config.db_path.display(), e);
        println!("An error occurred: {}", e);
    }
    Ok(())
}
