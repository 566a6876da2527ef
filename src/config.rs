// src/config.rs
use log::warn;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "valuations.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    /// Reads `DCF_DB_PATH`, falling back to `valuations.db` in the working directory.
    /// Call `dotenv().ok()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        let db_path = env::var("DCF_DB_PATH").unwrap_or_else(|_| {
            warn!("$DCF_DB_PATH not set, defaulting to {}", DEFAULT_DB_PATH);
            DEFAULT_DB_PATH.to_string()
        });

        Config {
            db_path: PathBuf::from(db_path),
        }
    }
}
