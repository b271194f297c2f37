mod config;
mod main_lib;
mod tickers;

use config::Config;
use main_lib::{build_state, init_tracing, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("Error: {}", e);
        e
    })?;
    let state = build_state(&config).await?;
    run(&config, &state).await
}
