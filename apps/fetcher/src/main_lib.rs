use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use stockle_core::equities::{EquityService, EquityServiceTrait};
use stockle_core::market_data::{MarketDataGateway, MarketDataGatewayTrait};
use stockle_core::puzzles::{DailyPuzzleOutcome, PuzzleService, PuzzleServiceTrait};
use stockle_core::utils::time_utils::market_date_today;
use stockle_market_data::YahooProvider;
use stockle_storage_sqlite::{
    create_pool, init, run_migrations, spawn_writer, EquityRepository, PuzzleRepository,
};

const BANNER_WIDTH: usize = 50;

pub struct AppState {
    pub equity_service: Arc<dyn EquityServiceTrait>,
    pub puzzle_service: Arc<dyn PuzzleServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("STOCKLE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(fmt::layer().with_target(false)).init();
    }
}

fn banner(title: &str) {
    info!("{}", "=".repeat(BANNER_WIDTH));
    info!("{}", title);
    info!("{}", "=".repeat(BANNER_WIDTH));
}

pub async fn build_state(config: &Config) -> anyhow::Result<AppState> {
    info!("Connecting to database...");
    let db_path = init(&config.db_path)?;
    let pool = create_pool(&db_path)?;
    run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone());
    info!("Connected to {}", db_path);

    let provider = Arc::new(YahooProvider::new()?);
    let gateway: Arc<dyn MarketDataGatewayTrait> = Arc::new(MarketDataGateway::new(provider));

    let equity_repository = Arc::new(EquityRepository::new(pool.clone(), writer.clone()));
    let puzzle_repository = Arc::new(PuzzleRepository::new(pool, writer));

    let equity_service = Arc::new(EquityService::new(equity_repository, gateway.clone()));
    let puzzle_service = Arc::new(
        PuzzleService::new(puzzle_repository, gateway).with_history_range(config.history_range),
    );

    Ok(AppState {
        equity_service,
        puzzle_service,
    })
}

/// Step 1 then step 2, awaited one after the other.
pub async fn run(config: &Config, state: &AppState) -> anyhow::Result<()> {
    banner("STEP 1: Updating equities table with latest data");
    let summary = state.equity_service.refresh_catalog(&config.tickers).await;
    if !summary.failed.is_empty() {
        warn!("Skipped tickers: {}", summary.failed.join(", "));
    }

    banner("STEP 2: Setting today's daily puzzle");
    let today = market_date_today();
    let mut rng = StdRng::from_entropy();
    match state
        .puzzle_service
        .create_daily_puzzle(today, &mut rng)
        .await?
    {
        DailyPuzzleOutcome::Created {
            ticker,
            bars,
            total_plays,
        } => info!(
            "Puzzle for {}: {} with {} bars and {} simulated plays",
            today, ticker, bars, total_plays
        ),
        DailyPuzzleOutcome::AlreadyExists { ticker } => {
            info!("Puzzle for {} was already set: {}", today, ticker)
        }
        DailyPuzzleOutcome::NoEligibleCandidates => {
            warn!("Error: No eligible stocks found! Puzzle for {} not set", today)
        }
    }

    banner("DONE!");
    Ok(())
}
