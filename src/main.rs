use ratescribe::bot::{register_commands, run_dispatcher, Config, RateFetcher};

#[tokio::main]
pub async fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();
    log::info!("Starting RateScribe bot...");

    // Nothing talks to Telegram until the configuration is known to be complete.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("❌ {}", err);
            std::process::exit(1);
        }
    };

    let fetcher = match RateFetcher::new(&config.rates_url, config.request_timeout) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            log::error!("❌ Could not set up the rates client: {}", err);
            std::process::exit(1);
        }
    };

    let bot = teloxide::Bot::new(config.token);
    register_commands(&bot).await;

    log::info!("🚀 RateScribe bot started successfully!");

    run_dispatcher(bot, fetcher).await;
}
