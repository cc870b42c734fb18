use mock_api::{
    AppState, Config, build,
    telemetry::{get_subscriber, init_subscriber},
    time::TimeSource,
};

/// Coworking dashboard mock API server
///
/// Serves an empty in-memory store. Use the dev-server crate instead for a
/// store seeded with sample data.
///
/// Environment variables can be set directly or loaded from a .env file in
/// the project root:
/// - IP_ADDRESS: Server bind address (defaults to 127.0.0.1)
/// - PORT: Server port (defaults to 8000)
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin, or a comma-separated
///   list)
///
/// Example:
/// IP_ADDRESS=127.0.0.1 PORT=8000 ALLOWED_ORIGINS=* cargo run -p mock-api
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // silently ignored if the file doesn't exist
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber);

    let mut config = Config::from_env()?;

    #[cfg(not(feature = "mock-time"))]
    let time_source = TimeSource::new();
    #[cfg(feature = "mock-time")]
    let time_source = TimeSource::new(jiff::Timestamp::now());

    let server = build(&mut config, AppState::new(time_source))?;
    tracing::info!("listening on http://{}:{}", config.ip, config.port);
    server.await?;
    Ok(())
}
