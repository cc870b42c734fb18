//! Development server for the coworking dashboard UI
//!
//! Runs the mock API with a seeded sample dataset. The store's clock starts
//! mocked so seed bookings land around "now", then follows real time so the
//! dashboard's "right now" figures stay current.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use jiff::Timestamp;
use std::time::Duration;
use test_helpers::mock::DevDataset;
use tokio::time::interval;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = mock_api::telemetry::get_subscriber("info".into());
    mock_api::telemetry::init_subscriber(subscriber);

    info!("🚀 Starting coworking dashboard development server");

    let app = test_helpers::spawn_app().await;
    info!("✅ Mock API running on http://127.0.0.1:{}", app.port);

    info!("📊 Seeding development data...");
    let dataset = DevDataset::create(&app).await?;

    start_time_sync_task(&app);

    info!("🎯 Development server ready!");
    info!("   API: http://127.0.0.1:{}", app.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        app.port
    );
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}

/// Keep the mocked clock in step with real time.
fn start_time_sync_task(app: &test_helpers::TestApp) {
    let time_source = app.time_source.clone();

    tokio::spawn(async move {
        let mut interval = interval(Duration::from_secs(1));
        loop {
            interval.tick().await;
            time_source.set(Timestamp::now());
        }
    });
}
