use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use travelguide::{GuideConfig, TravelGuide, web};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GuideConfig::from_env()?;
    let guide = Arc::new(TravelGuide::from_config(&config));

    web::run(guide, config.port).await;
    Ok(())
}
