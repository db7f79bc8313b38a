use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use weather_insights_core::AppConfig;
use weather_insights_http::AppState;

use super::build_service;

pub(crate) async fn run(config: &AppConfig, host: &str, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid listen address {host}:{port}"))?;

    let service = build_service(config).await?;
    let state = Arc::new(AppState::new(service));
    weather_insights_http::serve(state, addr).await
}
