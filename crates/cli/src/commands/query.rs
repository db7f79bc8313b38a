//! One-shot commands that run a single operation and print pretty JSON.

use anyhow::{Context, Result};
use weather_insights_core::{AppConfig, Pagination, validate_city};
use weather_insights_http::PaginatedResponse;

use super::build_service;

fn checked_city(city: &str) -> Result<&str> {
    validate_city(city).with_context(|| format!("invalid city {city:?}"))?;
    Ok(city)
}

pub(crate) async fn current(config: &AppConfig, city: &str) -> Result<()> {
    let city = checked_city(city)?;
    let service = build_service(config).await?;
    let observation = service.get_current_weather(city).await?;
    println!("{}", serde_json::to_string_pretty(&observation)?);
    Ok(())
}

pub(crate) async fn summary(config: &AppConfig, city: &str) -> Result<()> {
    let city = checked_city(city)?;
    let service = build_service(config).await?;
    let summary = service.get_weekly_summary(city).await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

pub(crate) async fn history(config: &AppConfig, city: &str, page: u32, limit: u32) -> Result<()> {
    let city = checked_city(city)?;
    let pagination = Pagination::new(page, limit)?;
    let service = build_service(config).await?;
    let page = service.get_history(city, pagination).await?;
    let body = PaginatedResponse::from(page);
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
