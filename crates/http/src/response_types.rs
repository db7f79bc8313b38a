//! Response types (Serialize)

use serde::Serialize;
use weather_insights_core::{HistoryPage, WeatherObservation};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse {
    pub data: Vec<WeatherObservation>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

impl From<HistoryPage> for PaginatedResponse {
    fn from(page: HistoryPage) -> Self {
        let total_pages = page.total_pages();
        Self { data: page.data, total: page.total, page: page.page, limit: page.limit, total_pages }
    }
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}
