//! Request/query types (Deserialize)

use serde::Deserialize;
use weather_insights_core::{
    DEFAULT_HISTORY_LIMIT, DEFAULT_HISTORY_PAGE, Pagination, ValidationError,
};

#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl HistoryParams {
    /// Apply defaults and bounds.
    pub fn pagination(&self) -> Result<Pagination, ValidationError> {
        Pagination::new(
            self.page.unwrap_or(DEFAULT_HISTORY_PAGE),
            self.limit.unwrap_or(DEFAULT_HISTORY_LIMIT),
        )
    }
}
