//! Service layer for weather-insights
//!
//! Cache-aside orchestration between the HTTP surface and the cache, history
//! store and weather provider.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod aggregate;
mod error;
mod weather_service;

pub use aggregate::{round2, summarize};
pub use error::ServiceError;
pub use weather_service::WeatherService;
