//! Core types and helpers for weather-insights
//!
//! This crate contains domain types shared across all other crates.

mod city;
pub mod constants;
mod env_config;
mod error;
mod observation;

pub use city::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use observation::*;
