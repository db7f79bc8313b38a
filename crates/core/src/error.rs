use thiserror::Error;

use crate::constants::{CITY_MAX_LEN, CITY_MIN_LEN, MAX_HISTORY_LIMIT};

/// Rejections produced by boundary validation of caller input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("City name is required")]
    EmptyCity,

    #[error("City name must be at least {CITY_MIN_LEN} characters long")]
    CityTooShort,

    #[error("City name must be at most {CITY_MAX_LEN} characters long")]
    CityTooLong,

    #[error("City name must contain only letters, spaces and hyphens")]
    InvalidCityCharacters,

    #[error("page must not be less than 1")]
    PageOutOfRange,

    #[error("limit must be between 1 and {MAX_HISTORY_LIMIT}")]
    LimitOutOfRange,
}
