use serde::{Deserialize, Serialize};
use validator::Validate;

use fleet_core::domain::entities::car::Car;

/// Body of `POST /car` and `PUT /car/{id}`
///
/// Accepts the capitalised field names the API returns as well as
/// lowercase ones. Missing fields default to empty values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CarRequest {
    #[serde(rename = "Brand", alias = "brand", default)]
    #[validate(length(max = 255))]
    pub brand: String,

    #[serde(rename = "Model", alias = "model", default)]
    #[validate(length(max = 255))]
    pub model: String,

    /// Model year; 0 when unknown
    #[serde(rename = "Year", alias = "year", default)]
    #[validate(range(min = 0, max = 9999))]
    pub year: i64,

    #[serde(rename = "Color", alias = "color", default)]
    #[validate(length(max = 255))]
    pub color: String,
}

impl From<CarRequest> for Car {
    fn from(request: CarRequest) -> Self {
        Car {
            brand: request.brand,
            model: request.model,
            year: request.year,
            color: request.color,
        }
    }
}
