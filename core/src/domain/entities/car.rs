//! Car entity stored in the `cars` collection.

use serde::{Deserialize, Serialize};

/// A car document.
///
/// Field names on the wire are capitalised (`Brand`, `Model`, `Year`,
/// `Color`); lowercase names are accepted on input and missing fields fall
/// back to empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    #[serde(rename = "Brand", alias = "brand", default)]
    pub brand: String,

    #[serde(rename = "Model", alias = "model", default)]
    pub model: String,

    #[serde(rename = "Year", alias = "year", default)]
    pub year: i64,

    #[serde(rename = "Color", alias = "color", default)]
    pub color: String,
}

impl Car {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
            color: color.into(),
        }
    }
}
