use std::str::FromStr;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

use super::repo_types::NewProduct;

/// Request body for create and update. Every field is optional here so that
/// absence can be reported as a validation error instead of a parse error.
#[derive(Debug, Default, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub quantity: Option<i32>,
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub price: Option<f64>,
}

/// Accepts `10` as well as `"10"`; clients that post form values as strings
/// rely on it. `null` stays absent.
fn number_or_numeric_string<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: std::fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Number(T),
        Text(String),
    }

    match Option::<Raw<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => s.trim().parse::<T>().map(Some).map_err(D::Error::custom),
    }
}

impl ProductPayload {
    /// `name` and `sku` must be non-empty; `quantity` and `price` only need to
    /// be present, so zero is accepted.
    pub fn validate(self) -> Option<NewProduct> {
        let name = self.name.filter(|s| !s.is_empty())?;
        let sku = self.sku.filter(|s| !s.is_empty())?;
        Some(NewProduct {
            name,
            sku,
            quantity: self.quantity?,
            price: self.price?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
