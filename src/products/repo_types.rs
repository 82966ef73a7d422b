use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Product row as stored in `products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,       // assigned by the store
    pub name: String,
    pub sku: String,
    pub quantity: i32,
    pub price: f64,    // NUMERIC column, read back as float8
}

/// The four mutable fields, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub quantity: i32,
    pub price: f64,
}

#[cfg(test)]
impl NewProduct {
    pub fn into_product(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            sku: self.sku,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

/// Ordering applied by the list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    Id,
    Name,
}
