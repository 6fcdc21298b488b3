use serde::{Deserialize, Serialize};

use super::{lenient_amount, require_amount, require_text, Record};
use crate::error::Result;

/// Inventory line keyed by SKU.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub category: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub quantity: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub unit_price: f64,
}

impl Product {
    /// Stock value at unit price.
    pub fn value(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

impl Record for Product {
    const ENTITY: &'static str = "product";

    fn key(&self) -> &str {
        &self.sku
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.sku.as_str(), self.name.as_str(), self.category.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn validate(&self) -> Result<()> {
        require_text(Self::ENTITY, &self.sku, "sku", &self.sku)?;
        require_text(Self::ENTITY, &self.sku, "name", &self.name)?;
        require_text(Self::ENTITY, &self.sku, "category", &self.category)?;
        require_amount(Self::ENTITY, &self.sku, "quantity", self.quantity)?;
        require_amount(Self::ENTITY, &self.sku, "unit_price", self.unit_price)
    }
}
