//! # Domain Types
//!
//! Core domain types used throughout the catalog engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ProductInput   │   │   ProductData   │   │    Product      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  raw form text  │──►│  validated,     │──►│  + id (store)   │       │
//! │  │  (all String)   │   │  typed fields   │   │                 │       │
//! │  └─────────────────┘   └────────┬────────┘   └────────▲────────┘       │
//! │        validator ▲              │                     │ merge          │
//! │                                 ▼                     │                │
//! │                        ┌─────────────────┐            │                │
//! │                        │  ProductPatch   │────────────┘                │
//! │                        │  Option fields  │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is assigned by the record store and never changes afterwards.
//! Nothing outside the store constructs a `Product` with a fresh id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;

/// Record identifier assigned by the store (`max + 1`, starting at 1).
pub type ProductId = u32;

// =============================================================================
// Product
// =============================================================================

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique, immutable identifier.
    pub id: ProductId,

    /// Display name. Stored trimmed, never empty.
    pub name: String,

    /// Unit price in cents. Never negative.
    pub price: Money,

    /// Free-form category label (the shell offers a fixed list).
    pub category: String,

    /// Units on hand.
    pub stock: u32,

    /// Optional long text; empty when not given.
    pub description: String,
}

// =============================================================================
// Product Data
// =============================================================================

/// A fully validated product without an id.
///
/// Produced by [`crate::validation::parse_product`]; consumed by the store's
/// `add` (new record) or turned into a [`ProductPatch`] for `update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub name: String,
    pub price: Money,
    pub category: String,
    pub stock: u32,
    pub description: String,
}

impl ProductData {
    /// Attaches a store-assigned id.
    pub(crate) fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
            stock: self.stock,
            description: self.description,
        }
    }
}

// =============================================================================
// Product Patch
// =============================================================================

/// A partial update. `None` fields keep the record's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub description: Option<String>,
}

impl ProductPatch {
    /// Merges the present fields over `product`. The id is never touched.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
    }

    /// Returns true if the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.stock.is_none()
            && self.description.is_none()
    }
}

/// A submitted form replaces every field it carries.
impl From<ProductData> for ProductPatch {
    fn from(data: ProductData) -> Self {
        ProductPatch {
            name: Some(data.name),
            price: Some(data.price),
            category: Some(data.category),
            stock: Some(data.stock),
            description: Some(data.description),
        }
    }
}

// =============================================================================
// Product Input
// =============================================================================

/// Raw form contents, exactly as typed.
///
/// Missing fields deserialize to the empty string, which is how an untouched
/// input reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ProductInput {
    pub name: String,
    pub price: String,
    pub category: String,
    pub stock: String,
    pub description: String,
}

impl ProductInput {
    /// Builds the form prefill for editing an existing record.
    pub fn from_product(product: &Product) -> Self {
        ProductInput {
            name: product.name.clone(),
            price: product.price.to_decimal_string(),
            category: product.category.clone(),
            stock: product.stock.to_string(),
            description: product.description.clone(),
        }
    }
}

// =============================================================================
// View Mode
// =============================================================================

/// How the shell lays out the current page. The core stores it and hands
/// it back; it never affects a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ViewMode {
    /// Table rows.
    #[default]
    List,
    /// Card grid.
    Card,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::List => write!(f, "list"),
            ViewMode::Card => write!(f, "card"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "list" | "table" => Ok(ViewMode::List),
            "card" | "cards" | "grid" => Ok(ViewMode::Card),
            other => Err(CoreError::InvalidConfig(format!(
                "Unknown view mode: '{}'. Valid options: list, card",
                other
            ))),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product {
            id: 1,
            name: "Laptop".to_string(),
            price: Money::from_cents(99999),
            category: "Electronics".to_string(),
            stock: 15,
            description: "High-performance laptop with 16GB RAM".to_string(),
        }
    }

    #[test]
    fn test_patch_merges_present_fields_only() {
        let mut product = laptop();
        let patch = ProductPatch {
            price: Some(Money::from_cents(89999)),
            stock: Some(3),
            ..ProductPatch::default()
        };

        patch.apply_to(&mut product);

        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.price.cents(), 89999);
        assert_eq!(product.stock, 3);
        assert_eq!(product.category, "Electronics");
    }

    #[test]
    fn test_patch_from_data_is_complete() {
        let data = ProductData {
            name: "Pen".to_string(),
            price: Money::from_cents(150),
            category: "Office".to_string(),
            stock: 0,
            description: String::new(),
        };
        let patch = ProductPatch::from(data);
        assert!(!patch.is_empty());
        assert_eq!(patch.description.as_deref(), Some(""));
        assert!(ProductPatch::default().is_empty());
    }

    #[test]
    fn test_input_prefill_from_product() {
        let input = ProductInput::from_product(&laptop());
        assert_eq!(input.name, "Laptop");
        assert_eq!(input.price, "999.99");
        assert_eq!(input.category, "Electronics");
        assert_eq!(input.stock, "15");
    }

    #[test]
    fn test_input_missing_fields_default_to_empty() {
        let input: ProductInput = serde_json::from_str(r#"{"name":"Pen"}"#).unwrap();
        assert_eq!(input.name, "Pen");
        assert_eq!(input.price, "");
        assert_eq!(input.stock, "");
    }

    #[test]
    fn test_view_mode_parsing() {
        assert_eq!("list".parse::<ViewMode>().unwrap(), ViewMode::List);
        assert_eq!("Card".parse::<ViewMode>().unwrap(), ViewMode::Card);
        assert_eq!("grid".parse::<ViewMode>().unwrap(), ViewMode::Card);
        assert!("carousel".parse::<ViewMode>().is_err());
        assert_eq!(ViewMode::Card.to_string(), "card");
    }
}
