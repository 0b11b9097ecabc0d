//! # Validation Module
//!
//! Checks the product form before anything touches the record store.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Form Validation                                    │
//! │                                                                         │
//! │  ProductInput (raw text)                                                │
//! │       │                                                                 │
//! │       ├── name      empty after trim?            → NameRequired         │
//! │       ├── price     empty?                       → PriceRequired        │
//! │       │             not a decimal / negative?    → PriceInvalid         │
//! │       ├── category  empty?                       → CategoryRequired     │
//! │       └── stock     present and not an integer ≥ 0? → StockInvalid      │
//! │                                                                         │
//! │  Every rule runs. One bad field never hides another.                   │
//! │  Any error rejects the whole submission: no partial apply.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::{validate, Field};
//! use catalog_core::ProductInput;
//!
//! let input = ProductInput {
//!     name: String::new(),
//!     price: "10".into(),
//!     category: "Books".into(),
//!     ..ProductInput::default()
//! };
//! let errors = validate(&input);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.message(Field::Name).as_deref(), Some("Product name is required"));
//! ```

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use ts_rs::TS;

use crate::error::FieldError;
use crate::money::Money;
use crate::types::{ProductData, ProductInput};

// =============================================================================
// Field
// =============================================================================

/// A validated form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Field {
    Name,
    Price,
    Category,
    Stock,
}

impl Field {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Price => "price",
            Field::Category => "category",
            Field::Stock => "stock",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Field → error mapping. A field without an entry is valid; an empty
/// mapping means the whole submission is valid.
///
/// ## Serialization
/// Serializes as a flat object of messages, ready for the form:
/// ```json
/// { "name": "Product name is required", "price": "Price is required" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, TS)]
#[ts(export)]
pub struct ValidationErrors(#[ts(type = "Record<string, string>")] BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error. A field holds at most one error.
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// The user-facing message for a field, if it failed.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, error) in &self.0 {
            map.serialize_entry(field.as_str(), &error.to_string())?;
        }
        map.end()
    }
}

// =============================================================================
// Field Rules
// =============================================================================

fn check_name(raw: &str) -> Result<String, FieldError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(FieldError::NameRequired);
    }
    Ok(name.to_string())
}

/// Zero is a valid price (free items).
fn check_price(raw: &str) -> Result<Money, FieldError> {
    if raw.trim().is_empty() {
        return Err(FieldError::PriceRequired);
    }
    Money::parse_non_negative(raw).ok_or(FieldError::PriceInvalid)
}

/// Category comes from a select; only the empty option is rejected.
fn check_category(raw: &str) -> Result<String, FieldError> {
    if raw.is_empty() {
        return Err(FieldError::CategoryRequired);
    }
    Ok(raw.to_string())
}

/// Stock is optional: an empty field means 0.
fn check_stock(raw: &str) -> Result<u32, FieldError> {
    let stock = raw.trim();
    if stock.is_empty() {
        return Ok(0);
    }
    match stock.parse::<i64>() {
        Ok(n) if n >= 0 => u32::try_from(n).map_err(|_| FieldError::StockInvalid),
        _ => Err(FieldError::StockInvalid),
    }
}

// =============================================================================
// Validators
// =============================================================================

/// Parses a submission into typed product data, or collects every field
/// error.
///
/// `name` and `description` are trimmed; `stock` defaults to 0.
pub fn parse_product(input: &ProductInput) -> Result<ProductData, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = check_name(&input.name).map_err(|e| errors.insert(Field::Name, e));
    let price = check_price(&input.price).map_err(|e| errors.insert(Field::Price, e));
    let category = check_category(&input.category).map_err(|e| errors.insert(Field::Category, e));
    let stock = check_stock(&input.stock).map_err(|e| errors.insert(Field::Stock, e));

    match (name, price, category, stock) {
        (Ok(name), Ok(price), Ok(category), Ok(stock)) => Ok(ProductData {
            name,
            price,
            category,
            stock,
            description: input.description.trim().to_string(),
        }),
        _ => Err(errors),
    }
}

/// Validates a submission. An empty result means it is acceptable.
pub fn validate(input: &ProductInput) -> ValidationErrors {
    match parse_product(input) {
        Ok(_) => ValidationErrors::new(),
        Err(errors) => errors,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
