//! # Sample Data
//!
//! The six products a fresh catalog starts with, one per category the
//! shell offers. Handy for demos and for tests that need a realistic store.

use crate::money::Money;
use crate::store::RecordStore;
use crate::types::ProductData;

/// (name, price in cents, category, stock, description)
const SAMPLE_PRODUCTS: &[(&str, i64, &str, u32, &str)] = &[
    ("Laptop", 99999, "Electronics", 15, "High-performance laptop with 16GB RAM"),
    ("T-Shirt", 2999, "Clothing", 50, "Cotton t-shirt, comfortable fit"),
    ("Coffee", 1299, "Food", 100, "Premium coffee beans"),
    ("Book", 1999, "Books", 25, "Best-selling novel"),
    ("Table Lamp", 4599, "Home", 30, "Modern LED table lamp"),
    ("Running Shoes", 8999, "Sports", 40, "Comfortable running shoes"),
];

/// The sample products, in display order.
pub fn sample_products() -> Vec<ProductData> {
    SAMPLE_PRODUCTS
        .iter()
        .map(|&(name, cents, category, stock, description)| ProductData {
            name: name.to_string(),
            price: Money::from_cents(cents),
            category: category.to_string(),
            stock,
            description: description.to_string(),
        })
        .collect()
}

/// A store holding the sample products under ids 1-6.
pub fn sample_catalog() -> RecordStore {
    let mut store = RecordStore::new();
    for data in sample_products() {
        store.add(data);
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_ids() {
        let store = sample_catalog();
        assert_eq!(store.len(), 6);
        assert_eq!(
            store.list().iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
        assert_eq!(store.get(2).unwrap().name, "T-Shirt");
        assert_eq!(store.next_id(), 7);
    }
}
