use serde::{Deserialize, Serialize};

use tracekit_core::ValueObject;

/// Quantity a product carries unless told otherwise.
pub const DEFAULT_QUANTITY: u64 = 1;

/// A product being viewed, purchased, or otherwise tracked.
///
/// Every attribute is independently readable and writable. Setters store
/// whatever they are given: an empty name, a negative price or a zero quantity
/// are all accepted as-is. Text attributes other than `name` use the empty
/// string for "unset".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    name: String,
    sku: String,
    category: String,
    price: f64, // no currency attached
    quantity: u64,
    description: String,
}

impl Product {
    /// Create a product from just a name.
    ///
    /// Quantity starts at 1, price at 0.0, and every other text field empty.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sku: String::new(),
            category: String::new(),
            price: 0.0,
            quantity: DEFAULT_QUANTITY,
            description: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Stock keeping unit. Uniqueness is not enforced here.
    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn set_sku(&mut self, sku: impl Into<String>) {
        self.sku = sku.into();
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
    }

    /// Free-form description text.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}

/// Same as `Product::with_name("")`, so quantity is 1 here too.
impl Default for Product {
    fn default() -> Self {
        Self::with_name(String::new())
    }
}

impl ValueObject for Product {}
