//! JSON payload shape for [`Product`].
//!
//! A payload is a flat object with the keys `name`, `sku`, `category`, `price`,
//! `quantity` and `description`. Missing keys take the defaults of
//! [`Product::default`], unknown keys are ignored. Values are type-checked
//! only; a negative price is still a valid payload.

use serde_json::Value;

use tracekit_core::{DomainError, DomainResult};

use crate::product::Product;

impl Product {
    /// Encode as compact JSON. Non-finite prices are written as `null`.
    pub fn to_json(&self) -> DomainResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_value(&self) -> DomainResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Decode a payload produced by [`Product::to_json`] or by a collaborator.
    pub fn from_json(payload: &str) -> DomainResult<Self> {
        let decoded = serde_json::from_str::<Value>(payload)
            .map_err(DomainError::from)
            .and_then(Self::from_json_value);
        if let Err(err) = &decoded {
            tracing::debug!(error = %err, "rejected product payload");
        }
        decoded
    }

    /// Serde would also accept a positional array for a struct; only objects
    /// are payloads.
    pub fn from_json_value(value: Value) -> DomainResult<Self> {
        if !value.is_object() {
            return Err(DomainError::payload("product payload must be a JSON object"));
        }
        Ok(serde_json::from_value(value)?)
    }
}
