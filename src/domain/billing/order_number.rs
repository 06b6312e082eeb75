//! Human-facing order numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Human-facing order number: `ORDER` + creation epoch millis + a random
/// hex suffix.
///
/// The suffix is 12 hex characters sliced from a v4 UUID, and the store
/// carries a uniqueness constraint on the column, so a collision cannot
/// create a second order with the same number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    pub const PREFIX: &'static str = "ORDER";
    const SUFFIX_LEN: usize = 12;

    /// Generates an order number for an order created at `created_at`.
    pub fn generate(created_at: Timestamp) -> Self {
        let entropy = Uuid::new_v4().simple().to_string();
        Self(format!(
            "{}{}{}",
            Self::PREFIX,
            created_at.epoch_millis(),
            &entropy[..Self::SUFFIX_LEN]
        ))
    }

    /// Wraps a stored order number, rejecting empty values.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ValidationError::empty_field("order_number"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
