use serde::{Deserialize, Serialize};

use boxoffice_core::{DomainError, DomainResult, ValueObject};

use crate::category::TicketCategory;

/// One purchase line: a category and how many tickets of it.
///
/// Construction does not check the quantity; non-positive quantities are
/// rejected when the request is validated as part of a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TicketRequest {
    category: TicketCategory,
    quantity: i64,
}

impl TicketRequest {
    pub fn new(category: TicketCategory, quantity: i64) -> Self {
        Self { category, quantity }
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

impl ValueObject for TicketRequest {}

/// Shape-check an untyped JSON document into ticket requests.
///
/// Accepts an array of `{ "category": "ADULT" | "CHILD" | "INFANT", "quantity": <integer> }`.
/// `null` is treated as an absent request list. Quantities are not range-checked here.
pub fn parse_requests_json(input: &str) -> DomainResult<Vec<TicketRequest>> {
    let parsed: Option<Vec<TicketRequest>> = serde_json::from_str(input)
        .map_err(|e| DomainError::invalid_purchase(format!("Invalid ticket request: {e}")))?;

    match parsed {
        Some(requests) => Ok(requests),
        None => Err(crate::validation::empty_purchase()),
    }
}
