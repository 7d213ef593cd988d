//! Request validation and per-category aggregation.

use boxoffice_core::{DomainError, DomainResult};

use crate::counts::TicketCounts;
use crate::request::TicketRequest;

pub(crate) fn empty_purchase() -> DomainError {
    DomainError::invalid_purchase("At least one ticket request is required")
}

/// Validate every request and sum quantities per category.
///
/// Repeated categories are summed, not rejected. Individual quantities are not
/// upper-bounded here; only the aggregate is (see [`crate::rules`]).
pub fn validate_and_aggregate(requests: &[TicketRequest]) -> DomainResult<TicketCounts> {
    if requests.is_empty() {
        return Err(empty_purchase());
    }

    let mut counts = TicketCounts::default();
    for request in requests {
        let quantity = u64::try_from(request.quantity())
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| {
                DomainError::invalid_purchase(format!(
                    "Ticket quantity must be a positive integer (got {} for {})",
                    request.quantity(),
                    request.category()
                ))
            })?;
        counts.add(request.category(), quantity);
    }

    Ok(counts)
}
