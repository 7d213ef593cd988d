//! Business rules evaluated on aggregated counts.
//!
//! Rules run in a fixed order and the first violation is reported.

use boxoffice_core::{DomainError, DomainResult};

use crate::config::PurchaseConfiguration;
use crate::counts::TicketCounts;

pub fn check_business_rules(
    counts: &TicketCounts,
    config: &PurchaseConfiguration,
) -> DomainResult<()> {
    let max = config.max_tickets_per_purchase();
    if counts.total() > max {
        return Err(DomainError::invalid_purchase(format!(
            "Cannot purchase more than {max} tickets at once"
        )));
    }

    if (counts.child() > 0 || counts.infant() > 0) && counts.adult() == 0 {
        return Err(DomainError::invalid_purchase(
            "Child and Infant tickets cannot be purchased without Adult tickets",
        ));
    }

    // Lap rule: each infant needs an adult.
    if counts.infant() > counts.adult() {
        return Err(DomainError::invalid_purchase(
            "Number of Infant tickets cannot exceed number of Adult tickets",
        ));
    }

    Ok(())
}
