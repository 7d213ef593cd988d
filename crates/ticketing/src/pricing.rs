//! Amount and seat calculation from aggregated counts.

use crate::category::TicketCategory;
use crate::config::PurchaseConfiguration;
use crate::counts::TicketCounts;

/// Total payable amount: sum of count × price over all categories.
pub fn calculate_total_amount(counts: &TicketCounts, config: &PurchaseConfiguration) -> u64 {
    TicketCategory::ALL.into_iter().fold(0u64, |acc, category| {
        acc.saturating_add(counts.get(category).saturating_mul(config.price_of(category)))
    })
}

/// Seats to reserve. Infants sit on an adult's lap and take no seat.
pub fn calculate_seats_to_reserve(counts: &TicketCounts) -> u64 {
    TicketCategory::ALL
        .into_iter()
        .filter(TicketCategory::occupies_seat)
        .fold(0u64, |acc, category| acc.saturating_add(counts.get(category)))
}
