use serde::{Deserialize, Serialize};

use boxoffice_core::ValueObject;

use crate::category::TicketCategory;

/// Aggregated ticket totals for one purchase attempt.
///
/// Every category always has an entry (zero when nothing was requested).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketCounts {
    adult: u64,
    child: u64,
    infant: u64,
}

impl TicketCounts {
    pub fn new(adult: u64, child: u64, infant: u64) -> Self {
        Self {
            adult,
            child,
            infant,
        }
    }

    pub fn get(&self, category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => self.infant,
        }
    }

    pub fn adult(&self) -> u64 {
        self.adult
    }

    pub fn child(&self) -> u64 {
        self.child
    }

    pub fn infant(&self) -> u64 {
        self.infant
    }

    /// Total tickets across all categories. Saturates instead of overflowing.
    pub fn total(&self) -> u64 {
        TicketCategory::ALL
            .into_iter()
            .fold(0u64, |acc, c| acc.saturating_add(self.get(c)))
    }

    /// Add `quantity` tickets of `category`, saturating at `u64::MAX`.
    pub(crate) fn add(&mut self, category: TicketCategory, quantity: u64) {
        let slot = match category {
            TicketCategory::Adult => &mut self.adult,
            TicketCategory::Child => &mut self.child,
            TicketCategory::Infant => &mut self.infant,
        };
        *slot = slot.saturating_add(quantity);
    }
}

impl ValueObject for TicketCounts {}
