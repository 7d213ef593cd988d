//! Purchase configuration: fixed prices and the per-purchase ticket ceiling.

use serde::{Deserialize, Serialize};

use boxoffice_core::{DomainError, DomainResult};

use crate::category::TicketCategory;

pub const DEFAULT_ADULT_PRICE: u64 = 25;
pub const DEFAULT_CHILD_PRICE: u64 = 15;
pub const DEFAULT_INFANT_PRICE: u64 = 0;
pub const DEFAULT_MAX_TICKETS_PER_PURCHASE: u64 = 25;

/// Price per ticket for each category, in the smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "UPPERCASE")]
pub struct PriceTable {
    pub adult: u64,
    pub child: u64,
    pub infant: u64,
}

impl PriceTable {
    pub fn price_of(&self, category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => self.infant,
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            adult: DEFAULT_ADULT_PRICE,
            child: DEFAULT_CHILD_PRICE,
            infant: DEFAULT_INFANT_PRICE,
        }
    }
}

/// Immutable configuration shared by every purchase handled by one service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseConfiguration {
    prices: PriceTable,
    max_tickets_per_purchase: u64,
}

impl PurchaseConfiguration {
    /// Build a configuration, rejecting a zero ticket ceiling.
    pub fn new(prices: PriceTable, max_tickets_per_purchase: u64) -> DomainResult<Self> {
        let config = Self {
            prices,
            max_tickets_per_purchase,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON document. Missing fields take their default values.
    pub fn from_json(input: &str) -> DomainResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| DomainError::invalid_configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub fn price_of(&self, category: TicketCategory) -> u64 {
        self.prices.price_of(category)
    }

    pub fn max_tickets_per_purchase(&self) -> u64 {
        self.max_tickets_per_purchase
    }

    fn validate(&self) -> DomainResult<()> {
        if self.max_tickets_per_purchase == 0 {
            return Err(DomainError::invalid_configuration(
                "max_tickets_per_purchase must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for PurchaseConfiguration {
    fn default() -> Self {
        Self {
            prices: PriceTable::default(),
            max_tickets_per_purchase: DEFAULT_MAX_TICKETS_PER_PURCHASE,
        }
    }
}
