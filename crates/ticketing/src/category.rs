use core::str::FromStr;
use serde::{Deserialize, Serialize};

use boxoffice_core::DomainError;

/// Ticket category. The set is closed: every purchase line is exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    /// Every category, in a stable order.
    pub const ALL: [TicketCategory; 3] = [Self::Adult, Self::Child, Self::Infant];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::Adult => "ADULT",
            TicketCategory::Child => "CHILD",
            TicketCategory::Infant => "INFANT",
        }
    }

    /// Whether a ticket of this category occupies a seat (infants sit on an adult's lap).
    pub fn occupies_seat(&self) -> bool {
        !matches!(self, TicketCategory::Infant)
    }
}

impl core::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                DomainError::invalid_purchase(format!("Invalid ticket request: unknown category '{s}'"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("ADULT".parse::<TicketCategory>().unwrap(), TicketCategory::Adult);
        assert_eq!("child".parse::<TicketCategory>().unwrap(), TicketCategory::Child);
        assert_eq!(" Infant ".parse::<TicketCategory>().unwrap(), TicketCategory::Infant);
    }

    #[test]
    fn unknown_category_is_an_invalid_purchase() {
        let err = "SENIOR".parse::<TicketCategory>().unwrap_err();
        match err {
            DomainError::InvalidPurchase(msg) if msg.contains("SENIOR") => {}
            _ => panic!("Expected InvalidPurchase for unknown category"),
        }
    }

    #[test]
    fn serde_uses_uppercase_names() {
        assert_eq!(serde_json::to_string(&TicketCategory::Infant).unwrap(), "\"INFANT\"");
        let c: TicketCategory = serde_json::from_str("\"CHILD\"").unwrap();
        assert_eq!(c, TicketCategory::Child);
    }

    #[test]
    fn only_infants_go_without_a_seat() {
        assert!(TicketCategory::Adult.occupies_seat());
        assert!(TicketCategory::Child.occupies_seat());
        assert!(!TicketCategory::Infant.occupies_seat());
    }
}
