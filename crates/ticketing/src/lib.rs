//! Ticketing domain module (ticket purchases).
//!
//! Validates a purchase made of per-category ticket requests, applies the venue's
//! business rules, prices it, then delegates payment and seat reservation to
//! external collaborators. Everything except the collaborator calls is pure,
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod config;
pub mod counts;
pub mod in_memory;
pub mod ports;
pub mod pricing;
pub mod request;
pub mod rules;
pub mod service;
pub mod validation;

pub use category::TicketCategory;
pub use config::{PriceTable, PurchaseConfiguration};
pub use counts::TicketCounts;
pub use in_memory::{InMemoryServiceError, RecordingPaymentService, RecordingSeatReservationService};
pub use ports::{PaymentService, SeatReservationService};
pub use pricing::{calculate_seats_to_reserve, calculate_total_amount};
pub use request::{TicketRequest, parse_requests_json};
pub use rules::check_business_rules;
pub use service::{PurchaseError, PurchaseSummary, TicketService};
pub use validation::validate_and_aggregate;
