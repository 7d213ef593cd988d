//! Purchase orchestration: validate, apply business rules, price, then pay and reserve.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use boxoffice_core::{AccountId, DomainError, DomainResult};

use crate::config::PurchaseConfiguration;
use crate::counts::TicketCounts;
use crate::pricing::{calculate_seats_to_reserve, calculate_total_amount};
use crate::ports::{PaymentService, SeatReservationService};
use crate::request::TicketRequest;
use crate::rules::check_business_rules;
use crate::validation::validate_and_aggregate;

/// What an accepted purchase amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSummary {
    pub counts: TicketCounts,
    pub total_amount: u64,
    pub seats_to_reserve: u64,
}

/// Failure of a purchase attempt.
///
/// Collaborator errors are passed through untouched. A `Reservation` failure
/// means the payment step already succeeded; no compensation is attempted.
#[derive(Debug, Error)]
pub enum PurchaseError<P, R> {
    /// The purchase was rejected before any collaborator was called.
    #[error(transparent)]
    Rejected(#[from] DomainError),

    #[error(transparent)]
    Payment(P),

    #[error(transparent)]
    Reservation(R),
}

impl<P, R> PurchaseError<P, R> {
    /// The rejection reason, when the purchase itself was invalid.
    pub fn rejection_reason(&self) -> Option<&str> {
        match self {
            PurchaseError::Rejected(err) => err.purchase_reason(),
            _ => None,
        }
    }
}

/// Entry point for ticket purchases.
///
/// Holds only immutable configuration and its collaborators, so one service can
/// handle concurrent purchases as long as the collaborators allow it.
#[derive(Debug)]
pub struct TicketService<P, R> {
    config: PurchaseConfiguration,
    payments: P,
    reservations: R,
}

impl<P, R> TicketService<P, R> {
    /// Service with the default venue configuration.
    pub fn new(payments: P, reservations: R) -> Self {
        Self::with_config(PurchaseConfiguration::default(), payments, reservations)
    }

    pub fn with_config(config: PurchaseConfiguration, payments: P, reservations: R) -> Self {
        Self {
            config,
            payments,
            reservations,
        }
    }

    pub fn config(&self) -> &PurchaseConfiguration {
        &self.config
    }

    pub fn payments(&self) -> &P {
        &self.payments
    }

    pub fn reservations(&self) -> &R {
        &self.reservations
    }

    /// Validate and price a purchase without charging or reserving anything.
    pub fn quote(&self, requests: &[TicketRequest]) -> DomainResult<PurchaseSummary> {
        let counts = validate_and_aggregate(requests)?;
        check_business_rules(&counts, &self.config)?;

        Ok(PurchaseSummary {
            counts,
            total_amount: calculate_total_amount(&counts, &self.config),
            seats_to_reserve: calculate_seats_to_reserve(&counts),
        })
    }
}

impl<P, R> TicketService<P, R>
where
    P: PaymentService,
    R: SeatReservationService,
{
    /// Purchase tickets for `account_id`.
    ///
    /// The account id is passed to the collaborators as-is; they own its validity.
    /// Payment is taken before seats are reserved, and neither runs unless the
    /// whole request passes validation.
    pub fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketRequest],
    ) -> Result<PurchaseSummary, PurchaseError<P::Error, R::Error>> {
        let summary = self.quote(requests).map_err(|err| {
            tracing::warn!(account_id = %account_id, reason = %err, "ticket purchase rejected");
            err
        })?;

        tracing::debug!(
            account_id = %account_id,
            adult = summary.counts.adult(),
            child = summary.counts.child(),
            infant = summary.counts.infant(),
            "ticket purchase validated"
        );

        self.payments
            .make_payment(account_id, summary.total_amount)
            .map_err(|err| {
                tracing::error!(account_id = %account_id, amount = summary.total_amount, "payment failed: {err}");
                PurchaseError::Payment(err)
            })?;

        self.reservations
            .reserve_seat(account_id, summary.seats_to_reserve)
            .map_err(|err| {
                tracing::error!(
                    account_id = %account_id,
                    seats = summary.seats_to_reserve,
                    "seat reservation failed after payment: {err}"
                );
                PurchaseError::Reservation(err)
            })?;

        tracing::info!(
            account_id = %account_id,
            amount = summary.total_amount,
            seats = summary.seats_to_reserve,
            "tickets purchased"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::TicketCategory;
    use crate::in_memory::{RecordingPaymentService, RecordingSeatReservationService};

    fn service() -> TicketService<RecordingPaymentService, RecordingSeatReservationService> {
        TicketService::new(
            RecordingPaymentService::new(),
            RecordingSeatReservationService::new(),
        )
    }

    #[test]
    fn quote_does_not_touch_collaborators() {
        let service = service();
        let summary = service
            .quote(&[TicketRequest::new(TicketCategory::Adult, 3)])
            .unwrap();
        assert_eq!(summary.total_amount, 75);
        assert_eq!(summary.seats_to_reserve, 3);
        assert!(service.payments().payments().is_empty());
        assert!(service.reservations().reservations().is_empty());
    }

    #[test]
    fn rejection_reason_is_exposed() {
        let service = service();
        let err = service
            .purchase_tickets(
                AccountId::new(1),
                &[TicketRequest::new(TicketCategory::Child, 1)],
            )
            .unwrap_err();
        assert_eq!(
            err.rejection_reason(),
            Some("Child and Infant tickets cannot be purchased without Adult tickets")
        );
    }

    #[test]
    fn account_id_is_forwarded_without_checks() {
        let service = service();
        service
            .purchase_tickets(
                AccountId::new(-5),
                &[TicketRequest::new(TicketCategory::Adult, 1)],
            )
            .unwrap();
        assert_eq!(service.payments().payments(), vec![(AccountId::new(-5), 25)]);
        assert_eq!(
            service.reservations().reservations(),
            vec![(AccountId::new(-5), 1)]
        );
    }

    #[test]
    fn custom_configuration_drives_pricing_and_capacity() {
        let config = PurchaseConfiguration::from_json(
            r#"{"prices":{"ADULT":40,"CHILD":20,"INFANT":5},"max_tickets_per_purchase":4}"#,
        )
        .unwrap();
        let service = TicketService::with_config(
            config,
            RecordingPaymentService::new(),
            RecordingSeatReservationService::new(),
        );

        let summary = service
            .purchase_tickets(
                AccountId::new(3),
                &[
                    TicketRequest::new(TicketCategory::Adult, 2),
                    TicketRequest::new(TicketCategory::Infant, 2),
                ],
            )
            .unwrap();
        assert_eq!(summary.total_amount, 90);
        assert_eq!(summary.seats_to_reserve, 2);

        let err = service
            .purchase_tickets(
                AccountId::new(3),
                &[TicketRequest::new(TicketCategory::Adult, 5)],
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Cannot purchase more than 4 tickets at once");
    }
}
