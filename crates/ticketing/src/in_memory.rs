//! In-memory collaborators for tests/dev.
//!
//! - No IO
//! - Every call is recorded, including calls that were configured to fail

use std::sync::Mutex;

use thiserror::Error;

use boxoffice_core::AccountId;

use crate::ports::{PaymentService, SeatReservationService};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InMemoryServiceError {
    /// The service was configured to reject every call.
    #[error("{0}")]
    Rejected(String),

    /// The call log lock was poisoned by a panicking thread.
    #[error("call log poisoned")]
    Poisoned,
}

/// Records `(account_id, value)` pairs and optionally fails every call.
#[derive(Debug, Default)]
struct CallLog {
    calls: Mutex<Vec<(AccountId, u64)>>,
    failure: Option<String>,
}

impl CallLog {
    fn failing(reason: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(reason.into()),
        }
    }

    fn record(&self, account_id: AccountId, value: u64) -> Result<(), InMemoryServiceError> {
        let mut calls = self
            .calls
            .lock()
            .map_err(|_| InMemoryServiceError::Poisoned)?;
        calls.push((account_id, value));

        match &self.failure {
            Some(reason) => Err(InMemoryServiceError::Rejected(reason.clone())),
            None => Ok(()),
        }
    }

    fn calls(&self) -> Vec<(AccountId, u64)> {
        // A poisoned log still holds every call recorded before the panic.
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

/// Payment collaborator that remembers every charge.
#[derive(Debug, Default)]
pub struct RecordingPaymentService {
    log: CallLog,
}

impl RecordingPaymentService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A payment service that declines every charge with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            log: CallLog::failing(reason),
        }
    }

    /// `(account_id, amount)` for every charge attempted, in call order.
    pub fn payments(&self) -> Vec<(AccountId, u64)> {
        self.log.calls()
    }
}

impl PaymentService for RecordingPaymentService {
    type Error = InMemoryServiceError;

    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), Self::Error> {
        self.log.record(account_id, amount)
    }
}

/// Seat reservation collaborator that remembers every reservation.
#[derive(Debug, Default)]
pub struct RecordingSeatReservationService {
    log: CallLog,
}

impl RecordingSeatReservationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A reservation service that refuses every reservation with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            log: CallLog::failing(reason),
        }
    }

    /// `(account_id, seat_count)` for every reservation attempted, in call order.
    pub fn reservations(&self) -> Vec<(AccountId, u64)> {
        self.log.calls()
    }
}

impl SeatReservationService for RecordingSeatReservationService {
    type Error = InMemoryServiceError;

    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> Result<(), Self::Error> {
        self.log.record(account_id, seat_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let payments = RecordingPaymentService::new();
        payments.make_payment(AccountId::new(1), 50).unwrap();
        payments.make_payment(AccountId::new(2), 15).unwrap();
        assert_eq!(
            payments.payments(),
            vec![(AccountId::new(1), 50), (AccountId::new(2), 15)]
        );
    }

    #[test]
    fn failing_service_records_then_rejects() {
        let seats = RecordingSeatReservationService::failing("venue sold out");
        let err = seats.reserve_seat(AccountId::new(9), 3).unwrap_err();
        assert_eq!(err, InMemoryServiceError::Rejected("venue sold out".into()));
        assert_eq!(seats.reservations(), vec![(AccountId::new(9), 3)]);
    }
}
