//! External collaborators invoked after a purchase passes validation.
//!
//! Both are synchronous. Failures are reported through each collaborator's own
//! error type and are surfaced to the caller unchanged; the ticketing core
//! never retries, times out or compensates a call.

use std::sync::Arc;

use boxoffice_core::AccountId;

/// Charges an account.
pub trait PaymentService {
    type Error: std::error::Error + 'static;

    /// Charge `amount` (smallest currency unit) to `account_id`.
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), Self::Error>;
}

/// Reserves seats for an account.
pub trait SeatReservationService {
    type Error: std::error::Error + 'static;

    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> Result<(), Self::Error>;
}

impl<T: PaymentService + ?Sized> PaymentService for &T {
    type Error = T::Error;

    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), Self::Error> {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: PaymentService + ?Sized> PaymentService for Arc<T> {
    type Error = T::Error;

    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), Self::Error> {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    type Error = T::Error;

    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> Result<(), Self::Error> {
        (**self).reserve_seat(account_id, seat_count)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Arc<T> {
    type Error = T::Error;

    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> Result<(), Self::Error> {
        (**self).reserve_seat(account_id, seat_count)
    }
}
