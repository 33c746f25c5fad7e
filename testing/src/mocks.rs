//! Mock implementations for testing.

use box_office_core::environment::{Clock, TransactionIdGenerator};
use box_office_core::payment_gateway::{PaymentError, PaymentGateway, PaymentResult};
use box_office_core::seat_reservation::{ReservationError, ReservationResult, SeatReservation};
use box_office_core::types::{AccountId, Money, TransactionId};
use chrono::{DateTime, Utc};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

/// Fixed clock for deterministic tests.
///
/// Always returns the same time, making tests reproducible.
#[derive(Debug, Clone)]
pub struct FixedClock {
    time: DateTime<Utc>,
}

impl FixedClock {
    /// Create a new fixed clock with the given time.
    #[must_use]
    pub const fn new(time: DateTime<Utc>) -> Self {
        Self { time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.time
    }
}

/// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC).
///
/// # Panics
///
/// This function will panic if the hardcoded timestamp fails to parse,
/// which should never happen in practice.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_clock() -> FixedClock {
    FixedClock::new(
        DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .expect("hardcoded timestamp should always parse")
            .with_timezone(&Utc),
    )
}

/// Sequential transaction id source: 1, 2, 3, ...
///
/// Ids are UUIDs built from the counter value, so tests can predict them
/// with [`SequentialTransactionIds::id_at`].
#[derive(Debug, Default)]
pub struct SequentialTransactionIds {
    counter: AtomicU64,
}

impl SequentialTransactionIds {
    /// Creates a generator whose first id is `id_at(1)`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// The id this generator hands out on its `n`-th call (1-based).
    #[must_use]
    pub const fn id_at(n: u64) -> TransactionId {
        TransactionId::from_uuid(Uuid::from_u128(n as u128))
    }
}

impl TransactionIdGenerator for SequentialTransactionIds {
    fn next_id(&self) -> TransactionId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Self::id_at(n)
    }
}

/// Payment gateway double that records every charge.
///
/// Succeeds by default; [`RecordingPaymentGateway::failing_with`] scripts a
/// failure for every call instead. Calls are recorded either way, because the
/// gateway was invoked either way.
#[derive(Debug, Default)]
pub struct RecordingPaymentGateway {
    calls: Mutex<Vec<(AccountId, Money)>>,
    failure: Option<PaymentError>,
}

impl RecordingPaymentGateway {
    /// Creates a gateway that accepts every charge.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// Creates a gateway that rejects every charge with `error`.
    #[must_use]
    pub const fn failing_with(error: PaymentError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(error),
        }
    }

    /// The charges made so far, in call order.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn calls(&self) -> Vec<(AccountId, Money)> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }
}

impl PaymentGateway for RecordingPaymentGateway {
    #[allow(clippy::expect_used)]
    fn make_payment(
        &self,
        account_id: AccountId,
        amount: Money,
    ) -> Pin<Box<dyn Future<Output = PaymentResult<()>> + Send>> {
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .push((account_id, amount));
        let result = match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        };
        Box::pin(async move { result })
    }
}

/// Seat reservation double that records every reservation.
///
/// Succeeds by default; [`RecordingSeatReservation::failing_with`] scripts a
/// failure for every call instead.
#[derive(Debug, Default)]
pub struct RecordingSeatReservation {
    calls: Mutex<Vec<(AccountId, u32)>>,
    failure: Option<ReservationError>,
}

impl RecordingSeatReservation {
    /// Creates a service that accepts every reservation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// Creates a service that rejects every reservation with `error`.
    #[must_use]
    pub const fn failing_with(error: ReservationError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(error),
        }
    }

    /// The reservations made so far, in call order.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn calls(&self) -> Vec<(AccountId, u32)> {
        self.calls.lock().expect("mock lock poisoned").clone()
    }
}

impl SeatReservation for RecordingSeatReservation {
    #[allow(clippy::expect_used)]
    fn reserve_seats(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Pin<Box<dyn Future<Output = ReservationResult<()>> + Send>> {
        self.calls
            .lock()
            .expect("mock lock poisoned")
            .push((account_id, seat_count));
        let result = match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        };
        Box::pin(async move { result })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_are_predictable() {
        let ids = SequentialTransactionIds::new();
        assert_eq!(ids.next_id(), SequentialTransactionIds::id_at(1));
        assert_eq!(ids.next_id(), SequentialTransactionIds::id_at(2));
        assert_eq!(ids.next_id(), SequentialTransactionIds::id_at(3));
    }

    #[test]
    fn fixed_clock_never_advances() {
        let clock = test_clock();
        assert_eq!(clock.now(), clock.now());
    }
}
