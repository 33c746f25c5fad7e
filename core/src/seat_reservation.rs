//! Seat reservation collaborator interface and its development mock.
//!
//! Invoked only after payment has completed, with a seat count that already
//! excludes infants. Failures pass through to the caller uninterpreted.

use crate::types::AccountId;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

/// Seat reservation result.
pub type ReservationResult<T> = Result<T, ReservationError>;

/// Opaque failure reported by the seat reservation service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    /// Not enough seats left to satisfy the reservation.
    #[error("not enough seats available")]
    Unavailable,

    /// The reservation service did not answer in time.
    #[error("seat reservation timeout")]
    Timeout,

    /// Any other reservation failure.
    #[error("seat reservation failed: {message}")]
    Other {
        /// Error message from the service.
        message: String,
    },
}

/// Seat reservation trait.
///
/// Abstraction over the external seat booking service.
pub trait SeatReservation: Send + Sync {
    /// Reserves `seat_count` seats for the account.
    ///
    /// # Errors
    ///
    /// Returns a [`ReservationError`] if the reservation fails.
    fn reserve_seats(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Pin<Box<dyn Future<Output = ReservationResult<()>> + Send>>;
}

/// Mock seat reservation service (always succeeds for development).
#[derive(Clone, Copy, Debug, Default)]
pub struct MockSeatReservation;

impl MockSeatReservation {
    /// Creates a new mock seat reservation service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing.
    #[must_use]
    pub fn shared() -> Arc<dyn SeatReservation> {
        Arc::new(Self::new())
    }
}

impl SeatReservation for MockSeatReservation {
    fn reserve_seats(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Pin<Box<dyn Future<Output = ReservationResult<()>> + Send>> {
        Box::pin(async move {
            // Simulate network delay
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

            tracing::info!(
                account_id = %account_id,
                seat_count,
                "mock seats reserved"
            );

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_reservation_succeeds() {
        let service = MockSeatReservation::new();
        let result = service.reserve_seats(AccountId::new(1), 3).await;
        assert_eq!(result, Ok(()));
    }
}
