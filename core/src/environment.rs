//! Dependency injection for the purchase flow.
//!
//! Every external capability the service touches — payment, seat reservation,
//! transaction ids, time — is abstracted behind a trait and bundled in a
//! [`PurchaseEnvironment`]. The composition root supplies production
//! implementations; tests substitute deterministic doubles.

use crate::payment_gateway::{MockPaymentGateway, PaymentGateway};
use crate::seat_reservation::{MockSeatReservation, SeatReservation};
use crate::types::TransactionId;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Clock trait - abstracts time operations for testability.
pub trait Clock: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new `SystemClock`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of transaction identifiers.
///
/// Modeled as an injectable capability so tests can assert on deterministic
/// ids while production draws random ones.
pub trait TransactionIdGenerator: Send + Sync {
    /// Produces the id for the next purchase attempt.
    fn next_id(&self) -> TransactionId;
}

/// Production id source drawing random UUID v4 values.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidTransactionIds;

impl UuidTransactionIds {
    /// Creates a new `UuidTransactionIds`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TransactionIdGenerator for UuidTransactionIds {
    fn next_id(&self) -> TransactionId {
        TransactionId::new()
    }
}

/// Bundled dependencies for [`TicketService`](crate::TicketService).
#[derive(Clone)]
pub struct PurchaseEnvironment {
    /// Payment collaborator, called with the validated total cost.
    pub payments: Arc<dyn PaymentGateway>,
    /// Seat reservation collaborator, called after payment succeeds.
    pub reservations: Arc<dyn SeatReservation>,
    /// Transaction id source.
    pub ids: Arc<dyn TransactionIdGenerator>,
    /// Clock for outcome timestamps.
    pub clock: Arc<dyn Clock>,
}

impl PurchaseEnvironment {
    /// Creates an environment from explicit collaborators.
    #[must_use]
    pub fn new(
        payments: Arc<dyn PaymentGateway>,
        reservations: Arc<dyn SeatReservation>,
        ids: Arc<dyn TransactionIdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            payments,
            reservations,
            ids,
            clock,
        }
    }

    /// Default wiring: mock gateways, random UUID ids, system clock.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(
            MockPaymentGateway::shared(),
            MockSeatReservation::shared(),
            Arc::new(UuidTransactionIds::new()),
            Arc::new(SystemClock::new()),
        )
    }
}
