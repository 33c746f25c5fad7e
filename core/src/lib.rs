//! # Box Office Core
//!
//! Validation, pricing, and orchestration for ticket purchases.
//!
//! A purchase is a batch of [`TicketTypeRequest`] values bought in one
//! transaction for one account. The core decides whether the batch is
//! admissible, turns it into a total cost and a total seat count, and only
//! then hands off to the external collaborators.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   TicketService  │  purchase(account_id, requests)
//! └──────────────────┘
//!          │
//!          ├── PurchaseValidator ── account + batch rules → TicketCounts
//!          ├── PricingCalculator ── TicketCounts → total cost, total seats
//!          │
//!          ├── PaymentGateway ───── make_payment(account_id, cost)
//!          └── SeatReservation ──── reserve_seats(account_id, seats)
//! ```
//!
//! The collaborators (payment, seat reservation, transaction ids, clock) are
//! abstracted behind traits and bundled in a [`PurchaseEnvironment`], so the
//! composition root decides what runs in production and tests substitute
//! deterministic doubles.
//!
//! # Rules
//!
//! - The account id must be strictly positive.
//! - A batch must contain at least one request.
//! - Every purchase needs at least one adult ticket.
//! - Each infant sits on an adult's lap: infants may not outnumber adults,
//!   and no seat is reserved for them.
//! - At most 25 tickets per purchase, counted across all types.
//!
//! Payment always precedes seat reservation. There is no compensation if the
//! reservation fails after payment succeeded; the error is surfaced as-is.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod environment;
pub mod error;
pub mod payment_gateway;
pub mod pricing;
pub mod seat_reservation;
pub mod service;
pub mod types;
pub mod validation;

pub use environment::{Clock, PurchaseEnvironment, SystemClock, TransactionIdGenerator, UuidTransactionIds};
pub use error::PurchaseError;
pub use payment_gateway::{MockPaymentGateway, PaymentError, PaymentGateway};
pub use pricing::PricingCalculator;
pub use seat_reservation::{MockSeatReservation, ReservationError, SeatReservation};
pub use service::TicketService;
pub use types::{
    AccountId, Money, PurchaseOutcome, TicketCounts, TicketType, TicketTypeRequest, TransactionId,
};
pub use validation::{PurchaseValidator, MAX_INFANTS_PER_ADULT, MAX_TICKETS_PER_PURCHASE};
