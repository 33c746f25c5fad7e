//! Error taxonomy for rejected purchases.
//!
//! Every rejection is a distinct variant of [`PurchaseError`] so callers and
//! tests can branch on the reason. Violations fail at the point of detection;
//! there is no accumulation of multiple errors into one report.

use crate::payment_gateway::PaymentError;
use crate::seat_reservation::ReservationError;
use thiserror::Error;

/// Errors produced while validating or completing a purchase.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    /// The account id is not a strictly positive integer.
    #[error("invalid account id: {account_id}")]
    InvalidAccount {
        /// The rejected raw id.
        account_id: i64,
    },

    /// The request batch was empty.
    #[error("no tickets requested")]
    EmptyRequest,

    /// A ticket type outside the closed set was supplied.
    #[error("unknown ticket type: {value} (expected ADULT, CHILD, or INFANT)")]
    InvalidTicketType {
        /// The rejected spelling.
        value: String,
    },

    /// A ticket quantity was not a strictly positive integer.
    #[error("ticket quantity must be a positive integer")]
    InvalidTicketCount,

    /// No adult ticket in the batch; every purchase needs at least one.
    #[error("at least one adult ticket is required")]
    NoAdult,

    /// More infants than adults; each infant shares an adult's lap.
    #[error("{infants} infant tickets exceed {adults} adult tickets")]
    InfantExceedsAdult {
        /// Aggregated adult count.
        adults: u32,
        /// Aggregated infant count.
        infants: u32,
    },

    /// The batch total is over the per-purchase limit.
    #[error("{requested} tickets requested, limit is {limit} per purchase")]
    MaxTicketsExceeded {
        /// Aggregated total across all types.
        requested: u32,
        /// The fixed per-purchase limit.
        limit: u32,
    },

    /// The payment gateway failed; passed through unchanged.
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// The seat reservation service failed; passed through unchanged.
    #[error(transparent)]
    Reservation(#[from] ReservationError),
}
