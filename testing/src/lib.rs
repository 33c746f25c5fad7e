//! # Box Office Testing
//!
//! Deterministic doubles for every capability the purchase flow injects:
//!
//! - [`RecordingPaymentGateway`]: captures charges, optionally scripted to fail
//! - [`RecordingSeatReservation`]: captures reservations, optionally scripted to fail
//! - [`SequentialTransactionIds`]: predictable transaction ids
//! - [`FixedClock`]: deterministic time
//!
//! These let tests assert on exactly which collaborator calls a purchase
//! made, in which order, with which arguments.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod mocks;

pub use mocks::{
    test_clock, FixedClock, RecordingPaymentGateway, RecordingSeatReservation,
    SequentialTransactionIds,
};
