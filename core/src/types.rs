//! Domain types for the box office purchase flow.
//!
//! Value objects only: ticket types and requests, aggregated counts, money,
//! identifiers, and the purchase outcome. None of these carry behavior beyond
//! construction-time invariants and read-only accessors.

use crate::error::PurchaseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of the purchasing account.
///
/// A pass-through identifier: the core never resolves it against a customer
/// store. Positivity is a validation rule, not a construction rule, so that
/// a malformed id entering [`purchase`](crate::TicketService::purchase) is
/// rejected with the proper error instead of being unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an `AccountId` from a raw value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Whether the id is a valid (strictly positive) account number.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier correlating one purchase attempt across logs and
/// collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Creates a new random `TransactionId`.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a `TransactionId` from a `Uuid`.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money Value Object (cents-based to avoid floating point errors)
// ============================================================================

/// Represents money in cents to avoid floating-point arithmetic errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Creates a `Money` value from cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates a `Money` value from dollars.
    ///
    /// # Panics
    ///
    /// Panics if the conversion would overflow (dollars * 100 > `u64::MAX`).
    #[must_use]
    #[allow(clippy::panic)]
    pub const fn from_dollars(dollars: u64) -> Self {
        match dollars.checked_mul(100) {
            Some(cents) => Self(cents),
            None => panic!("Money::from_dollars overflow"),
        }
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Returns the amount in dollars (rounded down).
    #[must_use]
    pub const fn dollars(&self) -> u64 {
        self.0 / 100
    }

    /// Checks if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two money amounts with overflow checking.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Adds two money amounts.
    ///
    /// # Panics
    ///
    /// Panics if the addition would overflow. Use `checked_add` for
    /// non-panicking addition.
    #[must_use]
    #[allow(clippy::panic)]
    pub const fn add(self, other: Self) -> Self {
        match self.checked_add(other) {
            Some(result) => result,
            None => panic!("Money::add overflow"),
        }
    }

    /// Multiplies money by a quantity with overflow checking.
    #[must_use]
    pub const fn checked_multiply(self, quantity: u32) -> Option<Self> {
        match self.0.checked_mul(quantity as u64) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Multiplies money by a quantity.
    ///
    /// # Panics
    ///
    /// Panics if the multiplication would overflow. Use `checked_multiply`
    /// for non-panicking multiplication.
    #[must_use]
    #[allow(clippy::panic)]
    pub const fn multiply(self, quantity: u32) -> Self {
        match self.checked_multiply(quantity) {
            Some(result) => result,
            None => panic!("Money::multiply overflow"),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.0 % 100)
    }
}

// ============================================================================
// Ticket Types and Requests
// ============================================================================

/// The closed set of ticket types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    /// Full-price ticket; occupies a seat.
    Adult,
    /// Reduced-price ticket; occupies a seat.
    Child,
    /// Free ticket; sits on an adult's lap, no seat reserved.
    Infant,
}

impl TicketType {
    /// All ticket types, in price-table order.
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Whether this ticket type occupies a physical seat.
    #[must_use]
    pub const fn requires_seat(&self) -> bool {
        matches!(self, Self::Adult | Self::Child)
    }

    /// Canonical wire spelling (`ADULT`, `CHILD`, `INFANT`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = PurchaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(Self::Adult),
            "CHILD" => Ok(Self::Child),
            "INFANT" => Ok(Self::Infant),
            other => Err(PurchaseError::InvalidTicketType {
                value: other.to_string(),
            }),
        }
    }
}

/// One line of a purchase: a quantity of a single ticket type.
///
/// Immutable once constructed. The quantity must be strictly positive;
/// fractional or negative quantities are unrepresentable in the type and
/// rejected at the serde boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    quantity: u32,
}

impl TicketTypeRequest {
    /// Creates a request for `quantity` tickets of `ticket_type`.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidTicketCount`] if `quantity` is zero.
    pub const fn new(ticket_type: TicketType, quantity: u32) -> Result<Self, PurchaseError> {
        if quantity == 0 {
            return Err(PurchaseError::InvalidTicketCount);
        }
        Ok(Self {
            ticket_type,
            quantity,
        })
    }

    /// The requested ticket type.
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// The requested quantity (always >= 1).
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Per-type aggregate counts for one purchase batch.
///
/// Produced by the validator by summing every request of the same type, so
/// downstream rules and pricing are count-based rather than request-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCounts {
    /// Aggregated adult tickets.
    pub adult: u32,
    /// Aggregated child tickets.
    pub child: u32,
    /// Aggregated infant tickets.
    pub infant: u32,
}

impl TicketCounts {
    /// Creates an empty count set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            adult: 0,
            child: 0,
            infant: 0,
        }
    }

    /// Returns the count for one ticket type.
    #[must_use]
    pub const fn count(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }

    /// Adds `quantity` tickets of `ticket_type` to the aggregate.
    ///
    /// Saturates rather than wraps; a saturated total is far beyond the
    /// per-purchase limit and rejected by the validator anyway.
    pub const fn record(&mut self, ticket_type: TicketType, quantity: u32) {
        match ticket_type {
            TicketType::Adult => self.adult = self.adult.saturating_add(quantity),
            TicketType::Child => self.child = self.child.saturating_add(quantity),
            TicketType::Infant => self.infant = self.infant.saturating_add(quantity),
        }
    }

    /// Total tickets across all types.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.adult
            .saturating_add(self.child)
            .saturating_add(self.infant)
    }
}

// ============================================================================
// Purchase Outcome
// ============================================================================

/// Result of a completed purchase.
///
/// Produced once per call and never persisted by the core; persistence, if
/// any, belongs to the collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOutcome {
    /// Correlates this purchase across logs and collaborators.
    pub transaction_id: TransactionId,
    /// Always `true` for a returned outcome; failures are errors instead.
    pub success: bool,
    /// The purchasing account, echoed back.
    pub account_id: AccountId,
    /// Amount charged through the payment gateway.
    pub total_cost: Money,
    /// Seats reserved (adults and children; infants excluded).
    pub total_seats: u32,
    /// When the purchase completed, per the injected clock.
    pub completed_at: DateTime<Utc>,
}
