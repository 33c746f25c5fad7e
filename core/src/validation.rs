//! Admissibility rules for one purchase attempt.
//!
//! The validator checks the account id before looking at ticket content, so a
//! malformed account fails fast. Requests are then aggregated per type before
//! any rule runs: rule checks are count-based, not request-based, so splitting
//! one logical order across several same-type requests never changes the
//! outcome.

use crate::error::PurchaseError;
use crate::types::{AccountId, TicketCounts, TicketTypeRequest};

/// Maximum tickets in one purchase, counted across all types.
pub const MAX_TICKETS_PER_PURCHASE: u32 = 25;

/// How many infants one adult's lap accommodates.
pub const MAX_INFANTS_PER_ADULT: u32 = 1;

/// Applies account and batch-level rules, producing aggregated counts.
#[derive(Clone, Copy, Debug, Default)]
pub struct PurchaseValidator;

impl PurchaseValidator {
    /// Creates a new `PurchaseValidator`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Decides admissibility of one purchase attempt.
    ///
    /// Rules run in a fixed order so that the same error surfaces first when
    /// multiple violations co-occur: account id, non-empty batch, adult
    /// presence, infant ratio, ticket limit.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule as a [`PurchaseError`].
    pub fn validate(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<TicketCounts, PurchaseError> {
        if !account_id.is_valid() {
            return Err(PurchaseError::InvalidAccount {
                account_id: account_id.value(),
            });
        }

        if requests.is_empty() {
            return Err(PurchaseError::EmptyRequest);
        }

        let counts = Self::aggregate(requests);
        Self::check_adult_presence(counts)?;
        Self::check_infant_ratio(counts)?;
        Self::check_ticket_limit(counts)?;

        Ok(counts)
    }

    /// Sums every request of the same type into one count.
    fn aggregate(requests: &[TicketTypeRequest]) -> TicketCounts {
        let mut counts = TicketCounts::new();
        for request in requests {
            counts.record(request.ticket_type(), request.quantity());
        }
        counts
    }

    const fn check_adult_presence(counts: TicketCounts) -> Result<(), PurchaseError> {
        if counts.adult == 0 {
            return Err(PurchaseError::NoAdult);
        }
        Ok(())
    }

    const fn check_infant_ratio(counts: TicketCounts) -> Result<(), PurchaseError> {
        if counts.infant > counts.adult.saturating_mul(MAX_INFANTS_PER_ADULT) {
            return Err(PurchaseError::InfantExceedsAdult {
                adults: counts.adult,
                infants: counts.infant,
            });
        }
        Ok(())
    }

    const fn check_ticket_limit(counts: TicketCounts) -> Result<(), PurchaseError> {
        if counts.total() > MAX_TICKETS_PER_PURCHASE {
            return Err(PurchaseError::MaxTicketsExceeded {
                requested: counts.total(),
                limit: MAX_TICKETS_PER_PURCHASE,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::TicketType;

    fn requests(spec: &[(TicketType, u32)]) -> Vec<TicketTypeRequest> {
        spec.iter()
            .map(|&(ticket_type, quantity)| TicketTypeRequest::new(ticket_type, quantity).unwrap())
            .collect()
    }

    #[test]
    fn aggregates_counts_per_type() {
        let validator = PurchaseValidator::new();
        let counts = validator
            .validate(
                AccountId::new(1234),
                &requests(&[
                    (TicketType::Adult, 2),
                    (TicketType::Child, 1),
                    (TicketType::Infant, 1),
                ]),
            )
            .unwrap();

        assert_eq!(counts.adult, 2);
        assert_eq!(counts.child, 1);
        assert_eq!(counts.infant, 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn same_type_requests_are_summed_not_rejected() {
        let validator = PurchaseValidator::new();
        let split = validator
            .validate(
                AccountId::new(1),
                &requests(&[(TicketType::Adult, 1), (TicketType::Adult, 2)]),
            )
            .unwrap();
        let whole = validator
            .validate(AccountId::new(1), &requests(&[(TicketType::Adult, 3)]))
            .unwrap();

        assert_eq!(split, whole);
    }

    #[test]
    fn validation_is_order_independent() {
        let validator = PurchaseValidator::new();
        let forward = validator.validate(
            AccountId::new(1),
            &requests(&[
                (TicketType::Adult, 2),
                (TicketType::Child, 1),
                (TicketType::Infant, 1),
            ]),
        );
        let backward = validator.validate(
            AccountId::new(1),
            &requests(&[
                (TicketType::Infant, 1),
                (TicketType::Child, 1),
                (TicketType::Adult, 2),
            ]),
        );

        assert_eq!(forward, backward);
    }

    #[test]
    fn rejects_non_positive_account_ids() {
        let validator = PurchaseValidator::new();
        let batch = requests(&[(TicketType::Adult, 1)]);

        assert_eq!(
            validator.validate(AccountId::new(0), &batch),
            Err(PurchaseError::InvalidAccount { account_id: 0 })
        );
        assert_eq!(
            validator.validate(AccountId::new(-5), &batch),
            Err(PurchaseError::InvalidAccount { account_id: -5 })
        );
    }

    #[test]
    fn invalid_account_takes_precedence_over_empty_batch() {
        let validator = PurchaseValidator::new();
        assert_eq!(
            validator.validate(AccountId::new(0), &[]),
            Err(PurchaseError::InvalidAccount { account_id: 0 })
        );
    }

    #[test]
    fn rejects_empty_batch_for_valid_account() {
        let validator = PurchaseValidator::new();
        assert_eq!(
            validator.validate(AccountId::new(123), &[]),
            Err(PurchaseError::EmptyRequest)
        );
    }

    #[test]
    fn rejects_batch_without_adult() {
        let validator = PurchaseValidator::new();
        assert_eq!(
            validator.validate(
                AccountId::new(123),
                &requests(&[(TicketType::Child, 1), (TicketType::Infant, 1)]),
            ),
            Err(PurchaseError::NoAdult)
        );
    }

    #[test]
    fn adult_presence_is_checked_before_ticket_limit() {
        // 30 child tickets violate both the adult rule and the limit; the
        // adult rule surfaces first.
        let validator = PurchaseValidator::new();
        assert_eq!(
            validator.validate(AccountId::new(123), &requests(&[(TicketType::Child, 30)])),
            Err(PurchaseError::NoAdult)
        );
    }

    #[test]
    fn rejects_more_infants_than_adults() {
        let validator = PurchaseValidator::new();
        assert_eq!(
            validator.validate(
                AccountId::new(123),
                &requests(&[(TicketType::Adult, 4), (TicketType::Infant, 5)]),
            ),
            Err(PurchaseError::InfantExceedsAdult {
                adults: 4,
                infants: 5
            })
        );
    }

    #[test]
    fn infant_ratio_is_checked_before_ticket_limit() {
        // 5 adults + 30 infants break both the ratio and the limit; the
        // ratio surfaces first.
        let validator = PurchaseValidator::new();
        assert_eq!(
            validator.validate(
                AccountId::new(123),
                &requests(&[(TicketType::Adult, 5), (TicketType::Infant, 30)]),
            ),
            Err(PurchaseError::InfantExceedsAdult {
                adults: 5,
                infants: 30
            })
        );
    }

    #[test]
    fn one_infant_per_adult_is_admissible() {
        let validator = PurchaseValidator::new();
        let counts = validator
            .validate(
                AccountId::new(123),
                &requests(&[(TicketType::Adult, 3), (TicketType::Infant, 3)]),
            )
            .unwrap();
        assert_eq!(counts.infant, 3);
    }

    #[test]
    fn rejects_batch_over_ticket_limit() {
        let validator = PurchaseValidator::new();
        assert_eq!(
            validator.validate(
                AccountId::new(123),
                &requests(&[
                    (TicketType::Adult, 21),
                    (TicketType::Child, 2),
                    (TicketType::Infant, 3),
                ]),
            ),
            Err(PurchaseError::MaxTicketsExceeded {
                requested: 26,
                limit: MAX_TICKETS_PER_PURCHASE
            })
        );
    }

    #[test]
    fn accepts_batch_at_ticket_limit() {
        let validator = PurchaseValidator::new();
        let counts = validator
            .validate(
                AccountId::new(1234),
                &requests(&[(TicketType::Adult, 20), (TicketType::Child, 5)]),
            )
            .unwrap();
        assert_eq!(counts.total(), MAX_TICKETS_PER_PURCHASE);
    }
}
