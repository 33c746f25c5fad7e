//! Pure cost and seat arithmetic over aggregated counts.
//!
//! No failure modes: input is always a [`TicketCounts`] produced by the
//! validator, and the fixed price table cannot overflow within the
//! per-purchase ticket limit.

use crate::types::{Money, TicketCounts, TicketType};

/// Converts aggregated counts into a total cost and a total seat count.
#[derive(Clone, Copy, Debug, Default)]
pub struct PricingCalculator;

impl PricingCalculator {
    /// Creates a new `PricingCalculator`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Price of one ticket of the given type.
    #[must_use]
    pub const fn price_of(ticket_type: TicketType) -> Money {
        match ticket_type {
            TicketType::Adult => Money::from_dollars(25),
            TicketType::Child => Money::from_dollars(15),
            TicketType::Infant => Money::from_dollars(0),
        }
    }

    /// Total cost of the batch, per the fixed price table.
    #[must_use]
    pub fn total_cost(&self, counts: TicketCounts) -> Money {
        TicketType::ALL
            .iter()
            .fold(Money::from_cents(0), |total, &ticket_type| {
                total.add(Self::price_of(ticket_type).multiply(counts.count(ticket_type)))
            })
    }

    /// Seats to reserve: one per adult and child; infants sit on laps.
    #[must_use]
    pub fn total_seats(&self, counts: TicketCounts) -> u32 {
        TicketType::ALL
            .iter()
            .filter(|ticket_type| ticket_type.requires_seat())
            .map(|&ticket_type| counts.count(ticket_type))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn counts(adult: u32, child: u32, infant: u32) -> TicketCounts {
        TicketCounts {
            adult,
            child,
            infant,
        }
    }

    #[test]
    fn price_table() {
        assert_eq!(
            PricingCalculator::price_of(TicketType::Adult),
            Money::from_dollars(25)
        );
        assert_eq!(
            PricingCalculator::price_of(TicketType::Child),
            Money::from_dollars(15)
        );
        assert!(PricingCalculator::price_of(TicketType::Infant).is_zero());
    }

    #[test]
    fn cost_sums_the_price_table() {
        let pricing = PricingCalculator::new();
        assert_eq!(
            pricing.total_cost(counts(2, 1, 1)),
            Money::from_dollars(65)
        );
        assert_eq!(pricing.total_cost(counts(1, 1, 0)), Money::from_dollars(40));
        assert_eq!(
            pricing.total_cost(counts(20, 5, 0)),
            Money::from_dollars(575)
        );
        assert_eq!(
            pricing.total_cost(counts(20, 2, 3)),
            Money::from_dollars(530)
        );
    }

    #[test]
    fn infants_cost_nothing() {
        let pricing = PricingCalculator::new();
        assert_eq!(
            pricing.total_cost(counts(1, 0, 1)),
            pricing.total_cost(counts(1, 0, 0))
        );
    }

    #[test]
    fn seats_exclude_infants() {
        let pricing = PricingCalculator::new();
        assert_eq!(pricing.total_seats(counts(2, 1, 1)), 3);
        assert_eq!(pricing.total_seats(counts(1, 1, 0)), 2);
        assert_eq!(pricing.total_seats(counts(20, 2, 3)), 22);
        assert_eq!(pricing.total_seats(counts(20, 5, 0)), 25);
    }

    #[test]
    fn pricing_is_deterministic() {
        let pricing = PricingCalculator::new();
        let batch = counts(3, 2, 1);
        assert_eq!(pricing.total_cost(batch), pricing.total_cost(batch));
        assert_eq!(pricing.total_seats(batch), pricing.total_seats(batch));
    }
}
