//! Purchase orchestration: validate, price, pay, reserve.

use crate::environment::PurchaseEnvironment;
use crate::error::PurchaseError;
use crate::pricing::PricingCalculator;
use crate::types::{AccountId, PurchaseOutcome, TicketTypeRequest};
use crate::validation::PurchaseValidator;

/// Public entry point for ticket purchases.
///
/// Sequences validation, pricing, and the external collaborators, and
/// assembles the [`PurchaseOutcome`]. Holds no state between calls.
pub struct TicketService {
    validator: PurchaseValidator,
    pricing: PricingCalculator,
    env: PurchaseEnvironment,
}

impl TicketService {
    /// Creates a service over the given environment.
    #[must_use]
    pub const fn new(env: PurchaseEnvironment) -> Self {
        Self {
            validator: PurchaseValidator::new(),
            pricing: PricingCalculator::new(),
            env,
        }
    }

    /// Creates a service with the default environment wiring.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(PurchaseEnvironment::with_defaults())
    }

    /// Validates, prices, and completes one purchase attempt.
    ///
    /// Payment strictly precedes seat reservation; the reservation is never
    /// attempted when payment fails. A reservation failure after a successful
    /// payment surfaces the reservation error without compensating the
    /// payment.
    ///
    /// # Errors
    ///
    /// Returns the first violated validation rule, or a collaborator failure
    /// passed through unchanged.
    pub async fn purchase(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseOutcome, PurchaseError> {
        let transaction_id = self.env.ids.next_id();

        let counts = match self.validator.validate(account_id, requests) {
            Ok(counts) => counts,
            Err(error) => {
                tracing::error!(
                    transaction_id = %transaction_id,
                    account_id = %account_id,
                    %error,
                    "purchase rejected"
                );
                return Err(error);
            }
        };

        let total_cost = self.pricing.total_cost(counts);
        let total_seats = self.pricing.total_seats(counts);

        self.env.payments.make_payment(account_id, total_cost).await?;
        // Payment has been taken past this point; a reservation failure below
        // surfaces to the caller with no compensation.
        self.env
            .reservations
            .reserve_seats(account_id, total_seats)
            .await?;

        tracing::info!(
            transaction_id = %transaction_id,
            account_id = %account_id,
            total_cost = %total_cost,
            total_seats,
            "purchase complete"
        );

        Ok(PurchaseOutcome {
            transaction_id,
            success: true,
            account_id,
            total_cost,
            total_seats,
            completed_at: self.env.clock.now(),
        })
    }
}
