//! Payment collaborator interface and its development mock.
//!
//! The core invokes the gateway with a pre-validated amount and does not
//! interpret failures beyond passing them through to the caller. In
//! production this would be backed by a real payment processor integration.

use crate::types::{AccountId, Money};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

/// Payment gateway result.
pub type PaymentResult<T> = Result<T, PaymentError>;

/// Opaque failure reported by a payment processor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// The charge was declined.
    #[error("payment declined: {reason}")]
    Declined {
        /// Decline reason, as reported by the processor.
        reason: String,
    },

    /// The account lacks funds for the charge.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// The gateway did not answer in time.
    #[error("payment gateway timeout")]
    Timeout,

    /// Any other processor failure.
    #[error("payment failed: {message}")]
    Other {
        /// Error message from the processor.
        message: String,
    },
}

/// Payment gateway trait.
///
/// Abstraction over external payment processors. The core assumes a call
/// either succeeds or raises an error it does not interpret.
pub trait PaymentGateway: Send + Sync {
    /// Charges `amount` against the account.
    ///
    /// # Errors
    ///
    /// Returns a [`PaymentError`] if the charge fails.
    fn make_payment(
        &self,
        account_id: AccountId,
        amount: Money,
    ) -> Pin<Box<dyn Future<Output = PaymentResult<()>> + Send>>;
}

/// Mock payment gateway (always succeeds for development).
#[derive(Clone, Copy, Debug, Default)]
pub struct MockPaymentGateway;

impl MockPaymentGateway {
    /// Creates a new mock payment gateway.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing.
    #[must_use]
    pub fn shared() -> Arc<dyn PaymentGateway> {
        Arc::new(Self::new())
    }
}

impl PaymentGateway for MockPaymentGateway {
    fn make_payment(
        &self,
        account_id: AccountId,
        amount: Money,
    ) -> Pin<Box<dyn Future<Output = PaymentResult<()>> + Send>> {
        Box::pin(async move {
            // Simulate network delay
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

            tracing::info!(
                account_id = %account_id,
                amount = %amount,
                "mock payment accepted"
            );

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_payment_succeeds() {
        let gateway = MockPaymentGateway::new();
        let result = gateway
            .make_payment(AccountId::new(1), Money::from_dollars(65))
            .await;
        assert_eq!(result, Ok(()));
    }
}
