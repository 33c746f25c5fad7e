//! Box Office Purchase Demo
//!
//! Walks through the purchase flow with the default wiring (mock payment
//! gateway, mock seat reservation, random transaction ids):
//! - a family purchase with an infant on a lap
//! - a purchase at the 25-ticket limit
//! - rejected purchases, one per rule
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin purchase-demo
//! ```

use box_office_core::{AccountId, TicketService, TicketType, TicketTypeRequest};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn batch(spec: &[(TicketType, u32)]) -> Result<Vec<TicketTypeRequest>, box_office_core::PurchaseError> {
    spec.iter()
        .map(|&(ticket_type, quantity)| TicketTypeRequest::new(ticket_type, quantity))
        .collect()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,box_office_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("\n🎫 ============================================");
    println!("   Box Office - Purchase Demo");
    println!("============================================\n");

    let service = TicketService::with_defaults();

    println!("1️⃣  Family purchase: 2 adults, 1 child, 1 infant");
    let outcome = service
        .purchase(
            AccountId::new(1234),
            &batch(&[
                (TicketType::Adult, 2),
                (TicketType::Child, 1),
                (TicketType::Infant, 1),
            ])?,
        )
        .await?;
    println!(
        "   ✓ charged {} for {} seats (transaction {})\n",
        outcome.total_cost, outcome.total_seats, outcome.transaction_id
    );

    println!("2️⃣  Group purchase at the limit: 20 adults, 5 children");
    let outcome = service
        .purchase(
            AccountId::new(2),
            &batch(&[(TicketType::Adult, 20), (TicketType::Child, 5)])?,
        )
        .await?;
    println!(
        "   ✓ charged {} for {} seats (transaction {})\n",
        outcome.total_cost, outcome.total_seats, outcome.transaction_id
    );

    println!("3️⃣  Rejections, one per rule:");
    let attempts = [
        (AccountId::new(0), vec![(TicketType::Adult, 1)]),
        (AccountId::new(123), vec![]),
        (
            AccountId::new(123),
            vec![(TicketType::Child, 1), (TicketType::Infant, 1)],
        ),
        (
            AccountId::new(123),
            vec![(TicketType::Adult, 4), (TicketType::Infant, 5)],
        ),
        (
            AccountId::new(123),
            vec![
                (TicketType::Adult, 21),
                (TicketType::Child, 2),
                (TicketType::Infant, 3),
            ],
        ),
    ];
    for (account_id, spec) in attempts {
        match service.purchase(account_id, &batch(&spec)?).await {
            Ok(outcome) => println!("   ✗ unexpectedly accepted: {outcome:?}"),
            Err(error) => println!("   ✓ rejected: {error}"),
        }
    }

    println!("\n✓ Demo complete");
    Ok(())
}
