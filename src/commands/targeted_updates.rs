//! Publish hand-written customer upserts that overwrite known records.

use crate::commands::{connect, CUSTOMERS_TOPIC};
use crate::fixtures;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shopstream_publisher::Pacing;
use std::time::Duration;
use tracing::{error, info};

pub async fn run(brokers: &str) -> anyhow::Result<()> {
    let publisher = connect(brokers, CUSTOMERS_TOPIC).await?;
    let mut rng = StdRng::from_entropy();

    let updates = fixtures::targeted_updates();
    let drip = Pacing::Fixed(Duration::from_secs(1));

    info!("Sending targeted customer updates to demonstrate upserts...");
    for (i, customer) in updates.iter().enumerate() {
        match publisher
            .publish_one(customer, Some(&customer.customer_id))
            .await
        {
            Ok(()) => info!(
                "Update {}: {} - {} {} (Tier: {:?}, Orders: {}, LTV: ${:.2}, Status: {:?})",
                i + 1,
                customer.customer_id,
                customer.first_name,
                customer.last_name,
                customer.tier,
                customer.total_orders,
                customer.lifetime_value,
                customer.status
            ),
            Err(e) => error!("Failed to send update for {}: {e}", customer.customer_id),
        }
        drip.pause(&mut rng).await;
    }

    info!("Sent {} targeted updates", updates.len());
    Ok(())
}
