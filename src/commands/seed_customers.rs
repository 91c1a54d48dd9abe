//! Seed the customers topic: base records first, then a burst of updates.

use crate::commands::{connect, CUSTOMERS_TOPIC};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shopstream_generator::fixtures::DEFAULT_CUSTOMER_IDS;
use shopstream_generator::{Customer, CustomerGenerator};
use shopstream_publisher::Pacing;
use std::time::Duration;
use tracing::{error, info};

pub async fn run(brokers: &str, updates: u64, seed: u64) -> anyhow::Result<()> {
    let publisher = connect(brokers, CUSTOMERS_TOPIC).await?;
    let mut generator = CustomerGenerator::new(&DEFAULT_CUSTOMER_IDS, seed)?;
    let mut rng = StdRng::from_entropy();

    info!("Sending initial customer records...");
    let drip = Pacing::Fixed(Duration::from_millis(200));
    let initial: Vec<Customer> = generator.customers().cloned().collect();
    for customer in &initial {
        match publisher
            .publish_one(customer, Some(&customer.customer_id))
            .await
        {
            Ok(()) => info!(
                "Initial: {} - {} {} ({:?}, {:?})",
                customer.customer_id,
                customer.first_name,
                customer.last_name,
                customer.tier,
                customer.status
            ),
            Err(e) => error!("Failed to send initial record {}: {e}", customer.customer_id),
        }
        drip.pause(&mut rng).await;
    }

    info!("Waiting 3 seconds before updates...");
    tokio::time::sleep(Duration::from_secs(3)).await;

    info!("Sending {updates} customer updates...");
    let jitter = Pacing::Jittered {
        min: Duration::from_secs(1),
        max: Duration::from_secs(3),
    };
    for i in 1..=updates {
        let (customer_id, customer) = generator.next_update();
        match publisher.publish_one(&customer, Some(&customer_id)).await {
            Ok(()) => info!(
                "Update {i}/{updates}: {customer_id} - {} {} (Tier: {:?}, Orders: {}, LTV: ${:.2})",
                customer.first_name,
                customer.last_name,
                customer.tier,
                customer.total_orders,
                customer.lifetime_value
            ),
            Err(e) => error!("Failed to send update for {customer_id}: {e}"),
        }
        jitter.pause(&mut rng).await;
    }

    info!("Initial data and updates sent");
    Ok(())
}
