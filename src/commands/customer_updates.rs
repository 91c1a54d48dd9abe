//! Endless stream of simulated customer updates.

use crate::commands::{connect, setup_shutdown_handler, CUSTOMERS_TOPIC};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shopstream_generator::fixtures::DEFAULT_CUSTOMER_IDS;
use shopstream_generator::CustomerGenerator;
use shopstream_publisher::{BatchPublisher, Pacing, Transport};
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{error, info};

pub async fn run(brokers: &str, seed: u64) -> anyhow::Result<()> {
    let publisher = connect(brokers, CUSTOMERS_TOPIC).await?;
    let mut generator = CustomerGenerator::new(&DEFAULT_CUSTOMER_IDS, seed)?;

    info!("Starting continuous customer updates (Ctrl+C to stop)...");
    let jitter = Pacing::Jittered {
        min: Duration::from_secs(2),
        max: Duration::from_secs(5),
    };
    let shutdown = setup_shutdown_handler();
    let update_count = update_loop(&publisher, &mut generator, jitter, shutdown).await;

    info!("Stopped after {update_count} updates");
    Ok(())
}

/// Publish updates until the shutdown receiver resolves, pausing between
/// sends. Returns the number of updates successfully published.
async fn update_loop<T: Transport>(
    publisher: &BatchPublisher<T>,
    generator: &mut CustomerGenerator,
    pacing: Pacing,
    mut shutdown: broadcast::Receiver<()>,
) -> u64 {
    let mut rng = StdRng::from_entropy();
    let mut update_count = 0u64;
    loop {
        let (customer_id, customer) = generator.next_update();
        match publisher.publish_one(&customer, Some(&customer_id)).await {
            Ok(()) => {
                update_count += 1;
                info!(
                    "Update #{update_count}: {customer_id} - {} {} (Tier: {:?}, Orders: {}, Status: {:?})",
                    customer.first_name,
                    customer.last_name,
                    customer.tier,
                    customer.total_orders,
                    customer.status
                );
            }
            Err(e) => error!("Failed to send update for {customer_id}: {e}"),
        }
        tokio::select! {
            _ = shutdown.recv() => {
                info!("Received shutdown signal");
                break;
            }
            _ = pacing.pause(&mut rng) => {}
        }
    }
    update_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopstream_publisher::MemoryTransport;

    #[tokio::test]
    async fn update_loop_stops_on_shutdown_and_reports_count() {
        let publisher = BatchPublisher::new(MemoryTransport::new(4096));
        let mut generator = CustomerGenerator::new(&["CUST001", "CUST002"], 7).unwrap();
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        shutdown_tx.send(()).unwrap();

        let count = update_loop(
            &publisher,
            &mut generator,
            Pacing::Fixed(Duration::from_millis(5)),
            shutdown_rx,
        )
        .await;

        assert_eq!(count, 1);
        let sent = publisher.transport().sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].routing_key.is_some());
    }
}
