//! Endless bursts of synthetic orders, batched at transport capacity.

use crate::commands::{connect, setup_shutdown_handler, ORDERS_TOPIC};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shopstream_generator::{Order, OrderGenerator};
use shopstream_publisher::{BatchPublisher, Pacing, Transport};
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, error, info};

pub async fn run(brokers: &str, burst: usize, seed: u64) -> anyhow::Result<()> {
    let publisher = connect(brokers, ORDERS_TOPIC).await?;
    let mut generator = OrderGenerator::new(seed);

    info!("Starting continuous order publishing (Ctrl+C to stop)...");
    let pacing = Pacing::Fixed(Duration::from_secs(5));
    let shutdown = setup_shutdown_handler();
    let burst_count = burst_loop(&publisher, &mut generator, burst, pacing, shutdown).await;

    info!("Stopped after {burst_count} bursts");
    Ok(())
}

/// Publish bursts of `burst` orders until the shutdown receiver resolves,
/// pausing between bursts. Returns the number of bursts attempted.
async fn burst_loop<T: Transport>(
    publisher: &BatchPublisher<T>,
    generator: &mut OrderGenerator,
    burst: usize,
    pacing: Pacing,
    mut shutdown: broadcast::Receiver<()>,
) -> u64 {
    let mut rng = StdRng::from_entropy();
    let mut burst_count = 0u64;
    loop {
        burst_count += 1;
        let orders: Vec<Order> = (0..burst).map(|_| generator.next_order()).collect();
        for order in &orders {
            debug!(
                "Generated order: {} - {} - ${:.2}",
                order.order_id, order.customer_name, order.total_amount
            );
        }

        match publisher.publish_many(&orders).await {
            Ok(metrics) => info!(
                "Burst {burst_count}: published {} orders in {} batch(es)",
                metrics.events_published, metrics.batch_count
            ),
            Err(e) => error!("Failed to publish order burst: {e}"),
        }

        tokio::select! {
            _ = shutdown.recv() => {
                info!("Received shutdown signal");
                break;
            }
            _ = pacing.pause(&mut rng) => {}
        }
    }
    burst_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopstream_publisher::MemoryTransport;

    #[tokio::test]
    async fn burst_loop_stops_on_shutdown_and_reports_count() {
        let publisher = BatchPublisher::new(MemoryTransport::new(65536));
        let mut generator = OrderGenerator::new(7);
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        shutdown_tx.send(()).unwrap();

        let count = burst_loop(
            &publisher,
            &mut generator,
            3,
            Pacing::Fixed(Duration::from_millis(5)),
            shutdown_rx,
        )
        .await;

        assert_eq!(count, 1);
        let sent = publisher.transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].payloads.len(), 3);
    }
}
