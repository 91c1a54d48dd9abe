//! Publish the fixed sample order records once.

use crate::commands::{connect, ORDERS_TOPIC};
use crate::fixtures;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shopstream_publisher::Pacing;
use std::time::Duration;
use tracing::{error, info};

pub async fn run(brokers: &str) -> anyhow::Result<()> {
    let publisher = connect(brokers, ORDERS_TOPIC).await?;
    let mut rng = StdRng::from_entropy();

    let orders = fixtures::sample_orders();
    let drip = Pacing::Fixed(Duration::from_millis(500));

    info!("Sending {} sample orders...", orders.len());
    for order in &orders {
        match publisher.publish_one(order, None).await {
            Ok(()) => info!(
                "Sent: {} - {} - ${:.2}",
                order.order_id, order.customer_name, order.total_amount
            ),
            Err(e) => error!("Failed to send {}: {e}", order.order_id),
        }
        drip.pause(&mut rng).await;
    }

    info!("Sent {} sample orders", orders.len());
    Ok(())
}
