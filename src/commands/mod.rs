//! Subcommand implementations.
//!
//! Every command connects a [`BatchPublisher`] over a [`KafkaTransport`]
//! bound to its target topic, then drives one publishing scenario. Transport
//! errors inside loops are logged and swallowed; only setup failures
//! propagate.

pub mod customer_updates;
pub mod orders;
pub mod sample_orders;
pub mod seed_customers;
pub mod targeted_updates;

use anyhow::Context;
use shopstream_publisher::{BatchPublisher, KafkaTransport};
use tracing::{error, info};

/// Topic for customer records, keyed by `customer_id`.
pub const CUSTOMERS_TOPIC: &str = "customers";

/// Topic for order events, unkeyed.
pub const ORDERS_TOPIC: &str = "orders";

/// Default partition count for created topics.
const TOPIC_PARTITIONS: i32 = 3;

/// Install a Ctrl+C handler. The returned receiver resolves once the
/// process is interrupted, letting endless publish loops drain and report
/// their running counts instead of dying mid-iteration.
pub(crate) fn setup_shutdown_handler() -> tokio::sync::broadcast::Receiver<()> {
    let (shutdown_tx, shutdown_rx) = tokio::sync::broadcast::channel(1);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            return;
        }
        info!("Received interrupt signal (Ctrl+C)");
        let _ = shutdown_tx.send(());
    });
    shutdown_rx
}

/// Connect a publisher to `topic`, creating the topic if needed.
pub(crate) async fn connect(
    brokers: &str,
    topic: &str,
) -> anyhow::Result<BatchPublisher<KafkaTransport>> {
    let transport =
        KafkaTransport::connect(brokers, topic).context("failed to create Kafka producer")?;
    transport
        .create_topic_if_not_exists(TOPIC_PARTITIONS)
        .await
        .with_context(|| format!("failed to create topic '{topic}'"))?;
    Ok(BatchPublisher::new(transport))
}
