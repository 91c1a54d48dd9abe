//! Batching publisher built on a [`Transport`].

use crate::error::PublishError;
use crate::transport::Transport;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::debug;

/// Metrics from a publish operation.
#[derive(Debug, Clone, Default)]
pub struct PublishMetrics {
    /// Number of events batched and flushed.
    pub events_published: u64,
    /// Number of batches flushed.
    pub batch_count: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl PublishMetrics {
    /// Calculate events per second.
    pub fn events_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.events_published as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Serializes records to JSON and groups them into transport-bounded batches.
///
/// Capacity decisions are delegated to the transport: the publisher appends
/// until the transport signals overflow, flushes, and retries the rejected
/// payload against a fresh batch. Flush failures propagate immediately and
/// the records still open in that batch are lost.
pub struct BatchPublisher<T: Transport> {
    transport: T,
}

impl<T: Transport> BatchPublisher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Publish one record as a single-element batch.
    ///
    /// `routing_key` is typically the record's entity id, so downstream
    /// consumers can upsert by identity.
    pub async fn publish_one<S: Serialize>(
        &self,
        record: &S,
        routing_key: Option<&str>,
    ) -> Result<(), PublishError> {
        let payload = serde_json::to_vec(record)?;

        let mut batch = self.transport.open_batch();
        if self.transport.try_append(&mut batch, &payload).is_err() {
            return Err(PublishError::PayloadTooLarge {
                bytes: payload.len(),
            });
        }
        self.transport.flush(batch, routing_key).await?;
        Ok(())
    }

    /// Publish a sequence of records, batching at transport capacity.
    ///
    /// Each overflow signal triggers exactly one flush; the remainder is
    /// flushed after the input is exhausted. Returns metrics whose
    /// `events_published` is the total record count batched.
    pub async fn publish_many<S: Serialize>(
        &self,
        records: &[S],
    ) -> Result<PublishMetrics, PublishError> {
        let start = Instant::now();
        let mut metrics = PublishMetrics::default();

        let mut batch = self.transport.open_batch();
        let mut in_batch = 0u64;

        for record in records {
            let payload = serde_json::to_vec(record)?;

            if self.transport.try_append(&mut batch, &payload).is_err() {
                if in_batch == 0 {
                    return Err(PublishError::PayloadTooLarge {
                        bytes: payload.len(),
                    });
                }

                // Batch is full: flush it and retry against a fresh one
                self.transport.flush(batch, None).await?;
                metrics.events_published += in_batch;
                metrics.batch_count += 1;
                debug!("flushed full batch of {in_batch} events");

                batch = self.transport.open_batch();
                in_batch = 0;
                if self.transport.try_append(&mut batch, &payload).is_err() {
                    return Err(PublishError::PayloadTooLarge {
                        bytes: payload.len(),
                    });
                }
            }
            in_batch += 1;
        }

        if in_batch > 0 {
            self.transport.flush(batch, None).await?;
            metrics.events_published += in_batch;
            metrics.batch_count += 1;
            debug!("flushed final batch of {in_batch} events");
        }

        metrics.total_duration = start.elapsed();
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTransport;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Event {
        id: u32,
        body: String,
    }

    fn event(id: u32) -> Event {
        Event {
            id,
            body: "x".repeat(20),
        }
    }

    fn payload_len() -> usize {
        serde_json::to_vec(&event(0)).unwrap().len()
    }

    #[tokio::test]
    async fn test_publish_one_sends_keyed_single_element_batch() {
        let publisher = BatchPublisher::new(MemoryTransport::new(1024));

        publisher
            .publish_one(&event(7), Some("CUST007"))
            .await
            .unwrap();

        let sent = publisher.transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].routing_key.as_deref(), Some("CUST007"));
        assert_eq!(sent[0].payloads.len(), 1);

        let decoded: Event = serde_json::from_slice(&sent[0].payloads[0]).unwrap();
        assert_eq!(decoded, event(7));
    }

    #[tokio::test]
    async fn test_publish_many_flushes_once_per_overflow() {
        // Capacity fits exactly two payloads per batch
        let capacity = payload_len() * 2;
        let publisher = BatchPublisher::new(MemoryTransport::new(capacity));

        let events: Vec<Event> = (0..5).map(event).collect();
        let metrics = publisher.publish_many(&events).await.unwrap();

        assert_eq!(metrics.events_published, 5);
        assert_eq!(metrics.batch_count, 3);

        let sent = publisher.transport().sent();
        let sizes: Vec<usize> = sent.iter().map(|batch| batch.payloads.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[tokio::test]
    async fn test_final_flush_holds_exactly_the_remainder() {
        let capacity = payload_len() * 2;
        let publisher = BatchPublisher::new(MemoryTransport::new(capacity));

        let events: Vec<Event> = (0..5).map(event).collect();
        publisher.publish_many(&events).await.unwrap();

        let sent = publisher.transport().sent();
        let last = sent.last().unwrap();
        assert_eq!(last.payloads.len(), 1);
        let decoded: Event = serde_json::from_slice(&last.payloads[0]).unwrap();
        assert_eq!(decoded, event(4));

        // All payloads were delivered in input order
        let all: Vec<Event> = sent
            .iter()
            .flat_map(|batch| &batch.payloads)
            .map(|payload| serde_json::from_slice(payload).unwrap())
            .collect();
        assert_eq!(all, events);
    }

    #[tokio::test]
    async fn test_publish_many_of_empty_input_flushes_nothing() {
        let publisher = BatchPublisher::new(MemoryTransport::new(1024));

        let metrics = publisher.publish_many::<Event>(&[]).await.unwrap();

        assert_eq!(metrics.events_published, 0);
        assert_eq!(metrics.batch_count, 0);
        assert!(publisher.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn test_oversized_record_is_rejected() {
        let publisher = BatchPublisher::new(MemoryTransport::new(8));

        let err = publisher
            .publish_one(&event(0), None)
            .await
            .unwrap_err();
        assert!(matches!(err, PublishError::PayloadTooLarge { .. }));

        let err = publisher.publish_many(&[event(0)]).await.unwrap_err();
        assert!(matches!(err, PublishError::PayloadTooLarge { .. }));
        assert!(publisher.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn test_flush_failure_propagates_without_retry() {
        let transport = MemoryTransport::new(1024);
        transport.fail_next_flush();
        let publisher = BatchPublisher::new(transport);

        let events: Vec<Event> = (0..3).map(event).collect();
        let err = publisher.publish_many(&events).await.unwrap_err();

        assert!(matches!(err, PublishError::Transport(_)));
        // The failed batch's records are lost, nothing was retried
        assert!(publisher.transport().sent().is_empty());
    }

    #[test]
    fn test_metrics_rate() {
        let metrics = PublishMetrics {
            events_published: 1000,
            batch_count: 10,
            total_duration: Duration::from_secs(10),
        };
        assert_eq!(metrics.events_per_second(), 100.0);

        assert_eq!(PublishMetrics::default().events_per_second(), 0.0);
    }
}
