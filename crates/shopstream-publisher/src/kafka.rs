//! Kafka transport bound to a single topic.

use crate::error::PublishError;
use crate::transport::{CapacityExceeded, Transport};
use async_trait::async_trait;
use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::ClientConfig;
use std::time::Duration;
use tracing::info;

/// Default batch capacity in payload bytes.
///
/// Matches the 1 MiB event-batch ceiling common to managed streaming
/// services; the broker additionally enforces its own framed message limits.
pub const DEFAULT_MAX_BATCH_BYTES: usize = 1_048_576;

/// An open batch of payloads destined for one Kafka topic.
pub struct KafkaBatch {
    payloads: Vec<Vec<u8>>,
    bytes: usize,
}

/// Kafka-backed [`Transport`].
///
/// Bound to one topic at construction, the way the original publisher
/// selected a stream by appending an entity sub-path to its connection
/// string. Capacity is counted over appended payload bytes.
pub struct KafkaTransport {
    producer: FutureProducer,
    brokers: String,
    topic: String,
    max_batch_bytes: usize,
}

impl KafkaTransport {
    /// Create a producer connected to `brokers`, publishing to `topic`.
    pub fn connect(brokers: &str, topic: &str) -> Result<Self, PublishError> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "30000")
            .set("queue.buffering.max.messages", "100000")
            .set("linger.ms", "5")
            .create()?;

        Ok(Self {
            producer,
            brokers: brokers.to_string(),
            topic: topic.to_string(),
            max_batch_bytes: DEFAULT_MAX_BATCH_BYTES,
        })
    }

    /// Override the batch capacity in payload bytes.
    pub fn with_max_batch_bytes(mut self, max_batch_bytes: usize) -> Self {
        self.max_batch_bytes = max_batch_bytes;
        self
    }

    /// The topic this transport publishes to.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Create the bound topic if it doesn't exist.
    pub async fn create_topic_if_not_exists(&self, partitions: i32) -> Result<(), PublishError> {
        let admin_client: AdminClient<DefaultClientContext> = ClientConfig::new()
            .set("bootstrap.servers", &self.brokers)
            .create()?;

        let new_topic = NewTopic::new(&self.topic, partitions, TopicReplication::Fixed(1));
        let opts = AdminOptions::new().operation_timeout(Some(Duration::from_secs(10)));

        match admin_client.create_topics(&[new_topic], &opts).await {
            Ok(results) => {
                for result in results {
                    match result {
                        Ok(topic_name) => {
                            info!("Topic '{}' created successfully", topic_name);
                        }
                        Err((topic_name, err)) => {
                            let err_str = err.to_string();
                            if err_str.contains("already exists")
                                || err_str.contains("TopicExistsException")
                            {
                                info!("Topic '{}' already exists", topic_name);
                            } else {
                                return Err(PublishError::TopicCreation(format!(
                                    "failed to create topic {topic_name}: {err}"
                                )));
                            }
                        }
                    }
                }
            }
            Err(e) => {
                return Err(PublishError::TopicCreation(format!(
                    "failed to create topic: {e}"
                )));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl Transport for KafkaTransport {
    type Batch = KafkaBatch;

    fn open_batch(&self) -> KafkaBatch {
        KafkaBatch {
            payloads: Vec::new(),
            bytes: 0,
        }
    }

    fn try_append(
        &self,
        batch: &mut KafkaBatch,
        payload: &[u8],
    ) -> Result<(), CapacityExceeded> {
        if batch.bytes + payload.len() > self.max_batch_bytes {
            return Err(CapacityExceeded);
        }
        batch.bytes += payload.len();
        batch.payloads.push(payload.to_vec());
        Ok(())
    }

    async fn flush(
        &self,
        batch: KafkaBatch,
        routing_key: Option<&str>,
    ) -> Result<u64, PublishError> {
        // Queue all sends first, then await all deliveries
        let mut futures = Vec::with_capacity(batch.payloads.len());
        for payload in &batch.payloads {
            let mut record = FutureRecord::<str, [u8]>::to(&self.topic).payload(payload.as_slice());
            if let Some(key) = routing_key {
                record = record.key(key);
            }
            futures.push(self.producer.send(record, Duration::from_secs(30)));
        }

        let mut delivered = 0u64;
        for future in futures {
            match future.await {
                Ok(_) => delivered += 1,
                Err((err, _)) => return Err(PublishError::Kafka(err)),
            }
        }

        Ok(delivered)
    }
}
