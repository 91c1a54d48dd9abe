//! Error types for the batching publisher.

use thiserror::Error;

/// Errors that can occur while publishing events.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A single serialized record does not fit in an empty batch.
    #[error("record of {bytes} bytes exceeds the transport batch capacity")]
    PayloadTooLarge { bytes: usize },

    #[error("topic creation error: {0}")]
    TopicCreation(String),

    #[error("transport error: {0}")]
    Transport(String),
}
