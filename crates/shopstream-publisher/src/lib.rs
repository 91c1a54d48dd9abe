//! Batching event publisher for the shopstream pipeline.
//!
//! Records are serialized to JSON and grouped into transport-bounded batches.
//! The batch capacity belongs to the transport, not the publisher: the
//! publisher appends payloads until the transport signals
//! [`CapacityExceeded`], then flushes and opens a new batch. Real transports
//! enforce byte limits that include framing overhead the caller cannot know,
//! so the publisher never pre-counts bytes.
//!
//! # Architecture
//!
//! ```text
//!   records (serde::Serialize)
//!        │
//!        ▼
//! ┌──────────────────┐     CapacityExceeded      ┌──────────────────┐
//! │  BatchPublisher  │ ◄────────────────────────►│    Transport     │
//! │                  │                           │                  │
//! │ - serialize      │   open / append / flush   │ - KafkaTransport │
//! │ - flush-then-    │ ─────────────────────────►│ - MemoryTransport│
//! │   retry          │                           │                  │
//! └──────────────────┘                           └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use shopstream_publisher::{BatchPublisher, KafkaTransport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = KafkaTransport::connect("localhost:9092", "orders")?;
//!     transport.create_topic_if_not_exists(3).await?;
//!
//!     let publisher = BatchPublisher::new(transport);
//!     let metrics = publisher.publish_many(&["event-1", "event-2"]).await?;
//!     println!("published {} events", metrics.events_published);
//!     Ok(())
//! }
//! ```
//!
//! Failure semantics: a flush failure is propagated to the caller and the
//! unsent records of that batch are lost; there is no internal retry.

pub mod error;
pub mod kafka;
pub mod memory;
pub mod pacing;
pub mod publisher;
pub mod transport;

// Re-exports for convenience
pub use error::PublishError;
pub use kafka::{KafkaTransport, DEFAULT_MAX_BATCH_BYTES};
pub use memory::{MemoryTransport, SentBatch};
pub use pacing::Pacing;
pub use publisher::{BatchPublisher, PublishMetrics};
pub use transport::{CapacityExceeded, Transport};
