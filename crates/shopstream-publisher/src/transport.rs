//! Transport abstraction over a batch-oriented event stream.

use crate::error::PublishError;
use async_trait::async_trait;

/// Signal that an append would overflow the transport's batch capacity.
///
/// The batch is left unchanged; the caller is expected to flush it and retry
/// the append against a fresh batch.
#[derive(Debug, thiserror::Error)]
#[error("batch is at transport capacity")]
pub struct CapacityExceeded;

/// A batch-oriented event transport.
///
/// The transport owns the batch capacity rule. Callers never pre-count
/// bytes; they append until [`CapacityExceeded`] comes back, flush, and
/// continue with a new batch.
#[async_trait]
pub trait Transport: Send + Sync {
    /// An open, append-only batch of serialized payloads.
    type Batch: Send;

    /// Open a new empty batch.
    fn open_batch(&self) -> Self::Batch;

    /// Append a payload to the batch, or signal that the batch is full.
    ///
    /// On `Err` the batch is unchanged. An empty batch rejecting a payload
    /// means the payload can never be transmitted by this transport.
    fn try_append(
        &self,
        batch: &mut Self::Batch,
        payload: &[u8],
    ) -> Result<(), CapacityExceeded>;

    /// Transmit the batch, optionally attaching a routing key that groups
    /// the batch's events for ordered, keyed consumption downstream.
    ///
    /// Returns the number of events delivered. Delivery failures are
    /// propagated; the transport does not retry.
    async fn flush(
        &self,
        batch: Self::Batch,
        routing_key: Option<&str>,
    ) -> Result<u64, PublishError>;
}
