//! In-memory transport for exercising the publisher without a broker.

use crate::error::PublishError;
use crate::transport::{CapacityExceeded, Transport};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// A batch as it was flushed: routing key plus payloads in append order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentBatch {
    pub routing_key: Option<String>,
    pub payloads: Vec<Vec<u8>>,
}

/// An open in-memory batch.
pub struct MemoryBatch {
    payloads: Vec<Vec<u8>>,
    bytes: usize,
}

/// Capacity-bounded in-memory [`Transport`] that records flushed batches.
///
/// Supports one-shot flush failure injection to test error propagation.
pub struct MemoryTransport {
    capacity: usize,
    sent: Mutex<Vec<SentBatch>>,
    fail_next_flush: AtomicBool,
}

impl MemoryTransport {
    /// A transport whose batches hold at most `capacity` payload bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            sent: Mutex::new(Vec::new()),
            fail_next_flush: AtomicBool::new(false),
        }
    }

    /// Make the next flush fail with a transport error.
    pub fn fail_next_flush(&self) {
        self.fail_next_flush.store(true, Ordering::SeqCst);
    }

    /// Every batch flushed so far, in flush order.
    ///
    /// Recovers from lock poisoning; the recorded batches stay readable
    /// even if a panicking test poisoned the mutex.
    pub fn sent(&self) -> Vec<SentBatch> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    type Batch = MemoryBatch;

    fn open_batch(&self) -> MemoryBatch {
        MemoryBatch {
            payloads: Vec::new(),
            bytes: 0,
        }
    }

    fn try_append(
        &self,
        batch: &mut MemoryBatch,
        payload: &[u8],
    ) -> Result<(), CapacityExceeded> {
        if batch.bytes + payload.len() > self.capacity {
            return Err(CapacityExceeded);
        }
        batch.bytes += payload.len();
        batch.payloads.push(payload.to_vec());
        Ok(())
    }

    async fn flush(
        &self,
        batch: MemoryBatch,
        routing_key: Option<&str>,
    ) -> Result<u64, PublishError> {
        if self.fail_next_flush.swap(false, Ordering::SeqCst) {
            return Err(PublishError::Transport(
                "injected flush failure".to_string(),
            ));
        }

        let count = batch.payloads.len() as u64;
        let mut sent = self
            .sent
            .lock()
            .map_err(|_| PublishError::Transport("batch log lock poisoned".to_string()))?;
        sent.push(SentBatch {
            routing_key: routing_key.map(|key| key.to_string()),
            payloads: batch.payloads,
        });
        Ok(count)
    }
}
