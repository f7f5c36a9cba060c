//! Local write + queued reconciliation.
//!
//! Edits are applied to the in-memory list first and their partial updates are
//! queued here. The app drains the queue after rendering and hands each request
//! to [`reconcile`]. A failed request is logged and dropped: the local state
//! is never rolled back and nothing is retried until the next full refetch.

use serde_json::json;

use crate::api::ApiError;
use crate::log;
use crate::types::UpdateRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queued {
    pub seq: u64,
    pub request: UpdateRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outbox {
    last_seq: u64,
    pending: Vec<Queued>,
}

impl Outbox {
    pub fn enqueue(&mut self, request: UpdateRequest) -> u64 {
        self.last_seq += 1;
        self.pending.push(Queued { seq: self.last_seq, request });
        self.last_seq
    }

    pub fn pending(&self) -> &[Queued] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Sequence number of the newest request ever queued.
    pub fn last_seq(&self) -> u64 {
        self.last_seq
    }

    /// Drops everything up to and including `seq`; those requests are in flight.
    pub fn acknowledge(&mut self, seq: u64) {
        self.pending.retain(|q| q.seq > seq);
    }
}

/// Where queued updates are delivered.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn push_update(&self, request: &UpdateRequest) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciled {
    Confirmed,
    Failed(String),
}

pub async fn reconcile<B: Backend>(backend: &B, request: UpdateRequest) -> Reconciled {
    match backend.push_update(&request).await {
        Ok(()) => {
            log::debug("update_sent", json!({ "url": request.url }));
            Reconciled::Confirmed
        }
        Err(e) => {
            log::error("update_failed", json!({ "url": request.url, "error": e.to_string() }));
            Reconciled::Failed(e.to_string())
        }
    }
}
