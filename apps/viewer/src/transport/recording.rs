//! In-memory sink for dry runs and tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::info;

use super::MutationSink;
use crate::error::AppError;
use crate::protocol::MutationRequest;

#[derive(Debug, Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<MutationRequest>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests recorded so far, in send order.
    pub fn sent(&self) -> Vec<MutationRequest> {
        self.sent.lock().clone()
    }

    pub fn take(&self) -> Vec<MutationRequest> {
        std::mem::take(&mut *self.sent.lock())
    }
}

#[async_trait]
impl MutationSink for RecordingSink {
    async fn send(&self, request: &MutationRequest) -> Result<(), AppError> {
        info!(
            method = request.method().as_str(),
            path = %request.path(),
            body = %request.body(),
            "recorded mutation"
        );
        self.sent.lock().push(request.clone());
        Ok(())
    }
}
