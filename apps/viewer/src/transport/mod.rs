//! Outbound delivery of mutation requests.

mod http;
mod recording;

use async_trait::async_trait;

pub use http::HttpMutationSink;
pub use recording::RecordingSink;

use crate::error::AppError;
use crate::protocol::MutationRequest;

/// Fire-and-forget delivery of a mutation to the game server.
///
/// No retry and no deduplication; the next pushed snapshot is the only
/// confirmation the viewer ever gets.
#[async_trait]
pub trait MutationSink: Send + Sync {
    async fn send(&self, request: &MutationRequest) -> Result<(), AppError>;
}
