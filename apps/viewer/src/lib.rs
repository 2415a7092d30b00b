#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod protocol;
pub mod session;
pub mod telemetry;
pub mod transport;

pub use config::ViewerConfig;
pub use domain::{
    annotate_trick, annotate_tricks, possible_cards, render, task_token, task_token_str, AppView,
    Card, ObjectiveNumbering, Player, RoundState, Seat, Suit, Task, TaskKind, TaskKindTag, Trick,
    Turn, Viewpoint,
};
pub use error::AppError;
pub use errors::domain::{DomainError, ValidationKind};
pub use protocol::{decode_app_state, decode_snapshot, MutationRequest, ServerMsg};
pub use session::ViewerSession;
pub use transport::{HttpMutationSink, MutationSink, RecordingSink};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    viewer_test_support::logging::init();
}
