//! Shared helpers for the viewer's integration tests: one-shot logging
//! setup and builders for server snapshot JSON.

pub mod fixtures;
pub mod logging;

pub use fixtures::{card, player, sample_app_state, task, turn, SnapshotBuilder};
