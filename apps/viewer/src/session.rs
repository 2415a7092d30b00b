//! Client-side store for the latest snapshot and the local viewpoint.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::domain::{
    render, AppView, Card, ObjectiveNumbering, RoundState, Seat, TaskKindTag, Viewpoint,
};
use crate::error::AppError;
use crate::protocol::{decode_snapshot, MutationRequest, ServerMsg};

/// Holds the last good snapshot and the viewpoint it is rendered for.
///
/// Snapshots are swapped whole: readers get either the previous `Arc` or
/// the new one. The viewpoint lives outside the snapshot and survives
/// every replacement.
#[derive(Debug, Default)]
pub struct ViewerSession {
    snapshot: RwLock<Option<Arc<RoundState>>>,
    viewpoint: RwLock<Viewpoint>,
    applied: AtomicU64,
}

impl ViewerSession {
    pub fn new(viewpoint: Viewpoint) -> Self {
        Self {
            viewpoint: RwLock::new(viewpoint),
            ..Self::default()
        }
    }

    /// Installs `state` as the current snapshot, reporting any invariant
    /// violations it carries.
    pub fn apply_snapshot(&self, state: RoundState) -> Arc<RoundState> {
        for diagnostic in state.diagnostics() {
            warn!(?diagnostic, "snapshot violates a round invariant");
        }
        let state = Arc::new(state);
        *self.snapshot.write() = Some(Arc::clone(&state));
        let applied = self.applied.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(applied, tasks = state.tasks.len(), tricks = state.tricks.len(), "snapshot installed");
        state
    }

    /// Handles one raw push message.
    ///
    /// Returns the newly installed snapshot for `appstate`, `None` for
    /// messages that carry no state. On error the previous snapshot stays.
    pub fn apply_message(&self, text: &str) -> Result<Option<Arc<RoundState>>, AppError> {
        match ServerMsg::parse(text) {
            Ok(ServerMsg::AppState(wire)) => Ok(Some(self.apply_snapshot(decode_snapshot(&wire)))),
            Ok(ServerMsg::Pong) => {
                debug!("pong");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "discarding malformed message, keeping last snapshot");
                Err(e)
            }
        }
    }

    pub fn set_viewpoint(&self, viewpoint: Viewpoint) {
        let previous = std::mem::replace(&mut *self.viewpoint.write(), viewpoint);
        if previous != viewpoint {
            info!(viewing_as = ?viewpoint.viewing_as(), "viewpoint changed");
        }
    }

    pub fn viewpoint(&self) -> Viewpoint {
        *self.viewpoint.read()
    }

    pub fn current(&self) -> Option<Arc<RoundState>> {
        self.snapshot.read().clone()
    }

    /// Number of snapshots installed since the session started.
    pub fn applied(&self) -> u64 {
        self.applied.load(Ordering::Relaxed)
    }

    /// Rendered pages for the current snapshot, or `None` before the first one.
    pub fn render(&self) -> Option<AppView> {
        let state = self.current()?;
        Some(render(&state, self.viewpoint()))
    }

    /// Cards `seat` may be shown as choosing, under the current viewpoint.
    pub fn possible_cards(&self, seat: Seat) -> Vec<Card> {
        self.current()
            .map(|state| self.viewpoint().possible_cards(seat, &state.hands))
            .unwrap_or_default()
    }

    /// "Add objective" request for the current snapshot, `None` while the
    /// button is disabled.
    pub fn add_objective(&self, tag: TaskKindTag) -> Option<MutationRequest> {
        let numbering = self
            .current()
            .map(|state| ObjectiveNumbering::from_tasks(&state.tasks))
            .unwrap_or_else(|| ObjectiveNumbering::from_tasks(&[]));
        MutationRequest::add_objective(&numbering, tag)
    }
}
