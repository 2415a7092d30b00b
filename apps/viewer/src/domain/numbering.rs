//! Next-order allocation for new objectives.

use serde::Serialize;

use super::tasks::{Task, TaskKind, TaskKindTag};
use super::tokens::task_token;

/// Proposed orders for "add objective" actions.
///
/// The server stays authoritative: these values only seed the next request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveNumbering {
    pub next_absolute: u32,
    pub next_relative: u32,
    /// At least one `last` objective exists (not "exactly one").
    pub have_last: bool,
}

/// One "add objective" affordance as the host UI presents it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddObjective {
    pub kind: TaskKind,
    pub label: String,
    pub enabled: bool,
}

impl ObjectiveNumbering {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        // Order 0 stands for a missing or malformed order and adds nothing to the max.
        let mut max_absolute = 0u32;
        let mut max_relative = 0u32;
        let mut have_last = false;

        for task in tasks {
            match task.kind {
                TaskKind::Absolute(order) => max_absolute = max_absolute.max(order),
                TaskKind::Relative(order) => max_relative = max_relative.max(order),
                TaskKind::Anytime => {}
                TaskKind::Last => have_last = true,
            }
        }

        Self {
            next_absolute: max_absolute.saturating_add(1),
            next_relative: max_relative.saturating_add(1),
            have_last,
        }
    }

    /// The objective a new-task request of this kind should carry.
    pub fn next_kind(&self, tag: TaskKindTag) -> TaskKind {
        match tag {
            TaskKindTag::Absolute => TaskKind::Absolute(self.next_absolute),
            TaskKindTag::Relative => TaskKind::Relative(self.next_relative),
            TaskKindTag::Anytime => TaskKind::Anytime,
            TaskKindTag::Last => TaskKind::Last,
        }
    }

    /// Whether adding an objective of this kind is currently offered.
    /// The server remains the final enforcer of the single-`last` rule.
    pub fn can_add(&self, tag: TaskKindTag) -> bool {
        !(tag == TaskKindTag::Last && self.have_last)
    }

    pub fn affordance(&self, tag: TaskKindTag) -> AddObjective {
        let kind = self.next_kind(tag);
        let token = task_token(kind);
        let label = if token.is_empty() {
            "Add".to_string()
        } else {
            format!("Add {token}")
        };
        AddObjective {
            kind,
            label,
            enabled: self.can_add(tag),
        }
    }

    /// The four add buttons, in display order.
    pub fn affordances(&self) -> Vec<AddObjective> {
        TaskKindTag::ALL
            .iter()
            .map(|&tag| self.affordance(tag))
            .collect()
    }
}
