//! Canonical on-screen tokens for objective ordering.
//!
//! These strings are game notation and must stay bit-exact.

use super::tasks::{TaskKind, MAX_ORDER};

pub const RELATIVE_MARK: &str = "<";
pub const LAST_MARK: &str = "Ω";

/// Token for a typed objective kind. A relative order above [`MAX_ORDER`]
/// renders as the empty string.
pub fn task_token(kind: TaskKind) -> String {
    match kind {
        TaskKind::Absolute(order) => order.to_string(),
        TaskKind::Relative(order) => relative_marks(i64::from(order)),
        TaskKind::Anytime => String::new(),
        TaskKind::Last => LAST_MARK.to_string(),
    }
}

/// Token for a loosely-typed `(type, order)` pair as it arrives on the wire.
///
/// Total: an unrecognized type renders as the empty string, and so does a
/// relative order that is negative or above [`MAX_ORDER`].
pub fn task_token_str(type_name: &str, order: i64) -> String {
    match type_name {
        "absolute" => order.to_string(),
        "relative" => relative_marks(order),
        "anytime" => String::new(),
        "last" => LAST_MARK.to_string(),
        _ => String::new(),
    }
}

fn relative_marks(order: i64) -> String {
    match u32::try_from(order) {
        Ok(n) if n <= MAX_ORDER => RELATIVE_MARK.repeat(n as usize),
        _ => String::new(),
    }
}

impl TaskKind {
    pub fn token(&self) -> String {
        task_token(*self)
    }
}
