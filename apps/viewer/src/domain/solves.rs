use serde::Serialize;

/// A solver run reported back by the game server. The solver itself is
/// external; this record is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRecord {
    pub id: u64,
    pub success: bool,
    pub result: bool,
    #[serde(rename = "duration")]
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveOutcome {
    Winnable,
    NotWinnable,
    Failed,
}

impl SolveOutcome {
    pub const fn label(self) -> &'static str {
        match self {
            SolveOutcome::Winnable => "Winnable",
            SolveOutcome::NotWinnable => "Not winnable",
            SolveOutcome::Failed => "Computation failed",
        }
    }
}

impl SolveRecord {
    pub fn outcome(&self) -> SolveOutcome {
        match (self.success, self.result) {
            (true, true) => SolveOutcome::Winnable,
            (true, false) => SolveOutcome::NotWinnable,
            (false, _) => SolveOutcome::Failed,
        }
    }

    pub fn duration_label(&self) -> String {
        format!("{}ms", self.duration_ms)
    }
}
