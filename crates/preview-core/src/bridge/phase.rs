use std::fmt;

/// Where an invocation is in its lifecycle.
///
/// `Idle → BuildingTree → {TreeFailed | TreeReady} → Invoking →
/// {Faulted | Completed}`. Terminal states are never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    BuildingTree,
    TreeFailed,
    TreeReady,
    Invoking,
    Faulted,
    Completed,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::BuildingTree => "building_tree",
            Self::TreeFailed => "tree_failed",
            Self::TreeReady => "tree_ready",
            Self::Invoking => "invoking",
            Self::Faulted => "faulted",
            Self::Completed => "completed",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::TreeFailed | Self::Faulted | Self::Completed)
    }

    /// Whether `self → next` is an edge of the lifecycle.
    pub fn can_advance_to(self, next: Phase) -> bool {
        use Phase::*;
        matches!(
            (self, next),
            (Idle, BuildingTree)
                | (BuildingTree, TreeFailed)
                | (BuildingTree, TreeReady)
                | (BuildingTree, Faulted)
                | (TreeReady, Invoking)
                | (Invoking, Faulted)
                | (Invoking, Completed)
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_phases_have_no_exits() {
        let all = [
            Phase::Idle,
            Phase::BuildingTree,
            Phase::TreeFailed,
            Phase::TreeReady,
            Phase::Invoking,
            Phase::Faulted,
            Phase::Completed,
        ];
        for from in all.into_iter().filter(|p| p.is_terminal()) {
            assert!(all.iter().all(|to| !from.can_advance_to(*to)));
        }
    }
}
