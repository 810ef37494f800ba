use crate::{overlay::Occlusion, routing::table::ContentUnit};

/// Stage of the transition cycle. The only legal cycle is `Idle -> Exiting -> Entering -> Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    /// Overlay sweeping in, old content receding.
    Exiting,
    /// New content mounted; overlay sweeping out, new content settling.
    Entering,
}

impl Phase {
    /// Successor in the cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Idle => Self::Exiting,
            Self::Exiting => Self::Entering,
            Self::Entering => Self::Idle,
        }
    }

    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Exiting => "exiting",
            Self::Entering => "entering",
        })
    }
}

/// Observable record of what the orchestrator did, in order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TransitionEvent {
    PhaseChanged {
        from: Phase,
        to: Phase,
        at_s: f64,
    },
    /// The displayed route changed. `occlusion` is the overlay state at that instant.
    Swapped {
        from_path: String,
        to_path: String,
        content: ContentUnit,
        occlusion: Occlusion,
        at_s: f64,
    },
    ScrollReset {
        at_s: f64,
    },
    /// An intent arriving mid-exit replaced the pending swap target.
    IntentRetargeted {
        path: String,
        at_s: f64,
    },
    /// An intent arriving mid-enter is held until the cycle reaches idle.
    IntentHeld {
        path: String,
        at_s: f64,
    },
    IntentDropped {
        path: String,
        at_s: f64,
    },
}

#[cfg(test)]
#[path = "../../tests/unit/transition/phase.rs"]
mod tests;
