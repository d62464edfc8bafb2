use std::fmt;

/// Application lifecycle states
///
/// The platform drives the adapter through `NotStarted → Initializing →
/// Initialized → Running → Stopped`. `Stopped` is terminal. Shutdown is
/// reachable from every non-terminal state after `NotStarted`, because the
/// platform may stop the application before startup finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    NotStarted,
    Initializing,
    Initialized,
    Running,
    Stopped,
}

impl LifecycleState {
    /// Check whether a transition from this state to `next` is legal
    pub fn can_transition_to(self, next: LifecycleState) -> bool {
        use LifecycleState::*;
        matches!(
            (self, next),
            (NotStarted, Initializing)
                | (Initializing, Initialized)
                | (Initialized, Running)
                | (Initializing, Stopped)
                | (Initialized, Stopped)
                | (Running, Stopped)
        )
    }

    /// Check whether this state is terminal
    pub fn is_terminal(self) -> bool {
        matches!(self, LifecycleState::Stopped)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleState::NotStarted => "not started",
            LifecycleState::Initializing => "initializing",
            LifecycleState::Initialized => "initialized",
            LifecycleState::Running => "running",
            LifecycleState::Stopped => "stopped",
        };
        write!(f, "{}", name)
    }
}
