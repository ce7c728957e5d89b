//! Alert priority derived from event states

use serde::{Deserialize, Serialize};

use crate::event::{NotificationEvents, State};

/// Alert urgency, `P1` highest. Ordering follows urgency, so `P1 > P5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    P1,
    P2,
    P3,
    P4,
    P5,
}

impl Priority {
    fn rank(self) -> u8 {
        match self {
            Priority::P1 => 5,
            Priority::P2 => 4,
            Priority::P3 => 3,
            Priority::P4 => 2,
            Priority::P5 => 1,
        }
    }

    /// Priority a single state calls for
    pub fn for_state(state: State) -> Self {
        match state {
            State::Error | State::Exception => Priority::P1,
            State::Warn | State::NoData => Priority::P3,
            State::Ok | State::Test => Priority::P5,
        }
    }

    /// Highest priority called for by any event in the batch
    pub fn classify(events: &NotificationEvents) -> Self {
        events
            .iter()
            .map(|e| Self::for_state(e.state))
            .max()
            .unwrap_or(Priority::P5)
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", 6 - self.rank())
    }
}
