use serde::{Deserialize, Serialize};
use crate::structs::user::User;

/// Where a session row sits in the assignment workflow. Only the first
/// trainer in the server's list counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionRowState {
    Unassigned,
    Assigned { trainer: User },
}

impl SessionRowState {
    pub fn is_assigned(&self) -> bool {
        matches!(self, SessionRowState::Assigned { .. })
    }

    pub fn trainer_id(&self) -> Option<i64> {
        match self {
            SessionRowState::Unassigned => None,
            SessionRowState::Assigned { trainer } => Some(trainer.id),
        }
    }
}
