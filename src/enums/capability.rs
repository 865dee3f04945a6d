use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    ManageSessions,
    AssignTrainers,
    ViewOwnSessions,
    ManageUsers,
    ViewFeatures,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Capability::ManageSessions => "manage sessions",
            Capability::AssignTrainers => "assign trainers",
            Capability::ViewOwnSessions => "view own sessions",
            Capability::ManageUsers => "manage users",
            Capability::ViewFeatures => "view features",
        };
        f.write_str(label)
    }
}
