use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// Roles the backend hands out. Server strings may carry a `ROLE_` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Coordinateur,
    Formateur,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Coordinateur, Role::Formateur];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Coordinateur => "COORDINATEUR",
            Role::Formateur => "FORMATEUR",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let upper = value.trim().to_ascii_uppercase();
        let name = upper.strip_prefix("ROLE_").unwrap_or(&upper);
        match name {
            "ADMIN" => Ok(Role::Admin),
            "COORDINATEUR" => Ok(Role::Coordinateur),
            "FORMATEUR" => Ok(Role::Formateur),
            _ => Err(format!("unknown role '{}'", value)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
