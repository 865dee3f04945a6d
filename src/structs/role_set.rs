use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use crate::enums::capability::Capability;
use crate::enums::role::Role;

/// The roles one user holds. Users may hold several at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet {
    roles: BTreeSet<Role>,
}

impl RoleSet {
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }

    pub fn from_strings<S: AsRef<str>>(names: &[S]) -> Self {
        let mut roles = BTreeSet::new();
        for name in names {
            match name.as_ref().parse::<Role>() {
                Ok(role) => {
                    roles.insert(role);
                }
                Err(reason) => log::debug!("Ignoring role: {}", reason),
            }
        }
        Self { roles }
    }

    pub fn has(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.iter().copied()
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.roles.iter().any(|role| Self::grants(*role, capability))
    }

    fn grants(role: Role, capability: Capability) -> bool {
        match role {
            // Admins also get the trainer panel, not only FORMATEUR accounts.
            Role::Admin => true,
            Role::Coordinateur => matches!(
                capability,
                Capability::ManageSessions | Capability::AssignTrainers | Capability::ViewFeatures
            ),
            Role::Formateur => matches!(capability, Capability::ViewOwnSessions),
        }
    }
}
