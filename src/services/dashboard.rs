use std::collections::BTreeMap;
use std::sync::Arc;
use crate::config::constants::DEFAULT_FEATURES;
use crate::enums::capability::Capability;
use crate::enums::panel::Panel;
use crate::errors::{SessionDeskError, SessionDeskResult};
use crate::services::coordinator_view::CoordinatorView;
use crate::services::trainer_view::TrainerView;
use crate::structs::config::ui_config::UiConfig;
use crate::structs::role_set::RoleSet;
use crate::structs::user::User;
use crate::traits::account_store::AccountStore;
use crate::traits::session_store::SessionStore;

/// The signed-in viewer's dashboard: profile, role-derived capabilities and
/// the session views those capabilities unlock.
pub struct DashboardShell<S: SessionStore + ?Sized> {
    profile: User,
    roles: RoleSet,
    features: BTreeMap<String, String>,
    coordinator: Option<CoordinatorView<S>>,
    trainer: Option<TrainerView<S>>,
}

impl<S: SessionStore + ?Sized> DashboardShell<S> {
    pub async fn open<A: AccountStore + ?Sized>(account: &A, store: Arc<S>, ui: &UiConfig) -> SessionDeskResult<Self> {
        let status = account.check_auth().await;
        if !status.authenticated {
            return Err(SessionDeskError::AuthenticationError {
                reason: "not signed in".to_string(),
            });
        }

        let profile = account.get_user_profile().await?;
        let mut role_names = profile.roles.clone();
        role_names.extend(status.roles.iter().cloned());
        let roles = RoleSet::from_strings(&role_names);
        log::info!(
            "👤 {} signed in with roles: {}",
            profile.full_name(),
            roles.iter().map(|r| r.as_str()).collect::<Vec<_>>().join(", ")
        );

        let features = if roles.can(Capability::ViewFeatures) {
            Self::load_features(account).await
        } else {
            BTreeMap::new()
        };

        let coordinator = roles
            .can(Capability::ManageSessions)
            .then(|| {
                CoordinatorView::new(Arc::clone(&store), ui.banner_ttl())
                    .with_assignment(roles.can(Capability::AssignTrainers))
            });
        let trainer = roles
            .can(Capability::ViewOwnSessions)
            .then(|| TrainerView::new(Arc::clone(&store), Some(profile.clone())));

        Ok(Self {
            profile,
            roles,
            features,
            coordinator,
            trainer,
        })
    }

    async fn load_features<A: AccountStore + ?Sized>(account: &A) -> BTreeMap<String, String> {
        match account.get_fonctionnalites().await {
            Ok(features) if !features.is_empty() => features,
            Ok(_) => default_features(),
            Err(e) => {
                log::warn!("⚠️ Could not load features, using defaults: {}", e.banner_message());
                default_features()
            }
        }
    }

    /// Load every view the viewer has access to.
    pub async fn show_all(&mut self) {
        if let Some(view) = self.coordinator.as_mut() {
            view.show().await;
        }
        if let Some(view) = self.trainer.as_mut() {
            view.set_visible(true).await;
        }
    }

    pub fn profile(&self) -> &User {
        &self.profile
    }

    pub fn roles(&self) -> &RoleSet {
        &self.roles
    }

    pub fn features(&self) -> &BTreeMap<String, String> {
        &self.features
    }

    pub fn panels(&self) -> Vec<Panel> {
        let mut panels = vec![Panel::Profile];
        if !self.features.is_empty() {
            panels.push(Panel::Features);
        }
        if self.coordinator.is_some() {
            panels.push(Panel::SessionManagement);
        }
        if self.trainer.is_some() {
            panels.push(Panel::MySessions);
        }
        panels
    }

    /// Fails with `PermissionDenied` unless one of the viewer's roles grants `capability`.
    pub fn require(&self, capability: Capability) -> SessionDeskResult<()> {
        if self.roles.can(capability) {
            Ok(())
        } else {
            Err(SessionDeskError::permission_denied(capability))
        }
    }

    pub fn coordinator(&mut self) -> SessionDeskResult<&mut CoordinatorView<S>> {
        self.coordinator
            .as_mut()
            .ok_or_else(|| SessionDeskError::permission_denied(Capability::ManageSessions))
    }

    pub fn trainer(&mut self) -> SessionDeskResult<&mut TrainerView<S>> {
        self.trainer
            .as_mut()
            .ok_or_else(|| SessionDeskError::permission_denied(Capability::ViewOwnSessions))
    }
}

pub fn default_features() -> BTreeMap<String, String> {
    DEFAULT_FEATURES
        .iter()
        .map(|(key, label)| (key.to_string(), label.to_string()))
        .collect()
}
