use std::sync::Arc;
use crate::structs::session::Session;
use crate::structs::user::User;
use crate::traits::session_store::SessionStore;

/// One line of the trainer's read-only listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerSessionRow {
    pub session: Session,
    pub duration_days: i64,
}

/// Read-only list of the sessions assigned to the signed-in trainer. The
/// list is fetched fresh each time the view becomes visible or the trainer
/// changes, and dropped when hidden.
pub struct TrainerView<S: SessionStore + ?Sized> {
    store: Arc<S>,
    trainer: Option<User>,
    visible: bool,
    sessions: Vec<Session>,
    load_failure: Option<String>,
}

impl<S: SessionStore + ?Sized> TrainerView<S> {
    pub fn new(store: Arc<S>, trainer: Option<User>) -> Self {
        Self {
            store,
            trainer,
            visible: false,
            sessions: Vec::new(),
            load_failure: None,
        }
    }

    pub async fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.refresh().await;
    }

    pub async fn set_trainer(&mut self, trainer: Option<User>) {
        self.trainer = trainer;
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        let trainer_id = match (&self.trainer, self.visible) {
            (Some(trainer), true) => trainer.id,
            _ => {
                self.sessions.clear();
                self.load_failure = None;
                return;
            }
        };

        log::info!("📥 Loading sessions for trainer {}", trainer_id);
        let listing = self.store.list_sessions_by_trainer(trainer_id).await;
        self.load_failure = listing.failure.clone();
        self.sessions = listing.into_items();
    }

    pub fn trainer(&self) -> Option<&User> {
        self.trainer.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn count(&self) -> usize {
        self.sessions.len()
    }

    /// Why the last load came back empty, if it failed.
    pub fn load_failure(&self) -> Option<&str> {
        self.load_failure.as_deref()
    }

    pub fn rows(&self) -> Vec<TrainerSessionRow> {
        self.sessions
            .iter()
            .map(|session| TrainerSessionRow {
                duration_days: session.duration_days(),
                session: session.clone(),
            })
            .collect()
    }
}
