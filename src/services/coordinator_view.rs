use std::sync::Arc;
use std::time::{Duration, Instant};
use chrono::NaiveDate;
use crate::enums::capability::Capability;
use crate::enums::session_row_state::SessionRowState;
use crate::errors::{SessionDeskError, SessionDeskResult};
use crate::structs::banner::Banner;
use crate::structs::session::Session;
use crate::structs::session_form::SessionForm;
use crate::structs::session_patch::SessionPatch;
use crate::structs::user::User;
use crate::traits::confirmer::Confirmer;
use crate::traits::session_store::SessionStore;

/// Coordinator-facing list of every session, with create/edit/delete and
/// trainer assignment.
///
/// State is never patched locally: every successful mutation is followed by
/// a full reload from the store, so rows only ever show what the backend
/// confirmed.
pub struct CoordinatorView<S: SessionStore + ?Sized> {
    store: Arc<S>,
    sessions: Vec<Session>,
    trainers: Vec<User>,
    trainers_loaded: bool,
    form: Option<SessionForm>,
    editing: Option<i64>,
    banner: Option<Banner>,
    banner_ttl: Duration,
    can_assign: bool,
}

impl<S: SessionStore + ?Sized> CoordinatorView<S> {
    pub fn new(store: Arc<S>, banner_ttl: Duration) -> Self {
        Self {
            store,
            sessions: Vec::new(),
            trainers: Vec::new(),
            trainers_loaded: false,
            form: None,
            editing: None,
            banner: None,
            banner_ttl,
            can_assign: true,
        }
    }

    /// Whether assign and unassign are offered. Session edits stay available either way.
    pub fn with_assignment(mut self, allowed: bool) -> Self {
        self.can_assign = allowed;
        self
    }

    pub fn can_assign(&self) -> bool {
        self.can_assign
    }

    /// Load sessions, and trainers the first time the view is shown.
    pub async fn show(&mut self) {
        if self.trainers_loaded {
            self.reload().await;
            return;
        }

        let (sessions, trainers) = futures::join!(self.store.list_sessions(), self.store.list_trainers());
        self.sessions = sessions.into_items();
        self.trainers = trainers.into_items();
        self.trainers_loaded = true;
        log::info!("📋 {} sessions, {} trainers loaded", self.sessions.len(), self.trainers.len());
    }

    pub async fn reload(&mut self) {
        self.sessions = self.store.list_sessions().await.into_items();
        log::debug!("🔄 Reloaded {} sessions", self.sessions.len());
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn trainers(&self) -> &[User] {
        &self.trainers
    }

    pub fn session(&self, id: i64) -> Option<&Session> {
        self.sessions.iter().find(|session| session.id_session == id)
    }

    pub fn row_state(&self, id: i64) -> Option<SessionRowState> {
        self.session(id).map(Session::row_state)
    }

    pub async fn assign(&mut self, session_id: i64, trainer_id: i64, now: Instant) -> SessionDeskResult<()> {
        self.clear_error();

        let outcome = match self.row_state(session_id) {
            _ if !self.can_assign => Err(SessionDeskError::permission_denied(Capability::AssignTrainers)),
            None => Err(SessionDeskError::not_found("Session", session_id)),
            Some(SessionRowState::Assigned { trainer }) => Err(SessionDeskError::validation_error(
                "formateurId",
                &trainer_id.to_string(),
                &format!("Session already has a trainer ({}); remove them first", trainer.full_name()),
            )),
            Some(SessionRowState::Unassigned) => self.store.assign_trainer(session_id, trainer_id).await,
        };

        self.finish(outcome, "Trainer assigned", now).await
    }

    pub async fn unassign(&mut self, session_id: i64, trainer_id: i64, now: Instant) -> SessionDeskResult<()> {
        self.clear_error();

        let outcome = match self.session(session_id) {
            _ if !self.can_assign => Err(SessionDeskError::permission_denied(Capability::AssignTrainers)),
            None => Err(SessionDeskError::not_found("Session", session_id)),
            Some(session) if !session.has_trainer(trainer_id) => Err(SessionDeskError::validation_error(
                "formateurId",
                &trainer_id.to_string(),
                "This trainer is not assigned to the session",
            )),
            Some(_) => self.store.unassign_trainer(session_id, trainer_id).await,
        };

        self.finish(outcome, "Trainer removed", now).await
    }

    pub fn begin_create(&mut self) -> &mut SessionForm {
        self.editing = None;
        self.form.insert(SessionForm::default())
    }

    pub fn begin_edit(&mut self, session_id: i64) -> SessionDeskResult<&mut SessionForm> {
        let form = self
            .session(session_id)
            .map(SessionForm::from_session)
            .ok_or_else(|| SessionDeskError::not_found("Session", session_id))?;
        self.editing = Some(session_id);
        Ok(self.form.insert(form))
    }

    pub fn form(&self) -> Option<&SessionForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut SessionForm> {
        self.form.as_mut()
    }

    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
        self.editing = None;
    }

    /// Validate the open form against `today`, then create or update.
    /// Validation failures never reach the store.
    pub async fn submit(&mut self, today: NaiveDate, now: Instant) -> SessionDeskResult<Session> {
        self.clear_error();

        let form = self.form.as_ref().ok_or_else(|| {
            SessionDeskError::user_input_error("submit", "an open session form", "Start a create or edit first")
        })?;

        let draft = match form.to_draft().and_then(|draft| draft.validate(today).map(|()| draft)) {
            Ok(draft) => draft,
            Err(e) => {
                let error: SessionDeskError = e.into();
                self.banner = Some(Banner::error(error.banner_message()));
                return Err(error);
            }
        };

        let (result, message) = match self.editing {
            Some(id) => (self.store.update_session(id, &SessionPatch::from(draft)).await, "Session updated"),
            None => (self.store.create_session(&draft).await, "Session created"),
        };

        match result {
            Ok(session) => {
                self.cancel_form();
                self.banner = Some(Banner::success(message, now, self.banner_ttl));
                self.reload().await;
                Ok(session)
            }
            Err(e) => {
                self.banner = Some(Banner::error(format!("Error: {}", e.banner_message())));
                Err(e)
            }
        }
    }

    /// Returns `Ok(false)` when the confirmation was declined.
    pub async fn delete(&mut self, session_id: i64, confirmer: &dyn Confirmer, now: Instant) -> SessionDeskResult<bool> {
        if !confirmer.confirm("Are you sure you want to delete this session?") {
            return Ok(false);
        }
        self.clear_error();

        let outcome = self.store.delete_session(session_id).await;
        self.finish(outcome, "Session deleted", now).await.map(|()| true)
    }

    /// The banner still on screen at `now`.
    pub fn banner(&self, now: Instant) -> Option<&Banner> {
        self.banner.as_ref().filter(|banner| banner.is_visible_at(now))
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    fn clear_error(&mut self) {
        if self.banner.as_ref().is_some_and(Banner::is_error) {
            self.banner = None;
        }
    }

    async fn finish(&mut self, outcome: SessionDeskResult<()>, success: &str, now: Instant) -> SessionDeskResult<()> {
        match outcome {
            Ok(()) => {
                log::info!("✅ {}", success);
                self.banner = Some(Banner::success(success, now, self.banner_ttl));
                self.reload().await;
                Ok(())
            }
            Err(e) => {
                log::error!("❌ {}", e.technical_details());
                self.banner = Some(Banner::error(format!("Error: {}", e.banner_message())));
                Err(e)
            }
        }
    }
}
