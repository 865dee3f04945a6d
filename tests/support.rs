use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use async_trait::async_trait;
use chrono::NaiveDate;
use session_desk::errors::{SessionDeskError, SessionDeskResult};
use session_desk::structs::auth::AuthStatus;
use session_desk::structs::session::Session;
use session_desk::structs::session_draft::SessionDraft;
use session_desk::structs::session_patch::SessionPatch;
use session_desk::structs::soft_list::SoftList;
use session_desk::structs::user::User;
use session_desk::traits::account_store::AccountStore;
use session_desk::traits::session_store::SessionStore;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn user(id: i64, first: &str, roles: &[&str]) -> User {
    User {
        id,
        first_name: first.to_string(),
        last_name: "Test".to_string(),
        email: format!("{}@example.tn", first.to_lowercase()),
        roles: roles.iter().map(|r| r.to_string()).collect(),
        cin: None,
        rib: None,
        bank_name: None,
        fonctionnalite: None,
        created_at: None,
    }
}

pub fn session(id: i64, start: NaiveDate, end: NaiveDate) -> Session {
    Session {
        id_session: id,
        classe: format!("C{}", id),
        specialite: "Informatique".to_string(),
        promotion: "2026".to_string(),
        niveau: "2".to_string(),
        semestre: "S1".to_string(),
        date_d: start,
        date_f: end,
        formateurs: Vec::new(),
    }
}

#[derive(Default)]
struct State {
    sessions: Vec<Session>,
    trainers: Vec<User>,
    next_id: i64,
}

/// A backend kept in memory that behaves like the real one for the calls the
/// views make, including assignments showing up on the next read.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    reads_fail: AtomicBool,
    writes: AtomicUsize,
}

impl InMemoryStore {
    pub fn with(sessions: Vec<Session>, trainers: Vec<User>) -> Self {
        let next_id = sessions.iter().map(|s| s.id_session).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(State { sessions, trainers, next_id }),
            ..Self::default()
        }
    }

    pub fn fail_reads(&self) {
        self.reads_fail.store(true, Ordering::SeqCst);
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }

    fn soft<T>(&self, items: Vec<T>) -> SoftList<T> {
        if self.reads_fail.load(Ordering::SeqCst) {
            SoftList::failed("connection refused")
        } else {
            SoftList::loaded(items)
        }
    }
}

#[async_trait]
impl SessionStore for InMemoryStore {
    async fn list_sessions(&self) -> SoftList<Session> {
        let items = self.state.lock().unwrap().sessions.clone();
        self.soft(items)
    }

    async fn list_sessions_by_trainer(&self, trainer_id: i64) -> SoftList<Session> {
        let items = self
            .state
            .lock()
            .unwrap()
            .sessions
            .iter()
            .filter(|s| s.has_trainer(trainer_id))
            .cloned()
            .collect();
        self.soft(items)
    }

    async fn list_trainers(&self) -> SoftList<User> {
        let items = self.state.lock().unwrap().trainers.clone();
        self.soft(items)
    }

    async fn get_session(&self, id: i64) -> SessionDeskResult<Session> {
        self.state
            .lock()
            .unwrap()
            .sessions
            .iter()
            .find(|s| s.id_session == id)
            .cloned()
            .ok_or_else(|| SessionDeskError::not_found("Session", id))
    }

    async fn create_session(&self, draft: &SessionDraft) -> SessionDeskResult<Session> {
        self.record_write();
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        let mut created = session(id, draft.date_d, draft.date_f);
        created.classe = draft.classe.clone();
        created.specialite = draft.specialite.clone();
        created.promotion = draft.promotion.clone();
        created.niveau = draft.niveau.clone();
        created.semestre = draft.semestre.clone();
        if let Some(tid) = draft.formateur_id {
            if let Some(trainer) = state.trainers.iter().find(|t| t.id == tid).cloned() {
                created.formateurs.push(trainer);
            }
        }
        state.sessions.push(created.clone());
        Ok(created)
    }

    async fn update_session(&self, id: i64, patch: &SessionPatch) -> SessionDeskResult<Session> {
        self.record_write();
        let mut state = self.state.lock().unwrap();
        let target = state
            .sessions
            .iter_mut()
            .find(|s| s.id_session == id)
            .ok_or_else(|| SessionDeskError::api_error("Update session", 404, "Session introuvable"))?;
        if let Some(classe) = &patch.classe {
            target.classe = classe.clone();
        }
        if let Some(start) = patch.date_d {
            target.date_d = start;
        }
        if let Some(end) = patch.date_f {
            target.date_f = end;
        }
        Ok(target.clone())
    }

    async fn delete_session(&self, id: i64) -> SessionDeskResult<()> {
        self.record_write();
        let mut state = self.state.lock().unwrap();
        let before = state.sessions.len();
        state.sessions.retain(|s| s.id_session != id);
        if state.sessions.len() == before {
            return Err(SessionDeskError::api_error("Delete session", 404, "Session introuvable"));
        }
        Ok(())
    }

    async fn assign_trainer(&self, session_id: i64, trainer_id: i64) -> SessionDeskResult<()> {
        self.record_write();
        let mut state = self.state.lock().unwrap();
        let trainer = state
            .trainers
            .iter()
            .find(|t| t.id == trainer_id)
            .cloned()
            .ok_or_else(|| SessionDeskError::api_error("Assign trainer", 404, "Formateur introuvable"))?;
        let target = state
            .sessions
            .iter_mut()
            .find(|s| s.id_session == session_id)
            .ok_or_else(|| SessionDeskError::api_error("Assign trainer", 404, "Session introuvable"))?;
        target.formateurs = vec![trainer];
        Ok(())
    }

    async fn unassign_trainer(&self, session_id: i64, trainer_id: i64) -> SessionDeskResult<()> {
        self.record_write();
        let mut state = self.state.lock().unwrap();
        let target = state
            .sessions
            .iter_mut()
            .find(|s| s.id_session == session_id)
            .ok_or_else(|| SessionDeskError::api_error("Remove trainer", 404, "Session introuvable"))?;
        target.formateurs.retain(|t| t.id != trainer_id);
        Ok(())
    }
}

/// Account endpoints answering for a fixed viewer.
pub struct FixedAccount {
    pub status: AuthStatus,
    pub profile: User,
    pub features: SessionDeskResult<BTreeMap<String, String>>,
}

impl FixedAccount {
    pub fn signed_in(profile: User) -> Self {
        Self {
            status: AuthStatus {
                authenticated: true,
                id: Some(profile.id),
                email: Some(profile.email.clone()),
                roles: Vec::new(),
            },
            profile,
            features: Ok(BTreeMap::new()),
        }
    }
}

#[async_trait]
impl AccountStore for FixedAccount {
    async fn check_auth(&self) -> AuthStatus {
        self.status.clone()
    }

    async fn get_user_profile(&self) -> SessionDeskResult<User> {
        Ok(self.profile.clone())
    }

    async fn get_fonctionnalites(&self) -> SessionDeskResult<BTreeMap<String, String>> {
        self.features.clone()
    }
}
