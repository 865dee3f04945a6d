use async_trait::async_trait;
use crate::errors::SessionDeskResult;
use crate::structs::session::Session;
use crate::structs::session_draft::SessionDraft;
use crate::structs::session_patch::SessionPatch;
use crate::structs::soft_list::SoftList;
use crate::structs::user::User;

/// The remote source of truth for sessions and their trainers.
///
/// Reads never fail: they degrade to an empty [`SoftList`]. Writes return
/// errors so the caller can surface them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn list_sessions(&self) -> SoftList<Session>;

    /// Sessions the backend considers assigned to `trainer_id`.
    async fn list_sessions_by_trainer(&self, trainer_id: i64) -> SoftList<Session>;

    async fn list_trainers(&self) -> SoftList<User>;

    async fn get_session(&self, id: i64) -> SessionDeskResult<Session>;

    async fn create_session(&self, draft: &SessionDraft) -> SessionDeskResult<Session>;

    async fn update_session(&self, id: i64, patch: &SessionPatch) -> SessionDeskResult<Session>;

    async fn delete_session(&self, id: i64) -> SessionDeskResult<()>;

    async fn assign_trainer(&self, session_id: i64, trainer_id: i64) -> SessionDeskResult<()>;

    async fn unassign_trainer(&self, session_id: i64, trainer_id: i64) -> SessionDeskResult<()>;
}
