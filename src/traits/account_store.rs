use std::collections::BTreeMap;
use async_trait::async_trait;
use crate::errors::SessionDeskResult;
use crate::structs::auth::AuthStatus;
use crate::structs::user::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Reports `authenticated: false` rather than failing.
    async fn check_auth(&self) -> AuthStatus;

    async fn get_user_profile(&self) -> SessionDeskResult<User>;

    async fn get_fonctionnalites(&self) -> SessionDeskResult<BTreeMap<String, String>>;
}
