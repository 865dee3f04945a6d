use std::collections::BTreeMap;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use crate::enums::api_payload::ApiPayload;
use crate::errors::{SessionDeskError, SessionDeskResult};
use crate::structs::auth::{
    AssignmentRequest, AuthResponse, AuthStatus, Credentials, ResendCodeRequest, SignupRequest,
    VerifyCodeRequest,
};
use crate::structs::config::api_config::ApiConfig;
use crate::structs::profile_update::ProfileUpdate;
use crate::structs::session::Session;
use crate::structs::session_draft::SessionDraft;
use crate::structs::session_patch::SessionPatch;
use crate::structs::soft_list::SoftList;
use crate::structs::user::User;
use crate::traits::account_store::AccountStore;
use crate::traits::session_store::SessionStore;

/// Thin JSON client over the sessions backend. Every call goes through
/// [`ApiClient::execute`], which turns non-2xx answers into
/// [`SessionDeskError::ApiError`] carrying the server's own message.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> SessionDeskResult<Self> {
        let client = Client::builder()
            .cookie_store(config.include_credentials)
            .timeout(config.timeout())
            .build()
            .map_err(|e| SessionDeskError::config_error(&e.to_string(), Some("api"), None))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
    }

    async fn execute(&self, operation: &str, builder: RequestBuilder) -> SessionDeskResult<ApiPayload> {
        let response = builder.send().await.map_err(|e| SessionDeskError::NetworkError {
            operation: operation.to_string(),
            url: e.url().map(|u| u.to_string()),
            status_code: None,
            reason: e.to_string(),
        })?;

        let status = response.status();
        let url = response.url().to_string();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"));
        let text = response.text().await.map_err(|e| SessionDeskError::NetworkError {
            operation: operation.to_string(),
            url: Some(url.clone()),
            status_code: Some(status.as_u16()),
            reason: e.to_string(),
        })?;

        if !status.is_success() {
            let message = extract_error_message(&text)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            log::debug!("{} -> {} {}: {}", operation, status.as_u16(), url, message);
            return Err(SessionDeskError::api_error(operation, status.as_u16(), &message));
        }

        if text.is_empty() {
            return Ok(ApiPayload::Empty);
        }
        if !is_json {
            return Ok(ApiPayload::Text(text));
        }
        // A JSON content type with an unparsable body still reaches the caller as text.
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Ok(ApiPayload::Json(value)),
            Err(_) => Ok(ApiPayload::Text(text)),
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, operation: &str, builder: RequestBuilder) -> SessionDeskResult<T> {
        self.execute(operation, builder).await?.into_json(operation)
    }

    /// GET a collection, degrading to an empty list on any failure.
    async fn fetch_soft_list<T: DeserializeOwned>(&self, operation: &str, path: &str) -> SoftList<T> {
        let payload = match self.execute(operation, self.request(Method::GET, path)).await {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("⚠️ {} failed, showing an empty list: {}", operation, e.banner_message());
                return SoftList::failed(e.banner_message());
            }
        };

        match payload {
            // Rows are decoded one by one so a single malformed row is dropped, not the page.
            ApiPayload::Json(Value::Array(rows)) => {
                let total = rows.len();
                let items: Vec<T> = rows
                    .into_iter()
                    .enumerate()
                    .filter_map(|(index, row)| match serde_json::from_value::<T>(row) {
                        Ok(item) => Some(item),
                        Err(e) => {
                            log::warn!("⚠️ {}: skipping unreadable row {}: {}", operation, index, e);
                            None
                        }
                    })
                    .collect();
                log::debug!("📋 {}: {} of {} items", operation, items.len(), total);
                SoftList::loaded(items)
            }
            other => {
                log::warn!("⚠️ {} did not return a list: {:?}", operation, other);
                SoftList::failed("response was not a list")
            }
        }
    }

    // ===========================================================
    // Auth
    // ===========================================================

    pub async fn login(&self, credentials: &Credentials) -> SessionDeskResult<AuthResponse> {
        log::info!("🔐 Signing in as {}", credentials.email);
        let builder = self.request(Method::POST, "/auth/signin").json(credentials);
        self.fetch_json("Sign in", builder).await.map_err(|e| match e {
            SessionDeskError::ApiError { status_code: 401 | 403, message, .. } => {
                SessionDeskError::AuthenticationError { reason: message }
            }
            other => other,
        })
    }

    pub async fn register(&self, request: &SignupRequest) -> SessionDeskResult<AuthResponse> {
        let builder = self.request(Method::POST, "/auth/signup").json(request);
        self.fetch_json("Sign up", builder).await
    }

    pub async fn verify_code(&self, email: &str, code: &str) -> SessionDeskResult<AuthResponse> {
        let body = VerifyCodeRequest {
            email: email.to_string(),
            code: code.to_string(),
        };
        let builder = self.request(Method::POST, "/auth/verify-code").json(&body);
        self.fetch_json("Verify code", builder).await
    }

    pub async fn resend_code(&self, email: &str) -> SessionDeskResult<()> {
        let body = ResendCodeRequest { email: email.to_string() };
        self.execute("Resend code", self.request(Method::POST, "/auth/resend-code").json(&body))
            .await
            .map(|_| ())
    }

    pub async fn logout(&self) -> SessionDeskResult<()> {
        self.execute("Sign out", self.request(Method::POST, "/auth/logout"))
            .await
            .map(|_| ())
    }

    // ===========================================================
    // Profile
    // ===========================================================

    pub async fn update_user_profile(&self, update: &ProfileUpdate) -> SessionDeskResult<User> {
        let builder = self.request(Method::PUT, "/user/profile").json(update);
        self.fetch_json("Update profile", builder).await
    }

    // ===========================================================
    // Admin
    // ===========================================================

    pub async fn get_users(&self) -> SessionDeskResult<Vec<User>> {
        self.fetch_json("List users", self.request(Method::GET, "/admin/users")).await
    }

    pub async fn get_coordinateurs(&self) -> SessionDeskResult<Vec<User>> {
        self.fetch_json("List coordinators", self.request(Method::GET, "/admin/coordinateurs"))
            .await
    }

    pub async fn delete_user(&self, user_id: i64) -> SessionDeskResult<()> {
        log::info!("🗑️ Deleting user {}", user_id);
        let path = format!("/admin/users/{}", user_id);
        self.execute("Delete user", self.request(Method::DELETE, &path))
            .await
            .map(|_| ())
    }

    // ===========================================================
    // Session assignment variants
    // ===========================================================

    /// `POST /sessions/{id}/assign-formateur/{trainerId}`; returns the updated session.
    pub async fn attach_trainer(&self, session_id: i64, trainer_id: i64) -> SessionDeskResult<Session> {
        log::info!("🎯 Attaching trainer {} to session {}", trainer_id, session_id);
        let path = format!("/sessions/{}/assign-formateur/{}", session_id, trainer_id);
        let builder = self.request(Method::POST, &path).json(&json!({}));
        self.fetch_json("Attach trainer", builder).await
    }

    /// `POST /sessions/{id}/retirer`: clears every trainer from the session.
    pub async fn unassign_all_trainers(&self, session_id: i64) -> SessionDeskResult<()> {
        log::info!("🗑️ Removing all trainers from session {}", session_id);
        let path = format!("/sessions/{}/retirer", session_id);
        self.execute("Remove trainers", self.request(Method::POST, &path))
            .await
            .map(|_| ())
    }

    /// Falls back to `false` when the check endpoint is unavailable.
    pub async fn is_trainer_in_session(&self, session_id: i64, trainer_id: i64) -> bool {
        let path = format!("/sessions/{}/check-formateur/{}", session_id, trainer_id);
        match self.execute("Check trainer", self.request(Method::GET, &path)).await {
            Ok(payload) => payload.is_truthy(),
            Err(e) => {
                log::warn!("Check endpoint {} unavailable, assuming false: {}", path, e.banner_message());
                false
            }
        }
    }
}

#[async_trait]
impl SessionStore for ApiClient {
    async fn list_sessions(&self) -> SoftList<Session> {
        self.fetch_soft_list("List sessions", "/sessions").await
    }

    async fn list_sessions_by_trainer(&self, trainer_id: i64) -> SoftList<Session> {
        let path = format!("/sessions/formateur/{}", trainer_id);
        self.fetch_soft_list("List trainer sessions", &path).await
    }

    async fn list_trainers(&self) -> SoftList<User> {
        self.fetch_soft_list("List trainers", "/admin/formateurs").await
    }

    async fn get_session(&self, id: i64) -> SessionDeskResult<Session> {
        let path = format!("/sessions/{}", id);
        self.fetch_json("Load session", self.request(Method::GET, &path))
            .await
            .map_err(|e| match e {
                SessionDeskError::ApiError { status_code: 404, .. } => SessionDeskError::not_found("Session", id),
                other => other,
            })
    }

    async fn create_session(&self, draft: &SessionDraft) -> SessionDeskResult<Session> {
        log::info!("📤 Creating session {} ({} → {})", draft.classe, draft.date_d, draft.date_f);
        let builder = self.request(Method::POST, "/sessions").json(draft);
        self.fetch_json("Create session", builder).await
    }

    async fn update_session(&self, id: i64, patch: &SessionPatch) -> SessionDeskResult<Session> {
        log::info!("📤 Updating session {}", id);
        let path = format!("/sessions/{}", id);
        self.fetch_json("Update session", self.request(Method::PUT, &path).json(patch))
            .await
    }

    async fn delete_session(&self, id: i64) -> SessionDeskResult<()> {
        log::info!("🗑️ Deleting session {}", id);
        let path = format!("/sessions/{}", id);
        self.execute("Delete session", self.request(Method::DELETE, &path))
            .await
            .map(|_| ())
    }

    async fn assign_trainer(&self, session_id: i64, trainer_id: i64) -> SessionDeskResult<()> {
        log::info!("🎯 Assigning trainer {} to session {}", trainer_id, session_id);
        let path = format!("/sessions/{}/affecter", session_id);
        let body = AssignmentRequest { formateur_id: trainer_id };
        self.execute("Assign trainer", self.request(Method::POST, &path).json(&body))
            .await
            .map(|_| ())
    }

    async fn unassign_trainer(&self, session_id: i64, trainer_id: i64) -> SessionDeskResult<()> {
        log::info!("🗑️ Removing trainer {} from session {}", trainer_id, session_id);
        let path = format!("/sessions/{}/retirer/{}", session_id, trainer_id);
        self.execute("Remove trainer", self.request(Method::DELETE, &path))
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl AccountStore for ApiClient {
    async fn check_auth(&self) -> AuthStatus {
        match self.fetch_json::<AuthStatus>("Check auth", self.request(Method::GET, "/auth/check-auth")).await {
            Ok(status) => status,
            Err(e) => {
                log::debug!("Auth check failed, treating as signed out: {}", e.banner_message());
                AuthStatus::signed_out()
            }
        }
    }

    async fn get_user_profile(&self) -> SessionDeskResult<User> {
        self.fetch_json("Load profile", self.request(Method::GET, "/user/profile")).await
    }

    async fn get_fonctionnalites(&self) -> SessionDeskResult<BTreeMap<String, String>> {
        self.fetch_json("Load features", self.request(Method::GET, "/user/fonctionnalites"))
            .await
    }
}

/// Pull `error`, then `message`, out of a JSON error body; otherwise the raw
/// text. `None` only for an empty body.
pub fn extract_error_message(body: &str) -> Option<String> {
    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) {
        for key in ["error", "message"] {
            if let Some(Value::String(message)) = fields.get(key) {
                if !message.is_empty() {
                    return Some(message.clone());
                }
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
