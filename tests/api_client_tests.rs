use serde_json::json;
use session_desk::errors::SessionDeskError;
use session_desk::services::api_client::ApiClient;
use session_desk::structs::auth::{Credentials, SignupRequest};
use session_desk::structs::config::api_config::ApiConfig;
use session_desk::structs::profile_update::ProfileUpdate;
use session_desk::structs::session_draft::SessionDraft;
use session_desk::traits::account_store::AccountStore;
use session_desk::traits::session_store::SessionStore;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use crate::support::day;

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig::with_base_url(format!("{}/api/", server.uri()))).unwrap()
}

fn session_json(id: i64, trainers: serde_json::Value) -> serde_json::Value {
    json!({
        "idSession": id,
        "classe": "GL1",
        "specialite": "Génie logiciel",
        "promotion": "2026",
        "niveau": "1",
        "semestre": "S1",
        "dateD": "2026-10-01",
        "dateF": "2026-10-08",
        "formateurs": trainers
    })
}

#[tokio::test]
async fn sessions_are_decoded_from_camel_case() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            session_json(1, json!(null)),
            session_json(2, json!([{ "id": 9, "firstName": "Hela", "lastName": "Mansour", "email": "h@example.tn" }]))
        ])))
        .mount(&server)
        .await;

    let listing = client_for(&server).await.list_sessions().await;

    assert!(!listing.is_degraded());
    assert_eq!(listing.len(), 2);
    assert!(listing.items[0].formateurs.is_empty());
    assert_eq!(listing.items[1].assigned_trainer().map(|t| t.id), Some(9));
    assert_eq!(listing.items[1].date_f, day(2026, 10, 8));
}

#[tokio::test]
async fn server_error_degrades_to_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/formateurs"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "Database down" })))
        .mount(&server)
        .await;

    let listing = client_for(&server).await.list_trainers().await;

    assert!(listing.is_empty());
    assert_eq!(listing.failure.as_deref(), Some("Database down"));
}

#[tokio::test]
async fn non_array_payload_degrades_to_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sessions/formateur/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sessions": [] })))
        .mount(&server)
        .await;

    let listing = client_for(&server).await.list_sessions_by_trainer(4).await;

    assert!(listing.is_empty());
    assert!(listing.is_degraded());
}

#[tokio::test]
async fn assignment_posts_the_trainer_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sessions/3/affecter"))
        .and(body_json(json!({ "formateurId": 12 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_json(3, json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).await.assign_trainer(3, 12).await.unwrap();
}

#[tokio::test]
async fn unassignment_deletes_the_link() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/sessions/3/retirer/12"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).await.unassign_trainer(3, 12).await.unwrap();
}

#[tokio::test]
async fn create_sends_dates_and_optional_trainer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sessions"))
        .and(body_json(json!({
            "classe": "GL1",
            "specialite": "Génie logiciel",
            "promotion": "2026",
            "niveau": "1",
            "semestre": "S1",
            "dateD": "2026-10-01",
            "dateF": "2026-10-08"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(session_json(30, json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let draft = SessionDraft {
        classe: "GL1".into(),
        specialite: "Génie logiciel".into(),
        promotion: "2026".into(),
        niveau: "1".into(),
        semestre: "S1".into(),
        date_d: day(2026, 10, 1),
        date_f: day(2026, 10, 8),
        formateur_id: None,
    };
    let created = client_for(&server).await.create_session(&draft).await.unwrap();

    assert_eq!(created.id_session, 30);
}

#[tokio::test]
async fn write_errors_carry_the_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/sessions/5"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({ "error": "Session has trainers" })))
        .mount(&server)
        .await;

    let error = client_for(&server).await.delete_session(5).await.unwrap_err();

    assert_eq!(error.banner_message(), "Session has trainers");
    assert!(matches!(error, SessionDeskError::ApiError { status_code: 409, .. }));
}

#[tokio::test]
async fn empty_error_body_falls_back_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/sessions/5"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .await
        .update_session(5, &Default::default())
        .await
        .unwrap_err();

    assert_eq!(error.banner_message(), "HTTP 502");
    assert!(error.is_recoverable());
}

#[tokio::test]
async fn missing_session_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sessions/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let error = client_for(&server).await.get_session(404).await.unwrap_err();

    assert!(matches!(error, SessionDeskError::NotFound { .. }));
}

#[tokio::test]
async fn trainer_check_defaults_to_false_when_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sessions/1/check-formateur/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    assert!(client.is_trainer_in_session(1, 2).await);
    assert!(!client.is_trainer_in_session(1, 3).await);
}

#[tokio::test]
async fn rejected_credentials_are_an_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signin"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Bad credentials" })))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .await
        .login(&Credentials { email: "x@example.tn".into(), password: "nope".into() })
        .await
        .unwrap_err();

    assert_eq!(error, SessionDeskError::AuthenticationError { reason: "Bad credentials".into() });
}

#[tokio::test]
async fn failed_auth_check_reads_as_signed_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/check-auth"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let status = client_for(&server).await.check_auth().await;

    assert!(!status.authenticated);
}

fn auth_json() -> serde_json::Value {
    json!({
        "user": { "id": 21, "firstName": "Salma", "lastName": "Gharbi", "email": "s@example.tn", "roles": ["ROLE_FORMATEUR"] },
        "token": "jwt",
        "firstLogin": true
    })
}

#[tokio::test]
async fn null_fields_do_not_empty_the_listing() {
    let server = MockServer::start().await;
    let mut null_semestre = session_json(2, json!([]));
    null_semestre["semestre"] = json!(null);
    null_semestre["niveau"] = json!(null);
    let mut null_start = session_json(3, json!([]));
    null_start["dateD"] = json!(null);
    Mock::given(method("GET"))
        .and(path("/api/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            session_json(1, json!([])),
            null_semestre,
            null_start
        ])))
        .mount(&server)
        .await;

    let listing = client_for(&server).await.list_sessions().await;

    assert!(!listing.is_degraded());
    let ids: Vec<i64> = listing.items.iter().map(|s| s.id_session).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(listing.items[1].semestre, "");
    assert_eq!(listing.items[1].classe, "GL1");
}

#[tokio::test]
async fn created_session_reads_back_with_every_field() {
    let server = MockServer::start().await;
    let draft = SessionDraft {
        classe: "RT2".into(),
        specialite: "Réseaux".into(),
        promotion: "2027".into(),
        niveau: "2".into(),
        semestre: "S2".into(),
        date_d: day(2026, 11, 2),
        date_f: day(2026, 11, 20),
        formateur_id: Some(14),
    };
    let stored = json!({
        "idSession": 77,
        "classe": "RT2",
        "specialite": "Réseaux",
        "promotion": "2027",
        "niveau": "2",
        "semestre": "S2",
        "dateD": "2026-11-02",
        "dateF": "2026-11-20",
        "formateurs": [{ "id": 14, "firstName": "Omar", "lastName": "Sassi", "email": "o@example.tn" }]
    });
    Mock::given(method("POST"))
        .and(path("/api/sessions"))
        .and(body_json(json!({
            "classe": "RT2",
            "specialite": "Réseaux",
            "promotion": "2027",
            "niveau": "2",
            "semestre": "S2",
            "dateD": "2026-11-02",
            "dateF": "2026-11-20",
            "formateurId": 14
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(stored.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/sessions/77"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let created = client.create_session(&draft).await.unwrap();
    let fetched = client.get_session(created.id_session).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.classe, draft.classe);
    assert_eq!(fetched.specialite, draft.specialite);
    assert_eq!(fetched.promotion, draft.promotion);
    assert_eq!(fetched.niveau, draft.niveau);
    assert_eq!(fetched.semestre, draft.semestre);
    assert_eq!(fetched.date_d, draft.date_d);
    assert_eq!(fetched.date_f, draft.date_f);
    assert_eq!(fetched.assigned_trainer().map(|t| t.id), draft.formateur_id);
}

#[tokio::test]
async fn attach_trainer_posts_an_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sessions/3/assign-formateur/12"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_json(
            3,
            json!([{ "id": 12, "firstName": "Rim", "lastName": "Ayari", "email": "r@example.tn" }]),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let session = client_for(&server).await.attach_trainer(3, 12).await.unwrap();

    assert!(session.has_trainer(12));
}

#[tokio::test]
async fn unassign_all_posts_to_retirer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sessions/3/retirer"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Formateurs retirés"))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).await.unassign_all_trainers(3).await.unwrap();
}

#[tokio::test]
async fn signup_sends_camel_case_and_skips_empty_roles() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .and(body_json(json!({
            "firstName": "Salma",
            "lastName": "Gharbi",
            "email": "s@example.tn",
            "password": "secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_json()))
        .expect(1)
        .mount(&server)
        .await;

    let request = SignupRequest {
        first_name: "Salma".into(),
        last_name: "Gharbi".into(),
        email: "s@example.tn".into(),
        password: "secret".into(),
        roles: Vec::new(),
    };
    let response = client_for(&server).await.register(&request).await.unwrap();

    assert_eq!(response.user.id, 21);
    assert_eq!(response.first_login, Some(true));
}

#[tokio::test]
async fn verification_codes_are_posted_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/verify-code"))
        .and(body_json(json!({ "email": "s@example.tn", "code": "482913" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_json()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/resend-code"))
        .and(body_json(json!({ "email": "s@example.tn" })))
        .respond_with(ResponseTemplate::new(200).set_body_string("Code renvoyé"))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    client.resend_code("s@example.tn").await.unwrap();
    let response = client.verify_code("s@example.tn", "482913").await.unwrap();

    assert_eq!(response.token.as_deref(), Some("jwt"));
}

#[tokio::test]
async fn logout_posts_without_a_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).await.logout().await.unwrap();
}

#[tokio::test]
async fn profile_update_sends_only_changed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/user/profile"))
        .and(body_json(json!({ "bankName": "BIAT", "rib": "08006000" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 21, "firstName": "Salma", "lastName": "Gharbi", "email": "s@example.tn",
            "rib": "08006000", "bankName": "BIAT"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let update = ProfileUpdate {
        rib: Some("08006000".into()),
        bank_name: Some("BIAT".into()),
        ..ProfileUpdate::default()
    };
    let user = client_for(&server).await.update_user_profile(&update).await.unwrap();

    assert_eq!(user.bank_name.as_deref(), Some("BIAT"));
}

#[tokio::test]
async fn admin_listings_and_user_deletion() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "firstName": "Nour", "lastName": "Jaziri", "email": "n@example.tn", "roles": ["ROLE_ADMIN"] },
            { "id": 2, "firstName": "Rania", "lastName": "Ben Salem", "email": null, "roles": null }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/coordinateurs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 2, "firstName": "Rania", "lastName": "Ben Salem", "email": "r@example.tn", "roles": ["ROLE_COORDINATEUR"] }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/users/2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let users = client.get_users().await.unwrap();
    let coordinators = client.get_coordinateurs().await.unwrap();
    client.delete_user(2).await.unwrap();

    assert_eq!(users.len(), 2);
    assert!(users[1].roles.is_empty());
    assert_eq!(coordinators[0].full_name(), "Rania Ben Salem");
}
