//! Mock service tests for the gamelist HTTP client.
//!
//! These tests use wiremock to simulate the gamelist API and exercise the
//! request pipeline, the refresh protocol and the domain services without
//! network access.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use gamelist_core::error::AuthError;
use gamelist_core::{
    ApiUrl, Credentials, Error, Navigator, Route, SessionStore, UpdateListPayload, user_message,
};
use gamelist_http::{ClientConfig, GameListClient};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Records every navigation command.
#[derive(Default)]
struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

struct Harness {
    client: GameListClient,
    session: Arc<SessionStore>,
    navigator: Arc<RecordingNavigator>,
}

fn harness(server: &MockServer, session: SessionStore) -> Harness {
    harness_with(server, session, |config| config)
}

fn harness_with(
    server: &MockServer,
    session: SessionStore,
    configure: impl FnOnce(ClientConfig) -> ClientConfig,
) -> Harness {
    let base = ApiUrl::new(format!("{}/api", server.uri())).unwrap();
    let session = Arc::new(session);
    let navigator = Arc::new(RecordingNavigator::default());
    let client = GameListClient::new(
        configure(ClientConfig::new(base)),
        session.clone(),
        navigator.clone(),
    )
    .unwrap();

    Harness {
        client,
        session,
        navigator,
    }
}

fn user_json() -> Value {
    json!({
        "id": "u1",
        "username": "alice",
        "registrationDate": "2024-01-15T10:00:00Z"
    })
}

fn list_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Backlog",
        "description": "to play",
        "createdAt": "2024-02-01T08:00:00Z",
        "games": [{"id": "g1", "name": "Hollow Knight"}]
    })
}

async fn mount_refresh(server: &MockServer, response: ResponseTemplate, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .respond_with(response)
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Answers 200 only if the session already holds `expected` when the
/// request arrives.
struct RequireCommittedToken {
    session: Arc<SessionStore>,
    expected: &'static str,
}

impl Respond for RequireCommittedToken {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        if self.session.access_token().as_str() == self.expected {
            ResponseTemplate::new(200).set_body_json(user_json())
        } else {
            ResponseTemplate::new(500)
        }
    }
}

// ============================================================================
// Request Phase
// ============================================================================

#[tokio::test]
async fn test_login_token_used_by_later_calls() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"username": "alice", "password": "secret123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "a1"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .and(header("authorization", "Bearer a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, SessionStore::new());
    let token = h
        .client
        .auth()
        .login(&Credentials::new("alice", "secret123"))
        .await
        .unwrap();

    assert_eq!(token.as_str(), "a1");
    assert_eq!(h.session.access_token().as_str(), "a1");

    let user = h.client.users().current_user().await.unwrap();
    assert_eq!(user.username, "alice");
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/game/name/zelda"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "g1", "name": "Zelda"}
        ])))
        .mount(&server)
        .await;

    let h = harness(&server, SessionStore::new());
    let games = h.client.games().search_games("zelda").await.unwrap();
    assert_eq!(games.len(), 1);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_authorization_header_is_exact() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/gamelists/l1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json("l1")))
        .mount(&server)
        .await;

    let h = harness(&server, SessionStore::with_credentials("tok-123", None));
    h.client.lists().get_list("l1").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].headers.get("authorization").unwrap(),
        "Bearer tok-123"
    );
}

// ============================================================================
// Refresh Protocol
// ============================================================================

#[tokio::test]
async fn test_expired_token_is_refreshed_and_replayed() {
    let server = MockServer::start().await;

    mount_refresh(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "new-access",
            "refreshToken": "new-refresh"
        })),
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .and(header("authorization", "Bearer old-access"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let session = SessionStore::with_credentials("old-access", Some("old-refresh".to_string()));
    let h = harness(&server, session);

    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .and(header("authorization", "Bearer new-access"))
        .respond_with(RequireCommittedToken {
            session: h.session.clone(),
            expected: "new-access",
        })
        .expect(1)
        .mount(&server)
        .await;

    let user = h.client.users().current_user().await.unwrap();

    assert_eq!(user.id, "u1");
    assert_eq!(h.session.access_token().as_str(), "new-access");
    assert_eq!(h.session.refresh_token().as_str(), "new-refresh");
    assert!(h.navigator.routes().is_empty());

    let requests = server.received_requests().await.unwrap();
    let refresh = requests
        .iter()
        .find(|r| r.url.path() == "/api/auth/refresh")
        .unwrap();
    assert_eq!(
        refresh.headers.get("authorization").unwrap(),
        "Bearer old-refresh"
    );
}

#[tokio::test]
async fn test_replay_rejection_is_not_refreshed_again() {
    let server = MockServer::start().await;

    mount_refresh(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"accessToken": "new-access"})),
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/api/gamelists/l1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    let h = harness(&server, SessionStore::with_credentials("old-access", None));
    let err = h.client.lists().get_list("l1").await.unwrap_err();

    assert!(err.is_auth_error());
    assert_eq!(err.status(), Some(401));
    assert_eq!(h.session.access_token().as_str(), "new-access");
    assert!(h.navigator.routes().is_empty());
}

#[tokio::test]
async fn test_refresh_failure_clears_session_and_redirects() {
    let server = MockServer::start().await;

    mount_refresh(
        &server,
        ResponseTemplate::new(401).set_body_json(json!({"message": "refresh expired"})),
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let session = SessionStore::with_credentials("old-access", Some("old-refresh".to_string()));
    let h = harness(&server, session);
    let err = h.client.users().current_user().await.unwrap_err();

    match &err {
        Error::Auth(AuthError::RefreshFailed { source }) => {
            assert_eq!(source.status(), Some(401));
            assert!(source.to_string().contains("refresh expired"));
        }
        other => panic!("expected refresh failure, got {other:?}"),
    }
    assert!(h.session.access_token().is_empty());
    assert!(h.session.refresh_token().is_empty());
    assert_eq!(h.navigator.routes(), vec![Route::Login]);
    assert_eq!(user_message(&err, "Could not load profile"), "Please log in");
}

#[tokio::test]
async fn test_refresh_with_unreadable_body_fails() {
    let server = MockServer::start().await;

    mount_refresh(
        &server,
        ResponseTemplate::new(200).set_body_string("not json"),
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let h = harness(&server, SessionStore::with_credentials("old-access", None));
    let err = h.client.users().current_user().await.unwrap_err();

    assert!(matches!(err, Error::Auth(AuthError::RefreshFailed { .. })));
    assert!(!h.session.is_authenticated());
    assert_eq!(h.navigator.routes(), vec![Route::Login]);
}

#[tokio::test]
async fn test_refresh_uses_session_cookie() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "sid=cookie-123; Path=/api; HttpOnly")
                .set_body_json(json!({"accessToken": "a1"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/refresh"))
        .and(header("cookie", "sid=cookie-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "a2"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .and(header("authorization", "Bearer a1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .and(header("authorization", "Bearer a2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(&server)
        .await;

    let h = harness(&server, SessionStore::new());
    h.client
        .auth()
        .login(&Credentials::new("alice", "secret123"))
        .await
        .unwrap();

    let user = h.client.users().current_user().await.unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(h.session.access_token().as_str(), "a2");
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_concurrent_rejections_share_one_refresh() {
    let server = MockServer::start().await;

    mount_refresh(
        &server,
        ResponseTemplate::new(200)
            .set_delay(Duration::from_millis(300))
            .set_body_json(json!({"accessToken": "new-access"})),
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .and(header("authorization", "Bearer old-access"))
        .respond_with(ResponseTemplate::new(401))
        .expect(3)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .and(header("authorization", "Bearer new-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(3)
        .mount(&server)
        .await;

    let h = harness(&server, SessionStore::with_credentials("old-access", None));
    let users = h.client.users();

    let (a, b, c) = tokio::join!(
        users.current_user(),
        users.current_user(),
        users.current_user()
    );

    assert_eq!(a.unwrap().id, "u1");
    assert_eq!(b.unwrap().id, "u1");
    assert_eq!(c.unwrap().id, "u1");
    assert_eq!(h.session.access_token().as_str(), "new-access");

    let refreshes = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.url.path() == "/api/auth/refresh")
        .count();
    assert_eq!(refreshes, 1);
}

#[tokio::test]
async fn test_concurrent_refresh_failure_redirects_once() {
    let server = MockServer::start().await;

    mount_refresh(
        &server,
        ResponseTemplate::new(403).set_delay(Duration::from_millis(300)),
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/api/gamelists/user/u1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    let h = harness(&server, SessionStore::with_credentials("old-access", None));
    let lists = h.client.lists();

    let (a, b) = tokio::join!(lists.user_lists("u1"), lists.user_lists("u1"));

    assert!(matches!(a, Err(Error::Auth(AuthError::RefreshFailed { .. }))));
    assert!(matches!(b, Err(Error::Auth(AuthError::RefreshFailed { .. }))));
    assert!(!h.session.is_authenticated());
    assert_eq!(h.navigator.routes(), vec![Route::Login]);
}

#[tokio::test]
async fn test_refresh_survives_cancelled_waiter() {
    let server = MockServer::start().await;

    mount_refresh(
        &server,
        ResponseTemplate::new(200)
            .set_delay(Duration::from_millis(200))
            .set_body_json(json!({"accessToken": "new-access"})),
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .and(header("authorization", "Bearer old-access"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let h = harness(&server, SessionStore::with_credentials("old-access", None));

    // Give up while the refresh is in flight.
    let users = h.client.users();
    let outcome = tokio::time::timeout(Duration::from_millis(100), users.current_user()).await;
    assert!(outcome.is_err());

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(h.session.access_token().as_str(), "new-access");
}

#[tokio::test]
async fn test_later_rejection_reuses_failed_refresh() {
    let server = MockServer::start().await;

    mount_refresh(&server, ResponseTemplate::new(403), 1).await;

    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    // Rejected only after the first refresh has already failed.
    Mock::given(method("GET"))
        .and(path("/api/gamelists/user/u1"))
        .respond_with(ResponseTemplate::new(401).set_delay(Duration::from_millis(300)))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, SessionStore::with_credentials("old-access", None));
    let users = h.client.users();
    let lists = h.client.lists();

    let (a, b) = tokio::join!(users.current_user(), lists.user_lists("u1"));

    assert!(matches!(a, Err(Error::Auth(AuthError::RefreshFailed { .. }))));
    match b {
        Err(Error::Auth(AuthError::RefreshFailed { source })) => {
            assert_eq!(source.status(), Some(403));
        }
        other => panic!("expected cached refresh failure, got {other:?}"),
    }
    assert!(!h.session.is_authenticated());
    assert_eq!(h.navigator.routes(), vec![Route::Login]);
}

#[tokio::test]
async fn test_logout_during_refresh_stays_logged_out() {
    let server = MockServer::start().await;

    mount_refresh(
        &server,
        ResponseTemplate::new(200)
            .set_delay(Duration::from_millis(300))
            .set_body_json(json!({"accessToken": "new-access", "refreshToken": "new-refresh"})),
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .and(header("authorization", "Bearer old-access"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .and(header("authorization", "Bearer new-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(
        &server,
        SessionStore::with_credentials("old-access", Some("old-refresh".to_string())),
    );

    let users = h.client.users();
    let request = tokio::spawn(async move { users.current_user().await });

    tokio::time::sleep(Duration::from_millis(100)).await;
    h.client.auth().logout().await.unwrap();
    assert!(!h.session.is_authenticated());

    let result = request.await.unwrap();

    assert!(matches!(result, Err(Error::Auth(AuthError::NotAuthenticated))));
    assert!(!h.session.is_authenticated());
    assert!(h.session.refresh_token().is_empty());
    assert!(h.navigator.routes().is_empty());
}

#[tokio::test]
async fn test_login_during_refresh_is_kept() {
    let server = MockServer::start().await;

    mount_refresh(
        &server,
        ResponseTemplate::new(200)
            .set_delay(Duration::from_millis(300))
            .set_body_json(json!({"accessToken": "stale-refresh"})),
        1,
    )
    .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"accessToken": "fresh-login", "refreshToken": "r2"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .and(header("authorization", "Bearer old-access"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .and(header("authorization", "Bearer fresh-login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, SessionStore::with_credentials("old-access", None));

    let users = h.client.users();
    let request = tokio::spawn(async move { users.current_user().await });

    tokio::time::sleep(Duration::from_millis(100)).await;
    h.client
        .auth()
        .login(&Credentials::new("alice", "secret1"))
        .await
        .unwrap();

    let user = request.await.unwrap().unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(h.session.access_token().as_str(), "fresh-login");
    assert_eq!(h.session.refresh_token().as_str(), "r2");
    assert!(h.navigator.routes().is_empty());
}

// ============================================================================
// Failures Without Refresh
// ============================================================================

#[tokio::test]
async fn test_forbidden_is_surfaced_without_refresh() {
    let server = MockServer::start().await;

    mount_refresh(&server, ResponseTemplate::new(200), 0).await;

    Mock::given(method("PATCH"))
        .and(path("/api/gamelists/addgame"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"message": "Not your list"})),
        )
        .mount(&server)
        .await;

    let h = harness(&server, SessionStore::with_credentials("a1", None));
    let err = h.client.lists().add_game("l1", "g1").await.unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(user_message(&err, "Could not add game"), "Not your list");
    assert_eq!(h.session.access_token().as_str(), "a1");
}

#[tokio::test]
async fn test_server_errors_map_to_messages() {
    let server = MockServer::start().await;

    mount_refresh(&server, ResponseTemplate::new(200), 0).await;

    Mock::given(method("GET"))
        .and(path("/api/gamelists/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/gamelists/broken"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let h = harness(&server, SessionStore::with_credentials("a1", None));
    let lists = h.client.lists();

    let missing = lists.get_list("missing").await.unwrap_err();
    assert_eq!(user_message(&missing, "fallback"), "Resource not found");

    let broken = lists.get_list("broken").await.unwrap_err();
    assert_eq!(broken.status(), Some(500));
    assert_eq!(user_message(&broken, "fallback"), "Internal server error");
}

#[tokio::test]
async fn test_timeout_is_not_refreshed() {
    let server = MockServer::start().await;

    mount_refresh(&server, ResponseTemplate::new(200), 0).await;

    Mock::given(method("GET"))
        .and(path("/api/user/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(2))
                .set_body_json(user_json()),
        )
        .mount(&server)
        .await;

    let h = harness_with(&server, SessionStore::with_credentials("a1", None), |c| {
        c.with_timeout(Duration::from_millis(100))
    });
    let err = h.client.users().current_user().await.unwrap_err();

    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert!(h.session.is_authenticated());
}

#[tokio::test]
async fn test_bad_login_does_not_refresh() {
    let server = MockServer::start().await;

    mount_refresh(&server, ResponseTemplate::new(200), 0).await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Wrong password"})),
        )
        .mount(&server)
        .await;

    let h = harness(&server, SessionStore::new());
    let err = h
        .client
        .auth()
        .login(&Credentials::new("alice", "nope123"))
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
    assert_eq!(user_message(&err, "Login failed"), "Wrong password");
    assert!(h.navigator.routes().is_empty());
}

// ============================================================================
// Domain Services
// ============================================================================

#[tokio::test]
async fn test_blank_search_skips_request() {
    let server = MockServer::start().await;

    let h = harness(&server, SessionStore::new());
    let games = h.client.games().search_games("   ").await.unwrap();

    assert!(games.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_term_is_trimmed_and_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/game/name/half%20life"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "g7", "name": "Half-Life", "releaseYear": 1998}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, SessionStore::new());
    let games = h.client.games().search_games("  half life ").await.unwrap();

    assert_eq!(games[0].name, "Half-Life");
    assert_eq!(games[0].extra["releaseYear"], 1998);
}

#[tokio::test]
async fn test_create_and_fetch_lists() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/gamelists"))
        .and(body_json(json!({"name": "Backlog", "description": "Backlog"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "l9"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/gamelists/l9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json("l9")))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/gamelists/user/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([list_json("l9")])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/gamelists/user/u1/available"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Null))
        .mount(&server)
        .await;

    let h = harness(&server, SessionStore::with_credentials("a1", None));
    let lists = h.client.lists();

    assert_eq!(lists.create_list("Backlog").await.unwrap().as_deref(), Some("l9"));

    let list = lists.get_list("l9").await.unwrap();
    assert_eq!(list.games[0].name, "Hollow Knight");

    assert_eq!(lists.user_lists("u1").await.unwrap().len(), 1);
    assert!(lists.available_lists("u1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_edits_send_expected_bodies() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/gamelists/"))
        .and(body_json(json!({
            "id": "l1",
            "name": "Renamed",
            "description": "new description",
            "games": [{"id": "g1", "name": "Hollow Knight"}]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/api/gamelists/removegame"))
        .and(body_json(json!({"gameId": "g1", "listId": "l1"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/api/gamelists/editgameuser"))
        .and(body_json(json!({"gameId": "g1", "listId": "l1", "userId": "u2"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/api/gamelists/editgameuser"))
        .and(body_json(json!({"gameId": "g1", "listId": "l1", "userId": null})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, SessionStore::with_credentials("a1", None));
    let lists = h.client.lists();

    let current: gamelist_core::GameList = serde_json::from_value(list_json("l1")).unwrap();
    let mut payload = UpdateListPayload::from(current);
    payload.name = "Renamed".to_string();
    payload.description = "new description".to_string();
    lists.update_list(&payload).await.unwrap();

    lists.remove_game("l1", "g1").await.unwrap();
    lists.attach_game_to_user("l1", "g1", "u2").await.unwrap();
    lists.detach_game_from_user("l1", "g1").await.unwrap();
}

#[tokio::test]
async fn test_empty_ids_are_rejected_locally() {
    let server = MockServer::start().await;

    let h = harness(&server, SessionStore::with_credentials("a1", None));
    let lists = h.client.lists();

    assert!(matches!(
        lists.get_list("").await,
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        lists.add_game("l1", " ").await,
        Err(Error::InvalidInput(_))
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_logout_clears_session_even_on_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(
        &server,
        SessionStore::with_credentials("a1", Some("r1".to_string())),
    );
    let result = h.client.auth().logout().await;

    assert!(result.is_err());
    assert!(!h.session.is_authenticated());
    assert!(h.session.refresh_token().is_empty());
}

#[tokio::test]
async fn test_register_posts_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({"username": "new_player", "password": "secret123"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, SessionStore::new());
    h.client
        .auth()
        .register(&Credentials::new("new_player", "secret123"))
        .await
        .unwrap();

    assert!(!h.session.is_authenticated());
}
