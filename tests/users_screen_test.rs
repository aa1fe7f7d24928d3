//! User administration screen integration tests
//!
//! Drives the paginated listing, the search-as-you-type flow, keyboard
//! commits, admin promotion, and CSV export against a mock backend.

mod helpers;

use std::sync::Arc;
use assert_matches::assert_matches;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use HubDesk::models::AdminLevel;
use HubDesk::screens::{NavKey, NoticeCenter, UserAdminScreen};
use HubDesk::search::SuggestionField;
use HubDesk::utils::errors::HubDeskError;

use helpers::backend::{api_client, paginated_body, spawn_backend, success_body, TEST_TOKEN};
use helpers::data::{fake_user, named_user};

fn default_settings() -> HubDesk::config::Settings {
    HubDesk::config::Settings::default()
}

#[tokio::test]
async fn list_page_sends_token_and_populates_screen() {
    let server = spawn_backend().await;
    let users = vec![
        fake_user("u1", AdminLevel::Member),
        fake_user("u2", AdminLevel::Moderator),
    ];

    Mock::given(method("GET"))
        .and(path("/api/v1/getAllUsersPaginated"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .and(header("token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_body(&users, 23, 1, 10)))
        .mount(&server)
        .await;

    let settings = default_settings();
    let api = api_client(&server);
    let notices = Arc::new(NoticeCenter::new(16));
    let mut screen = UserAdminScreen::open(
        api.users.clone(),
        AdminLevel::Super,
        &settings.pagination,
        &settings.search,
        notices.clone(),
    )
    .unwrap();

    screen.load_page().await.unwrap();

    assert_eq!(screen.users().len(), 2);
    assert_eq!(screen.pager().total(), 23);
    assert_eq!(screen.pager().total_pages(), 3);
    assert!(notices.is_empty());
}

#[tokio::test]
async fn suggestion_commit_runs_backend_search() {
    let server = spawn_backend().await;
    let on_screen = vec![
        named_user("u1", "Amit"),
        named_user("u2", "Amita"),
        named_user("u3", "Sam"),
    ];

    Mock::given(method("GET"))
        .and(path("/api/v1/getAllUsersPaginated"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_body(&on_screen, 3, 1, 10)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/searchUsers"))
        .and(query_param("search", "Amit"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_body(
            &[named_user("u1", "Amit")],
            1,
            1,
            10,
        )))
        .mount(&server)
        .await;

    let settings = default_settings();
    let api = api_client(&server);
    let notices = Arc::new(NoticeCenter::new(16));
    let mut screen = UserAdminScreen::open(
        api.users.clone(),
        AdminLevel::Super,
        &settings.pagination,
        &settings.search,
        notices,
    )
    .unwrap();
    screen.load_page().await.unwrap();

    // typing "ami" opens the list with prefix matches first
    screen.set_query("ami");
    let names: Vec<&str> = screen
        .suggestions()
        .iter()
        .filter(|s| s.field == SuggestionField::Name)
        .map(|s| s.value.as_str())
        .collect();
    assert_eq!(names, vec!["Amit", "Amita"]);
    // the top-ranked suggestion overall is the lexicographically first prefix match
    assert_eq!(screen.suggestions()[0].value, "Amit");
    assert!(screen.nav().is_open());

    // ArrowDown selects "Amit", Enter commits it and searches the backend
    screen.handle_key(NavKey::ArrowDown).await.unwrap();
    screen.handle_key(NavKey::Enter).await.unwrap();

    assert_eq!(screen.query(), "Amit");
    assert_eq!(screen.users().len(), 1);
    assert_eq!(screen.users()[0].name, "Amit");
    assert!(!screen.nav().is_open());
}

#[tokio::test]
async fn escape_closes_without_searching() {
    let server = spawn_backend().await;
    let on_screen = vec![named_user("u1", "Amit")];

    Mock::given(method("GET"))
        .and(path("/api/v1/getAllUsersPaginated"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_body(&on_screen, 1, 1, 10)))
        .mount(&server)
        .await;

    let settings = default_settings();
    let api = api_client(&server);
    let notices = Arc::new(NoticeCenter::new(16));
    let mut screen = UserAdminScreen::open(
        api.users.clone(),
        AdminLevel::Super,
        &settings.pagination,
        &settings.search,
        notices,
    )
    .unwrap();
    screen.load_page().await.unwrap();

    screen.set_query("am");
    assert!(screen.nav().is_open());
    screen.handle_key(NavKey::Escape).await.unwrap();
    assert!(!screen.nav().is_open());
    // the full listing is still on screen; no search was issued
    assert_eq!(screen.users().len(), 1);
}

#[tokio::test]
async fn promote_updates_the_listed_user() {
    let server = spawn_backend().await;
    let mut target = named_user("u7", "Rhea");

    Mock::given(method("GET"))
        .and(path("/api/v1/getAllUsersPaginated"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_body(&[target.clone()], 1, 1, 10)))
        .mount(&server)
        .await;

    target.admin = AdminLevel::Moderator;
    Mock::given(method("POST"))
        .and(path("/api/v1/updateAdminStatus"))
        .and(header("token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(&target)))
        .mount(&server)
        .await;

    let settings = default_settings();
    let api = api_client(&server);
    let notices = Arc::new(NoticeCenter::new(16));
    let mut screen = UserAdminScreen::open(
        api.users.clone(),
        AdminLevel::Super,
        &settings.pagination,
        &settings.search,
        notices.clone(),
    )
    .unwrap();
    screen.load_page().await.unwrap();

    screen.promote("ops@center.org", "u7", AdminLevel::Moderator).await.unwrap();

    assert_eq!(screen.users()[0].admin, AdminLevel::Moderator);
    let drained = notices.drain();
    assert_eq!(drained.len(), 1);
}

#[tokio::test]
async fn failed_load_becomes_a_notice() {
    let server = spawn_backend().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/getAllUsersPaginated"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let settings = default_settings();
    let api = api_client(&server);
    let notices = Arc::new(NoticeCenter::new(16));
    let mut screen = UserAdminScreen::open(
        api.users.clone(),
        AdminLevel::Super,
        &settings.pagination,
        &settings.search,
        notices.clone(),
    )
    .unwrap();

    let err = screen.load_page().await.unwrap_err();
    assert_matches!(err, HubDeskError::Backend { status: 500, .. });
    assert_eq!(notices.len(), 1);
    assert!(screen.users().is_empty());
}

#[tokio::test]
async fn moderators_cannot_open_the_users_screen() {
    let server = spawn_backend().await;
    let settings = default_settings();
    let api = api_client(&server);
    let notices = Arc::new(NoticeCenter::new(16));

    let result = UserAdminScreen::open(
        api.users.clone(),
        AdminLevel::Moderator,
        &settings.pagination,
        &settings.search,
        notices,
    );

    assert_matches!(result, Err(HubDeskError::PermissionDenied(_)));
}

#[tokio::test]
async fn export_writes_the_on_screen_page() {
    let server = spawn_backend().await;
    let users = vec![named_user("u1", "Amit"), named_user("u2", "Sam, Jr.")];

    Mock::given(method("GET"))
        .and(path("/api/v1/getAllUsersPaginated"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_body(&users, 2, 1, 10)))
        .mount(&server)
        .await;

    let settings = default_settings();
    let api = api_client(&server);
    let notices = Arc::new(NoticeCenter::new(16));
    let mut screen = UserAdminScreen::open(
        api.users.clone(),
        AdminLevel::Super,
        &settings.pagination,
        &settings.search,
        notices,
    )
    .unwrap();
    screen.load_page().await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = screen.export_csv(dir.path().to_str().unwrap()).await.unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "name,email,organization,designation,admin,created_at"
    );
    assert!(contents.contains("Amit"));
    // comma in the name forces quoting
    assert!(contents.contains("\"Sam, Jr.\""));
}
