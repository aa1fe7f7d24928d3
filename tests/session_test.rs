//! Session token persistence tests

use HubDesk::config::AuthConfig;
use HubDesk::session::TokenStore;

#[tokio::test]
async fn token_round_trips_through_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let token_file = dir.path().join("token");
    let config = AuthConfig {
        token_file: token_file.to_str().unwrap().to_string(),
        token: None,
    };

    // fresh store: nothing saved yet
    let store = TokenStore::load(&config).await.unwrap();
    assert!(!store.has_token());

    store.set_token("session-abc").await.unwrap();

    // a second load sees the persisted token
    let reloaded = TokenStore::load(&config).await.unwrap();
    assert_eq!(reloaded.token(), Some("session-abc".to_string()));

    // clearing signs the session out on disk too
    reloaded.clear().await.unwrap();
    let after_clear = TokenStore::load(&config).await.unwrap();
    assert!(!after_clear.has_token());
}

#[tokio::test]
async fn inline_token_overrides_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let token_file = dir.path().join("token");
    tokio::fs::write(&token_file, "from-file").await.unwrap();

    let config = AuthConfig {
        token_file: token_file.to_str().unwrap().to_string(),
        token: Some("from-config".to_string()),
    };

    let store = TokenStore::load(&config).await.unwrap();
    assert_eq!(store.token(), Some("from-config".to_string()));
}

#[tokio::test]
async fn whitespace_only_file_counts_as_no_token() {
    let dir = tempfile::tempdir().unwrap();
    let token_file = dir.path().join("token");
    tokio::fs::write(&token_file, "\n  \n").await.unwrap();

    let config = AuthConfig {
        token_file: token_file.to_str().unwrap().to_string(),
        token: None,
    };

    let store = TokenStore::load(&config).await.unwrap();
    assert!(!store.has_token());
}
