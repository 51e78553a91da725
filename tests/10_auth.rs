mod common;

use anyhow::Result;
use tenant_portal::auth::SessionStore;
use tenant_portal::client::BackendClient;
use tenant_portal::error::PortalError;

#[tokio::test]
async fn login_builds_a_full_session() -> Result<()> {
    let backend = common::spawn_backend().await;
    let store = SessionStore::new(BackendClient::new(&backend.base_url));

    let session = store.login(common::GOOD_GOOGLE_TOKEN).await.expect("login succeeds");

    assert_eq!(session.name, "Ada Lovelace");
    assert_eq!(session.email, "ada@example.com");
    assert_eq!(session.tenant_id, "tenant-1");
    assert_eq!(session.scopes, vec!["TENANT:ADMIN".to_string()]);
    assert_eq!(session.associated_tenants.len(), 2);
    assert!(!session.token.is_empty());
    Ok(())
}

#[tokio::test]
async fn rejected_login_is_invalid_not_expired() -> Result<()> {
    let backend = common::spawn_backend().await;
    let store = SessionStore::new(BackendClient::new(&backend.base_url));

    let err = store.login("wrong-credential").await.expect_err("login fails");

    // a 401 from the login endpoint must stay inline - never the global
    // session-expired path, or failed logins would redirect-loop
    match err {
        PortalError::AuthInvalid(message) => {
            assert_eq!(message, "Auth Error: User does not exist.");
        }
        other => panic!("expected AuthInvalid, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn switching_tenant_replaces_the_whole_session() -> Result<()> {
    let backend = common::spawn_backend().await;
    let store = SessionStore::new(BackendClient::new(&backend.base_url));

    let session = store.login(common::GOOD_GOOGLE_TOKEN).await?;
    let switched = store.switch_tenant(&session, "tenant-other").await.expect("switch succeeds");

    assert_eq!(switched.tenant_id, "tenant-other");
    assert_ne!(switched.token, session.token);
    Ok(())
}

#[tokio::test]
async fn switching_with_a_dead_token_expires_the_session() -> Result<()> {
    let backend = common::spawn_backend().await;
    let store = SessionStore::new(BackendClient::new(&backend.base_url));

    let mut session = store.login(common::GOOD_GOOGLE_TOKEN).await?;
    session.token = common::DEAD_SESSION_TOKEN.to_string();

    let err = store.switch_tenant(&session, "tenant-other").await.expect_err("switch fails");
    assert!(matches!(err, PortalError::AuthExpired));
    Ok(())
}
