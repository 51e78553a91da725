mod common;

use anyhow::Result;
use serde_json::json;
use tenant_portal::client::BackendClient;
use tenant_portal::engine::record::Record;
use tenant_portal::engine::validate::record_from_form;
use tenant_portal::engine::CrudEngine;
use tenant_portal::error::PortalError;
use tenant_portal::registry::registry;

fn engine_for(backend: &common::MockBackend) -> CrudEngine {
    CrudEngine::new(BackendClient::new(&backend.base_url))
}

fn live_token() -> String {
    common::mint_token("tenant-1", &["TENANT:ADMIN"], 3600)
}

#[tokio::test]
async fn list_fetch_normalizes_the_swapped_shape() -> Result<()> {
    let backend = common::spawn_backend().await;
    backend.seed(
        "taxtypes",
        (1..=45)
            .map(|i| json!({"Id": i, "Name": format!("Tax {}", i), "Value": i, "Active": true}))
            .collect(),
    );

    let engine = engine_for(&backend);
    let module = registry().get("taxTypes").unwrap();

    let page = engine.fetch_page(&live_token(), module, 2, 20, None).await?;
    assert_eq!(page.items.len(), 20);
    assert_eq!(page.total, 45);
    assert_eq!(page.items[0]["Name"], json!("Tax 21"));
    Ok(())
}

#[tokio::test]
async fn expired_session_surfaces_as_auth_expired() -> Result<()> {
    let backend = common::spawn_backend().await;
    let engine = engine_for(&backend);
    let module = registry().get("taxTypes").unwrap();

    let err = engine
        .fetch_page(common::DEAD_SESSION_TOKEN, module, 1, 20, None)
        .await
        .expect_err("fetch fails");
    assert!(matches!(err, PortalError::AuthExpired));
    Ok(())
}

#[tokio::test]
async fn validation_failure_issues_no_network_request() -> Result<()> {
    let backend = common::spawn_backend().await;
    let engine = engine_for(&backend);
    let module = registry().get("categories").unwrap();

    // required Name left empty
    let form = vec![("Name".to_string(), String::new()), ("Active".to_string(), "on".to_string())];
    let input = record_from_form(&module.fields, &form);

    let err = engine.submit(&live_token(), module, input, None).await.expect_err("rejected");
    match err {
        PortalError::Validation { field_errors, .. } => {
            assert_eq!(field_errors.get("Name"), Some(&"Name is required".to_string()));
        }
        other => panic!("expected Validation, got {:?}", other),
    }

    // nothing reached the backend
    assert!(backend.captured_bodies("categories").is_empty());
    Ok(())
}

#[tokio::test]
async fn create_strips_system_fields_and_coerces_booleans() -> Result<()> {
    let backend = common::spawn_backend().await;
    let engine = engine_for(&backend);
    let module = registry().get("categories").unwrap();

    // simulate an edit-like payload that somehow carries system fields and a
    // stringly boolean - none of that may reach the wire
    let mut input = Record::new();
    input.set("Id", json!(9));
    input.set("CreatedBy", json!("someone"));
    input.set("updatedAt", json!("2024-01-01"));
    input.set("Name", json!("Test"));
    input.set("Active", json!("1"));

    engine.submit(&live_token(), module, input, None).await.expect("create succeeds");

    let captured = backend.captured_bodies("categories");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0], json!({"Name": "Test", "Active": true}));
    Ok(())
}

#[tokio::test]
async fn update_targets_the_record_and_strips_the_id() -> Result<()> {
    let backend = common::spawn_backend().await;
    backend.seed("categories", vec![json!({"Id": 7, "Name": "Old", "Active": true})]);

    let engine = engine_for(&backend);
    let module = registry().get("categories").unwrap();

    let mut input = Record::new();
    input.set("Id", json!(7));
    input.set("Name", json!("Renamed"));
    input.set("Active", json!(true));

    engine.submit(&live_token(), module, input, Some("7")).await.expect("update succeeds");

    let captured = backend.captured_bodies("categories");
    assert_eq!(captured[0], json!({"Name": "Renamed", "Active": true}));
    assert_eq!(backend.records("categories")[0]["Name"], json!("Renamed"));
    Ok(())
}

#[tokio::test]
async fn server_rejection_surfaces_its_message() -> Result<()> {
    let backend = common::spawn_backend().await;
    backend.fail_entity("categories");

    let engine = engine_for(&backend);
    let module = registry().get("categories").unwrap();

    let mut input = Record::new();
    input.set("Name", json!("Test"));
    input.set("Active", json!(true));

    let err = engine.submit(&live_token(), module, input, None).await.expect_err("rejected");
    match err {
        PortalError::SaveFailed(message) => assert_eq!(message, "categories is on fire"),
        other => panic!("expected SaveFailed, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn delete_removes_the_record() -> Result<()> {
    let backend = common::spawn_backend().await;
    backend.seed(
        "categories",
        vec![json!({"Id": 1, "Name": "Keep"}), json!({"Id": 2, "Name": "Drop"})],
    );

    let engine = engine_for(&backend);
    let module = registry().get("categories").unwrap();

    engine.delete(&live_token(), module, "2").await.expect("delete succeeds");

    let remaining = backend.records("categories");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["Name"], json!("Keep"));

    // deleting it again reports the backend's message
    let err = engine.delete(&live_token(), module, "2").await.expect_err("gone");
    assert!(matches!(err, PortalError::DeleteFailed(_)));
    Ok(())
}

#[tokio::test]
async fn one_failing_reference_does_not_block_the_others() -> Result<()> {
    let backend = common::spawn_backend().await;
    backend.seed("taxtypes", vec![json!({"Id": 1, "Name": "VAT"})]);
    backend.seed("taxgroups", vec![json!({"Id": 1, "Name": "Standard"})]);
    backend.fail_entity("taxgroups");

    let engine = engine_for(&backend);
    // references both taxGroups and taxTypes
    let module = registry().get("taxGroupTaxTypeMappers").unwrap();

    let refs = engine.fetch_references(&live_token(), module).await;

    assert_eq!(refs.get("taxTypes").map(Vec::len), Some(1));
    // the failing reference resolves to an empty option list, not an error
    assert_eq!(refs.get("taxGroups").map(Vec::len), Some(0));
    Ok(())
}
