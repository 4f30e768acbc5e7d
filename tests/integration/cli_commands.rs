use catalog::tooling::cli::{CliContext, Commands};
use catalog::{ApiError, JsonFileProductStore, ProductStore};
use std::sync::Arc;

use crate::support::seeded;

fn context(path: &std::path::Path) -> CliContext {
    CliContext::with_store(Arc::new(JsonFileProductStore::new(path)))
}

#[test]
fn list_renders_table_and_json() {
    let fx = seeded();
    let cli = context(&fx.path);

    let text = cli
        .execute(&Commands::List {
            format: "text".to_string(),
        })
        .unwrap();
    assert!(text.contains("Patchwork Quilt"));
    assert!(text.contains("Hand Made Items"));
    assert!(text.contains("4.5"));

    let json = cli
        .execute(&Commands::List {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}

#[test]
fn show_unknown_is_not_found() {
    let fx = seeded();
    let cli = context(&fx.path);
    let err = cli
        .execute(&Commands::Show {
            id: "missing".to_string(),
            format: "text".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::ProductNotFound(id) if id == "missing"));
}

#[test]
fn rate_reports_acceptance_and_rejection() {
    let fx = seeded();
    let cli = context(&fx.path);

    let out = cli
        .execute(&Commands::Rate {
            id: "p2".to_string(),
            rating: 2,
        })
        .unwrap();
    assert_eq!(out, "Rated p2 with 2");

    let err = cli
        .execute(&Commands::Rate {
            id: "p2".to_string(),
            rating: 7,
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::RatingRejected(_)));
    assert_eq!(fx.store.get_by_id("p2").unwrap().unwrap().ratings, Some(vec![2]));
}

#[test]
fn create_then_update_then_delete() {
    let fx = seeded();
    let cli = context(&fx.path);

    let id = cli.execute(&Commands::Create).unwrap();
    assert!(fx.store.get_by_id(&id).unwrap().is_some());

    let out = cli
        .execute(&Commands::Update {
            id: id.clone(),
            title: Some("Walnut Bowl".to_string()),
            image: None,
            description: Some(" Turned by hand ".to_string()),
            genre: None,
            youtube_id: None,
            director: None,
        })
        .unwrap();
    assert_eq!(out, format!("Updated {}", id));

    let stored = fx.store.get_by_id(&id).unwrap().unwrap();
    assert_eq!(stored.title.as_deref(), Some("Walnut Bowl"));
    assert_eq!(stored.description.as_deref(), Some("Turned by hand"));
    assert_eq!(stored.url.as_deref(), Some("Enter URL"));

    let out = cli.execute(&Commands::Delete { id: id.clone() }).unwrap();
    assert_eq!(out, format!("Deleted {}", id));
    assert!(fx.store.get_by_id(&id).unwrap().is_none());

    let err = cli.execute(&Commands::Delete { id }).unwrap_err();
    assert!(matches!(err, ApiError::ProductNotFound(_)));
}

#[test]
fn update_with_invalid_title_is_rejected_before_store() {
    let fx = seeded();
    let cli = context(&fx.path);

    let err = cli
        .execute(&Commands::Update {
            id: "p1".to_string(),
            title: Some("x".repeat(40)),
            image: None,
            description: None,
            genre: None,
            youtube_id: None,
            director: None,
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::ValidationFailed(ref errors) if errors.len() == 1));
    assert_eq!(
        fx.store.get_by_id("p1").unwrap().unwrap().title.as_deref(),
        Some("Patchwork Quilt")
    );
}
