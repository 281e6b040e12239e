use asset_management_server::asset::models::Asset;
use asset_management_server::FileStore;
use serde_json::json;

fn assets_from(value: serde_json::Value) -> Vec<Asset> {
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn round_trip_preserves_order_and_extra_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("assets.json"));

    let assets = assets_from(json!([
        {"id": 3, "name": "z", "type": "Hardware", "site": "ams"},
        {"id": 1, "name": "a", "type": "Software"},
        {"id": 2, "name": "m", "type": "Hardware", "tags": ["spare"]}
    ]));
    store.persist(&assets).await.unwrap();

    let loaded = store.load().await.unwrap();
    let ids: Vec<i64> = loaded.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(loaded[0].extra["site"], "ams");
    assert_eq!(loaded[2].extra["tags"], json!(["spare"]));
}

#[tokio::test]
async fn persist_overwrites_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("assets.json"));

    store
        .persist(&assets_from(json!([{"id": 1, "name": "a", "type": "t"}])))
        .await
        .unwrap();
    store.persist(&[]).await.unwrap();

    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn load_picks_up_external_edits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assets.json");
    let store = FileStore::new(&path);
    store.init().await.unwrap();

    // Another process (or an operator with an editor) rewrites the file.
    std::fs::write(
        &path,
        r#"[{"id": 9, "name": "edited", "type": "Hardware"}]"#,
    )
    .unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name.as_deref(), Some("edited"));
}

#[tokio::test]
async fn init_is_idempotent_and_keeps_existing_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assets.json");
    let store = FileStore::new(&path);

    store
        .persist(&assets_from(json!([{"id": 1, "name": "a", "type": "t"}])))
        .await
        .unwrap();
    store.init().await.unwrap();

    assert_eq!(store.load().await.unwrap().len(), 1);
}
