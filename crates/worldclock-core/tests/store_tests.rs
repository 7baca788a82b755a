mod common;

use common::{create_test_environment, open_store};
use jiff::Timestamp;
use worldclock_core::{
    clock_rows, AddOutcome, Catalog, City, KeyValueStore, ReorderOutcome, SqliteStorage,
    WatchListStoreBuilder,
};

fn catalog_city(catalog: &Catalog, id: &str) -> City {
    catalog.require(id).expect("catalog entry").into()
}

#[tokio::test]
async fn test_watch_list_survives_restart() {
    let (_temp_dir, db_path) = create_test_environment();
    let catalog = Catalog::builtin();

    {
        let mut store = open_store(&db_path).await;
        assert!(store.is_empty());

        for id in ["12", "1", "7", "8"] {
            let outcome = store.add(catalog_city(&catalog, id));
            assert!(matches!(outcome, AddOutcome::Added(_)));
        }
        assert_eq!(store.reorder(0, 3), ReorderOutcome::Reordered);
        store.remove("7");
        store.flush().await;
    }

    let store = open_store(&db_path).await;
    let names: Vec<String> = store
        .list()
        .into_iter()
        .map(|city| city.display_name)
        .collect();
    assert_eq!(names, vec!["Seoul", "Vancouver", "Sydney"]);
}

#[tokio::test]
async fn test_round_trip_reproduces_exact_list() {
    let (_temp_dir, db_path) = create_test_environment();
    let cities = vec![
        City::new("15", "Moscow", "Europe/Moscow"),
        City::new("custom", "Kathmandu", "Asia/Kathmandu"),
        City::new("3", "Beijing", "Asia/Shanghai"),
    ];

    {
        let mut store = open_store(&db_path).await;
        for city in &cities {
            store.add(city.clone());
        }
        store.flush().await;
    }

    let store = open_store(&db_path).await;
    assert_eq!(store.list(), cities);
}

#[tokio::test]
async fn test_corrupt_database_value_starts_empty() {
    let (_temp_dir, db_path) = create_test_environment();
    let storage = SqliteStorage::open(&db_path).await.unwrap();
    storage.set("cities", "{\"truncated\": [").await.unwrap();

    let mut store = open_store(&db_path).await;
    assert!(store.is_empty());

    // The next mutation overwrites the corrupt payload.
    store.add(City::new("1", "Seoul", "Asia/Seoul"));
    store.flush().await;
    let raw = storage.get("cities").await.unwrap().unwrap();
    assert_eq!(raw, r#"[{"id":"1","city":"Seoul","timezone":"Asia/Seoul"}]"#);
}

#[tokio::test]
async fn test_early_mutation_does_not_clobber_saved_cities() {
    let (_temp_dir, db_path) = create_test_environment();
    {
        let mut store = open_store(&db_path).await;
        store.add(City::new("1", "Seoul", "Asia/Seoul"));
        store.add(City::new("2", "Tokyo", "Asia/Tokyo"));
        store.flush().await;
    }

    let mut store = WatchListStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .unwrap();
    assert_eq!(
        store.add(City::new("9", "London", "Europe/London")),
        AddOutcome::Queued
    );
    store.hydrate().await;
    store.flush().await;
    drop(store);

    let store = open_store(&db_path).await;
    let ids: Vec<String> = store.list().into_iter().map(|city| city.id).collect();
    assert_eq!(ids, vec!["1", "2", "9"]);
}

#[tokio::test]
async fn test_clock_rows_follow_store_order() {
    let (_temp_dir, db_path) = create_test_environment();
    let catalog = Catalog::builtin();
    let mut store = open_store(&db_path).await;
    store.add(catalog_city(&catalog, "1"));
    store.add(catalog_city(&catalog, "9"));

    let instant: Timestamp = "2024-03-01T00:00:00Z".parse().unwrap();
    let rows = clock_rows(&store.list(), instant);
    assert_eq!(rows[0].time, "2024-03-01 09:00:00");
    assert_eq!(rows[1].time, "2024-03-01 00:00:00");
    store.flush().await;
}
