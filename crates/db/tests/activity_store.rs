//! Integration tests for the PostgreSQL activity store.
//!
//! Each test gets a fresh database with the crate migrations applied. They
//! need a reachable server via `DATABASE_URL`, so they are ignored by
//! default; run with `cargo test -p activities-db -- --ignored`.

use activities_core::activity::{ActivityFields, NewActivity, ValidatedPatch};
use activities_db::{ActivityStore, PgActivityStore};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fields(name: &str) -> ActivityFields {
    NewActivity {
        activity_name: Some(name.to_string()),
        location: Some("Riverside".to_string()),
        date: Some("2025-09-20".to_string()),
        time: Some("14:00".to_string()),
        description: Some("Afternoon session".to_string()),
    }
    .validate()
    .unwrap()
}

/// Insert a row directly, bypassing validation.
async fn insert_with_name(pool: &PgPool, name: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO activities \
             (id, activity_name, name_key, location, activity_date, activity_time, description) \
         VALUES (gen_random_uuid(), $1, $1, 'x', DATE '2025-01-01', 'x', 'x')",
    )
    .bind(name)
    .execute(pool)
    .await
    .map(|_| ())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_create_and_find_by_id(pool: PgPool) {
    let store = PgActivityStore::new(pool);
    let created = store.create(&fields("Beach Cleanup")).await.unwrap();

    assert_eq!(created.fields(), fields("Beach Cleanup"));
    assert_eq!(created.created_at, created.updated_at);

    let fetched = store.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_name_ignores_case(pool: PgPool) {
    let store = PgActivityStore::new(pool);
    let created = store.create(&fields("Beach Cleanup")).await.unwrap();

    for query in ["Beach Cleanup", "beach cleanup", "BEACH CLEANUP"] {
        let found = store.find_by_name(query).await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
    }
    assert!(store.find_by_name("Beach").await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_name_folds_non_ascii_letters(pool: PgPool) {
    let store = PgActivityStore::new(pool);
    let created = store.create(&fields("Été Festival")).await.unwrap();

    let found = store.find_by_name("ÉTÉ FESTIVAL").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_name_with_duplicates_returns_earliest(pool: PgPool) {
    let store = PgActivityStore::new(pool);
    let first = store.create(&fields("Yoga")).await.unwrap();
    store.create(&fields("yoga")).await.unwrap();
    store.create(&fields("YOGA")).await.unwrap();

    let found = store.find_by_name("Yoga").await.unwrap().unwrap();
    assert_eq!(found.id, first.id);
    assert_eq!(found.activity_name, "Yoga");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_renamed_activity_is_found_by_new_name(pool: PgPool) {
    let store = PgActivityStore::new(pool);
    let created = store.create(&fields("Beach Cleanup")).await.unwrap();

    let patch = ValidatedPatch {
        activity_name: Some("Dune Walk".to_string()),
        ..Default::default()
    };
    store.update(created.id, &patch).await.unwrap().unwrap();

    let found = store.find_by_name("dune walk").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert!(store.find_by_name("beach cleanup").await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_summaries_sorted_by_name(pool: PgPool) {
    let store = PgActivityStore::new(pool);
    for name in ["Zeta", "Alpha", "Mid"] {
        store.create(&fields(name)).await.unwrap();
    }

    let names: Vec<String> = store
        .list_summaries()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.activity_name)
        .collect();
    assert_eq!(names, ["Alpha", "Mid", "Zeta"]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_merges_and_refreshes_updated_at(pool: PgPool) {
    let store = PgActivityStore::new(pool);
    let created = store.create(&fields("Beach Cleanup")).await.unwrap();

    let patch = ValidatedPatch {
        location: Some("New Park".to_string()),
        ..Default::default()
    };
    let updated = store.update(created.id, &patch).await.unwrap().unwrap();

    assert_eq!(updated.location, "New Park");
    assert_eq!(updated.activity_name, created.activity_name);
    assert_eq!(updated.time, created.time);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_is_permanent(pool: PgPool) {
    let store = PgActivityStore::new(pool.clone());
    let created = store.create(&fields("Beach Cleanup")).await.unwrap();

    assert!(store.delete(created.id).await.unwrap());
    assert!(store.find_by_id(created.id).await.unwrap().is_none());

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM activities")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

/// Blank text is rejected by the table itself, not only by validation.
#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_check_constraint_rejects_blank_name(pool: PgPool) {
    // Spaces, tabs and newlines, then no-break and ideographic spaces.
    for name in ["  ", "\t", " \r\n\t ", "\u{a0}\u{3000}"] {
        let err = insert_with_name(&pool, name).await.unwrap_err();
        let db_err = err.as_database_error().unwrap();
        assert_eq!(db_err.code().as_deref(), Some("23514"), "{name:?}");
        assert_eq!(db_err.constraint(), Some("ck_activities_name_not_blank"));
    }

    insert_with_name(&pool, "\tYoga ").await.unwrap();
}
