//! Integration tests for the segments and users collections


use sonora_core::{storage::CatalogStore, types::*, SonoraError};
use test_helpers::*;

#[tokio::test]
async fn test_insert_and_get_segments() {
    let test_db = TestDb::new().await;
    let catalog = test_db.catalog();

    let segments = vec![
        test_segment("s1/index.m3u8", "s1"),
        test_segment("s1/0.ts", "s1"),
        test_segment("s1/1.ts", "s1"),
    ];

    catalog.insert_segments(&segments).await.unwrap();

    for segment in &segments {
        let stored = catalog
            .get_segment(&segment.id)
            .await
            .unwrap()
            .expect("segment should exist");
        assert_eq!(&stored, segment);
    }
}

#[tokio::test]
async fn test_segment_batch_stops_at_first_failure() {
    let test_db = TestDb::new().await;
    let catalog = test_db.catalog();

    catalog
        .insert_segments(&[test_segment("s1/1.ts", "s1")])
        .await
        .unwrap();

    // 0.ts goes in, 1.ts collides, 2.ts is never attempted
    let batch = vec![
        test_segment("s1/0.ts", "s1"),
        test_segment("s1/1.ts", "s1"),
        test_segment("s1/2.ts", "s1"),
    ];
    let err = catalog.insert_segments(&batch).await.unwrap_err();
    assert!(matches!(err, SonoraError::Duplicate(_)));

    assert!(catalog
        .get_segment(&SegmentId::new("s1/0.ts"))
        .await
        .unwrap()
        .is_some());
    assert!(catalog
        .get_segment(&SegmentId::new("s1/2.ts"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_empty_segment_batch_is_noop() {
    let test_db = TestDb::new().await;
    let catalog = test_db.catalog();

    catalog.insert_segments(&[]).await.unwrap();
    assert_eq!(catalog.stats().await.unwrap().segments, 0);
}

#[tokio::test]
async fn test_new_user_and_get() {
    let test_db = TestDb::new().await;
    let catalog = test_db.catalog();

    let mut user = User::new(UserId::new("u1"), "alice");
    user.email = Some("alice@example.com".to_string());

    catalog.new_user(&user).await.unwrap();

    let stored = catalog
        .get_user_by_id(&UserId::new("u1"))
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(stored, user);
}

#[tokio::test]
async fn test_user_unknown_fields_are_stored() {
    let test_db = TestDb::new().await;
    let catalog = test_db.catalog();

    let mut user = User::new(UserId::new("u9"), "zoe");
    user.extra.insert(
        "avatar_url".to_string(),
        serde_json::json!("http://x/a.png"),
    );
    user.extra.insert("premium".to_string(), serde_json::json!(true));

    catalog.new_user(&user).await.unwrap();

    let stored = catalog
        .get_user_by_id(&UserId::new("u9"))
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(stored, user);
}

#[tokio::test]
async fn test_segment_unknown_fields_are_stored() {
    let test_db = TestDb::new().await;
    let catalog = test_db.catalog();

    let mut segment = test_segment("s1/0.ts", "s1");
    segment.extra.insert("codec".to_string(), serde_json::json!("aac"));

    catalog
        .insert_segments(std::slice::from_ref(&segment))
        .await
        .unwrap();

    let stored = catalog
        .get_segment(&segment.id)
        .await
        .unwrap()
        .expect("segment should exist");
    assert_eq!(stored, segment);
}

#[tokio::test]
async fn test_new_user_with_empty_id_is_invalid() {
    let test_db = TestDb::new().await;

    let err = test_db
        .catalog()
        .new_user(&User::new(UserId::default(), "nobody"))
        .await
        .unwrap_err();

    assert!(matches!(err, SonoraError::InvalidInput(_)));
}

#[tokio::test]
async fn test_stats_count_every_collection() {
    let test_db = TestDb::new().await;
    let catalog = test_db.catalog();

    catalog.insert_song(&test_song("s1", "Intro")).await.unwrap();
    catalog
        .insert_segments(&[test_segment("s1/0.ts", "s1"), test_segment("s1/1.ts", "s1")])
        .await
        .unwrap();
    catalog
        .new_user(&User::new(UserId::new("u1"), "alice"))
        .await
        .unwrap();
    catalog
        .new_playlist(test_playlist("u1", "Mix"))
        .await
        .unwrap();

    let stats = catalog.stats().await.unwrap();
    assert_eq!(
        stats,
        CatalogStats {
            songs: 1,
            segments: 2,
            users: 1,
            playlists: 1,
        }
    );
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let test_db = TestDb::new().await;

    sonora_storage::run_migrations(test_db.catalog().pool())
        .await
        .expect("re-running migrations should succeed");
}
