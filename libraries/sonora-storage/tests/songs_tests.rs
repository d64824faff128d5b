//! Integration tests for the songs collection


use sonora_core::{storage::CatalogStore, types::*, SonoraError};
use sonora_storage::songs::ALL_SONGS_LIMIT;
use test_helpers::*;

#[tokio::test]
async fn test_insert_and_get_song() {
    let test_db = TestDb::new().await;
    let catalog = test_db.catalog();

    let mut song = test_song("s1", "Intro");
    song.extra
        .insert("release_date".to_string(), serde_json::json!("1999-01-01"));

    catalog.insert_song(&song).await.expect("Failed to insert song");

    let retrieved = catalog
        .get_song_by_id(&SongId::new("s1"))
        .await
        .unwrap()
        .expect("song should exist");

    assert_eq!(retrieved, song);
}

#[tokio::test]
async fn test_get_missing_song_returns_none() {
    let test_db = TestDb::new().await;

    let result = test_db
        .catalog()
        .get_song_by_id(&SongId::new("nope"))
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_get_song_with_empty_id_is_invalid() {
    let test_db = TestDb::new().await;

    let err = test_db
        .catalog()
        .get_song_by_id(&SongId::default())
        .await
        .unwrap_err();

    assert!(matches!(err, SonoraError::InvalidInput(_)));
}

#[tokio::test]
async fn test_duplicate_song_is_rejected() {
    let test_db = TestDb::new().await;
    let catalog = test_db.catalog();

    catalog.insert_song(&test_song("s1", "Intro")).await.unwrap();
    let err = catalog
        .insert_song(&test_song("s1", "Other"))
        .await
        .unwrap_err();

    assert!(matches!(err, SonoraError::Duplicate(_)));

    // Original document is untouched
    let stored = catalog
        .get_song_by_id(&SongId::new("s1"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.title, "Intro");
}

#[tokio::test]
async fn test_get_all_songs_in_insertion_order() {
    let test_db = TestDb::new().await;
    let catalog = test_db.catalog();

    for id in ["c", "a", "b"] {
        catalog.insert_song(&test_song(id, id)).await.unwrap();
    }

    let ids: Vec<String> = catalog
        .get_all_songs()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id.to_string())
        .collect();

    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[tokio::test]
async fn test_get_all_songs_is_capped() {
    let test_db = TestDb::new().await;
    let catalog = test_db.catalog();

    for i in 0..1500 {
        catalog
            .insert_song(&test_song(&format!("song-{i:04}"), "Bulk"))
            .await
            .unwrap();
    }

    let songs = catalog.get_all_songs().await.unwrap();

    assert_eq!(songs.len(), 1000);
    assert_eq!(songs.len() as i64, ALL_SONGS_LIMIT);
    assert_eq!(songs[0].id, SongId::new("song-0000"));
    assert_eq!(songs[999].id, SongId::new("song-0999"));
}
