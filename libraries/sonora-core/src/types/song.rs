/// Song domain type
use super::ids::SongId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Song metadata record
///
/// Immutable once inserted. Fields this backend does not know about are kept
/// in `extra` and round-tripped unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub artist: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Song {
    /// Create a song with the minimal metadata
    pub fn new(id: SongId, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            album: None,
            genre: None,
            duration_seconds: None,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let raw = json!({
            "id": "s1",
            "title": "Intro",
            "artist": "The Band",
            "release_date": "1999-01-01",
            "explicit": false
        });

        let song: Song = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(song.extra.get("release_date"), Some(&json!("1999-01-01")));
        assert_eq!(serde_json::to_value(&song).unwrap(), raw);
    }

    #[test]
    fn only_id_is_required() {
        let song: Song = serde_json::from_value(json!({ "id": "s2" })).unwrap();
        assert_eq!(song.id, SongId::new("s2"));
        assert!(song.title.is_empty());
        assert!(song.album.is_none());
    }
}
