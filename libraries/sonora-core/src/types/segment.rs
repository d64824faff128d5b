/// Media segment domain type
use super::ids::{SegmentId, SongId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A chunk of streamable media: one manifest or one transport-stream chunk
///
/// `data` travels as standard base64 on the wire. Fields this backend does
/// not know about are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: SegmentId,

    #[serde(default)]
    pub song_id: SongId,

    #[serde(default)]
    pub name: String,

    #[serde(default, with = "base64_bytes")]
    pub data: Vec<u8>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Segment {
    /// Create a segment belonging to `song_id`
    pub fn new(
        id: SegmentId,
        song_id: SongId,
        name: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            id,
            song_id,
            name: name.into(),
            data: data.into(),
            extra: Map::new(),
        }
    }
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_is_base64_on_the_wire() {
        let segment = Segment::new(
            SegmentId::new("s1/0.ts"),
            SongId::new("s1"),
            "0.ts",
            vec![0x47, 0x40, 0x00],
        );

        let value = serde_json::to_value(&segment).unwrap();
        assert_eq!(value["data"], json!("R0AA"));
    }

    #[test]
    fn unknown_fields_round_trip() {
        let raw = json!({
            "id": "s1/index.m3u8",
            "song_id": "s1",
            "name": "index.m3u8",
            "data": "I0VYVE0zVQ==",
            "bitrate": 128_000,
            "codec": "aac",
        });

        let segment: Segment = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(segment.data, b"#EXTM3U");
        assert_eq!(serde_json::to_value(&segment).unwrap(), raw);
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let result: Result<Segment, _> =
            serde_json::from_value(json!({ "id": "x", "data": "not base64!" }));
        assert!(result.is_err());
    }
}
