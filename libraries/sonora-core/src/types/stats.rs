/// Per-collection document counts
use serde::{Deserialize, Serialize};

/// Number of documents in each catalog collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub songs: i64,
    pub segments: i64,
    pub users: i64,
    pub playlists: i64,
}
