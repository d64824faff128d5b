/// Playlist domain types
use super::ids::{PlaylistId, UserId};
use super::song::Song;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playlist with its embedded song snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Server-generated identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Owner user ID
    pub owner_id: UserId,

    /// Whether users other than the owner may read it
    #[serde(default)]
    pub shared: bool,

    /// Creation timestamp (server clock)
    pub created_at: DateTime<Utc>,

    /// Copies of songs as they were when added, in insertion order
    #[serde(default)]
    pub songs: Vec<Song>,
}

impl Playlist {
    /// Whether `user_id` may read this playlist
    pub fn is_visible_to(&self, user_id: &UserId) -> bool {
        self.shared || &self.owner_id == user_id
    }
}

/// Playlist projection without the song list, used by list views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortPlaylist {
    pub id: PlaylistId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub owner_id: UserId,
    #[serde(default)]
    pub shared: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Playlist> for ShortPlaylist {
    fn from(playlist: Playlist) -> Self {
        Self {
            id: playlist.id,
            name: playlist.name,
            description: playlist.description,
            owner_id: playlist.owner_id,
            shared: playlist.shared,
            created_at: playlist.created_at,
        }
    }
}

/// Data for creating a new playlist
///
/// The storage layer assigns the identifier; the song list always starts empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlaylist {
    pub name: String,
    pub description: String,
    pub owner_id: UserId,
    pub shared: bool,
    pub created_at: DateTime<Utc>,
}

impl NewPlaylist {
    /// Create a private playlist draft stamped with the current time
    pub fn new(owner_id: UserId, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            owner_id,
            shared: false,
            created_at: Utc::now(),
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the shared flag
    #[must_use]
    pub fn with_shared(mut self, shared: bool) -> Self {
        self.shared = shared;
        self
    }

    /// Materialize the stored playlist once an id has been assigned
    pub fn into_playlist(self, id: PlaylistId) -> Playlist {
        Playlist {
            id,
            name: self.name,
            description: self.description,
            owner_id: self.owner_id,
            shared: self.shared,
            created_at: self.created_at,
            songs: Vec::new(),
        }
    }
}
