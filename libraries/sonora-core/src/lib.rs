//! Sonora Core
//!
//! Domain types, error handling and the storage seam for the Sonora catalog
//! backend.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `Segment`, `User`, `Playlist`, `ShortPlaylist`
//! - **Storage Trait**: `CatalogStore`, implemented by `sonora-storage`
//! - **Error Handling**: Unified `SonoraError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use sonora_core::types::{NewPlaylist, Song, SongId, UserId};
//!
//! let song = Song::new(SongId::new("s1"), "Intro", "The Band");
//! let draft = NewPlaylist::new(UserId::new("u1"), "Road Trip");
//!
//! assert_eq!(song.id.as_str(), "s1");
//! assert_eq!(draft.name, "Road Trip");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{Result, SonoraError};
pub use storage::CatalogStore;

pub use types::{
    CatalogStats, NewPlaylist, Playlist, PlaylistId, Segment, SegmentId, ShortPlaylist, Song,
    SongId, User, UserId,
};
