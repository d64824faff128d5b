mod ids;
mod playlist;
mod segment;
mod song;
mod stats;
mod user;

pub use ids::{PlaylistId, SegmentId, SongId, UserId};
pub use playlist::{NewPlaylist, Playlist, ShortPlaylist};
pub use segment::Segment;
pub use song::Song;
pub use stats::CatalogStats;
pub use user::User;
