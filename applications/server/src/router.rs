/// HTTP routing
use crate::{api, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the `/api/v1` router around the given state
pub fn create_router(app_state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(api::health::health))
        // Songs & segments
        .route("/addSegment", post(api::songs::add_segment))
        .route("/allsongs", get(api::songs::all_songs))
        .route("/getsegment", post(api::songs::get_segment))
        // Users
        .route("/new_user", post(api::users::new_user))
        .route("/get_user", post(api::users::get_user))
        // Playlists
        .route("/new_playlist", post(api::playlists::new_playlist))
        .route("/delete_playlist", post(api::playlists::delete_playlist))
        .route("/user_playlists", post(api::playlists::user_playlists))
        .route("/get_playlist", post(api::playlists::get_playlist))
        .route("/add_song_playlist", post(api::playlists::add_song_playlist))
        .route(
            "/remove_song_playlist",
            post(api::playlists::remove_song_playlist),
        )
        // Admin
        .route("/admin/delete_playlist", post(api::admin::delete_playlist))
        .route(
            "/admin/add_song_playlist",
            post(api::admin::add_song_playlist),
        )
        .route(
            "/admin/remove_song_playlist",
            post(api::admin::remove_song_playlist),
        );

    Router::new()
        .nest("/api/v1", routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
