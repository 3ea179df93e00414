use anyhow::Result;
use std::{sync::Arc, time::Duration};

use tracing::{error, info};

use crate::library::{
    aggregator::{star_rating, unique_genres},
    record_play, DocumentStore, LibrarySummary, PlayOutcome, Song, SongId, StarRating, Stats,
};
use tower_http::services::ServeDir;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

#[cfg(feature = "slowdown")]
use super::slowdown_request;
use super::{log_requests, state::*, ServerConfig};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LibraryEntry {
    #[serde(flatten)]
    song: Song,
    stars: StarRating,
}

/// Everything the dashboard page is rendered from.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardView {
    uptime: String,
    generated_at: String,
    stats: Stats,
    summary: LibrarySummary,
    now_playing: Option<Song>,
    recent_activity: Vec<Song>,
    genres: Vec<String>,
    library: Vec<LibraryEntry>,
}

#[derive(Deserialize, Debug)]
struct PlayBody {
    #[serde(rename = "songId")]
    pub song_id: SongId,
}

#[derive(Serialize)]
struct PlayResponse {
    success: bool,
    recorded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    plays: Option<u64>,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let config = &state.config;
    let view = state.document_store.read(|document| {
        let songs = &document.songs;
        DashboardView {
            uptime: format_uptime(state.start_time.elapsed()),
            generated_at: chrono::Utc::now().to_rfc3339(),
            stats: document.stats.clone(),
            summary: LibrarySummary::compute(songs, config.top_songs),
            now_playing: songs.first().cloned(),
            recent_activity: songs.iter().take(config.recent_songs).cloned().collect(),
            genres: unique_genres(songs),
            library: songs
                .iter()
                .map(|song| LibraryEntry {
                    song: song.clone(),
                    stars: star_rating(song.rating),
                })
                .collect(),
        }
    });
    Json(view)
}

async fn get_songs(State(store): State<GuardedDocumentStore>) -> impl IntoResponse {
    Json(store.get_songs())
}

async fn get_song(State(store): State<GuardedDocumentStore>, Path(id): Path<SongId>) -> Response {
    match store.get_song(id) {
        Some(song) => Json(song).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// The stored counters, as persisted. Live figures are under `/api/summary`.
async fn get_stats(State(store): State<GuardedDocumentStore>) -> impl IntoResponse {
    Json(store.get_stats())
}

async fn get_summary(State(state): State<ServerState>) -> impl IntoResponse {
    let top_songs = state.config.top_songs;
    Json(
        state
            .document_store
            .read(|document| LibrarySummary::compute(&document.songs, top_songs)),
    )
}

async fn post_play(
    State(store): State<GuardedDocumentStore>,
    Json(body): Json<PlayBody>,
) -> Response {
    match record_play(&store, body.song_id) {
        Ok(PlayOutcome::Recorded { plays, .. }) => Json(PlayResponse {
            success: true,
            recorded: true,
            plays: Some(plays),
        })
        .into_response(),
        Ok(PlayOutcome::UnknownSong { .. }) => Json(PlayResponse {
            success: true,
            recorded: false,
            plays: None,
        })
        .into_response(),
        Err(err) => {
            error!("Error recording play of song {}: {}", body.song_id, err);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err)).into_response()
        }
    }
}

pub fn make_app(config: ServerConfig, document_store: GuardedDocumentStore) -> Router {
    let state = ServerState::new(config.clone(), document_store);

    let api_routes: Router = Router::new()
        .route("/songs", get(get_songs))
        .route("/songs/{id}", get(get_song))
        .route("/stats", get(get_stats))
        .route("/summary", get(get_summary))
        .route("/play", post(post_play))
        .with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .fallback(home)
            .with_state(state.clone()),
    };

    let mut app: Router = home_router.nest("/api", api_routes);

    #[cfg(feature = "slowdown")]
    {
        app = app.layer(middleware::from_fn(slowdown_request));
    }
    app = app.layer(middleware::from_fn_with_state(state, log_requests));

    app
}

pub async fn run_server(config: ServerConfig, document_store: Arc<DocumentStore>) -> Result<()> {
    let port = config.port;
    let app = make_app(config, document_store);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Ready to serve at port {}!", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", err);
            }
            info!("Shutting down.");
        })
        .await?;
    Ok(())
}
