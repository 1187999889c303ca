//! Axum route handlers for the tic-tac-toe API.

use crate::error::{ApiError, RegistryError};
use crate::registry::{GameId, GameRegistry};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tictactoe_engine::{Board, GameState, Player};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

type Registry = Arc<GameRegistry>;

// ── Request / response types ──────────────────────────────────────────────────

/// Body of `POST /tictactoe/new`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewGameRequest {
    /// `"X"` or `"O"`; X starts when absent or null.
    #[serde(default)]
    pub starting_player: Option<String>,
}

/// Body of `POST /tictactoe/{id}/move`.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveRequest {
    /// Cell index, 0-8.
    pub index: i64,
    /// Marker to place. Older clients send this as `move`.
    #[serde(alias = "move")]
    pub marker: String,
}

/// Full view of one game as returned by every game endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Game identifier.
    pub id: GameId,
    /// Nine cells, `null` when empty.
    pub board: Board,
    /// Player to move next.
    pub current_player: Player,
    /// Winner, if any.
    pub winner: Option<Player>,
    /// Board full without a winner.
    pub is_draw: bool,
    /// Human-readable status.
    pub status: String,
    /// Empty cell indices, ascending.
    pub available_moves: Vec<usize>,
}

impl GameView {
    /// Builds the view of a snapshot.
    pub fn new(id: GameId, state: &GameState) -> Self {
        Self {
            id,
            board: *state.board(),
            current_player: state.current_player(),
            winner: state.winner(),
            is_draw: state.is_draw(),
            status: state.status(),
            available_moves: state.available_moves(),
        }
    }
}

/// Result of `DELETE /tictactoe/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Whether a game was removed.
    pub ok: bool,
    /// Why nothing was removed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl DeleteResponse {
    fn removed() -> Self {
        Self {
            ok: true,
            reason: None,
        }
    }

    fn not_found() -> Self {
        Self {
            ok: false,
            reason: Some("not found".to_string()),
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Number of active games.
    pub games: usize,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Builds the application router over a shared registry.
pub fn create_router(registry: Registry) -> Router {
    Router::new()
        .route("/tictactoe/new", post(create_game))
        .route("/tictactoe/{id}", get(get_game).delete(delete_game))
        .route("/tictactoe/{id}/move", post(make_move))
        .route("/health", get(health))
        .with_state(registry)
        .layer(TraceLayer::new_for_http())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health(State(registry): State<Registry>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        games: registry.len(),
    })
}

/// `POST /tictactoe/new`: start a game.
///
/// The body may be omitted entirely.
#[instrument(skip(registry))]
pub async fn create_game(
    State(registry): State<Registry>,
    body: Option<Json<NewGameRequest>>,
) -> Result<Json<GameView>, ApiError> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let starting_player = request
        .starting_player
        .as_deref()
        .map(parse_marker)
        .transpose()?;

    let (id, state) = registry.create(starting_player)?;
    info!(game_id = %id, "New game via API");
    Ok(Json(GameView::new(id, &state)))
}

/// `GET /tictactoe/{id}`
#[instrument(skip(registry))]
pub async fn get_game(
    State(registry): State<Registry>,
    Path(id): Path<String>,
) -> Result<Json<GameView>, ApiError> {
    let id = GameId::from(id);
    let state = registry
        .get(&id)
        .ok_or_else(|| RegistryError::NotFound(id.clone()))?;
    Ok(Json(GameView::new(id, &state)))
}

/// `POST /tictactoe/{id}/move`
#[instrument(skip(registry))]
pub async fn make_move(
    State(registry): State<Registry>,
    Path(id): Path<String>,
    Json(body): Json<MoveRequest>,
) -> Result<Json<GameView>, ApiError> {
    let id = GameId::from(id);
    let marker = parse_marker(&body.marker)?;
    let index = usize::try_from(body.index).map_err(|_| ApiError::InvalidIndex(body.index))?;

    let state = registry.apply_move(&id, index, marker).inspect_err(|e| {
        warn!(game_id = %id, index, %marker, error = %e, "Move failed");
    })?;
    Ok(Json(GameView::new(id, &state)))
}

/// `DELETE /tictactoe/{id}`: always 200, the body says whether anything was removed.
#[instrument(skip(registry))]
pub async fn delete_game(
    State(registry): State<Registry>,
    Path(id): Path<String>,
) -> Json<DeleteResponse> {
    if registry.remove(&GameId::from(id)) {
        Json(DeleteResponse::removed())
    } else {
        Json(DeleteResponse::not_found())
    }
}

fn parse_marker(raw: &str) -> Result<Player, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::InvalidMarker(raw.to_string()))
}
