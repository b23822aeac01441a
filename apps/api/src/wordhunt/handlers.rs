//! Axum route handlers for the word-hunt API.

use axum::{
    extract::{FromRequest, FromRequestParts, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::wordhunt::grid::clamp_size;
use crate::wordhunt::leaderboard::LeaderboardEntry;
use crate::wordhunt::ledger::{Submission, SubmitOutcome};
use crate::wordhunt::seed::DailyPuzzle;

// ────────────────────────────────────────────────────────────────────────────
// Extractors
// ────────────────────────────────────────────────────────────────────────────

/// `Query` whose rejection is an `AppError`, so bad parameters get the JSON error body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);

/// `Json` body extractor with `AppError` rejections.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DailyQuery {
    pub date: Option<NaiveDate>,
    pub size: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub user_id: Option<String>,
    pub username: Option<String>,
    /// Null entries are dropped before scoring.
    pub words: Option<Vec<Option<String>>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub accepted: bool,
    pub message: String,
    pub score: i32,
    pub words_found: i32,
    pub words: Vec<String>,
}

impl From<SubmitOutcome> for SubmitResponse {
    fn from(outcome: SubmitOutcome) -> Self {
        let row = outcome.record();
        Self {
            accepted: outcome.accepted(),
            message: outcome.message().to_string(),
            score: row.score,
            words_found: row.words_found,
            words: row.found_words.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub date: Option<NaiveDate>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub date: NaiveDate,
    pub top: Vec<LeaderboardEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeQuery {
    pub date: Option<NaiveDate>,
    pub user_id: Option<String>,
    pub username: Option<String>,
}

/// Score fields are null when the user has not submitted for the date.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub date: NaiveDate,
    pub user_id: String,
    pub username: Option<String>,
    pub score: Option<i32>,
    pub words_found: Option<i32>,
    pub words: Option<Vec<String>>,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// `userId` if present, otherwise the trimmed `username`.
fn resolve_user_id(user_id: Option<&str>, username: Option<&str>) -> Result<String, AppError> {
    [user_id, username]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation("userId or username is required".to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/wordhunt/daily
///
/// Returns the seed and board for the date (default today). `size` is
/// clamped to 3..=6 and defaults to 4.
pub async fn handle_daily(
    State(state): State<AppState>,
    Query(params): Query<DailyQuery>,
) -> Result<Json<DailyPuzzle>, AppError> {
    let date = params.date.unwrap_or_else(today);
    let puzzle = state.seeds.daily_puzzle(date, clamp_size(params.size)).await?;
    Ok(Json(puzzle))
}

/// POST /api/wordhunt/submit
///
/// Scores the user's single submission for the date. A repeat submission
/// returns 200 with `accepted: false` and the first recorded result.
pub async fn handle_submit(
    State(state): State<AppState>,
    Query(params): Query<DateQuery>,
    JsonBody(request): JsonBody<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    let user_id = resolve_user_id(request.user_id.as_deref(), request.username.as_deref())?;
    let display_name = request
        .username
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(user_id.as_str())
        .to_string();

    let outcome = state
        .ledger
        .submit(Submission {
            date: params.date.unwrap_or_else(today),
            user_id,
            display_name,
            words: request.words.unwrap_or_default().into_iter().flatten().collect(),
        })
        .await?;

    Ok(Json(outcome.into()))
}

/// GET /api/wordhunt/leaderboard
///
/// Top scores for the date, best first. `limit` defaults to 50, clamped to 1..=200.
/// Ties come back in no particular order.
pub async fn handle_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    let date = params.date.unwrap_or_else(today);
    let top = state.leaderboard.top(date, params.limit).await?;
    Ok(Json(LeaderboardResponse { date, top }))
}

/// GET /api/wordhunt/me
pub async fn handle_me(
    State(state): State<AppState>,
    Query(params): Query<MeQuery>,
) -> Result<Json<MeResponse>, AppError> {
    let user_id = resolve_user_id(params.user_id.as_deref(), params.username.as_deref())?;
    let date = params.date.unwrap_or_else(today);
    let record = state.leaderboard.me(date, &user_id).await?;

    Ok(Json(match record {
        Some(row) => MeResponse {
            date,
            user_id,
            username: Some(row.username),
            score: Some(row.score),
            words_found: Some(row.words_found),
            words: Some(row.found_words),
        },
        None => MeResponse {
            date,
            user_id,
            username: None,
            score: None,
            words_found: None,
            words: None,
        },
    }))
}
