use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};

use crate::domain::social::like::LikeOutcome;
use crate::presentation::http::{
    errors::AppError, middleware::user::actor_from_headers, state::AppState,
};

pub async fn like_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<LikeOutcome>, AppError> {
    let actor = actor_from_headers(&headers, &state.config.jwt_secret);
    let outcome = state.social_use_case.toggle_post_like(actor, id).await?;
    Ok(Json(outcome))
}

pub async fn like_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<LikeOutcome>, AppError> {
    let actor = actor_from_headers(&headers, &state.config.jwt_secret);
    let outcome = state.social_use_case.toggle_comment_like(actor, id).await?;
    Ok(Json(outcome))
}
