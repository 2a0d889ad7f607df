use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};

use crate::application::comments::dto::AddCommentRequest;
use crate::domain::comment::entity::Comment;
use crate::presentation::http::{
    errors::AppError, middleware::user::actor_from_headers, state::AppState,
};

pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let comments = state.comment_use_case.list_comments(post_id).await?;
    Ok(Json(comments))
}

pub async fn add_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(post_id): Path<i64>,
    Json(body): Json<AddCommentRequest>,
) -> Result<Json<Comment>, AppError> {
    let actor = actor_from_headers(&headers, &state.config.jwt_secret);
    let comment = state
        .comment_use_case
        .add_comment(actor, post_id, body)
        .await?;
    Ok(Json(comment))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let actor = actor_from_headers(&headers, &state.config.jwt_secret);
    state.comment_use_case.delete_comment(actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
