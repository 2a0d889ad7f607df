use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};

use crate::application::posts::dto::{ListPostsRequest, PostContentRequest};
use crate::domain::post::entity::Post;
use crate::presentation::http::{
    errors::AppError, middleware::user::actor_from_headers, state::AppState,
};

pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<ListPostsRequest>,
) -> Result<Json<Vec<Post>>, AppError> {
    let posts = state.post_use_case.list_posts(params).await?;
    Ok(Json(posts))
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, AppError> {
    let post = state.post_use_case.get_post(id).await?;
    Ok(Json(post))
}

pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<PostContentRequest>,
) -> Result<Json<Post>, AppError> {
    let actor = actor_from_headers(&headers, &state.config.jwt_secret);
    let post = state.post_use_case.create_post(actor, body).await?;
    Ok(Json(post))
}

pub async fn edit_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<PostContentRequest>,
) -> Result<Json<Post>, AppError> {
    let actor = actor_from_headers(&headers, &state.config.jwt_secret);
    let post = state.post_use_case.edit_post(actor, id, body).await?;
    Ok(Json(post))
}

pub async fn delete_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let actor = actor_from_headers(&headers, &state.config.jwt_secret);
    state.post_use_case.delete_post(actor, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
