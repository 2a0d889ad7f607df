use super::{
    handlers::{auth, comments, health, posts, social},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/me", get(auth::me))
        // Posts CRUD
        .route("/api/v1/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/api/v1/posts/{id}",
            get(posts::get_post)
                .put(posts::edit_post)
                .delete(posts::delete_post),
        )
        // Comments
        .route(
            "/api/v1/posts/{id}/comments",
            get(comments::list_comments).post(comments::add_comment),
        )
        .route("/api/v1/comments/{id}", delete(comments::delete_comment))
        // Likes
        .route("/api/v1/posts/{id}/like", post(social::like_post))
        .route("/api/v1/comments/{id}/like", post(social::like_comment))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
