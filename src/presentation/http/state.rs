use crate::{
    application::{
        comments::use_case::CommentUseCase, posts::use_case::PostUseCase,
        social::use_case::SocialUseCase,
    },
    config::Config,
    domain::account::repository::AccountRepository,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub accounts: Arc<dyn AccountRepository>,
    pub post_use_case: Arc<PostUseCase>,
    pub comment_use_case: Arc<CommentUseCase>,
    pub social_use_case: Arc<SocialUseCase>,
}
