use async_trait::async_trait;
use blog_api::application::posts::dto::{ListPostsRequest, PostContentRequest};
use blog_api::application::posts::use_case::PostUseCase;
use blog_api::domain::errors::DomainError;
use blog_api::domain::post::entity::{NewPost, Post, PostContentUpdate, PostFilter};
use blog_api::domain::post::repository::PostRepository;
use blog_api::domain::shared::pagination::PaginationRequest;
use blog_api::domain::social::authorization::{Actor, AuthorizationGuard};
use blog_api::domain::social::like::LikeOutcome;
use std::sync::Arc;

mockall::mock! {
    pub Posts {}

    #[async_trait]
    impl PostRepository for Posts {
        async fn create(&self, post: NewPost) -> Result<Post, DomainError>;
        async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError>;
        async fn list(
            &self,
            filter: PostFilter,
            page: PaginationRequest,
        ) -> Result<Vec<Post>, DomainError>;
        async fn update_content(
            &self,
            id: i64,
            update: PostContentUpdate,
        ) -> Result<Post, DomainError>;
        async fn delete(&self, id: i64) -> Result<(), DomainError>;
        async fn toggle_like(
            &self,
            post_id: i64,
            account_id: i64,
        ) -> Result<LikeOutcome, DomainError>;
    }
}

const SUPER_ADMIN: i64 = 1;

fn use_case(posts: MockPosts) -> PostUseCase {
    PostUseCase::new(
        Arc::new(posts),
        AuthorizationGuard::new(SUPER_ADMIN),
        vec![
            "Movies".to_string(),
            "Musics".to_string(),
            "Topics".to_string(),
        ],
    )
}

fn stored_post(id: i64, author_id: i64) -> Post {
    Post {
        id,
        author_id,
        title: "Title".to_string(),
        subtitle: "Subtitle".to_string(),
        body: "Body".to_string(),
        ..Default::default()
    }
}

fn content(category: Option<&str>) -> PostContentRequest {
    PostContentRequest {
        title: "Title".to_string(),
        subtitle: "Subtitle".to_string(),
        body: "Body".to_string(),
        category: category.map(str::to_string),
        img_url: None,
    }
}

#[tokio::test]
async fn stranger_cannot_edit_post() {
    let mut posts = MockPosts::new();
    posts
        .expect_find_by_id()
        .returning(|id| Ok(Some(stored_post(id, 42))));
    posts.expect_update_content().never();

    let err = use_case(posts)
        .edit_post(Actor::Authenticated(7), 5, content(None))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));
}

#[tokio::test]
async fn unauthenticated_actor_cannot_edit_post() {
    let mut posts = MockPosts::new();
    posts
        .expect_find_by_id()
        .returning(|id| Ok(Some(stored_post(id, 42))));
    posts.expect_update_content().never();

    let err = use_case(posts)
        .edit_post(Actor::Anonymous, 5, content(None))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));
}

#[tokio::test]
async fn author_can_edit_own_post() {
    let mut posts = MockPosts::new();
    posts
        .expect_find_by_id()
        .returning(|id| Ok(Some(stored_post(id, 42))));
    posts
        .expect_update_content()
        .times(1)
        .returning(|id, _| Ok(stored_post(id, 42)));

    let post = use_case(posts)
        .edit_post(Actor::Authenticated(42), 5, content(Some("Movies")))
        .await
        .unwrap();
    assert_eq!(post.author_id, 42);
}

#[tokio::test]
async fn super_admin_can_delete_any_post() {
    let mut posts = MockPosts::new();
    posts
        .expect_find_by_id()
        .returning(|id| Ok(Some(stored_post(id, 42))));
    posts.expect_delete().times(1).returning(|_| Ok(()));

    use_case(posts)
        .delete_post(Actor::Authenticated(SUPER_ADMIN), 5)
        .await
        .unwrap();
}

#[tokio::test]
async fn stranger_cannot_delete_post() {
    let mut posts = MockPosts::new();
    posts
        .expect_find_by_id()
        .returning(|id| Ok(Some(stored_post(id, 42))));
    posts.expect_delete().never();

    let err = use_case(posts)
        .delete_post(Actor::Authenticated(7), 5)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));
}

#[tokio::test]
async fn editing_missing_post_is_not_found() {
    let mut posts = MockPosts::new();
    posts.expect_find_by_id().returning(|_| Ok(None));

    let err = use_case(posts)
        .edit_post(Actor::Authenticated(42), 5, content(None))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn create_rejects_unknown_category() {
    let mut posts = MockPosts::new();
    posts.expect_create().never();

    let err = use_case(posts)
        .create_post(Actor::Authenticated(42), content(Some("Gardening")))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn create_accepts_configured_category() {
    let mut posts = MockPosts::new();
    posts.expect_create().times(1).returning(|new_post| {
        Ok(Post {
            id: 11,
            author_id: new_post.author_id,
            title: new_post.title,
            subtitle: new_post.subtitle,
            body: new_post.body,
            category: new_post.category,
            img_url: new_post.img_url,
            date: new_post.date,
            ..Default::default()
        })
    });

    let post = use_case(posts)
        .create_post(Actor::Authenticated(42), content(Some("Topics")))
        .await
        .unwrap();
    assert_eq!(post.category.as_deref(), Some("Topics"));
    assert_eq!(post.author_id, 42);
}

#[tokio::test]
async fn create_requires_authentication() {
    let mut posts = MockPosts::new();
    posts.expect_create().never();

    let err = use_case(posts)
        .create_post(Actor::Anonymous, content(None))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));
}

#[tokio::test]
async fn list_rejects_unknown_sort_order() {
    let posts = MockPosts::new();

    let err = use_case(posts)
        .list_posts(ListPostsRequest {
            sort: Some("oldest".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}
