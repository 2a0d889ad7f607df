use async_trait::async_trait;
use blog_api::application::comments::dto::AddCommentRequest;
use blog_api::application::comments::use_case::CommentUseCase;
use blog_api::application::social::use_case::SocialUseCase;
use blog_api::domain::comment::entity::{Comment, NewComment};
use blog_api::domain::comment::repository::CommentRepository;
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

mockall::mock! {
    pub Comments {}

    #[async_trait]
    impl CommentRepository for Comments {
        async fn create(&self, comment: NewComment) -> Result<Comment, DomainError>;
        async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, DomainError>;
        async fn list_for_post(&self, post_id: i64) -> Result<Vec<Comment>, DomainError>;
        async fn delete(&self, id: i64) -> Result<(), DomainError>;
        async fn toggle_like(
            &self,
            comment_id: i64,
            account_id: i64,
        ) -> Result<LikeOutcome, DomainError>;
    }
}

const SUPER_ADMIN: i64 = 1;

fn use_case(comments: MockComments, posts: MockPosts) -> CommentUseCase {
    CommentUseCase::new(
        Arc::new(comments),
        Arc::new(posts),
        AuthorizationGuard::new(SUPER_ADMIN),
    )
}

fn stored_comment(id: i64, author_id: i64, post_id: i64) -> Comment {
    Comment {
        id,
        post_id,
        author_id,
        body: "a comment".to_string(),
        ..Default::default()
    }
}

fn stored_post(id: i64, author_id: i64) -> Post {
    Post {
        id,
        author_id,
        ..Default::default()
    }
}

#[tokio::test]
async fn comment_author_can_delete_own_comment() {
    let mut comments = MockComments::new();
    comments
        .expect_find_by_id()
        .returning(|id| Ok(Some(stored_comment(id, 9, 100))));
    comments.expect_delete().times(1).returning(|_| Ok(()));

    use_case(comments, MockPosts::new())
        .delete_comment(Actor::Authenticated(9), 3)
        .await
        .unwrap();
}

#[tokio::test]
async fn post_author_cannot_delete_anothers_comment_on_their_post() {
    // The comment was authored by 9 under a post owned by 7; owning the
    // post grants nothing on the comment.
    let mut comments = MockComments::new();
    comments
        .expect_find_by_id()
        .returning(|id| Ok(Some(stored_comment(id, 9, 100))));
    comments.expect_delete().never();

    let err = use_case(comments, MockPosts::new())
        .delete_comment(Actor::Authenticated(7), 3)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));
}

#[tokio::test]
async fn super_admin_can_delete_any_comment() {
    let mut comments = MockComments::new();
    comments
        .expect_find_by_id()
        .returning(|id| Ok(Some(stored_comment(id, 9, 100))));
    comments.expect_delete().times(1).returning(|_| Ok(()));

    use_case(comments, MockPosts::new())
        .delete_comment(Actor::Authenticated(SUPER_ADMIN), 3)
        .await
        .unwrap();
}

#[tokio::test]
async fn deleting_missing_comment_is_not_found() {
    let mut comments = MockComments::new();
    comments.expect_find_by_id().returning(|_| Ok(None));

    let err = use_case(comments, MockPosts::new())
        .delete_comment(Actor::Authenticated(9), 3)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn adding_comment_requires_authentication() {
    let mut comments = MockComments::new();
    comments.expect_create().never();

    let err = use_case(comments, MockPosts::new())
        .add_comment(
            Actor::Anonymous,
            100,
            AddCommentRequest {
                body: "hi".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));
}

#[tokio::test]
async fn adding_comment_to_missing_post_is_not_found() {
    let mut posts = MockPosts::new();
    posts.expect_find_by_id().returning(|_| Ok(None));
    let mut comments = MockComments::new();
    comments.expect_create().never();

    let err = use_case(comments, posts)
        .add_comment(
            Actor::Authenticated(9),
            100,
            AddCommentRequest {
                body: "hi".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn adding_comment_stores_trimmed_body() {
    let mut posts = MockPosts::new();
    posts
        .expect_find_by_id()
        .returning(|id| Ok(Some(stored_post(id, 7))));
    let mut comments = MockComments::new();
    comments.expect_create().times(1).returning(|new_comment| {
        assert_eq!(new_comment.body, "hi there");
        Ok(stored_comment(1, new_comment.author_id, new_comment.post_id))
    });

    use_case(comments, posts)
        .add_comment(
            Actor::Authenticated(9),
            100,
            AddCommentRequest {
                body: "  hi there  ".to_string(),
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn empty_comment_is_rejected() {
    let mut comments = MockComments::new();
    comments.expect_create().never();

    let err = use_case(comments, MockPosts::new())
        .add_comment(
            Actor::Authenticated(9),
            100,
            AddCommentRequest {
                body: "   ".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn anonymous_actor_cannot_toggle_likes() {
    let mut posts = MockPosts::new();
    posts.expect_toggle_like().never();
    let mut comments = MockComments::new();
    comments.expect_toggle_like().never();

    let social = SocialUseCase::new(Arc::new(posts), Arc::new(comments));

    let err = social
        .toggle_post_like(Actor::Anonymous, 100)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    let err = social
        .toggle_comment_like(Actor::Anonymous, 3)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));
}

#[tokio::test]
async fn authenticated_actor_may_like_their_own_post() {
    let mut posts = MockPosts::new();
    posts
        .expect_toggle_like()
        .times(1)
        .returning(|_, _| {
            Ok(LikeOutcome {
                liked: true,
                like_count: 1,
            })
        });

    let social = SocialUseCase::new(Arc::new(posts), Arc::new(MockComments::new()));
    let outcome = social
        .toggle_post_like(Actor::Authenticated(42), 100)
        .await
        .unwrap();
    assert!(outcome.liked);
    assert_eq!(outcome.like_count, 1);
}
