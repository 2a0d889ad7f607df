use serde::Deserialize;

/// Content fields for both authoring and editing a post.
#[derive(Debug, Clone, Deserialize)]
pub struct PostContentRequest {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub category: Option<String>,
    pub img_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListPostsRequest {
    pub category: Option<String>,
    /// "newest" (default) or "most_liked".
    pub sort: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
