use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AddCommentRequest {
    pub body: String,
}
