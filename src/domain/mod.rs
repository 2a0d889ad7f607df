pub mod account;
pub mod comment;
pub mod errors;
pub mod post;
pub mod shared;
pub mod social;
