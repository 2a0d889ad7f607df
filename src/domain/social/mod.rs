pub mod authorization;
pub mod like;
