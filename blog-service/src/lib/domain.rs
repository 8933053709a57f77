pub mod auth;
pub mod comment;
pub mod identity;
pub mod post;
