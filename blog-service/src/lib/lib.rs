pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::comment;
pub use domain::identity;
pub use domain::post;
pub use outbound::repositories;
