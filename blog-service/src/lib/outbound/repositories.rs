pub mod comment;
pub mod identity;
pub mod post;

pub use comment::InMemoryCommentRepository;
pub use comment::PostgresCommentRepository;
pub use identity::InMemoryCredentialStore;
pub use identity::PostgresCredentialStore;
pub use post::InMemoryPostRepository;
pub use post::PostgresPostRepository;
