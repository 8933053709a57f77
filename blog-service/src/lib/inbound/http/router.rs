use std::sync::Arc;
use std::time::Duration;

use auth::SessionTokens;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_comment;
use super::handlers::create_post;
use super::handlers::delete_comment;
use super::handlers::delete_post;
use super::handlers::get_post;
use super::handlers::list_author_posts;
use super::handlers::list_comments;
use super::handlers::list_published_posts;
use super::handlers::login;
use super::handlers::logout;
use super::handlers::me;
use super::handlers::sign_up;
use super::handlers::update_post;
use super::handlers::welcome;
use super::middleware::require_author;
use super::middleware::require_reader;
use crate::domain::auth::AccessGuard;
use crate::domain::auth::LocalAuthenticator;
use crate::domain::auth::TokenIssuer;
use crate::domain::auth::TokenVerifier;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::comment::service::CommentService;
use crate::domain::identity::ports::CredentialStore;
use crate::domain::identity::ports::IdentityServicePort;
use crate::domain::identity::ports::PasswordHasher;
use crate::domain::identity::service::IdentityService;
use crate::domain::post::ports::PostRepository;
use crate::domain::post::ports::PostServicePort;
use crate::domain::post::service::PostService;

#[derive(Clone)]
pub struct AppState {
    pub identity_service: Arc<dyn IdentityServicePort>,
    pub post_service: Arc<dyn PostServicePort>,
    pub comment_service: Arc<dyn CommentServicePort>,
    pub authenticator: Arc<LocalAuthenticator<dyn CredentialStore, dyn PasswordHasher>>,
    pub token_issuer: Arc<TokenIssuer>,
    pub access_guard: Arc<AccessGuard<dyn CredentialStore>>,
}

impl AppState {
    /// Wire services and the auth core over the given adapters.
    ///
    /// # Arguments
    /// * `credentials` - Credential store shared by sign-up, login and the guard
    /// * `password_hasher` - Hasher shared by sign-up and login
    /// * `posts` - Post repository
    /// * `comments` - Comment repository
    /// * `tokens` - Session token minting and checking
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        password_hasher: Arc<dyn PasswordHasher>,
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        tokens: Arc<SessionTokens>,
    ) -> Self {
        let verifier = TokenVerifier::new(tokens.clone(), credentials.clone());

        Self {
            identity_service: Arc::new(IdentityService::new(
                credentials.clone(),
                password_hasher.clone(),
            )),
            post_service: Arc::new(PostService::new(posts.clone(), comments.clone())),
            comment_service: Arc::new(CommentService::new(comments, posts)),
            authenticator: Arc::new(LocalAuthenticator::new(credentials, password_hasher)),
            token_issuer: Arc::new(TokenIssuer::new(tokens)),
            access_guard: Arc::new(AccessGuard::new(verifier)),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api", get(welcome))
        .route("/api/sign-up", post(sign_up))
        .route("/api/login", post(login))
        .route("/api/logout", get(logout))
        .route("/api/posts", get(list_published_posts))
        .route("/api/post/:post_id", get(get_post))
        .route("/api/post/:post_id/comments", get(list_comments));

    let reader_routes = Router::new()
        .route("/api/me", get(me))
        .route("/api/post/:post_id/comment", post(create_comment))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_reader,
        ));

    let author_routes = Router::new()
        .route("/api/create-post", post(create_post))
        .route("/api/post/:post_id", put(update_post).delete(delete_post))
        .route("/api/post/:post_id/:comment_id", delete(delete_comment))
        .route("/api/author/posts", get(list_author_posts))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_author,
        ));

    // Headers are left out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(reader_routes)
        .merge(author_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
