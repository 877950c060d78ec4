//! Posts Router

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::{PostRepository, UserRepository};
use crate::infra::postgres::PgPostsRepository;
use crate::presentation::handlers::{self, PostsAppState};

/// Create the posts router with PostgreSQL repository
pub fn posts_router(repo: PgPostsRepository) -> Router {
    posts_router_generic(repo)
}

/// Create a generic posts router for any repository implementation
pub fn posts_router_generic<R>(repo: R) -> Router
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let state = PostsAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", get(handlers::hello))
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/users", get(handlers::list_users::<R>))
        .route("/user/{id}/drafts", get(handlers::list_drafts::<R>))
        .route("/post", post(handlers::create_post::<R>))
        .route(
            "/post/{id}",
            get(handlers::get_post::<R>).delete(handlers::delete_post::<R>),
        )
        .route("/post/{id}/views", put(handlers::register_view::<R>))
        .route("/publish/{id}", put(handlers::toggle_publish::<R>))
        .route("/feed", get(handlers::feed::<R>))
        .with_state(state)
}
