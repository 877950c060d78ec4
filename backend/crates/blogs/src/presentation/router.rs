//! Blogs Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::BlogRepository;
use crate::infra::postgres::PgBlogRepository;
use crate::presentation::handlers::{self, BlogsAppState};

/// Create the blogs router with PostgreSQL repository
pub fn blogs_router(repo: PgBlogRepository) -> Router {
    blogs_router_generic(repo)
}

/// Create a generic blogs router for any repository implementation
pub fn blogs_router_generic<R>(repo: R) -> Router
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    let state = BlogsAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/api/blogs",
            get(handlers::list_blogs::<R>).post(handlers::add_blog::<R>),
        )
        .route(
            "/api/blogs/{id}",
            get(handlers::get_blog::<R>)
                .put(handlers::update_blog::<R>)
                .delete(handlers::delete_blog::<R>),
        )
        .with_state(state)
}
