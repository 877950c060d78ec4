//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::error::app_error::AppError;
use std::sync::Arc;

use crate::application::{BlogInput, ManageBlogsUseCase};
use crate::domain::repository::BlogRepository;
use crate::domain::value_objects::BlogId;
use crate::error::BlogsResult;
use crate::presentation::dto::{BlogRequest, BlogResponse};

/// Shared state for blog handlers
#[derive(Clone)]
pub struct BlogsAppState<R>
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> BlogsAppState<R>
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    fn use_case(&self) -> ManageBlogsUseCase<R> {
        ManageBlogsUseCase::new(self.repo.clone())
    }
}

fn into_input(payload: Result<Json<BlogRequest>, JsonRejection>) -> BlogsResult<BlogInput> {
    let Json(req) = payload.map_err(AppError::from)?;
    Ok(BlogInput {
        title: req.title,
        content: req.content,
    })
}

/// GET /api/blogs
pub async fn list_blogs<R>(
    State(state): State<BlogsAppState<R>>,
) -> BlogsResult<Json<Vec<BlogResponse>>>
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    let blogs = state.use_case().list().await?;
    Ok(Json(blogs.into_iter().map(Into::into).collect()))
}

/// GET /api/blogs/{id}
pub async fn get_blog<R>(
    State(state): State<BlogsAppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> BlogsResult<Json<BlogResponse>>
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    let blog_id = BlogId::from_path(path)?;
    let blog = state.use_case().get(blog_id).await?;
    Ok(Json(blog.into()))
}

/// POST /api/blogs
pub async fn add_blog<R>(
    State(state): State<BlogsAppState<R>>,
    payload: Result<Json<BlogRequest>, JsonRejection>,
) -> BlogsResult<(StatusCode, Json<BlogResponse>)>
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    let input = into_input(payload)?;
    let blog = state.use_case().create(input).await?;
    Ok((StatusCode::CREATED, Json(blog.into())))
}

/// PUT /api/blogs/{id}
pub async fn update_blog<R>(
    State(state): State<BlogsAppState<R>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<BlogRequest>, JsonRejection>,
) -> BlogsResult<Json<BlogResponse>>
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    let blog_id = BlogId::from_path(path)?;
    let input = into_input(payload)?;
    let blog = state.use_case().update(blog_id, input).await?;
    Ok(Json(blog.into()))
}

/// DELETE /api/blogs/{id}
pub async fn delete_blog<R>(
    State(state): State<BlogsAppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> BlogsResult<Json<BlogResponse>>
where
    R: BlogRepository + Clone + Send + Sync + 'static,
{
    let blog_id = BlogId::from_path(path)?;
    let blog = state.use_case().delete(blog_id).await?;
    Ok(Json(blog.into()))
}
