//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use kernel::error::app_error::AppError;
use std::sync::Arc;

use crate::application::{
    BrowseUseCase, CreatePostInput, CreatePostUseCase, ManagePostUseCase, SignUpInput,
    SignUpPostInput, SignUpUseCase,
};
use crate::domain::repository::{PostRepository, UserRepository};
use crate::domain::value_objects::{FeedQuery, PostId, UserId};
use crate::error::PostsResult;
use crate::presentation::dto::{
    CreatePostRequest, FeedParams, FeedPostResponse, HelloResponse, PostResponse, SignUpRequest,
    SignUpResponse, UserResponse,
};

/// Shared state for posts handlers
#[derive(Clone)]
pub struct PostsAppState<R>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse { hello: "World" })
}

// ============================================================================
// Users
// ============================================================================

/// POST /signup
pub async fn sign_up<R>(
    State(state): State<PostsAppState<R>>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> PostsResult<Json<SignUpResponse>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(AppError::from)?;

    let input = SignUpInput {
        name: req.name,
        email: req.email,
        posts: req
            .posts
            .into_iter()
            .map(|post| SignUpPostInput {
                title: post.title,
                content: post.content,
            })
            .collect(),
    };

    let created = SignUpUseCase::new(state.repo.clone()).execute(input).await?;

    Ok(Json(created.into()))
}

/// GET /users
pub async fn list_users<R>(
    State(state): State<PostsAppState<R>>,
) -> PostsResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = BrowseUseCase::new(state.repo.clone(), state.repo.clone());
    let users = use_case.list_users().await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// GET /user/{id}/drafts
pub async fn list_drafts<R>(
    State(state): State<PostsAppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> PostsResult<Json<Vec<PostResponse>>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let author_id = UserId::from_path(path)?;

    let use_case = BrowseUseCase::new(state.repo.clone(), state.repo.clone());
    let drafts = use_case.list_drafts(author_id).await?;

    Ok(Json(drafts.into_iter().map(Into::into).collect()))
}

// ============================================================================
// Posts
// ============================================================================

/// POST /post
pub async fn create_post<R>(
    State(state): State<PostsAppState<R>>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> PostsResult<Json<PostResponse>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(AppError::from)?;

    let input = CreatePostInput {
        title: req.title,
        content: req.content,
        author_email: req.author_email,
    };

    let post = CreatePostUseCase::new(state.repo.clone())
        .execute(input)
        .await?;

    Ok(Json(post.into()))
}

/// GET /post/{id}
///
/// Responds with `null` when the post does not exist.
pub async fn get_post<R>(
    State(state): State<PostsAppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> PostsResult<Json<Option<PostResponse>>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let post_id = PostId::from_path(path)?;

    let use_case = BrowseUseCase::new(state.repo.clone(), state.repo.clone());
    let post = use_case.get_post(post_id).await?;

    Ok(Json(post.map(Into::into)))
}

/// PUT /post/{id}/views
pub async fn register_view<R>(
    State(state): State<PostsAppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> PostsResult<Json<PostResponse>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let post_id = PostId::from_path(path)?;

    let post = ManagePostUseCase::new(state.repo.clone())
        .register_view(post_id)
        .await?;

    Ok(Json(post.into()))
}

/// PUT /publish/{id}
pub async fn toggle_publish<R>(
    State(state): State<PostsAppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> PostsResult<Json<PostResponse>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let post_id = PostId::from_path(path)?;

    let post = ManagePostUseCase::new(state.repo.clone())
        .toggle_publish(post_id)
        .await?;

    Ok(Json(post.into()))
}

/// DELETE /post/{id}
pub async fn delete_post<R>(
    State(state): State<PostsAppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> PostsResult<Json<PostResponse>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let post_id = PostId::from_path(path)?;

    let post = ManagePostUseCase::new(state.repo.clone())
        .delete(post_id)
        .await?;

    Ok(Json(post.into()))
}

/// GET /feed?searchString&skip&take&orderBy
pub async fn feed<R>(
    State(state): State<PostsAppState<R>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> PostsResult<Json<Vec<FeedPostResponse>>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Ignoring undecodable feed query");
            Vec::new()
        }
    };
    let params = FeedParams::from_pairs(pairs);

    let query = FeedQuery::from_raw(
        params.search_string.as_deref(),
        params.skip.as_deref(),
        params.take.as_deref(),
        params.order_by.as_deref(),
    );

    let use_case = BrowseUseCase::new(state.repo.clone(), state.repo.clone());
    let posts = use_case.feed(&query).await?;

    Ok(Json(posts.into_iter().map(Into::into).collect()))
}
