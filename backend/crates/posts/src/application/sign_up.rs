//! Sign Up Use Case
//!
//! Creates a user together with any nested posts.

use std::sync::Arc;

use crate::domain::entities::{NewUser, NewUserPost, UserWithPosts};
use crate::domain::repository::UserRepository;
use crate::domain::value_objects::{Email, PostTitle};
use crate::error::PostsResult;

/// Sign up input
pub struct SignUpInput {
    pub name: Option<String>,
    pub email: String,
    pub posts: Vec<SignUpPostInput>,
}

/// Nested post in a sign up request
pub struct SignUpPostInput {
    pub title: String,
    pub content: Option<String>,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: SignUpInput) -> PostsResult<UserWithPosts> {
        let email = Email::new(input.email)?;

        // Every nested post is validated before anything is written
        let posts = input
            .posts
            .into_iter()
            .map(|post| -> PostsResult<NewUserPost> {
                Ok(NewUserPost {
                    title: PostTitle::new(post.title)?,
                    content: post.content,
                })
            })
            .collect::<PostsResult<Vec<_>>>()?;

        let new_user = NewUser {
            name: input.name,
            email,
            posts,
        };

        let created = self.user_repo.create_with_posts(&new_user).await?;

        tracing::info!(
            user_id = %created.user.id,
            posts = created.posts.len(),
            "User signed up"
        );

        Ok(created)
    }
}
