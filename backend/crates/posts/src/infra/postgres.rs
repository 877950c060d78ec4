//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::entities::{NewPost, NewUser, Post, PostWithAuthor, User, UserWithPosts};
use crate::domain::repository::{PostRepository, UserRepository};
use crate::domain::value_objects::{Email, FeedQuery, PostId, UserId};
use crate::error::{PostsError, PostsResult};

/// Column list matching [`PostRow`]
const POST_COLUMNS: &str =
    "id, created_at, updated_at, title, content, published, view_count, author_id";

/// PostgreSQL-backed repository for users and posts
#[derive(Clone)]
pub struct PgPostsRepository {
    pool: PgPool,
}

impl PgPostsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgPostsRepository {
    async fn create_with_posts(&self, new_user: &NewUser) -> PostsResult<UserWithPosts> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, name)
            VALUES ($1, $2)
            RETURNING id, email, name
            "#,
        )
        .bind(new_user.email.as_str())
        .bind(new_user.name.as_deref())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                PostsError::EmailTaken(new_user.email.to_string())
            } else {
                PostsError::Database(e)
            }
        })?
        .into_user();

        let mut posts = Vec::with_capacity(new_user.posts.len());
        for post in &new_user.posts {
            let row = sqlx::query_as::<_, PostRow>(&format!(
                "INSERT INTO posts (title, content, author_id) VALUES ($1, $2, $3) RETURNING {}",
                POST_COLUMNS
            ))
            .bind(post.title.as_str())
            .bind(post.content.as_deref())
            .bind(user.id.value())
            .fetch_one(&mut *tx)
            .await?;
            posts.push(row.into_post());
        }

        // Dropping the transaction on an early return rolls it back
        tx.commit().await?;

        tracing::info!(user_id = %user.id, posts = posts.len(), "User created");

        Ok(UserWithPosts { user, posts })
    }

    async fn list(&self) -> PostsResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>("SELECT id, email, name FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgPostsRepository {
    async fn create(&self, new_post: &NewPost) -> PostsResult<Post> {
        // Resolving the author and inserting is one statement: no row
        // is written when the email is unknown.
        let row = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            INSERT INTO posts (title, content, author_id)
            SELECT $1, $2, users.id FROM users WHERE users.email = $3
            RETURNING {}
            "#,
            POST_COLUMNS
        ))
        .bind(new_post.title.as_str())
        .bind(new_post.content.as_deref())
        .bind(new_post.author_email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => Ok(r.into_post()),
            None => {
                tracing::warn!(author_email = %new_post.author_email, "Post author not found");
                Err(PostsError::AuthorNotFound(new_post.author_email.to_string()))
            }
        }
    }

    async fn find_by_id(&self, post_id: PostId) -> PostsResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {} FROM posts WHERE id = $1",
            POST_COLUMNS
        ))
        .bind(post_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn increment_views(&self, post_id: PostId) -> PostsResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            UPDATE posts
            SET view_count = view_count + 1, updated_at = now()
            WHERE id = $1
            RETURNING {}
            "#,
            POST_COLUMNS
        ))
        .bind(post_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn toggle_published(&self, post_id: PostId) -> PostsResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            UPDATE posts
            SET published = NOT published, updated_at = now()
            WHERE id = $1
            RETURNING {}
            "#,
            POST_COLUMNS
        ))
        .bind(post_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn delete(&self, post_id: PostId) -> PostsResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "DELETE FROM posts WHERE id = $1 RETURNING {}",
            POST_COLUMNS
        ))
        .bind(post_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn find_drafts_by_author(&self, author_id: UserId) -> PostsResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {} FROM posts WHERE author_id = $1 AND published = FALSE ORDER BY id",
            POST_COLUMNS
        ))
        .bind(author_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn feed(&self, query: &FeedQuery) -> PostsResult<Vec<PostWithAuthor>> {
        let rows = build_feed_query(query)
            .build_query_as::<FeedRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(FeedRow::into_post_with_author).collect())
    }
}

/// Published posts joined with their authors.
///
/// `strpos` keeps the search a literal, case-sensitive substring match
/// (no LIKE wildcards to escape).
fn build_feed_query(query: &FeedQuery) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new(
        r#"
        SELECT
            p.id, p.created_at, p.updated_at, p.title, p.content,
            p.published, p.view_count, p.author_id,
            u.email AS author_email, u.name AS author_name
        FROM posts p
        JOIN users u ON u.id = p.author_id
        WHERE p.published = TRUE
        "#,
    );

    if let Some(search) = &query.search {
        builder
            .push(" AND (strpos(p.title, ")
            .push_bind(search.as_str())
            .push(") > 0 OR strpos(COALESCE(p.content, ''), ")
            .push_bind(search.as_str())
            .push(") > 0)");
    }

    let order = query.order.as_sql();
    builder.push(format!(" ORDER BY p.updated_at {order}, p.id {order}"));

    if let Some(take) = query.take {
        builder.push(" LIMIT ").push_bind(take);
    }
    if let Some(skip) = query.skip {
        builder.push(" OFFSET ").push_bind(skip);
    }

    builder
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    name: Option<String>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: UserId::from_db(self.id),
            email: Email::from_db(self.email),
            name: self.name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    title: String,
    content: Option<String>,
    published: bool,
    view_count: i64,
    author_id: i64,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: PostId::from_db(self.id),
            created_at: self.created_at,
            updated_at: self.updated_at,
            title: self.title,
            content: self.content,
            published: self.published,
            view_count: self.view_count,
            author_id: UserId::from_db(self.author_id),
        }
    }
}

#[derive(sqlx::FromRow)]
struct FeedRow {
    #[sqlx(flatten)]
    post: PostRow,
    author_email: String,
    author_name: Option<String>,
}

impl FeedRow {
    fn into_post_with_author(self) -> PostWithAuthor {
        let author = User {
            id: UserId::from_db(self.post.author_id),
            email: Email::from_db(self.author_email),
            name: self.author_name,
        };
        PostWithAuthor {
            post: self.post.into_post(),
            author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_query_sql_without_filters() {
        let query = FeedQuery::default();
        let builder = build_feed_query(&query);
        let sql = builder.sql();

        assert!(sql.contains("WHERE p.published = TRUE"));
        assert!(sql.contains("ORDER BY p.updated_at DESC, p.id DESC"));
        assert!(!sql.contains("strpos"));
        assert!(!sql.contains("LIMIT"));
        assert!(!sql.contains("OFFSET"));
    }

    #[test]
    fn test_feed_query_sql_with_filters() {
        let query = FeedQuery::from_raw(Some("rust"), Some("5"), Some("10"), Some("asc"));
        let builder = build_feed_query(&query);
        let sql = builder.sql();

        assert!(sql.contains("strpos(p.title, $1) > 0"));
        assert!(sql.contains("strpos(COALESCE(p.content, ''), $2) > 0"));
        assert!(sql.contains("ORDER BY p.updated_at ASC, p.id ASC"));
        assert!(sql.contains("LIMIT $3"));
        assert!(sql.contains("OFFSET $4"));
    }
}
