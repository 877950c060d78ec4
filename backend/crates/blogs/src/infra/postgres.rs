//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::{Blog, BlogDraft};
use crate::domain::repository::BlogRepository;
use crate::domain::value_objects::BlogId;
use crate::error::BlogsResult;

#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl BlogRepository for PgBlogRepository {
    async fn list(&self) -> BlogsResult<Vec<Blog>> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, title, content, created_at, updated_at
            FROM blogs
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BlogRow::into_blog).collect())
    }

    async fn find_by_id(&self, blog_id: BlogId) -> BlogsResult<Option<Blog>> {
        let row = sqlx::query_as::<_, BlogRow>(
            "SELECT id, title, content, created_at, updated_at FROM blogs WHERE id = $1",
        )
        .bind(blog_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BlogRow::into_blog))
    }

    async fn create(&self, draft: &BlogDraft) -> BlogsResult<Blog> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            INSERT INTO blogs (title, content)
            VALUES ($1, $2)
            RETURNING id, title, content, created_at, updated_at
            "#,
        )
        .bind(draft.title.as_str())
        .bind(draft.content.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_blog())
    }

    async fn update(&self, blog_id: BlogId, draft: &BlogDraft) -> BlogsResult<Option<Blog>> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            UPDATE blogs
            SET title = $2, content = $3, updated_at = now()
            WHERE id = $1
            RETURNING id, title, content, created_at, updated_at
            "#,
        )
        .bind(blog_id.value())
        .bind(draft.title.as_str())
        .bind(draft.content.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BlogRow::into_blog))
    }

    async fn delete(&self, blog_id: BlogId) -> BlogsResult<Option<Blog>> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            DELETE FROM blogs
            WHERE id = $1
            RETURNING id, title, content, created_at, updated_at
            "#,
        )
        .bind(blog_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BlogRow::into_blog))
    }
}

#[derive(sqlx::FromRow)]
struct BlogRow {
    id: i64,
    title: String,
    content: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BlogRow {
    fn into_blog(self) -> Blog {
        Blog {
            id: BlogId::from_db(self.id),
            title: self.title,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
