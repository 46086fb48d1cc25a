//! PostgreSQL-backed `PostRepository` implementation using Diesel ORM.
//!
//! Comment links are maintained with single-statement `array_append` and
//! `array_remove` updates so concurrent comment writers never overwrite each
//! other's ids.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::Uuid as SqlUuid;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PostRepository, PostRepositoryError};
use crate::domain::{CommentId, Post, PostDraft, PostId, SearchQuery};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewPostRow, PostFieldsUpdate, PostRow};
use super::pool::{DbPool, PoolError};
use super::schema::posts;

const LINK_COMMENT_SQL: &str =
    "UPDATE posts SET comment_ids = array_append(comment_ids, $2) WHERE id = $1";
const UNLINK_COMMENT_SQL: &str =
    "UPDATE posts SET comment_ids = array_remove(comment_ids, $2) WHERE id = $1";

/// Diesel-backed post repository.
#[derive(Clone)]
pub struct DieselPostRepository {
    pool: DbPool,
}

impl DieselPostRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn run_link_update(
        &self,
        sql: &'static str,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<bool, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = sql_query(sql)
            .bind::<SqlUuid, _>(*post_id.as_uuid())
            .bind::<SqlUuid, _>(*comment_id.as_uuid())
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(updated > 0)
    }
}

fn map_pool_error(error: PoolError) -> PostRepositoryError {
    map_basic_pool_error(error, PostRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> PostRepositoryError {
    map_basic_diesel_error(
        error,
        PostRepositoryError::query,
        PostRepositoryError::connection,
    )
}

/// Build an `ILIKE` pattern matching `needle` literally anywhere.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl PostRepository for DieselPostRepository {
    async fn list(&self) -> Result<Vec<Post>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PostRow> = posts::table
            .order((posts::created_at.asc(), posts::id.asc()))
            .select(PostRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn find(&self, id: PostId) -> Result<Option<Post>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = posts::table
            .find(id.as_uuid())
            .select(PostRow::as_select())
            .first::<PostRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Post::from))
    }

    async fn insert(&self, post: &Post) -> Result<(), PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(posts::table)
            .values(&NewPostRow::from(post))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update_fields(
        &self,
        id: PostId,
        draft: &PostDraft,
    ) -> Result<bool, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(posts::table.find(id.as_uuid()))
            .set(&PostFieldsUpdate::from(draft))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(updated > 0)
    }

    async fn delete(&self, id: PostId) -> Result<bool, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(posts::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Post>, PostRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let pattern = contains_pattern(query.as_str());

        let rows: Vec<PostRow> = posts::table
            .filter(
                posts::title
                    .ilike(&pattern)
                    .or(posts::content.ilike(&pattern))
                    .or(posts::category.ilike(&pattern)),
            )
            .order((posts::created_at.asc(), posts::id.asc()))
            .select(PostRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn link_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<bool, PostRepositoryError> {
        self.run_link_update(LINK_COMMENT_SQL, post_id, comment_id)
            .await
    }

    async fn unlink_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<bool, PostRepositoryError> {
        self.run_link_update(UNLINK_COMMENT_SQL, post_id, comment_id)
            .await
    }
}
