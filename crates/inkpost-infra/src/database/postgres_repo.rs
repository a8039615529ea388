//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, SelectTwo};
use uuid::Uuid;

use inkpost_core::domain::{Category, PostFilter, PostWithCategory};
use inkpost_core::error::RepoError;
use inkpost_core::ports::{BaseRepository, CategoryRepository, PostRepository};

use super::entity::category::{self, Entity as CategoryEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, repo_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL category repository.
pub type PostgresCategoryRepository = PostgresBaseRepository<CategoryEntity>;

fn resolved((post, category): (post::Model, Option<category::Model>)) -> PostWithCategory {
    PostWithCategory::new(post.into(), category.map(Into::into))
}

/// Case-insensitive, wildcard-escaped substring match on title or content.
///
/// The pattern is folded with Unicode rules while `LOWER()` follows the
/// database collation, so non-ASCII matches need a UTF-8 aware locale.
fn search_condition(pattern: &str) -> Condition {
    let pattern = pattern.to_lowercase();
    let like = || LikeExpr::new(pattern.clone()).escape('\\');

    Condition::any()
        .add(Expr::expr(Func::lower(Expr::col((PostEntity, post::Column::Title)))).like(like()))
        .add(Expr::expr(Func::lower(Expr::col((PostEntity, post::Column::Content)))).like(like()))
}

/// Posts joined with their category, filtered and ordered newest first.
pub(crate) fn list_query(filter: &PostFilter) -> SelectTwo<PostEntity, CategoryEntity> {
    let mut query = PostEntity::find().find_also_related(CategoryEntity);

    if let Some(pattern) = filter.like_pattern() {
        query = query.filter(search_condition(&pattern));
    }
    if let Some(category_id) = filter.category_id() {
        query = query.filter(post::Column::CategoryId.eq(category_id));
    }

    query.order_by_desc(post::Column::CreatedAt)
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self, filter: &PostFilter) -> Result<Vec<PostWithCategory>, RepoError> {
        tracing::debug!(
            search = filter.search(),
            category_id = ?filter.category_id(),
            "Listing posts"
        );

        let rows = list_query(filter)
            .all(&self.db)
            .await
            .map_err(repo_err)?;

        Ok(rows.into_iter().map(resolved).collect())
    }

    async fn find_with_category(&self, id: Uuid) -> Result<Option<PostWithCategory>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .find_also_related(CategoryEntity)
            .one(&self.db)
            .await
            .map_err(repo_err)?;

        Ok(row.map(resolved))
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, RepoError> {
        let result = CategoryEntity::find()
            .all(&self.db)
            .await
            .map_err(repo_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn ensure(&self, name: &str) -> Result<Category, RepoError> {
        let existing = CategoryEntity::find()
            .filter(category::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(repo_err)?;

        if let Some(model) = existing {
            return Ok(model.into());
        }

        tracing::debug!(category = %name, "Creating category");
        BaseRepository::<Category, Uuid>::insert(self, Category::new(name)).await
    }
}
