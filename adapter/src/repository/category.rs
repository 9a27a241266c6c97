use crate::database::{
    map_write_error, model::category::CategoryRow, update::UpdateBuilder, ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    category::{
        event::{CreateCategory, UpdateCategory},
        PropertyCategory,
    },
    id::CategoryId,
    list::ListOptions,
};
use kernel::repository::category::CategoryRepository;
use shared::error::{AppError, AppResult};
use sqlx::PgConnection;

const NAME_TAKEN: &str = "Category name already exists";

const SELECT_CATEGORY: &str = r#"
    SELECT category_id, category_name, description, icon_url, is_active, created_at
    FROM property_categories
"#;

#[derive(new)]
pub struct CategoryRepositoryImpl {
    db: ConnectionPool,
}

impl CategoryRepositoryImpl {
    async fn fetch(
        conn: &mut PgConnection,
        category_id: CategoryId,
    ) -> AppResult<Option<PropertyCategory>> {
        let row =
            sqlx::query_as::<_, CategoryRow>(&format!("{SELECT_CATEGORY} WHERE category_id = $1"))
                .bind(category_id)
                .fetch_optional(conn)
                .await
                .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(PropertyCategory::from))
    }

    async fn ensure_name_free(
        conn: &mut PgConnection,
        category_name: &str,
        except: Option<CategoryId>,
    ) -> AppResult<()> {
        let taken = sqlx::query_scalar::<_, bool>(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM property_categories
                    WHERE category_name = $1 AND category_id IS DISTINCT FROM $2
                )
            "#,
        )
        .bind(category_name)
        .bind(except)
        .fetch_one(conn)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if taken {
            return Err(AppError::Conflict(NAME_TAKEN.into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryImpl {
    async fn create(&self, event: CreateCategory) -> AppResult<PropertyCategory> {
        let mut tx = self.db.begin().await?;

        Self::ensure_name_free(&mut tx, &event.category_name, None).await?;

        let category_id = sqlx::query_scalar::<_, CategoryId>(
            r#"
                INSERT INTO property_categories (category_name, description, icon_url, is_active)
                VALUES ($1, $2, $3, $4)
                RETURNING category_id
            "#,
        )
        .bind(&event.category_name)
        .bind(&event.description)
        .bind(&event.icon_url)
        .bind(event.is_active)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, NAME_TAKEN))?;

        let category = Self::fetch(&mut tx, category_id).await?.ok_or_else(|| {
            AppError::NoRowsAffectedError("No category record has been created".into())
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        tracing::info!(category.id = %category_id, "property category created");
        Ok(category)
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<PropertyCategory>> {
        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            "{SELECT_CATEGORY} ORDER BY category_id LIMIT $1 OFFSET $2"
        ))
        .bind(options.limit)
        .bind(options.skip)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(PropertyCategory::from).collect())
    }

    async fn find_by_id(&self, category_id: CategoryId) -> AppResult<Option<PropertyCategory>> {
        let mut conn = self
            .db
            .inner_ref()
            .acquire()
            .await
            .map_err(AppError::SpecificOperationError)?;
        Self::fetch(&mut conn, category_id).await
    }

    async fn update(&self, event: UpdateCategory) -> AppResult<PropertyCategory> {
        let mut tx = self.db.begin().await?;

        if Self::fetch(&mut tx, event.category_id).await?.is_none() {
            return Err(AppError::EntityNotFound("Category not found".into()));
        }
        if let Some(name) = &event.category_name {
            Self::ensure_name_free(&mut tx, name, Some(event.category_id)).await?;
        }

        let UpdateCategory {
            category_id,
            category_name,
            description,
            icon_url,
            is_active,
        } = event;

        let mut builder = UpdateBuilder::new("property_categories");
        builder
            .set("category_name", category_name)
            .set("description", description)
            .set("icon_url", icon_url)
            .set("is_active", is_active);
        if builder.is_empty() {
            return Err(AppError::NoFieldsToUpdate);
        }

        builder
            .finish("category_id", category_id)
            .build()
            .execute(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, NAME_TAKEN))?;

        let category = Self::fetch(&mut tx, category_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Category not found".into()))?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(category)
    }

    async fn delete(&self, category_id: CategoryId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM property_categories WHERE category_id = $1")
            .bind(category_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(|e| {
                // properties keep a hard reference to their category
                if e
                    .as_database_error()
                    .is_some_and(|db| db.is_foreign_key_violation())
                {
                    AppError::Conflict("Category is still used by properties".into())
                } else {
                    AppError::SpecificOperationError(e)
                }
            })?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Category not found".into()));
        }
        tracing::info!(category.id = %category_id, "property category deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> CreateCategory {
        CreateCategory {
            category_name: name.into(),
            description: None,
            icon_url: None,
            is_active: true,
        }
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn duplicate_name_is_a_conflict(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = CategoryRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(category("Treehouse")).await?;
        let res = repo.create(category("Treehouse")).await;
        assert!(matches!(res, Err(AppError::Conflict(_))));
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn renaming_onto_a_taken_name_is_a_conflict(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = CategoryRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(category("Cabin")).await?;
        let barn = repo.create(category("Barn")).await?;

        let res = repo
            .update(UpdateCategory {
                category_id: barn.category_id,
                category_name: Some("Cabin".into()),
                ..Default::default()
            })
            .await;
        assert!(matches!(res, Err(AppError::Conflict(_))));

        // keeping its own name is not a clash
        let kept = repo
            .update(UpdateCategory {
                category_id: barn.category_id,
                category_name: Some("Barn".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(kept.category_name, "Barn");
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn category_in_use_cannot_be_deleted(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = CategoryRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let lodge = repo.create(category("Lodge")).await?;

        sqlx::query(
            r#"
                WITH host AS (
                    INSERT INTO users (email, password_hash, first_name, last_name, is_host)
                    VALUES ('lodge@example.com', 'x', 'Kai', 'Mori', TRUE)
                    RETURNING user_id
                )
                INSERT INTO properties (host_id, category_id, title, description, property_type, price_per_night)
                SELECT user_id, $1, 'Lodge', 'Warm', 'entire_place', 90 FROM host
            "#,
        )
        .bind(lodge.category_id)
        .execute(&pool)
        .await?;

        let res = repo.delete(lodge.category_id).await;
        assert!(matches!(res, Err(AppError::Conflict(_))));
        Ok(())
    }
}
