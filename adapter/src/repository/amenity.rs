use crate::database::{
    map_write_error, model::amenity::AmenityRow, update::UpdateBuilder, ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    amenity::{
        event::{CreateAmenity, UpdateAmenity},
        Amenity,
    },
    id::AmenityId,
    list::ListOptions,
};
use kernel::repository::amenity::AmenityRepository;
use shared::error::{AppError, AppResult};
use sqlx::PgConnection;

const NAME_TAKEN: &str = "Amenity with this name already exists";

const SELECT_AMENITY: &str = r#"
    SELECT amenity_id, amenity_name, amenity_category, icon_url, description,
           is_active, created_at
    FROM amenities
"#;

#[derive(new)]
pub struct AmenityRepositoryImpl {
    db: ConnectionPool,
}

impl AmenityRepositoryImpl {
    async fn fetch(conn: &mut PgConnection, amenity_id: AmenityId) -> AppResult<Option<Amenity>> {
        let row = sqlx::query_as::<_, AmenityRow>(&format!("{SELECT_AMENITY} WHERE amenity_id = $1"))
            .bind(amenity_id)
            .fetch_optional(conn)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(Amenity::from))
    }

    async fn ensure_name_free(
        conn: &mut PgConnection,
        amenity_name: &str,
        except: Option<AmenityId>,
    ) -> AppResult<()> {
        let taken = sqlx::query_scalar::<_, bool>(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM amenities
                    WHERE amenity_name = $1 AND amenity_id IS DISTINCT FROM $2
                )
            "#,
        )
        .bind(amenity_name)
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
impl AmenityRepository for AmenityRepositoryImpl {
    async fn create(&self, event: CreateAmenity) -> AppResult<Amenity> {
        let mut tx = self.db.begin().await?;

        Self::ensure_name_free(&mut tx, &event.amenity_name, None).await?;

        let amenity_id = sqlx::query_scalar::<_, AmenityId>(
            r#"
                INSERT INTO amenities
                (amenity_name, amenity_category, icon_url, description, is_active)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING amenity_id
            "#,
        )
        .bind(&event.amenity_name)
        .bind(&event.amenity_category)
        .bind(&event.icon_url)
        .bind(&event.description)
        .bind(event.is_active)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, NAME_TAKEN))?;

        let amenity = Self::fetch(&mut tx, amenity_id).await?.ok_or_else(|| {
            AppError::NoRowsAffectedError("No amenity record has been created".into())
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        tracing::info!(amenity.id = %amenity_id, "amenity created");
        Ok(amenity)
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Amenity>> {
        let rows = sqlx::query_as::<_, AmenityRow>(&format!(
            "{SELECT_AMENITY} WHERE is_active = TRUE ORDER BY amenity_id LIMIT $1 OFFSET $2"
        ))
        .bind(options.limit)
        .bind(options.skip)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Amenity::from).collect())
    }

    async fn find_by_id(&self, amenity_id: AmenityId) -> AppResult<Option<Amenity>> {
        let mut conn = self
            .db
            .inner_ref()
            .acquire()
            .await
            .map_err(AppError::SpecificOperationError)?;
        Self::fetch(&mut conn, amenity_id).await
    }

    async fn update(&self, event: UpdateAmenity) -> AppResult<Amenity> {
        let mut tx = self.db.begin().await?;

        if Self::fetch(&mut tx, event.amenity_id).await?.is_none() {
            return Err(AppError::EntityNotFound("Amenity not found".into()));
        }
        if let Some(name) = &event.amenity_name {
            Self::ensure_name_free(&mut tx, name, Some(event.amenity_id)).await?;
        }

        let UpdateAmenity {
            amenity_id,
            amenity_name,
            amenity_category,
            icon_url,
            description,
            is_active,
        } = event;

        let mut builder = UpdateBuilder::new("amenities");
        builder
            .set("amenity_name", amenity_name)
            .set("amenity_category", amenity_category)
            .set("icon_url", icon_url)
            .set("description", description)
            .set("is_active", is_active);
        if builder.is_empty() {
            return Err(AppError::NoFieldsToUpdate);
        }

        builder
            .finish("amenity_id", amenity_id)
            .build()
            .execute(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, NAME_TAKEN))?;

        let amenity = Self::fetch(&mut tx, amenity_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Amenity not found".into()))?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(amenity)
    }

    // soft delete
    async fn delete(&self, amenity_id: AmenityId) -> AppResult<()> {
        let res = sqlx::query("UPDATE amenities SET is_active = FALSE WHERE amenity_id = $1")
            .bind(amenity_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Amenity not found".into()));
        }
        tracing::info!(amenity.id = %amenity_id, "amenity deactivated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wifi() -> CreateAmenity {
        CreateAmenity {
            amenity_name: "Wi-Fi".into(),
            amenity_category: "basics".into(),
            icon_url: None,
            description: None,
            is_active: true,
        }
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn duplicate_name_is_a_conflict(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = AmenityRepositoryImpl::new(ConnectionPool::new(pool));
        repo.create(wifi()).await?;
        assert!(matches!(repo.create(wifi()).await, Err(AppError::Conflict(_))));
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn deactivated_amenity_is_hidden_but_kept(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = AmenityRepositoryImpl::new(ConnectionPool::new(pool));
        let amenity = repo.create(wifi()).await?;

        repo.delete(amenity.amenity_id).await?;

        assert!(repo.find_all(ListOptions::default()).await?.is_empty());
        let stored = repo.find_by_id(amenity.amenity_id).await?;
        assert!(stored.is_some_and(|a| !a.is_active));
        Ok(())
    }
}
