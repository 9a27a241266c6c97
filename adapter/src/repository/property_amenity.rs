use super::check::{ensure_amenity_active, ensure_property_exists};
use crate::database::{
    map_write_error, model::property_amenity::PropertyAmenityRow, ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{AmenityId, PropertyId},
    property_amenity::{
        event::{CreatePropertyAmenity, DeletePropertyAmenity, ReplacePropertyAmenity},
        PropertyAmenity,
    },
};
use kernel::repository::property_amenity::PropertyAmenityRepository;
use shared::error::{AppError, AppResult};
use sqlx::PgConnection;

const ALREADY_ASSOCIATED: &str = "Amenity already associated with this property";
const NOT_ASSOCIATED: &str = "Amenity is not associated with this property";

#[derive(new)]
pub struct PropertyAmenityRepositoryImpl {
    db: ConnectionPool,
}

impl PropertyAmenityRepositoryImpl {
    async fn is_associated(
        conn: &mut PgConnection,
        property_id: PropertyId,
        amenity_id: AmenityId,
    ) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM property_amenities
                    WHERE property_id = $1 AND amenity_id = $2
                )
            "#,
        )
        .bind(property_id)
        .bind(amenity_id)
        .fetch_one(conn)
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn insert_pair(
        conn: &mut PgConnection,
        property_id: PropertyId,
        amenity_id: AmenityId,
    ) -> AppResult<()> {
        sqlx::query("INSERT INTO property_amenities (property_id, amenity_id) VALUES ($1, $2)")
            .bind(property_id)
            .bind(amenity_id)
            .execute(conn)
            .await
            .map_err(|e| map_write_error(e, ALREADY_ASSOCIATED))?;
        Ok(())
    }

    async fn fetch_detail(
        conn: &mut PgConnection,
        property_id: PropertyId,
        amenity_id: AmenityId,
    ) -> AppResult<PropertyAmenity> {
        let row = sqlx::query_as::<_, PropertyAmenityRow>(
            r#"
                SELECT pa.property_id, pa.amenity_id, a.amenity_name, a.amenity_category, a.icon_url
                FROM property_amenities pa
                INNER JOIN amenities a ON a.amenity_id = pa.amenity_id
                WHERE pa.property_id = $1 AND pa.amenity_id = $2
            "#,
        )
        .bind(property_id)
        .bind(amenity_id)
        .fetch_optional(conn)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| {
            AppError::NoRowsAffectedError("No property amenity record has been written".into())
        })?;
        Ok(row.into())
    }
}

#[async_trait]
impl PropertyAmenityRepository for PropertyAmenityRepositoryImpl {
    async fn create(&self, event: CreatePropertyAmenity) -> AppResult<PropertyAmenity> {
        let mut tx = self.db.begin().await?;

        ensure_property_exists(&mut tx, event.property_id).await?;
        ensure_amenity_active(&mut tx, event.amenity_id).await?;
        if Self::is_associated(&mut tx, event.property_id, event.amenity_id).await? {
            return Err(AppError::Conflict(ALREADY_ASSOCIATED.into()));
        }

        Self::insert_pair(&mut tx, event.property_id, event.amenity_id).await?;
        let detail = Self::fetch_detail(&mut tx, event.property_id, event.amenity_id).await?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        tracing::info!(
            property.id = %event.property_id,
            amenity.id = %event.amenity_id,
            "amenity attached to property"
        );
        Ok(detail)
    }

    async fn find_by_property_id(
        &self,
        property_id: PropertyId,
    ) -> AppResult<Vec<PropertyAmenity>> {
        let mut conn = self
            .db
            .inner_ref()
            .acquire()
            .await
            .map_err(AppError::SpecificOperationError)?;

        ensure_property_exists(&mut conn, property_id).await?;

        let rows = sqlx::query_as::<_, PropertyAmenityRow>(
            r#"
                SELECT pa.property_id, pa.amenity_id, a.amenity_name, a.amenity_category, a.icon_url
                FROM property_amenities pa
                INNER JOIN amenities a ON a.amenity_id = pa.amenity_id
                WHERE pa.property_id = $1 AND a.is_active = TRUE
                ORDER BY pa.amenity_id
            "#,
        )
        .bind(property_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(PropertyAmenity::from).collect())
    }

    async fn replace(&self, event: ReplacePropertyAmenity) -> AppResult<PropertyAmenity> {
        let ReplacePropertyAmenity {
            property_id,
            old_amenity_id,
            new_amenity_id,
        } = event;
        let mut tx = self.db.begin().await?;

        ensure_property_exists(&mut tx, property_id).await?;
        ensure_amenity_active(&mut tx, old_amenity_id).await?;
        ensure_amenity_active(&mut tx, new_amenity_id).await?;
        if !Self::is_associated(&mut tx, property_id, old_amenity_id).await? {
            return Err(AppError::EntityNotFound(format!(
                "Amenity {old_amenity_id} is not associated with this property"
            )));
        }
        if Self::is_associated(&mut tx, property_id, new_amenity_id).await? {
            return Err(AppError::Conflict(format!(
                "Amenity {new_amenity_id} already associated with this property"
            )));
        }

        sqlx::query("DELETE FROM property_amenities WHERE property_id = $1 AND amenity_id = $2")
            .bind(property_id)
            .bind(old_amenity_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Self::insert_pair(&mut tx, property_id, new_amenity_id).await?;
        let detail = Self::fetch_detail(&mut tx, property_id, new_amenity_id).await?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        tracing::info!(
            property.id = %property_id,
            amenity.old = %old_amenity_id,
            amenity.new = %new_amenity_id,
            "property amenity replaced"
        );
        Ok(detail)
    }

    async fn delete(&self, event: DeletePropertyAmenity) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        ensure_property_exists(&mut tx, event.property_id).await?;
        ensure_amenity_active(&mut tx, event.amenity_id).await?;

        let res =
            sqlx::query("DELETE FROM property_amenities WHERE property_id = $1 AND amenity_id = $2")
                .bind(event.property_id)
                .bind(event.amenity_id)
                .execute(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(NOT_ASSOCIATED.into()));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed(pool: &sqlx::PgPool) -> anyhow::Result<(PropertyId, AmenityId, AmenityId)> {
        let property_id = sqlx::query_scalar::<_, PropertyId>(
            r#"
                WITH host AS (
                    INSERT INTO users (email, password_hash, first_name, last_name, is_host)
                    VALUES ('pa@example.com', 'x', 'Sora', 'Abe', TRUE)
                    RETURNING user_id
                ), category AS (
                    INSERT INTO property_categories (category_name) VALUES ('Loft')
                    RETURNING category_id
                )
                INSERT INTO properties (host_id, category_id, title, description, property_type, price_per_night)
                SELECT host.user_id, category.category_id, 'Loft', 'Bright', 'entire_place', 80
                FROM host, category
                RETURNING property_id
            "#,
        )
        .fetch_one(pool)
        .await?;
        let wifi = sqlx::query_scalar::<_, AmenityId>(
            "INSERT INTO amenities (amenity_name, amenity_category) VALUES ('Wifi', 'basics') RETURNING amenity_id",
        )
        .fetch_one(pool)
        .await?;
        let pool_amenity = sqlx::query_scalar::<_, AmenityId>(
            "INSERT INTO amenities (amenity_name, amenity_category) VALUES ('Pool', 'outdoor') RETURNING amenity_id",
        )
        .fetch_one(pool)
        .await?;
        Ok((property_id, wifi, pool_amenity))
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn replace_swaps_the_pair(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (property_id, wifi, outdoor_pool) = seed(&pool).await?;
        let repo = PropertyAmenityRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreatePropertyAmenity::new(property_id, wifi))
            .await?;
        let dup = repo.create(CreatePropertyAmenity::new(property_id, wifi)).await;
        assert!(matches!(dup, Err(AppError::Conflict(_))));

        let replaced = repo
            .replace(ReplacePropertyAmenity::new(property_id, wifi, outdoor_pool))
            .await?;
        assert_eq!(replaced.amenity_name, "Pool");

        let listed = repo.find_by_property_id(property_id).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].amenity_id, outdoor_pool);

        let again = repo
            .replace(ReplacePropertyAmenity::new(property_id, wifi, outdoor_pool))
            .await;
        assert!(matches!(again, Err(AppError::EntityNotFound(_))));

        let missing = repo
            .delete(DeletePropertyAmenity::new(property_id, wifi))
            .await;
        assert!(matches!(missing, Err(AppError::EntityNotFound(_))));
        Ok(())
    }
}
