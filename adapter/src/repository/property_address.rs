use super::check::ensure_property_exists;
use crate::database::{
    model::property_address::PropertyAddressRow, update::UpdateBuilder, ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::PropertyAddressId,
    list::ListOptions,
    property_address::{
        event::{CreatePropertyAddress, UpdatePropertyAddress},
        PropertyAddress,
    },
};
use kernel::repository::property_address::PropertyAddressRepository;
use shared::error::{AppError, AppResult};
use sqlx::PgConnection;

const SELECT_ADDRESS: &str = r#"
    SELECT address_id, property_id, street_address, city, state_province,
           postal_code, country, neighborhood, latitude, longitude, created_at
    FROM property_addresses
"#;

#[derive(new)]
pub struct PropertyAddressRepositoryImpl {
    db: ConnectionPool,
}

impl PropertyAddressRepositoryImpl {
    async fn fetch(
        conn: &mut PgConnection,
        address_id: PropertyAddressId,
    ) -> AppResult<Option<PropertyAddress>> {
        let row = sqlx::query_as::<_, PropertyAddressRow>(&format!(
            "{SELECT_ADDRESS} WHERE address_id = $1"
        ))
        .bind(address_id)
        .fetch_optional(conn)
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(PropertyAddress::from))
    }
}

#[async_trait]
impl PropertyAddressRepository for PropertyAddressRepositoryImpl {
    async fn create(&self, event: CreatePropertyAddress) -> AppResult<PropertyAddress> {
        let mut tx = self.db.begin().await?;

        ensure_property_exists(&mut tx, event.property_id).await?;

        let address_id = sqlx::query_scalar::<_, PropertyAddressId>(
            r#"
                INSERT INTO property_addresses
                (property_id, street_address, city, state_province, postal_code,
                 country, neighborhood, latitude, longitude)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING address_id
            "#,
        )
        .bind(event.property_id)
        .bind(&event.street_address)
        .bind(&event.city)
        .bind(&event.state_province)
        .bind(&event.postal_code)
        .bind(&event.country)
        .bind(&event.neighborhood)
        .bind(event.latitude)
        .bind(event.longitude)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let address = Self::fetch(&mut tx, address_id).await?.ok_or_else(|| {
            AppError::NoRowsAffectedError("No property address record has been created".into())
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        tracing::info!(address.id = %address_id, property.id = %address.property_id, "property address created");
        Ok(address)
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<PropertyAddress>> {
        let rows = sqlx::query_as::<_, PropertyAddressRow>(&format!(
            "{SELECT_ADDRESS} ORDER BY address_id LIMIT $1 OFFSET $2"
        ))
        .bind(options.limit)
        .bind(options.skip)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(PropertyAddress::from).collect())
    }

    async fn find_by_id(
        &self,
        address_id: PropertyAddressId,
    ) -> AppResult<Option<PropertyAddress>> {
        let mut conn = self
            .db
            .inner_ref()
            .acquire()
            .await
            .map_err(AppError::SpecificOperationError)?;
        Self::fetch(&mut conn, address_id).await
    }

    async fn update(&self, event: UpdatePropertyAddress) -> AppResult<PropertyAddress> {
        let mut tx = self.db.begin().await?;

        if Self::fetch(&mut tx, event.address_id).await?.is_none() {
            return Err(AppError::EntityNotFound("Property address not found".into()));
        }
        if let Some(property_id) = event.property_id {
            ensure_property_exists(&mut tx, property_id).await?;
        }

        let UpdatePropertyAddress {
            address_id,
            property_id,
            street_address,
            city,
            state_province,
            postal_code,
            country,
            neighborhood,
            latitude,
            longitude,
        } = event;

        let mut builder = UpdateBuilder::new("property_addresses");
        builder
            .set("property_id", property_id)
            .set("street_address", street_address)
            .set("city", city)
            .set("state_province", state_province)
            .set("postal_code", postal_code)
            .set("country", country)
            .set("neighborhood", neighborhood)
            .set("latitude", latitude)
            .set("longitude", longitude);
        if builder.is_empty() {
            return Err(AppError::NoFieldsToUpdate);
        }

        builder
            .finish("address_id", address_id)
            .build()
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        let address = Self::fetch(&mut tx, address_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Property address not found".into()))?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(address)
    }

    async fn delete(&self, address_id: PropertyAddressId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM property_addresses WHERE address_id = $1")
            .bind(address_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Property address not found".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::id::PropertyId;
    use rust_decimal::Decimal;

    async fn seed_property(pool: &sqlx::PgPool, tag: &str) -> anyhow::Result<PropertyId> {
        let property_id = sqlx::query_scalar::<_, PropertyId>(
            r#"
                WITH host AS (
                    INSERT INTO users (email, password_hash, first_name, last_name, is_host)
                    VALUES ($1 || '@example.com', 'x', 'Rin', 'Ota', TRUE)
                    RETURNING user_id
                ), category AS (
                    INSERT INTO property_categories (category_name) VALUES ($1)
                    RETURNING category_id
                )
                INSERT INTO properties (host_id, category_id, title, description, property_type, price_per_night)
                SELECT host.user_id, category.category_id, $1, 'Cosy', 'private_room', 55
                FROM host, category
                RETURNING property_id
            "#,
        )
        .bind(tag)
        .fetch_one(pool)
        .await?;
        Ok(property_id)
    }

    fn address(property_id: PropertyId) -> CreatePropertyAddress {
        CreatePropertyAddress {
            property_id,
            street_address: "1-2-3 Jingumae".into(),
            city: "Tokyo".into(),
            state_province: None,
            postal_code: Some("150-0001".into()),
            country: "Japan".into(),
            neighborhood: Some("Harajuku".into()),
            latitude: Some(Decimal::new(3567, 2)),
            longitude: Some(Decimal::new(13970, 2)),
        }
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn unknown_property_is_not_found(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PropertyAddressRepositoryImpl::new(ConnectionPool::new(pool));
        let res = repo.create(address(PropertyId::new(404))).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn coordinates_keep_their_column_scale(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let property_id = seed_property(&pool, "harajuku").await?;
        let repo = PropertyAddressRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo.create(address(property_id)).await?;
        assert_eq!(created.latitude.map(|v| v.to_string()).as_deref(), Some("35.67000000"));
        assert_eq!(created.longitude.map(|v| v.to_string()).as_deref(), Some("139.70000000"));
        Ok(())
    }
}
