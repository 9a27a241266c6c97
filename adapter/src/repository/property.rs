use super::check::{ensure_category_active, ensure_host_exists};
use crate::database::{
    map_write_error,
    model::property::{NightRangeRow, PropertyRow, PROPERTY_COLUMNS, PROPERTY_FROM},
    update::UpdateBuilder,
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{PropertyId, UserId},
    list::ListOptions,
    property::{
        ensure_night_range,
        event::{CreateProperty, UpdateProperty},
        Property, PropertyListFilter,
    },
};
use kernel::repository::property::PropertyRepository;
use shared::error::{AppError, AppResult};
use sqlx::{PgConnection, Postgres, QueryBuilder};

const TITLE_TAKEN: &str = "Property with this title already exists for this host";

#[derive(new)]
pub struct PropertyRepositoryImpl {
    db: ConnectionPool,
}

impl PropertyRepositoryImpl {
    async fn fetch(conn: &mut PgConnection, property_id: PropertyId) -> AppResult<Option<Property>> {
        sqlx::query_as::<_, PropertyRow>(&format!(
            "SELECT {PROPERTY_COLUMNS} {PROPERTY_FROM} WHERE p.property_id = $1"
        ))
        .bind(property_id)
        .fetch_optional(conn)
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Property::try_from)
        .transpose()
    }

    async fn ensure_title_free(
        conn: &mut PgConnection,
        host_id: UserId,
        title: &str,
        except: Option<PropertyId>,
    ) -> AppResult<()> {
        let taken = sqlx::query_scalar::<_, bool>(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM properties
                    WHERE host_id = $1 AND title = $2 AND property_id IS DISTINCT FROM $3
                )
            "#,
        )
        .bind(host_id)
        .bind(title)
        .bind(except)
        .fetch_one(conn)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if taken {
            return Err(AppError::Conflict(TITLE_TAKEN.into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PropertyRepository for PropertyRepositoryImpl {
    async fn create(&self, event: CreateProperty) -> AppResult<Property> {
        let mut tx = self.db.begin().await?;

        ensure_host_exists(&mut tx, event.host_id).await?;
        ensure_category_active(&mut tx, event.category_id).await?;
        Self::ensure_title_free(&mut tx, event.host_id, &event.title, None).await?;

        let property_id = sqlx::query_scalar::<_, PropertyId>(
            r#"
                INSERT INTO properties
                (host_id, category_id, title, description, property_type,
                 max_guests, bedrooms, beds, bathrooms, price_per_night,
                 cleaning_fee, service_fee_percentage, minimum_nights,
                 maximum_nights, check_in_time, check_out_time, instant_book, is_active)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                        $11, $12, $13, $14, $15, $16, $17, $18)
                RETURNING property_id
            "#,
        )
        .bind(event.host_id)
        .bind(event.category_id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.property_type.as_ref())
        .bind(event.max_guests)
        .bind(event.bedrooms)
        .bind(event.beds)
        .bind(event.bathrooms)
        .bind(event.price_per_night)
        .bind(event.cleaning_fee)
        .bind(event.service_fee_percentage)
        .bind(event.minimum_nights)
        .bind(event.maximum_nights)
        .bind(event.check_in_time)
        .bind(event.check_out_time)
        .bind(event.instant_book)
        .bind(event.is_active)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, TITLE_TAKEN))?;

        let property = Self::fetch(&mut tx, property_id).await?.ok_or_else(|| {
            AppError::NoRowsAffectedError("No property record has been created".into())
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        tracing::info!(property.id = %property_id, host.id = %property.host_id, "property created");
        Ok(property)
    }

    async fn find_all(
        &self,
        filter: PropertyListFilter,
        options: ListOptions,
    ) -> AppResult<Vec<Property>> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {PROPERTY_COLUMNS} {PROPERTY_FROM} WHERE p.is_active = TRUE"
        ));
        if let Some(min_price) = filter.min_price {
            query.push(" AND p.price_per_night >= ").push_bind(min_price);
        }
        if let Some(max_price) = filter.max_price {
            query.push(" AND p.price_per_night <= ").push_bind(max_price);
        }
        if let Some(property_type) = filter.property_type {
            query
                .push(" AND p.property_type = ")
                .push_bind(property_type.to_string());
        }
        if let Some(category_id) = filter.category_id {
            query.push(" AND p.category_id = ").push_bind(category_id);
        }
        query
            .push(" ORDER BY p.property_id LIMIT ")
            .push_bind(options.limit)
            .push(" OFFSET ")
            .push_bind(options.skip);

        query
            .build_query_as::<PropertyRow>()
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?
            .into_iter()
            .map(Property::try_from)
            .collect()
    }

    async fn find_by_id(&self, property_id: PropertyId) -> AppResult<Option<Property>> {
        let mut conn = self
            .db
            .inner_ref()
            .acquire()
            .await
            .map_err(AppError::SpecificOperationError)?;
        Self::fetch(&mut conn, property_id).await
    }

    async fn update(&self, event: UpdateProperty) -> AppResult<Property> {
        let mut tx = self.db.begin().await?;

        let current = Self::fetch(&mut tx, event.property_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Property not found".into()))?;

        if let Some(host_id) = event.host_id {
            ensure_host_exists(&mut tx, host_id).await?;
        }
        if let Some(category_id) = event.category_id {
            ensure_category_active(&mut tx, category_id).await?;
        }
        if event.host_id.is_some() || event.title.is_some() {
            let host_id = event.host_id.unwrap_or(current.host_id);
            let title = event.title.as_deref().unwrap_or(&current.title);
            Self::ensure_title_free(&mut tx, host_id, title, Some(event.property_id)).await?;
        }
        if event.touches_night_range() {
            // Lock the row so the merged range is checked against what will be written.
            let stored = sqlx::query_as::<_, NightRangeRow>(
                "SELECT minimum_nights, maximum_nights FROM properties WHERE property_id = $1 FOR UPDATE",
            )
            .bind(event.property_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
            let (minimum, maximum) =
                event.merged_night_range(stored.minimum_nights, stored.maximum_nights);
            ensure_night_range(minimum, maximum)?;
        }

        let UpdateProperty {
            property_id,
            host_id,
            category_id,
            title,
            description,
            property_type,
            max_guests,
            bedrooms,
            beds,
            bathrooms,
            price_per_night,
            cleaning_fee,
            service_fee_percentage,
            minimum_nights,
            maximum_nights,
            check_in_time,
            check_out_time,
            instant_book,
            is_active,
        } = event;

        let mut builder = UpdateBuilder::new("properties");
        builder
            .set("host_id", host_id)
            .set("category_id", category_id)
            .set("title", title)
            .set("description", description)
            .set("property_type", property_type.map(|t| t.to_string()))
            .set("max_guests", max_guests)
            .set("bedrooms", bedrooms)
            .set("beds", beds)
            .set("bathrooms", bathrooms)
            .set("price_per_night", price_per_night)
            .set("cleaning_fee", cleaning_fee)
            .set("service_fee_percentage", service_fee_percentage)
            .set("minimum_nights", minimum_nights)
            .set("maximum_nights", maximum_nights)
            .set("check_in_time", check_in_time)
            .set("check_out_time", check_out_time)
            .set("instant_book", instant_book)
            .set("is_active", is_active);
        if builder.is_empty() {
            return Err(AppError::NoFieldsToUpdate);
        }

        builder
            .finish("property_id", property_id)
            .build()
            .execute(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, TITLE_TAKEN))?;

        let property = Self::fetch(&mut tx, property_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Property not found".into()))?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        tracing::debug!(property.id = %property_id, "property updated");
        Ok(property)
    }

    async fn delete(&self, property_id: PropertyId) -> AppResult<()> {
        let res = sqlx::query("UPDATE properties SET is_active = FALSE WHERE property_id = $1")
            .bind(property_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Property not found".into()));
        }
        tracing::info!(property.id = %property_id, "property deactivated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use kernel::model::{id::CategoryId, property::PropertyType};
    use rust_decimal::Decimal;

    async fn seed_host_and_category(pool: &sqlx::PgPool) -> anyhow::Result<(UserId, CategoryId)> {
        let host_id = sqlx::query_scalar::<_, UserId>(
            r#"
                INSERT INTO users (email, password_hash, first_name, last_name, is_host)
                VALUES ('host@example.com', 'x', 'Yui', 'Mori', TRUE)
                RETURNING user_id
            "#,
        )
        .fetch_one(pool)
        .await?;
        let category_id = sqlx::query_scalar::<_, CategoryId>(
            "INSERT INTO property_categories (category_name) VALUES ('Cabin') RETURNING category_id",
        )
        .fetch_one(pool)
        .await?;
        Ok((host_id, category_id))
    }

    fn cabin(host_id: UserId, category_id: CategoryId) -> CreateProperty {
        CreateProperty {
            host_id,
            category_id,
            title: "Lakeside cabin".into(),
            description: "Quiet".into(),
            property_type: PropertyType::EntirePlace,
            max_guests: 4,
            bedrooms: 2,
            beds: 2,
            bathrooms: Decimal::new(15, 1),
            price_per_night: Decimal::new(12000, 2),
            cleaning_fee: Decimal::ZERO,
            service_fee_percentage: Decimal::new(300, 2),
            minimum_nights: 5,
            maximum_nights: 30,
            check_in_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            check_out_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            instant_book: false,
            is_active: true,
        }
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn create_joins_host_and_category(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (host_id, category_id) = seed_host_and_category(&pool).await?;
        let repo = PropertyRepositoryImpl::new(ConnectionPool::new(pool));

        let property = repo.create(cabin(host_id, category_id)).await?;
        assert_eq!(property.host.first_name, "Yui");
        assert_eq!(property.category_name, "Cabin");

        let dup = repo.create(cabin(host_id, category_id)).await;
        assert!(matches!(dup, Err(AppError::Conflict(_))));
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn one_sided_night_update_is_checked_against_stored_value(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let (host_id, category_id) = seed_host_and_category(&pool).await?;
        let repo = PropertyRepositoryImpl::new(ConnectionPool::new(pool));
        let property = repo.create(cabin(host_id, category_id)).await?;

        let res = repo
            .update(UpdateProperty {
                property_id: property.property_id,
                maximum_nights: Some(2),
                ..Default::default()
            })
            .await;
        assert!(matches!(res, Err(AppError::InvalidInput(_))));
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn soft_deleted_property_leaves_the_listing(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (host_id, category_id) = seed_host_and_category(&pool).await?;
        let repo = PropertyRepositoryImpl::new(ConnectionPool::new(pool));
        let property = repo.create(cabin(host_id, category_id)).await?;

        repo.delete(property.property_id).await?;

        let listed = repo
            .find_all(PropertyListFilter::default(), ListOptions::default())
            .await?;
        assert!(listed.is_empty());
        let stored = repo.find_by_id(property.property_id).await?.unwrap();
        assert!(!stored.is_active);
        Ok(())
    }
}
