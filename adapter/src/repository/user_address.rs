use super::check::ensure_user_exists;
use crate::database::{
    map_write_error, model::user_address::UserAddressRow, update::UpdateBuilder, ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{UserAddressId, UserId},
    list::ListOptions,
    user_address::{
        event::{CreateUserAddress, UpdateUserAddress},
        UserAddress,
    },
};
use kernel::repository::user_address::UserAddressRepository;
use shared::error::{AppError, AppResult};
use sqlx::PgConnection;

const SELECT_ADDRESS: &str = r#"
    SELECT address_id, user_id, address_type, street_address, city,
           state_province, postal_code, country, is_primary, created_at
    FROM user_addresses
"#;

const PRIMARY_TAKEN: &str = "User already has a primary address";

#[derive(new)]
pub struct UserAddressRepositoryImpl {
    db: ConnectionPool,
}

impl UserAddressRepositoryImpl {
    async fn fetch(
        conn: &mut PgConnection,
        address_id: UserAddressId,
    ) -> AppResult<Option<UserAddress>> {
        sqlx::query_as::<_, UserAddressRow>(&format!("{SELECT_ADDRESS} WHERE address_id = $1"))
            .bind(address_id)
            .fetch_optional(conn)
            .await
            .map_err(AppError::SpecificOperationError)?
            .map(UserAddress::try_from)
            .transpose()
    }

    // At most one primary address per user: clear the flag on every other row first.
    async fn clear_primary(
        conn: &mut PgConnection,
        user_id: UserId,
        keep: Option<UserAddressId>,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
                UPDATE user_addresses SET is_primary = FALSE
                WHERE user_id = $1 AND is_primary AND address_id IS DISTINCT FROM $2
            "#,
        )
        .bind(user_id)
        .bind(keep)
        .execute(conn)
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}

#[async_trait]
impl UserAddressRepository for UserAddressRepositoryImpl {
    async fn create(&self, event: CreateUserAddress) -> AppResult<UserAddress> {
        let mut tx = self.db.begin().await?;

        ensure_user_exists(&mut tx, event.user_id).await?;
        if event.is_primary {
            Self::clear_primary(&mut tx, event.user_id, None).await?;
        }

        let address_id = sqlx::query_scalar::<_, UserAddressId>(
            r#"
                INSERT INTO user_addresses
                (user_id, address_type, street_address, city, state_province,
                 postal_code, country, is_primary)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING address_id
            "#,
        )
        .bind(event.user_id)
        .bind(event.address_type.as_ref())
        .bind(&event.street_address)
        .bind(&event.city)
        .bind(&event.state_province)
        .bind(&event.postal_code)
        .bind(&event.country)
        .bind(event.is_primary)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, PRIMARY_TAKEN))?;

        let address = Self::fetch(&mut tx, address_id).await?.ok_or_else(|| {
            AppError::NoRowsAffectedError("No address record has been created".into())
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        tracing::info!(address.id = %address_id, user.id = %address.user_id, "user address created");
        Ok(address)
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<UserAddress>> {
        sqlx::query_as::<_, UserAddressRow>(&format!(
            "{SELECT_ADDRESS} ORDER BY address_id LIMIT $1 OFFSET $2"
        ))
        .bind(options.limit)
        .bind(options.skip)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(UserAddress::try_from)
        .collect()
    }

    async fn find_by_id(&self, address_id: UserAddressId) -> AppResult<Option<UserAddress>> {
        let mut conn = self
            .db
            .inner_ref()
            .acquire()
            .await
            .map_err(AppError::SpecificOperationError)?;
        Self::fetch(&mut conn, address_id).await
    }

    async fn update(&self, event: UpdateUserAddress) -> AppResult<UserAddress> {
        let mut tx = self.db.begin().await?;

        let current = Self::fetch(&mut tx, event.address_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Address not found".into()))?;
        if event.is_primary == Some(true) {
            Self::clear_primary(&mut tx, current.user_id, Some(event.address_id)).await?;
        }

        let UpdateUserAddress {
            address_id,
            address_type,
            street_address,
            city,
            state_province,
            postal_code,
            country,
            is_primary,
        } = event;

        let mut builder = UpdateBuilder::new("user_addresses");
        builder
            .set("address_type", address_type.map(|t| t.to_string()))
            .set("street_address", street_address)
            .set("city", city)
            .set("state_province", state_province)
            .set("postal_code", postal_code)
            .set("country", country)
            .set("is_primary", is_primary);
        if builder.is_empty() {
            return Err(AppError::NoFieldsToUpdate);
        }

        builder
            .finish("address_id", address_id)
            .build()
            .execute(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, PRIMARY_TAKEN))?;

        let address = Self::fetch(&mut tx, address_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Address not found".into()))?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(address)
    }

    async fn delete(&self, address_id: UserAddressId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM user_addresses WHERE address_id = $1")
            .bind(address_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Address not found".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::user_address::AddressType;

    async fn seed_user(pool: &sqlx::PgPool) -> anyhow::Result<UserId> {
        let id = sqlx::query_scalar::<_, UserId>(
            r#"
                INSERT INTO users (email, password_hash, first_name, last_name)
                VALUES ('addr@example.com', 'x', 'Ren', 'Ito')
                RETURNING user_id
            "#,
        )
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    fn primary_address(user_id: UserId, city: &str) -> CreateUserAddress {
        CreateUserAddress {
            user_id,
            address_type: AddressType::Home,
            street_address: "1-2-3 Chuo".into(),
            city: city.into(),
            state_province: None,
            postal_code: None,
            country: "Japan".into(),
            is_primary: true,
        }
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn new_primary_address_demotes_the_previous_one(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let user_id = seed_user(&pool).await?;
        let repo = UserAddressRepositoryImpl::new(ConnectionPool::new(pool));

        let first = repo.create(primary_address(user_id, "Osaka")).await?;
        let second = repo.create(primary_address(user_id, "Kyoto")).await?;

        let first = repo.find_by_id(first.address_id).await?.unwrap();
        assert!(!first.is_primary);
        assert!(second.is_primary);
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn address_for_missing_user_is_not_found(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserAddressRepositoryImpl::new(ConnectionPool::new(pool));
        let res = repo.create(primary_address(UserId::new(999), "Nara")).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }
}
