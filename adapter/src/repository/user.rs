use crate::database::{
    map_write_error, model::user::UserRow, update::UpdateBuilder, ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    list::ListOptions,
    user::{
        event::{CreateUser, UpdateUser},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};
use sqlx::PgConnection;

const EMAIL_TAKEN: &str = "Email already registered";

const SELECT_USER: &str = r#"
    SELECT user_id, email, first_name, last_name, phone, date_of_birth,
           profile_picture_url, bio, is_host, is_verified,
           government_id_verified, created_at, updated_at
    FROM users
"#;

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

impl UserRepositoryImpl {
    async fn ensure_email_free(
        conn: &mut PgConnection,
        email: &str,
        except: Option<UserId>,
    ) -> AppResult<()> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE email = $1 AND user_id IS DISTINCT FROM $2)",
        )
        .bind(email)
        .bind(except)
        .fetch_one(conn)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if taken {
            return Err(AppError::Conflict(EMAIL_TAKEN.into()));
        }
        Ok(())
    }

    async fn fetch(conn: &mut PgConnection, user_id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE user_id = $1"))
            .bind(user_id)
            .fetch_optional(conn)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(User::from))
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let mut tx = self.db.begin().await?;

        Self::ensure_email_free(&mut tx, &event.email, None).await?;

        let user_id = sqlx::query_scalar::<_, UserId>(
            r#"
                INSERT INTO users
                (email, password_hash, first_name, last_name, phone, date_of_birth,
                 profile_picture_url, bio, is_host, is_verified, government_id_verified)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                RETURNING user_id
            "#,
        )
        .bind(&event.email)
        .bind(&event.password_hash)
        .bind(&event.first_name)
        .bind(&event.last_name)
        .bind(&event.phone)
        .bind(event.date_of_birth)
        .bind(&event.profile_picture_url)
        .bind(&event.bio)
        .bind(event.is_host)
        .bind(event.is_verified)
        .bind(event.government_id_verified)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, EMAIL_TAKEN))?;

        let user = Self::fetch(&mut tx, user_id).await?.ok_or_else(|| {
            AppError::NoRowsAffectedError("No user record has been created".into())
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        tracing::info!(user.id = %user_id, "user created");
        Ok(user)
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "{SELECT_USER} ORDER BY user_id LIMIT $1 OFFSET $2"
        ))
        .bind(options.limit)
        .bind(options.skip)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let mut conn = self
            .db
            .inner_ref()
            .acquire()
            .await
            .map_err(AppError::SpecificOperationError)?;
        Self::fetch(&mut conn, user_id).await
    }

    async fn update(&self, event: UpdateUser) -> AppResult<User> {
        let mut tx = self.db.begin().await?;

        if Self::fetch(&mut tx, event.user_id).await?.is_none() {
            return Err(AppError::EntityNotFound("User not found".into()));
        }
        if let Some(email) = &event.email {
            Self::ensure_email_free(&mut tx, email, Some(event.user_id)).await?;
        }

        let UpdateUser {
            user_id,
            email,
            password_hash,
            first_name,
            last_name,
            phone,
            date_of_birth,
            profile_picture_url,
            bio,
            is_host,
            is_verified,
            government_id_verified,
        } = event;

        let mut builder = UpdateBuilder::new("users");
        builder
            .set("email", email)
            .set("password_hash", password_hash)
            .set("first_name", first_name)
            .set("last_name", last_name)
            .set("phone", phone)
            .set("date_of_birth", date_of_birth)
            .set("profile_picture_url", profile_picture_url)
            .set("bio", bio)
            .set("is_host", is_host)
            .set("is_verified", is_verified)
            .set("government_id_verified", government_id_verified);
        if builder.is_empty() {
            return Err(AppError::NoFieldsToUpdate);
        }

        builder
            .finish("user_id", user_id)
            .build()
            .execute(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, EMAIL_TAKEN))?;

        let user = Self::fetch(&mut tx, user_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("User not found".into()))?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        tracing::debug!(user.id = %user_id, "user updated");
        Ok(user)
    }

    async fn delete(&self, user_id: UserId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("User not found".into()));
        }
        tracing::info!(user.id = %user_id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> CreateUser {
        CreateUser {
            email: email.into(),
            password_hash: "hashed".into(),
            first_name: "Mina".into(),
            last_name: "Sato".into(),
            phone: None,
            date_of_birth: None,
            profile_picture_url: None,
            bio: None,
            is_host: true,
            is_verified: false,
            government_id_verified: false,
        }
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn duplicate_email_is_a_conflict(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));
        let created = repo.create(new_user("mina@example.com")).await?;
        assert!(created.is_host);

        let res = repo.create(new_user("mina@example.com")).await;
        assert!(matches!(res, Err(AppError::Conflict(_))));
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn update_changes_only_supplied_fields(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));
        let created = repo.create(new_user("ken@example.com")).await?;

        let updated = repo
            .update(UpdateUser {
                user_id: created.user_id,
                bio: Some("Loves the sea".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(updated.bio.as_deref(), Some("Loves the sea"));
        assert_eq!(updated.first_name, "Mina");

        repo.delete(created.user_id).await?;
        assert!(repo.find_by_id(created.user_id).await?.is_none());
        assert!(matches!(
            repo.delete(created.user_id).await,
            Err(AppError::EntityNotFound(_))
        ));
        Ok(())
    }
}
