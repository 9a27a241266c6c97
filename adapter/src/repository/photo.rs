use super::check::ensure_property_exists;
use crate::database::{model::photo::PropertyPhotoRow, update::UpdateBuilder, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::PhotoId,
    list::ListOptions,
    photo::{
        event::{CreatePropertyPhoto, UpdatePropertyPhoto},
        PropertyPhoto,
    },
};
use kernel::repository::photo::PropertyPhotoRepository;
use shared::error::{AppError, AppResult};
use sqlx::PgConnection;

const SELECT_PHOTO: &str = r#"
    SELECT photo_id, property_id, photo_url, caption, is_cover_photo,
           display_order, uploaded_at
    FROM property_photos
"#;

#[derive(new)]
pub struct PropertyPhotoRepositoryImpl {
    db: ConnectionPool,
}

impl PropertyPhotoRepositoryImpl {
    async fn fetch(conn: &mut PgConnection, photo_id: PhotoId) -> AppResult<Option<PropertyPhoto>> {
        let row = sqlx::query_as::<_, PropertyPhotoRow>(&format!("{SELECT_PHOTO} WHERE photo_id = $1"))
            .bind(photo_id)
            .fetch_optional(conn)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(PropertyPhoto::from))
    }
}

#[async_trait]
impl PropertyPhotoRepository for PropertyPhotoRepositoryImpl {
    async fn create(&self, event: CreatePropertyPhoto) -> AppResult<PropertyPhoto> {
        let mut tx = self.db.begin().await?;

        ensure_property_exists(&mut tx, event.property_id).await?;

        let photo_id = sqlx::query_scalar::<_, PhotoId>(
            r#"
                INSERT INTO property_photos
                (property_id, photo_url, caption, is_cover_photo, display_order)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING photo_id
            "#,
        )
        .bind(event.property_id)
        .bind(&event.photo_url)
        .bind(&event.caption)
        .bind(event.is_cover_photo)
        .bind(event.display_order)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let photo = Self::fetch(&mut tx, photo_id).await?.ok_or_else(|| {
            AppError::NoRowsAffectedError("No photo record has been created".into())
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        tracing::info!(photo.id = %photo_id, property.id = %photo.property_id, "property photo created");
        Ok(photo)
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<PropertyPhoto>> {
        let rows = sqlx::query_as::<_, PropertyPhotoRow>(&format!(
            "{SELECT_PHOTO} ORDER BY display_order, photo_id LIMIT $1 OFFSET $2"
        ))
        .bind(options.limit)
        .bind(options.skip)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(PropertyPhoto::from).collect())
    }

    async fn find_by_id(&self, photo_id: PhotoId) -> AppResult<Option<PropertyPhoto>> {
        let mut conn = self
            .db
            .inner_ref()
            .acquire()
            .await
            .map_err(AppError::SpecificOperationError)?;
        Self::fetch(&mut conn, photo_id).await
    }

    async fn update(&self, event: UpdatePropertyPhoto) -> AppResult<PropertyPhoto> {
        let mut tx = self.db.begin().await?;

        if Self::fetch(&mut tx, event.photo_id).await?.is_none() {
            return Err(AppError::EntityNotFound("Property photo not found".into()));
        }

        let UpdatePropertyPhoto {
            photo_id,
            photo_url,
            caption,
            is_cover_photo,
            display_order,
        } = event;

        let mut builder = UpdateBuilder::new("property_photos");
        builder
            .set("photo_url", photo_url)
            .set("caption", caption)
            .set("is_cover_photo", is_cover_photo)
            .set("display_order", display_order);
        if builder.is_empty() {
            return Err(AppError::NoFieldsToUpdate);
        }

        builder
            .finish("photo_id", photo_id)
            .build()
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        let photo = Self::fetch(&mut tx, photo_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Property photo not found".into()))?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(photo)
    }

    async fn delete(&self, photo_id: PhotoId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM property_photos WHERE photo_id = $1")
            .bind(photo_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Property photo not found".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::id::PropertyId;

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

    fn photo(property_id: PropertyId, url: &str, display_order: i32) -> CreatePropertyPhoto {
        CreatePropertyPhoto {
            property_id,
            photo_url: url.into(),
            caption: None,
            is_cover_photo: false,
            display_order,
        }
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn photos_follow_display_order(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let property_id = seed_property(&pool, "gallery").await?;
        let repo = PropertyPhotoRepositoryImpl::new(ConnectionPool::new(pool));

        let last = repo
            .create(photo(property_id, "https://img.example.com/3.jpg", 3))
            .await?;
        let first = repo
            .create(photo(property_id, "https://img.example.com/1.jpg", 1))
            .await?;
        let middle = repo
            .create(photo(property_id, "https://img.example.com/2.jpg", 2))
            .await?;

        let ids: Vec<_> = repo
            .find_all(ListOptions::default())
            .await?
            .into_iter()
            .map(|p| p.photo_id)
            .collect();
        assert_eq!(ids, vec![first.photo_id, middle.photo_id, last.photo_id]);
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn photo_needs_an_existing_property(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PropertyPhotoRepositoryImpl::new(ConnectionPool::new(pool));
        let res = repo
            .create(photo(PropertyId::new(404), "https://img.example.com/x.jpg", 0))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }
}
