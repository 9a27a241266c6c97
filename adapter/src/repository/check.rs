use kernel::model::id::{AmenityId, CategoryId, PropertyId, UserId};
use shared::error::{AppError, AppResult};
use sqlx::PgConnection;

async fn exists(conn: &mut PgConnection, sql: &str, id: i64) -> AppResult<bool> {
    sqlx::query_scalar::<_, bool>(sql)
        .bind(id)
        .fetch_one(conn)
        .await
        .map_err(AppError::SpecificOperationError)
}

pub async fn ensure_user_exists(conn: &mut PgConnection, user_id: UserId) -> AppResult<()> {
    let found = exists(
        conn,
        "SELECT EXISTS (SELECT 1 FROM users WHERE user_id = $1)",
        user_id.raw(),
    )
    .await?;
    if !found {
        return Err(AppError::EntityNotFound("User not found".into()));
    }
    Ok(())
}

/// The user must exist and be flagged as a host.
pub async fn ensure_host_exists(conn: &mut PgConnection, host_id: UserId) -> AppResult<()> {
    let found = exists(
        conn,
        "SELECT EXISTS (SELECT 1 FROM users WHERE user_id = $1 AND is_host = TRUE)",
        host_id.raw(),
    )
    .await?;
    if !found {
        return Err(AppError::EntityNotFound(
            "Host not found or user is not a host".into(),
        ));
    }
    Ok(())
}

pub async fn ensure_category_active(
    conn: &mut PgConnection,
    category_id: CategoryId,
) -> AppResult<()> {
    let found = exists(
        conn,
        "SELECT EXISTS (SELECT 1 FROM property_categories WHERE category_id = $1 AND is_active = TRUE)",
        category_id.raw(),
    )
    .await?;
    if !found {
        return Err(AppError::EntityNotFound(
            "Category not found or inactive".into(),
        ));
    }
    Ok(())
}

pub async fn ensure_property_exists(
    conn: &mut PgConnection,
    property_id: PropertyId,
) -> AppResult<()> {
    let found = exists(
        conn,
        "SELECT EXISTS (SELECT 1 FROM properties WHERE property_id = $1)",
        property_id.raw(),
    )
    .await?;
    if !found {
        return Err(AppError::EntityNotFound("Property not found".into()));
    }
    Ok(())
}

pub async fn ensure_amenity_active(
    conn: &mut PgConnection,
    amenity_id: AmenityId,
) -> AppResult<()> {
    let found = exists(
        conn,
        "SELECT EXISTS (SELECT 1 FROM amenities WHERE amenity_id = $1 AND is_active = TRUE)",
        amenity_id.raw(),
    )
    .await?;
    if !found {
        return Err(AppError::EntityNotFound(format!(
            "Amenity {amenity_id} not found or inactive"
        )));
    }
    Ok(())
}
