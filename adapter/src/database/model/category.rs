use chrono::{DateTime, Utc};
use kernel::model::{category::PropertyCategory, id::CategoryId};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct CategoryRow {
    pub category_id: CategoryId,
    pub category_name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<CategoryRow> for PropertyCategory {
    fn from(value: CategoryRow) -> Self {
        let CategoryRow {
            category_id,
            category_name,
            description,
            icon_url,
            is_active,
            created_at,
        } = value;
        PropertyCategory {
            category_id,
            category_name,
            description,
            icon_url,
            is_active,
            created_at,
        }
    }
}
