use crate::model::id::CategoryId;
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyCategory {
    pub category_id: CategoryId,
    pub category_name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
