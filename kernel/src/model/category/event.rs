use crate::model::id::CategoryId;

#[derive(Debug)]
pub struct CreateCategory {
    pub category_name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Default)]
pub struct UpdateCategory {
    pub category_id: CategoryId,
    pub category_name: Option<String>,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateCategory {
    pub fn is_empty(&self) -> bool {
        self.category_name.is_none()
            && self.description.is_none()
            && self.icon_url.is_none()
            && self.is_active.is_none()
    }
}
