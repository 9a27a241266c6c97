use super::{default_true, validate::opt_http_url};
use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    category::{
        event::{CreateCategory, UpdateCategory},
        PropertyCategory,
    },
    id::CategoryId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[garde(length(chars, min = 1, max = 100))]
    pub category_name: String,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(url, custom(opt_http_url), length(chars, max = 500))]
    pub icon_url: Option<String>,
    #[garde(skip)]
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<CreateCategoryRequest> for CreateCategory {
    fn from(value: CreateCategoryRequest) -> Self {
        let CreateCategoryRequest {
            category_name,
            description,
            icon_url,
            is_active,
        } = value;
        CreateCategory {
            category_name,
            description,
            icon_url,
            is_active,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[garde(length(chars, min = 1, max = 100))]
    pub category_name: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(url, custom(opt_http_url), length(chars, max = 500))]
    pub icon_url: Option<String>,
    #[garde(skip)]
    pub is_active: Option<bool>,
}

#[derive(new)]
pub struct UpdateCategoryRequestWithId(CategoryId, UpdateCategoryRequest);

impl From<UpdateCategoryRequestWithId> for UpdateCategory {
    fn from(value: UpdateCategoryRequestWithId) -> Self {
        let UpdateCategoryRequestWithId(
            category_id,
            UpdateCategoryRequest {
                category_name,
                description,
                icon_url,
                is_active,
            },
        ) = value;
        UpdateCategory {
            category_id,
            category_name,
            description,
            icon_url,
            is_active,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category_id: CategoryId,
    pub category_name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<PropertyCategory> for CategoryResponse {
    fn from(value: PropertyCategory) -> Self {
        let PropertyCategory {
            category_id,
            category_name,
            description,
            icon_url,
            is_active,
            created_at,
        } = value;
        Self {
            category_id,
            category_name,
            description,
            icon_url,
            is_active,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_url_must_be_http() {
        let ok: CreateCategoryRequest = serde_json::from_value(serde_json::json!({
            "category_name": "Treehouse",
            "icon_url": "https://cdn.example.com/tree.svg",
        }))
        .unwrap();
        assert!(ok.is_active);
        assert!(ok.validate(&()).is_ok());

        let bad = CreateCategoryRequest {
            icon_url: Some("not a url".into()),
            ..ok
        };
        assert!(bad.validate(&()).is_err());
    }
}
