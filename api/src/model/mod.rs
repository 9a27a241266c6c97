use kernel::model::list::{ListOptions, DEFAULT_LIMIT, DEFAULT_SKIP};
use serde::{Deserialize, Serialize};

pub mod amenity;
pub mod booking;
pub mod category;
pub mod house_rule;
pub mod photo;
pub mod property;
pub mod property_address;
pub mod property_amenity;
pub mod time;
pub mod user;
pub mod user_address;
pub mod validate;

pub(crate) fn default_skip() -> i64 {
    DEFAULT_SKIP
}

pub(crate) fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

pub(crate) fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, garde::Validate)]
pub struct ListQuery {
    #[garde(range(min = 0))]
    #[serde(default = "default_skip")]
    pub skip: i64,
    #[garde(range(min = 0))]
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl From<ListQuery> for ListOptions {
    fn from(value: ListQuery) -> Self {
        let ListQuery { skip, limit } = value;
        Self { skip, limit }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garde::Validate;

    #[test]
    fn list_query_defaults_apply() {
        let query: ListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(ListOptions::from(query), ListOptions::default());
    }

    #[test]
    fn negative_paging_is_rejected() {
        let query = ListQuery { skip: -1, limit: 10 };
        assert!(query.validate(&()).is_err());
    }
}
