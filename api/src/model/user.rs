use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::UserId,
    user::{
        event::{CreateUser, UpdateUser},
        User,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[garde(email, length(chars, max = 255))]
    pub email: String,
    #[garde(length(chars, min = 1, max = 255))]
    pub password_hash: String,
    #[garde(length(chars, min = 1, max = 100))]
    pub first_name: String,
    #[garde(length(chars, min = 1, max = 100))]
    pub last_name: String,
    #[garde(length(chars, max = 20))]
    pub phone: Option<String>,
    #[garde(skip)]
    pub date_of_birth: Option<NaiveDate>,
    #[garde(length(chars, max = 500))]
    pub profile_picture_url: Option<String>,
    #[garde(skip)]
    pub bio: Option<String>,
    #[garde(skip)]
    #[serde(default)]
    pub is_host: bool,
    #[garde(skip)]
    #[serde(default)]
    pub is_verified: bool,
    #[garde(skip)]
    #[serde(default)]
    pub government_id_verified: bool,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
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
        } = value;
        CreateUser {
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
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[garde(email, length(chars, max = 255))]
    pub email: Option<String>,
    #[garde(length(chars, min = 1, max = 255))]
    pub password_hash: Option<String>,
    #[garde(length(chars, min = 1, max = 100))]
    pub first_name: Option<String>,
    #[garde(length(chars, min = 1, max = 100))]
    pub last_name: Option<String>,
    #[garde(length(chars, max = 20))]
    pub phone: Option<String>,
    #[garde(skip)]
    pub date_of_birth: Option<NaiveDate>,
    #[garde(length(chars, max = 500))]
    pub profile_picture_url: Option<String>,
    #[garde(skip)]
    pub bio: Option<String>,
    #[garde(skip)]
    pub is_host: Option<bool>,
    #[garde(skip)]
    pub is_verified: Option<bool>,
    #[garde(skip)]
    pub government_id_verified: Option<bool>,
}

#[derive(new)]
pub struct UpdateUserRequestWithId(UserId, UpdateUserRequest);

impl From<UpdateUserRequestWithId> for UpdateUser {
    fn from(value: UpdateUserRequestWithId) -> Self {
        let UpdateUserRequestWithId(
            user_id,
            UpdateUserRequest {
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
            },
        ) = value;
        UpdateUser {
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
        }
    }
}

/// Public view of a user. The password hash never leaves the service.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_picture_url: Option<String>,
    pub bio: Option<String>,
    pub is_host: bool,
    pub is_verified: bool,
    pub government_id_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            email,
            first_name,
            last_name,
            phone,
            date_of_birth,
            profile_picture_url,
            bio,
            is_host,
            is_verified,
            government_id_verified,
            created_at,
            updated_at,
        } = value;
        Self {
            user_id,
            email,
            first_name,
            last_name,
            phone,
            date_of_birth,
            profile_picture_url,
            bio,
            is_host,
            is_verified,
            government_id_verified,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_applies_flag_defaults_and_checks_email() {
        let req: CreateUserRequest = serde_json::from_value(serde_json::json!({
            "email": "not-an-email",
            "password_hash": "x",
            "first_name": "Aoi",
            "last_name": "Kudo",
        }))
        .unwrap();
        assert!(!req.is_host && !req.is_verified && !req.government_id_verified);
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn empty_update_converts_to_empty_event() {
        let req: UpdateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate(&()).is_ok());
        let event: UpdateUser = UpdateUserRequestWithId::new(UserId::new(1), req).into();
        assert!(event.is_empty());
    }

    #[test]
    fn blank_names_are_rejected_on_update() {
        let req = UpdateUserRequest {
            first_name: Some(String::new()),
            ..Default::default()
        };
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn name_limits_count_characters() {
        let name = |n: usize| serde_json::json!({
            "email": "aoi@example.com",
            "password_hash": "x",
            "first_name": "あ".repeat(n),
            "last_name": "Kudo",
        });
        let fits: CreateUserRequest = serde_json::from_value(name(100)).unwrap();
        assert!(fits.validate(&()).is_ok());
        let too_long: CreateUserRequest = serde_json::from_value(name(101)).unwrap();
        assert!(too_long.validate(&()).is_err());
    }
}
