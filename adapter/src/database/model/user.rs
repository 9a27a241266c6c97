use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{id::UserId, user::User};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct UserRow {
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

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
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
        User {
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
