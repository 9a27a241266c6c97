use crate::model::id::UserId;
use chrono::NaiveDate;

#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_picture_url: Option<String>,
    pub bio: Option<String>,
    pub is_host: bool,
    pub is_verified: bool,
    pub government_id_verified: bool,
}

#[derive(Debug, Default)]
pub struct UpdateUser {
    pub user_id: UserId,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_picture_url: Option<String>,
    pub bio: Option<String>,
    pub is_host: Option<bool>,
    pub is_verified: Option<bool>,
    pub government_id_verified: Option<bool>,
}

impl UpdateUser {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password_hash.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone.is_none()
            && self.date_of_birth.is_none()
            && self.profile_picture_url.is_none()
            && self.bio.is_none()
            && self.is_host.is_none()
            && self.is_verified.is_none()
            && self.government_id_verified.is_none()
    }
}
