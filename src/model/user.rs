use serde::{Deserialize, Serialize};

use crate::model::id::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(default)]
    pub id: Option<UserId>,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub reputation: Option<i64>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
}

/// Public profile shown on the user page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfileDto {
    pub email: String,
    #[serde(default)]
    pub reputation: Option<i64>,
    #[serde(default)]
    pub badge: Option<String>,
}

/// Body of `GET /api/current_user`; `user_id` is absent when nobody is logged in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentUserDto {
    #[serde(default)]
    pub user_id: Option<UserId>,
}
