use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

/// Body returned by the OAuth callback and the refresh endpoint.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub token: String,
    pub expires_at: NaiveDateTime,
    pub usuario: UserDto,
}

impl SessionDto {
    pub fn new(session: entity::session::Model, user: entity::user::Model) -> Self {
        Self {
            token: session.token,
            expires_at: session.expires_at,
            usuario: UserDto::from_entity(user),
        }
    }
}
