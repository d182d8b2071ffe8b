use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub discord_id: String,
    pub nombre: String,
    pub avatar: Option<String>,
}

impl UserDto {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            discord_id: entity.discord_id,
            nombre: entity.name,
            avatar: entity.avatar_hash,
        }
    }
}

/// Parameters for creating or updating a user at login time.
pub struct UpsertUserParam {
    pub discord_id: String,
    pub name: String,
    pub avatar_hash: Option<String>,
}
