//! Wire shapes for the remote user service.
//!
//! Listing responses may carry extra fields (addresses, phone numbers, and so
//! on); they are ignored. Create requests send `{id, name, email}` plus `bio`
//! when present.

use serde::{Deserialize, Serialize};

use crate::domain::{User, UserId};

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct UserDto {
    pub(super) id: UserId,
    pub(super) name: String,
    pub(super) email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) bio: Option<String>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            name: user.name().to_owned(),
            email: user.email().to_owned(),
            bio: user.bio().map(str::to_owned),
        }
    }
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        let user = Self::new(dto.id, dto.name, dto.email);
        match dto.bio {
            Some(bio) => user.with_bio(bio),
            None => user,
        }
    }
}
