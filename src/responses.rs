//! Response shapes of the remote user directory.

use serde::Deserialize;

use crate::types::User;

/// Envelope of `GET /api/users`. Paging fields are ignored.
#[derive(Deserialize)]
pub struct UserListResponse {
    pub data: Vec<RemoteUser>,
}

/// One directory entry. Extra fields such as `avatar` are dropped.
#[derive(Deserialize)]
pub struct RemoteUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<RemoteUser> for User {
    fn from(remote: RemoteUser) -> Self {
        Self {
            id: remote.id,
            first_name: remote.first_name,
            last_name: remote.last_name,
            email: remote.email,
        }
    }
}
