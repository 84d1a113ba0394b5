use serde::Serialize;

use super::UserField;

/// A user record as held in the local collection.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::Email => &self.email,
        }
    }

    pub fn set_field(&mut self, field: UserField, value: impl Into<String>) {
        let value = value.into();
        match field {
            UserField::FirstName => self.first_name = value,
            UserField::LastName => self.last_name = value,
            UserField::Email => self.email = value,
        }
    }
}

/// Add-form state: a user that has not been given an id yet.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserDraft {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    pub fn set_field(&mut self, field: UserField, value: impl Into<String>) {
        let value = value.into();
        match field {
            UserField::FirstName => self.first_name = value,
            UserField::LastName => self.last_name = value,
            UserField::Email => self.email = value,
        }
    }

    /// Commit the draft under `id`.
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }

    /// View the draft as a user with the uncommitted id `0`.
    pub fn preview(&self) -> User {
        self.clone().into_user(0)
    }
}
