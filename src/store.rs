//! In-memory user collection: the single writable owner of user records.

use chrono::Utc;
use tracing::debug;

use crate::types::{User, UserDraft};

/// Hands out ids from the wall clock in milliseconds, never repeating or
/// going backwards within one generator even if the clock does.
#[derive(Debug, Default)]
struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    fn next(&mut self) -> i64 {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_ms: i64) -> i64 {
        let id = now_ms.max(self.last + 1);
        self.last = id;
        id
    }
}

#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
    ids: IdGenerator,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the whole collection. Never merges.
    pub fn replace_all(&mut self, users: Vec<User>) {
        debug!(count = users.len(), "replacing user collection");
        self.users = users;
    }

    /// Append a new user built from `draft` and return its generated id.
    pub fn add(&mut self, draft: UserDraft) -> i64 {
        let id = self.ids.next();
        debug!(id, "adding user");
        self.users.push(draft.into_user(id));
        id
    }

    /// Remove the first user with `id`. Returns false when nothing matched.
    pub fn remove(&mut self, id: i64) -> bool {
        match self.users.iter().position(|u| u.id == id) {
            Some(index) => {
                debug!(id, "removing user");
                self.users.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the user with the same id in place. Returns false when nothing matched.
    pub fn update(&mut self, user: User) -> bool {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                debug!(id = user.id, "updating user");
                *slot = user;
                true
            }
            None => false,
        }
    }

    /// Users whose first name, last name, or email contains `term`,
    /// ignoring case. An empty term matches everyone.
    pub fn filter(&self, term: &str) -> Vec<&User> {
        let needle = term.to_lowercase();
        self.iter()
            .filter(|u| needle.is_empty() || matches_term(u, &needle))
            .collect()
    }

    pub fn get(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

fn matches_term(user: &User, needle: &str) -> bool {
    [&user.first_name, &user.last_name, &user.email]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
