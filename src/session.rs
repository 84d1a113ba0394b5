//! Session state: the user collection, the current selection, the add form
//! and the active search term.
//!
//! Every intent from the list, detail and add views goes through [`Session`],
//! which is the only path to mutating the [`UserStore`].

use tracing::debug;

use crate::error::{Result, UserDeskError};
use crate::store::UserStore;
use crate::types::{User, UserDraft, UserField};

/// What the detail view is showing.
///
/// The selected user is a copy taken at selection time. Edits made in the
/// detail view change this copy only, until they are saved back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Selected(User),
}

impl Selection {
    pub fn user(&self) -> Option<&User> {
        match self {
            Selection::None => None,
            Selection::Selected(user) => Some(user),
        }
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.user().is_some_and(|u| u.id == id)
    }
}

#[derive(Debug, Default)]
pub struct Session {
    store: UserStore,
    selection: Selection,
    draft: UserDraft,
    search: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the directory result, replacing whatever the collection holds.
    pub fn populate(&mut self, users: Vec<User>) {
        self.store.replace_all(users);
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// The list view: the collection filtered by the active search term.
    pub fn filtered_users(&self) -> Vec<&User> {
        self.store.filter(&self.search)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn select(&mut self, user: User) {
        debug!(id = user.id, "selecting user");
        self.selection = Selection::Selected(user);
    }

    /// Select the user currently stored under `id`.
    pub fn select_id(&mut self, id: i64) -> Result<&User> {
        let user = self
            .store
            .get(id)
            .cloned()
            .ok_or(UserDeskError::UserNotFound(id))?;
        self.select(user);
        self.selection.user().ok_or(UserDeskError::NoSelection)
    }

    /// Change one field of the selected copy without touching the collection.
    pub fn edit_selected(&mut self, field: UserField, value: impl Into<String>) -> Result<&User> {
        match &mut self.selection {
            Selection::None => Err(UserDeskError::NoSelection),
            Selection::Selected(user) => {
                user.set_field(field, value);
                Ok(user)
            }
        }
    }

    /// Drop the selection without writing anything back.
    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    /// Remove `id` from the collection. Clears the selection if it pointed
    /// at the removed user. Returns false when no user matched.
    pub fn delete(&mut self, id: i64) -> bool {
        if self.selection.is_selected(id) {
            self.clear_selection();
        }
        self.store.remove(id)
    }

    /// Write `user` into the collection and clear the selection, whether or
    /// not a stored user matched. Returns false when none did.
    pub fn update(&mut self, user: User) -> bool {
        let matched = self.store.update(user);
        self.clear_selection();
        matched
    }

    /// Save the edited selection back into the collection.
    pub fn save_selected(&mut self) -> Result<bool> {
        match std::mem::take(&mut self.selection) {
            Selection::None => Err(UserDeskError::NoSelection),
            Selection::Selected(user) => Ok(self.update(user)),
        }
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn set_draft_field(&mut self, field: UserField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    /// Commit `draft` as a new user and return its id.
    pub fn add(&mut self, draft: UserDraft) -> i64 {
        self.store.add(draft)
    }

    /// Commit the staged add form and reset it to blank.
    pub fn add_draft(&mut self) -> i64 {
        let draft = std::mem::take(&mut self.draft);
        self.add(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, first: &str, last: &str, email: &str) -> User {
        User {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
        }
    }

    fn ana() -> User {
        user(1, "Ana", "Kovac", "ana@x.com")
    }

    fn session_with(users: Vec<User>) -> Session {
        let mut session = Session::new();
        session.populate(users);
        session
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.store().is_empty());
        assert!(session.filtered_users().is_empty());
        assert_eq!(session.selection(), &Selection::None);
    }

    #[test]
    fn test_populate_then_search() {
        let mut session = session_with(vec![ana()]);
        session.set_search("kovac");

        assert_eq!(session.filtered_users(), vec![&ana()]);
    }

    #[test]
    fn test_populate_with_empty_result_is_displayable() {
        let mut session = session_with(vec![ana()]);
        session.populate(Vec::new());

        assert!(session.store().is_empty());
        assert!(session.filtered_users().is_empty());
        assert_eq!(session.selection(), &Selection::None);
    }

    #[test]
    fn test_select_replaces_previous_selection() {
        let bo = user(2, "Bo", "Li", "b@x.com");
        let mut session = session_with(vec![ana(), bo.clone()]);

        session.select(ana());
        session.select(bo.clone());

        assert_eq!(session.selection(), &Selection::Selected(bo));
    }

    #[test]
    fn test_select_id_takes_a_copy() {
        let mut session = session_with(vec![ana()]);
        session.select_id(1).unwrap();
        session
            .edit_selected(UserField::FirstName, "Anamarija")
            .unwrap();

        assert_eq!(session.store().get(1), Some(&ana()));
        assert_eq!(
            session.selection().user().map(|u| u.first_name.as_str()),
            Some("Anamarija")
        );
    }

    #[test]
    fn test_select_id_unknown() {
        let mut session = session_with(vec![ana()]);
        assert!(matches!(
            session.select_id(9),
            Err(UserDeskError::UserNotFound(9))
        ));
        assert_eq!(session.selection(), &Selection::None);
    }

    #[test]
    fn test_edit_without_selection() {
        let mut session = session_with(vec![ana()]);
        assert!(matches!(
            session.edit_selected(UserField::Email, "x@y.z"),
            Err(UserDeskError::NoSelection)
        ));
    }

    #[test]
    fn test_update_writes_and_clears_selection() {
        let mut session = session_with(vec![ana(), user(2, "Bo", "Li", "b@x.com")]);
        session.select_id(1).unwrap();

        let matched = session.update(user(1, "Anamarija", "Kovac", "ana@x.com"));

        assert!(matched);
        assert_eq!(session.store().get(1).unwrap().first_name, "Anamarija");
        assert_eq!(session.store().iter().next().map(|u| u.id), Some(1));
        assert_eq!(session.selection(), &Selection::None);
    }

    #[test]
    fn test_update_missing_still_clears_selection() {
        let mut session = session_with(vec![ana()]);
        session.select(ana());

        let matched = session.update(user(5, "Nobody", "Here", "n@x.com"));

        assert!(!matched);
        assert_eq!(session.store().iter().collect::<Vec<_>>(), vec![&ana()]);
        assert_eq!(session.selection(), &Selection::None);
    }

    #[test]
    fn test_save_selected_commits_edits() {
        let mut session = session_with(vec![ana()]);
        session.select_id(1).unwrap();
        session.edit_selected(UserField::Email, "ana@kovac.si").unwrap();

        assert!(session.save_selected().unwrap());
        assert_eq!(session.store().get(1).unwrap().email, "ana@kovac.si");
        assert_eq!(session.selection(), &Selection::None);
    }

    #[test]
    fn test_save_without_selection() {
        let mut session = session_with(vec![ana()]);
        assert!(matches!(
            session.save_selected(),
            Err(UserDeskError::NoSelection)
        ));
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut session = session_with(vec![ana()]);
        session.select_id(1).unwrap();

        assert!(session.delete(1));
        assert!(session.store().is_empty());
        assert_eq!(session.selection(), &Selection::None);
    }

    #[test]
    fn test_delete_other_keeps_selection() {
        let bo = user(2, "Bo", "Li", "b@x.com");
        let mut session = session_with(vec![ana(), bo]);
        session.select_id(1).unwrap();

        assert!(session.delete(2));
        assert_eq!(session.selection(), &Selection::Selected(ana()));
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut session = session_with(vec![ana()]);
        assert!(!session.delete(3));
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn test_add_draft_commits_and_resets() {
        let mut session = Session::new();
        session.set_draft_field(UserField::FirstName, "Bo");
        session.set_draft_field(UserField::LastName, "Li");
        session.set_draft_field(UserField::Email, "b@x.com");

        let id = session.add_draft();

        assert_ne!(id, 0);
        assert_eq!(session.store().get(id), Some(&user(id, "Bo", "Li", "b@x.com")));
        assert_eq!(session.draft(), &UserDraft::default());
    }

    #[test]
    fn test_search_does_not_affect_collection() {
        let mut session = session_with(vec![ana(), user(2, "Bo", "Li", "b@x.com")]);
        session.set_search("bo");

        assert_eq!(session.filtered_users().len(), 1);
        assert_eq!(session.store().len(), 2);
    }
}
