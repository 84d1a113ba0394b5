//! Terminal rendering of the list, detail and add-form views.

use colored::Colorize;
use tabled::Tabled;

use crate::output::{self, truncate};
use crate::types::{User, UserDraft, UserField};

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "")]
    marker: &'static str,
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
}

impl UserRow {
    fn new(user: &User, selected: Option<i64>) -> Self {
        Self {
            marker: if selected == Some(user.id) { "*" } else { "" },
            id: user.id,
            name: truncate(&user.full_name(), 40),
            email: truncate(&user.email, 50),
        }
    }
}

/// Print the list view. `selected` marks the row being edited.
pub fn print_users(users: &[&User], search: &str, selected: Option<i64>) {
    if users.is_empty() {
        let message = if search.is_empty() {
            "No users".to_string()
        } else {
            format!("No users match '{search}'")
        };
        output::print_message(&message);
        return;
    }

    output::print_table(
        users,
        |u| UserRow::new(u, selected),
        |u| format!("{}\t{}\t{}", u.id, u.full_name(), u.email),
    );
}

/// Print the edit form of a selected user.
pub fn print_user_form(user: &User) {
    output::print_item(user, |u| {
        println!("{}", format!("Edit user #{}", u.id).bold());
        print_fields(|field| u.field(field).to_string());
        println!(
            "{}",
            "Use 'edit <field> <value>', then 'save' or 'cancel'".bright_black()
        );
    });
}

/// Print the staged new-user form.
pub fn print_draft(draft: &UserDraft) {
    output::print_item(draft, |d| {
        println!("{}", "New user".bold());
        let preview = d.preview();
        print_fields(|field| preview.field(field).to_string());
        println!("{}", "Use 'add' to commit".bright_black());
    });
}

fn print_fields(value_of: impl Fn(UserField) -> String) {
    for field in UserField::ALL {
        let value = value_of(field);
        let shown = if value.is_empty() {
            "(empty)".bright_black().to_string()
        } else {
            value
        };
        let label = format!("{:<11}", format!("{}:", field.label()));
        println!("  {} {}", label.cyan(), shown);
    }
}
