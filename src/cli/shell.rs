//! Command grammar of the interactive session.

use clap::{Parser, Subcommand};

use crate::types::UserField;

/// One line typed at the session prompt.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// List users matching the active search
    #[command(alias = "ls")]
    List,
    /// Set the search term (no term clears it) and list matches
    Search {
        /// Text to match against first name, last name and email
        #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        term: Vec<String>,
    },
    /// Select a user for editing
    #[command(alias = "sel")]
    Select {
        /// User ID
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Show the edit form of the selected user
    Show,
    /// Change a field of the selected user (not saved until 'save')
    #[command(after_help = "EXAMPLES:
    edit first-name Anamarija
    edit email ana@example.com")]
    Edit {
        /// Field to change
        #[arg(value_enum)]
        field: UserField,
        /// New value
        #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Write the edited user back into the list and deselect it
    #[command(alias = "update")]
    Save,
    /// Deselect without saving
    Cancel,
    /// Delete a user from the list
    #[command(alias = "rm")]
    Delete {
        /// User ID
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Stage a field of the new-user form
    #[command(after_help = "EXAMPLES:
    draft first-name Bo
    draft email b@x.com
    add")]
    Draft {
        /// Field to set
        #[arg(value_enum)]
        field: UserField,
        /// Value
        #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Add a user from the given fields, or from the staged form
    #[command(after_help = "EXAMPLES:
    add Bo Li b@x.com
    add \"Mary Ann\" Smith mary@x.com
    add")]
    Add {
        /// First name
        #[arg(allow_hyphen_values = true)]
        first_name: Option<String>,
        /// Last name
        #[arg(allow_hyphen_values = true)]
        last_name: Option<String>,
        /// Email
        #[arg(allow_hyphen_values = true)]
        email: Option<String>,
    },
    /// Leave the session
    #[command(alias = "exit", alias = "q")]
    Quit,
}

/// Split a prompt line into words. Single or double quotes group words; an
/// unterminated quote runs to the end of the line.
pub fn split_line(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(current);
    }
    words
}
