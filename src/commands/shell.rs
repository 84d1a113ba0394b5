use std::io::{self, Write};

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::cli::{split_line, SessionArgs, ShellCommand, ShellLine};
use crate::config::Config;
use crate::directory::DirectoryClient;
use crate::error::Result;
use crate::output;
use crate::session::Session;
use crate::types::{User, UserDraft};
use crate::views;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run the interactive session until `quit` or end of input.
///
/// The directory fetch runs alongside the prompt; its result replaces the
/// collection whenever it arrives.
pub async fn run(config: &Config, args: SessionArgs) -> Result<()> {
    let client = if args.offline {
        None
    } else {
        Some(DirectoryClient::from_config(config)?)
    };

    let fetch = async {
        match &client {
            Some(client) => Some(client.fetch_initial_users().await),
            None => None,
        }
    };
    tokio::pin!(fetch);
    let mut fetch_pending = client.is_some();

    let mut session = Session::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    match &client {
        Some(client) => output::print_message(&format!(
            "Loading users from {} (type 'help' for commands)",
            client.endpoint()
        )),
        None => output::print_message("Offline session (type 'help' for commands)"),
    }
    prompt(&session)?;

    loop {
        tokio::select! {
            users = &mut fetch, if fetch_pending => {
                fetch_pending = false;
                if let Some(users) = users {
                    on_users_loaded(&mut session, users);
                    prompt(&session)?;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("end of input");
                    break;
                };
                if handle_line(&mut session, &line) == Flow::Quit {
                    break;
                }
                prompt(&session)?;
            }
        }
    }

    Ok(())
}

fn on_users_loaded(session: &mut Session, users: Vec<User>) {
    session.populate(users);

    eprintln!();
    if session.store().is_empty() {
        output::print_message("No users available");
        return;
    }
    output::print_message(&format!("Loaded {} users", session.store().len()));
    show_list(session);
}

/// Prompt and spacing go to stderr so stdout carries only rendered output.
fn prompt(session: &Session) -> Result<()> {
    write_prompt(&mut io::stderr(), session)
}

fn write_prompt(out: &mut impl Write, session: &Session) -> Result<()> {
    let label = match session.selection().user() {
        Some(user) => format!("userdesk [#{} {}]> ", user.id, user.first_name),
        None => "userdesk> ".to_string(),
    };
    write!(out, "{}", label.green())?;
    out.flush()?;
    Ok(())
}

/// Parse and apply one prompt line.
pub fn handle_line(session: &mut Session, line: &str) -> Flow {
    let words = split_line(line);
    if words.is_empty() {
        return Flow::Continue;
    }

    match ShellLine::try_parse_from(words) {
        Ok(parsed) => dispatch(session, parsed.command),
        Err(e) => {
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => print!("{e}"),
                _ => eprint!("{e}"),
            }
            Flow::Continue
        }
    }
}

pub fn dispatch(session: &mut Session, command: ShellCommand) -> Flow {
    match command {
        ShellCommand::List => show_list(session),
        ShellCommand::Search { term } => {
            session.set_search(term.join(" "));
            show_list(session);
        }
        ShellCommand::Select { id } => match session.select_id(id) {
            Ok(user) => views::print_user_form(user),
            Err(e) => output::print_notice(&e.to_string()),
        },
        ShellCommand::Show => match session.selection().user() {
            Some(user) => views::print_user_form(user),
            None => output::print_notice("No user selected"),
        },
        ShellCommand::Edit { field, value } => {
            match session.edit_selected(field, value.join(" ")) {
                Ok(user) => views::print_user_form(user),
                Err(e) => output::print_notice(&e.to_string()),
            }
        }
        ShellCommand::Save => match session.save_selected() {
            Ok(true) => {
                output::print_message("User updated");
                show_list(session);
            }
            Ok(false) => output::print_notice("User no longer exists; nothing was updated"),
            Err(e) => output::print_notice(&e.to_string()),
        },
        ShellCommand::Cancel => {
            session.clear_selection();
            output::print_message("Selection cleared");
        }
        ShellCommand::Delete { id } => {
            if session.delete(id) {
                output::print_message(&format!("Deleted user {id}"));
                show_list(session);
            } else {
                output::print_notice(&format!("No user with ID {id}"));
            }
        }
        ShellCommand::Draft { field, value } => {
            session.set_draft_field(field, value.join(" "));
            views::print_draft(session.draft());
        }
        ShellCommand::Add {
            first_name,
            last_name,
            email,
        } => {
            let id = if first_name.is_none() && last_name.is_none() && email.is_none() {
                session.add_draft()
            } else {
                session.add(UserDraft::new(
                    first_name.unwrap_or_default(),
                    last_name.unwrap_or_default(),
                    email.unwrap_or_default(),
                ))
            };
            output::print_message(&format!("Added user {id}"));
            show_list(session);
        }
        ShellCommand::Quit => return Flow::Quit,
    }

    Flow::Continue
}

fn show_list(session: &Session) {
    let selected = session.selection().user().map(|u| u.id);
    views::print_users(&session.filtered_users(), session.search(), selected);
}
