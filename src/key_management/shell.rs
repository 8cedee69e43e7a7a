use anyhow::Result;

use crate::config::Config;
use crate::confirm::PromptConfirmer;
use crate::key_management::service::mount;
use crate::utils::read_line;
use crate::view::{ActionOutcome, KeyListView};

const HELP: &str = "\
Commands:
  list              reload and show the key list
  new               open the create form and ask for a name
                    (an empty answer resubmits the name already in the form)
  create <name>     create a key
  cancel            close the create form
  delete <id>       delete a key (asks for confirmation)
  toggle <id>       activate or deactivate a key
  copy <id>         copy the full key to the clipboard
  help              show this help
  quit              leave the shell
";

#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    New,
    Create(String),
    Delete(String),
    Toggle(String),
    Copy(String),
    Cancel,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match (word, rest.is_empty()) {
            ("", _) => ShellCommand::Empty,
            ("list" | "ls", true) => ShellCommand::List,
            ("new", true) => ShellCommand::New,
            ("create", _) => ShellCommand::Create(rest.to_string()),
            ("delete" | "rm", false) => ShellCommand::Delete(rest.to_string()),
            ("toggle", false) => ShellCommand::Toggle(rest.to_string()),
            ("copy", false) => ShellCommand::Copy(rest.to_string()),
            ("cancel", true) => ShellCommand::Cancel,
            ("help" | "?", true) => ShellCommand::Help,
            ("quit" | "exit", true) => ShellCommand::Quit,
            _ => ShellCommand::Unknown(line.to_string()),
        }
    }
}

/// Interactive session: one view, many actions
pub async fn run_shell(config: &Config) -> Result<ActionOutcome> {
    let (mut view, _) = mount(config).await?;
    print!("{}", view.render());
    println!("Type 'help' for commands.");

    while let Some(line) = read_line("keys> ")? {
        match ShellCommand::parse(&line) {
            ShellCommand::Quit => break,
            ShellCommand::Empty => continue,
            ShellCommand::Help => print!("{HELP}"),
            ShellCommand::Unknown(input) => println!("Unknown command: {input}"),
            command => {
                if dispatch(&mut view, command).await? {
                    print!("{}", view.render());
                }
            }
        }
    }

    Ok(ActionOutcome::Completed)
}

/// Run one list-changing command. Returns whether the list should be redrawn.
async fn dispatch(view: &mut KeyListView, command: ShellCommand) -> Result<bool> {
    let redraw = match command {
        ShellCommand::List => {
            view.fetch_keys().await;
            true
        }
        ShellCommand::New => {
            view.open_create_form();
            let prompt = if view.key_name().is_empty() {
                "Key Name (e.g., Production Key): ".to_string()
            } else {
                format!("Key Name [{}]: ", view.key_name())
            };
            let entered = read_line(&prompt)?;
            let name = form_name(view.key_name(), entered);
            submit_create(view, name).await;
            true
        }
        ShellCommand::Create(name) => {
            view.open_create_form();
            submit_create(view, name).await;
            true
        }
        ShellCommand::Cancel => {
            view.close_create_form();
            true
        }
        ShellCommand::Delete(id) => {
            view.handle_delete(&id, &PromptConfirmer).await == ActionOutcome::Completed
        }
        ShellCommand::Toggle(id) => view.handle_toggle(&id).await == ActionOutcome::Completed,
        ShellCommand::Copy(id) => {
            view.copy_key(&id).await;
            false
        }
        _ => false,
    };
    Ok(redraw)
}

/// Name to submit from the `new` prompt. An empty answer or end of input
/// keeps what is already in the form.
fn form_name(current: &str, entered: Option<String>) -> String {
    match entered {
        Some(name) if !name.is_empty() => name,
        _ => current.to_string(),
    }
}

/// Submit the create form. Only a successful create closes it; otherwise
/// it stays open with its input until resubmitted or cancelled.
async fn submit_create(view: &mut KeyListView, name: String) -> ActionOutcome {
    view.set_key_name(name);
    let outcome = view.handle_create().await;
    if outcome == ActionOutcome::Rejected {
        println!("Key name is required");
    }
    outcome
}
