//! Interactive terminal form for the passenger list.
//!
//! # Responsibility
//! - Render the list and drive `PassengerService` from menu selections.
//! - Map core notices to terminal output; nothing here holds business rules.

use anyhow::Result;
use clap::Parser;
use paxlist_core::{
    default_log_level, init_logging, ConfirmPrompt, NoFileShare, PassengerRecord,
    PassengerService, SaveOutcome,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "paxlist")]
#[command(version)]
#[command(about = "Passenger list with CPF validation and CSV export", long_about = None)]
struct Cli {
    /// Directory where the exported passageiros.csv is written
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Submit,
    Edit,
    Delete,
    CancelEdit,
    Download,
    Share,
    Clear,
    Quit,
}

impl MenuAction {
    fn label(self, service: &PassengerService) -> String {
        match self {
            Self::Submit => service.submit_label().to_string(),
            Self::Edit => "Edit passenger".to_string(),
            Self::Delete => "Delete passenger".to_string(),
            Self::CancelEdit => "Cancel editing".to_string(),
            Self::Download => "Generate CSV".to_string(),
            Self::Share => "Share CSV".to_string(),
            Self::Clear => "Clear list".to_string(),
            Self::Quit => "Quit".to_string(),
        }
    }
}

/// Terminal yes/no prompt backing `PassengerService::clear`.
struct TerminalConfirm;

impl ConfirmPrompt for TerminalConfirm {
    fn confirm(&self, message: &str) -> bool {
        dialoguer::Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    let log_dir = cli
        .log_dir
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("paxlist-logs"));
    if let Err(err) = init_logging(&level, &log_dir.to_string_lossy()) {
        eprintln!("warning: logging disabled: {err}");
    }

    let mut service = PassengerService::in_memory();
    loop {
        print_list(&service);

        let actions = menu_actions(&service);
        let labels = actions
            .iter()
            .map(|action| action.label(&service))
            .collect::<Vec<_>>();
        let selection = dialoguer::Select::new()
            .with_prompt("Passenger list")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[selection] {
            MenuAction::Submit => submit(&mut service)?,
            MenuAction::Edit => {
                if let Some(id) = pick_passenger(&service, "Edit which passenger?")? {
                    service.begin_edit(id);
                    submit(&mut service)?;
                }
            }
            MenuAction::Delete => {
                if let Some(id) = pick_passenger(&service, "Delete which passenger?")? {
                    service.remove(id);
                }
            }
            MenuAction::CancelEdit => service.cancel_edit(),
            MenuAction::Download => match service.download_to(&cli.output_dir) {
                Ok(path) => println!("Saved {}", path.display()),
                Err(paxlist_core::ExportError::EmptyList) => {}
                Err(err) => println!("{}", err.notice()),
            },
            MenuAction::Share => match service.share_with(&NoFileShare) {
                Ok(()) | Err(paxlist_core::ExportError::EmptyList) => {}
                Err(err) => println!("{}", err.notice()),
            },
            MenuAction::Clear => {
                service.clear(&TerminalConfirm);
            }
            MenuAction::Quit => return Ok(()),
        }
    }
}

/// Prompts for both inputs, prefilled from the form, and saves them.
fn submit(service: &mut PassengerService) -> Result<()> {
    let name: String = dialoguer::Input::new()
        .with_prompt("Passenger name")
        .with_initial_text(service.form().name_input.clone())
        .allow_empty(true)
        .interact_text()?;
    let identifier: String = dialoguer::Input::new()
        .with_prompt("CPF (numbers only)")
        .with_initial_text(service.form().identifier_input.clone())
        .allow_empty(true)
        .interact_text()?;

    match service.save(name, identifier) {
        Ok(SaveOutcome::Created(_)) => println!("Passenger added."),
        Ok(SaveOutcome::Updated(_)) => println!("Changes saved."),
        Err(err) => println!("{}", err.notice()),
    }
    Ok(())
}

fn pick_passenger(service: &PassengerService, prompt: &str) -> Result<Option<u64>> {
    let records = service.records();
    if records.is_empty() {
        return Ok(None);
    }

    let labels = records.iter().map(card_line).collect::<Vec<_>>();
    let selection = dialoguer::Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(selection.map(|index| records[index].id))
}

fn menu_actions(service: &PassengerService) -> Vec<MenuAction> {
    let mut actions = vec![MenuAction::Submit];
    if service.is_editing() {
        actions.push(MenuAction::CancelEdit);
    }
    if !service.records().is_empty() {
        actions.extend([
            MenuAction::Edit,
            MenuAction::Delete,
            MenuAction::Download,
            MenuAction::Share,
            MenuAction::Clear,
        ]);
    }
    actions.push(MenuAction::Quit);
    actions
}

fn card_line(record: &PassengerRecord) -> String {
    format!("{} (CPF: {})", record.name, record.display_identifier())
}

fn print_list(service: &PassengerService) {
    println!();
    println!("Passenger list ({})", service.records().len());
    for record in service.records() {
        println!("  {}", card_line(record));
    }
}
