//! Interactive line editor for the bon and prescription pages.

use anyhow::Result;
use clap::ValueEnum;
use client_core::{
    controller::{
        bon::bon_message,
        events::{UiError, UiErrorContext},
        prescriptions::prescription_message,
    },
    ApiClient, BonController, LineRows, PrescriptionController, RowField, RowId,
};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};

use crate::render;

const HELP: &str = "\
commands:
  add [ITEM] [QTY]        append a row
  set ROW item|qty VALUE  edit a row
  rm ROW                  remove a row
  list                    show rows
  patient NAME            prescription only
  doctor NAME             prescription only
  send                    submit the form
  quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormKind {
    Bon,
    Prescription,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Add { item_id: String, qty: String },
    Set { row: RowId, field: RowField, value: String },
    Remove(RowId),
    List,
    Patient(String),
    Doctor(String),
    Send,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<FormCommand, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err("empty command".to_string());
    };
    let rest: Vec<&str> = words.collect();

    match verb {
        "add" => Ok(FormCommand::Add {
            item_id: rest.first().copied().unwrap_or_default().to_string(),
            qty: rest.get(1).copied().unwrap_or_default().to_string(),
        }),
        "set" => {
            let [row, field, value @ ..] = rest.as_slice() else {
                return Err("usage: set ROW item|qty VALUE".to_string());
            };
            let field = match *field {
                "item" | "item_id" => RowField::ItemId,
                "qty" => RowField::Qty,
                other => return Err(format!("unknown field '{other}'")),
            };
            Ok(FormCommand::Set {
                row: parse_row(row)?,
                field,
                value: value.join(" "),
            })
        }
        "rm" | "x" => {
            let row = rest.first().ok_or("usage: rm ROW")?;
            Ok(FormCommand::Remove(parse_row(row)?))
        }
        "list" | "ls" => Ok(FormCommand::List),
        "patient" => Ok(FormCommand::Patient(rest.join(" "))),
        "doctor" => Ok(FormCommand::Doctor(rest.join(" "))),
        "send" => Ok(FormCommand::Send),
        "help" | "?" => Ok(FormCommand::Help),
        "quit" | "exit" => Ok(FormCommand::Quit),
        other => Err(format!("unknown command '{other}' (try 'help')")),
    }
}

fn parse_row(raw: &str) -> Result<RowId, String> {
    raw.trim_start_matches('#')
        .parse::<u32>()
        .map(RowId)
        .map_err(|_| format!("invalid row '{raw}'"))
}

enum Form {
    Bon(BonController),
    Prescription(PrescriptionController),
}

impl Form {
    fn rows(&self) -> &LineRows {
        match self {
            Form::Bon(bon) => bon.rows(),
            Form::Prescription(prescription) => prescription.rows(),
        }
    }

    fn rows_mut(&mut self) -> &mut LineRows {
        match self {
            Form::Bon(bon) => bon.rows_mut(),
            Form::Prescription(prescription) => prescription.rows_mut(),
        }
    }

    async fn send(&self) -> Result<String, UiError> {
        match self {
            Form::Bon(bon) => bon
                .submit()
                .await
                .map(|outcome| bon_message(&outcome))
                .map_err(|err| UiError::from_client_error(UiErrorContext::Bon, &err)),
            Form::Prescription(prescription) => prescription
                .submit()
                .await
                .map(|outcome| prescription_message(&outcome))
                .map_err(|err| UiError::from_client_error(UiErrorContext::Prescriptions, &err)),
        }
    }
}

pub async fn run_form(kind: FormKind, api: ApiClient) -> Result<()> {
    let mut form = match kind {
        FormKind::Bon => Form::Bon(BonController::new(api)),
        FormKind::Prescription => Form::Prescription(PrescriptionController::new(api)),
    };
    println!("{HELP}");

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            FormCommand::Add { item_id, qty } => {
                let row = form.rows_mut().add_row(item_id, qty);
                println!("added row #{}", row.0);
            }
            FormCommand::Set { row, field, value } => {
                if !form.rows_mut().set(row, field, value) {
                    println!("no row #{}", row.0);
                }
            }
            FormCommand::Remove(row) => {
                if !form.rows_mut().remove(row) {
                    println!("no row #{}", row.0);
                }
            }
            FormCommand::List => render::print_rows(form.rows()),
            FormCommand::Patient(name) => match &mut form {
                Form::Prescription(prescription) => prescription.patient_name = name,
                Form::Bon(_) => println!("a bon has no patient"),
            },
            FormCommand::Doctor(name) => match &mut form {
                Form::Prescription(prescription) => prescription.doctor_name = name,
                Form::Bon(_) => println!("a bon has no doctor"),
            },
            FormCommand::Send => match form.send().await {
                Ok(message) => println!("{message}"),
                Err(err) if err.requires_reauth() => {
                    println!("{err}; sign in again with `pharmacis login`");
                    break;
                }
                Err(err) => println!("{err}"),
            },
            FormCommand::Help => println!("{HELP}"),
            FormCommand::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
