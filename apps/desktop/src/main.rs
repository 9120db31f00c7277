use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use client_core::{
    controller::{
        bon::bon_message,
        events::{UiError, UiErrorContext},
        items::item_message,
        prescriptions::prescription_message,
    },
    ApiClient, BonController, ClientError, DashboardController, FileStore, ItemsController,
    LineRows, LoginController, LoginOutcome, NavigationLog, PrescriptionController, Session,
    StockController,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod form;
mod render;

use config::{load_settings, session_path, validate_api_base};
use form::{run_form, FormKind};

#[derive(Parser, Debug)]
#[command(name = "pharmacis", about = "Pharmacy inventory and prescription client")]
struct Cli {
    /// Overrides the configured API base url.
    #[arg(long, global = true)]
    api_base: Option<String>,
    /// Overrides where the session token is kept.
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Dashboard,
    Stock,
    CreateItem {
        #[arg(long)]
        name: String,
        #[arg(long)]
        dosage: String,
    },
    /// Submit a bon; each line is ITEM:QTY.
    Bon {
        #[arg(long = "line")]
        lines: Vec<String>,
    },
    /// Submit a prescription; each line is ITEM:QTY.
    Prescription {
        #[arg(long)]
        patient: String,
        #[arg(long)]
        doctor: String,
        #[arg(long = "line")]
        lines: Vec<String>,
    },
    /// Edit bon or prescription rows interactively.
    Form { kind: FormKind },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings();
    if let Some(api_base) = cli.api_base.clone() {
        settings.api_base_url = api_base;
    }
    if let Some(session_file) = cli.session_file.clone() {
        settings.session_file = Some(session_file);
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let api_base = validate_api_base(&settings.api_base_url)?;
    let session_file = session_path(&settings)?;
    info!(api_base = %api_base, session_file = %session_file.display(), "starting");

    let navigator = Arc::new(NavigationLog::new());
    let api = ApiClient::new(
        api_base,
        Session::new(FileStore::new(session_file)),
        navigator.clone(),
    );

    let result = run(cli.command, api).await;
    if let Some(page) = navigator.current() {
        println!("-> {page}");
    }
    result
}

async fn run(command: Command, api: ApiClient) -> Result<()> {
    match command {
        Command::Login { email, password } => {
            match LoginController::new(api).submit(&email, &password).await {
                LoginOutcome::LoggedIn => println!("Logged in"),
                LoginOutcome::Rejected(message) => bail!(message),
            }
        }
        Command::Logout => {
            DashboardController::new(api).logout().await;
            println!("Logged out");
        }
        Command::Dashboard => {
            let view = DashboardController::new(api)
                .load()
                .await
                .map_err(|err| ui_error(UiErrorContext::Dashboard, err))?;
            print!("{}", render::dashboard(&view));
        }
        Command::Stock => {
            let lines = StockController::new(api)
                .load_central()
                .await
                .map_err(|err| ui_error(UiErrorContext::Stock, err))?;
            print!("{}", render::stock_table(&lines));
        }
        Command::CreateItem { name, dosage } => {
            let outcome = ItemsController::new(api)
                .create(&name, &dosage)
                .await
                .map_err(|err| ui_error(UiErrorContext::Items, err))?;
            println!("{}", item_message(&outcome));
        }
        Command::Bon { lines } => {
            let mut bon = BonController::new(api);
            fill_rows(bon.rows_mut(), &lines);
            let outcome = bon
                .submit()
                .await
                .map_err(|err| ui_error(UiErrorContext::Bon, err))?;
            println!("{}", bon_message(&outcome));
        }
        Command::Prescription {
            patient,
            doctor,
            lines,
        } => {
            let mut prescription = PrescriptionController::new(api);
            prescription.patient_name = patient;
            prescription.doctor_name = doctor;
            fill_rows(prescription.rows_mut(), &lines);
            let outcome = prescription
                .submit()
                .await
                .map_err(|err| ui_error(UiErrorContext::Prescriptions, err))?;
            println!("{}", prescription_message(&outcome));
        }
        Command::Form { kind } => run_form(kind, api).await?,
    }
    Ok(())
}

/// `ITEM:QTY` pairs become raw rows; a missing half stays empty.
fn fill_rows(rows: &mut LineRows, lines: &[String]) {
    for line in lines {
        let (item_id, qty) = line.split_once(':').unwrap_or((line.as_str(), ""));
        rows.add_row(item_id, qty);
    }
}

fn ui_error(context: UiErrorContext, err: ClientError) -> anyhow::Error {
    let shown = UiError::from_client_error(context, &err);
    anyhow::Error::new(err).context(shown.to_string())
}
