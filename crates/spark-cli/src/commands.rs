use anyhow::{Result, bail};
use tracing::{Instrument, info_span};

use spark_app::presenter::{HistoryPresenter, LiveParkingPresenter};
use spark_app::validation::{
    Field, validate_birth_date, validate_email, validate_name, validate_password, validate_phone,
    validate_plate,
};
use spark_app::{App, Services, Settings};
use spark_cli::render::{format_validation, history_table, lot_summary, routes_table, slots_table};
use spark_cli::script::walkthrough;

use crate::cli::{LiveArgs, ValidateArgs, ValidateKind, WalkthroughArgs};

pub fn run_routes() -> Result<()> {
    println!("{}", routes_table());
    Ok(())
}

pub async fn run_walkthrough(args: &WalkthroughArgs, settings: Settings) -> Result<()> {
    let span = info_span!("walkthrough", demo = settings.general.demo_direct_login);
    let services = Services::fake(&settings);
    let mut app = App::new(services, settings);
    let steps = walkthrough(&mut app, &args.email, &args.password)
        .instrument(span)
        .await;
    app.shutdown();
    for step in steps? {
        println!("{step}");
    }
    Ok(())
}

pub async fn run_live(args: &LiveArgs, settings: &Settings) -> Result<()> {
    let live = LiveParkingPresenter::new(Services::fake(settings).parking);
    live.load().await;
    for _ in 0..args.refresh {
        live.refresh();
    }

    let state = live.state();
    if let Some(error) = state.error {
        bail!("live parking failed: {error}");
    }
    for lot in &state.lots {
        println!("{}", lot_summary(lot));
        println!("{}", slots_table(lot));
    }
    Ok(())
}

pub async fn run_history(settings: &Settings) -> Result<()> {
    let history = HistoryPresenter::new(Services::fake(settings).parking, &settings.profile.name);
    history.load().await;

    let state = history.state();
    if let Some(error) = &state.error {
        bail!("history failed: {error}");
    }
    println!("History: {}", state.name);
    println!("{}", history_table(&state));
    Ok(())
}

/// Returns whether the value passed.
pub fn run_validate(args: &ValidateArgs) -> bool {
    let value = args.value.as_str();
    let (field, result) = match args.kind {
        ValidateKind::Email => (Field::Email, validate_email(value)),
        ValidateKind::Password => (Field::Password, validate_password(value)),
        ValidateKind::Plate => (Field::LicensePlate, validate_plate(value)),
        ValidateKind::Phone => (Field::Phone, validate_phone(value)),
        ValidateKind::Name => (Field::Name, validate_name(value)),
        ValidateKind::BirthDate => (Field::BirthDate, validate_birth_date(value)),
    };
    println!("{}", format_validation(field, value, &result));
    result.is_valid()
}
