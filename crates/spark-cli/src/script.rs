//! Scripted sessions driven through the shell.

use anyhow::{Result, anyhow};
use tracing::info;

use spark_app::message::{DrawerMessage, LandingMessage, LoginMessage, LogoutMessage};
use spark_app::{App, Message, Route, ScreenSnapshot};

use crate::render::{format_back_stack, format_step};

/// Drawer stops of the walkthrough, in order.
const DRAWER_TOUR: [Route; 3] = [Route::LiveParking, Route::History, Route::Logout];

/// Landing, login, live parking, history, then a confirmed logout.
///
/// Returns one rendered line per step.
///
/// # Errors
///
/// Fails when the login does not reach the dashboard.
pub async fn walkthrough(app: &mut App, email: &str, password: &str) -> Result<Vec<String>> {
    let mut steps = vec![format_step("start", &app.view())];

    app.update(Message::Landing(LandingMessage::ContinueClicked));
    steps.push(format_step("continue", &app.view()));

    app.update(Message::Login(LoginMessage::EmailChanged(email.to_string())));
    app.update(Message::Login(LoginMessage::PasswordChanged(
        password.to_string(),
    )));
    app.update(Message::Login(LoginMessage::SubmitClicked));
    app.settle().await;

    let view = app.view();
    steps.push(format_step("login", &view));
    if view.route != Route::Home {
        let reason = match &view.screen {
            ScreenSnapshot::Login(login) => login.error_message.clone(),
            _ => None,
        };
        return Err(anyhow!(
            "login did not reach home [{}]: {}",
            format_back_stack(&view.back_stack),
            reason.unwrap_or_else(|| "no error reported".to_string())
        ));
    }
    info!("signed in, touring the drawer");

    for route in DRAWER_TOUR {
        app.update(Message::Drawer(DrawerMessage::OpenRequested));
        app.update(Message::Drawer(DrawerMessage::ItemSelected(route)));
        app.settle().await;
        steps.push(format_step(&format!("drawer {}", route.id()), &app.view()));
    }

    app.update(Message::Logout(LogoutMessage::ConfirmClicked));
    app.settle().await;
    steps.push(format_step("logout", &app.view()));

    Ok(steps)
}
