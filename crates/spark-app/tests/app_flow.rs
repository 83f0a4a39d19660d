//! Session flows through the shell: messages in, view snapshots out.

use std::sync::Arc;
use std::time::Duration;

use spark_app::message::{
    DrawerMessage, HistoryMessage, LandingMessage, LiveParkingMessage, LoginMessage,
    LogoutMessage, ResetPasswordMessage, SignUpMessage,
};
use spark_app::presenter::LoadState;
use spark_app::service::fixtures::PARKING_STATUS;
use spark_app::service::{InstantDelay, Services, TokioDelay};
use spark_app::{App, Message, Route, ScreenSnapshot, Settings};

fn instant_app(settings: Settings) -> App {
    let services = Services::with_delay(Arc::new(InstantDelay), &settings);
    App::new(services, settings)
}

fn timed_app() -> App {
    let settings = Settings::default();
    let services = Services::with_delay(Arc::new(TokioDelay), &settings);
    App::new(services, settings)
}

fn login(msg: LoginMessage) -> Message {
    Message::Login(msg)
}

fn drawer(msg: DrawerMessage) -> Message {
    Message::Drawer(msg)
}

async fn signed_in(app: &mut App) {
    app.update(Message::Landing(LandingMessage::ContinueClicked));
    app.update(login(LoginMessage::EmailChanged("a@b.com".into())));
    app.update(login(LoginMessage::PasswordChanged("abcdef".into())));
    app.update(login(LoginMessage::SubmitClicked));
    app.settle().await;
}

#[tokio::test]
async fn full_session_walkthrough() {
    let mut app = instant_app(Settings::default());

    let view = app.view();
    assert_eq!(view.route, Route::Landing);
    assert!(view.drawer.is_none());
    assert!(matches!(view.screen, ScreenSnapshot::Landing(_)));

    app.update(Message::Landing(LandingMessage::ContinueClicked));
    assert_eq!(app.view().back_stack, vec![Route::Landing, Route::Login]);

    app.update(login(LoginMessage::EmailChanged("a@b.com".into())));
    app.update(login(LoginMessage::PasswordChanged("abcdef".into())));
    app.update(login(LoginMessage::SubmitClicked));
    app.settle().await;

    let view = app.view();
    assert_eq!(view.back_stack, vec![Route::Home]);
    let home_drawer = view.drawer.expect("drawer on private route");
    assert!(!home_drawer.open);
    assert_eq!(home_drawer.selected, Route::Home);
    assert_eq!(home_drawer.user_name, "Barbara Neanake");
    match view.screen {
        ScreenSnapshot::Home(home) => {
            assert_eq!(home.status, LoadState::Ready(PARKING_STATUS));
            assert_eq!(home.locations.len(), 16);
        }
        other => panic!("expected home, got {other:?}"),
    }

    app.update(drawer(DrawerMessage::OpenRequested));
    assert!(app.view().drawer.is_some_and(|drawer| drawer.open));
    app.update(drawer(DrawerMessage::ItemSelected(Route::LiveParking)));
    assert!(!app.drawer().is_open());
    app.settle().await;

    let view = app.view();
    assert_eq!(view.back_stack, vec![Route::Home, Route::LiveParking]);
    assert_eq!(view.drawer.map(|drawer| drawer.selected), Some(Route::LiveParking));
    match view.screen {
        ScreenSnapshot::LiveParking(live) => {
            assert!(!live.loading);
            assert_eq!(live.lots.len(), 1);
        }
        other => panic!("expected live parking, got {other:?}"),
    }

    app.update(drawer(DrawerMessage::ItemSelected(Route::History)));
    app.settle().await;
    let view = app.view();
    assert_eq!(view.back_stack, vec![Route::Home, Route::History]);
    match view.screen {
        ScreenSnapshot::History(history) => assert_eq!(history.items.len(), 4),
        other => panic!("expected history, got {other:?}"),
    }

    app.update(drawer(DrawerMessage::ItemSelected(Route::Logout)));
    app.settle().await;
    assert_eq!(app.view().back_stack, vec![Route::Home, Route::Logout]);

    app.update(Message::Logout(LogoutMessage::ConfirmClicked));
    app.settle().await;

    let view = app.view();
    assert_eq!(view.route, Route::Login);
    assert_eq!(
        view.back_stack,
        vec![Route::Home, Route::Logout, Route::Login]
    );
    assert!(view.drawer.is_none());
    match view.screen {
        ScreenSnapshot::Login(state) => {
            assert!(state.email.is_empty());
            assert!(!state.is_logged_in);
        }
        other => panic!("expected a fresh login, got {other:?}"),
    }
}

#[tokio::test]
async fn back_stops_at_home_after_login() {
    let mut app = instant_app(Settings::default());
    signed_in(&mut app).await;

    app.update(Message::Back);
    assert_eq!(app.view().back_stack, vec![Route::Home]);
}

#[tokio::test]
async fn back_closes_open_drawer_first() {
    let mut app = instant_app(Settings::default());
    signed_in(&mut app).await;
    app.update(drawer(DrawerMessage::ItemSelected(Route::Information)));
    app.settle().await;

    app.update(drawer(DrawerMessage::OpenRequested));
    app.update(Message::Back);
    assert!(!app.drawer().is_open());
    assert_eq!(app.view().route, Route::Information);

    app.update(Message::Back);
    assert_eq!(app.view().route, Route::Home);
}

#[tokio::test]
async fn drawer_stays_shut_on_public_routes() {
    let mut app = instant_app(Settings::default());
    app.update(Message::Landing(LandingMessage::ContinueClicked));
    app.update(drawer(DrawerMessage::OpenRequested));

    assert!(!app.drawer().is_open());
    assert!(app.view().drawer.is_none());
}

#[tokio::test]
async fn demo_mode_signs_in_without_waiting() {
    let mut settings = Settings::default();
    settings.general.demo_direct_login = true;
    let mut app = instant_app(settings);

    app.update(Message::Landing(LandingMessage::ContinueClicked));
    app.update(login(LoginMessage::SubmitClicked));

    assert_eq!(app.view().back_stack, vec![Route::Home]);
}

#[tokio::test]
async fn rejected_login_stays_on_login() {
    let mut app = instant_app(Settings::default());
    app.update(Message::Landing(LandingMessage::ContinueClicked));
    app.update(login(LoginMessage::EmailChanged("not-an-email".into())));
    app.update(login(LoginMessage::SubmitClicked));
    app.settle().await;

    let view = app.view();
    assert_eq!(view.route, Route::Login);
    match view.screen {
        ScreenSnapshot::Login(state) => {
            assert_eq!(state.error_message.as_deref(), Some("Email tidak valid."));
        }
        other => panic!("expected login, got {other:?}"),
    }
}

#[tokio::test]
async fn registration_enters_private_routes() {
    let mut app = instant_app(Settings::default());
    app.update(Message::Landing(LandingMessage::ContinueClicked));
    app.update(login(LoginMessage::SignUpClicked));
    assert_eq!(app.view().route, Route::SignUp);

    for msg in [
        SignUpMessage::NameChanged("Barbara Neanake".into()),
        SignUpMessage::EmailChanged("barbara@ugm.ac.id".into()),
        SignUpMessage::LicensePlateChanged("ab 1234 cd".into()),
        SignUpMessage::PhoneChanged("8123456789".into()),
        SignUpMessage::PasswordChanged("rahasia".into()),
        SignUpMessage::ConfirmPasswordChanged("rahasia".into()),
        SignUpMessage::SubmitClicked,
    ] {
        app.update(Message::SignUp(msg));
    }
    app.settle().await;

    assert_eq!(app.view().back_stack, vec![Route::Home]);
}

#[tokio::test]
async fn password_reset_returns_to_login() {
    let mut app = instant_app(Settings::default());
    app.update(Message::Landing(LandingMessage::ContinueClicked));
    app.update(login(LoginMessage::ForgotPasswordClicked));
    assert_eq!(app.view().route, Route::EditPass);

    for msg in [
        ResetPasswordMessage::EmailChanged("a@b.com".into()),
        ResetPasswordMessage::NewPasswordChanged("abcdef".into()),
        ResetPasswordMessage::ConfirmPasswordChanged("abcdef".into()),
        ResetPasswordMessage::SubmitClicked,
    ] {
        app.update(Message::ResetPassword(msg));
    }
    app.settle().await;

    assert_eq!(app.view().back_stack, vec![Route::Landing, Route::Login]);
}

#[tokio::test]
async fn logout_cancel_goes_back() {
    let mut app = instant_app(Settings::default());
    signed_in(&mut app).await;
    app.update(drawer(DrawerMessage::ItemSelected(Route::Logout)));
    app.settle().await;

    app.update(Message::Logout(LogoutMessage::CancelClicked));
    assert_eq!(app.view().back_stack, vec![Route::Home]);
}

#[tokio::test]
async fn live_refresh_through_the_shell() {
    let mut app = instant_app(Settings::default());
    signed_in(&mut app).await;
    app.update(drawer(DrawerMessage::ItemSelected(Route::LiveParking)));
    app.settle().await;

    app.update(Message::LiveParking(LiveParkingMessage::RefreshClicked));
    match app.view().screen {
        ScreenSnapshot::LiveParking(live) => assert_eq!(live.lots[0].used(), 5),
        other => panic!("expected live parking, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn unmounting_a_screen_cancels_its_submit() {
    let mut app = timed_app();
    app.update(Message::Landing(LandingMessage::ContinueClicked));
    app.update(login(LoginMessage::EmailChanged("a@b.com".into())));
    app.update(login(LoginMessage::PasswordChanged("abcdef".into())));
    app.update(login(LoginMessage::SubmitClicked));
    assert_eq!(app.screen_tasks_in_flight(), 1);

    app.update(Message::Back);
    assert_eq!(app.view().route, Route::Landing);
    assert_eq!(app.screen_tasks_in_flight(), 0);

    tokio::time::sleep(Duration::from_secs(1)).await;
    app.settle().await;
    assert_eq!(app.view().back_stack, vec![Route::Landing]);
}

#[tokio::test(start_paused = true)]
async fn leaving_history_cancels_its_load() {
    let mut app = timed_app();
    signed_in(&mut app).await;

    app.update(drawer(DrawerMessage::ItemSelected(Route::History)));
    // Drawer close delay, then History mounts and starts loading.
    while app.view().route != Route::History {
        assert!(app.step().await);
    }
    assert_eq!(app.screen_tasks_in_flight(), 1);
    assert!(matches!(
        app.view().screen,
        ScreenSnapshot::History(ref history) if history.loading
    ));

    // The mount load is still running, so the reload starts nothing.
    app.update(Message::History(HistoryMessage::ReloadClicked));
    assert_eq!(app.screen_tasks_in_flight(), 1);

    app.update(Message::Back);
    assert_eq!(app.view().route, Route::Home);
    assert_eq!(app.screen_tasks_in_flight(), 0);
    app.settle().await;
}

#[tokio::test(start_paused = true)]
async fn reloads_during_a_fetch_start_nothing() {
    let mut app = timed_app();
    signed_in(&mut app).await;

    app.update(drawer(DrawerMessage::ItemSelected(Route::LiveParking)));
    while app.view().route != Route::LiveParking {
        assert!(app.step().await);
    }
    assert_eq!(app.screen_tasks_in_flight(), 1);

    for _ in 0..3 {
        app.update(Message::LiveParking(LiveParkingMessage::ReloadClicked));
    }
    assert_eq!(app.screen_tasks_in_flight(), 1);

    app.settle().await;
    assert_eq!(app.screen_tasks_in_flight(), 0);
    match app.view().screen {
        ScreenSnapshot::LiveParking(live) => {
            assert!(!live.loading);
            assert_eq!(live.lots.len(), 1);
        }
        other => panic!("expected live parking, got {other:?}"),
    }

    // Finished fetches release the slot.
    app.update(Message::LiveParking(LiveParkingMessage::ReloadClicked));
    assert_eq!(app.screen_tasks_in_flight(), 1);
    app.settle().await;
}

#[tokio::test]
async fn drawer_item_ignored_on_public_route() {
    let mut app = instant_app(Settings::default());
    app.update(Message::Landing(LandingMessage::ContinueClicked));

    app.update(drawer(DrawerMessage::ItemSelected(Route::Home)));
    app.settle().await;

    assert_eq!(app.view().back_stack, vec![Route::Landing, Route::Login]);
    assert_eq!(app.view().route, Route::Login);
}

#[tokio::test]
async fn covered_login_ignores_submit() {
    let mut app = instant_app(Settings::default());
    app.update(Message::Landing(LandingMessage::ContinueClicked));
    app.update(login(LoginMessage::EmailChanged("a@b.com".into())));
    app.update(login(LoginMessage::PasswordChanged("abcdef".into())));
    app.update(login(LoginMessage::SignUpClicked));
    assert_eq!(app.view().route, Route::SignUp);

    app.update(login(LoginMessage::SubmitClicked));
    assert_eq!(app.screen_tasks_in_flight(), 0);
    app.settle().await;

    assert_eq!(
        app.view().back_stack,
        vec![Route::Landing, Route::Login, Route::SignUp]
    );
}

#[tokio::test(start_paused = true)]
async fn shutdown_aborts_everything() {
    let mut app = timed_app();
    signed_in(&mut app).await;
    app.update(drawer(DrawerMessage::ItemSelected(Route::LiveParking)));

    app.shutdown();
    app.settle().await;
    assert_eq!(app.screen_tasks_in_flight(), 0);
}
