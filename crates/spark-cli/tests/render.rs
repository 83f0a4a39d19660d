//! Rendering of shell snapshots and the scripted walkthrough.

use std::sync::Arc;

use spark_app::presenter::HistoryState;
use spark_app::service::{InstantDelay, Services, fixtures};
use spark_app::validation::{Field, validate_email, validate_phone};
use spark_app::{App, Route, Settings};
use spark_cli::render::{
    format_back_stack, format_validation, history_table, lot_summary, routes_table, slots_table,
};
use spark_cli::script::walkthrough;

fn instant_app(settings: Settings) -> App {
    let services = Services::with_delay(Arc::new(InstantDelay), &settings);
    App::new(services, settings)
}

#[test]
fn back_stack_reads_bottom_first() {
    insta::assert_snapshot!(
        format_back_stack(&[Route::Home, Route::Logout, Route::Login]),
        @"home > logout > login"
    );
}

#[test]
fn lot_summary_counts_slots() {
    insta::assert_snapshot!(
        lot_summary(&fixtures::main_entrance_lot()),
        @"Akses Utama FT UGM: 2/7 used, 5 free"
    );
}

#[test]
fn validation_lines() {
    insta::assert_snapshot!(
        format_validation(Field::Email, "a@b.com", &validate_email("a@b.com")),
        @r#"email "a@b.com": ok"#
    );
    insta::assert_snapshot!(
        format_validation(Field::Phone, "0812", &validate_phone("0812")),
        @r#"phone "0812": invalid (Kode negara wajib, contoh +62)"#
    );
}

#[test]
fn routes_table_lists_every_route() {
    let rendered = routes_table().to_string();
    for route in Route::all() {
        assert!(rendered.contains(route.id()), "missing {route}");
    }
    assert!(rendered.contains("Live Parking Map"));
}

#[test]
fn slots_table_marks_accessible_slot() {
    let rendered = slots_table(&fixtures::main_entrance_lot()).to_string();
    assert!(rendered.contains("D1 (accessible)"));
    assert_eq!(rendered.matches("used").count(), 2);
}

#[test]
fn history_table_lists_entries() {
    let record = fixtures::history();
    let state = HistoryState {
        loading: false,
        name: record.name,
        items: record.items,
        error: None,
    };
    let rendered = history_table(&state).to_string();
    assert!(rendered.contains("B3 DTETI FT UGM"));
    assert!(rendered.contains("DTMI Bawah"));
}

#[tokio::test]
async fn walkthrough_prints_every_step() {
    let mut app = instant_app(Settings::default());
    let steps = walkthrough(&mut app, "a@b.com", "abcdef").await.unwrap();

    insta::assert_snapshot!(steps.join("\n"), @r"
    start              [landing]
    continue           [landing > login]
    login              [home] drawer=home
    drawer live_parking [home > live_parking] drawer=live_parking (Akses Utama FT UGM: 2/7 used, 5 free)
    drawer history     [home > history] drawer=history (4 entries)
    drawer logout      [home > logout] drawer=logout
    logout             [home > logout > login]
    ");
}

#[tokio::test]
async fn walkthrough_stops_on_rejected_login() {
    let mut app = instant_app(Settings::default());
    let error = walkthrough(&mut app, "a@b.com", "abc").await.unwrap_err();

    assert_eq!(
        error.to_string(),
        "login did not reach home [landing > login]: Password minimal 6 karakter."
    );
}

#[tokio::test]
async fn demo_walkthrough_ignores_credentials() {
    let mut settings = Settings::default();
    settings.general.demo_direct_login = true;
    let mut app = instant_app(settings);

    let steps = walkthrough(&mut app, "", "").await.unwrap();
    assert_eq!(steps.len(), 7);
    assert!(steps[2].contains("[home]"));
}
