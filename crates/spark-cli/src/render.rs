//! Terminal rendering of shell snapshots.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use spark_app::presenter::HistoryState;
use spark_app::state::{Lot, SlotRect};
use spark_app::validation::{Field, ValidationResult};
use spark_app::{Route, RouteGroup, ScreenSnapshot, ViewSnapshot};

/// Back-stack, bottom first, as `landing > login`.
pub fn format_back_stack(routes: &[Route]) -> String {
    routes
        .iter()
        .map(Route::id)
        .collect::<Vec<_>>()
        .join(" > ")
}

/// One walkthrough step: label, back-stack and what is on screen.
pub fn format_step(label: &str, view: &ViewSnapshot) -> String {
    let mut line = format!("{label:<18} [{}]", format_back_stack(&view.back_stack));
    if let Some(drawer) = &view.drawer {
        line.push_str(&format!(" drawer={}", drawer.selected.id()));
    }
    if let Some(note) = screen_note(&view.screen) {
        line.push_str(&format!(" ({note})"));
    }
    line
}

fn screen_note(screen: &ScreenSnapshot) -> Option<String> {
    match screen {
        ScreenSnapshot::Login(login) => login.error_message.clone(),
        ScreenSnapshot::LiveParking(live) => live.lots.first().map(lot_summary),
        ScreenSnapshot::History(history) if !history.loading => {
            Some(format!("{} entries", history.items.len()))
        }
        ScreenSnapshot::Transitioning(route) => Some(format!("opening {}", route.id())),
        _ => None,
    }
}

/// `name: used/total used, free free`.
pub fn lot_summary(lot: &Lot) -> String {
    format!(
        "{}: {}/{} used, {} free",
        lot.name,
        lot.used(),
        lot.total(),
        lot.free()
    )
}

/// Validator verdict for the `validate` command.
pub fn format_validation(field: Field, value: &str, result: &ValidationResult) -> String {
    if result.is_valid() {
        format!("{field} {value:?}: ok")
    } else {
        format!(
            "{field} {value:?}: invalid ({})",
            result.message().unwrap_or("-")
        )
    }
}

pub fn routes_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Label"),
        header_cell("Group"),
        header_cell("Drawer"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for route in Route::all() {
        let drawer = match route.drawer_item() {
            Some(item) => Cell::new(item.label),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(route.id()).add_attribute(Attribute::Bold),
            Cell::new(route.label()),
            group_cell(route.group()),
            drawer,
        ]);
    }
    table
}

pub fn slots_table(lot: &Lot) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Slot"),
        header_cell("x %"),
        header_cell("y %"),
        header_cell("Size %"),
        header_cell("State"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for slot in &lot.slots {
        table.add_row(vec![
            slot_id_cell(slot),
            Cell::new(format!("{:.1}", slot.x_pct * 100.0)),
            Cell::new(format!("{:.1}", slot.y_pct * 100.0)),
            Cell::new(format!(
                "{:.1} x {:.1}",
                slot.w_pct * 100.0,
                slot.h_pct * 100.0
            )),
            occupancy_cell(slot.occupied),
        ]);
    }
    table
}

pub fn history_table(history: &HistoryState) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Time"),
        header_cell("Location"),
    ]);
    apply_summary_table_style(&mut table);
    for item in &history.items {
        table.add_row(vec![
            Cell::new(&item.date),
            Cell::new(&item.time),
            Cell::new(&item.location),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn group_cell(group: RouteGroup) -> Cell {
    match group {
        RouteGroup::Public => Cell::new("public").fg(Color::Green),
        RouteGroup::Private => Cell::new("private").fg(Color::Yellow),
    }
}

fn slot_id_cell(slot: &SlotRect) -> Cell {
    if slot.accessible {
        Cell::new(format!("{} (accessible)", slot.id)).fg(Color::Blue)
    } else {
        Cell::new(&slot.id)
    }
}

fn occupancy_cell(occupied: bool) -> Cell {
    if occupied {
        Cell::new("used").fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new("free").fg(Color::Green)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
