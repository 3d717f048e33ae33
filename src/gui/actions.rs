// src/gui/actions.rs
//
// Button actions. Layout lives in the components; the work lives here.

use eframe::egui;

use crate::config::options::ExportFormat;
use crate::config::state::GuiState;
use crate::csv::to_export_string;
use crate::gui::app::App;
use crate::table_model;

/// Filtered table as TSV (pastes cleanly into spreadsheets).
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.view.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let headers = table_model::headers();
    let rows = table_model::export_rows(app.listings(), &app.view);
    let txt = to_export_string(Some(headers.as_slice()), &rows, ExportFormat::Tsv.delim());
    ui_ctx.copy_text(txt);

    logf!("Copy: rows={}", rows.len());
    app.status(format!("Copied {} row(s) to clipboard", rows.len()));
}

/// Re-read the store, like refreshing the page.
pub fn reload(app: &mut App) {
    logf!("UI: Reload");
    app.reload();
}

/// Back to the defaults for the loaded data (text filters included).
pub fn reset_filters(app: &mut App) {
    logf!("UI: Reset filters");
    app.state.gui = GuiState::for_listings(app.listings());
    app.rebuild_view();
}
