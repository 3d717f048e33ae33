// src/gui/components/filter_panel.rs
//
// Left panel: every filter input. Edits `app.state.gui` in place; the app
// notices the criteria changed and rebuilds the view.

use eframe::egui::{self, TextEdit};
use egui_extras::DatePickerButton;

use crate::config::consts::{PRICE_CAP, PRICE_STEP};
use crate::core::format::currency;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");
    ui.separator();

    let g = &mut app.state.gui;

    ui.label("Keyword (product or title)");
    ui.add(TextEdit::singleline(&mut g.keyword).hint_text("e.g. Macallan, 12 year"));

    ui.add_space(6.0);
    ui.label("Seller account");
    ui.add(TextEdit::singleline(&mut g.seller).hint_text("seller id"));

    ui.separator();

    if let Some((lo, hi)) = g.date_bounds {
        ui.checkbox(&mut g.date_filter_on, "Post date range");
        ui.add_enabled_ui(g.date_filter_on, |ui| {
            egui::Grid::new("date_range_grid").num_columns(2).show(ui, |ui| {
                ui.label("From");
                ui.add(DatePickerButton::new(&mut g.date_from).id_salt("date_from"));
                ui.end_row();
                ui.label("To");
                ui.add(DatePickerButton::new(&mut g.date_to).id_salt("date_to"));
                ui.end_row();
            });
        });
        ui.small(format!("Data covers {lo} to {hi}"));
        ui.separator();
    }

    if g.has_rows {
        ui.label("Price range");
        let track = 0..=g.price_ceiling;
        ui.add(egui::Slider::new(&mut g.price_min, track.clone()).step_by(PRICE_STEP).text("min"));
        ui.add(egui::Slider::new(&mut g.price_max, track).step_by(PRICE_STEP).text("max"));
        if g.price_ceiling > PRICE_CAP && g.price_max <= PRICE_CAP {
            ui.small(format!("Listings above {} are hidden until max is raised", currency(PRICE_CAP)));
        }
        ui.separator();
    }

    g.normalize();

    if ui.button("Reset filters").clicked() {
        actions::reset_filters(app);
    }
}
