// src/gui/components/summary_strip.rs
//
// Three headline numbers plus the Copy / Reload actions.

use eframe::egui::{self, RichText};

use crate::core::format::{currency, thousands};
use crate::gui::{actions, app::App};

fn metric(ui: &mut egui::Ui, label: &str, value: String) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).weak());
        ui.label(RichText::new(value).size(24.0).strong());
    });
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let v = &app.view;
    let total = format!("{} listings", thousands(v.total_count as u64));
    let matched = format!("{} listings", thousands(v.filtered_count as u64));
    let average = currency(v.average_price);

    ui.columns(3, |cols| {
        metric(&mut cols[0], "Listings in store", total);
        metric(&mut cols[1], "Matching", matched);
        metric(&mut cols[2], "Average price", average);
    });

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }
        if ui.button("Reload").clicked() {
            actions::reload(app);
        }
        ui.label(format!("Status: {}", app.status));
    });
}
