// src/gui/components/data_table.rs
//
// Draws the filtered listings. Purely a view over `app.listings` + `app.view`.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::core::format::currency;
use crate::gui::app::App;
use crate::store::Listing;
use crate::table_model::{Column, COLUMNS};

const ROW_H: f32 = 20.0;

/// "Latest listings" plus whichever text filters are active.
pub fn table_title(keyword: &str, seller: &str) -> String {
    let mut title = s!("Latest listings");
    if !keyword.is_empty() {
        title.push_str(&join!(" | keyword: ", keyword));
    }
    if !seller.is_empty() {
        title.push_str(&join!(" | seller: ", seller));
    }
    title
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.label(RichText::new(table_title(&app.state.gui.keyword, &app.state.gui.seller)).strong().size(16.0));
    ui.add_space(4.0);

    if app.view.is_empty() {
        ui.colored_label(
            ui.visuals().warn_fg_color,
            "No listings match. Try widening the date or price range, or clearing the keyword.",
        );
        return;
    }

    // Scroll bars take space instead of floating over the last column
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let listings = app.listings();
    let row_ix = &app.view.row_ix;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .min_scrolled_height(0.0);
    for col in COLUMNS {
        table = table.column(TableColumn::initial(col.preferred_width()).at_least(40.0).clip(true));
    }

    table
        .header(24.0, |mut header| {
            for col in COLUMNS {
                header.col(|ui| {
                    ui.strong(col.header());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, row_ix.len(), |mut row| {
                let Some(l) = row_ix.get(row.index()).and_then(|&ix| listings.get(ix)) else {
                    return;
                };
                for col in COLUMNS {
                    row.col(|ui| cell(ui, col, l));
                }
            });
        });
}

fn cell(ui: &mut egui::Ui, col: Column, l: &Listing) {
    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
    match col {
        Column::Price => {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(currency(l.price));
            });
        }
        Column::Link => {
            if !l.link.is_empty() {
                ui.hyperlink_to("View post", &l.link).on_hover_text(&l.link);
            }
        }
        Column::Title => {
            ui.label(&l.title).on_hover_text(&l.title);
        }
        _ => {
            ui.label(col.export_cell(l));
        }
    }
}
