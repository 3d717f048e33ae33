// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{consts::{APP_TITLE, DATA_SOURCE_CAPTION}, options::AppOptions, state::AppState},
    error::LoadFailure,
    filter::{self, FilterCriteria, FilteredResult},
    store::{self, Listing},
};

use super::{actions, components, fonts};

pub fn run(options: eframe::NativeOptions, app_options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| {
            fonts::install_cjk_fallback(&cc.egui_ctx);
            let state = AppState { options: app_options, ..AppState::default() };
            Ok(Box::new(App::new(state)))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth for filter inputs + options (UI thread only)
    pub state: AppState,

    // snapshot from the last load; never mutated in place
    pub listings: Result<Vec<Listing>, LoadFailure>,

    // current view + the criteria it was built from
    pub view: FilteredResult,
    pub applied: FilterCriteria,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut app = Self {
            state,
            listings: Ok(Vec::new()),
            view: FilteredResult::default(),
            applied: FilterCriteria::default(),
            status: s!("Idle"),
        };
        app.reload();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn listings(&self) -> &[Listing] {
        self.listings.as_deref().unwrap_or(&[])
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// One "page load": read the store and rebuild everything derived from it.
    pub fn reload(&mut self) {
        let path = self.state.options.store.path.clone();
        logf!("Load: Begin {}", path.display());

        match store::load(&path) {
            Ok(listings) => {
                self.state.gui.rebase(&listings);
                self.listings = Ok(listings);
                self.rebuild_view();
                let n = self.view.total_count;
                self.status(format!("Loaded {n} listing(s)"));
            }
            Err(e) => {
                loge!("Load: Error {}", e);
                self.listings = Err(e);
                self.view = FilteredResult::default();
                self.status("Load failed");
            }
        }
    }

    /// Re-run the filter pass from the current GUI inputs.
    pub fn rebuild_view(&mut self) {
        let criteria = self.state.gui.criteria();
        self.view = filter::apply(self.listings(), &criteria);
        logd!(
            "View: {:?} → {} of {} rows",
            criteria,
            self.view.filtered_count,
            self.view.total_count
        );
        self.applied = criteria;
    }

    fn draw_load_failure(&mut self, ctx: &egui::Context) {
        let Err(e) = &self.listings else { return };
        let msg = format!("System error, please check the listings store. Details: {e}");
        let mut reload = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_TITLE);
            ui.separator();
            ui.colored_label(ui.visuals().error_fg_color, msg);
            ui.add_space(8.0);
            reload = ui.button("Reload").clicked();
        });

        if reload {
            actions::reload(self);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Nothing but the error when the load failed.
        if self.listings.is_err() {
            self.draw_load_failure(ctx);
            return;
        }

        egui::SidePanel::left("filters")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        if self.state.gui.criteria() != self.applied {
            self.rebuild_view();
        }

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.small(DATA_SOURCE_CAPTION);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_TITLE);
            ui.separator();

            components::summary_strip::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
