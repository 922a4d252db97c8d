use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Height shared by the table and the scatter plot in the middle row.
const MIDDLE_ROW_HEIGHT: f32 = 280.0;

pub struct TippingApp {
    pub state: AppState,
}

impl TippingApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for TippingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and record counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the four consumers ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let state = &self.state;

            panels::value_boxes(ui, state);
            ui.add_space(8.0);

            ui.columns(2, |cols: &mut [egui::Ui]| {
                cols[0].strong("Tips data");
                table::tips_table(&mut cols[0], state, MIDDLE_ROW_HEIGHT);
                cols[1].strong("Total bill vs tip");
                plot::scatter_plot(&mut cols[1], state, MIDDLE_ROW_HEIGHT);
            });

            ui.add_space(8.0);
            ui.strong("Tip percentages by day");
            plot::ridge_plot(ui, state);
        });
    }
}
