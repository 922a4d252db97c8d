use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Filtered data table
// ---------------------------------------------------------------------------

/// Render the filtered subset as a striped, scrollable table. Rows are
/// virtualised, so only the visible slice is laid out per frame.
pub fn tips_table(ui: &mut Ui, state: &AppState, height: f32) {
    let dataset = state.dataset();
    let rows = state.filtered();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .min_scrolled_height(0.0)
        .max_scroll_height(height)
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(55.0))
        .column(Column::auto().at_least(55.0))
        .column(Column::auto().at_least(45.0))
        .column(Column::auto().at_least(55.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Total bill", "Tip", "Sex", "Smoker", "Day", "Time", "Size"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let rec = &dataset.records[rows[row.index()]];
                row.col(|ui| {
                    ui.label(format!("{:.2}", rec.total_bill));
                });
                row.col(|ui| {
                    ui.label(format!("{:.2}", rec.tip));
                });
                row.col(|ui| {
                    ui.label(rec.sex.to_string());
                });
                row.col(|ui| {
                    ui.label(if rec.smoker { "Yes" } else { "No" });
                });
                row.col(|ui| {
                    ui.label(rec.day.label());
                });
                row.col(|ui| {
                    ui.label(rec.time.label());
                });
                row.col(|ui| {
                    ui.label(rec.size.to_string());
                });
            });
        });
}
