use eframe::egui::{self, RichText, Ui};

use crate::data::model::MealTime;
use crate::state::AppState;
use crate::stats;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the filter panel: bill-range sliders, meal-time checkboxes and
/// the reset button. The only place the filter state is written.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let (extent_lo, extent_hi) = state.dataset().bill_extent;

    ui.strong("Bill range");
    let (mut lo, mut hi) = state.filter.bill_range;
    // Each end is bounded by the other, so the range can never invert.
    ui.add(
        egui::Slider::new(&mut lo, extent_lo..=hi)
            .step_by(0.1)
            .fixed_decimals(2)
            .text("from"),
    );
    ui.add(
        egui::Slider::new(&mut hi, lo..=extent_hi)
            .step_by(0.1)
            .fixed_decimals(2)
            .text("to"),
    );
    state.filter.bill_range = (lo, hi);

    ui.add_space(8.0);
    ui.strong("Food service");
    for time in MealTime::ALL {
        let mut checked = state.filter.times.contains(&time);
        if ui.checkbox(&mut checked, time.label()).changed() {
            if checked {
                state.filter.times.insert(time);
            } else {
                state.filter.times.remove(&time);
            }
        }
    }

    ui.add_space(8.0);
    if ui.button("Reset filters").clicked() {
        state.reset_filters();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Restaurant Tipping");
        ui.separator();
        ui.label(format!(
            "{} sittings loaded, {} visible",
            state.dataset().len(),
            state.visible_count()
        ));
    });
}

// ---------------------------------------------------------------------------
// Summary value boxes
// ---------------------------------------------------------------------------

/// The three scalar consumers: count, average tip percentage, average bill.
pub fn value_boxes(ui: &mut Ui, state: &AppState) {
    let summary = stats::summarize(state.dataset(), &state.filtered());

    ui.columns(3, |cols: &mut [Ui]| {
        value_box(&mut cols[0], "Total tippers", summary.count.to_string());
        value_box(
            &mut cols[1],
            "Average tip",
            stats::percent_label(summary.avg_tip_pct),
        );
        value_box(
            &mut cols[2],
            "Average bill",
            stats::bill_label(summary.avg_bill),
        );
    });
}

fn value_box(ui: &mut Ui, label: &str, value: String) {
    ui.group(|ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(label);
            ui.label(RichText::new(value).size(24.0).strong());
        });
    });
}
