use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints, Points, Polygon};

use crate::analysis;
use crate::color;
use crate::data::model::Day;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter: total bill vs tip, with a least-squares trend line
// ---------------------------------------------------------------------------

pub fn scatter_plot(ui: &mut Ui, state: &AppState, height: f32) {
    let dataset = state.dataset();
    let points: Vec<[f64; 2]> = state
        .filtered()
        .iter()
        .map(|&i| {
            let rec = &dataset.records[i];
            [rec.total_bill, rec.tip]
        })
        .collect();

    let fit = analysis::linear_fit(&points);
    let x_lo = points.iter().map(|p| p[0]).fold(f64::INFINITY, f64::min);
    let x_hi = points.iter().map(|p| p[0]).fold(f64::NEG_INFINITY, f64::max);

    Plot::new("bill_vs_tip")
        .height(height)
        .x_axis_label("Total bill")
        .y_axis_label("Tip")
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(PlotPoints::from(points))
                    .radius(2.5)
                    .color(Color32::LIGHT_BLUE)
                    .name("sittings"),
            );
            if let Some(fit) = fit {
                let segment = vec![[x_lo, fit.at(x_lo)], [x_hi, fit.at(x_hi)]];
                plot_ui.line(
                    Line::new(PlotPoints::from(segment))
                        .color(Color32::from_rgb(230, 140, 50))
                        .width(2.0)
                        .name("trend"),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Ridge: tip-percentage density per day, stacked
// ---------------------------------------------------------------------------

/// Kernel bandwidth on the tip-fraction scale.
const BANDWIDTH: f64 = 0.01;

/// Vertical gap between ridge baselines (curves are peak-normalised to 1).
const RIDGE_SPACING: f64 = 1.25;

/// One density per day present in the filtered subset, grouped in order of
/// first appearance. The subset is re-read for every derived-column access;
/// each read is a hit on the memo slot.
pub fn ridge_plot(ui: &mut Ui, state: &AppState) {
    let dataset = state.dataset();

    let mut days: Vec<Day> = Vec::new();
    for &i in state.filtered().iter() {
        let day = dataset.records[i].day;
        if !days.contains(&day) {
            days.push(day);
        }
    }

    let mut ridges: Vec<(Day, Vec<[f64; 2]>)> = Vec::new();
    for &day in &days {
        let samples: Vec<f64> = state
            .filtered()
            .iter()
            .map(|&i| &dataset.records[i])
            .filter(|rec| rec.day == day)
            .map(|rec| rec.tip_pct())
            .collect();
        ridges.push((day, analysis::gaussian_kde(&samples, BANDWIDTH)));
    }

    let colors = color::ridge_ramp(ridges.len());

    Plot::new("tip_pct_ridge")
        .x_axis_label("Tip fraction of bill")
        .legend(Legend::default().position(Corner::LeftTop))
        .show_axes([true, false])
        .show_grid([true, false])
        .show(ui, |plot_ui| {
            let n = ridges.len();
            for (row, (day, curve)) in ridges.iter().enumerate() {
                let peak = curve.iter().map(|p| p[1]).fold(f64::NEG_INFINITY, f64::max);
                if curve.is_empty() || peak <= 0.0 {
                    continue;
                }
                // First group drawn topmost, like a classic ridge layout.
                let baseline = (n - 1 - row) as f64 * RIDGE_SPACING;
                let pts: PlotPoints = curve
                    .iter()
                    .map(|p| [p[0], baseline + p[1] / peak])
                    .collect();
                let fill = colors[row].gamma_multiply(0.3);
                plot_ui.polygon(
                    Polygon::new(pts)
                        .fill_color(fill)
                        .stroke(Stroke::new(1.5, colors[row]))
                        .name(day.label()),
                );
            }
        });
}
