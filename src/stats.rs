use crate::data::model::TipsDataset;

// ---------------------------------------------------------------------------
// Summary statistics over the filtered subset
// ---------------------------------------------------------------------------

/// The three scalar displays derived from the filtered subset.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    /// Mean of tip / total_bill. `None` over zero rows.
    pub avg_tip_pct: Option<f64>,
    /// Mean total bill. `None` over zero rows.
    pub avg_bill: Option<f64>,
}

pub fn summarize(dataset: &TipsDataset, rows: &[usize]) -> Summary {
    let pcts: Vec<f64> = rows.iter().map(|&i| dataset.records[i].tip_pct()).collect();
    let bills: Vec<f64> = rows.iter().map(|&i| dataset.records[i].total_bill).collect();
    Summary {
        count: rows.len(),
        avg_tip_pct: mean(&pcts),
        avg_bill: mean(&bills),
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// "16.1%", or "n/a" over an empty subset.
pub fn percent_label(value: Option<f64>) -> String {
    match value {
        Some(pct) => format!("{:.1}%", pct * 100.0),
        None => "n/a".to_string(),
    }
}

/// "19.79", or "n/a" over an empty subset.
pub fn bill_label(value: Option<f64>) -> String {
    match value {
        Some(bill) => format!("{bill:.2}"),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Day, MealTime, Sex, TipRecord, TipsDataset};

    fn record(total_bill: f64, tip: f64) -> TipRecord {
        TipRecord {
            total_bill,
            tip,
            sex: Sex::Female,
            smoker: false,
            day: Day::Sat,
            time: MealTime::Dinner,
            size: 2,
        }
    }

    #[test]
    fn mean_of_empty_slice_is_none() {
        assert_eq!(mean(&[]), None);
        let m = mean(&[1.0, 2.0, 3.0]).unwrap();
        assert!((m - 2.0).abs() < 1e-9);
    }

    #[test]
    fn summary_matches_hand_computation() {
        let ds = TipsDataset::from_records(vec![
            record(10.0, 2.0), // 20%
            record(20.0, 2.0), // 10%
            record(30.0, 6.0), // 20%, excluded below
        ]);
        let summary = summarize(&ds, &[0, 1]);
        assert_eq!(summary.count, 2);
        assert!((summary.avg_tip_pct.unwrap() - 0.15).abs() < 1e-9);
        assert!((summary.avg_bill.unwrap() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn empty_subset_renders_explicit_na() {
        let ds = TipsDataset::from_records(vec![record(10.0, 2.0)]);
        let summary = summarize(&ds, &[]);
        assert_eq!(summary.count, 0);
        assert_eq!(percent_label(summary.avg_tip_pct), "n/a");
        assert_eq!(bill_label(summary.avg_bill), "n/a");
    }

    #[test]
    fn labels_round_for_display() {
        assert_eq!(percent_label(Some(0.16072)), "16.1%");
        assert_eq!(bill_label(Some(19.786)), "19.79");
    }
}
