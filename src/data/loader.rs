use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::model::{TipRecord, TipsDataset};

/// The bundled tipping dataset, compiled into the binary.
const TIPS_CSV: &str = include_str!("../../assets/tips.csv");

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse the embedded tips dataset. Called once at startup.
pub fn load_embedded() -> Result<TipsDataset> {
    load_csv_str(TIPS_CSV).context("parsing embedded tips.csv")
}

/// Expected CSV layout: header row
/// `total_bill,tip,sex,smoker,day,time,size`, one sitting per row.
pub fn load_csv_str(text: &str) -> Result<TipsDataset> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        let rec = raw
            .into_record()
            .with_context(|| format!("CSV row {row_no}"))?;
        if rec.total_bill <= 0.0 {
            bail!("CSV row {row_no}: total_bill must be positive");
        }
        records.push(rec);
    }

    Ok(TipsDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Raw CSV row → typed record
// ---------------------------------------------------------------------------

/// One CSV row before the categorical columns are typed.
#[derive(Debug, Deserialize)]
struct RawRecord {
    total_bill: f64,
    tip: f64,
    sex: String,
    smoker: String,
    day: String,
    time: String,
    size: u32,
}

impl RawRecord {
    fn into_record(self) -> Result<TipRecord> {
        let smoker = match self.smoker.as_str() {
            "Yes" => true,
            "No" => false,
            other => bail!("unrecognised smoker value '{other}'"),
        };
        Ok(TipRecord {
            total_bill: self.total_bill,
            tip: self.tip,
            sex: self.sex.parse()?,
            smoker,
            day: self.day.parse()?,
            time: self.time.parse()?,
            size: self.size,
        })
    }
}
