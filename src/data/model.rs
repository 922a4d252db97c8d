use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Categorical fields
// ---------------------------------------------------------------------------

/// A categorical cell that did not match any known value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognised {field} value '{value}'")]
pub struct ParseFieldError {
    pub field: &'static str,
    pub value: String,
}

/// Meal service of a sitting. `Ord` so it can live in a `BTreeSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MealTime {
    Lunch,
    Dinner,
}

impl MealTime {
    pub const ALL: [MealTime; 2] = [MealTime::Lunch, MealTime::Dinner];

    pub fn label(self) -> &'static str {
        match self {
            MealTime::Lunch => "Lunch",
            MealTime::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealTime {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Lunch" => Ok(MealTime::Lunch),
            "Dinner" => Ok(MealTime::Dinner),
            other => Err(ParseFieldError {
                field: "time",
                value: other.to_string(),
            }),
        }
    }
}

/// Day of the week a sitting was recorded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Day {
    Thur,
    Fri,
    Sat,
    Sun,
}

impl Day {
    pub fn label(self) -> &'static str {
        match self {
            Day::Thur => "Thur",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Thur" => Ok(Day::Thur),
            "Fri" => Ok(Day::Fri),
            "Sat" => Ok(Day::Sat),
            "Sun" => Ok(Day::Sun),
            other => Err(ParseFieldError {
                field: "day",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => f.write_str("Male"),
            Sex::Female => f.write_str("Female"),
        }
    }
}

impl FromStr for Sex {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Sex::Male),
            "Female" => Ok(Sex::Female),
            other => Err(ParseFieldError {
                field: "sex",
                value: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// TipRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single restaurant sitting (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct TipRecord {
    pub total_bill: f64,
    pub tip: f64,
    pub sex: Sex,
    pub smoker: bool,
    pub day: Day,
    pub time: MealTime,
    /// Party size.
    pub size: u32,
}

impl TipRecord {
    /// Tip as a fraction of the total bill.
    pub fn tip_pct(&self) -> f64 {
        self.tip / self.total_bill
    }
}

// ---------------------------------------------------------------------------
// TipsDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset, immutable after load.
#[derive(Debug, Clone)]
pub struct TipsDataset {
    /// All sittings (rows), in file order.
    pub records: Vec<TipRecord>,
    /// Min/max total bill across all records.
    pub bill_extent: (f64, f64),
}

impl TipsDataset {
    /// Build the dataset and pre-compute the bill extent.
    pub fn from_records(records: Vec<TipRecord>) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for rec in &records {
            lo = lo.min(rec.total_bill);
            hi = hi.max(rec.total_bill);
        }
        if records.is_empty() {
            lo = 0.0;
            hi = 0.0;
        }
        TipsDataset {
            records,
            bill_extent: (lo, hi),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
