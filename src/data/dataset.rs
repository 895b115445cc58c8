use serde::Deserialize;

use crate::data::enrollment_table::YearlyTable;
use crate::error::StartupError;

/// Yearly enrollment tables for 2013 through 2022, rows in registry order,
/// columns grades 10, 11, 12. `null` marks a grade with no recorded enrollment.
pub const EMBEDDED_DATASET: &str = include_str!("../../data/enrollment.json");

#[derive(Debug, Deserialize)]
struct RawDataset {
    years: Vec<RawYear>,
}

#[derive(Debug, Deserialize)]
struct RawYear {
    year: u16,
    rows: YearlyTable,
}

/// Parsed dataset: calendar years alongside their tables, in order.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub first_year: u16,
    pub tables: Vec<YearlyTable>,
}

impl Dataset {
    pub fn embedded() -> Result<Self, StartupError> {
        Self::parse(EMBEDDED_DATASET)
    }

    /// Parse the JSON dataset. Years must be consecutive and ascending; table
    /// shapes are left for the table builder to check.
    pub fn parse(json: &str) -> Result<Self, StartupError> {
        let raw: RawDataset = serde_json::from_str(json)?;

        let first_year = raw.years.first().map(|y| y.year).unwrap_or_default();
        let mut tables = Vec::with_capacity(raw.years.len());
        for (i, entry) in raw.years.into_iter().enumerate() {
            let expected = first_year + i as u16;
            if entry.year != expected {
                return Err(StartupError::YearSequence {
                    expected,
                    found: entry.year,
                });
            }
            tables.push(entry.rows);
        }

        tracing::info!("Loaded {} yearly tables starting {}", tables.len(), first_year);
        Ok(Self { first_year, tables })
    }
}
