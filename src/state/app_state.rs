use serde::{Deserialize, Serialize};

use crate::data::dataset::Dataset;
use crate::data::enrollment_table::EnrollmentTable;
use crate::error::StartupError;
use crate::state::registry::SchoolRegistry;

/// Tunables for the statistics pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Enrollments strictly above this count qualify for the threshold median.
    pub qualifying_threshold: u32,
    /// Calendar year of the table's first year offset.
    pub first_year: u16,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            qualifying_threshold: 500,
            first_year: 2013,
        }
    }
}

/// Everything built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: SchoolRegistry,
    pub table: EnrollmentTable,
    pub settings: AnalysisSettings,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Result<Self, StartupError> {
        let table = EnrollmentTable::build(&dataset.tables)?;
        let settings = AnalysisSettings {
            first_year: dataset.first_year,
            ..AnalysisSettings::default()
        };
        if let Ok(json) = serde_json::to_string(&settings) {
            tracing::debug!("Analysis settings: {json}");
        }
        let registry = SchoolRegistry::new();
        tracing::info!("School registry holds {} schools", registry.len());
        Ok(Self {
            registry,
            table,
            settings,
        })
    }

    pub fn from_embedded() -> Result<Self, StartupError> {
        Self::new(Dataset::embedded()?)
    }
}
