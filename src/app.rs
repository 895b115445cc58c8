use std::io::{self, BufRead, Write};

use crate::data::enrollment_table::Grade;
use crate::error::StartupError;
use crate::processing::aggregate_stats::AggregateStats;
use crate::processing::school_stats::SchoolStats;
use crate::state::app_state::AppState;
use crate::ui::console;

pub struct EnrollmentApp {
    state: AppState,
}

impl EnrollmentApp {
    /// Load the embedded dataset and assemble the enrollment table.
    pub fn new() -> Result<Self, StartupError> {
        let state = AppState::from_embedded()?;
        tracing::info!(
            "Enrollment table ready, shape {:?}, grade slices {:?}",
            state.table.shape(),
            state.table.grade(Grade::Ten).shape()
        );
        Ok(Self { state })
    }

    /// One session: banner, school selection and report, then the all-schools report.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> io::Result<()> {
        let state = &self.state;
        console::write_banner(out, &state.table)?;

        if let Some(school) = console::prompt_for_school(&state.registry, input, out)? {
            let stats = SchoolStats::compute(&state.table, school.offset, &state.settings);
            console::write_school_report(out, &school, &stats)?;
        }

        let aggregate = AggregateStats::compute(&state.table, &state.settings);
        console::write_aggregate_report(out, &aggregate)?;
        out.flush()
    }
}
