use crate::data::enrollment_table::{EnrollmentTable, Grade, GRADE_COUNT, YEAR_COUNT};
use crate::processing::statistics::{
    max_present, mean_present, min_present, sum_present, ThresholdMedian, YearValue,
};
use crate::state::app_state::AnalysisSettings;

/// Statistics for one school over the ten-year window.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolStats {
    /// Indexed by [`Grade::index`].
    pub grade_means: [Option<f64>; GRADE_COUNT],
    pub highest_single_grade: Option<u32>,
    pub lowest_single_grade: Option<u32>,
    pub yearly_totals: Vec<YearValue<u64>>,
    pub ten_year_total: u64,
    pub mean_yearly_total: f64,
    pub over_threshold: ThresholdMedian,
}

impl SchoolStats {
    pub fn compute(table: &EnrollmentTable, school: usize, settings: &AnalysisSettings) -> Self {
        let grades = table.grade_views();

        // Grade 10 years, then grade 11, then grade 12.
        let all_values: Vec<Option<u32>> = grades
            .iter()
            .flat_map(|view| view.school_column(school))
            .collect();

        let grade_means = grades.map(|view| mean_present(view.school_column(school)));

        let yearly_totals: Vec<YearValue<u64>> = (0..YEAR_COUNT)
            .map(|year| YearValue {
                year: settings.first_year + year as u16,
                value: sum_present(Grade::ALL.map(|g| table.get(year, school, g))),
            })
            .collect();

        let ten_year_total = sum_present(all_values.iter().copied());
        let mean_yearly_total =
            yearly_totals.iter().map(|t| t.value).sum::<u64>() as f64 / yearly_totals.len() as f64;

        let stats = Self {
            grade_means,
            highest_single_grade: max_present(all_values.iter().copied()),
            lowest_single_grade: min_present(all_values.iter().copied()),
            yearly_totals,
            ten_year_total,
            mean_yearly_total,
            over_threshold: ThresholdMedian::compute(all_values, settings.qualifying_threshold),
        };
        tracing::debug!("Computed statistics for school offset {school}: {stats:?}");
        stats
    }

    pub fn grade_mean(&self, grade: Grade) -> Option<f64> {
        self.grade_means[grade.index()]
    }
}
