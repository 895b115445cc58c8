use crate::data::enrollment_table::{EnrollmentTable, Grade, YEAR_COUNT};
use crate::processing::statistics::{max_present, mean_present, min_present, sum_present, YearValue};
use crate::state::app_state::AnalysisSettings;

/// Statistics across every school.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStats {
    pub highest_single_grade: Option<u32>,
    pub lowest_single_grade: Option<u32>,
    /// Mean over all schools and grades for each year.
    pub yearly_means: Vec<YearValue<Option<f64>>>,
    /// Grade 12 enrollment summed over all schools for each year.
    pub graduating_totals: Vec<YearValue<u64>>,
}

impl AggregateStats {
    pub fn compute(table: &EnrollmentTable, settings: &AnalysisSettings) -> Self {
        let grades = table.grade_views();
        let year_of = |year: usize| settings.first_year + year as u16;

        let yearly_means = (0..YEAR_COUNT)
            .map(|year| YearValue {
                year: year_of(year),
                value: mean_present(grades.iter().flat_map(|view| view.year_row(year))),
            })
            .collect();

        let graduating = table.grade(Grade::Twelve);
        let graduating_totals = (0..YEAR_COUNT)
            .map(|year| YearValue {
                year: year_of(year),
                value: sum_present(graduating.year_row(year)),
            })
            .collect();

        Self {
            highest_single_grade: max_present(table.cells().iter().copied()),
            lowest_single_grade: min_present(table.cells().iter().copied()),
            yearly_means,
            graduating_totals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::enrollment_table::tests::uniform_years;
    use crate::processing::school_stats::SchoolStats;
    use crate::state::app_state::AppState;

    fn mean_for(stats: &AggregateStats, year: u16) -> Option<f64> {
        stats.yearly_means.iter().find(|m| m.year == year).and_then(|m| m.value)
    }

    fn graduating_total_for(stats: &AggregateStats, year: u16) -> Option<u64> {
        stats.graduating_totals.iter().find(|t| t.year == year).map(|t| t.value)
    }

    #[test]
    fn test_uniform_table() {
        let mut years = uniform_years([Some(100), Some(200), Some(300)]);
        years[9][0] = vec![None, None, Some(900)];
        years[0][1] = vec![Some(1), None, None];
        let table = EnrollmentTable::build(&years).unwrap();
        let stats = AggregateStats::compute(&table, &AnalysisSettings::default());

        assert_eq!(stats.highest_single_grade, Some(900));
        assert_eq!(stats.lowest_single_grade, Some(1));
        assert_eq!(mean_for(&stats, 2015), Some(200.0));
        assert_eq!(graduating_total_for(&stats, 2015), Some(6000));
        // 2013: school 1 has only a grade 10 value of 1.
        assert_eq!(graduating_total_for(&stats, 2013), Some(5700));
        assert_eq!(mean_for(&stats, 2013), Some((100.0 * 19.0 + 200.0 * 19.0 + 300.0 * 19.0 + 1.0) / 58.0));
        assert_eq!(graduating_total_for(&stats, 2022), Some(19 * 300 + 900));
        assert_eq!(mean_for(&stats, 2030), None);
        assert_eq!(graduating_total_for(&stats, 2030), None);
    }

    #[test]
    fn test_bounds_cover_every_school() {
        let state = AppState::from_embedded().unwrap();
        let aggregate = AggregateStats::compute(&state.table, &state.settings);
        let highest = aggregate.highest_single_grade.unwrap();
        let lowest = aggregate.lowest_single_grade.unwrap();

        for school in state.registry.iter() {
            let stats = SchoolStats::compute(&state.table, school.offset, &state.settings);
            assert!(lowest <= stats.lowest_single_grade.unwrap());
            assert!(highest >= stats.highest_single_grade.unwrap());
        }
        assert_eq!(aggregate.yearly_means.len(), 10);
        assert!(aggregate.yearly_means.iter().all(|m| m.value.is_some()));
    }
}
