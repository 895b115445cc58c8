use std::io::{self, BufRead, Write};

use crate::data::enrollment_table::{EnrollmentTable, Grade};
use crate::error::LookupError;
use crate::processing::aggregate_stats::AggregateStats;
use crate::processing::school_stats::SchoolStats;
use crate::state::registry::{School, SchoolRegistry};

pub const PROMPT: &str = "Please enter the high school name or code: ";

/// Display a fractional statistic as an integer, truncating toward zero.
fn whole(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}

fn whole_or_na(value: Option<f64>) -> String {
    value.map(whole).unwrap_or_else(|| "n/a".to_string())
}

fn count_or_na(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "n/a".to_string())
}

pub fn write_banner<W: Write>(out: &mut W, table: &EnrollmentTable) -> io::Result<()> {
    let [years, schools, grades] = table.shape();
    writeln!(out, "\nSchool Enrollment Statistics\n")?;
    writeln!(out, "Shape of full data array: ({years}, {schools}, {grades})")?;
    writeln!(out, "Dimensions of full data array: {}", table.ndim())
}

/// Prompt until the input names a known school. Returns `None` at end of input.
pub fn prompt_for_school<R: BufRead, W: Write>(
    registry: &SchoolRegistry,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<School>> {
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::info!("Input closed before a school was selected");
            return Ok(None);
        }

        match registry.resolve(line.trim()) {
            Ok(school) => return Ok(Some(school)),
            Err(e) => {
                let LookupError::NotFound { identifier } = &e;
                tracing::warn!("Rejected school identifier {identifier:?}");
                writeln!(out, "{e}")?;
            }
        }
    }
}

pub fn write_school_report<W: Write>(out: &mut W, school: &School, stats: &SchoolStats) -> io::Result<()> {
    writeln!(out, "\n***Requested School Statistics***\n")?;
    writeln!(out, "School Name: {}, School Code: {}", school.name, school.code)?;

    for grade in Grade::ALL {
        writeln!(
            out,
            "Mean enrollment for Grade {}: {}",
            grade.number(),
            whole_or_na(stats.grade_mean(grade))
        )?;
    }
    writeln!(out, "Highest enrollment for a single grade: {}", count_or_na(stats.highest_single_grade))?;
    writeln!(out, "Lowest enrollment for a single grade: {}", count_or_na(stats.lowest_single_grade))?;

    for total in &stats.yearly_totals {
        writeln!(out, "Total enrollment for {}: {}", total.year, total.value)?;
    }
    writeln!(out, "Total ten year enrollment: {}", stats.ten_year_total)?;
    writeln!(out, "Mean total enrollment over 10 years: {}", whole(stats.mean_yearly_total))?;

    let over = &stats.over_threshold;
    match over.median {
        Some(median) if over.has_qualifying() => writeln!(
            out,
            "For all enrollments over {}, the Median value is: {}",
            over.threshold,
            whole(median)
        ),
        _ => writeln!(out, "No enrollments over {}.", over.threshold),
    }
}

pub fn write_aggregate_report<W: Write>(out: &mut W, stats: &AggregateStats) -> io::Result<()> {
    writeln!(out, "\n***General Statistics for All Schools***\n")?;

    if let (Some(first), Some(last)) = (stats.yearly_means.first(), stats.yearly_means.last()) {
        writeln!(out, "Mean enrollment for {}: {}", first.year, whole_or_na(first.value))?;
        writeln!(out, "Mean enrollment for {}: {}", last.year, whole_or_na(last.value))?;
    }
    if let Some(last) = stats.graduating_totals.last() {
        writeln!(out, "Total graduating class of {}: {}", last.year, last.value)?;
    }
    writeln!(out, "Highest enrollment for a single grade: {}", count_or_na(stats.highest_single_grade))?;
    writeln!(out, "Lowest enrollment for a single grade: {}", count_or_na(stats.lowest_single_grade))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::enrollment_table::tests::uniform_years;
    use crate::state::app_state::AnalysisSettings;
    use std::io::Cursor;

    fn run_prompt(input: &str) -> (Option<School>, String) {
        let registry = SchoolRegistry::new();
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let school = prompt_for_school(&registry, &mut reader, &mut out).unwrap();
        (school, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prompt_accepts_code() {
        let (school, out) = run_prompt("9626\n");
        assert_eq!(school.unwrap().name, "Louise Dean School");
        assert_eq!(out, PROMPT);
    }

    #[test]
    fn test_prompt_retries_until_valid() {
        let (school, out) = run_prompt("Centennial\n1234\n  bowness high school  \n");
        let school = school.unwrap();
        assert_eq!(school.code, 9847);
        assert_eq!(out.matches(PROMPT).count(), 3);
        assert_eq!(out.matches("You must enter a valid school name or code.").count(), 2);
    }

    #[test]
    fn test_prompt_end_of_input() {
        let (school, out) = run_prompt("nope\n");
        assert!(school.is_none());
        assert_eq!(out.matches(PROMPT).count(), 2);
    }

    #[test]
    fn test_banner() {
        let table = EnrollmentTable::build(&uniform_years([Some(1), Some(2), Some(3)])).unwrap();
        let mut out = Vec::new();
        write_banner(&mut out, &table).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Shape of full data array: (10, 20, 3)"));
        assert!(text.contains("Dimensions of full data array: 3"));
    }

    #[test]
    fn test_school_report_without_qualifying() {
        let table = EnrollmentTable::build(&uniform_years([None, Some(150), Some(200)])).unwrap();
        let stats = SchoolStats::compute(&table, 0, &AnalysisSettings::default());
        let school = SchoolRegistry::new().resolve("1224").unwrap();

        let mut out = Vec::new();
        write_school_report(&mut out, &school, &stats).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("School Name: Centennial High School, School Code: 1224"));
        assert!(text.contains("Mean enrollment for Grade 10: n/a"));
        assert!(text.contains("Mean enrollment for Grade 12: 200"));
        assert!(text.contains("Total enrollment for 2013: 350"));
        assert!(text.contains("Total enrollment for 2022: 350"));
        assert!(text.contains("Total ten year enrollment: 3500"));
        assert!(text.contains("No enrollments over 500."));
        assert!(!text.contains("Median value"));
    }

    #[test]
    fn test_school_report_with_qualifying() {
        let table = EnrollmentTable::build(&uniform_years([Some(501), Some(600), Some(702)])).unwrap();
        let stats = SchoolStats::compute(&table, 0, &AnalysisSettings::default());
        let school = SchoolRegistry::new().resolve("1224").unwrap();

        let mut out = Vec::new();
        write_school_report(&mut out, &school, &stats).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Mean total enrollment over 10 years: 1803"));
        assert!(text.contains("For all enrollments over 500, the Median value is: 600"));
    }

    #[test]
    fn test_aggregate_report() {
        let table = EnrollmentTable::build(&uniform_years([Some(100), Some(201), Some(300)])).unwrap();
        let stats = AggregateStats::compute(&table, &AnalysisSettings::default());

        let mut out = Vec::new();
        write_aggregate_report(&mut out, &stats).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Mean enrollment for 2013: 200"));
        assert!(text.contains("Mean enrollment for 2022: 200"));
        assert!(text.contains("Total graduating class of 2022: 6000"));
        assert!(text.contains("Highest enrollment for a single grade: 300"));
        assert!(text.contains("Lowest enrollment for a single grade: 100"));
    }
}
