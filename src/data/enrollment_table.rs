use crate::error::ShapeError;

pub const YEAR_COUNT: usize = 10;
pub const SCHOOL_COUNT: usize = 20;
pub const GRADE_COUNT: usize = 3;

/// One year of input: `rows[school][grade]`, `None` where no enrollment was recorded.
pub type YearlyTable = Vec<Vec<Option<u32>>>;

/// Grade axis of the enrollment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Ten,
    Eleven,
    Twelve,
}

impl Grade {
    pub const ALL: [Grade; GRADE_COUNT] = [Grade::Ten, Grade::Eleven, Grade::Twelve];

    pub fn index(&self) -> usize {
        match self {
            Grade::Ten => 0,
            Grade::Eleven => 1,
            Grade::Twelve => 2,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Grade::Ten => 10,
            Grade::Eleven => 11,
            Grade::Twelve => 12,
        }
    }
}

/// Year x school x grade enrollment counts, stored year-major.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentTable {
    cells: Vec<Option<u32>>,
}

impl EnrollmentTable {
    /// Stack ten yearly 20 x 3 tables, in year order, into the 3-D table.
    pub fn build(yearly_tables: &[YearlyTable]) -> Result<Self, ShapeError> {
        if yearly_tables.len() != YEAR_COUNT {
            return Err(ShapeError::YearCount {
                expected: YEAR_COUNT,
                found: yearly_tables.len(),
            });
        }

        let mut cells = Vec::with_capacity(YEAR_COUNT * SCHOOL_COUNT * GRADE_COUNT);
        for (year_index, table) in yearly_tables.iter().enumerate() {
            if table.len() != SCHOOL_COUNT {
                return Err(ShapeError::Rows {
                    year_index,
                    expected: SCHOOL_COUNT,
                    found: table.len(),
                });
            }
            for (row, grades) in table.iter().enumerate() {
                if grades.len() != GRADE_COUNT {
                    return Err(ShapeError::Columns {
                        year_index,
                        row,
                        expected: GRADE_COUNT,
                        found: grades.len(),
                    });
                }
                cells.extend_from_slice(grades);
            }
        }

        tracing::debug!("Built enrollment table with {} cells", cells.len());
        Ok(Self { cells })
    }

    pub fn shape(&self) -> [usize; 3] {
        [YEAR_COUNT, SCHOOL_COUNT, GRADE_COUNT]
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    pub fn get(&self, year: usize, school: usize, grade: Grade) -> Option<u32> {
        self.cells[(year * SCHOOL_COUNT + school) * GRADE_COUNT + grade.index()]
    }

    /// Every cell in the table, missing ones included.
    pub fn cells(&self) -> &[Option<u32>] {
        &self.cells
    }

    /// 10 x 20 slice of a single grade.
    pub fn grade(&self, grade: Grade) -> GradeView<'_> {
        GradeView { table: self, grade }
    }

    pub fn grade_views(&self) -> [GradeView<'_>; GRADE_COUNT] {
        Grade::ALL.map(|g| self.grade(g))
    }
}

/// Borrowed year x school view of one grade.
#[derive(Debug, Clone, Copy)]
pub struct GradeView<'a> {
    table: &'a EnrollmentTable,
    grade: Grade,
}

impl<'a> GradeView<'a> {
    pub fn shape(&self) -> (usize, usize) {
        (YEAR_COUNT, SCHOOL_COUNT)
    }

    pub fn get(&self, year: usize, school: usize) -> Option<u32> {
        self.table.get(year, school, self.grade)
    }

    /// One school's values over all years.
    pub fn school_column(&self, school: usize) -> impl Iterator<Item = Option<u32>> + 'a {
        let view = *self;
        (0..YEAR_COUNT).map(move |year| view.get(year, school))
    }

    /// All schools' values for one year.
    pub fn year_row(&self, year: usize) -> impl Iterator<Item = Option<u32>> + 'a {
        let view = *self;
        (0..SCHOOL_COUNT).map(move |school| view.get(year, school))
    }
}
