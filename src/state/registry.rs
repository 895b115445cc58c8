use std::collections::HashMap;

use crate::error::LookupError;

/// Calgary high schools in enrollment-table order.
const SCHOOLS: [(u32, &str); 20] = [
    (1224, "Centennial High School"),
    (1679, "Robert Thirsk School"),
    (9626, "Louise Dean School"),
    (9806, "Queen Elizabeth High School"),
    (9813, "Forest Lawn High School"),
    (9815, "Crescent Heights High School"),
    (9816, "Western Canada High School"),
    (9823, "Central Memorial High School"),
    (9825, "James Fowler High School"),
    (9826, "Ernest Manning High School"),
    (9829, "William Aberhart High School"),
    (9830, "National Sport School"),
    (9836, "Henry Wise Wood High School"),
    (9847, "Bowness High School"),
    (9850, "Lord Beaverbrook High School"),
    (9856, "Jack James High School"),
    (9857, "Sir Winston Churchill High School"),
    (9858, "Dr. E. P. Scarlett High School"),
    (9860, "John G Diefenbaker High School"),
    (9865, "Lester B. Pearson High School"),
];

/// A registry entry resolved from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct School {
    pub code: u32,
    pub name: &'static str,
    /// Position on the enrollment table's school axis.
    pub offset: usize,
}

/// Fixed, ordered mapping from school code to name.
#[derive(Debug, Clone)]
pub struct SchoolRegistry {
    schools: Vec<School>,
    by_code: HashMap<u32, usize>,
}

impl SchoolRegistry {
    pub fn new() -> Self {
        let schools: Vec<School> = SCHOOLS
            .iter()
            .enumerate()
            .map(|(offset, &(code, name))| School { code, name, offset })
            .collect();
        let by_code = schools.iter().map(|s| (s.code, s.offset)).collect();
        Self { schools, by_code }
    }

    pub fn len(&self) -> usize {
        self.schools.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &School> {
        self.schools.iter()
    }

    pub fn by_code(&self, code: u32) -> Option<&School> {
        self.by_code.get(&code).map(|&offset| &self.schools[offset])
    }

    /// Exact, case-insensitive name match.
    pub fn by_name(&self, name: &str) -> Option<&School> {
        let wanted = name.to_lowercase();
        self.iter().find(|s| s.name.to_lowercase() == wanted)
    }

    /// Resolve a code (all digits) or a school name.
    pub fn resolve(&self, identifier: &str) -> Result<School, LookupError> {
        let found = if !identifier.is_empty() && identifier.chars().all(|c| c.is_ascii_digit()) {
            identifier.parse::<u32>().ok().and_then(|code| self.by_code(code))
        } else {
            self.by_name(identifier)
        };

        match found {
            Some(school) => {
                tracing::debug!("Resolved {:?} to {} ({})", identifier, school.name, school.code);
                Ok(*school)
            }
            None => Err(LookupError::NotFound {
                identifier: identifier.to_string(),
            }),
        }
    }
}

impl Default for SchoolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
