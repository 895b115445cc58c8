pub mod dataset;
pub mod enrollment_table;
