pub mod aggregate_stats;
pub mod school_stats;
pub mod statistics;
