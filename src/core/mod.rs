//! Core compilation building blocks: parameters and the read-parse-write
//! pipeline for a single job. These are consumed by the high-level `api`
//! module.
pub mod compile;
pub mod params;
