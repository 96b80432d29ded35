//! Rubric Core Library
//!
//! Scoring and serialization engine for course grading rubrics: the rubric
//! model, time-based grade policies, the GML markup codec and the GRD
//! fixed-width report formatter.

pub mod config;
pub mod error;
pub mod format;
pub mod gml;
pub mod grd;
pub mod logging;
pub mod model;
pub mod policy;
pub mod session;
pub mod store;
pub mod text;
