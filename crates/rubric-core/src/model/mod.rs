//! In-memory rubric model
//!
//! A [`Rubric`] is the graded tree for one gradable part of one group's
//! handin. Every total is derived from the current child state on each
//! call; nothing is cached, so callers may mutate the tree freely between
//! calls. The model performs no I/O and no validation: negative scores or
//! scores above their out-of are accepted as given.

mod rubric;
pub mod types;

pub use rubric::{Detail, Rubric, Section, Student, Subsection, EXTRA_CREDIT_NAME};
pub use types::{GradeUnits, LatePolicy, TimeStatus};
