//! GRD: fixed-width plain-text grade reports
//!
//! One report covers every rubric of a handin. A report looks like:
//!
//! ```text
//!                                    Lab3
//!
//! HANDIN STATUS: On Time
//! STUDENT: Ada Lovelace (alovelac)
//! GRADER: Grace Hopper (ghopper)
//!
//!                                                           |   YOUR|    OUT|
//! SECTION                                                   |  SCORE|     OF|
//! ---------------------------------------------------------------------------
//! Correctness                                               |       |       |
//!         Tests pass                                        |   18.0|   20.0|
//!                                                  Total    |   18.0|   20.0|
//! ---------------------------------------------------------------------------
//!                                               Final Grade |   18.0|   20.0|
//! ---------------------------------------------------------------------------
//! ```

pub mod layout;
mod writer;

pub use writer::{render, write_report, Grader, ReportContext};

/// File extension of grade reports
pub const GRD_EXTENSION: &str = "grd";
