//! Persistence of rubrics and grade reports
//!
//! Where files live and how the filesystem is touched are both supplied by
//! the caller through [`PathResolver`] and [`FileServices`]. The local
//! implementations, [`DirectoryLayout`] and [`LocalFiles`], cover the
//! common single-machine setup.
//!
//! A save is a single blocking sequence: ensure the directory exists, write
//! the content, close the file, sanitize permissions. Nothing is written to
//! a temporary path first, so a failed write may leave a partial file
//! behind.

pub mod files;
pub mod io;
pub mod paths;

pub use files::{FileServices, LocalFiles};
pub use io::{load_gml, save_gml, save_grd, WriteOutcome};
pub use paths::{DirectoryLayout, PathResolver, GRADES_DIR, RUBRICS_DIR};
