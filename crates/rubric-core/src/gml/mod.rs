//! GML: the rubric markup format
//!
//! A rubric file is a small XML document, written without a declaration
//! line and indented two spaces per level so that saving an unchanged
//! rubric produces an identical file:
//!
//! ```text
//! <rubric name="Lab3" number="3" status="ON_TIME" daysLate="0">
//!   <student name="Ada Lovelace" account="alovelac" />
//!   <section name="Correctness">
//!     <subsection name="Tests pass" score="18.0" outOf="20.0">
//!       <detail name="Missing edge case" value="-2.0" />
//!     </subsection>
//!     <notes>
//!       <entry text="Check the empty input." />
//!     </notes>
//!   </section>
//!   <extra-credit name="Extra Credit" />
//! </rubric>
//! ```
//!
//! `subsection` may carry a `source` attribute naming the gradable part its
//! score is mirrored from. `notes` and `comments` are only written when
//! they hold entries.

mod decode;
mod element;
mod encode;

pub use decode::{decode_reader, decode_str};
pub use encode::{encode, encode_to};

pub(crate) const RUBRIC: &str = "rubric";
pub(crate) const STUDENT: &str = "student";
pub(crate) const SECTION: &str = "section";
pub(crate) const SUBSECTION: &str = "subsection";
pub(crate) const DETAIL: &str = "detail";
pub(crate) const NOTES: &str = "notes";
pub(crate) const COMMENTS: &str = "comments";
pub(crate) const ENTRY: &str = "entry";
pub(crate) const EXTRA_CREDIT: &str = "extra-credit";

pub(crate) const ATTR_NAME: &str = "name";
pub(crate) const ATTR_NUMBER: &str = "number";
pub(crate) const ATTR_STATUS: &str = "status";
pub(crate) const ATTR_DAYS_LATE: &str = "daysLate";
pub(crate) const ATTR_ACCOUNT: &str = "account";
pub(crate) const ATTR_SCORE: &str = "score";
pub(crate) const ATTR_OUT_OF: &str = "outOf";
pub(crate) const ATTR_SOURCE: &str = "source";
pub(crate) const ATTR_VALUE: &str = "value";
pub(crate) const ATTR_TEXT: &str = "text";

/// Indentation used for each nesting level
pub(crate) const INDENT: &str = "  ";

/// File extension of rubric markup files
pub const GML_EXTENSION: &str = "gml";
