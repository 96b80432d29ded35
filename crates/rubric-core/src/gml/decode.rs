use std::io::Read;
use std::path::Path;

use super::element::{read_tree, Element};
use super::*;
use crate::error::{Result, RubricError};
use crate::model::{Detail, Rubric, Section, Student, Subsection, TimeStatus, EXTRA_CREDIT_NAME};
use crate::text::parse_number;

const RUBRIC_CHILDREN: &[&str] = &[STUDENT, SECTION, EXTRA_CREDIT];
const SECTION_CHILDREN: &[&str] = &[SUBSECTION, NOTES, COMMENTS];
const SUBSECTION_CHILDREN: &[&str] = &[DETAIL];
const ENTRIES_CHILDREN: &[&str] = &[ENTRY];

/// Decode a rubric from markup text. `path` is only used in errors.
#[tracing::instrument(skip(content, path), fields(path = %path.display()))]
pub fn decode_str(content: &str, path: &Path) -> Result<Rubric> {
    decode_reader(content.as_bytes(), path)
}

/// Decode a rubric from any reader. `path` is only used in errors.
pub fn decode_reader<R: Read>(source: R, path: &Path) -> Result<Rubric> {
    let root = read_tree(source, path)?;
    Decoder { path }.rubric(&root)
}

struct Decoder<'a> {
    path: &'a Path,
}

impl Decoder<'_> {
    fn rubric(&self, element: &Element) -> Result<Rubric> {
        if element.name != RUBRIC {
            return Err(RubricError::decode(
                self.path,
                format!("expected root <{}>, found <{}>", RUBRIC, element.name),
            ));
        }

        let name = self.required(element, ATTR_NAME)?;
        let number = self.integer(element, ATTR_NUMBER)?;
        let status: TimeStatus = self
            .required(element, ATTR_STATUS)?
            .parse()
            .map_err(|e| RubricError::decode(self.path, e))?;
        let days_late = match element.attr(ATTR_DAYS_LATE) {
            Some(_) => u32::try_from(self.integer(element, ATTR_DAYS_LATE)?).map_err(|_| {
                RubricError::decode(self.path, "daysLate must not be negative")
            })?,
            None => 0,
        };

        let mut student = None;
        let mut sections = Vec::new();
        let mut extra_credit = None;

        for child in &element.children {
            match child.name.as_str() {
                STUDENT => {
                    self.leaf(child)?;
                    if student.is_some() {
                        crate::bail_decode!(self.path, "more than one <{}> element", STUDENT);
                    }
                    student = Some(Student::new(
                        self.required(child, ATTR_NAME)?,
                        self.required(child, ATTR_ACCOUNT)?,
                    ));
                }
                SECTION => {
                    let name = self.required(child, ATTR_NAME)?;
                    sections.push(self.section(child, name)?);
                }
                EXTRA_CREDIT => {
                    if extra_credit.is_some() {
                        crate::bail_decode!(self.path, "more than one <{}> element", EXTRA_CREDIT);
                    }
                    let name = child.attr(ATTR_NAME).unwrap_or(EXTRA_CREDIT_NAME);
                    extra_credit = Some(self.section(child, name)?);
                }
                other => return Err(self.unsupported(RUBRIC, other, RUBRIC_CHILDREN)),
            }
        }

        let Some(student) = student else {
            crate::bail_decode!(self.path, "missing <{}> element", STUDENT);
        };

        Ok(Rubric {
            name: name.to_string(),
            number,
            student,
            status,
            days_late,
            sections,
            extra_credit: extra_credit.unwrap_or_else(|| Section::new(EXTRA_CREDIT_NAME)),
        })
    }

    fn section(&self, element: &Element, name: &str) -> Result<Section> {
        let mut section = Section::new(name);

        for child in &element.children {
            match child.name.as_str() {
                SUBSECTION => section.subsections.push(self.subsection(child)?),
                NOTES => section.notes.extend(self.entries(child)?),
                COMMENTS => section.comments.extend(self.entries(child)?),
                other => return Err(self.unsupported(&element.name, other, SECTION_CHILDREN)),
            }
        }

        Ok(section)
    }

    fn subsection(&self, element: &Element) -> Result<Subsection> {
        let mut subsection = Subsection::new(
            self.required(element, ATTR_NAME)?,
            self.number(element, ATTR_SCORE)?,
            self.number(element, ATTR_OUT_OF)?,
        );
        subsection.source = element.attr(ATTR_SOURCE).map(str::to_string);

        for child in &element.children {
            match child.name.as_str() {
                DETAIL => {
                    self.leaf(child)?;
                    subsection.details.push(Detail::new(
                        self.required(child, ATTR_NAME)?,
                        self.number(child, ATTR_VALUE)?,
                    ));
                }
                other => return Err(self.unsupported(SUBSECTION, other, SUBSECTION_CHILDREN)),
            }
        }

        Ok(subsection)
    }

    fn entries(&self, element: &Element) -> Result<Vec<String>> {
        element
            .children
            .iter()
            .map(|child| {
                if child.name != ENTRY {
                    return Err(self.unsupported(&element.name, &child.name, ENTRIES_CHILDREN));
                }
                self.leaf(child)?;
                Ok(self.required(child, ATTR_TEXT)?.to_string())
            })
            .collect()
    }

    /// Elements that take no children
    fn leaf(&self, element: &Element) -> Result<()> {
        match element.children.first() {
            Some(child) => Err(self.unsupported(&element.name, &child.name, &[])),
            None => Ok(()),
        }
    }

    fn required<'e>(&self, element: &'e Element, attr: &str) -> Result<&'e str> {
        element.attr(attr).ok_or_else(|| {
            RubricError::decode(
                self.path,
                format!("missing required attribute `{}` on <{}>", attr, element.name),
            )
        })
    }

    fn number(&self, element: &Element, attr: &str) -> Result<f64> {
        let text = self.required(element, attr)?;
        parse_number(text).ok_or_else(|| {
            RubricError::decode(
                self.path,
                format!("attribute `{}` on <{}> is not a number: {:?}", attr, element.name, text),
            )
        })
    }

    fn integer(&self, element: &Element, attr: &str) -> Result<i64> {
        let text = self.required(element, attr)?;
        text.trim().parse::<i64>().map_err(|_| {
            RubricError::decode(
                self.path,
                format!("attribute `{}` on <{}> is not an integer: {:?}", attr, element.name, text),
            )
        })
    }

    fn unsupported(&self, parent: &str, node: &str, supported: &[&str]) -> RubricError {
        RubricError::unsupported_element(self.path, parent, node, supported)
    }
}
