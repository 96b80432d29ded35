use std::io::Write;

use xml::writer::{EmitterConfig, EventWriter, XmlEvent};

use super::*;
use crate::error::{Result, RubricError};
use crate::model::{Rubric, Section, Subsection};
use crate::text::number_text;

/// Encode a rubric to markup text
pub fn encode(rubric: &Rubric) -> Result<String> {
    let mut buffer = Vec::new();
    encode_to(rubric, &mut buffer, "<memory>")?;
    String::from_utf8(buffer).map_err(|e| RubricError::encode("<memory>", e))
}

/// Encode a rubric into `sink`. `target` names the destination in errors.
#[tracing::instrument(skip(rubric, sink), fields(rubric = %rubric.name))]
pub fn encode_to<W: Write>(rubric: &Rubric, sink: W, target: &str) -> Result<()> {
    let writer = EmitterConfig::new()
        .perform_indent(true)
        .indent_string(INDENT)
        .write_document_declaration(false)
        .create_writer(sink);

    let mut encoder = Encoder { writer, target };
    encoder.rubric(rubric)?;

    let mut sink = encoder.writer.into_inner();
    sink.write_all(b"\n")
        .and_then(|_| sink.flush())
        .map_err(|e| RubricError::encode(target, e))
}

struct Encoder<'t, W: Write> {
    writer: EventWriter<W>,
    target: &'t str,
}

impl<W: Write> Encoder<'_, W> {
    fn rubric(&mut self, rubric: &Rubric) -> Result<()> {
        let number = rubric.number.to_string();
        let status = rubric.status.to_string();
        let days_late = rubric.days_late.to_string();
        self.start(
            RUBRIC,
            &[
                (ATTR_NAME, rubric.name.as_str()),
                (ATTR_NUMBER, number.as_str()),
                (ATTR_STATUS, status.as_str()),
                (ATTR_DAYS_LATE, days_late.as_str()),
            ],
        )?;

        self.start(
            STUDENT,
            &[
                (ATTR_NAME, rubric.student.name.as_str()),
                (ATTR_ACCOUNT, rubric.student.account.as_str()),
            ],
        )?;
        self.end()?;

        for section in &rubric.sections {
            self.start(SECTION, &[(ATTR_NAME, section.name.as_str())])?;
            self.section_body(section)?;
            self.end()?;
        }

        self.start(EXTRA_CREDIT, &[(ATTR_NAME, rubric.extra_credit.name.as_str())])?;
        self.section_body(&rubric.extra_credit)?;
        self.end()?;

        self.end()
    }

    fn section_body(&mut self, section: &Section) -> Result<()> {
        for subsection in &section.subsections {
            self.subsection(subsection)?;
        }
        self.entries(NOTES, &section.notes)?;
        self.entries(COMMENTS, &section.comments)
    }

    fn subsection(&mut self, subsection: &Subsection) -> Result<()> {
        let score = number_text(subsection.score);
        let out_of = number_text(subsection.out_of);
        let mut attrs = vec![
            (ATTR_NAME, subsection.name.as_str()),
            (ATTR_SCORE, score.as_str()),
            (ATTR_OUT_OF, out_of.as_str()),
        ];
        if let Some(source) = &subsection.source {
            attrs.push((ATTR_SOURCE, source.as_str()));
        }
        self.start(SUBSECTION, &attrs)?;

        for detail in &subsection.details {
            let value = number_text(detail.value);
            self.start(DETAIL, &[(ATTR_NAME, detail.name.as_str()), (ATTR_VALUE, value.as_str())])?;
            self.end()?;
        }

        self.end()
    }

    /// Empty lists are omitted entirely
    fn entries(&mut self, tag: &str, entries: &[String]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        self.start(tag, &[])?;
        for entry in entries {
            self.start(ENTRY, &[(ATTR_TEXT, entry.as_str())])?;
            self.end()?;
        }
        self.end()
    }

    fn start(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut event = XmlEvent::start_element(tag);
        for (name, value) in attrs {
            event = event.attr(*name, *value);
        }
        self.writer
            .write(event)
            .map_err(|e| RubricError::encode(self.target, e))
    }

    fn end(&mut self) -> Result<()> {
        self.writer
            .write(XmlEvent::end_element())
            .map_err(|e| RubricError::encode(self.target, e))
    }
}
