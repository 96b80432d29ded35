//! Loading and saving rubric and report files

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::files::FileServices;
use crate::error::{Result, RubricError};
use crate::gml;
use crate::grd::{self, ReportContext};
use crate::model::Rubric;

/// Result of a save whose content reached disk
#[derive(Debug)]
pub struct WriteOutcome {
    pub path: PathBuf,
    /// Permission sanitization failure, reported but not fatal
    pub sanitize_error: Option<RubricError>,
}

impl WriteOutcome {
    pub fn is_clean(&self) -> bool {
        self.sanitize_error.is_none()
    }
}

/// Load a rubric from a GML file
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_gml(path: &Path) -> Result<Rubric> {
    let file = File::open(path)
        .map_err(|e| RubricError::decode(path, format!("failed to open: {}", e)))?;
    gml::decode_reader(BufReader::new(file), path)
}

/// Encode `rubric` and write it to `path`
#[tracing::instrument(skip(rubric, path, files), fields(path = %path.display(), rubric = %rubric.name))]
pub fn save_gml(rubric: &Rubric, path: &Path, files: &dyn FileServices) -> Result<WriteOutcome> {
    let content = gml::encode(rubric)?;
    write_file(&content, path, files)
}

/// Render a report for `rubrics` and write it to `path`
#[tracing::instrument(skip(rubrics, ctx, path, files), fields(path = %path.display()))]
pub fn save_grd(
    rubrics: &[Rubric],
    ctx: &ReportContext<'_>,
    path: &Path,
    files: &dyn FileServices,
) -> Result<WriteOutcome> {
    let content = grd::render(rubrics, ctx)?;
    write_file(&content, path, files)
}

fn write_file(content: &str, path: &Path, files: &dyn FileServices) -> Result<WriteOutcome> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        files.make_dir(parent)?;
    }

    let stream = files
        .write_stream(path)
        .map_err(|e| RubricError::write(path, e))?;
    let mut writer = BufWriter::new(stream);
    writer
        .write_all(content.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| RubricError::write(path, e))?;
    drop(writer);

    let sanitize_error = match files.sanitize(path) {
        Ok(()) => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "wrote file but could not sanitize permissions");
            Some(e)
        }
    };

    tracing::debug!(bytes = content.len(), "wrote file");
    Ok(WriteOutcome {
        path: path.to_path_buf(),
        sanitize_error,
    })
}
