//! Loading command inputs

use std::path::{Path, PathBuf};

use rubric_core::config::AssignmentConfig;
use rubric_core::error::Result;
use rubric_core::gml::GML_EXTENSION;
use rubric_core::model::Rubric;
use rubric_core::store::load_gml;
use walkdir::WalkDir;

/// Expand directories into the rubric files beneath them, sorted by path.
/// Plain file arguments are kept as given.
pub fn collect_gml(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }
        let mut found: Vec<PathBuf> = WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == GML_EXTENSION))
            .map(|e| e.into_path())
            .collect();
        found.sort();
        files.extend(found);
    }
    files
}

/// Load every rubric, stopping at the first failure
pub fn load_rubrics(paths: &[PathBuf]) -> Result<Vec<Rubric>> {
    paths.iter().map(|p| load_gml(p)).collect()
}

pub fn load_assignment(path: &Path) -> Result<AssignmentConfig> {
    AssignmentConfig::load(path)
}
