//! Path resolution for rubric and report files

use std::path::{Path, PathBuf};

use crate::gml::GML_EXTENSION;
use crate::grd::GRD_EXTENSION;

/// Directory holding one subdirectory of rubrics per gradable part
pub const RUBRICS_DIR: &str = "rubrics";
/// Directory holding one subdirectory of reports per handin
pub const GRADES_DIR: &str = "grades";

/// Maps assignment identifiers to file locations
pub trait PathResolver {
    /// Rubric file for one group's copy of a gradable part
    fn gml_path(&self, part: &str, group: &str) -> PathBuf;

    /// Grade report for one group's handin
    fn grd_path(&self, handin: &str, group: &str) -> PathBuf;
}

/// Files laid out under a single assignment root:
///
/// ```text
/// <root>/rubrics/<part>/<group>.gml
/// <root>/grades/<handin>/<group>.grd
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryLayout {
    root: PathBuf,
}

impl DirectoryLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectoryLayout { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn rubrics_dir(&self) -> PathBuf {
        self.root.join(RUBRICS_DIR)
    }

    pub fn grades_dir(&self) -> PathBuf {
        self.root.join(GRADES_DIR)
    }
}

impl PathResolver for DirectoryLayout {
    fn gml_path(&self, part: &str, group: &str) -> PathBuf {
        self.rubrics_dir()
            .join(part)
            .join(format!("{}.{}", group, GML_EXTENSION))
    }

    fn grd_path(&self, handin: &str, group: &str) -> PathBuf {
        self.grades_dir()
            .join(handin)
            .join(format!("{}.{}", group, GRD_EXTENSION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_layout_paths() {
        let layout = DirectoryLayout::new("/course/lab3");
        assert_eq!(
            layout.gml_path("code", "alovelac"),
            PathBuf::from("/course/lab3/rubrics/code/alovelac.gml")
        );
        assert_eq!(
            layout.grd_path("lab3", "alovelac"),
            PathBuf::from("/course/lab3/grades/lab3/alovelac.grd")
        );
    }

    #[test]
    fn test_group_names_with_dots_keep_their_stem() {
        let layout = DirectoryLayout::new("/course");
        let path = layout.gml_path("code", "team.7");
        assert_eq!(path.file_name().unwrap(), "team.7.gml");
    }
}
