//! Project snapshot loading.

use std::path::Path;

use anyhow::{Context, Result};

use sitewright_core::ProjectData;

use crate::demo_data;

/// Loads a project snapshot from disk, or the built-in demo project when
/// no path is given.
pub fn load_project(path: Option<&Path>) -> Result<ProjectData> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading project snapshot {}", path.display()))?;
            let project: ProjectData = serde_json::from_str(&raw)
                .with_context(|| format!("parsing project snapshot {}", path.display()))?;
            Ok(project)
        }
        None => Ok(demo_data::demo_project()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_yields_demo_project() {
        let project = load_project(None).unwrap();
        assert!(!project.pages.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_project(Some(Path::new("/nonexistent/project.json"))).is_err());
    }
}
