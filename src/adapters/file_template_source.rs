use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::domain::{AppError, Node};
use crate::ports::{TemplateDefinition, TemplateSource};

/// Templates read from a YAML or JSON file mapping template names to structures.
#[derive(Debug, Clone)]
pub struct FileTemplateSource {
    path: PathBuf,
}

impl FileTemplateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TemplateSource for FileTemplateSource {
    fn templates(&self) -> Result<Vec<TemplateDefinition>, AppError> {
        if !self.path.exists() {
            return Err(AppError::InputNotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path)?;
        // YAML 1.2 is a superset of JSON, so one parser covers both formats.
        let entries: IndexMap<String, Node> = serde_yaml::from_str(&content)
            .map_err(|e| AppError::parse_error(format!("templates file {}", self.path.display()), e))?;

        Ok(entries
            .into_iter()
            .map(|(name, structure)| TemplateDefinition { name, structure })
            .collect())
    }
}
