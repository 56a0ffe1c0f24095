use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::{AppError, Node};
use crate::ports::{TemplateDefinition, TemplateSource};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const TEMPLATE_EXTENSION: &str = "yml";

/// Built-in page templates compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplateSource;

impl EmbeddedTemplateSource {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for EmbeddedTemplateSource {
    fn templates(&self) -> Result<Vec<TemplateDefinition>, AppError> {
        let mut definitions = Vec::new();
        collect_templates(&TEMPLATES_DIR, &mut definitions)?;
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(definitions)
    }
}

fn collect_templates(
    dir: &'static Dir,
    definitions: &mut Vec<TemplateDefinition>,
) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let path = file.path();
                if path.extension().and_then(|ext| ext.to_str()) != Some(TEMPLATE_EXTENSION) {
                    continue;
                }
                let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                    continue;
                };
                let content = file.contents_utf8().ok_or_else(|| {
                    AppError::parse_error(format!("template {}", name), "not valid UTF-8")
                })?;
                let structure: Node = serde_yaml::from_str(content)
                    .map_err(|e| AppError::parse_error(format!("template {}", name), e))?;
                definitions.push(TemplateDefinition { name: name.to_string(), structure });
            }
            DirEntry::Dir(subdir) => collect_templates(subdir, definitions)?,
        }
    }
    Ok(())
}
