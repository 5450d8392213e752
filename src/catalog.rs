use crate::error::{Result, ScreenError};
use crate::types::assessment::AssessmentDefinition;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A definition together with the file it came from.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub path: PathBuf,
    pub definition: AssessmentDefinition,
}

fn is_definition_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("toml") | Some("json")
    )
}

/// Load and validate a `.toml` or `.json` assessment definition.
pub fn load_definition(path: &Path) -> Result<AssessmentDefinition> {
    if !path.exists() {
        return Err(ScreenError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let definition: AssessmentDefinition = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|e| {
            ScreenError::InvalidDefinition(format!("{}: {}", path.display(), e))
        })?,
        Some("toml") => toml::from_str(&content).map_err(|e| {
            ScreenError::InvalidDefinition(format!("{}: {}", path.display(), e))
        })?,
        _ => {
            return Err(ScreenError::InvalidDefinition(format!(
                "{}: expected a .toml or .json file",
                path.display()
            )))
        }
    };
    definition.validate()?;
    tracing::debug!(
        id = %definition.id,
        questions = definition.question_count(),
        path = %path.display(),
        "assessment loaded"
    );
    Ok(definition)
}

/// Every definition under `dir`, sorted by id.
pub fn discover(dir: &Path) -> Result<Vec<CatalogEntry>> {
    if !dir.exists() {
        return Err(ScreenError::PathNotFound(dir.display().to_string()));
    }

    let mut entries = Vec::new();
    for path in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| is_definition_file(path))
    {
        let definition = load_definition(&path)?;
        entries.push(CatalogEntry { path, definition });
    }

    let mut seen = HashMap::<&str, &Path>::new();
    for entry in &entries {
        if let Some(first) = seen.insert(entry.definition.id.as_str(), entry.path.as_path()) {
            return Err(ScreenError::InvalidDefinition(format!(
                "assessment id '{}' defined in both {} and {}",
                entry.definition.id,
                first.display(),
                entry.path.display()
            )));
        }
    }

    entries.sort_by(|a, b| a.definition.id.cmp(&b.definition.id));
    Ok(entries)
}

/// Resolve `reference` as a file path first, then as an id inside `dir`.
pub fn resolve(dir: &Path, reference: &str) -> Result<AssessmentDefinition> {
    let as_path = Path::new(reference);
    if is_definition_file(as_path) && as_path.exists() {
        return load_definition(as_path);
    }
    discover(dir)?
        .into_iter()
        .find(|entry| entry.definition.id == reference)
        .map(|entry| entry.definition)
        .ok_or_else(|| ScreenError::AssessmentNotFound(reference.to_string()))
}
