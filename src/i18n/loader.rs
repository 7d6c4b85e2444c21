//! Translation file loader for user-provided overrides.

use std::collections::HashMap;
use std::path::Path;

/// Parse `key = value` lines, skipping blanks and `#` comments.
pub(crate) fn parse_ftl(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if !key.is_empty() {
                map.insert(key.to_string(), value.trim().to_string());
            }
        }
    }
    map
}

/// Loads .ftl files from disk.
#[derive(Debug, Default)]
pub struct TranslationLoader {
    translations: HashMap<String, String>,
}

impl TranslationLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every .ftl file of a directory, later files win on duplicate keys.
    pub fn load_from_dir(&mut self, dir: &Path) -> Result<(), TranslationLoadError> {
        if !dir.is_dir() {
            return Err(TranslationLoadError::DirectoryNotFound(
                dir.display().to_string(),
            ));
        }

        let mut paths = Vec::new();
        for entry in
            std::fs::read_dir(dir).map_err(|e| TranslationLoadError::IoError(e.to_string()))?
        {
            let entry = entry.map_err(|e| TranslationLoadError::IoError(e.to_string()))?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "ftl") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in paths {
            self.load_file(&path)?;
        }

        Ok(())
    }

    pub fn load_file(&mut self, path: &Path) -> Result<(), TranslationLoadError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TranslationLoadError::IoError(e.to_string()))?;
        self.translations.extend(parse_ftl(&content));
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(|s| s.as_str())
    }

    pub fn count(&self) -> usize {
        self.translations.len()
    }

    pub fn into_translations(self) -> HashMap<String, String> {
        self.translations
    }
}

/// Errors that can occur when loading translations.
#[derive(Debug, thiserror::Error)]
pub enum TranslationLoadError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("IO error: {0}")]
    IoError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_ftl_skips_comments() {
        let map = parse_ftl("# header\n\nhome = Home\n  stats=Stats  \n= orphan\nbroken line\n");
        assert_eq!(map.len(), 2);
        assert_eq!(map["home"], "Home");
        assert_eq!(map["stats"], "Stats");
    }

    #[test]
    fn test_load_from_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.ftl"), "home = Start\nback = Back").unwrap();
        std::fs::write(dir.path().join("b.ftl"), "home = Main").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored = yes").unwrap();

        let mut loader = TranslationLoader::new();
        loader.load_from_dir(dir.path()).unwrap();
        assert_eq!(loader.count(), 2);
        assert_eq!(loader.get("home"), Some("Main"));
        assert_eq!(loader.get("ignored"), None);
    }

    #[test]
    fn test_missing_dir() {
        let dir = TempDir::new().unwrap();
        let mut loader = TranslationLoader::new();
        let result = loader.load_from_dir(&dir.path().join("nope"));
        assert!(matches!(result, Err(TranslationLoadError::DirectoryNotFound(_))));
    }
}
