//! In-place patches for files produced by the generator

use super::{PINNED_PACKAGES, REACT_VERSION};
use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use regex::Regex;
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::LazyLock;
use tokio::fs;

/// Line inserted into the entry point
pub const CSS_IMPORT: &str = "import './index.css'";

static REACT_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^import\s[^\n]*\bfrom\s+['"]react['"];?[ \t]*\r?$"#)
        .expect("valid react import pattern")
});

/// Add the stylesheet import to entry point source.
///
/// Returns `None` when the source already references `./index.css`.
pub fn patch_entry_source(source: &str) -> Option<String> {
    if source.contains("./index.css") {
        return None;
    }

    // the inserted line follows the file's own line endings
    let eol = if source.contains("\r\n") { "\r\n" } else { "\n" };
    let mut patched = String::with_capacity(source.len() + CSS_IMPORT.len() + 2);
    match REACT_IMPORT.find(source) {
        Some(m) => {
            // the match stops before the line feed (a CRLF's `\r` is inside
            // it); an import on the last line may have no line break at all
            let line = source[..m.end()].trim_end_matches('\r');
            let rest = &source[m.end()..];
            patched.push_str(line);
            patched.push_str(eol);
            patched.push_str(CSS_IMPORT);
            patched.push_str(eol);
            patched.push_str(rest.strip_prefix('\n').unwrap_or(rest));
        }
        None => {
            patched.push_str(CSS_IMPORT);
            patched.push_str(eol);
            patched.push_str(source);
        }
    }
    Some(patched)
}

/// Patch `src/main.{jsx|tsx}` so it loads the Tailwind stylesheet
pub async fn patch_entry_point(path: &Path) -> Result<()> {
    let source = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read entry point: {}", path.display()))?;

    if let Some(patched) = patch_entry_source(&source) {
        fs::write(path, patched)
            .await
            .with_context(|| format!("Failed to write entry point: {}", path.display()))?;
    }

    Ok(())
}

/// Force the pinned React versions into package.json source.
///
/// Existing field order is kept; output uses two-space
/// indentation and ends with a newline.
pub fn patch_manifest_source(source: &str, path: &Path) -> Result<String> {
    let mut manifest: Value = serde_json::from_str(source)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let root = manifest
        .as_object_mut()
        .ok_or_else(|| ScaffoldError::ManifestNotObject(path.to_path_buf()))?;

    let dependencies = root
        .entry("dependencies")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| {
            anyhow::anyhow!("`dependencies` in {} is not an object", path.display())
        })?;

    for package in PINNED_PACKAGES {
        dependencies.insert(package.to_string(), Value::String(REACT_VERSION.to_string()));
    }

    let mut output = serde_json::to_string_pretty(&manifest)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    output.push('\n');
    Ok(output)
}

/// Rewrite package.json with the pinned React versions
pub async fn patch_manifest(path: &Path) -> Result<()> {
    let source = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

    let patched = patch_manifest_source(&source, path)?;

    fs::write(path, patched)
        .await
        .with_context(|| format!("Failed to write manifest: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VITE_MAIN: &str = "import { StrictMode } from 'react'\n\
                             import { createRoot } from 'react-dom/client'\n\
                             import App from './App.tsx'\n\
                             \n\
                             createRoot(document.getElementById('root')!).render(\n  <App />,\n)\n";

    const VITE_MANIFEST: &str = r#"{
  "name": "demo-app",
  "private": true,
  "version": "0.0.0",
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "vite build"
  },
  "dependencies": {
    "react": "^18.3.1",
    "react-dom": "^18.3.1"
  },
  "devDependencies": {
    "vite": "^7.0.0"
  }
}
"#;

    #[test]
    fn test_import_inserted_after_react_import() {
        let patched = patch_entry_source(VITE_MAIN).unwrap();
        let lines: Vec<&str> = patched.lines().collect();
        assert_eq!(lines[0], "import { StrictMode } from 'react'");
        assert_eq!(lines[1], CSS_IMPORT);
        assert_eq!(lines[2], "import { createRoot } from 'react-dom/client'");
        assert_eq!(patched.matches(CSS_IMPORT).count(), 1);
    }

    #[test]
    fn test_default_import_with_semicolon() {
        let source = "import React from \"react\";\nimport App from './App';\n";
        let patched = patch_entry_source(source).unwrap();
        assert_eq!(
            patched,
            "import React from \"react\";\nimport './index.css'\nimport App from './App';\n"
        );
    }

    #[test]
    fn test_react_dom_alone_is_not_a_react_import() {
        let source = "import { createRoot } from 'react-dom/client'\n";
        let patched = patch_entry_source(source).unwrap();
        assert_eq!(patched, format!("{}\n{}", CSS_IMPORT, source));
    }

    #[test]
    fn test_import_prepended_without_react_import() {
        let patched = patch_entry_source("console.log('hi')\n").unwrap();
        assert_eq!(patched, "import './index.css'\nconsole.log('hi')\n");
    }

    #[test]
    fn test_react_import_on_last_line_without_newline() {
        let patched = patch_entry_source("import React from 'react'").unwrap();
        assert_eq!(patched, "import React from 'react'\nimport './index.css'\n");
    }

    #[test]
    fn test_crlf_entry_keeps_crlf_line_endings() {
        let source = "import { StrictMode } from 'react'\r\nimport App from './App'\r\n";
        let patched = patch_entry_source(source).unwrap();
        assert_eq!(
            patched,
            "import { StrictMode } from 'react'\r\nimport './index.css'\r\nimport App from './App'\r\n"
        );
        assert_eq!(patched.matches('\n').count(), patched.matches("\r\n").count());
    }

    #[test]
    fn test_crlf_entry_without_react_import() {
        let patched = patch_entry_source("console.log('hi')\r\n").unwrap();
        assert_eq!(patched, "import './index.css'\r\nconsole.log('hi')\r\n");
    }

    #[test]
    fn test_entry_patch_is_idempotent() {
        let once = patch_entry_source(VITE_MAIN).unwrap();
        assert!(patch_entry_source(&once).is_none());

        let existing = "import './index.css'\nimport App from './App'\n";
        assert!(patch_entry_source(existing).is_none());
    }

    #[test]
    fn test_manifest_pins_react() {
        let patched = patch_manifest_source(VITE_MANIFEST, Path::new("package.json")).unwrap();
        assert!(patched.contains("\"react\": \"^19.0.0\""));
        assert!(patched.contains("\"react-dom\": \"^19.0.0\""));
        assert!(patched.ends_with("}\n"));
        // field order and two-space indentation survive the rewrite
        assert_eq!(patched, VITE_MANIFEST.replace("^18.3.1", "^19.0.0"));
    }

    #[test]
    fn test_manifest_patch_is_idempotent() {
        let path = Path::new("package.json");
        let once = patch_manifest_source(VITE_MANIFEST, path).unwrap();
        let twice = patch_manifest_source(&once, path).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_manifest_without_dependencies() {
        let patched =
            patch_manifest_source("{\"name\": \"x\"}", Path::new("package.json")).unwrap();
        let value: Value = serde_json::from_str(&patched).unwrap();
        assert_eq!(value["dependencies"]["react"], "^19.0.0");
        assert_eq!(value["dependencies"]["react-dom"], "^19.0.0");
        assert!(patched.starts_with("{\n  \"name\": \"x\",\n  \"dependencies\""));
    }

    #[test]
    fn test_malformed_manifest_fails() {
        let path = Path::new("package.json");
        assert!(patch_manifest_source("{ not json", path).is_err());

        let err = patch_manifest_source("[1, 2]", path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::ManifestNotObject(_))
        ));
    }

    #[tokio::test]
    async fn test_patch_entry_point_leaves_patched_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.jsx");
        let patched = patch_entry_source(VITE_MAIN).unwrap();
        std::fs::write(&path, &patched).unwrap();

        patch_entry_point(&path).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), patched);
    }
}
