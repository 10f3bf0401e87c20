//! Asset discovery: walking a theme directory into module entries
//!
//! The build pipeline hands the registrar an ordinary list of
//! (path, module) pairs instead of relying on bundler glob imports.
//! This module produces that list by walking a conventional directory
//! and loading every file whose extension is in the configured list.

use crate::config::Config;
use ignore::WalkBuilder;
use std::path::Path;

/// The registrable payload of a module's default export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerDefinition {
    /// Raw source of the module file.
    pub source: String,
}

/// A loaded asset module.
///
/// `default` carries the module's default export when the loader found
/// one. Files without an `export default` declaration load with
/// `default = None`; what a registry does with that is its own policy.
#[derive(Debug, Clone)]
pub struct Module {
    /// Normalized path of the file this module was loaded from.
    pub path: String,
    /// The module's default export, if any.
    pub default: Option<ControllerDefinition>,
}

/// A discovered (path, module) pair. Consumed once by the registrar.
#[derive(Debug, Clone)]
pub struct ModuleEntry {
    pub path: String,
    pub module: Module,
}

/// The result of one discovery pass over an asset directory.
///
/// Entries are sorted by path so repeated runs over the same tree
/// enumerate identically. Consumers must not depend on the order for
/// correctness, only for reproducible logs and reports.
#[derive(Debug, Default)]
pub struct AssetManifest {
    entries: Vec<ModuleEntry>,
}

impl AssetManifest {
    /// Walk `root/subdir` and load every file whose name ends in one of
    /// `extensions`. Paths in the resulting entries are forward-slash
    /// separated and rooted at `prefix` (e.g. `./controllers/foo_controller.js`).
    ///
    /// A missing directory yields an empty manifest with a warning.
    /// Unreadable files are skipped with a warning; discovery never aborts.
    pub fn discover(root: &Path, subdir: &str, prefix: &str, extensions: &[String]) -> Self {
        let dir = root.join(subdir);

        if !dir.is_dir() {
            tracing::warn!("asset directory does not exist: {:?}", dir);
            return Self::default();
        }

        let mut entries = Vec::new();

        for result in WalkBuilder::new(&dir).follow_links(false).build() {
            let dent = match result {
                Ok(dent) => dent,
                Err(e) => {
                    tracing::warn!("skipping unreadable directory entry: {}", e);
                    continue;
                }
            };

            if !dent.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }

            let file_name = dent.file_name().to_string_lossy();
            if !matches_extension(&file_name, extensions) {
                continue;
            }

            let path = match relative_slash_path(dent.path(), &dir) {
                Some(rel) => format!("{prefix}{rel}"),
                None => continue,
            };

            let source = match std::fs::read_to_string(dent.path()) {
                Ok(source) => source,
                Err(e) => {
                    tracing::warn!("failed to read {:?}: {}", dent.path(), e);
                    continue;
                }
            };

            let default = find_default_export(&source);
            entries.push(ModuleEntry {
                path: path.clone(),
                module: Module { path, default },
            });
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));

        tracing::debug!("discovered {} assets under {:?}", entries.len(), dir);

        Self { entries }
    }

    /// Discover controller modules per the configured naming convention.
    pub fn discover_controllers(theme_root: &Path, config: &Config) -> Self {
        Self::discover(
            theme_root,
            &config.controllers_dir,
            &config.root_prefix,
            &config.controller_extensions,
        )
    }

    pub fn entries(&self) -> &[ModuleEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ModuleEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Match by filename suffix so compound extensions like `js.rb` work.
fn matches_extension(file_name: &str, extensions: &[String]) -> bool {
    extensions
        .iter()
        .any(|ext| file_name.ends_with(&format!(".{ext}")))
}

/// Relative path below `dir`, joined with forward slashes on every platform.
fn relative_slash_path(path: &Path, dir: &Path) -> Option<String> {
    let rel = path.strip_prefix(dir).ok()?;
    let segments: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(segments.join("/"))
}

/// A module's default export is whatever its `export default` declaration
/// provides; the loader only records whether one exists and keeps the
/// source as the payload.
fn find_default_export(source: &str) -> Option<ControllerDefinition> {
    if source.contains("export default") {
        Some(ControllerDefinition {
            source: source.to_string(),
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_file(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_discover_missing_directory_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config::default();

        let manifest = AssetManifest::discover_controllers(temp_dir.path(), &config);
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_discover_filters_by_extension() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_file(
            temp_dir.path(),
            "controllers/hello_controller.js",
            "export default {}",
        );
        write_file(temp_dir.path(), "controllers/readme.md", "# docs");
        write_file(temp_dir.path(), "controllers/styles.css", "body {}");

        let config = Config::default();
        let manifest = AssetManifest::discover_controllers(temp_dir.path(), &config);

        assert_eq!(manifest.len(), 1);
        assert_eq!(
            manifest.entries()[0].path,
            "./controllers/hello_controller.js"
        );
    }

    #[test]
    fn test_discover_compound_extension() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_file(
            temp_dir.path(),
            "controllers/legacy_controller.js.rb",
            "export default {}",
        );
        write_file(temp_dir.path(), "controllers/plain.rb", "puts 'no'");

        let config = Config::default();
        let manifest = AssetManifest::discover_controllers(temp_dir.path(), &config);

        assert_eq!(manifest.len(), 1);
        assert_eq!(
            manifest.entries()[0].path,
            "./controllers/legacy_controller.js.rb"
        );
    }

    #[test]
    fn test_discover_nested_paths_use_forward_slashes() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_file(
            temp_dir.path(),
            "controllers/nested/bar_controller.js",
            "export default {}",
        );

        let config = Config::default();
        let manifest = AssetManifest::discover_controllers(temp_dir.path(), &config);

        assert_eq!(manifest.len(), 1);
        assert_eq!(
            manifest.entries()[0].path,
            "./controllers/nested/bar_controller.js"
        );
    }

    #[test]
    fn test_discover_sorts_entries_by_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_file(
            temp_dir.path(),
            "controllers/zulu_controller.js",
            "export default {}",
        );
        write_file(
            temp_dir.path(),
            "controllers/alpha_controller.js",
            "export default {}",
        );
        write_file(
            temp_dir.path(),
            "controllers/mid/node_controller.js",
            "export default {}",
        );

        let config = Config::default();
        let manifest = AssetManifest::discover_controllers(temp_dir.path(), &config);

        let paths: Vec<&str> = manifest.entries().iter().map(|e| e.path.as_str()).collect();
        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
    }

    #[test]
    fn test_default_export_detection() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_file(
            temp_dir.path(),
            "controllers/with_controller.js",
            "export default { connect() {} }",
        );
        write_file(
            temp_dir.path(),
            "controllers/without_controller.js",
            "const helper = () => {};",
        );

        let config = Config::default();
        let manifest = AssetManifest::discover_controllers(temp_dir.path(), &config);

        assert_eq!(manifest.len(), 2);

        let with = manifest
            .entries()
            .iter()
            .find(|e| e.path.contains("with_"))
            .unwrap();
        assert!(with.module.default.is_some());
        assert!(with
            .module
            .default
            .as_ref()
            .unwrap()
            .source
            .contains("connect"));

        let without = manifest
            .entries()
            .iter()
            .find(|e| e.path.contains("without_"))
            .unwrap();
        assert!(without.module.default.is_none());
    }
}
