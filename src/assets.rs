//! Inert theme assets: stylesheets and component files
//!
//! Stylesheets and component assets are included for their side effect
//! in the built site; nothing here is registered with the behavior
//! framework. The bootstrap only resolves, counts, and reports them.

use crate::config::Config;
use crate::manifest::AssetManifest;
use std::path::{Path, PathBuf};

/// The theme's stylesheet imports, resolved against the theme root.
#[derive(Debug, Default)]
pub struct StylesheetSet {
    paths: Vec<PathBuf>,
}

impl StylesheetSet {
    /// Resolve each configured stylesheet path. Missing files are
    /// warned about and dropped; present files keep configured order.
    pub fn resolve(theme_root: &Path, config: &Config) -> Self {
        let mut paths = Vec::new();

        for stylesheet in &config.stylesheets {
            let path = theme_root.join(stylesheet);
            if path.is_file() {
                paths.push(path);
            } else {
                tracing::warn!("stylesheet not found: {:?}", path);
            }
        }

        Self { paths }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Discover component assets under the configured components directory.
///
/// Components are bundled wholesale (scripts and styles alike) and never
/// registered, so the manifest is returned as-is for counting/reporting.
pub fn discover_components(theme_root: &Path, config: &Config) -> AssetManifest {
    let prefix = format!("./{}/", config.components_dir);
    AssetManifest::discover(
        theme_root,
        &config.components_dir,
        &prefix,
        &config.component_extensions,
    )
}
