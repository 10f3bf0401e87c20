//! Theme bootstrap sequence
//!
//! Runs once, synchronously, at build/startup: resolve stylesheets,
//! bundle components, then discover and register controllers with an
//! injected registry.

use crate::assets::{discover_components, StylesheetSet};
use crate::config::Config;
use crate::manifest::AssetManifest;
use crate::registrar::{ControllerRegistry, Registrar};
use std::path::{Path, PathBuf};

/// Summary of one bootstrap run.
#[derive(Debug)]
pub struct BootReport {
    /// Stylesheets resolved under the theme root.
    pub stylesheet_count: usize,
    /// Component assets bundled.
    pub component_count: usize,
    /// Controller modules discovered (eligible or not).
    pub controller_entry_count: usize,
    /// Identifiers registered, in registration order. Repeats mean a
    /// derived-name collision where the last registration won.
    pub registered: Vec<String>,
}

/// Bootstrap error types
#[derive(Debug)]
pub enum BootError {
    MissingThemeRoot(PathBuf),
}

impl std::fmt::Display for BootError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BootError::MissingThemeRoot(path) => {
                write!(f, "theme root is not a directory: {}", path.display())
            }
        }
    }
}

impl std::error::Error for BootError {}

/// Load the theme's assets and register its controllers with `registry`.
///
/// The registry must already be started; the caller owns its lifecycle.
/// Missing asset directories and ineligible files are not errors, so
/// the only failure here is a theme root that is not a directory.
pub fn boot<R: ControllerRegistry>(
    theme_root: &Path,
    config: &Config,
    registry: &mut R,
) -> Result<BootReport, BootError> {
    if !theme_root.is_dir() {
        return Err(BootError::MissingThemeRoot(theme_root.to_path_buf()));
    }

    let stylesheets = StylesheetSet::resolve(theme_root, config);
    let components = discover_components(theme_root, config);

    let controllers = AssetManifest::discover_controllers(theme_root, config);
    let controller_entry_count = controllers.len();

    let registrar = Registrar::new(config.root_prefix.clone());
    let registered = registrar.register_all(controllers.into_entries(), registry);

    tracing::info!(
        stylesheets = stylesheets.len(),
        components = components.len(),
        controllers = registered.len(),
        "theme loaded"
    );

    Ok(BootReport {
        stylesheet_count: stylesheets.len(),
        component_count: components.len(),
        controller_entry_count,
        registered,
    })
}
