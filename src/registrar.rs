//! Convention-based controller registration
//!
//! Discovered module entries whose path names a controller
//! (`*_controller.*` or `*-controller.*`) are registered with the
//! UI-behavior framework under an identifier derived from the path.
//! Everything else in the manifest is skipped without comment.

use crate::manifest::{ControllerDefinition, ModuleEntry};
use once_cell::sync::Lazy;
use regex::Regex;

/// Registry half of the UI-behavior framework contract.
///
/// The registrar only ever appends; it never reads back, updates, or
/// removes entries. A repeated identifier overwrites per the registry's
/// own policy (last write wins for [`Application`](crate::application::Application)).
pub trait ControllerRegistry {
    fn register(&mut self, identifier: &str, definition: Option<ControllerDefinition>);
}

static CONTROLLER_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[_-]controller\..*$").expect("valid suffix pattern"));

/// Converts a batch of discovered file-module pairs into named
/// registrations, using a fixed naming convention.
pub struct Registrar {
    root_prefix: String,
}

impl Registrar {
    pub fn new(root_prefix: impl Into<String>) -> Self {
        Self {
            root_prefix: root_prefix.into(),
        }
    }

    /// An entry is registrable iff its path names a controller file,
    /// in either snake-case or kebab-case convention.
    pub fn is_eligible(path: &str) -> bool {
        path.contains("_controller.") || path.contains("-controller.")
    }

    /// Derive the public identifier for an eligible controller path.
    ///
    /// The root prefix is stripped from the front and the
    /// `[_-]controller.<ext>` suffix from the back; then the first
    /// underscore becomes `-` and the first slash becomes `--`. Later
    /// underscores and slashes pass through unchanged, so
    /// `./controllers/x/y/z_controller.js` derives `x--y/z`.
    ///
    /// Pure function of the path: no state, no randomness.
    pub fn derive_identifier(&self, path: &str) -> String {
        let stripped = path.strip_prefix(&self.root_prefix).unwrap_or(path);
        let stripped = CONTROLLER_SUFFIX.replace(stripped, "");
        let stripped = stripped.replacen('_', "-", 1);
        stripped.replacen('/', "--", 1)
    }

    /// Register every eligible entry's default export with `registry`.
    ///
    /// Returns the derived identifiers in registration order. No
    /// validation happens here: a missing default export is passed
    /// through, and colliding identifiers simply register again.
    pub fn register_all<R: ControllerRegistry>(
        &self,
        entries: Vec<ModuleEntry>,
        registry: &mut R,
    ) -> Vec<String> {
        let mut registered = Vec::new();

        for entry in entries {
            if !Self::is_eligible(&entry.path) {
                continue;
            }

            let identifier = self.derive_identifier(&entry.path);
            tracing::debug!("registering controller '{}' from {}", identifier, entry.path);
            registry.register(&identifier, entry.module.default);
            registered.push(identifier);
        }

        registered
    }
}
