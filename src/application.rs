//! Minimal UI-behavior application
//!
//! Stands in for the behavior framework the theme registers its
//! controllers with. The application owns the controller registry for
//! the process lifetime; registration requires a started instance.

use crate::manifest::ControllerDefinition;
use crate::registrar::ControllerRegistry;
use std::collections::HashMap;

/// A started behavior application holding registered controllers.
///
/// `start()` is the only constructor, so every `register` call is
/// guaranteed to happen on an initialized instance.
pub struct Application {
    controllers: HashMap<String, ControllerDefinition>,
}

impl Application {
    /// Start the application.
    pub fn start() -> Self {
        tracing::info!("behavior application started");
        Self {
            controllers: HashMap::new(),
        }
    }

    /// Look up a registered controller by identifier.
    pub fn controller(&self, identifier: &str) -> Option<&ControllerDefinition> {
        self.controllers.get(identifier)
    }

    /// All registered identifiers, sorted for stable output.
    pub fn identifiers(&self) -> Vec<String> {
        let mut identifiers: Vec<String> = self.controllers.keys().cloned().collect();
        identifiers.sort();
        identifiers
    }

    pub fn controller_count(&self) -> usize {
        self.controllers.len()
    }
}

impl ControllerRegistry for Application {
    /// Store a controller definition under `identifier`.
    ///
    /// Registering the same identifier again replaces the previous
    /// definition. A registration without a default export is dropped
    /// with a warning; the registrar hands those through untouched and
    /// the policy lives here.
    fn register(&mut self, identifier: &str, definition: Option<ControllerDefinition>) {
        match definition {
            Some(definition) => {
                self.controllers.insert(identifier.to_string(), definition);
            }
            None => {
                tracing::warn!("controller '{}' has no default export, ignoring", identifier);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(source: &str) -> ControllerDefinition {
        ControllerDefinition {
            source: source.to_string(),
        }
    }

    #[test]
    fn test_start_has_no_controllers() {
        let app = Application::start();
        assert_eq!(app.controller_count(), 0);
        assert!(app.identifiers().is_empty());
    }

    #[test]
    fn test_register_and_lookup() {
        let mut app = Application::start();
        app.register("dropdown", Some(definition("export default {}")));

        assert_eq!(app.controller_count(), 1);
        let found = app.controller("dropdown");
        assert!(found.is_some());
        assert_eq!(found.unwrap().source, "export default {}");
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut app = Application::start();
        app.register("nav", Some(definition("first")));
        app.register("nav", Some(definition("second")));

        assert_eq!(app.controller_count(), 1);
        assert_eq!(app.controller("nav").unwrap().source, "second");
    }

    #[test]
    fn test_register_without_default_is_ignored() {
        let mut app = Application::start();
        app.register("ghost", None);

        assert_eq!(app.controller_count(), 0);
        assert!(app.controller("ghost").is_none());
    }

    #[test]
    fn test_identifiers_are_sorted() {
        let mut app = Application::start();
        app.register("zeta", Some(definition("z")));
        app.register("alpha", Some(definition("a")));
        app.register("mid", Some(definition("m")));

        assert_eq!(app.identifiers(), vec!["alpha", "mid", "zeta"]);
    }
}
