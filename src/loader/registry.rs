use crate::router::{App, Router};
use std::collections::HashMap;

/// A controller: registers bindings on a fresh sub-router when constructed.
///
/// `register` runs synchronously, exactly once per discovered file per load
/// pass. The `app` handle is available for controllers that need to touch
/// the application directly; most only use `router`.
pub trait Controller: Send + Sync {
    fn register(&self, router: &mut Router, app: &mut App);
}

impl<F> Controller for F
where
    F: Fn(&mut Router, &mut App) + Send + Sync,
{
    fn register(&self, router: &mut Router, app: &mut App) {
        self(router, app)
    }
}

/// Capability that constructs a controller instance when invoked.
pub type ControllerFactory = Box<dyn Fn() -> Box<dyn Controller> + Send + Sync>;

/// Maps discovered controller files to their factories.
///
/// Keys are controllers-root relative paths with `/` separators, e.g.
/// `api/auth/authread.ctrl`. The registry is the explicit stand-in for
/// dynamic module loading: discovery finds the file, the registry supplies
/// the code.
#[derive(Default)]
pub struct ControllerRegistry {
    factories: HashMap<String, ControllerFactory>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for a controller file. Later registrations for the
    /// same key replace earlier ones.
    pub fn register<F, C>(&mut self, file: impl Into<String>, factory: F)
    where
        F: Fn() -> C + Send + Sync + 'static,
        C: Controller + 'static,
    {
        self.factories.insert(
            normalize_key(&file.into()),
            Box::new(move || Box::new(factory())),
        );
    }

    pub fn get(&self, file: &str) -> Option<&ControllerFactory> {
        self.factories.get(&normalize_key(file))
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for ControllerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerRegistry")
            .field("controllers", &self.factories.len())
            .finish()
    }
}

/// Keys tolerate platform separators and a leading `./` or `/`.
fn normalize_key(file: &str) -> String {
    file.replace('\\', "/")
        .trim_start_matches("./")
        .trim_start_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::echo_handler;

    #[test]
    fn test_registry_constructs_controllers() {
        let mut registry = ControllerRegistry::new();
        registry.register("api/a.ctrl", || {
            |router: &mut Router, _app: &mut App| {
                router.get("/", echo_handler);
            }
        });

        let factory = registry.get("api/a.ctrl").unwrap();
        let controller = factory();

        let mut app = App::new();
        let mut router = Router::new();
        controller.register(&mut router, &mut app);
        assert_eq!(router.bindings().len(), 1);
    }

    #[test]
    fn test_keys_are_normalized() {
        let mut registry = ControllerRegistry::new();
        registry.register("./api/a.ctrl", || {
            |_router: &mut Router, _app: &mut App| {}
        });
        assert!(registry.get("api\\a.ctrl").is_some());
        assert!(registry.get("/api/a.ctrl").is_some());
        assert!(registry.get("api/b.ctrl").is_none());
    }
}
