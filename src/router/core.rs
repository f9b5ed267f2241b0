use crate::handler::{Handler, HandlerRequest, HandlerResponse};
use http::Method;
use std::fmt;
use std::sync::Arc;

/// A single registered (method, relative path, handler) triple.
///
/// `method` of `None` is the wildcard: the binding matches any verb and
/// renders as `*` in reports.
#[derive(Clone)]
pub struct Binding {
    pub method: Option<Method>,
    pub path: String,
    handler: Handler,
}

impl Binding {
    /// Shared handle to the registered handler.
    pub fn handler(&self) -> Handler {
        Arc::clone(&self.handler)
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// An isolated sub-router: an ordered collection of bindings.
///
/// Controllers receive a fresh `Router` and register bindings on it
/// synchronously; afterwards the router is mounted and never mutated again.
/// The binding table keeps registration order.
#[derive(Default)]
pub struct Router {
    bindings: Vec<Binding>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding for a concrete verb.
    pub fn route<F>(&mut self, method: Method, path: &str, handler: F)
    where
        F: Fn(HandlerRequest) -> HandlerResponse + Send + Sync + 'static,
    {
        self.bindings.push(Binding {
            method: Some(method),
            path: path.to_string(),
            handler: Arc::new(handler),
        });
    }

    /// Register a wildcard binding that matches any verb.
    pub fn all<F>(&mut self, path: &str, handler: F)
    where
        F: Fn(HandlerRequest) -> HandlerResponse + Send + Sync + 'static,
    {
        self.bindings.push(Binding {
            method: None,
            path: path.to_string(),
            handler: Arc::new(handler),
        });
    }

    pub fn get<F>(&mut self, path: &str, handler: F)
    where
        F: Fn(HandlerRequest) -> HandlerResponse + Send + Sync + 'static,
    {
        self.route(Method::GET, path, handler);
    }

    pub fn post<F>(&mut self, path: &str, handler: F)
    where
        F: Fn(HandlerRequest) -> HandlerResponse + Send + Sync + 'static,
    {
        self.route(Method::POST, path, handler);
    }

    pub fn put<F>(&mut self, path: &str, handler: F)
    where
        F: Fn(HandlerRequest) -> HandlerResponse + Send + Sync + 'static,
    {
        self.route(Method::PUT, path, handler);
    }

    pub fn delete<F>(&mut self, path: &str, handler: F)
    where
        F: Fn(HandlerRequest) -> HandlerResponse + Send + Sync + 'static,
    {
        self.route(Method::DELETE, path, handler);
    }

    pub fn patch<F>(&mut self, path: &str, handler: F)
    where
        F: Fn(HandlerRequest) -> HandlerResponse + Send + Sync + 'static,
    {
        self.route(Method::PATCH, path, handler);
    }

    pub fn head<F>(&mut self, path: &str, handler: F)
    where
        F: Fn(HandlerRequest) -> HandlerResponse + Send + Sync + 'static,
    {
        self.route(Method::HEAD, path, handler);
    }

    pub fn options<F>(&mut self, path: &str, handler: F)
    where
        F: Fn(HandlerRequest) -> HandlerResponse + Send + Sync + 'static,
    {
        self.route(Method::OPTIONS, path, handler);
    }

    /// Registered bindings in registration order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("bindings", &self.bindings)
            .finish()
    }
}

/// Anything mountable onto an [`App`].
///
/// `bindings` returns `None` when the handle does not expose its binding
/// table; introspecting such a mount is a caller bug and reported as
/// [`crate::Error::MalformedRouter`].
pub trait SubRouter: Send + Sync {
    fn bindings(&self) -> Option<&[Binding]>;
}

impl SubRouter for Router {
    fn bindings(&self) -> Option<&[Binding]> {
        Some(&self.bindings)
    }
}

/// Immutable (mount path, sub-router) pair created at mount time.
#[derive(Clone)]
pub struct MountPoint {
    pub path: String,
    pub router: Arc<dyn SubRouter>,
}

impl fmt::Debug for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountPoint")
            .field("path", &self.path)
            .field(
                "bindings",
                &self.router.bindings().map(<[Binding]>::len),
            )
            .finish()
    }
}

/// Application handle sub-routers are mounted onto.
///
/// Mutated strictly sequentially, one mount at a time. Hosts read
/// [`App::mounts`] after the load pass to wire dispatch.
#[derive(Debug, Default)]
pub struct App {
    mounts: Vec<MountPoint>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a sub-router at `path` and return the created mount point.
    pub fn mount<R>(&mut self, path: impl Into<String>, router: R) -> MountPoint
    where
        R: SubRouter + 'static,
    {
        self.mount_arc(path, Arc::new(router))
    }

    /// Mount an already-shared router handle.
    pub fn mount_arc(
        &mut self,
        path: impl Into<String>,
        router: Arc<dyn SubRouter>,
    ) -> MountPoint {
        let mount = MountPoint {
            path: path.into(),
            router,
        };
        self.mounts.push(mount.clone());
        mount
    }

    /// Mount points in mount order.
    pub fn mounts(&self) -> &[MountPoint] {
        &self.mounts
    }
}
