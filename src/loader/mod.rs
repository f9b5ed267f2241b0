//! # Controller Loader Module
//!
//! Discovery and mounting of controllers from a directory tree.
//!
//! ## Overview
//!
//! The loader walks a controllers root depth-first, pre-order. Every file
//! whose extension is on the configured allow-list is a controller
//! candidate; its containing directory, measured relative to the root,
//! decides the mount path. For each candidate the loader asks the
//! [`ControllerRegistry`] for a factory, constructs the controller with a
//! fresh [`crate::router::Router`] and the [`crate::router::App`] handle,
//! and mounts the resulting sub-router.
//!
//! The registry replaces dynamic module loading: discovery finds the files,
//! the registry supplies the code. A discovered file with no registered
//! factory fails the pass with [`crate::Error::ModuleLoad`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use treemount::handler::echo_handler;
//! use treemount::loader::{ControllerLoader, ControllerRegistry};
//! use treemount::router::{App, Router};
//!
//! # fn main() -> Result<(), treemount::Error> {
//! let mut registry = ControllerRegistry::new();
//! registry.register("api/auth/login.ctrl", || {
//!     |router: &mut Router, _app: &mut App| {
//!         router.post("/", echo_handler);
//!     }
//! });
//!
//! let loader = ControllerLoader::new("controllers", registry);
//! let mut app = App::new();
//! let report = loader.load(&mut app)?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

mod core;
mod registry;

pub use core::{ControllerLoader, DiscoveredController, LoaderConfig};
pub use registry::{Controller, ControllerFactory, ControllerRegistry};
