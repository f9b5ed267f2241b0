//! # Router Module
//!
//! The minimal router abstraction controllers register against and the
//! loader composes. It deliberately stops short of a web framework: there is
//! no path matching and no dispatch here, only registration, mounting and an
//! enumerable binding table for introspection.
//!
//! ## Overview
//!
//! - [`Router`] — an isolated sub-router. Controllers call its verb methods
//!   (`get`, `post`, ..., `all`) to register [`Binding`]s; registration order
//!   is preserved and observable through [`Router::bindings`].
//! - [`App`] — the application handle sub-routers are mounted onto, one
//!   mount at a time. Exposes [`App::mounts`] so a host can wire the mounted
//!   routers into its own server.
//! - [`SubRouter`] — the mountable abstraction. Its binding table is
//!   optional: a foreign handle that hides its table is still mountable but
//!   fails introspection.
//! - [`MountPoint`] — immutable `(mount path, router handle)` pair created
//!   at mount time.
//!
//! ## Example
//!
//! ```rust
//! use treemount::router::{App, Router};
//! use treemount::handler::echo_handler;
//!
//! let mut app = App::new();
//! let mut router = Router::new();
//! router.get("/", echo_handler);
//! router.post("/refresh", echo_handler);
//! app.mount("/api/auth", router);
//!
//! assert_eq!(app.mounts().len(), 1);
//! ```

mod core;

pub use core::{App, Binding, MountPoint, Router, SubRouter};
