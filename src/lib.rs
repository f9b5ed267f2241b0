//! # treemount
//!
//! **treemount** mounts request-handler controllers discovered from a
//! directory tree onto an application router, then reports every registered
//! route as a deterministic, human-readable listing.
//!
//! ## Overview
//!
//! A controllers directory maps one-to-one onto a URL hierarchy: each
//! controller file found under the root gets its own isolated sub-router,
//! mounted under the path its containing directory spells. Given
//!
//! ```text
//! controllers
//! ├── api
//! │   └── auth
//! │       ├── authread.ctrl
//! │       └── authwrite.ctrl
//! └── charts
//!     └── index.ctrl
//! ```
//!
//! the loader constructs three controllers and mounts their sub-routers at
//! `/api/auth`, `/api/auth` and `/charts`. Controllers are plain values
//! registered ahead of time in a [`loader::ControllerRegistry`] — there is
//! no dynamic code loading; discovery finds the files, the registry supplies
//! the code.
//!
//! ## Architecture
//!
//! - **[`mapper`]** — pure mount-path computation from filesystem locations
//! - **[`fsio`]** — the injected filesystem capability (real and in-memory)
//! - **[`router`]** — sub-router, app handle, mount points, binding table
//! - **[`loader`]** — recursive discovery, controller construction, mounting
//! - **[`introspect`]** — recovery of (method, path) pairs from a mount
//! - **[`report`]** — fixed-width, optionally colorized route listing
//! - **[`handler`]** — handler value types stored inside bindings
//! - **[`cli`]** — `treemount scan`, the operator-facing dry run
//!
//! Loading runs once at process start, before traffic flows; every
//! filesystem call is synchronous and blocking by design. The aggregate
//! route report is the return value of the load pass itself.
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
//! registry.register("charts/index.ctrl", || {
//!     |router: &mut Router, _app: &mut App| {
//!         router.get("/", echo_handler);
//!     }
//! });
//!
//! let loader = ControllerLoader::new("controllers", registry);
//! let mut app = App::new();
//! let report = loader.load(&mut app)?;
//! // GET    /charts
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod fsio;
pub mod handler;
pub mod introspect;
pub mod loader;
pub mod mapper;
pub mod report;
pub mod router;

pub use error::Error;
pub use introspect::{introspect, RouteEntry};
pub use loader::{Controller, ControllerLoader, ControllerRegistry, LoaderConfig};
pub use mapper::{join_route, PathMapper};
pub use report::{ReportOptions, RouteReporter};
pub use router::{App, Binding, MountPoint, Router, SubRouter};
