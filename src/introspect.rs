//! Route introspection.
//!
//! Read-only traversal of a mount point's binding table into flat
//! [`RouteEntry`] records: verb (or the `*` wildcard marker) plus the full
//! path composed from the mount prefix and the binding's relative pattern.
//! Entries come out in registration order; deduplication is the reporter's
//! concern, not this layer's.

use crate::error::Error;
use crate::mapper::join_route;
use crate::router::MountPoint;
use http::Method;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Marker rendered for bindings that match any method.
pub const WILDCARD_METHOD: &str = "*";

/// One introspected route: verb plus full path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteEntry {
    /// `None` means the wildcard marker.
    pub method: Option<Method>,
    pub path: String,
}

impl RouteEntry {
    /// Upper-case verb, or `*` for wildcard bindings.
    ///
    /// `http::Method` is upper-case by construction, so no case folding is
    /// needed here.
    pub fn method_str(&self) -> &str {
        self.method
            .as_ref()
            .map_or(WILDCARD_METHOD, Method::as_str)
    }
}

impl Serialize for RouteEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RouteEntry", 2)?;
        state.serialize_field("method", self.method_str())?;
        state.serialize_field("path", &self.path)?;
        state.end()
    }
}

/// Recover the (method, path) pairs registered on a mount point.
///
/// Yields entries in the order the controller registered them. Fails with
/// [`Error::MalformedRouter`] when the mounted handle does not expose its
/// binding table; that is a precondition violation by the handle's author,
/// not a condition to recover from.
pub fn introspect(mount: &MountPoint) -> Result<Vec<RouteEntry>, Error> {
    let bindings = mount.router.bindings().ok_or_else(|| Error::MalformedRouter {
        mount_path: mount.path.clone(),
    })?;

    Ok(bindings
        .iter()
        .map(|binding| RouteEntry {
            method: binding.method.clone(),
            path: join_route(&mount.path, &binding.path),
        })
        .collect())
}
