use crate::error::Error;
use crate::fsio::{EntryKind, FileSystem, OsFileSystem};
use crate::introspect::introspect;
use crate::mapper::{relative_segments, PathMapper};
use crate::report::{ReportOptions, RouteReporter};
use crate::router::{App, MountPoint, Router};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use super::registry::ControllerRegistry;

static DEFAULT_EXTENSIONS: Lazy<Vec<String>> = Lazy::new(|| vec!["ctrl".to_string()]);

/// Loader configuration, threaded in explicitly.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// URL prefix every mount path is composed under.
    pub base_route: String,
    /// Extension allow-list deciding which files are controller candidates.
    /// Compared case-insensitively against the file's extension.
    pub extensions: Vec<String>,
    /// Report rendering options.
    pub report: ReportOptions,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_route: "/".to_string(),
            extensions: DEFAULT_EXTENSIONS.clone(),
            report: ReportOptions::default(),
        }
    }
}

/// A controller file found during discovery: registry key plus the mount
/// path its sub-router would be composed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredController {
    pub file: String,
    pub mount_path: String,
}

/// Walks a controllers directory tree, constructs registered controllers and
/// mounts their sub-routers onto an [`App`].
///
/// The walk is depth-first pre-order over the injected [`FileSystem`]
/// capability, in the order the capability reports entries. Directories
/// recurse unconditionally; mount paths are always measured against the
/// controllers root, never the parent directory. Loading happens once at
/// process start, so every filesystem call is synchronous and blocking.
pub struct ControllerLoader {
    root: PathBuf,
    registry: ControllerRegistry,
    config: LoaderConfig,
    mapper: PathMapper,
    fs: Arc<dyn FileSystem>,
}

impl ControllerLoader {
    /// Loader over the real filesystem with default configuration.
    pub fn new(root: impl Into<PathBuf>, registry: ControllerRegistry) -> Self {
        Self::with_config(root, registry, LoaderConfig::default())
    }

    pub fn with_config(
        root: impl Into<PathBuf>,
        registry: ControllerRegistry,
        config: LoaderConfig,
    ) -> Self {
        let mapper = PathMapper::new(&config.base_route);
        Self {
            root: root.into(),
            registry,
            config,
            mapper,
            fs: Arc::new(OsFileSystem),
        }
    }

    /// Substitute the filesystem capability, e.g. an in-memory fake.
    pub fn with_filesystem(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Dry run: list candidate files and their mount paths without
    /// constructing or mounting anything.
    pub fn discover(&self) -> Result<Vec<DiscoveredController>, Error> {
        let mut seen = HashSet::new();
        let mut found = Vec::new();
        self.walk(&self.root, &mut seen, &mut |file, dir| {
            found.push(DiscoveredController {
                file: relative_segments(&self.root, file),
                mount_path: self.mapper.mount_path(&self.root, dir),
            });
            Ok(())
        })?;
        Ok(found)
    }

    /// Walk the tree, mount every registered controller and hand each
    /// resulting mount point to `on_mount`.
    ///
    /// A failure aborts the remaining traversal; mounts already performed
    /// stay on the app (at-least-partial completion, not atomic).
    pub fn load_with<F>(&self, app: &mut App, mut on_mount: F) -> Result<(), Error>
    where
        F: FnMut(&MountPoint),
    {
        let mut seen = HashSet::new();
        self.walk(&self.root, &mut seen, &mut |file, dir| {
            let mount = self.mount_one(file, dir, app)?;
            on_mount(&mount);
            Ok(())
        })
    }

    /// The whole load pass: mount everything, then introspect every mount
    /// and render the aggregate route report.
    ///
    /// Introspection only starts after the walk has completed, so it always
    /// reads final binding tables.
    pub fn load(&self, app: &mut App) -> Result<String, Error> {
        let mut mounts = Vec::new();
        self.load_with(app, |mount| mounts.push(mount.clone()))?;

        let mut groups = Vec::with_capacity(mounts.len());
        for mount in &mounts {
            groups.push(introspect(mount)?);
        }
        let route_count: usize = groups.iter().map(Vec::len).sum();
        info!(
            mounts = mounts.len(),
            routes = route_count,
            root = %self.root.display(),
            "controller load pass complete"
        );

        let reporter = RouteReporter::new(self.config.report.clone());
        Ok(reporter.render_groups(&groups))
    }

    fn walk(
        &self,
        dir: &Path,
        seen: &mut HashSet<PathBuf>,
        visit: &mut dyn FnMut(&Path, &Path) -> Result<(), Error>,
    ) -> Result<(), Error> {
        let entries = self.fs.read_dir(dir).map_err(|source| Error::Filesystem {
            path: dir.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let full = dir.join(&entry.name);
            match entry.kind {
                EntryKind::Directory => self.walk(&full, seen, visit)?,
                EntryKind::File => {
                    if !self.is_candidate(&entry.name) {
                        debug!(file = %full.display(), "skipping non-controller file");
                        continue;
                    }
                    // Each discovered file is processed at most once per
                    // pass.
                    if !seen.insert(full.clone()) {
                        continue;
                    }
                    visit(&full, dir)?;
                }
            }
        }
        Ok(())
    }

    fn is_candidate(&self, name: &str) -> bool {
        let Some(ext) = Path::new(name).extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.config
            .extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    }

    fn mount_one(&self, file: &Path, dir: &Path, app: &mut App) -> Result<MountPoint, Error> {
        let key = relative_segments(&self.root, file);
        let mount_path = self.mapper.mount_path(&self.root, dir);

        let factory = self.registry.get(&key).ok_or_else(|| Error::ModuleLoad {
            path: file.to_path_buf(),
            reason: format!("no controller factory registered for '{key}'"),
        })?;
        let controller = factory();

        let mut router = Router::new();
        controller.register(&mut router, app);
        debug!(
            file = %key,
            mount = %mount_path,
            bindings = router.bindings().len(),
            "mounted controller"
        );
        Ok(app.mount(mount_path, router))
    }
}

impl std::fmt::Debug for ControllerLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerLoader")
            .field("root", &self.root)
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
