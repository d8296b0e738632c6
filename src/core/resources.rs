//=========================================================================
// Resources
//=========================================================================
//
// Resource loading seam used by scene acquire/teardown hooks.
//
// Architecture:
//   Scene::acquire   → ResourceLoader::load_*   → handle (Texture / Font)
//   Scene::teardown  → ResourceLoader::unload_* → handle released
//
// ResourceRegistry is the bundled loader. It resolves paths against a
// resources directory and tracks every live handle, so leaked or
// double-released handles show up in the log.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use log::{debug, trace, warn};
use thiserror::Error;

//=== Constants ===========================================================

/// How many directory levels (the base included) are searched upward.
const SEARCH_DEPTH: usize = 3;

//=== Handles =============================================================

/// Opaque identifier of a loaded resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(u32);

/// Handle to a loaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Texture(ResourceId);

impl Texture {
    pub fn id(self) -> ResourceId {
        self.0
    }
}

/// Handle to a loaded font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Font(ResourceId);

impl Font {
    pub fn id(self) -> ResourceId {
        self.0
    }
}

//=== ResourceError =======================================================

#[derive(Debug, Error)]
pub enum ResourceError {
    /// No resources directory was found on any search path.
    #[error("resources directory '{0}' not found")]
    DirectoryNotFound(String),

    /// The requested file does not exist under the resources directory.
    #[error("resource not found: {}", .0.display())]
    NotFound(PathBuf),
}

//=== ResourceLoader ======================================================

/// Loads and releases the assets scenes draw with.
///
/// Every handle returned by a `load_*` call must be passed back to the
/// matching `unload_*` call exactly once.
pub trait ResourceLoader {
    fn load_texture(&mut self, path: &str) -> Result<Texture, ResourceError>;

    fn unload_texture(&mut self, texture: Texture);

    fn load_font(&mut self, path: &str) -> Result<Font, ResourceError>;

    fn unload_font(&mut self, font: Font);
}

//=== ResourceRegistry ====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResourceKind {
    Texture,
    Font,
}

#[derive(Debug)]
struct LiveResource {
    kind: ResourceKind,
    path: PathBuf,
}

/// Path-resolving loader that tracks live handles.
///
/// With a root directory, paths are resolved against it and must name an
/// existing file. Without one (in-memory mode) every path is accepted,
/// which suits headless runs and tests.
#[derive(Debug)]
pub struct ResourceRegistry {
    root: Option<PathBuf>,
    next_id: u32,
    live: HashMap<ResourceId, LiveResource>,
}

impl ResourceRegistry {
    //--- Construction -----------------------------------------------------

    /// Creates a registry that accepts any path without touching disk.
    pub fn in_memory() -> Self {
        Self {
            root: None,
            next_id: 0,
            live: HashMap::new(),
        }
    }

    /// Creates a registry resolving paths against `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        debug!(target: "resources", "Using resources directory {}", root.display());
        Self {
            root: Some(root),
            next_id: 0,
            live: HashMap::new(),
        }
    }

    /// Looks for `dir_name` next to the working directory and the
    /// executable, walking a few levels upward from each.
    pub fn search(dir_name: &str) -> Result<Self, ResourceError> {
        let mut bases = Vec::with_capacity(2);

        if let Ok(cwd) = env::current_dir() {
            bases.push(cwd);
        }
        if let Some(exe_dir) = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            bases.push(exe_dir);
        }

        Self::search_from(dir_name, &bases)
    }

    /// Like [`search`](Self::search), but starting from explicit bases.
    pub fn search_from(dir_name: &str, bases: &[PathBuf]) -> Result<Self, ResourceError> {
        bases
            .iter()
            .flat_map(|base| base.ancestors().take(SEARCH_DEPTH))
            .map(|dir| dir.join(dir_name))
            .inspect(|candidate| {
                trace!(target: "resources", "Probing {}", candidate.display())
            })
            .find(|candidate| candidate.is_dir())
            .map(Self::with_root)
            .ok_or_else(|| ResourceError::DirectoryNotFound(dir_name.to_owned()))
    }

    //--- Queries ----------------------------------------------------------

    /// The resources directory, if not in-memory.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Number of handles loaded and not yet released.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_live(&self, id: ResourceId) -> bool {
        self.live.contains_key(&id)
    }

    //--- Internal Helpers -------------------------------------------------

    fn load(&mut self, kind: ResourceKind, path: &str) -> Result<ResourceId, ResourceError> {
        let resolved = match &self.root {
            Some(root) => {
                let full = root.join(path);
                if !full.is_file() {
                    warn!(target: "resources", "Missing {:?} {}", kind, full.display());
                    return Err(ResourceError::NotFound(full));
                }
                full
            }
            None => PathBuf::from(path),
        };

        let id = ResourceId(self.next_id);
        self.next_id += 1;

        debug!(target: "resources", "Loaded {:?} {} as {:?}", kind, resolved.display(), id);
        self.live.insert(id, LiveResource { kind, path: resolved });
        Ok(id)
    }

    fn unload(&mut self, kind: ResourceKind, id: ResourceId) {
        match self.live.remove(&id) {
            Some(resource) if resource.kind == kind => {
                debug!(target: "resources", "Unloaded {:?} {}", kind, resource.path.display());
            }
            Some(resource) => {
                warn!(
                    target: "resources",
                    "{:?} released as {:?}: {}",
                    resource.kind,
                    kind,
                    resource.path.display()
                );
            }
            None => warn!(
                target: "resources",
                "{:?} {:?} released twice or never loaded",
                kind,
                id
            ),
        }
    }
}

impl ResourceLoader for ResourceRegistry {
    fn load_texture(&mut self, path: &str) -> Result<Texture, ResourceError> {
        self.load(ResourceKind::Texture, path).map(Texture)
    }

    fn unload_texture(&mut self, texture: Texture) {
        self.unload(ResourceKind::Texture, texture.id());
    }

    fn load_font(&mut self, path: &str) -> Result<Font, ResourceError> {
        self.load(ResourceKind::Font, path).map(Font)
    }

    fn unload_font(&mut self, font: Font) {
        self.unload(ResourceKind::Font, font.id());
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for ResourceRegistry {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl Drop for ResourceRegistry {
    fn drop(&mut self) {
        for resource in self.live.values() {
            warn!(
                target: "resources",
                "Leaked {:?} {}",
                resource.kind,
                resource.path.display()
            );
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::TempDir;

    fn resources_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("resources")).unwrap();
        fs::write(dir.path().join("resources/logo.jpg"), b"jpg").unwrap();
        dir
    }

    #[test]
    fn in_memory_accepts_any_path() {
        let mut registry = ResourceRegistry::in_memory();

        let texture = registry.load_texture("nowhere/logo.jpg").unwrap();

        assert!(registry.root().is_none());
        assert!(registry.is_live(texture.id()));
        assert_eq!(registry.live_count(), 1);
    }

    #[test]
    fn handles_are_distinct() {
        let mut registry = ResourceRegistry::in_memory();

        let a = registry.load_texture("a.png").unwrap();
        let b = registry.load_texture("a.png").unwrap();
        let f = registry.load_font("a.ttf").unwrap();

        assert_ne!(a, b);
        assert_ne!(a.id(), f.id());
    }

    #[test]
    fn unload_releases_handle() {
        let mut registry = ResourceRegistry::in_memory();
        let texture = registry.load_texture("logo.jpg").unwrap();
        let font = registry.load_font("mono.ttf").unwrap();

        registry.unload_texture(texture);
        registry.unload_font(font);

        assert_eq!(registry.live_count(), 0);
        assert!(!registry.is_live(texture.id()));
    }

    #[test]
    fn double_unload_is_harmless() {
        let mut registry = ResourceRegistry::in_memory();
        let texture = registry.load_texture("logo.jpg").unwrap();

        registry.unload_texture(texture);
        registry.unload_texture(texture);

        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn rooted_registry_resolves_existing_files() {
        let dir = resources_dir();
        let mut registry = ResourceRegistry::with_root(dir.path().join("resources"));

        let texture = registry.load_texture("logo.jpg").unwrap();

        assert!(registry.is_live(texture.id()));
        registry.unload_texture(texture);
    }

    #[test]
    fn rooted_registry_starts_empty_and_tracks_loads() {
        let dir = resources_dir();
        let root = dir.path().join("resources");
        let mut registry = ResourceRegistry::with_root(&root);

        assert_eq!(registry.root(), Some(root.as_path()));
        assert_eq!(registry.live_count(), 0);

        let first = registry.load_texture("logo.jpg").unwrap();
        let second = registry.load_texture("logo.jpg").unwrap();
        assert_ne!(first, second);
        assert_eq!(registry.live_count(), 2);

        registry.unload_texture(first);
        registry.unload_texture(second);
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn rooted_registry_rejects_missing_files() {
        let dir = resources_dir();
        let mut registry = ResourceRegistry::with_root(dir.path().join("resources"));

        let result = registry.load_texture("background.png");

        match result {
            Err(ResourceError::NotFound(path)) => assert!(path.ends_with("background.png")),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn search_finds_directory_in_parent() {
        let dir = resources_dir();
        let nested = dir.path().join("target/debug");
        fs::create_dir_all(&nested).unwrap();

        let registry = ResourceRegistry::search_from("resources", &[nested]).unwrap();

        assert_eq!(registry.root(), Some(dir.path().join("resources").as_path()));
    }

    #[test]
    fn search_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        let result = ResourceRegistry::search_from("resources", &[nested]);

        assert!(matches!(result, Err(ResourceError::DirectoryNotFound(name)) if name == "resources"));
    }
}
