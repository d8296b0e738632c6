//=========================================================================
// Scene Stack
//=========================================================================
//
// Bounded LIFO of live scenes with a protected root entry.
//
// Each entry owns its scene together with the key captured at push time.
// While the top scene runs its tick hook it is lent out of its slot, so
// the hook can push and pop on this same stack. A lent scene that gets
// popped mid-tick is torn down as soon as its hook returns.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use super::{Scene, SceneKey, StackError, TickContext};
use crate::core::input::InputQuery;
use crate::core::platform_bridge::TickControl;
use crate::core::render::Canvas;
use crate::core::resources::ResourceLoader;

//=== Constants ===========================================================

/// Default maximum stack depth.
pub const MAX_SCENES: usize = 10;

//=== Entry ===============================================================

struct Entry<K: SceneKey> {
    key: K,
    serial: u64,
    /// `None` while the scene is lent to its own tick hook.
    scene: Option<Box<dyn Scene<K>>>,
}

//=== Scene Stack =========================================================

/// Navigation history of scenes; the top entry is the current scene.
///
/// The first scene pushed onto the empty stack becomes the root. Its key
/// is protected: `pop` refuses any top entry carrying that key, so the
/// stack never falls back below the root during navigation. Only
/// [`shutdown`](Self::shutdown) (or dropping the stack) removes it.
///
/// The stack owns the [`ResourceLoader`] that scenes acquire from and
/// release to, so every teardown path can reach it.
pub struct SceneStack<K: SceneKey> {
    entries: Vec<Entry<K>>,
    capacity: usize,
    root: Option<K>,
    next_serial: u64,
    resources: Box<dyn ResourceLoader>,
}

impl<K: SceneKey> SceneStack<K> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty stack holding at most [`MAX_SCENES`] scenes.
    pub fn new(resources: Box<dyn ResourceLoader>) -> Result<Self, StackError<K>> {
        Self::with_capacity(MAX_SCENES, resources)
    }

    /// Creates an empty stack holding at most `capacity` scenes.
    ///
    /// Storage for every entry is reserved up front, so pushes never
    /// allocate. Fails if `capacity` is zero or the reservation fails.
    pub fn with_capacity(
        capacity: usize,
        resources: Box<dyn ResourceLoader>,
    ) -> Result<Self, StackError<K>> {
        if capacity == 0 {
            return Err(StackError::ZeroCapacity);
        }

        let mut entries = Vec::new();
        entries
            .try_reserve_exact(capacity)
            .map_err(|source| StackError::Allocation { capacity, source })?;

        debug!(target: "scene", "Scene stack initialized (capacity: {})", capacity);

        Ok(Self {
            entries,
            capacity,
            root: None,
            next_serial: 0,
            resources,
        })
    }

    //--- Navigation -------------------------------------------------------

    /// Pushes a scene on top of the stack, making it current.
    ///
    /// The scene is boxed for storage. See [`push_boxed`](Self::push_boxed).
    pub fn push<S>(&mut self, scene: S) -> Result<(), StackError<K>>
    where
        S: Scene<K> + 'static,
    {
        self.push_boxed(Box::new(scene))
    }

    /// Pushes an already boxed scene on top of the stack.
    ///
    /// A full stack rejects the scene with [`StackError::CapacityExceeded`]
    /// before any of its resources are acquired. If acquisition fails the
    /// scene is torn down and dropped, and the stack is left unchanged.
    pub fn push_boxed(&mut self, mut scene: Box<dyn Scene<K>>) -> Result<(), StackError<K>> {
        let key = scene.key();

        if self.entries.len() >= self.capacity {
            warn!(
                target: "scene",
                "Scene stack full ({}/{}), rejecting push of {:?}",
                self.entries.len(),
                self.capacity,
                key
            );
            return Err(StackError::CapacityExceeded {
                capacity: self.capacity,
                rejected: key,
            });
        }

        if let Err(source) = scene.acquire(self.resources.as_mut()) {
            warn!(target: "scene", "Scene {:?} failed to acquire resources: {}", key, source);
            scene.teardown(self.resources.as_mut());
            return Err(StackError::Acquire { key, source });
        }

        if self.root.is_none() {
            info!(target: "scene", "Scene {:?} designated as protected root", key);
            self.root = Some(key);
        }

        let serial = self.next_serial;
        self.next_serial += 1;
        self.entries.push(Entry {
            key,
            serial,
            scene: Some(scene),
        });

        debug!(
            target: "scene",
            "Pushed scene {:?} (depth: {}/{})",
            key,
            self.entries.len(),
            self.capacity
        );
        Ok(())
    }

    /// Removes the current scene and tears it down.
    ///
    /// Returns the popped key. The scene leaves the stack before its
    /// teardown hook runs. If it is the scene currently ticking, teardown
    /// runs right after its tick hook returns.
    pub fn pop(&mut self) -> Result<K, StackError<K>> {
        let key = match self.entries.last() {
            Some(top) => top.key,
            None => {
                warn!(target: "scene", "Scene stack is empty, nothing to pop");
                return Err(StackError::EmptyStackUnderflow);
            }
        };

        if self.is_root(key) {
            warn!(target: "scene", "Root scene {:?} cannot be popped", key);
            return Err(StackError::ProtectedScene(key));
        }

        if let Some(entry) = self.entries.pop() {
            debug!(
                target: "scene",
                "Popped scene {:?} (depth: {}/{})",
                key,
                self.entries.len(),
                self.capacity
            );
            self.retire(entry);
        }

        Ok(key)
    }

    /// Pops the current scene and pushes `scene` in its place.
    ///
    /// Nothing is pushed if the pop is refused. If the new scene fails to
    /// acquire its resources the old one is already gone and the stack is
    /// one entry shallower.
    pub fn replace<S>(&mut self, scene: S) -> Result<K, StackError<K>>
    where
        S: Scene<K> + 'static,
    {
        let replaced = self.pop()?;
        self.push(scene)?;
        Ok(replaced)
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the current scene, or `None` when the stack is empty.
    ///
    /// # Lent scenes
    ///
    /// One exception: inside its own [`Scene::tick`] the top scene is out
    /// of its slot, so `current()` is `None` there even though `depth()`
    /// is at least 1. The scene already holds `&mut self`; use
    /// [`current_key`](Self::current_key) to identify the top from inside
    /// a tick. Outside tick dispatch, `None` means the stack is empty.
    pub fn current(&self) -> Option<&dyn Scene<K>> {
        self.entries.last().and_then(|entry| entry.scene.as_deref())
    }

    /// Returns the key of the current scene, or `None` when empty.
    pub fn current_key(&self) -> Option<K> {
        self.entries.last().map(|entry| entry.key)
    }

    /// Returns the protected root key, once a scene has been pushed.
    pub fn root_key(&self) -> Option<K> {
        self.root
    }

    /// Returns `true` if `key` is the protected root key.
    pub fn is_root(&self, key: K) -> bool {
        self.root == Some(key)
    }

    /// Number of live entries.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Keys of all live entries, root first.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().map(|entry| entry.key)
    }

    //--- Frame Dispatch ---------------------------------------------------

    /// Runs the current scene's tick hook.
    ///
    /// The scene receives a [`TickContext`] over this stack. Whatever it
    /// pushes or pops takes effect immediately, so a render that follows
    /// sees the post-tick top.
    pub fn tick(&mut self, input: &dyn InputQuery) -> TickControl {
        let Some(top) = self.entries.last_mut() else {
            trace!(target: "scene", "No current scene to tick");
            return TickControl::Continue;
        };

        let (key, serial) = (top.key, top.serial);
        let Some(mut scene) = top.scene.take() else {
            warn!(target: "scene", "Scene {:?} is already ticking, skipping nested tick", key);
            return TickControl::Continue;
        };

        trace!(target: "scene", "Ticking scene {:?}", key);

        let mut context = TickContext::new(self, input);
        scene.tick(&mut context);
        let control = context.control();

        self.check_in(key, serial, scene);
        control
    }

    /// Runs the current scene's render hook.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        match self.current() {
            Some(scene) => scene.render(canvas),
            None => trace!(target: "scene", "No current scene to render"),
        }
    }

    //--- Shutdown ---------------------------------------------------------

    /// Tears down every scene, top first, including the root.
    ///
    /// Returns the keys in teardown order.
    pub fn shutdown(mut self) -> Vec<K> {
        info!(target: "scene", "Shutting down scene stack ({} scenes)", self.entries.len());
        self.unwind()
    }

    //--- Internal Helpers -------------------------------------------------

    fn unwind(&mut self) -> Vec<K> {
        let mut order = Vec::with_capacity(self.entries.len());

        while let Some(entry) = self.entries.pop() {
            order.push(entry.key);
            self.retire(entry);
        }

        self.root = None;
        order
    }

    /// Tears down an entry that has already left the stack.
    fn retire(&mut self, entry: Entry<K>) {
        match entry.scene {
            Some(mut scene) => {
                debug!(target: "scene", "Freeing scene resources for {:?}", entry.key);
                scene.teardown(self.resources.as_mut());
            }
            None => debug!(
                target: "scene",
                "Scene {:?} popped during its own tick, teardown deferred",
                entry.key
            ),
        }
    }

    /// Returns a lent scene to its slot, or tears it down if it was popped.
    fn check_in(&mut self, key: K, serial: u64, mut scene: Box<dyn Scene<K>>) {
        match self.entries.iter_mut().find(|entry| entry.serial == serial) {
            Some(entry) => entry.scene = Some(scene),
            None => {
                debug!(target: "scene", "Freeing scene resources for {:?}", key);
                scene.teardown(self.resources.as_mut());
            }
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl<K: SceneKey> fmt::Debug for SceneStack<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneStack")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .field("capacity", &self.capacity)
            .field("root", &self.root)
            .finish()
    }
}

impl<K: SceneKey> Drop for SceneStack<K> {
    fn drop(&mut self) {
        if !self.entries.is_empty() {
            warn!(
                target: "scene",
                "Scene stack dropped with {} live scenes, unwinding",
                self.entries.len()
            );
            self.unwind();
        }
    }
}

//=== Tests ===============================================================
