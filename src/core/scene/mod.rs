//=========================================================================
// Scene System
//=========================================================================
//
// Bounded, stack-based scene lifecycle.
//
// Architecture:
//   SceneStack
//     └─ entries: Vec<Entry>  (captured key + owned Box<dyn Scene>)
//
// Flow (one frame):
//   tick()   → lend top scene → Scene::tick(ctx) → return or retire it
//   render() → fetch top again → Scene::render(canvas)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Internal Dependencies ===============================================

use crate::core::input::InputQuery;
use crate::core::platform_bridge::TickControl;
use crate::core::render::Canvas;
use crate::core::resources::{ResourceError, ResourceLoader};

//=== Module Declarations =================================================

mod error;
mod stack;

//=== Public API ==========================================================

pub use error::StackError;
pub use stack::{SceneStack, MAX_SCENES};

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
///
/// Keys label scene kinds for root protection and diagnostics. They are
/// compared by value, so two scenes built with the same key are treated
/// as the same kind. Typically implemented by game-specific enums.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + 'static {}

//=== Scene Trait =========================================================

/// One application state: title screen, menu, gameplay, overlay bar.
///
/// The implementing struct is the scene's private context. Construction
/// (`new`) should only assemble data; anything that touches the resource
/// loader belongs in [`acquire`](Scene::acquire), which the stack calls
/// when the scene is pushed.
///
/// # Minimal Implementation
///
/// ```rust
/// # use aetheric_scenes::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum GameScene { Title }
/// # impl SceneKey for GameScene {}
/// struct Title;
///
/// impl Scene<GameScene> for Title {
///     fn key(&self) -> GameScene {
///         GameScene::Title
///     }
///
///     fn tick(&mut self, _ctx: &mut TickContext<'_, GameScene>) {}
///
///     fn render(&self, canvas: &mut dyn Canvas) {
///         canvas.clear(Color::BLACK);
///     }
/// }
/// ```
pub trait Scene<K: SceneKey> {
    /// Identity of this scene. Read once, when the scene is pushed.
    fn key(&self) -> K;

    /// Loads the textures and fonts this scene needs.
    ///
    /// Called by the stack after the capacity check and before the scene
    /// becomes current. On error the stack calls [`teardown`](Scene::teardown)
    /// to release whatever was loaded, then drops the scene.
    fn acquire(&mut self, _resources: &mut dyn ResourceLoader) -> Result<(), ResourceError> {
        Ok(())
    }

    /// Advances the scene by one frame.
    ///
    /// May push or pop on `ctx.stack`, including popping this very scene.
    fn tick(&mut self, ctx: &mut TickContext<'_, K>);

    /// Draws the current frame.
    fn render(&self, canvas: &mut dyn Canvas);

    /// Releases everything [`acquire`](Scene::acquire) loaded.
    ///
    /// Invoked exactly once, after the scene has left the stack. The default
    /// does nothing, for scenes with nothing to release.
    fn teardown(&mut self, _resources: &mut dyn ResourceLoader) {}
}

//=== Tick Context ========================================================

/// Handle passed to [`Scene::tick`].
///
/// Carries the stack the scene lives on and the frame's input state, so
/// scenes navigate through an explicit handle instead of shared globals.
pub struct TickContext<'a, K: SceneKey> {
    /// The stack currently dispatching this tick.
    ///
    /// The ticking scene is lent out of its slot for the duration of the
    /// hook: `stack.current()` reports `None` for it, while
    /// `stack.current_key()` still reports its key.
    pub stack: &'a mut SceneStack<K>,

    /// Input state for this frame.
    pub input: &'a dyn InputQuery,

    exit_requested: bool,
}

impl<'a, K: SceneKey> TickContext<'a, K> {
    pub(crate) fn new(stack: &'a mut SceneStack<K>, input: &'a dyn InputQuery) -> Self {
        Self {
            stack,
            input,
            exit_requested: false,
        }
    }

    /// Asks the host to end the frame loop after this frame.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub(crate) fn control(&self) -> TickControl {
        if self.exit_requested {
            TickControl::Exit
        } else {
            TickControl::Continue
        }
    }
}
