//=========================================================================
// Aetheric Engine
//
// Entry point: configures the scene stack and hands it to the host.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run(setup)──>  [winit loop]
//         │                          │
//         ├─ with_stack_capacity()   ├─ opens resources
//         ├─ with_window_title()     ├─ setup pushes the base scene
//         ├─ with_window_size()      └─ FrameDriver + Platform
//         ├─ with_channel_capacity()
//         └─ with_resource_dir()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::marker::PhantomData;

use crossbeam_channel::{bounded, Sender};
use log::{info, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::resources::{ResourceLoader, ResourceRegistry};
use crate::core::scene::{SceneKey, SceneStack, StackError, MAX_SCENES};
use crate::core::FrameDriver;
use crate::platform::{Platform, WindowSettings};

//=== EngineError =========================================================

/// Reasons the engine could not start or stopped abnormally.
#[derive(Debug, Error)]
pub enum EngineError<K: SceneKey> {
    #[error(transparent)]
    Stack(#[from] StackError<K>),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// Setup returned without pushing a base scene.
    #[error("no base scene was pushed before the frame loop")]
    NoBaseScene,
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Stack capacity**: 10 scenes
/// - **Window**: "Aetheric Engine", 1920 × 1080
/// - **Channel capacity**: 128 events
/// - **Resource directory**: `resources`, searched upward from the working
///   directory and the executable
///
/// # Examples
///
/// ```no_run
/// use aetheric_scenes::EngineBuilder;
/// use aetheric_scenes::core::scene::SceneKey;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameScene { Main }
/// impl SceneKey for GameScene {}
///
/// let _engine = EngineBuilder::<GameScene>::new()
///     .with_window_title("Demo")
///     .with_window_size(1280, 720)
///     .with_stack_capacity(4)
///     .build();
/// ```
pub struct EngineBuilder<K: SceneKey> {
    stack_capacity: usize,
    window_title: String,
    window_size: (u32, u32),
    channel_capacity: usize,
    resource_dir: Option<String>,
    _phantom: PhantomData<K>,
}

impl<K: SceneKey> EngineBuilder<K> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            stack_capacity: MAX_SCENES,
            window_title: "Aetheric Engine".to_owned(),
            window_size: (1920, 1080),
            channel_capacity: 128,
            resource_dir: Some("resources".to_owned()),
            _phantom: PhantomData,
        }
    }

    /// Sets the maximum scene stack depth.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_stack_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Stack capacity must be positive");
        self.stack_capacity = capacity;
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive, got {}x{}", width, height);
        self.window_size = (width, height);
        self
    }

    /// Sets the platform → driver channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the name of the resources directory to search for.
    pub fn with_resource_dir(mut self, dir_name: impl Into<String>) -> Self {
        self.resource_dir = Some(dir_name.into());
        self
    }

    /// Skips the directory search; every load is accepted in memory.
    pub fn without_resource_dir(mut self) -> Self {
        self.resource_dir = None;
        self
    }

    pub fn build(self) -> Engine<K> {
        info!(
            "Building engine (stack: {}, window: {}x{}, channel: {})",
            self.stack_capacity, self.window_size.0, self.window_size.1, self.channel_capacity
        );

        Engine {
            settings: WindowSettings {
                title: self.window_title,
                width: self.window_size.0,
                height: self.window_size.1,
            },
            stack_capacity: self.stack_capacity,
            channel_capacity: self.channel_capacity,
            resource_dir: self.resource_dir,
            _phantom: PhantomData,
        }
    }
}

impl<K: SceneKey> Default for EngineBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Configured engine, ready to run.
pub struct Engine<K: SceneKey> {
    settings: WindowSettings,
    stack_capacity: usize,
    channel_capacity: usize,
    resource_dir: Option<String>,
    _phantom: PhantomData<K>,
}

impl<K: SceneKey> Engine<K> {
    /// Runs the application until the window closes or a scene exits.
    ///
    /// `setup` receives the empty stack and must push the base scene.
    /// Every remaining scene is torn down before this returns.
    ///
    /// ```no_run
    /// # use aetheric_scenes::prelude::*;
    /// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// # enum GameScene { Base }
    /// # impl SceneKey for GameScene {}
    /// # struct Base;
    /// # impl Scene<GameScene> for Base {
    /// #     fn key(&self) -> GameScene { GameScene::Base }
    /// #     fn tick(&mut self, _ctx: &mut TickContext<'_, GameScene>) {}
    /// #     fn render(&self, _canvas: &mut dyn Canvas) {}
    /// # }
    /// EngineBuilder::<GameScene>::new()
    ///     .build()
    ///     .run(|stack| stack.push(Base))?;
    /// # Ok::<(), EngineError<GameScene>>(())
    /// ```
    pub fn run<F>(self, setup: F) -> Result<(), EngineError<K>>
    where
        F: FnOnce(&mut SceneStack<K>) -> Result<(), StackError<K>>,
    {
        let (driver, sender) = self.headless(setup)?;

        info!("Entering event loop");
        Platform::new(self.settings, driver, sender).run()?;

        info!("Engine shutdown complete");
        Ok(())
    }

    /// Builds the frame driver without opening a window.
    ///
    /// The returned sender stands in for the platform: whatever is sent
    /// on it is seen by the next [`FrameDriver::frame`].
    pub fn headless<F>(&self, setup: F) -> Result<(FrameDriver<K>, Sender<PlatformEvent>), EngineError<K>>
    where
        F: FnOnce(&mut SceneStack<K>) -> Result<(), StackError<K>>,
    {
        let mut stack = SceneStack::with_capacity(self.stack_capacity, self.open_resources())?;

        setup(&mut stack)?;
        if stack.is_empty() {
            return Err(EngineError::NoBaseScene);
        }

        let (sender, receiver) = bounded(self.channel_capacity);
        let screen = (self.settings.width, self.settings.height);
        Ok((FrameDriver::new(stack, receiver, screen), sender))
    }

    fn open_resources(&self) -> Box<dyn ResourceLoader> {
        let Some(dir_name) = &self.resource_dir else {
            return Box::new(ResourceRegistry::in_memory());
        };

        match ResourceRegistry::search(dir_name) {
            Ok(registry) => Box::new(registry),
            Err(e) => {
                warn!("{}, loading resources in memory", e);
                Box::new(ResourceRegistry::in_memory())
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
