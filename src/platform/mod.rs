//=========================================================================
// Platform
//=========================================================================
//
// winit host for the frame driver.
//
// Architecture:
// ```text
//  Main Thread
//  ┌──────────────────────────────────────────────┐
//  │  winit event loop                            │
//  │   ↓                                          │
//  │  InputProcessor (winit → InputEvent)         │
//  │   ↓                                          │
//  │  InputBuffer (discrete + latest pointer)     │
//  │   ↓ RedrawRequested = frame boundary         │
//  │  Sender<PlatformEvent> ──→ FrameDriver       │
//  │                            ├─ tick           │
//  │                            └─ render         │
//  └──────────────────────────────────────────────┘
// ```
//
// Everything runs on the thread that called `Engine::run()` (winit
// requires the main thread on macOS). The channel only decouples the
// host from the driver, so sends never block: a full channel drops the
// event with a warning.
//
//=========================================================================

//=== Module Declarations =================================================

mod input_buffer;
mod input_processor;

//=== External Dependencies ===============================================

use crossbeam_channel::{Sender, TrySendError};
use log::{debug, error, info, trace, warn};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent, TickControl};
use crate::core::scene::SceneKey;
use crate::core::FrameDriver;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== WindowSettings ======================================================

#[derive(Debug, Clone)]
pub(crate) struct WindowSettings {
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

//=== Platform ============================================================

/// Window owner and frame pacer.
///
/// The driver is taken out when the loop ends, so the scene stack is
/// unwound exactly once whichever way the loop stops.
pub(crate) struct Platform<K: SceneKey> {
    settings: WindowSettings,
    window: Option<Window>,
    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    input_processor: InputProcessor,
    driver: Option<FrameDriver<K>>,
    failure: Option<PlatformError>,
}

impl<K: SceneKey> Platform<K> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        settings: WindowSettings,
        driver: FrameDriver<K>,
        event_sender: Sender<PlatformEvent>,
    ) -> Self {
        info!(target: "platform", "Platform initialized");
        Self {
            settings,
            window: None,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
            driver: Some(driver),
            failure: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or a scene exits.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        let outcome = event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution);

        self.finish();

        outcome?;
        match self.failure.take() {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }

    //--- Frame Handling ---------------------------------------------------

    /// Sends buffered input and runs one frame.
    fn step(&mut self) -> TickControl {
        self.flush_input_buffer();

        match self.driver.as_mut() {
            Some(driver) => driver.frame(),
            None => TickControl::Exit,
        }
    }

    /// Runs a frame and schedules the next one.
    ///
    /// No backend presents the recorded DrawList; the window is not painted.
    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        match self.step() {
            TickControl::Continue => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            TickControl::Exit => {
                self.finish();
                event_loop.exit();
            }
        }
    }

    /// Unwinds the scene stack. Idempotent.
    fn finish(&mut self) {
        if let Some(driver) = self.driver.take() {
            let frames = driver.frames();
            let unwound = driver.shutdown();
            info!(
                target: "platform",
                "Shut down after {} frames, unwound {} scenes",
                frames,
                unwound.len()
            );
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn send(&self, event: PlatformEvent) -> bool {
        match self.event_sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                warn!(target: "platform", "Event channel full, dropping {:?}", event);
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!(target: "platform", "Event channel disconnected");
                false
            }
        }
    }

    fn flush_input_buffer(&mut self) {
        if let Some((discrete, continuous)) = self.buffer.drain() {
            trace!(
                target: "platform::input",
                "Flushing {} discrete + {} continuous events",
                discrete.len(),
                continuous.len()
            );
            self.send(PlatformEvent::Inputs { discrete, continuous });
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    fn driver(&self) -> Option<&FrameDriver<K>> {
        self.driver.as_ref()
    }
}

//=== winit Integration ===================================================

impl<K: SceneKey> ApplicationHandler for Platform<K> {
    /// Creates the window on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists, resume ignored");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.settings.title.as_str())
            .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    size.width,
                    size.height,
                    window.scale_factor()
                );
                self.send(PlatformEvent::Resized {
                    width: size.width,
                    height: size.height,
                });
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.failure = Some(PlatformError::WindowCreation(e.to_string()));
                self.finish();
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                if self.send(PlatformEvent::WindowClosed) {
                    self.run_frame(event_loop);
                } else {
                    self.finish();
                    event_loop.exit();
                }
            }

            WindowEvent::Resized(size) => {
                debug!(target: "platform", "Window resized to {}x{}", size.width, size.height);
                self.send(PlatformEvent::Resized {
                    width: size.width,
                    height: size.height,
                });
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", modifiers);
                self.input_processor.update_modifiers(modifiers.state());
            }

            WindowEvent::KeyboardInput { event, .. } => {
                match self.input_processor.process_key_event(&event) {
                    Some(input) => self.buffer.push(input),
                    None => trace!(target: "platform::input", "Key event ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let input = self.input_processor.process_mouse_button(button, state);
                self.buffer.push(input);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let input = self.input_processor.process_cursor_moved(position.x, position.y);
                self.buffer.push(input);
            }

            WindowEvent::RedrawRequested => self.run_frame(event_loop),

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
