//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (events and errors).
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events the window host hands to the frame driver.
#[derive(Debug, Clone)]
pub enum PlatformEvent {
    /// Input gathered since the previous frame boundary.
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Drawable area changed, in physical pixels.
    Resized { width: u32, height: u32 },

    /// Window close requested.
    WindowClosed,
}

//=== PlatformError =======================================================

#[derive(Debug, Error)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    #[error("event loop creation failed")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    /// Event loop terminated with an error.
    #[error("event loop error")]
    EventLoopExecution(#[source] winit::error::EventLoopError),

    /// The OS refused to open the window.
    #[error("window creation failed: {0}")]
    WindowCreation(String),
}
