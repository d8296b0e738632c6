//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_scenes::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder, EngineError};
pub use crate::core::FrameDriver;
pub use crate::core::platform_bridge::{PlatformEvent, TickControl};

// Scene system
pub use crate::core::scene::{Scene, SceneKey, SceneStack, StackError, TickContext, MAX_SCENES};

// Input
pub use crate::core::input::{InputEvent, InputQuery, KeyCode, Modifiers, MouseButton};

// Rendering and resources
pub use crate::core::render::{Anchor, Canvas, Color, DrawList};
pub use crate::core::resources::{Font, ResourceError, ResourceLoader, ResourceRegistry, Texture};

// Logging
pub use crate::logging::{init_logging, LoggingConfig};
