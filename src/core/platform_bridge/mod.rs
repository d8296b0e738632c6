//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the window host and the frame driver.
//
// Components:
// - `interface`: event and error types crossing the boundary
// - `event_collector`: core-side draining of the event channel
//
// The host only ever sends PlatformEvents, so the driver can be fed by
// winit in production and by a plain channel sender in tests.
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Public API ==========================================================

pub(crate) use event_collector::EventCollector;
pub use event_collector::TickControl;
pub use interface::{PlatformError, PlatformEvent};
