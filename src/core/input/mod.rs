//=========================================================================
// Input
//=========================================================================
//
// Read-only input state for scene ticks.
//
// Components:
// - `event`: portable input events
// - `state_tracker`: folds a frame's events into queryable state
//
// Scenes only see the InputQuery trait, so tests can drive them with a
// tracker fed from plain event vectors.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use state_tracker::StateTracker;

//=== InputQuery ==========================================================

/// Input queries available during [`Scene::tick`](crate::core::scene::Scene::tick).
pub trait InputQuery {
    /// Key went down this frame.
    fn is_key_pressed(&self, key: KeyCode) -> bool;

    /// Key is held.
    fn is_key_down(&self, key: KeyCode) -> bool;

    /// Key went up this frame.
    fn is_key_released(&self, key: KeyCode) -> bool;

    /// Any key went down this frame.
    fn any_key_pressed(&self) -> bool;

    /// Button went down this frame.
    fn is_button_pressed(&self, button: MouseButton) -> bool;

    /// Cursor position in window pixels.
    fn mouse_position(&self) -> (f32, f32);

    fn modifiers(&self) -> Modifiers;
}
