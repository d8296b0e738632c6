//=========================================================================
// State Tracker
//=========================================================================
//
// Per-frame input state fed to scene ticks.
//
// Architecture:
//   batches → begin_frame() → HashSet (held) + frame deltas → InputQuery
//
// Held keys survive the frame boundary; pressed/released flags do not.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, Modifiers, MouseButton};
use super::InputQuery;

//=== StateTracker ========================================================

#[derive(Debug, Default)]
pub struct StateTracker {
    //--- Persistent State -------------------------------------------------
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),
    modifiers: Modifiers,

    //--- Frame Deltas -----------------------------------------------------
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
    buttons_pressed: HashSet<MouseButton>,
}

impl StateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Starts a new frame: clears last frame's deltas, then applies the
    /// collected batches in arrival order.
    pub fn begin_frame(&mut self, batches: &[Vec<InputEvent>]) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();

        for batch in batches {
            self.process_events(batch);
        }
    }

    /// Applies events on top of the current frame's state.
    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_event(&mut self, event: &InputEvent) {
        if let Some(modifiers) = event.modifiers() {
            self.modifiers = modifiers;
        }

        match *event {
            InputEvent::KeyDown { key, .. } => {
                // Repeats of a held key are not new presses
                if self.keys_down.insert(key) {
                    self.keys_pressed.insert(key);
                }
            }
            InputEvent::KeyUp { key, .. } => {
                if self.keys_down.remove(&key) {
                    self.keys_released.insert(key);
                }
            }
            InputEvent::MouseButtonDown { button, .. } => {
                if self.buttons_down.insert(button) {
                    self.buttons_pressed.insert(button);
                }
            }
            InputEvent::MouseButtonUp { button, .. } => {
                self.buttons_down.remove(&button);
            }
            InputEvent::MouseMoved { x, y } => self.mouse_position = (x, y),
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl InputQuery for StateTracker {
    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    fn any_key_pressed(&self) -> bool {
        !self.keys_pressed.is_empty()
    }

    fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
