//=========================================================================
// Input Events
//=========================================================================
//
// Portable key, button and pointer events.
//
// Event Flow:
// ```text
// winit WindowEvent
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (per-frame key state)
//         ↓
//    Scene::tick via InputQuery
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Side, thumb and macro buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical key location, independent of keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Navigation -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Any key the input layer does not map.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier keys held when an event fired. Left and right are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    /// Ctrl, or Command on macOS.
    pub ctrl: bool,
    /// Alt, or Option on macOS.
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };

    /// Returns `true` if no modifier is held.
    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }
}

//=== InputEvent ==========================================================

/// One input event, as delivered to the frame driver.
///
/// Key and button events are discrete and order-significant. Pointer
/// motion is continuous: only the latest position in a frame matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown { key: KeyCode, modifiers: Modifiers },
    KeyUp { key: KeyCode, modifiers: Modifiers },
    MouseButtonDown { button: MouseButton, modifiers: Modifiers },
    MouseButtonUp { button: MouseButton, modifiers: Modifiers },
    /// Cursor position in window pixels, top-left origin.
    MouseMoved { x: f32, y: f32 },
}

impl InputEvent {
    /// Plain key press without modifiers.
    pub fn key_down(key: KeyCode) -> Self {
        Self::KeyDown { key, modifiers: Modifiers::NONE }
    }

    /// Plain key release without modifiers.
    pub fn key_up(key: KeyCode) -> Self {
        Self::KeyUp { key, modifiers: Modifiers::NONE }
    }

    /// Returns `true` for pointer motion, which is coalesced per frame.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::MouseMoved { .. })
    }

    /// Modifier state carried by the event, if it has one.
    pub fn modifiers(&self) -> Option<Modifiers> {
        match self {
            Self::KeyDown { modifiers, .. }
            | Self::KeyUp { modifiers, .. }
            | Self::MouseButtonDown { modifiers, .. }
            | Self::MouseButtonUp { modifiers, .. } => Some(*modifiers),
            Self::MouseMoved { .. } => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_helpers_carry_no_modifiers() {
        let event = InputEvent::key_down(KeyCode::Enter);
        assert_eq!(event.modifiers(), Some(Modifiers::NONE));
        assert_ne!(event, InputEvent::key_up(KeyCode::Enter));
    }

    #[test]
    fn only_pointer_motion_is_continuous() {
        assert!(InputEvent::MouseMoved { x: 1.0, y: 2.0 }.is_continuous());
        assert!(!InputEvent::key_down(KeyCode::Space).is_continuous());
        assert!(!InputEvent::key_up(KeyCode::Space).is_continuous());
    }

    #[test]
    fn pointer_motion_has_no_modifiers() {
        assert_eq!(InputEvent::MouseMoved { x: 0.0, y: 0.0 }.modifiers(), None);
    }

    #[test]
    fn modifiers_default_to_none() {
        assert!(Modifiers::default().is_empty());
        assert!(!Modifiers::SHIFT.is_empty());
    }

    #[test]
    fn events_compare_by_payload() {
        let plain = InputEvent::key_down(KeyCode::KeyA);
        let ctrl = InputEvent::KeyDown { key: KeyCode::KeyA, modifiers: Modifiers::CTRL };
        assert_ne!(plain, ctrl);
        assert_eq!(plain, InputEvent::key_down(KeyCode::KeyA));
    }
}
