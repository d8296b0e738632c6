//=========================================================================
// Input Processor
//=========================================================================
//
// Translates winit window events into portable InputEvents.
//
// Modifier state arrives separately (ModifiersChanged) and is stamped on
// every key and button event that follows. OS auto-repeat is filtered:
// a held key produces one KeyDown, and holding is tracked by the core.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== InputProcessor ======================================================

pub(crate) struct InputProcessor {
    modifiers: Modifiers,
}

impl InputProcessor {
    pub(crate) fn new() -> Self {
        Self {
            modifiers: Modifiers::NONE,
        }
    }

    pub(crate) fn update_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = Modifiers::from(state);
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a keyboard event. Repeats and unmapped keys yield `None`.
    pub(crate) fn process_key_event(&self, event: &KeyEvent) -> Option<InputEvent> {
        self.process_key(event.physical_key, event.state, event.repeat)
    }

    pub(crate) fn process_key(
        &self,
        physical_key: PhysicalKey,
        state: ElementState,
        repeat: bool,
    ) -> Option<InputEvent> {
        if repeat {
            return None;
        }

        let key = match physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            PhysicalKey::Unidentified(_) => return None,
        };
        if key == KeyCode::Unidentified {
            return None;
        }

        let modifiers = self.modifiers;
        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown { key, modifiers },
            ElementState::Released => InputEvent::KeyUp { key, modifiers },
        })
    }

    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let button = MouseButton::from(button);
        let modifiers = self.modifiers;

        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown { button, modifiers },
            ElementState::Released => InputEvent::MouseButtonUp { button, modifiers },
        }
    }

    pub(crate) fn process_cursor_moved(&self, x: f64, y: f64) -> InputEvent {
        InputEvent::MouseMoved {
            x: x as f32,
            y: y as f32,
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

/// Keys outside the portable set map to [`KeyCode::Unidentified`].
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode as W;

        match code {
            W::Digit0 => Self::Digit0, W::Digit1 => Self::Digit1,
            W::Digit2 => Self::Digit2, W::Digit3 => Self::Digit3,
            W::Digit4 => Self::Digit4, W::Digit5 => Self::Digit5,
            W::Digit6 => Self::Digit6, W::Digit7 => Self::Digit7,
            W::Digit8 => Self::Digit8, W::Digit9 => Self::Digit9,

            W::KeyA => Self::KeyA, W::KeyB => Self::KeyB, W::KeyC => Self::KeyC,
            W::KeyD => Self::KeyD, W::KeyE => Self::KeyE, W::KeyF => Self::KeyF,
            W::KeyG => Self::KeyG, W::KeyH => Self::KeyH, W::KeyI => Self::KeyI,
            W::KeyJ => Self::KeyJ, W::KeyK => Self::KeyK, W::KeyL => Self::KeyL,
            W::KeyM => Self::KeyM, W::KeyN => Self::KeyN, W::KeyO => Self::KeyO,
            W::KeyP => Self::KeyP, W::KeyQ => Self::KeyQ, W::KeyR => Self::KeyR,
            W::KeyS => Self::KeyS, W::KeyT => Self::KeyT, W::KeyU => Self::KeyU,
            W::KeyV => Self::KeyV, W::KeyW => Self::KeyW, W::KeyX => Self::KeyX,
            W::KeyY => Self::KeyY, W::KeyZ => Self::KeyZ,

            W::ArrowUp => Self::ArrowUp,
            W::ArrowDown => Self::ArrowDown,
            W::ArrowLeft => Self::ArrowLeft,
            W::ArrowRight => Self::ArrowRight,

            W::Space => Self::Space,
            W::Enter | W::NumpadEnter => Self::Enter,
            W::Escape => Self::Escape,
            W::Tab => Self::Tab,
            W::Backspace => Self::Backspace,
            W::Delete => Self::Delete,

            _ => Self::Unidentified,
        }
    }
}

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => Self::Left,
            WinitMouseButton::Right => Self::Right,
            WinitMouseButton::Middle => Self::Middle,
            _ => Self::Other,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    fn pressed(processor: &InputProcessor, code: WinitKeyCode) -> Option<InputEvent> {
        processor.process_key(PhysicalKey::Code(code), ElementState::Pressed, false)
    }

    #[test]
    fn key_press_and_release_convert() {
        let processor = InputProcessor::new();

        assert_eq!(
            pressed(&processor, WinitKeyCode::Enter),
            Some(InputEvent::key_down(KeyCode::Enter))
        );
        assert_eq!(
            processor.process_key(
                PhysicalKey::Code(WinitKeyCode::Escape),
                ElementState::Released,
                false
            ),
            Some(InputEvent::key_up(KeyCode::Escape))
        );
    }

    #[test]
    fn auto_repeat_is_filtered() {
        let processor = InputProcessor::new();

        let event = processor.process_key(
            PhysicalKey::Code(WinitKeyCode::ArrowDown),
            ElementState::Pressed,
            true,
        );

        assert!(event.is_none());
    }

    #[test]
    fn unmapped_keys_are_filtered() {
        let processor = InputProcessor::new();

        assert!(pressed(&processor, WinitKeyCode::F13).is_none());
        assert!(processor
            .process_key(
                PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
                ElementState::Pressed,
                false
            )
            .is_none());
    }

    #[test]
    fn modifiers_are_stamped_on_events() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(ModifiersState::CONTROL | ModifiersState::SHIFT);

        let key = pressed(&processor, WinitKeyCode::KeyS);
        let click = processor.process_mouse_button(WinitMouseButton::Left, ElementState::Pressed);

        let expected = Modifiers { shift: true, ctrl: true, alt: false };
        assert_eq!(key.and_then(|event| event.modifiers()), Some(expected));
        assert_eq!(click.modifiers(), Some(expected));
    }

    #[test]
    fn cursor_position_is_narrowed() {
        let processor = InputProcessor::new();

        assert_eq!(
            processor.process_cursor_moved(123.5, 456.25),
            InputEvent::MouseMoved { x: 123.5, y: 456.25 }
        );
    }

    #[test]
    fn numpad_enter_confirms_like_enter() {
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadEnter), KeyCode::Enter);
    }

    #[test]
    fn mouse_buttons_convert() {
        assert_eq!(MouseButton::from(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(MouseButton::from(WinitMouseButton::Back), MouseButton::Other);
    }
}
