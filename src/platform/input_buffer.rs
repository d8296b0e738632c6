//=========================================================================
// Input Buffer
//=========================================================================
//
// Accumulates winit input between two frame boundaries.
//
// Discrete events (keys, buttons) keep their order; an event identical to
// the one just before it is dropped. Pointer motion is coalesced: only the
// latest position survives until the next drain.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    pointer: Option<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 64;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            pointer: None,
        }
    }

    /// Records an event. Pointer motion replaces any earlier motion this
    /// frame; a key or button event is dropped if it repeats the last one.
    pub(crate) fn push(&mut self, event: InputEvent) {
        if event.is_continuous() {
            self.pointer = Some(event);
        } else if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    /// Takes this frame's `(discrete, continuous)` events.
    ///
    /// Returns `None` when nothing was buffered.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let discrete = std::mem::take(&mut self.discrete);
        let continuous = self.pointer.take().into_iter().collect();
        Some((discrete, continuous))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.pointer.is_none()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
